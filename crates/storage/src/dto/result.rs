use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnrollParticipantRequest {
    pub participant_id: i64,
}

/// Score and ranking are both optional: team events and entries that
/// have not been scored yet leave them empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RecordResultRequest {
    #[serde(default)]
    pub score: Option<Decimal>,
    #[serde(default)]
    pub ranking: Option<i32>,
}
