use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::StorageError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventParticipant {
    pub event_id: i64,
    pub participant_id: i64,
    pub score: Option<Decimal>,
    pub ranking: Option<i32>,
}

/// Raw row shape; scores are kept as canonical decimal text in the store.
#[derive(Debug, FromRow)]
pub(crate) struct EventParticipantRow {
    pub event_id: i64,
    pub participant_id: i64,
    pub score: Option<String>,
    pub ranking: Option<i32>,
}

impl TryFrom<EventParticipantRow> for EventParticipant {
    type Error = StorageError;

    fn try_from(row: EventParticipantRow) -> Result<Self, Self::Error> {
        let score = row
            .score
            .as_deref()
            .map(Decimal::from_str)
            .transpose()
            .map_err(|e| {
                StorageError::InvalidData(format!(
                    "score for event {} participant {}: {}",
                    row.event_id, row.participant_id, e
                ))
            })?;

        Ok(Self {
            event_id: row.event_id,
            participant_id: row.participant_id,
            score,
            ranking: row.ranking,
        })
    }
}
