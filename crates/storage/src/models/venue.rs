use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Venue {
    pub venue_id: i64,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub created_at: chrono::NaiveDateTime,
}
