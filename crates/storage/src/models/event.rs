use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// The original plan for an event. Rescheduling never touches this row;
/// the live values are in [`super::Schedule`].
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: i64,
    pub sport_type: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue_id: i64,
    pub created_at: chrono::NaiveDateTime,
}
