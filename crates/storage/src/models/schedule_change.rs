use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One audit entry per schedule update. Rows are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScheduleChange {
    pub change_id: i64,
    pub schedule_id: i64,
    pub event_id: i64,
    pub old_date: NaiveDate,
    pub new_date: NaiveDate,
    pub old_time: NaiveTime,
    pub new_time: NaiveTime,
    pub old_venue_id: i64,
    pub new_venue_id: i64,
    pub changed_at: NaiveDateTime,
}

/// A change entry that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScheduleChange {
    pub schedule_id: i64,
    pub event_id: i64,
    pub old_date: NaiveDate,
    pub new_date: NaiveDate,
    pub old_time: NaiveTime,
    pub new_time: NaiveTime,
    pub old_venue_id: i64,
    pub new_venue_id: i64,
    pub changed_at: NaiveDateTime,
}
