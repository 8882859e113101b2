use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Schedule {
    pub schedule_id: i64,
    pub event_id: i64,
    pub venue_id: i64,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
}

/// The mutable part of a schedule row: where and when it currently happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleSnapshot {
    pub venue_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl From<&Schedule> for ScheduleSnapshot {
    fn from(schedule: &Schedule) -> Self {
        Self {
            venue_id: schedule.venue_id,
            date: schedule.scheduled_date,
            time: schedule.scheduled_time,
        }
    }
}
