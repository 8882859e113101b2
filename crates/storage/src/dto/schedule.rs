use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// New live values for a schedule row. All three fields are replaced.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RescheduleRequest {
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub venue_id: i64,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScheduleFilter {
    /// Only return entries scheduled on this date (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
}

/// Live schedule row joined with its event and venue names
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScheduleEntry {
    pub schedule_id: i64,
    pub event_id: i64,
    pub sport_type: String,
    pub venue_id: i64,
    pub venue_name: String,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
}
