use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Event, Schedule};

/// Request payload for creating an event. The live schedule is derived from it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Sport type must be between 1 and 100 characters"
    ))]
    pub sport_type: String,

    pub event_date: NaiveDate,

    pub event_time: NaiveTime,

    pub venue_id: i64,
}

/// Event as originally planned, alongside its current live schedule
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub event_id: i64,
    pub sport_type: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue_id: i64,
    pub created_at: NaiveDateTime,
    pub schedule: Schedule,
}

impl EventResponse {
    pub fn new(event: Event, schedule: Schedule) -> Self {
        Self {
            event_id: event.event_id,
            sport_type: event.sport_type,
            event_date: event.event_date,
            event_time: event.event_time,
            venue_id: event.venue_id,
            created_at: event.created_at,
            schedule,
        }
    }
}
