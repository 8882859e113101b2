//! Canonical tournament fixture format.
//!
//! Records reference each other through string keys chosen by the author of
//! the file; database ids are only assigned during import.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storage::models::Gender;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalFormat {
    pub format_version: String,
    pub source: SourceMetadata,
    pub venues: Vec<VenueData>,
    pub participants: Vec<ParticipantData>,
    pub events: Vec<EventData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reschedules: Vec<RescheduleData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    #[serde(rename = "type")]
    pub r#type: SourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Manual,
    Csv,
    Export,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueData {
    pub key: String,
    pub name: String,
    pub location: String,
    pub capacity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantData {
    pub key: String,
    pub name: String,
    pub nationality: String,
    pub age: i32,
    pub gender: String,
}

impl ParticipantData {
    /// Maps the free-form gender text onto the closed set the store accepts.
    pub fn parsed_gender(&self) -> Option<Gender> {
        match self.gender.as_str() {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventData {
    pub key: String,
    pub sport_type: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue: String,
    #[serde(default)]
    pub entries: Vec<EntryData>,
}

/// Enrollment of a participant, optionally with a result already known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryData {
    pub participant: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<i32>,
}

impl EntryData {
    pub fn has_result(&self) -> bool {
        self.score.is_some() || self.ranking.is_some()
    }
}

/// Move applied to an event's live schedule after it has been created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleData {
    pub event: String,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub venue: String,
}
