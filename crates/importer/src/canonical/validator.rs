use super::FORMAT_VERSION;
use super::models::CanonicalFormat;
use crate::{ImporterError, Result};
use std::collections::{HashMap, HashSet};
use storage::services::eligibility::{MIN_ENROLLMENT_AGE, MIN_PARTICIPANT_AGE};
use tracing::warn;

pub struct CanonicalValidator;

impl CanonicalValidator {
    /// Validates `canonical`, failing if the report carries any error.
    pub fn validate(canonical: &CanonicalFormat) -> Result<ValidationReport> {
        let report = Self::inspect(canonical);

        if !report.errors.is_empty() {
            Err(ImporterError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }

    /// Collects every error and warning without stopping at the first one.
    pub fn inspect(canonical: &CanonicalFormat) -> ValidationReport {
        let mut report = ValidationReport::default();

        if canonical.format_version != FORMAT_VERSION {
            report.errors.push(format!(
                "Unsupported format version: {}. Expected {}",
                canonical.format_version, FORMAT_VERSION
            ));
        }

        if canonical.events.is_empty() {
            report.warnings.push("File contains no events".to_string());
        }

        let mut venue_keys = HashSet::new();
        for venue in &canonical.venues {
            if venue.key.is_empty() {
                report.errors.push("Venue key cannot be empty".to_string());
            }
            if !venue_keys.insert(venue.key.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate venue key: '{}'", venue.key));
            }
            if venue.name.is_empty() {
                report
                    .errors
                    .push(format!("Venue '{}' has empty name", venue.key));
            }
            if venue.location.is_empty() {
                report
                    .errors
                    .push(format!("Venue '{}' has empty location", venue.key));
            }
            if venue.capacity < 0 {
                report.errors.push(format!(
                    "Venue '{}' has negative capacity: {}",
                    venue.key, venue.capacity
                ));
            } else if venue.capacity == 0 {
                report
                    .warnings
                    .push(format!("Venue '{}' has zero capacity", venue.key));
            }
        }

        let mut ages = HashMap::new();
        for participant in &canonical.participants {
            if ages.insert(participant.key.as_str(), participant.age).is_some() {
                report
                    .errors
                    .push(format!("Duplicate participant key: '{}'", participant.key));
            }
            if participant.name.is_empty() {
                report
                    .errors
                    .push(format!("Participant '{}' has empty name", participant.key));
            }
            if participant.nationality.is_empty() {
                report.errors.push(format!(
                    "Participant '{}' has empty nationality",
                    participant.key
                ));
            }
            if participant.age < MIN_PARTICIPANT_AGE {
                report.errors.push(format!(
                    "Participant '{}' has invalid age {}. Age must be >= {}",
                    participant.key, participant.age, MIN_PARTICIPANT_AGE
                ));
            }
            if participant.parsed_gender().is_none() {
                report.errors.push(format!(
                    "Invalid gender for participant '{}': '{}'. Must be 'Male', 'Female' or 'Other'",
                    participant.key, participant.gender
                ));
            }
        }

        let mut event_keys = HashSet::new();
        let mut entered = HashSet::new();
        for event in &canonical.events {
            if !event_keys.insert(event.key.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate event key: '{}'", event.key));
            }
            if event.sport_type.is_empty() {
                report
                    .errors
                    .push(format!("Event '{}' has empty sport_type", event.key));
            }
            if !venue_keys.contains(event.venue.as_str()) {
                report.errors.push(format!(
                    "Event '{}' references unknown venue: '{}'",
                    event.key, event.venue
                ));
            }
            if event.entries.is_empty() {
                report
                    .warnings
                    .push(format!("Event '{}' has no entries", event.key));
            }

            let mut seen = HashSet::new();
            for entry in &event.entries {
                let participant = entry.participant.as_str();
                entered.insert(participant);

                if !seen.insert(participant) {
                    report.errors.push(format!(
                        "Event '{}' enters participant '{}' twice",
                        event.key, participant
                    ));
                }

                match ages.get(participant) {
                    None => report.errors.push(format!(
                        "Event '{}' references unknown participant: '{}'",
                        event.key, participant
                    )),
                    Some(&age) if age < MIN_ENROLLMENT_AGE => report.errors.push(format!(
                        "Participant '{}' (age {}) is too young to enter event '{}'. Age must be >= {}",
                        participant, age, event.key, MIN_ENROLLMENT_AGE
                    )),
                    Some(_) => {}
                }

                if let Some(ranking) = entry.ranking.filter(|r| *r < 1) {
                    report.errors.push(format!(
                        "Event '{}', participant '{}': invalid ranking {}. Ranking must be >= 1",
                        event.key, participant, ranking
                    ));
                }
            }
        }

        for participant in &canonical.participants {
            if !entered.contains(participant.key.as_str()) {
                report.warnings.push(format!(
                    "Participant '{}' is not entered in any event",
                    participant.key
                ));
            }
        }

        for (idx, reschedule) in canonical.reschedules.iter().enumerate() {
            if !event_keys.contains(reschedule.event.as_str()) {
                report.errors.push(format!(
                    "Reschedule #{} references unknown event: '{}'",
                    idx + 1,
                    reschedule.event
                ));
            }
            if !venue_keys.contains(reschedule.venue.as_str()) {
                report.errors.push(format!(
                    "Reschedule #{} references unknown venue: '{}'",
                    idx + 1,
                    reschedule.venue
                ));
            }
        }

        report
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}
