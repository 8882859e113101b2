use super::models::*;
use crate::{ImporterError, Result};
use sqlx::SqlitePool;
use std::collections::HashMap;
use storage::dto::{
    event::CreateEventRequest, participant::CreateParticipantRequest,
    result::RecordResultRequest, schedule::RescheduleRequest, venue::CreateVenueRequest,
};
use storage::services::{catalog, results, schedule};
use tracing::{debug, info};

/// Number of rows written by one import.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub venues: usize,
    pub participants: usize,
    pub events: usize,
    pub entries: usize,
    pub reschedules: usize,
}

/// Writes a validated canonical file through the storage services, so event
/// creation derives schedules, entries pass the eligibility gate and
/// reschedules land in the audit log exactly as they would over HTTP.
pub struct CanonicalTransformer<'a> {
    pool: &'a SqlitePool,
}

#[derive(Default)]
struct KeyMap {
    venues: HashMap<String, i64>,
    participants: HashMap<String, i64>,
    schedules: HashMap<String, i64>,
}

impl<'a> CanonicalTransformer<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn import_to_database(&self, canonical: CanonicalFormat) -> Result<ImportSummary> {
        let mut keys = KeyMap::default();
        let mut summary = ImportSummary::default();

        for venue in &canonical.venues {
            let id = self.import_venue(venue).await?;
            keys.venues.insert(venue.key.clone(), id);
            summary.venues += 1;
        }

        for participant in &canonical.participants {
            let id = self.import_participant(participant).await?;
            keys.participants.insert(participant.key.clone(), id);
            summary.participants += 1;
        }

        for event in &canonical.events {
            let venue_id = lookup(&keys.venues, "venue", &event.venue)?;
            let created = catalog::create_event(
                self.pool,
                &CreateEventRequest {
                    sport_type: event.sport_type.clone(),
                    event_date: event.event_date,
                    event_time: event.event_time,
                    venue_id,
                },
            )
            .await?;
            keys.schedules
                .insert(event.key.clone(), created.schedule.schedule_id);
            summary.events += 1;

            for entry in &event.entries {
                let participant_id = lookup(&keys.participants, "participant", &entry.participant)?;
                self.import_entry(created.event_id, participant_id, entry)
                    .await?;
                summary.entries += 1;
            }
        }

        for reschedule in &canonical.reschedules {
            let schedule_id = lookup(&keys.schedules, "event", &reschedule.event)?;
            let venue_id = lookup(&keys.venues, "venue", &reschedule.venue)?;
            schedule::reschedule(
                self.pool,
                schedule_id,
                &RescheduleRequest {
                    scheduled_date: reschedule.scheduled_date,
                    scheduled_time: reschedule.scheduled_time,
                    venue_id,
                },
            )
            .await?;
            summary.reschedules += 1;
        }

        info!(
            venues = summary.venues,
            participants = summary.participants,
            events = summary.events,
            entries = summary.entries,
            reschedules = summary.reschedules,
            "Import finished"
        );

        Ok(summary)
    }

    async fn import_venue(&self, venue: &VenueData) -> Result<i64> {
        let created = catalog::create_venue(
            self.pool,
            &CreateVenueRequest {
                name: venue.name.clone(),
                location: venue.location.clone(),
                capacity: venue.capacity,
            },
        )
        .await?;

        debug!(key = %venue.key, venue_id = created.venue_id, "Venue imported");
        Ok(created.venue_id)
    }

    async fn import_participant(&self, participant: &ParticipantData) -> Result<i64> {
        let gender = participant.parsed_gender().ok_or_else(|| {
            ImporterError::TransformationError(format!(
                "Participant '{}' has unsupported gender '{}'",
                participant.key, participant.gender
            ))
        })?;

        let created = catalog::create_participant(
            self.pool,
            &CreateParticipantRequest {
                name: participant.name.clone(),
                nationality: participant.nationality.clone(),
                age: participant.age,
                gender,
            },
        )
        .await?;

        debug!(
            key = %participant.key,
            participant_id = created.participant_id,
            "Participant imported"
        );
        Ok(created.participant_id)
    }

    async fn import_entry(&self, event_id: i64, participant_id: i64, entry: &EntryData) -> Result<()> {
        if entry.has_result() {
            results::record_result(
                self.pool,
                event_id,
                participant_id,
                &RecordResultRequest {
                    score: entry.score,
                    ranking: entry.ranking,
                },
            )
            .await?;
        } else {
            results::enroll_participant(self.pool, event_id, participant_id).await?;
        }

        Ok(())
    }
}

fn lookup(ids: &HashMap<String, i64>, kind: &str, key: &str) -> Result<i64> {
    ids.get(key).copied().ok_or_else(|| {
        ImporterError::TransformationError(format!("Unknown {} key: '{}'", kind, key))
    })
}
