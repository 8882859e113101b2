use sqlx::SqlitePool;

use crate::dto::event::{CreateEventRequest, EventResponse};
use crate::dto::participant::{CreateParticipantRequest, ParticipantFilter};
use crate::dto::venue::CreateVenueRequest;
use crate::error::Result;
use crate::models::{Event, Participant, Venue};
use crate::repository::event::{self as event_repo, EventRepository};
use crate::repository::participant::ParticipantRepository;
use crate::repository::schedule::ScheduleRepository;
use crate::repository::venue::VenueRepository;

use super::{eligibility, schedule};

/// Create a new venue
pub async fn create_venue(pool: &SqlitePool, request: &CreateVenueRequest) -> Result<Venue> {
    let venue = VenueRepository::new(pool).create(request).await?;
    tracing::info!(venue_id = venue.venue_id, name = %venue.name, "Venue created");
    Ok(venue)
}

/// Get venue by ID
pub async fn get_venue(pool: &SqlitePool, venue_id: i64) -> Result<Venue> {
    VenueRepository::new(pool).find_by_id(venue_id).await
}

/// List all venues
pub async fn list_venues(pool: &SqlitePool) -> Result<Vec<Venue>> {
    VenueRepository::new(pool).list().await
}

/// Register a participant after checking the registration age floor
pub async fn create_participant(
    pool: &SqlitePool,
    request: &CreateParticipantRequest,
) -> Result<Participant> {
    if let Err(e) = eligibility::validate_participant_age(request.age) {
        tracing::warn!(age = request.age, "Participant registration rejected");
        return Err(e.into());
    }

    let participant = ParticipantRepository::new(pool).create(request).await?;
    tracing::info!(
        participant_id = participant.participant_id,
        "Participant registered"
    );
    Ok(participant)
}

/// Get participant by ID
pub async fn get_participant(pool: &SqlitePool, participant_id: i64) -> Result<Participant> {
    ParticipantRepository::new(pool)
        .find_by_id(participant_id)
        .await
}

/// List participants, optionally restricted to one nationality
pub async fn list_participants(
    pool: &SqlitePool,
    filter: &ParticipantFilter,
) -> Result<Vec<Participant>> {
    let repo = ParticipantRepository::new(pool);
    match filter.nationality.as_deref() {
        Some(nationality) => repo.list_by_nationality(nationality).await,
        None => repo.list().await,
    }
}

/// Create an event together with its live schedule row
pub async fn create_event(pool: &SqlitePool, request: &CreateEventRequest) -> Result<EventResponse> {
    let mut tx = pool.begin().await?;

    // Must stay the first statement: it takes the write lock. An unknown
    // venue fails the foreign key and surfaces as a constraint violation.
    let event = event_repo::insert(&mut tx, request).await?;
    let live = schedule::derive_schedule_for_new_event(&mut tx, &event).await?;

    tx.commit().await?;

    tracing::info!(
        event_id = event.event_id,
        schedule_id = live.schedule_id,
        sport_type = %event.sport_type,
        "Event created"
    );

    Ok(EventResponse::new(event, live))
}

/// Get event by ID
pub async fn get_event(pool: &SqlitePool, event_id: i64) -> Result<Event> {
    EventRepository::new(pool).find_by_id(event_id).await
}

/// Get event with its current live schedule
pub async fn get_event_detailed(pool: &SqlitePool, event_id: i64) -> Result<EventResponse> {
    let event = get_event(pool, event_id).await?;
    let live = ScheduleRepository::new(pool).find_by_event(event_id).await?;
    Ok(EventResponse::new(event, live))
}

/// List all events as originally planned
pub async fn list_events(pool: &SqlitePool) -> Result<Vec<Event>> {
    EventRepository::new(pool).list().await
}
