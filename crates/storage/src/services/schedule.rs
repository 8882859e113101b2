//! Live schedule management.
//!
//! A schedule row is derived from its event when the event is created and is
//! edited independently afterwards. Every edit is written together with its
//! audit entry.

use sqlx::{SqliteConnection, SqlitePool};

use crate::dto::schedule::{RescheduleRequest, ScheduleEntry, ScheduleFilter};
use crate::error::{Result, StorageError};
use crate::models::{Event, Schedule, ScheduleSnapshot};
use crate::repository::schedule::{self as schedule_repo, ScheduleRepository};
use crate::repository::venue;

use super::audit;

/// Creates the live schedule row for an event that was just inserted on `conn`.
///
/// Only the event creation path calls this. A second call for the same event
/// hits the one-schedule-per-event constraint and fails.
pub async fn derive_schedule_for_new_event(
    conn: &mut SqliteConnection,
    event: &Event,
) -> Result<Schedule> {
    let schedule = schedule_repo::insert_for_event(conn, event).await?;

    tracing::debug!(
        event_id = event.event_id,
        schedule_id = schedule.schedule_id,
        "Live schedule derived from event"
    );

    Ok(schedule)
}

/// Moves a schedule row to a new date, time and venue.
///
/// The row is locked first, so concurrent reschedules of the same row are
/// serialized and each audit entry records the state it actually replaced.
/// The originating event is never modified.
pub async fn reschedule(
    pool: &SqlitePool,
    schedule_id: i64,
    req: &RescheduleRequest,
) -> Result<Schedule> {
    let mut tx = pool.begin().await?;

    schedule_repo::lock(&mut tx, schedule_id).await?;
    let current = schedule_repo::find_in(&mut tx, schedule_id).await?;

    if !venue::exists(&mut tx, req.venue_id).await? {
        tracing::warn!(schedule_id, venue_id = req.venue_id, "Reschedule to unknown venue");
        return Err(StorageError::ConstraintViolation(format!(
            "Venue {} does not exist",
            req.venue_id
        )));
    }

    let updated = schedule_repo::update(&mut tx, schedule_id, req).await?;

    audit::record_change(
        &mut tx,
        &updated,
        ScheduleSnapshot::from(&current),
        ScheduleSnapshot::from(&updated),
    )
    .await?;

    tx.commit().await?;

    Ok(updated)
}

/// Get a schedule row by ID
pub async fn get_schedule(pool: &SqlitePool, schedule_id: i64) -> Result<Schedule> {
    ScheduleRepository::new(pool).find_by_id(schedule_id).await
}

/// Get the live schedule of an event
pub async fn schedule_for_event(pool: &SqlitePool, event_id: i64) -> Result<Schedule> {
    ScheduleRepository::new(pool).find_by_event(event_id).await
}

/// List the live schedule, optionally for a single date
pub async fn list_schedule(pool: &SqlitePool, filter: &ScheduleFilter) -> Result<Vec<ScheduleEntry>> {
    ScheduleRepository::new(pool).list(filter).await
}
