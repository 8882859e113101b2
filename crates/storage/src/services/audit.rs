//! Append-only history of live schedule changes.
//!
//! Entries are written on the same transaction as the schedule update that
//! produced them, so a failed insert here rolls the update back too.

use chrono::{NaiveDateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};

use crate::error::{Result, StorageError};
use crate::models::{NewScheduleChange, Schedule, ScheduleChange, ScheduleSnapshot};
use crate::repository::schedule::ScheduleRepository;
use crate::repository::schedule_change::{self, ScheduleChangeRepository};

/// Builds the change entry for `schedule` moving from `before` to `after`.
pub fn draft_change(
    schedule: &Schedule,
    before: ScheduleSnapshot,
    after: ScheduleSnapshot,
    changed_at: NaiveDateTime,
) -> NewScheduleChange {
    NewScheduleChange {
        schedule_id: schedule.schedule_id,
        event_id: schedule.event_id,
        old_date: before.date,
        new_date: after.date,
        old_time: before.time,
        new_time: after.time,
        old_venue_id: before.venue_id,
        new_venue_id: after.venue_id,
        changed_at,
    }
}

/// Persists one change entry, stamped with the current UTC time.
pub async fn record_change(
    conn: &mut SqliteConnection,
    schedule: &Schedule,
    before: ScheduleSnapshot,
    after: ScheduleSnapshot,
) -> Result<ScheduleChange> {
    let draft = draft_change(schedule, before, after, Utc::now().naive_utc());
    let change = schedule_change::insert(conn, &draft).await?;

    tracing::info!(
        change_id = change.change_id,
        schedule_id = change.schedule_id,
        event_id = change.event_id,
        ?before,
        ?after,
        "Schedule change recorded"
    );

    Ok(change)
}

/// History of a schedule row in the order the updates happened
pub async fn schedule_history(pool: &SqlitePool, schedule_id: i64) -> Result<Vec<ScheduleChange>> {
    if !ScheduleRepository::new(pool).exists(schedule_id).await? {
        return Err(StorageError::NotFound);
    }

    ScheduleChangeRepository::new(pool)
        .list_for_schedule(schedule_id)
        .await
}
