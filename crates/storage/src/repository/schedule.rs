use sqlx::{SqliteConnection, SqlitePool};

use crate::dto::schedule::{RescheduleRequest, ScheduleEntry, ScheduleFilter};
use crate::error::{Result, StorageError};
use crate::models::{Event, Schedule};

/// Repository for the live schedule
pub struct ScheduleRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List live schedule entries, optionally restricted to a single date
    pub async fn list(&self, filter: &ScheduleFilter) -> Result<Vec<ScheduleEntry>> {
        let entries = sqlx::query_as::<_, ScheduleEntry>(
            r#"
            SELECT s.schedule_id, s.event_id, e.sport_type, s.venue_id, v.name AS venue_name,
                   s.scheduled_date, s.scheduled_time
            FROM schedules s
            JOIN events e ON e.event_id = s.event_id
            JOIN venues v ON v.venue_id = s.venue_id
            WHERE ?1 IS NULL OR s.scheduled_date = ?1
            ORDER BY s.scheduled_date, s.scheduled_time, s.schedule_id
            "#,
        )
        .bind(filter.date)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Get a schedule row by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Schedule> {
        let schedule = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT schedule_id, event_id, venue_id, scheduled_date, scheduled_time
            FROM schedules
            WHERE schedule_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(schedule)
    }

    /// Get the live schedule row of an event
    pub async fn find_by_event(&self, event_id: i64) -> Result<Schedule> {
        let schedule = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT schedule_id, event_id, venue_id, scheduled_date, scheduled_time
            FROM schedules
            WHERE event_id = ?1
            "#,
        )
        .bind(event_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(schedule)
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM schedules WHERE schedule_id = ?1)",
        )
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        Ok(exists)
    }
}

/// Inserts the live schedule row of a freshly created event, copying its plan.
pub(crate) async fn insert_for_event(conn: &mut SqliteConnection, event: &Event) -> Result<Schedule> {
    let schedule = sqlx::query_as::<_, Schedule>(
        r#"
        INSERT INTO schedules (event_id, venue_id, scheduled_date, scheduled_time)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING schedule_id, event_id, venue_id, scheduled_date, scheduled_time
        "#,
    )
    .bind(event.event_id)
    .bind(event.venue_id)
    .bind(event.event_date)
    .bind(event.event_time)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| {
        StorageError::constraint(
            e,
            format!("Event {} already has a live schedule", event.event_id),
        )
    })?;

    Ok(schedule)
}

/// Takes the write lock on a schedule row for the rest of the transaction.
pub(crate) async fn lock(conn: &mut SqliteConnection, id: i64) -> Result<()> {
    let result = sqlx::query(
        "UPDATE schedules SET scheduled_date = scheduled_date WHERE schedule_id = ?1",
    )
    .bind(id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::NotFound);
    }

    Ok(())
}

pub(crate) async fn find_in(conn: &mut SqliteConnection, id: i64) -> Result<Schedule> {
    let schedule = sqlx::query_as::<_, Schedule>(
        r#"
        SELECT schedule_id, event_id, venue_id, scheduled_date, scheduled_time
        FROM schedules
        WHERE schedule_id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(StorageError::NotFound)?;

    Ok(schedule)
}

pub(crate) async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    req: &RescheduleRequest,
) -> Result<Schedule> {
    let schedule = sqlx::query_as::<_, Schedule>(
        r#"
        UPDATE schedules
        SET venue_id = ?2,
            scheduled_date = ?3,
            scheduled_time = ?4
        WHERE schedule_id = ?1
        RETURNING schedule_id, event_id, venue_id, scheduled_date, scheduled_time
        "#,
    )
    .bind(id)
    .bind(req.venue_id)
    .bind(req.scheduled_date)
    .bind(req.scheduled_time)
    .fetch_optional(&mut *conn)
    .await
    .map_err(|e| StorageError::constraint(e, format!("Venue {} does not exist", req.venue_id)))?
    .ok_or(StorageError::NotFound)?;

    Ok(schedule)
}
