use sqlx::{SqliteConnection, SqlitePool};

use crate::dto::event::CreateEventRequest;
use crate::error::{Result, StorageError};
use crate::models::Event;

/// Repository for Event database operations
pub struct EventRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all events in their originally planned order
    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, sport_type, event_date, event_time, venue_id, created_at
            FROM events
            ORDER BY event_date, event_time, event_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Get an event by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, sport_type, event_date, event_time, venue_id, created_at
            FROM events
            WHERE event_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }
}

pub(crate) async fn insert(conn: &mut SqliteConnection, req: &CreateEventRequest) -> Result<Event> {
    let event = sqlx::query_as::<_, Event>(
        r#"
        INSERT INTO events (sport_type, event_date, event_time, venue_id)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING event_id, sport_type, event_date, event_time, venue_id, created_at
        "#,
    )
    .bind(&req.sport_type)
    .bind(req.event_date)
    .bind(req.event_time)
    .bind(req.venue_id)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| StorageError::constraint(e, format!("Venue {} does not exist", req.venue_id)))?;

    Ok(event)
}

pub(crate) async fn exists(conn: &mut SqliteConnection, id: i64) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM events WHERE event_id = ?1)",
    )
    .bind(id)
    .fetch_one(&mut *conn)
    .await?;

    Ok(exists)
}
