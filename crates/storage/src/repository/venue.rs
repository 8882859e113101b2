use sqlx::{SqliteConnection, SqlitePool};

use crate::dto::venue::CreateVenueRequest;
use crate::error::{Result, StorageError};
use crate::models::Venue;

/// Repository for Venue database operations
pub struct VenueRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> VenueRepository<'a> {
    /// Create a new VenueRepository
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all venues
    pub async fn list(&self) -> Result<Vec<Venue>> {
        let venues = sqlx::query_as::<_, Venue>(
            r#"
            SELECT venue_id, name, location, capacity, created_at
            FROM venues
            ORDER BY name, venue_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(venues)
    }

    /// Get a venue by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Venue> {
        let venue = sqlx::query_as::<_, Venue>(
            r#"
            SELECT venue_id, name, location, capacity, created_at
            FROM venues
            WHERE venue_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(venue)
    }

    /// Create a new venue
    pub async fn create(&self, req: &CreateVenueRequest) -> Result<Venue> {
        let venue = sqlx::query_as::<_, Venue>(
            r#"
            INSERT INTO venues (name, location, capacity)
            VALUES (?1, ?2, ?3)
            RETURNING venue_id, name, location, capacity, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.location)
        .bind(req.capacity)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::constraint(
                e,
                format!("Venue capacity must be >= 0 (got {})", req.capacity),
            )
        })?;

        Ok(venue)
    }
}

pub(crate) async fn exists(conn: &mut SqliteConnection, id: i64) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM venues WHERE venue_id = ?1)",
    )
    .bind(id)
    .fetch_one(&mut *conn)
    .await?;

    Ok(exists)
}
