use sqlx::{SqliteConnection, SqlitePool};

use crate::dto::participant::CreateParticipantRequest;
use crate::error::{Result, StorageError};
use crate::models::Participant;

pub struct ParticipantRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all participants
    pub async fn list(&self) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, name, nationality, age, gender, created_at
            FROM participants
            ORDER BY name, participant_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    /// List participants sharing a nationality
    pub async fn list_by_nationality(&self, nationality: &str) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, name, nationality, age, gender, created_at
            FROM participants
            WHERE nationality = ?1
            ORDER BY name, participant_id
            "#,
        )
        .bind(nationality)
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    /// Find participant by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, name, nationality, age, gender, created_at
            FROM participants
            WHERE participant_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }

    /// Insert a participant. The age floor must already have been checked.
    pub(crate) async fn create(&self, req: &CreateParticipantRequest) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (name, nationality, age, gender)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING participant_id, name, nationality, age, gender, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.nationality)
        .bind(req.age)
        .bind(req.gender)
        .fetch_one(self.pool)
        .await?;

        Ok(participant)
    }
}

/// Takes the write lock on a participant row for the rest of the
/// transaction, so its age cannot change between check and insert.
pub(crate) async fn lock(conn: &mut SqliteConnection, id: i64) -> Result<()> {
    let result = sqlx::query(
        "UPDATE participants SET name = name WHERE participant_id = ?1",
    )
    .bind(id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::NotFound);
    }

    Ok(())
}

pub(crate) async fn find_in(conn: &mut SqliteConnection, id: i64) -> Result<Participant> {
    let participant = sqlx::query_as::<_, Participant>(
        r#"
        SELECT participant_id, name, nationality, age, gender, created_at
        FROM participants
        WHERE participant_id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(StorageError::NotFound)?;

    Ok(participant)
}
