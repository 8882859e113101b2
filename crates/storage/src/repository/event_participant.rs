use rust_decimal::Decimal;
use sqlx::{SqliteConnection, SqlitePool};

use crate::error::{Result, StorageError};
use crate::models::{EventParticipant, EventParticipantRow};

pub struct EventParticipantRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EventParticipantRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Results of an event, best ranking first; unranked entries last
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<EventParticipant>> {
        let rows = sqlx::query_as::<_, EventParticipantRow>(
            r#"
            SELECT event_id, participant_id, score, ranking
            FROM event_participants
            WHERE event_id = ?1
            ORDER BY ranking IS NULL, ranking, participant_id
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(EventParticipant::try_from).collect()
    }
}

/// Inserts a fresh enrollment with no score or ranking.
pub(crate) async fn insert(
    conn: &mut SqliteConnection,
    event_id: i64,
    participant_id: i64,
) -> Result<EventParticipant> {
    let row = sqlx::query_as::<_, EventParticipantRow>(
        r#"
        INSERT INTO event_participants (event_id, participant_id)
        VALUES (?1, ?2)
        RETURNING event_id, participant_id, score, ranking
        "#,
    )
    .bind(event_id)
    .bind(participant_id)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| {
        StorageError::constraint(
            e,
            format!("Participant {participant_id} is already enrolled in event {event_id}"),
        )
    })?;

    EventParticipant::try_from(row)
}

/// Writes score and ranking, creating the enrollment if it does not exist yet.
pub(crate) async fn upsert_result(
    conn: &mut SqliteConnection,
    event_id: i64,
    participant_id: i64,
    score: Option<Decimal>,
    ranking: Option<i32>,
) -> Result<EventParticipant> {
    let row = sqlx::query_as::<_, EventParticipantRow>(
        r#"
        INSERT INTO event_participants (event_id, participant_id, score, ranking)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT (event_id, participant_id)
        DO UPDATE SET score = excluded.score, ranking = excluded.ranking
        RETURNING event_id, participant_id, score, ranking
        "#,
    )
    .bind(event_id)
    .bind(participant_id)
    .bind(score.map(|s| s.to_string()))
    .bind(ranking)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| StorageError::constraint(e, format!("Event {event_id} does not exist")))?;

    EventParticipant::try_from(row)
}
