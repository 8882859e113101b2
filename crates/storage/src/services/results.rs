use sqlx::SqlitePool;

use crate::dto::result::RecordResultRequest;
use crate::error::{Result, StorageError};
use crate::models::EventParticipant;
use crate::repository::event::{self as event_repo, EventRepository};
use crate::repository::event_participant::{self as entry_repo, EventParticipantRepository};

use super::eligibility;

/// Enroll a participant into an event with no score or ranking yet
pub async fn enroll_participant(
    pool: &SqlitePool,
    event_id: i64,
    participant_id: i64,
) -> Result<EventParticipant> {
    let mut tx = pool.begin().await?;

    eligibility::validate_event_eligibility(&mut tx, participant_id).await?;
    ensure_event(&mut tx, event_id).await?;
    let entry = entry_repo::insert(&mut tx, event_id, participant_id).await?;

    tx.commit().await?;

    tracing::info!(event_id, participant_id, "Participant enrolled");
    Ok(entry)
}

/// Record score and ranking for a participant, enrolling them if needed
pub async fn record_result(
    pool: &SqlitePool,
    event_id: i64,
    participant_id: i64,
    request: &RecordResultRequest,
) -> Result<EventParticipant> {
    let mut tx = pool.begin().await?;

    eligibility::validate_event_eligibility(&mut tx, participant_id).await?;
    ensure_event(&mut tx, event_id).await?;
    let entry = entry_repo::upsert_result(
        &mut tx,
        event_id,
        participant_id,
        request.score,
        request.ranking,
    )
    .await?;

    tx.commit().await?;

    tracing::info!(
        event_id,
        participant_id,
        score = ?entry.score,
        ranking = ?entry.ranking,
        "Result recorded"
    );
    Ok(entry)
}

/// Results of an event ordered by ranking, unranked entries last
pub async fn results_for_event(pool: &SqlitePool, event_id: i64) -> Result<Vec<EventParticipant>> {
    EventRepository::new(pool).find_by_id(event_id).await?;
    EventParticipantRepository::new(pool)
        .list_for_event(event_id)
        .await
}

async fn ensure_event(conn: &mut sqlx::SqliteConnection, event_id: i64) -> Result<()> {
    if !event_repo::exists(conn, event_id).await? {
        return Err(StorageError::ConstraintViolation(format!(
            "Event {event_id} does not exist"
        )));
    }
    Ok(())
}
