//! Write-time eligibility gates for registration and enrollment.

use sqlx::SqliteConnection;

use crate::error::{Result, ValidationError};
use crate::models::Participant;
use crate::repository::participant;

/// Youngest age accepted when registering a participant
pub const MIN_PARTICIPANT_AGE: i32 = 1;

/// Youngest age accepted when enrolling a participant into an event
pub const MIN_ENROLLMENT_AGE: i32 = 16;

pub fn validate_participant_age(age: i32) -> std::result::Result<(), ValidationError> {
    if age < MIN_PARTICIPANT_AGE {
        return Err(ValidationError::ParticipantAge { age });
    }
    Ok(())
}

pub fn check_enrollment_age(participant: &Participant) -> std::result::Result<(), ValidationError> {
    if participant.age < MIN_ENROLLMENT_AGE {
        return Err(ValidationError::EnrollmentAge {
            participant_id: participant.participant_id,
            age: participant.age,
        });
    }
    Ok(())
}

/// Locks the participant row on the caller's transaction and checks its
/// current age against the enrollment floor.
///
/// The lock is held until the caller commits or rolls back, so the age
/// read here is still the age when the enrollment row is inserted.
pub async fn validate_event_eligibility(
    conn: &mut SqliteConnection,
    participant_id: i64,
) -> Result<Participant> {
    participant::lock(conn, participant_id).await?;
    let participant = participant::find_in(conn, participant_id).await?;

    if let Err(e) = check_enrollment_age(&participant) {
        tracing::warn!(participant_id, age = participant.age, "Enrollment rejected");
        return Err(e.into());
    }

    Ok(participant)
}
