use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid stored data: {0}")]
    InvalidData(String),
}

/// Eligibility rejections. The two age floors stay distinct so callers can
/// tell a bad registration from an ineligible enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("participant age must be >= 1 (got {age})")]
    ParticipantAge { age: i32 },

    #[error("participant {participant_id} must be >= 16 to enroll (age {age})")]
    EnrollmentAge { participant_id: i64, age: i32 },
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e)) if e.is_unique_violation()
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e)) if e.is_foreign_key_violation()
        )
    }

    pub fn is_check_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e)) if e.is_check_violation()
        )
    }

    /// Rewrites store-level unique, foreign-key and CHECK failures into a
    /// `ConstraintViolation` carrying `message`; anything else passes through.
    pub(crate) fn constraint(error: sqlx::Error, message: impl Into<String>) -> Self {
        let error = StorageError::from(error);
        if error.is_unique_violation()
            || error.is_foreign_key_violation()
            || error.is_check_violation()
        {
            StorageError::ConstraintViolation(message.into())
        } else {
            error
        }
    }
}
