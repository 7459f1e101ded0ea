use pawcare_schedule::ScheduleError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Care events cannot be derived without a birth date.
    #[error("Pet '{0}' has no date of birth")]
    MissingDateOfBirth(String),

    /// A stored row no longer maps onto the current enums.
    #[error("Invalid stored care event {id}: {reason}")]
    InvalidRow { id: String, reason: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;
