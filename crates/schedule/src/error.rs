//! Error type for catalog lookups and due-date computation.

use pawcare_core::{PawCareError, PetType};

/// Errors raised by the schedule engine.
///
/// These signal a caller or catalog bug. Query misses (unknown rule ID, no
/// rule for an event type) are `Option`/empty results, never errors.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Species string not recognised.
    #[error("Unsupported pet type: '{0}' (expected one of: dog, cat)")]
    UnsupportedPetType(String),

    /// Catalog carries no template for a recognised species.
    #[error("No care schedules defined for pet type '{0}'")]
    MissingTemplate(PetType),

    #[error("Unsupported recurrence unit: '{0}' (expected one of: days, weeks, months, years)")]
    UnsupportedRecurrenceUnit(String),

    #[error("Date arithmetic out of range: {0}")]
    DateOutOfRange(String),

    /// Invalid catalog assembled from external templates.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// A lower-level failure wrapped once at a public entry point.
    #[error("{operation} failed for '{input}': {source}")]
    Operation {
        operation: &'static str,
        input: String,
        #[source]
        source: Box<ScheduleError>,
    },
}

impl ScheduleError {
    pub(crate) fn wrap(self, operation: &'static str, input: impl Into<String>) -> Self {
        ScheduleError::Operation {
            operation,
            input: input.into(),
            source: Box::new(self),
        }
    }
}

impl From<PawCareError> for ScheduleError {
    fn from(err: PawCareError) -> Self {
        match err {
            PawCareError::UnsupportedPetType(name) => ScheduleError::UnsupportedPetType(name),
            other => ScheduleError::InvalidCatalog(other.to_string()),
        }
    }
}

/// Result alias for schedule operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
