//! Error types and load result structures for the catalog loader.

use std::path::PathBuf;

use serde::Serialize;

use crate::schema::PetType;
use crate::ScheduleError;

/// Errors that can occur while loading or writing catalog files.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse/deserialization error.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// One or more rules in the file failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Loaded templates do not form a consistent catalog.
    #[error("Catalog error: {0}")]
    Catalog(#[from] ScheduleError),
}

/// Result alias for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Outcome of loading a single catalog file.
#[derive(Debug, Serialize)]
pub struct LoadResult {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: LoadStatus,
}

/// Status of a single file load attempt.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum LoadStatus {
    Loaded { pet_type: PetType, rule_count: usize },
    /// Dotfile or non-YAML file.
    Skipped { reason: String },
    Failed { error: String },
}
