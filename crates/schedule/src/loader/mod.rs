//! Filesystem catalog loader.
//!
//! Reads care-schedule templates from YAML files so the catalog can grow
//! without a code change. Every rule is validated before it is accepted;
//! files that fail are reported per-file and never abort the scan.

mod core;
mod error;

#[cfg(test)]
mod tests;

pub use self::core::CatalogLoader;
pub use self::error::{LoadResult, LoadStatus, LoaderError, Result};
