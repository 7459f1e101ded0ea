//! Care-schedule derivation engine.
//!
//! This crate provides:
//! - A static, versioned catalog of care-schedule rules per species
//! - Applicability queries by species, event type, ID, and pet age
//! - Due-date computation and per-pet event batch generation
//! - Structural validation of rule definitions
//! - A YAML loader for catalogs maintained outside the binary

pub mod catalog;
pub mod error;
pub mod generator;
pub mod loader;
pub mod query;
pub mod schema;
pub mod validation;

pub use catalog::Catalog;
pub use error::{Result, ScheduleError};
pub use generator::{age_in_months, calculate_next_due_date, CareEventGenerator, GeneratedCareEvent};
pub use query::ScheduleQuery;
pub use schema::*;
pub use validation::{validate_rule, validate_rule_value, validate_rule_yaml, ValidationResult};
