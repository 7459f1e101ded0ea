//! Care-schedule rule types with serde (de)serialization.
//!
//! Defines the type hierarchy for the catalog file format:
//! - `CareScheduleTemplate`: all rules for one species
//! - `CareScheduleRule`: one recurring care obligation
//! - Closed enums for event type, priority, trigger, and recurrence unit
//!
//! Field names serialize in camelCase (`petType`, `startCondition`), enum
//! values in snake_case (`wellness_exam`, `first_visit`).

mod conditions;
mod kind;
mod recurrence;
mod rule;

pub use conditions::*;
pub use kind::*;
pub use recurrence::*;
pub use rule::*;

pub use pawcare_core::PetType;

#[cfg(test)]
mod tests;
