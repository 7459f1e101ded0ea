//! Due-date computation and per-pet care event generation.
//!
//! [`calculate_next_due_date`] anchors on the last occurrence when one is
//! known, otherwise on the date the pet became eligible, then steps one
//! recurrence interval forward. [`CareEventGenerator`] applies that to every
//! rule applicable at the pet's current age.
//!
//! Generation is pure apart from the instant used to compute age, which is
//! an explicit argument of [`CareEventGenerator::generate_at`].

mod core;
pub(crate) mod dates;
mod event;

#[cfg(test)]
mod tests;

pub use self::core::{CareEventGenerator, LastEventDates};
pub use self::dates::{add_interval, age_in_months, calculate_next_due_date};
pub use self::event::GeneratedCareEvent;
