//! [`CareEventGenerator`]: builds the care event batch for one pet.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::Result;
use crate::query::ScheduleQuery;
use crate::schema::PetType;

use super::dates::{age_in_months, calculate_next_due_date};
use super::event::GeneratedCareEvent;

/// Most recent occurrence per rule ID, supplied by the caller.
pub type LastEventDates = HashMap<String, DateTime<Utc>>;

/// Generates due-dated care events from the rules applicable to a pet.
///
/// Holds only a borrowed catalog view, so it is `Copy` and can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct CareEventGenerator<'a> {
    query: ScheduleQuery<'a>,
}

impl CareEventGenerator<'static> {
    /// Generator over the compiled-in catalog.
    pub fn builtin() -> Self {
        Self::new(ScheduleQuery::builtin())
    }
}

impl<'a> CareEventGenerator<'a> {
    pub fn new(query: ScheduleQuery<'a>) -> Self {
        Self { query }
    }

    pub fn query(&self) -> ScheduleQuery<'a> {
        self.query
    }

    /// Generate events using the system clock for the pet's age.
    pub fn generate(
        &self,
        pet_id: &str,
        pet_type: PetType,
        date_of_birth: DateTime<Utc>,
        last_event_dates: &LastEventDates,
    ) -> Result<Vec<GeneratedCareEvent>> {
        self.generate_at(pet_id, pet_type, date_of_birth, last_event_dates, Utc::now())
    }

    /// Generate events with the pet's age measured at `now`.
    ///
    /// One event per applicable rule, in catalog order. `now` only selects
    /// which rules apply; due dates derive from birth or the last occurrence.
    /// Repeated calls with the same inputs yield identical events.
    pub fn generate_at(
        &self,
        pet_id: &str,
        pet_type: PetType,
        date_of_birth: DateTime<Utc>,
        last_event_dates: &LastEventDates,
        now: DateTime<Utc>,
    ) -> Result<Vec<GeneratedCareEvent>> {
        let age = age_in_months(date_of_birth, now);
        let Ok(age_months) = u32::try_from(age) else {
            debug!(pet_id = %pet_id, age_months = age, "birth date is in the future, nothing to schedule");
            return Ok(Vec::new());
        };

        let rules = self.query.applicable_care_schedules(pet_type, age_months)?;

        let mut events = Vec::with_capacity(rules.len());
        for rule in rules {
            let last = last_event_dates.get(&rule.id).copied();
            let due_date = calculate_next_due_date(rule, date_of_birth, last).map_err(|e| {
                e.wrap(
                    "care event generation",
                    format!("pet {} / rule {}", pet_id, rule.id),
                )
            })?;
            debug!(
                pet_id = %pet_id,
                rule_id = %rule.id,
                anchored_on_history = last.is_some(),
                due = %due_date,
                "computed due date"
            );
            events.push(GeneratedCareEvent::from_rule(rule, pet_id, due_date));
        }

        debug!(pet_id = %pet_id, pet_type = %pet_type, age_months, count = events.len(), "generated care events");
        Ok(events)
    }
}
