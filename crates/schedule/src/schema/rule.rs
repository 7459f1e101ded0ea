//! Care-schedule rule and per-species template.

use serde::{Deserialize, Serialize};

use super::{EndCondition, EventType, PetType, Priority, Recurrence, StartCondition};

/// An immutable, catalog-defined care policy for one species.
///
/// `id` is stable across catalog versions and, together with a pet ID, keys
/// idempotent persistence of the events generated from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CareScheduleRule {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub pet_type: PetType,
    pub event_type: EventType,
    #[serde(default)]
    pub start_condition: StartCondition,
    pub recurrence: Recurrence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_condition: Option<EndCondition>,
    pub priority: Priority,
    /// Provenance, e.g. the veterinary guideline the rule follows.
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl CareScheduleRule {
    /// Age (months) at which the rule starts applying.
    pub fn start_age_months(&self) -> u32 {
        self.start_condition.start_age_months()
    }

    /// Age (months) after which the rule no longer applies, if capped.
    pub fn end_age_months(&self) -> Option<u32> {
        self.end_condition.as_ref().and_then(|e| e.age_months)
    }
}

/// All rules for a single species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CareScheduleTemplate {
    pub pet_type: PetType,
    #[serde(default)]
    pub schedules: Vec<CareScheduleRule>,
}

impl CareScheduleTemplate {
    pub fn new(pet_type: PetType, schedules: Vec<CareScheduleRule>) -> Self {
        Self {
            pet_type,
            schedules,
        }
    }
}
