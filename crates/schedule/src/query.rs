//! Side-effect-free applicability queries over a [`Catalog`].

use tracing::trace;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::schema::{CareScheduleRule, EventType, PetType};

/// Read-only query view over a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleQuery<'a> {
    catalog: &'a Catalog,
}

impl ScheduleQuery<'static> {
    /// Query the compiled-in catalog.
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl<'a> ScheduleQuery<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// All rules for a species, in declaration order.
    pub fn care_schedules_by_pet_type(&self, pet_type: PetType) -> Result<&'a [CareScheduleRule]> {
        self.catalog
            .template(pet_type)
            .map(|t| t.schedules.as_slice())
            .map_err(|e| e.wrap("care schedule lookup", pet_type.as_str()))
    }

    /// Rules for a species with the given event type. No match is an empty list.
    pub fn care_schedules_by_event_type(
        &self,
        pet_type: PetType,
        event_type: EventType,
    ) -> Result<Vec<&'a CareScheduleRule>> {
        Ok(self
            .care_schedules_by_pet_type(pet_type)?
            .iter()
            .filter(|rule| rule.event_type == event_type)
            .collect())
    }

    /// Look a rule up by ID across all species.
    pub fn care_schedule_by_id(&self, id: &str) -> Option<&'a CareScheduleRule> {
        self.catalog.all_rules().find(|rule| rule.id == id)
    }

    /// Rules that apply to a pet of the given species and age.
    ///
    /// Callers must not rely on result order beyond it following the catalog.
    pub fn applicable_care_schedules(
        &self,
        pet_type: PetType,
        pet_age_months: u32,
    ) -> Result<Vec<&'a CareScheduleRule>> {
        Ok(self
            .care_schedules_by_pet_type(pet_type)?
            .iter()
            .filter(|rule| {
                let applies = is_applicable(rule, pet_age_months);
                trace!(rule_id = %rule.id, age_months = pet_age_months, applies, "applicability check");
                applies
            })
            .collect())
    }
}

/// Whether `rule` applies at `age_months`.
///
/// Every bound must hold: start age (missing counts as 0), end age, and the
/// recurrence's min/max age conditions. Breed lists are not considered.
pub fn is_applicable(rule: &CareScheduleRule, age_months: u32) -> bool {
    if age_months < rule.start_age_months() {
        return false;
    }
    if let Some(end) = rule.end_age_months() {
        if age_months > end {
            return false;
        }
    }
    if let Some(conditions) = &rule.recurrence.conditions {
        if conditions.age_min_months.is_some_and(|min| age_months < min) {
            return false;
        }
        if conditions.age_max_months.is_some_and(|max| age_months > max) {
            return false;
        }
    }
    true
}
