//! Terse constructor for the compiled-in rule tables.

use crate::schema::{
    CareScheduleRule, EndCondition, EventTrigger, EventType, PetType, Priority, Recurrence,
    RecurrenceConditions, RecurrenceUnit, StartCondition,
};

const CATALOG_TIMESTAMP: &str = "2024-01-15T00:00:00Z";

pub(super) struct RuleBuilder {
    rule: CareScheduleRule,
}

impl RuleBuilder {
    pub(super) fn new(
        pet_type: PetType,
        id: &str,
        name: &str,
        event_type: EventType,
        priority: Priority,
    ) -> Self {
        Self {
            rule: CareScheduleRule {
                id: id.to_string(),
                name: name.to_string(),
                description: String::new(),
                pet_type,
                event_type,
                start_condition: StartCondition::default(),
                recurrence: Recurrence::new(1, RecurrenceUnit::Years),
                end_condition: None,
                priority,
                source: String::new(),
                created_at: CATALOG_TIMESTAMP.to_string(),
                updated_at: CATALOG_TIMESTAMP.to_string(),
            },
        }
    }

    pub(super) fn describe(mut self, description: &str) -> Self {
        self.rule.description = description.to_string();
        self
    }

    pub(super) fn starts_at(mut self, age_months: u32) -> Self {
        self.rule.start_condition.age_months = Some(age_months);
        self
    }

    pub(super) fn triggered_by(mut self, trigger: EventTrigger) -> Self {
        self.rule.start_condition.event_trigger = Some(trigger);
        self
    }

    pub(super) fn every(mut self, interval: u32, unit: RecurrenceUnit) -> Self {
        self.rule.recurrence.interval = interval;
        self.rule.recurrence.unit = unit;
        self
    }

    /// Inclusive upper age bound: the rule still applies at `age_max_months`.
    pub(super) fn up_to_age(mut self, age_max_months: u32) -> Self {
        self.conditions().age_max_months = Some(age_max_months);
        self
    }

    pub(super) fn for_breeds(mut self, breeds: &[&str]) -> Self {
        self.conditions().breed_specific = Some(breeds.iter().map(|b| b.to_string()).collect());
        self
    }

    pub(super) fn ends_at(mut self, age_months: u32) -> Self {
        self.rule.end_condition = Some(EndCondition::at_age(age_months));
        self
    }

    pub(super) fn source(mut self, source: &str) -> Self {
        self.rule.source = source.to_string();
        self
    }

    pub(super) fn build(self) -> CareScheduleRule {
        self.rule
    }

    fn conditions(&mut self) -> &mut RecurrenceConditions {
        self.rule
            .recurrence
            .conditions
            .get_or_insert_with(RecurrenceConditions::default)
    }
}
