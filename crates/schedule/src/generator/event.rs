//! Generated care event value type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::{CareScheduleRule, EventType, Priority};

/// A due-dated care obligation derived from one rule for one pet.
///
/// Built fresh on every generation call and never persisted here;
/// `(pet_id, schedule_rule_id)` is the natural idempotency key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCareEvent {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub event_type: EventType,
    pub schedule_rule_id: String,
    pub pet_id: String,
    pub priority: Priority,
}

impl GeneratedCareEvent {
    pub fn from_rule(rule: &CareScheduleRule, pet_id: &str, due_date: DateTime<Utc>) -> Self {
        Self {
            title: rule.name.clone(),
            description: rule.description.clone(),
            due_date,
            event_type: rule.event_type,
            schedule_rule_id: rule.id.clone(),
            pet_id: pet_id.to_string(),
            priority: rule.priority,
        }
    }
}
