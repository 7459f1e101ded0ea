//! Persisted care event rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pawcare_schedule::{EventType, GeneratedCareEvent, Priority};

/// A generated care event once it has been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareEventRecord {
    pub id: Uuid,
    pub pet_id: String,
    pub schedule_rule_id: String,
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    pub priority: Priority,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl CareEventRecord {
    /// Fresh record for `event` with a new v4 ID.
    pub fn from_event(event: &GeneratedCareEvent, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            pet_id: event.pet_id.clone(),
            schedule_rule_id: event.schedule_rule_id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            event_type: event.event_type,
            priority: event.priority,
            due_date: event.due_date,
            created_at,
        }
    }

    /// The idempotency key.
    pub fn key(&self) -> (&str, &str) {
        (&self.pet_id, &self.schedule_rule_id)
    }
}

/// Result of an idempotent insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Created(CareEventRecord),
    /// An event for the same `(pet_id, schedule_rule_id)` already exists.
    Skipped,
}

impl InsertOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, InsertOutcome::Created(_))
    }
}
