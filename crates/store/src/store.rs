//! The [`CareEventStore`] trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use pawcare_schedule::GeneratedCareEvent;

use crate::error::Result;
use crate::record::{CareEventRecord, InsertOutcome};

/// Storage backend for generated care events.
///
/// At most one event is kept per `(pet_id, schedule_rule_id)`. Inserting an
/// event whose key already exists is reported as [`InsertOutcome::Skipped`]
/// and leaves the stored event untouched.
#[async_trait]
pub trait CareEventStore: Send + Sync {
    async fn insert_if_absent(&self, event: &GeneratedCareEvent) -> Result<InsertOutcome>;

    /// All events for a pet, earliest due date first.
    async fn list_for_pet(&self, pet_id: &str) -> Result<Vec<CareEventRecord>>;

    /// Events with `from <= due_date < to`, earliest first.
    async fn due_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<CareEventRecord>>;
}
