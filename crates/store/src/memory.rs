//! In-process [`CareEventStore`] used by tests and dry runs.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use pawcare_schedule::GeneratedCareEvent;

use crate::error::Result;
use crate::record::{CareEventRecord, InsertOutcome};
use crate::store::CareEventStore;

type Key = (String, String);

#[derive(Debug, Default)]
pub struct MemoryCareEventStore {
    events: RwLock<HashMap<Key, CareEventRecord>>,
}

impl MemoryCareEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

fn sorted(mut records: Vec<CareEventRecord>) -> Vec<CareEventRecord> {
    records.sort_by(|a, b| {
        a.due_date
            .cmp(&b.due_date)
            .then_with(|| a.key().cmp(&b.key()))
    });
    records
}

#[async_trait]
impl CareEventStore for MemoryCareEventStore {
    async fn insert_if_absent(&self, event: &GeneratedCareEvent) -> Result<InsertOutcome> {
        let key = (event.pet_id.clone(), event.schedule_rule_id.clone());
        // Check and insert under one write guard.
        let mut events = self.events.write().await;
        if events.contains_key(&key) {
            debug!(pet_id = %event.pet_id, rule_id = %event.schedule_rule_id, "care event already stored");
            return Ok(InsertOutcome::Skipped);
        }
        let record = CareEventRecord::from_event(event, Utc::now());
        events.insert(key, record.clone());
        Ok(InsertOutcome::Created(record))
    }

    async fn list_for_pet(&self, pet_id: &str) -> Result<Vec<CareEventRecord>> {
        let events = self.events.read().await;
        Ok(sorted(
            events
                .values()
                .filter(|r| r.pet_id == pet_id)
                .cloned()
                .collect(),
        ))
    }

    async fn due_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<CareEventRecord>> {
        let events = self.events.read().await;
        Ok(sorted(
            events
                .values()
                .filter(|r| r.due_date >= from && r.due_date < to)
                .cloned()
                .collect(),
        ))
    }
}
