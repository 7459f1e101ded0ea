//! Generate-then-persist driver for one pet.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use pawcare_core::PetProfile;
use pawcare_schedule::generator::LastEventDates;
use pawcare_schedule::CareEventGenerator;

use crate::error::{Result, StoreError};
use crate::record::InsertOutcome;
use crate::store::CareEventStore;

/// Outcome of one [`CareEventSync::sync_pet`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub pet_id: String,
    /// Events produced by the engine.
    pub generated: usize,
    pub created: usize,
    /// Events whose `(pet, rule)` key was already stored.
    pub skipped: usize,
    /// Per-event persistence failures, one line each.
    pub errors: Vec<String>,
}

impl SyncReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

pub struct CareEventSync<'a, S> {
    generator: CareEventGenerator<'a>,
    store: S,
}

impl<'a, S: CareEventStore> CareEventSync<'a, S> {
    pub fn new(generator: CareEventGenerator<'a>, store: S) -> Self {
        Self { generator, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generate the pet's care events at `now` and store the new ones.
    ///
    /// Engine errors abort the sync. A failed insert is recorded in the
    /// report and the remaining events are still attempted.
    pub async fn sync_pet(
        &self,
        pet: &PetProfile,
        last_event_dates: &LastEventDates,
        now: DateTime<Utc>,
    ) -> Result<SyncReport> {
        let date_of_birth = pet
            .date_of_birth
            .ok_or_else(|| StoreError::MissingDateOfBirth(pet.id.clone()))?;

        let events = self
            .generator
            .generate_at(&pet.id, pet.pet_type, date_of_birth, last_event_dates, now)?;

        let mut report = SyncReport {
            pet_id: pet.id.clone(),
            generated: events.len(),
            ..SyncReport::default()
        };

        for event in &events {
            match self.store.insert_if_absent(event).await {
                Ok(InsertOutcome::Created(_)) => report.created += 1,
                Ok(InsertOutcome::Skipped) => report.skipped += 1,
                Err(e) => {
                    warn!(pet_id = %pet.id, rule_id = %event.schedule_rule_id, error = %e, "failed to store care event");
                    report
                        .errors
                        .push(format!("{}: {}", event.schedule_rule_id, e));
                }
            }
        }

        info!(
            pet_id = %pet.id,
            generated = report.generated,
            created = report.created,
            skipped = report.skipped,
            errors = report.errors.len(),
            "care event sync complete"
        );
        Ok(report)
    }
}
