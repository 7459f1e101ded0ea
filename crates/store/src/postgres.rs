//! PostgreSQL-backed [`CareEventStore`].
//!
//! Uniqueness of `(pet_id, schedule_rule_id)` is enforced by the table
//! itself, so concurrent writers from several processes still create at most
//! one event per key.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use tracing::{debug, info};
use uuid::Uuid;

use pawcare_core::config::PostgresConfig;
use pawcare_schedule::GeneratedCareEvent;

use crate::error::{Result, StoreError};
use crate::record::{CareEventRecord, InsertOutcome};
use crate::store::CareEventStore;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS care_events (
    id UUID PRIMARY KEY,
    pet_id TEXT NOT NULL,
    schedule_rule_id TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    event_type TEXT NOT NULL,
    priority TEXT NOT NULL,
    due_date TIMESTAMPTZ NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    UNIQUE (pet_id, schedule_rule_id)
)";

const CREATE_DUE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS care_events_due_date_idx ON care_events (due_date)";

const COLUMNS: &str = "id, pet_id, schedule_rule_id, title, description, event_type, priority, due_date, created_at";

/// Raw `care_events` row; enums are stored as their snake_case names.
#[derive(Debug, FromRow)]
struct CareEventRow {
    id: Uuid,
    pet_id: String,
    schedule_rule_id: String,
    title: String,
    description: String,
    event_type: String,
    priority: String,
    due_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl TryFrom<CareEventRow> for CareEventRecord {
    type Error = StoreError;

    fn try_from(row: CareEventRow) -> Result<Self> {
        let invalid = |reason: String| StoreError::InvalidRow {
            id: row.id.to_string(),
            reason,
        };
        let event_type = row.event_type.parse().map_err(invalid)?;
        let priority = row.priority.parse().map_err(invalid)?;
        Ok(CareEventRecord {
            id: row.id,
            pet_id: row.pet_id,
            schedule_rule_id: row.schedule_rule_id,
            title: row.title,
            description: row.description,
            event_type,
            priority,
            due_date: row.due_date,
            created_at: row.created_at,
        })
    }
}

fn into_records(rows: Vec<CareEventRow>) -> Result<Vec<CareEventRecord>> {
    rows.into_iter().map(CareEventRecord::try_from).collect()
}

#[derive(Debug, Clone)]
pub struct PgCareEventStore {
    pool: PgPool,
}

impl PgCareEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool from config and make sure the table exists.
    pub async fn connect(config: &PostgresConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.connection_string())
            .await?;
        info!(host = %config.host, database = %config.database, "PostgreSQL connected");

        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create the `care_events` table and its due-date index if missing.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_DUE_INDEX).execute(&self.pool).await?;
        debug!("care_events schema ensured");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CareEventStore for PgCareEventStore {
    async fn insert_if_absent(&self, event: &GeneratedCareEvent) -> Result<InsertOutcome> {
        let record = CareEventRecord::from_event(event, Utc::now());

        let sql = format!(
            "INSERT INTO care_events ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             ON CONFLICT (pet_id, schedule_rule_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CareEventRow>(&sql)
            .bind(record.id)
            .bind(&record.pet_id)
            .bind(&record.schedule_rule_id)
            .bind(&record.title)
            .bind(&record.description)
            .bind(record.event_type.as_str())
            .bind(record.priority.as_str())
            .bind(record.due_date)
            .bind(record.created_at)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(InsertOutcome::Created(row.try_into()?)),
            None => {
                debug!(pet_id = %event.pet_id, rule_id = %event.schedule_rule_id, "care event already stored");
                Ok(InsertOutcome::Skipped)
            }
        }
    }

    async fn list_for_pet(&self, pet_id: &str) -> Result<Vec<CareEventRecord>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM care_events
             WHERE pet_id = $1
             ORDER BY due_date, schedule_rule_id"
        );
        let rows = sqlx::query_as::<_, CareEventRow>(&sql)
            .bind(pet_id)
            .fetch_all(&self.pool)
            .await?;
        into_records(rows)
    }

    async fn due_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<CareEventRecord>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM care_events
             WHERE due_date >= $1 AND due_date < $2
             ORDER BY due_date, pet_id, schedule_rule_id"
        );
        let rows = sqlx::query_as::<_, CareEventRow>(&sql)
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await?;
        into_records(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pawcare_schedule::{EventType, Priority};

    fn row(event_type: &str, priority: &str) -> CareEventRow {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        CareEventRow {
            id: Uuid::nil(),
            pet_id: "rex".to_string(),
            schedule_rule_id: "dog-rabies".to_string(),
            title: "Rabies Vaccine".to_string(),
            description: String::new(),
            event_type: event_type.to_string(),
            priority: priority.to_string(),
            due_date: at,
            created_at: at,
        }
    }

    #[test]
    fn row_maps_enum_columns() {
        let record = CareEventRecord::try_from(row("parasite_prevention", "high")).unwrap();
        assert_eq!(record.event_type, EventType::ParasitePrevention);
        assert_eq!(record.priority, Priority::High);
        assert_eq!(record.key(), ("rex", "dog-rabies"));
    }

    #[test]
    fn unknown_stored_enum_is_reported_with_row_id() {
        let err = CareEventRecord::try_from(row("acupuncture", "high")).unwrap_err();
        assert!(matches!(err, StoreError::InvalidRow { .. }));
        assert!(err.to_string().contains(&Uuid::nil().to_string()));

        let err = CareEventRecord::try_from(row("vaccination", "urgent")).unwrap_err();
        assert!(err.to_string().contains("urgent"));
    }
}
