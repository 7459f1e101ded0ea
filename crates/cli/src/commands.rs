//! Subcommand implementations. Each returns the JSON value to print.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;

use pawcare_core::{Config, PetProfile};
use pawcare_schedule::loader::{CatalogLoader, LoadStatus};
use pawcare_schedule::validation::validate_template_value;
use pawcare_schedule::{
    calculate_next_due_date, validate_rule_value, Catalog, CareEventGenerator, CareScheduleRule,
    ScheduleQuery,
};
use pawcare_store::{CareEventSync, PgCareEventStore};

use crate::cli::{Command, PetArgs};

/// Load a YAML catalog directory, failing on any file that did not load.
pub fn load_catalog(dir: &Path) -> Result<Catalog> {
    let mut loader = CatalogLoader::new(dir.to_path_buf());
    let results = loader
        .load_all()
        .with_context(|| format!("failed to scan catalog directory {}", dir.display()))?;

    let failures: Vec<String> = results
        .iter()
        .filter_map(|r| match &r.status {
            LoadStatus::Failed { error } => Some(format!("{}: {}", r.path.display(), error)),
            _ => None,
        })
        .collect();
    if !failures.is_empty() {
        bail!("catalog directory has invalid files:\n  {}", failures.join("\n  "));
    }

    let catalog = loader.into_catalog()?;
    info!(version = %catalog.version(), rules = catalog.len(), "using catalog from directory");
    Ok(catalog)
}

/// The loaded catalog when one was given, otherwise the built-in one.
pub fn active_catalog(loaded: Option<&Catalog>) -> &Catalog {
    // Closure, not the fn item: its `'static` return must coerce to the borrow.
    loaded.unwrap_or_else(|| Catalog::builtin())
}

pub async fn run(command: Command, catalog: &Catalog, config: &Config) -> Result<Value> {
    let query = ScheduleQuery::new(catalog);

    match command {
        Command::Rules {
            pet_type,
            event_type,
        } => {
            let rules: Vec<&CareScheduleRule> = match (pet_type, event_type) {
                (Some(pet_type), Some(event_type)) => {
                    query.care_schedules_by_event_type(pet_type, event_type)?
                }
                (Some(pet_type), None) => query.care_schedules_by_pet_type(pet_type)?.iter().collect(),
                (None, _) => catalog.all_rules().collect(),
            };
            Ok(json!({ "catalogVersion": catalog.version(), "rules": rules }))
        }

        Command::Rule { id } => match query.care_schedule_by_id(&id) {
            Some(rule) => Ok(serde_json::to_value(rule)?),
            None => bail!("no care schedule rule with id '{}'", id),
        },

        Command::Applicable {
            pet_type,
            age_months,
        } => {
            let rules = query.applicable_care_schedules(pet_type, age_months)?;
            Ok(json!({ "petType": pet_type, "ageMonths": age_months, "rules": rules }))
        }

        Command::DueDate { rule, birth, last } => {
            let Some(rule) = query.care_schedule_by_id(&rule) else {
                bail!("no care schedule rule with id '{}'", rule);
            };
            let due = calculate_next_due_date(rule, birth, last)?;
            Ok(json!({ "ruleId": rule.id, "dueDate": due }))
        }

        Command::Generate(args) => {
            let generator = CareEventGenerator::new(query);
            let events = generator.generate_at(
                &args.pet_id,
                args.pet_type,
                args.birth,
                &args.last_event_dates(),
                args.now.unwrap_or_else(Utc::now),
            )?;
            Ok(json!({ "petId": args.pet_id, "events": events }))
        }

        Command::Validate { path } => validate_path(&path),

        Command::Sync(args) => sync(query, config, args).await,
    }
}

fn validate_path(path: &Path) -> Result<Value> {
    if path.is_dir() {
        let mut loader = CatalogLoader::new(path.to_path_buf());
        let results = loader.load_all()?;
        let valid = results
            .iter()
            .all(|r| !matches!(r.status, LoadStatus::Failed { .. }));
        let catalog_error = if valid {
            loader.into_catalog().err().map(|e| e.to_string())
        } else {
            None
        };
        return Ok(json!({
            "valid": valid && catalog_error.is_none(),
            "files": results,
            "catalogError": catalog_error,
        }));
    }

    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_yaml::from_str(&contents)
        .with_context(|| format!("{} is not valid YAML", path.display()))?;

    // A file with a `schedules` list is a whole template.
    let result = if value.get("schedules").is_some() {
        validate_template_value(&value)
    } else {
        validate_rule_value(&value)
    };
    Ok(serde_json::to_value(result)?)
}

async fn sync(query: ScheduleQuery<'_>, config: &Config, args: PetArgs) -> Result<Value> {
    if !config.postgres.is_configured() {
        bail!("PostgreSQL is not configured (set PG_USERNAME and related PG_* variables)");
    }
    let store = PgCareEventStore::connect(&config.postgres)
        .await
        .context("failed to open care event store")?;

    let pet = PetProfile {
        id: args.pet_id.clone(),
        name: args.pet_id.clone(),
        pet_type: args.pet_type,
        breed: None,
        date_of_birth: Some(args.birth),
    };
    let sync = CareEventSync::new(CareEventGenerator::new(query), store);
    let report = sync
        .sync_pet(&pet, &args.last_event_dates(), args.now.unwrap_or_else(Utc::now))
        .await?;
    Ok(serde_json::to_value(report)?)
}
