//! Tests for the catalog loader module.

use std::fs;

use tempfile::TempDir;

use super::*;
use crate::catalog::Catalog;
use crate::query::ScheduleQuery;
use crate::schema::{EventType, PetType};

const DOG_TEMPLATE_YAML: &str = r#"
petType: dog
schedules:
  - id: dog-lepto
    name: Leptospirosis Vaccine
    petType: dog
    eventType: vaccination
    startCondition:
      ageMonths: 3
    recurrence:
      interval: 1
      unit: years
    priority: medium
  - id: dog-teeth-brushing
    name: Teeth Brushing Check
    petType: dog
    eventType: dental_care
    recurrence:
      interval: 1
      unit: weeks
    priority: low
"#;

const CAT_TEMPLATE_YAML: &str = r#"
petType: cat
schedules:
  - id: cat-hairball-check
    name: Hairball Check
    petType: cat
    eventType: grooming
    startCondition:
      ageMonths: 6
    recurrence:
      interval: 2
      unit: months
    priority: low
"#;

fn temp_loader() -> (TempDir, CatalogLoader) {
    let dir = TempDir::new().expect("create tempdir");
    let loader = CatalogLoader::new(dir.path().to_path_buf());
    (dir, loader)
}

fn count(results: &[LoadResult], pred: fn(&LoadStatus) -> bool) -> usize {
    results.iter().filter(|r| pred(&r.status)).count()
}

#[test]
fn load_template_from_file() {
    let (dir, loader) = temp_loader();
    let path = dir.path().join("dog.yml");
    fs::write(&path, DOG_TEMPLATE_YAML).unwrap();

    let template = loader.load_file(&path).unwrap();
    assert_eq!(template.pet_type, PetType::Dog);
    assert_eq!(template.schedules.len(), 2);
    assert_eq!(template.schedules[1].event_type, EventType::DentalCare);
    assert_eq!(template.schedules[1].start_age_months(), 0);
}

#[test]
fn load_all_skips_dotfiles_and_non_yaml() {
    let (dir, mut loader) = temp_loader();
    fs::write(dir.path().join("dog.yml"), DOG_TEMPLATE_YAML).unwrap();
    fs::write(dir.path().join(".hidden.yml"), DOG_TEMPLATE_YAML).unwrap();
    fs::write(dir.path().join("README.md"), "not a catalog").unwrap();

    let results = loader.load_all().unwrap();

    assert_eq!(count(&results, |s| matches!(s, LoadStatus::Loaded { .. })), 1);
    assert_eq!(count(&results, |s| matches!(s, LoadStatus::Skipped { .. })), 2);
    assert_eq!(loader.templates().count(), 1);
}

#[test]
fn load_all_recurses_and_builds_catalog() {
    let (dir, mut loader) = temp_loader();
    fs::create_dir(dir.path().join("feline")).unwrap();
    fs::write(dir.path().join("dog.yaml"), DOG_TEMPLATE_YAML).unwrap();
    fs::write(dir.path().join("feline").join("cat.yml"), CAT_TEMPLATE_YAML).unwrap();

    let results = loader.load_all().unwrap();
    assert_eq!(count(&results, |s| matches!(s, LoadStatus::Loaded { .. })), 2);

    let catalog = loader.into_catalog().unwrap();
    assert_eq!(catalog.len(), 3);
    let query = ScheduleQuery::new(&catalog);
    let applicable = query.applicable_care_schedules(PetType::Cat, 7).unwrap();
    assert_eq!(applicable.len(), 1);
    assert_eq!(applicable[0].id, "cat-hairball-check");
}

#[test]
fn invalid_rule_fails_the_file_with_every_error() {
    let (dir, mut loader) = temp_loader();
    let broken = DOG_TEMPLATE_YAML
        .replace("interval: 1\n      unit: years", "interval: 0\n      unit: yearz")
        .replace("name: Teeth Brushing Check", "name: \"\"");
    fs::write(dir.path().join("dog.yml"), broken).unwrap();
    fs::write(dir.path().join("cat.yml"), CAT_TEMPLATE_YAML).unwrap();

    let results = loader.load_all().unwrap();

    let failed: Vec<&str> = results
        .iter()
        .filter_map(|r| match &r.status {
            LoadStatus::Failed { error } => Some(error.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(failed.len(), 1);
    assert!(failed[0].contains("schedules[0].recurrence.interval"));
    assert!(failed[0].contains("schedules[0].recurrence.unit"));
    assert!(failed[0].contains("schedules[1].name"));
    // The cat file is unaffected.
    assert_eq!(loader.templates().count(), 1);
}

#[test]
fn malformed_yaml_is_reported_not_fatal() {
    let (dir, mut loader) = temp_loader();
    fs::write(dir.path().join("bad.yml"), "petType: [unclosed").unwrap();

    let results = loader.load_all().unwrap();
    assert_eq!(count(&results, |s| matches!(s, LoadStatus::Failed { .. })), 1);
}

#[test]
fn same_species_across_files_is_merged() {
    let (dir, mut loader) = temp_loader();
    let extra = r#"
petType: dog
schedules:
  - id: dog-ear-cleaning
    name: Ear Cleaning
    petType: dog
    eventType: grooming
    recurrence: { interval: 2, unit: weeks }
    priority: low
"#;
    fs::write(dir.path().join("a-dog.yml"), DOG_TEMPLATE_YAML).unwrap();
    fs::write(dir.path().join("b-dog-extra.yml"), extra).unwrap();

    loader.load_all().unwrap();
    let catalog = loader.into_catalog().unwrap();
    let ids: Vec<&str> = catalog
        .template(PetType::Dog)
        .unwrap()
        .schedules
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, vec!["dog-lepto", "dog-teeth-brushing", "dog-ear-cleaning"]);
}

#[test]
fn duplicate_ids_across_files_fail_catalog_assembly() {
    let (dir, mut loader) = temp_loader();
    fs::write(dir.path().join("a.yml"), DOG_TEMPLATE_YAML).unwrap();
    fs::write(dir.path().join("b.yml"), DOG_TEMPLATE_YAML).unwrap();

    loader.load_all().unwrap();
    let err = loader.into_catalog().unwrap_err();
    assert!(matches!(err, LoaderError::Catalog(_)));
    assert!(err.to_string().contains("duplicate rule id 'dog-lepto'"));
}

#[test]
fn written_builtin_templates_load_back_identically() {
    let (_dir, mut loader) = temp_loader();
    for template in Catalog::builtin().templates() {
        let path = loader.write_template(template).unwrap();
        assert!(path.ends_with(format!("{}.yml", template.pet_type)));
    }

    let results = loader.load_all().unwrap();
    assert_eq!(count(&results, |s| matches!(s, LoadStatus::Loaded { .. })), 2);

    let loaded: Vec<_> = loader.templates().cloned().collect();
    let builtin: Vec<_> = Catalog::builtin().templates().cloned().collect();
    assert_eq!(loaded, builtin);
}

#[test]
fn rescanning_replaces_previous_load() {
    let (dir, mut loader) = temp_loader();
    fs::write(dir.path().join("dog.yml"), DOG_TEMPLATE_YAML).unwrap();

    loader.load_all().unwrap();
    loader.load_all().unwrap();
    assert_eq!(loader.templates().map(|t| t.schedules.len()).sum::<usize>(), 2);

    // A file removed between scans drops out of the loaded set.
    fs::write(dir.path().join("cat.yml"), CAT_TEMPLATE_YAML).unwrap();
    fs::remove_file(dir.path().join("dog.yml")).unwrap();
    loader.load_all().unwrap();
    let catalog = loader.into_catalog().unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(catalog.template(PetType::Dog).is_err());
}

#[test]
fn load_results_serialize_flat_with_camel_case_fields() {
    let (dir, mut loader) = temp_loader();
    fs::write(dir.path().join("cat.yml"), CAT_TEMPLATE_YAML).unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let results = loader.load_all().unwrap();
    let json = serde_json::to_value(&results).unwrap();

    assert_eq!(json[0]["status"], "loaded");
    assert_eq!(json[0]["petType"], "cat");
    assert_eq!(json[0]["ruleCount"], 1);
    assert_eq!(json[1]["status"], "skipped");
    assert_eq!(json[1]["reason"], "not a YAML file");
    assert!(json[1]["path"].as_str().unwrap().ends_with("notes.txt"));
}
