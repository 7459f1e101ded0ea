//! Tests for the generator module.

use chrono::{DateTime, TimeZone, Utc};

use crate::catalog::Catalog;
use crate::generator::{calculate_next_due_date, CareEventGenerator, LastEventDates};
use crate::query::ScheduleQuery;
use crate::schema::{
    CareScheduleRule, CareScheduleTemplate, EventType, PetType, Priority, Recurrence,
    RecurrenceUnit, StartCondition,
};

fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn monthly_rule(id: &str, start_months: u32) -> CareScheduleRule {
    CareScheduleRule {
        id: id.to_string(),
        name: format!("Rule {}", id),
        description: "test description".to_string(),
        pet_type: PetType::Dog,
        event_type: EventType::ParasitePrevention,
        start_condition: StartCondition::at_age(start_months),
        recurrence: Recurrence::new(1, RecurrenceUnit::Months),
        end_condition: None,
        priority: Priority::Medium,
        source: String::new(),
        created_at: String::new(),
        updated_at: String::new(),
    }
}

// -- calculate_next_due_date -------------------------------------------

#[test]
fn first_due_date_is_start_age_plus_one_interval() {
    let rule = monthly_rule("r", 2);
    let due = calculate_next_due_date(&rule, utc(2023, 6, 1), None).unwrap();
    assert_eq!(due, utc(2023, 9, 1));
}

#[test]
fn history_anchors_on_last_event_regardless_of_birth() {
    let rule = monthly_rule("r", 2);
    for dob in [utc(2020, 1, 1), utc(2023, 6, 1), utc(2024, 5, 20)] {
        let due = calculate_next_due_date(&rule, dob, Some(utc(2024, 6, 1))).unwrap();
        assert_eq!(due, utc(2024, 7, 1));
    }
}

#[test]
fn missing_start_age_anchors_on_birth() {
    let mut rule = monthly_rule("r", 0);
    rule.start_condition = StartCondition::default();
    rule.recurrence = Recurrence::new(2, RecurrenceUnit::Weeks);
    let due = calculate_next_due_date(&rule, utc(2024, 3, 1), None).unwrap();
    assert_eq!(due, utc(2024, 3, 15));
}

// -- CareEventGenerator ------------------------------------------------

#[test]
fn events_copy_rule_fields() {
    let catalog = Catalog::from_templates(
        "test",
        [CareScheduleTemplate::new(PetType::Dog, vec![monthly_rule("only", 0)])],
    )
    .unwrap();
    let generator = CareEventGenerator::new(ScheduleQuery::new(&catalog));

    let events = generator
        .generate_at("pet-1", PetType::Dog, utc(2024, 1, 10), &LastEventDates::new(), utc(2024, 4, 1))
        .unwrap();

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.pet_id, "pet-1");
    assert_eq!(event.schedule_rule_id, "only");
    assert_eq!(event.title, "Rule only");
    assert_eq!(event.description, "test description");
    assert_eq!(event.event_type, EventType::ParasitePrevention);
    assert_eq!(event.priority, Priority::Medium);
    assert_eq!(event.due_date, utc(2024, 2, 10));
}

#[test]
fn due_dates_ignore_now_once_rule_applies() {
    let generator = CareEventGenerator::builtin();
    let dob = utc(2020, 3, 10);
    let none = LastEventDates::new();

    let a = generator.generate_at("p", PetType::Cat, dob, &none, utc(2024, 1, 1)).unwrap();
    let b = generator.generate_at("p", PetType::Cat, dob, &none, utc(2024, 11, 30)).unwrap();

    let rabies_a = a.iter().find(|e| e.schedule_rule_id == "cat-rabies").unwrap();
    let rabies_b = b.iter().find(|e| e.schedule_rule_id == "cat-rabies").unwrap();
    // 3 months to become eligible + 1 year.
    assert_eq!(rabies_a.due_date, utc(2021, 6, 10));
    assert_eq!(rabies_a.due_date, rabies_b.due_date);
}

#[test]
fn last_event_dates_are_applied_per_rule() {
    let generator = CareEventGenerator::builtin();
    let mut last = LastEventDates::new();
    last.insert("dog-heartworm-prevention".to_string(), utc(2024, 6, 1));

    let events = generator
        .generate_at("rex", PetType::Dog, utc(2023, 1, 1), &last, utc(2024, 6, 15))
        .unwrap();

    let heartworm = events
        .iter()
        .find(|e| e.schedule_rule_id == "dog-heartworm-prevention")
        .unwrap();
    assert_eq!(heartworm.due_date, utc(2024, 7, 1));

    let flea = events
        .iter()
        .find(|e| e.schedule_rule_id == "dog-flea-tick-prevention")
        .unwrap();
    assert_eq!(flea.due_date, utc(2023, 4, 1));
}

#[test]
fn regeneration_is_idempotent() {
    let generator = CareEventGenerator::builtin();
    let mut last = LastEventDates::new();
    last.insert("dog-rabies".to_string(), utc(2024, 2, 29));
    let now = utc(2024, 8, 1);

    let first = generator.generate_at("rex", PetType::Dog, utc(2021, 5, 5), &last, now).unwrap();
    let second = generator.generate_at("rex", PetType::Dog, utc(2021, 5, 5), &last, now).unwrap();

    let pairs = |events: &[crate::GeneratedCareEvent]| {
        events
            .iter()
            .map(|e| (e.schedule_rule_id.clone(), e.due_date))
            .collect::<Vec<_>>()
    };
    assert!(!first.is_empty());
    assert_eq!(pairs(&first), pairs(&second));
    assert_eq!(first, second);
}

#[test]
fn future_birth_date_yields_no_events() {
    let events = CareEventGenerator::builtin()
        .generate_at("unborn", PetType::Dog, utc(2025, 1, 1), &LastEventDates::new(), utc(2024, 6, 1))
        .unwrap();
    assert!(events.is_empty());
}

#[test]
fn newborn_gets_only_rules_starting_at_birth() {
    let events = CareEventGenerator::builtin()
        .generate_at("pup", PetType::Dog, utc(2024, 6, 1), &LastEventDates::new(), utc(2024, 6, 20))
        .unwrap();
    let ids: Vec<&str> = events.iter().map(|e| e.schedule_rule_id.as_str()).collect();
    assert_eq!(ids, vec!["dog-puppy-wellness", "dog-puppy-deworming"]);
}

#[test]
fn missing_species_template_propagates_as_error() {
    let catalog = Catalog::from_templates("test", Vec::new()).unwrap();
    let generator = CareEventGenerator::new(ScheduleQuery::new(&catalog));
    let result = generator.generate_at("p", PetType::Dog, utc(2020, 1, 1), &LastEventDates::new(), utc(2024, 1, 1));
    assert!(result.is_err());
}

#[test]
fn due_date_overflow_names_pet_and_rule() {
    let mut rule = monthly_rule("far-future", 0);
    rule.recurrence = Recurrence::new(u32::MAX, RecurrenceUnit::Years);
    let catalog = Catalog::from_templates("test", [CareScheduleTemplate::new(PetType::Dog, vec![rule])]).unwrap();
    let generator = CareEventGenerator::new(ScheduleQuery::new(&catalog));

    let err = generator
        .generate_at("p-9", PetType::Dog, utc(2024, 1, 1), &LastEventDates::new(), utc(2024, 2, 1))
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("care event generation"));
    assert!(message.contains("p-9"));
    assert!(message.contains("far-future"));
}
