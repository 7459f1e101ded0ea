//! Tests for schema types.

use super::*;

const PUPPY_VACCINE_YAML: &str = r#"
id: dog-dhpp-puppy-series
name: DHPP Puppy Series
description: Distemper, hepatitis, parainfluenza and parvovirus boosters
petType: dog
eventType: vaccination
startCondition:
  ageMonths: 2
recurrence:
  interval: 3
  unit: weeks
endCondition:
  ageMonths: 4
priority: high
source: AAHA Canine Vaccination Guidelines
createdAt: "2024-01-15T00:00:00Z"
updatedAt: "2024-01-15T00:00:00Z"
"#;

const TEMPLATE_YAML: &str = r#"
petType: cat
schedules:
  - id: cat-grooming
    name: Long-hair Grooming
    petType: cat
    eventType: grooming
    startCondition:
      eventTrigger: adoption
    recurrence:
      interval: 8
      unit: weeks
      conditions:
        ageMinMonths: 6
        breedSpecific: [persian, maine_coon]
    priority: low
"#;

#[test]
fn parse_rule_with_camel_case_fields() {
    let rule: CareScheduleRule = serde_yaml::from_str(PUPPY_VACCINE_YAML).unwrap();
    assert_eq!(rule.id, "dog-dhpp-puppy-series");
    assert_eq!(rule.pet_type, PetType::Dog);
    assert_eq!(rule.event_type, EventType::Vaccination);
    assert_eq!(rule.start_age_months(), 2);
    assert_eq!(rule.recurrence.interval, 3);
    assert_eq!(rule.recurrence.unit, RecurrenceUnit::Weeks);
    assert_eq!(rule.end_age_months(), Some(4));
    assert_eq!(rule.priority, Priority::High);
}

#[test]
fn parse_template_with_trigger_and_conditions() {
    let template: CareScheduleTemplate = serde_yaml::from_str(TEMPLATE_YAML).unwrap();
    assert_eq!(template.pet_type, PetType::Cat);
    let rule = &template.schedules[0];
    assert_eq!(rule.start_condition.event_trigger, Some(EventTrigger::Adoption));
    // No age declared: applicable from birth.
    assert_eq!(rule.start_age_months(), 0);
    let conditions = rule.recurrence.conditions.as_ref().unwrap();
    assert_eq!(conditions.age_min_months, Some(6));
    assert_eq!(conditions.age_max_months, None);
    assert_eq!(
        conditions.breed_specific.as_deref(),
        Some(&["persian".to_string(), "maine_coon".to_string()][..])
    );
    assert!(rule.end_condition.is_none());
    assert!(rule.description.is_empty());
}

#[test]
fn unknown_unit_is_a_parse_error() {
    let yaml = PUPPY_VACCINE_YAML.replace("unit: weeks", "unit: fortnights");
    assert!(serde_yaml::from_str::<CareScheduleRule>(&yaml).is_err());
}

#[test]
fn unknown_field_is_rejected() {
    let yaml = format!("{}\nseverity: urgent\n", PUPPY_VACCINE_YAML);
    assert!(serde_yaml::from_str::<CareScheduleRule>(&yaml).is_err());
}

#[test]
fn serializes_enum_values_in_snake_case() {
    let json = serde_json::to_value(EventType::WellnessExam).unwrap();
    assert_eq!(json, "wellness_exam");
    let json = serde_json::to_value(EventTrigger::FirstVisit).unwrap();
    assert_eq!(json, "first_visit");
}

#[test]
fn display_matches_wire_names() {
    for name in EventType::NAMES {
        let parsed: EventType = name.parse().unwrap();
        assert_eq!(parsed.to_string(), *name);
    }
    for name in RecurrenceUnit::NAMES {
        let parsed: RecurrenceUnit = name.parse().unwrap();
        assert_eq!(parsed.as_str(), *name);
    }
    assert!("hourly".parse::<RecurrenceUnit>().is_err());
    assert!("urgent".parse::<Priority>().is_err());
}

#[test]
fn event_type_and_priority_parse_like_pet_type() {
    assert_eq!("Grooming".parse::<EventType>().unwrap(), EventType::Grooming);
    assert_eq!(" WELLNESS_EXAM ".parse::<EventType>().unwrap(), EventType::WellnessExam);
    assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
    let err = "Acupuncture".parse::<EventType>().unwrap_err();
    assert!(err.contains("Acupuncture"));
}
