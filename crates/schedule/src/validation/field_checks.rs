//! Per-field checks over an untyped rule mapping.

use serde_json::{Map, Value};

use super::fuzzy::suggest;
use super::ValidationResult;
use crate::schema::{EventType, Priority, RecurrenceUnit};

const PET_TYPES: &[&str] = &["dog", "cat"];

type Fields = Map<String, Value>;

// ── Identity ────────────────────────────────────────────────────────

pub(super) fn validate_identity(rule: &Fields, result: &mut ValidationResult) {
    if !is_non_blank_string(rule.get("id")) {
        result.error("id", "Rule ID is required");
    }
    if !is_non_blank_string(rule.get("name")) {
        result.error("name", "Rule name is required");
    }
}

fn is_non_blank_string(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .map(|s| !s.trim().is_empty())
        .unwrap_or(false)
}

// ── Pet type, event type, priority ──────────────────────────────────

pub(super) fn validate_classification(rule: &Fields, result: &mut ValidationResult) {
    validate_pet_type(rule.get("petType"), "petType", result);

    match rule.get("eventType") {
        None | Some(Value::Null) => result.error("eventType", "Event type is required"),
        Some(value) => validate_enum(value, "eventType", "event type", EventType::NAMES, result),
    }

    match rule.get("priority") {
        None | Some(Value::Null) => result.error("priority", "Priority is required"),
        Some(value) => validate_enum(value, "priority", "priority", Priority::NAMES, result),
    }
}

pub(super) fn validate_pet_type(value: Option<&Value>, path: &str, result: &mut ValidationResult) {
    match value {
        None | Some(Value::Null) => result.error(path, "Pet type is required"),
        Some(value) => validate_enum(value, path, "pet type", PET_TYPES, result),
    }
}

fn validate_enum(
    value: &Value,
    path: &str,
    label: &str,
    allowed: &[&str],
    result: &mut ValidationResult,
) {
    match value.as_str() {
        Some(s) if allowed.contains(&s) => {}
        Some(s) => result.error_with_suggestion(
            path,
            format!("Invalid {label} '{s}', expected one of: {}", allowed.join(", ")),
            suggest(s, allowed),
        ),
        None => result.error(
            path,
            format!("Invalid {label} {value}, expected one of: {}", allowed.join(", ")),
        ),
    }
}

// ── Recurrence ──────────────────────────────────────────────────────

pub(super) fn validate_recurrence(rule: &Fields, result: &mut ValidationResult) {
    let recurrence = match rule.get("recurrence") {
        Some(Value::Object(recurrence)) => recurrence,
        None | Some(Value::Null) => {
            result.error("recurrence", "Recurrence is required");
            return;
        }
        Some(_) => {
            result.error("recurrence", "Recurrence must be a mapping with 'interval' and 'unit'");
            return;
        }
    };

    let interval_ok = recurrence
        .get("interval")
        .and_then(Value::as_u64)
        .map(|n| n > 0 && n <= u64::from(u32::MAX))
        .unwrap_or(false);
    if !interval_ok {
        result.error(
            "recurrence.interval",
            "Recurrence interval must be a positive integer",
        );
    }

    match recurrence.get("unit") {
        None | Some(Value::Null) => result.error("recurrence.unit", "Recurrence unit is required"),
        Some(value) => validate_enum(
            value,
            "recurrence.unit",
            "recurrence unit",
            RecurrenceUnit::NAMES,
            result,
        ),
    }

    if let Some(Value::Object(conditions)) = recurrence.get("conditions") {
        let min = conditions.get("ageMinMonths").and_then(Value::as_u64);
        let max = conditions.get("ageMaxMonths").and_then(Value::as_u64);
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                result.warn(
                    "recurrence.conditions",
                    format!("ageMinMonths ({min}) exceeds ageMaxMonths ({max}); rule can never apply"),
                );
            }
        }
    }
}

// ── Start / end conditions (advisory) ───────────────────────────────

pub(super) fn validate_conditions(rule: &Fields, result: &mut ValidationResult) {
    let start = rule.get("startCondition").and_then(Value::as_object);
    let start_age = start.and_then(|s| s.get("ageMonths")).and_then(Value::as_u64);
    let trigger = start.and_then(|s| s.get("eventTrigger")).filter(|v| !v.is_null());

    if let (None, Some(trigger)) = (start_age, trigger) {
        result.warn(
            "startCondition.eventTrigger",
            format!("Event trigger {trigger} is not evaluated; the rule applies from birth"),
        );
    }

    let Some(end) = rule.get("endCondition").and_then(Value::as_object) else {
        return;
    };

    if end.get("maxOccurrences").is_some_and(|v| !v.is_null()) {
        result.warn(
            "endCondition.maxOccurrences",
            "maxOccurrences is not enforced by event generation",
        );
    }

    if let Some(end_age) = end.get("ageMonths").and_then(Value::as_u64) {
        let start_age = start_age.unwrap_or(0);
        if end_age < start_age {
            result.warn(
                "endCondition.ageMonths",
                format!(
                    "End age ({end_age}) is below start age ({start_age}); rule can never apply"
                ),
            );
        }
    }
}
