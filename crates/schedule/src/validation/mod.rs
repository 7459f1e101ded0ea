//! Rule validation with structured errors and suggestions.
//!
//! Checks the structural and semantic correctness of a care-schedule rule,
//! typed or untyped. Every check runs independently and all findings are
//! collected; validation never fails with an `Err`. Returns a
//! [`ValidationResult`] with errors (reject the rule) and warnings (advisory).

mod field_checks;
pub(crate) mod fuzzy;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::CareScheduleRule;

// ── Result types ────────────────────────────────────────────────────

/// Overall validation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// A blocking validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Path to the offending field, e.g. `"recurrence.interval"`.
    pub path: String,
    pub message: String,
    /// Optional "Did you mean …?" suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// A non-blocking advisory warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)?;
        } else {
            write!(f, "{}: {}", self.path, self.message)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

impl ValidationResult {
    pub(crate) fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion: None,
        });
    }

    pub(crate) fn error_with_suggestion(
        &mut self,
        path: impl Into<String>,
        message: impl Into<String>,
        suggestion: Option<&str>,
    ) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion: suggestion.map(String::from),
        });
    }

    pub(crate) fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            path: path.into(),
            message: message.into(),
        });
    }

    /// Fold another result into this one, prefixing its paths.
    pub(crate) fn absorb(&mut self, prefix: &str, other: ValidationResult) {
        self.valid &= other.valid;
        for mut e in other.errors {
            e.path = join_path(prefix, &e.path);
            self.errors.push(e);
        }
        for mut w in other.warnings {
            w.path = join_path(prefix, &w.path);
            self.warnings.push(w);
        }
    }

    /// Error messages joined for single-line reporting.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn join_path(prefix: &str, path: &str) -> String {
    match (prefix.is_empty(), path.is_empty()) {
        (true, _) => path.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{}.{}", prefix, path),
    }
}

// ── Public API ──────────────────────────────────────────────────────

/// Validate a typed [`CareScheduleRule`].
pub fn validate_rule(rule: &CareScheduleRule) -> ValidationResult {
    match serde_json::to_value(rule) {
        Ok(value) => validate_rule_value(&value),
        Err(e) => {
            let mut result = ValidationResult::new();
            result.error("", format!("Rule could not be inspected: {e}"));
            result
        }
    }
}

/// Validate an untyped rule, e.g. one read from an external catalog file.
///
/// When every field check passes, the value is additionally deserialized
/// into a [`CareScheduleRule`]; a mismatch there is reported as a single
/// error at the root path.
pub fn validate_rule_value(value: &Value) -> ValidationResult {
    let mut result = ValidationResult::new();
    let Some(rule) = value.as_object() else {
        result.error("", "Rule must be a mapping of fields");
        return result;
    };

    field_checks::validate_identity(rule, &mut result);
    field_checks::validate_classification(rule, &mut result);
    field_checks::validate_recurrence(rule, &mut result);
    field_checks::validate_conditions(rule, &mut result);

    if result.valid {
        if let Err(e) = serde_json::from_value::<CareScheduleRule>(value.clone()) {
            result.error("", format!("Rule does not match the catalog schema: {e}"));
        }
    }
    result
}

/// Parse raw YAML and validate. A parse error becomes a single validation error.
pub fn validate_rule_yaml(yaml: &str) -> ValidationResult {
    match serde_yaml::from_str::<Value>(yaml) {
        Ok(value) => validate_rule_value(&value),
        Err(e) => {
            let mut result = ValidationResult::new();
            result.error("", format!("YAML parse error: {e}"));
            result
        }
    }
}

/// Validate an untyped template (`petType` plus a `schedules` list).
pub fn validate_template_value(value: &Value) -> ValidationResult {
    let mut result = ValidationResult::new();
    let Some(template) = value.as_object() else {
        result.error("", "Template must be a mapping with 'petType' and 'schedules'");
        return result;
    };

    field_checks::validate_pet_type(template.get("petType"), "petType", &mut result);

    match template.get("schedules") {
        Some(Value::Array(rules)) => {
            for (i, rule) in rules.iter().enumerate() {
                result.absorb(&format!("schedules[{i}]"), validate_rule_value(rule));
            }
        }
        Some(Value::Null) | None => result.warn("schedules", "Template defines no schedules"),
        Some(_) => result.error("schedules", "schedules must be a list of rules"),
    }
    result
}
