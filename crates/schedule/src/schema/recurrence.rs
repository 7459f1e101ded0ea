//! Recurrence interval and per-recurrence age conditions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar unit a recurrence interval is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceUnit {
    Days,
    Weeks,
    Months,
    Years,
}

impl RecurrenceUnit {
    pub const NAMES: &'static [&'static str] = &["days", "weeks", "months", "years"];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceUnit::Days => "days",
            RecurrenceUnit::Weeks => "weeks",
            RecurrenceUnit::Months => "months",
            RecurrenceUnit::Years => "years",
        }
    }
}

impl fmt::Display for RecurrenceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrenceUnit {
    type Err = crate::ScheduleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "days" => Ok(RecurrenceUnit::Days),
            "weeks" => Ok(RecurrenceUnit::Weeks),
            "months" => Ok(RecurrenceUnit::Months),
            "years" => Ok(RecurrenceUnit::Years),
            other => Err(crate::ScheduleError::UnsupportedRecurrenceUnit(
                other.to_string(),
            )),
        }
    }
}

/// How often an applicable rule repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Recurrence {
    /// Number of `unit`s between occurrences. Must be positive.
    pub interval: u32,
    pub unit: RecurrenceUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<RecurrenceConditions>,
}

impl Recurrence {
    pub fn new(interval: u32, unit: RecurrenceUnit) -> Self {
        Self {
            interval,
            unit,
            conditions: None,
        }
    }

    pub fn with_conditions(mut self, conditions: RecurrenceConditions) -> Self {
        self.conditions = Some(conditions);
        self
    }
}

/// Age window (and optional breed list) the recurrence is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecurrenceConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_min_months: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_max_months: Option<u32>,
    /// Informational only; applicability does not filter on breed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed_specific: Option<Vec<String>>,
}
