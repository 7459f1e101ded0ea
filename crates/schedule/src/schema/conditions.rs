//! Start and end conditions bounding when a rule applies.

use serde::{Deserialize, Serialize};

use super::EventTrigger;

/// When a rule first becomes applicable.
///
/// Only `age_months` is evaluated; a missing age counts as 0 (applicable from
/// birth), whether or not an `event_trigger` is declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StartCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_months: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_trigger: Option<EventTrigger>,
}

impl StartCondition {
    pub fn at_age(months: u32) -> Self {
        Self {
            age_months: Some(months),
            event_trigger: None,
        }
    }

    /// Effective start age in months.
    pub fn start_age_months(&self) -> u32 {
        self.age_months.unwrap_or(0)
    }
}

/// When a rule stops applying.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EndCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_months: Option<u32>,
    /// Carried for catalog authors; generation does not count occurrences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_occurrences: Option<u32>,
}

impl EndCondition {
    pub fn at_age(months: u32) -> Self {
        Self {
            age_months: Some(months),
            max_occurrences: None,
        }
    }
}
