//! Event type, priority, and trigger enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of care an event represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Vaccination,
    WellnessExam,
    ParasitePrevention,
    DentalCare,
    Grooming,
}

impl EventType {
    pub const NAMES: &'static [&'static str] = &[
        "vaccination",
        "wellness_exam",
        "parasite_prevention",
        "dental_care",
        "grooming",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Vaccination => "vaccination",
            EventType::WellnessExam => "wellness_exam",
            EventType::ParasitePrevention => "parasite_prevention",
            EventType::DentalCare => "dental_care",
            EventType::Grooming => "grooming",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vaccination" => Ok(EventType::Vaccination),
            "wellness_exam" => Ok(EventType::WellnessExam),
            "parasite_prevention" => Ok(EventType::ParasitePrevention),
            "dental_care" => Ok(EventType::DentalCare),
            "grooming" => Ok(EventType::Grooming),
            _ => Err(format!("unknown event type: '{}'", s)),
        }
    }
}

/// Urgency copied onto every generated event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const NAMES: &'static [&'static str] = &["high", "medium", "low"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("unknown priority: '{}'", s)),
        }
    }
}

/// Life event a rule may declare as its start. Not evaluated by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventTrigger {
    Adoption,
    Birth,
    FirstVisit,
}

impl fmt::Display for EventTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTrigger::Adoption => write!(f, "adoption"),
            EventTrigger::Birth => write!(f, "birth"),
            EventTrigger::FirstVisit => write!(f, "first_visit"),
        }
    }
}
