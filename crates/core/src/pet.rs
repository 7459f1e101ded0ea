use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::PawCareError;

/// Opaque pet identifier issued by the hosting backend.
pub type PetId = String;

/// Species supported by the care-schedule catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetType {
    Dog,
    Cat,
}

impl PetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetType {
    type Err = PawCareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dog" => Ok(PetType::Dog),
            "cat" => Ok(PetType::Cat),
            _ => Err(PawCareError::UnsupportedPetType(s.to_string())),
        }
    }
}

/// The subset of a pet profile the scheduling components read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetProfile {
    pub id: PetId,
    pub name: String,
    pub pet_type: PetType,
    #[serde(default)]
    pub breed: Option<String>,
    /// Required before care events can be generated.
    #[serde(default)]
    pub date_of_birth: Option<DateTime<Utc>>,
}

/// Parse a calendar date (`YYYY-MM-DD`, midnight UTC) or an RFC 3339 instant.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>, PawCareError> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc())
            .ok_or_else(|| PawCareError::InvalidDate(input.to_string()));
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| PawCareError::InvalidDate(input.to_string()))
}
