use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

use pawcare_core::{parse_instant, PetType};
use pawcare_schedule::generator::LastEventDates;
use pawcare_schedule::EventType;

/// Care-schedule rules and event generation for dogs and cats.
///
/// All commands print JSON on stdout; logs go to stderr.
#[derive(Parser, Debug)]
#[command(name = "pawcare", version, about)]
pub struct Cli {
    /// Directory of YAML catalog files (overrides the built-in catalog).
    #[arg(long, env = "CATALOG_DIR", global = true)]
    pub catalog_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog rules, optionally filtered.
    Rules {
        #[arg(long)]
        pet_type: Option<PetType>,
        /// Requires --pet-type.
        #[arg(long, requires = "pet_type")]
        event_type: Option<EventType>,
    },

    /// Show a single rule by ID.
    Rule { id: String },

    /// Rules that apply to a pet of the given species and age.
    Applicable {
        #[arg(long)]
        pet_type: PetType,
        #[arg(long)]
        age_months: u32,
    },

    /// Next due date for one rule.
    DueDate {
        #[arg(long)]
        rule: String,
        #[arg(long, value_parser = parse_date)]
        birth: DateTime<Utc>,
        /// Most recent occurrence of this rule's event.
        #[arg(long, value_parser = parse_date)]
        last: Option<DateTime<Utc>>,
    },

    /// Generate the care event batch for a pet.
    Generate(PetArgs),

    /// Validate a YAML rule or template file, or a whole catalog directory.
    Validate { path: PathBuf },

    /// Generate and persist care events to PostgreSQL (PG_* settings).
    Sync(PetArgs),
}

#[derive(Args, Debug)]
pub struct PetArgs {
    #[arg(long)]
    pub pet_id: String,

    #[arg(long)]
    pub pet_type: PetType,

    #[arg(long, value_parser = parse_date)]
    pub birth: DateTime<Utc>,

    /// Last occurrence per rule as RULE_ID=DATE; repeatable.
    #[arg(long = "last", value_parser = parse_last_event)]
    pub last: Vec<(String, DateTime<Utc>)>,

    /// Instant used to compute the pet's age (default: now).
    #[arg(long, value_parser = parse_date)]
    pub now: Option<DateTime<Utc>>,
}

impl PetArgs {
    pub fn last_event_dates(&self) -> LastEventDates {
        self.last.iter().cloned().collect()
    }
}

fn parse_date(input: &str) -> Result<DateTime<Utc>, String> {
    parse_instant(input).map_err(|e| e.to_string())
}

fn parse_last_event(input: &str) -> Result<(String, DateTime<Utc>), String> {
    let (rule, date) = input
        .split_once('=')
        .ok_or_else(|| format!("expected RULE_ID=DATE, got '{}'", input))?;
    let rule = rule.trim();
    if rule.is_empty() {
        return Err(format!("missing rule ID in '{}'", input));
    }
    Ok((rule.to_string(), parse_date(date)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_collects_repeated_last_dates() {
        let cli = Cli::try_parse_from([
            "pawcare",
            "generate",
            "--pet-id",
            "rex",
            "--pet-type",
            "Dog",
            "--birth",
            "2023-06-01",
            "--last",
            "dog-rabies=2024-02-29",
            "--last",
            "dog-grooming=2024-05-01T12:00:00Z",
        ])
        .unwrap();

        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.pet_type, PetType::Dog);
        let last = args.last_event_dates();
        assert_eq!(last["dog-rabies"], Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
        assert_eq!(last["dog-grooming"], Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        assert!(args.now.is_none());
    }

    #[test]
    fn bad_inputs_are_rejected_at_parse_time() {
        assert!(Cli::try_parse_from(["pawcare", "applicable", "--pet-type", "hamster", "--age-months", "3"]).is_err());
        assert!(Cli::try_parse_from(["pawcare", "due-date", "--rule", "x", "--birth", "yesterday"]).is_err());
        assert!(parse_last_event("dog-rabies").is_err());
        assert!(parse_last_event("=2024-01-01").is_err());
    }

    #[test]
    fn event_type_filter_requires_pet_type() {
        assert!(Cli::try_parse_from(["pawcare", "rules", "--event-type", "grooming"]).is_err());
        assert!(Cli::try_parse_from(["pawcare", "rules", "--pet-type", "cat", "--event-type", "grooming"]).is_ok());
    }
}
