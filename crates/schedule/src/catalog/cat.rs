//! Feline care schedule.

use super::builder::RuleBuilder;
use crate::schema::{
    CareScheduleRule, EventTrigger, EventType, PetType, Priority, RecurrenceUnit,
};

const AAFP_VACCINES: &str = "AAHA/AAFP Feline Vaccination Guidelines (2020)";
const AAFP_LIFE_STAGE: &str = "AAHA/AAFP Feline Life Stage Guidelines (2021)";
const CAPC: &str = "Companion Animal Parasite Council recommendations";
const AVDC: &str = "AVDC / AAHA Dental Care Guidelines";

fn cat(id: &str, name: &str, event_type: EventType, priority: Priority) -> RuleBuilder {
    RuleBuilder::new(PetType::Cat, id, name, event_type, priority)
}

pub(super) fn rules() -> Vec<CareScheduleRule> {
    vec![
        cat("cat-fvrcp-kitten-series", "FVRCP Kitten Series", EventType::Vaccination, Priority::High)
            .describe("Feline viral rhinotracheitis, calicivirus and panleukopenia boosters every 3 weeks until 16 weeks.")
            .starts_at(2)
            .every(3, RecurrenceUnit::Weeks)
            .ends_at(4)
            .source(AAFP_VACCINES)
            .build(),
        cat("cat-felv-kitten-series", "FeLV Kitten Series", EventType::Vaccination, Priority::Medium)
            .describe("Feline leukemia virus primary series.")
            .starts_at(2)
            .every(3, RecurrenceUnit::Weeks)
            .ends_at(4)
            .source(AAFP_VACCINES)
            .build(),
        cat("cat-rabies", "Rabies Vaccination", EventType::Vaccination, Priority::High)
            .describe("Core rabies vaccine, first dose at 12 weeks, then yearly.")
            .starts_at(3)
            .every(1, RecurrenceUnit::Years)
            .source(AAFP_VACCINES)
            .build(),
        cat("cat-fvrcp-annual", "Annual FVRCP Booster", EventType::Vaccination, Priority::High)
            .describe("Yearly FVRCP booster for adult cats.")
            .starts_at(12)
            .every(1, RecurrenceUnit::Years)
            .source(AAFP_VACCINES)
            .build(),
        cat("cat-kitten-wellness", "Kitten Wellness Exam", EventType::WellnessExam, Priority::High)
            .describe("Monthly kitten check-up through 6 months of age.")
            .triggered_by(EventTrigger::Birth)
            .starts_at(0)
            .every(1, RecurrenceUnit::Months)
            .ends_at(6)
            .source(AAFP_LIFE_STAGE)
            .build(),
        cat("cat-adult-wellness", "Annual Wellness Exam", EventType::WellnessExam, Priority::Medium)
            .describe("Yearly physical examination and weight check.")
            .starts_at(12)
            .every(1, RecurrenceUnit::Years)
            .ends_at(120)
            .source(AAFP_LIFE_STAGE)
            .build(),
        cat("cat-senior-wellness", "Senior Wellness Exam", EventType::WellnessExam, Priority::High)
            .describe("Twice-yearly senior screening including blood pressure and bloodwork.")
            .starts_at(120)
            .every(6, RecurrenceUnit::Months)
            .source(AAFP_LIFE_STAGE)
            .build(),
        cat("cat-flea-prevention", "Flea Prevention", EventType::ParasitePrevention, Priority::Medium)
            .describe("Monthly flea control, indoor cats included.")
            .starts_at(2)
            .every(1, RecurrenceUnit::Months)
            .source(CAPC)
            .build(),
        cat("cat-kitten-deworming", "Kitten Deworming", EventType::ParasitePrevention, Priority::High)
            .describe("Deworm every 2 weeks through 3 months of age.")
            .starts_at(0)
            .every(2, RecurrenceUnit::Weeks)
            .up_to_age(3)
            .source(CAPC)
            .build(),
        cat("cat-dental-cleaning", "Professional Dental Cleaning", EventType::DentalCare, Priority::Medium)
            .describe("Annual dental examination and cleaning.")
            .starts_at(24)
            .every(1, RecurrenceUnit::Years)
            .source(AVDC)
            .build(),
        cat("cat-longhair-grooming", "Long-hair Grooming", EventType::Grooming, Priority::Low)
            .describe("Professional grooming for long-haired breeds to prevent matting.")
            .starts_at(6)
            .every(8, RecurrenceUnit::Weeks)
            .for_breeds(&["persian", "maine_coon", "ragdoll"])
            .build(),
    ]
}
