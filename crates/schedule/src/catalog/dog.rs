//! Canine care schedule.

use super::builder::RuleBuilder;
use crate::schema::{
    CareScheduleRule, EventTrigger, EventType, PetType, Priority, RecurrenceUnit,
};

const AAHA_VACCINES: &str = "AAHA Canine Vaccination Guidelines (2022)";
const AAHA_LIFE_STAGE: &str = "AAHA Canine Life Stage Guidelines (2019)";
const CAPC: &str = "Companion Animal Parasite Council recommendations";
const AVDC: &str = "AVDC / AAHA Dental Care Guidelines";

fn dog(id: &str, name: &str, event_type: EventType, priority: Priority) -> RuleBuilder {
    RuleBuilder::new(PetType::Dog, id, name, event_type, priority)
}

pub(super) fn rules() -> Vec<CareScheduleRule> {
    vec![
        dog("dog-dhpp-puppy-series", "DHPP Puppy Series", EventType::Vaccination, Priority::High)
            .describe("Distemper, hepatitis, parainfluenza and parvovirus boosters every 3 weeks until 16 weeks of age.")
            .starts_at(2)
            .every(3, RecurrenceUnit::Weeks)
            .ends_at(4)
            .source(AAHA_VACCINES)
            .build(),
        dog("dog-rabies", "Rabies Vaccination", EventType::Vaccination, Priority::High)
            .describe("Core rabies vaccine, first dose at 12-16 weeks, then yearly.")
            .starts_at(3)
            .every(1, RecurrenceUnit::Years)
            .source(AAHA_VACCINES)
            .build(),
        dog("dog-dhpp-booster", "DHPP Booster", EventType::Vaccination, Priority::High)
            .describe("Adult DHPP booster every 3 years after the puppy series.")
            .starts_at(12)
            .every(3, RecurrenceUnit::Years)
            .source(AAHA_VACCINES)
            .build(),
        dog("dog-bordetella", "Bordetella (Kennel Cough)", EventType::Vaccination, Priority::Medium)
            .describe("Non-core vaccine for dogs that board, visit daycare or dog parks.")
            .starts_at(4)
            .every(1, RecurrenceUnit::Years)
            .source(AAHA_VACCINES)
            .build(),
        dog("dog-puppy-wellness", "Puppy Wellness Exam", EventType::WellnessExam, Priority::High)
            .describe("Monthly growth and development check during the vaccine series.")
            .triggered_by(EventTrigger::Birth)
            .starts_at(0)
            .every(1, RecurrenceUnit::Months)
            .ends_at(4)
            .source(AAHA_LIFE_STAGE)
            .build(),
        dog("dog-adult-wellness", "Annual Wellness Exam", EventType::WellnessExam, Priority::Medium)
            .describe("Yearly physical examination, weight check and bloodwork review.")
            .starts_at(12)
            .every(1, RecurrenceUnit::Years)
            .ends_at(84)
            .source(AAHA_LIFE_STAGE)
            .build(),
        dog("dog-senior-wellness", "Senior Wellness Exam", EventType::WellnessExam, Priority::High)
            .describe("Twice-yearly senior screening including bloodwork and urinalysis.")
            .starts_at(84)
            .every(6, RecurrenceUnit::Months)
            .source(AAHA_LIFE_STAGE)
            .build(),
        dog("dog-heartworm-prevention", "Heartworm Prevention", EventType::ParasitePrevention, Priority::High)
            .describe("Monthly heartworm preventive, year-round.")
            .starts_at(2)
            .every(1, RecurrenceUnit::Months)
            .source(CAPC)
            .build(),
        dog("dog-flea-tick-prevention", "Flea & Tick Prevention", EventType::ParasitePrevention, Priority::Medium)
            .describe("Monthly topical or oral flea and tick control.")
            .starts_at(2)
            .every(1, RecurrenceUnit::Months)
            .source(CAPC)
            .build(),
        dog("dog-puppy-deworming", "Puppy Deworming", EventType::ParasitePrevention, Priority::High)
            .describe("Deworm every 2 weeks through 3 months of age.")
            .starts_at(0)
            .every(2, RecurrenceUnit::Weeks)
            .up_to_age(3)
            .source(CAPC)
            .build(),
        dog("dog-dental-cleaning", "Professional Dental Cleaning", EventType::DentalCare, Priority::Medium)
            .describe("Annual dental examination and cleaning under anesthesia.")
            .starts_at(24)
            .every(1, RecurrenceUnit::Years)
            .source(AVDC)
            .build(),
        dog("dog-grooming", "Grooming & Nail Trim", EventType::Grooming, Priority::Low)
            .describe("Brushing, bath and nail trim.")
            .starts_at(4)
            .every(6, RecurrenceUnit::Weeks)
            .build(),
    ]
}
