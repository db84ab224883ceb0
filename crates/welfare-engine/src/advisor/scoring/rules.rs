use super::super::domain::{EducationLevel, Occupation};
use super::config::ScoringConfig;

// Lower household income means higher welfare need. Bands are in rupees
// per year across the whole household.
pub(super) fn income_points(household_income: u64) -> u8 {
    match household_income {
        0..=100_000 => 30,
        100_001..=200_000 => 25,
        200_001..=300_000 => 20,
        300_001..=500_000 => 15,
        500_001..=800_000 => 10,
        _ => 5,
    }
}

pub(super) fn dependents_points(family_size: u8) -> u8 {
    match family_size {
        0..=2 => 4,
        3 => 8,
        4 => 12,
        5..=6 => 16,
        _ => 20,
    }
}

// Missing cover is the strongest need signal; partial cover still counts.
pub(super) fn insurance_points(has_health_insurance: bool, has_pension: bool) -> u8 {
    match (has_health_insurance, has_pension) {
        (false, false) => 25,
        (false, true) => 18,
        (true, false) => 12,
        (true, true) => 5,
    }
}

pub(super) fn occupation_points(occupation: Occupation) -> u8 {
    match occupation {
        Occupation::Unemployed => 15,
        Occupation::DailyWageWorker => 14,
        Occupation::Farmer => 12,
        Occupation::Student
        | Occupation::Housewife
        | Occupation::Homemaker
        | Occupation::Retired => 10,
        Occupation::SelfEmployed | Occupation::Other => 8,
        Occupation::Salaried => 4,
        Occupation::Government => 2,
    }
}

pub(super) fn education_points(education: EducationLevel) -> u8 {
    match education {
        EducationLevel::None => 10,
        EducationLevel::Primary => 8,
        EducationLevel::Secondary => 6,
        EducationLevel::HigherSecondary | EducationLevel::Other => 5,
        EducationLevel::Graduate => 3,
        EducationLevel::Postgraduate => 1,
    }
}

pub(super) fn completion_bonus(completed_applications: u32, config: &ScoringConfig) -> u8 {
    completed_applications
        .saturating_mul(config.completion_bonus_step)
        .min(u32::from(config.completion_bonus_cap)) as u8
}
