mod config;
mod policy;
mod rules;

pub use config::ScoringConfig;

use super::domain::{Profile, WelfareScore};

/// Stateless scorer that applies the rubric configuration to a profile.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores a profile on the five need factors plus the completion
    /// bonus. The total is capped at 100 before risk classification.
    pub fn score(&self, profile: &Profile, completed_applications: u32) -> WelfareScore {
        let income = rules::income_points(profile.household_income());
        let dependents = rules::dependents_points(profile.family_size);
        let insurance = rules::insurance_points(profile.has_health_insurance, profile.has_pension);
        let occupation = rules::occupation_points(profile.occupation);
        let education = rules::education_points(profile.education);
        let bonus = rules::completion_bonus(completed_applications, &self.config);

        let sum = u16::from(income)
            + u16::from(dependents)
            + u16::from(insurance)
            + u16::from(occupation)
            + u16::from(education)
            + u16::from(bonus);
        let total = sum.min(100) as u8;

        WelfareScore {
            total,
            income,
            dependents,
            insurance,
            occupation,
            education,
            risk_category: policy::classify(total, &self.config),
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
