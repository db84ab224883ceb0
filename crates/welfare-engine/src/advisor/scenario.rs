use serde::{Deserialize, Serialize};

use super::domain::{FutureRecommendation, Profile, Scheme, SchemeRecommendation, WelfareScore};
use super::scoring::ScoringEngine;
use super::{eligibility, planner, ranking};

const TOP_RECOMMENDATIONS: usize = 3;

/// What-if adjustments applied on top of a stored profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioAdjustments {
    pub income_override: Option<u64>,
    pub age_offset: i16,
}

/// Side-by-side outcome of a simulated profile change.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub current_score: WelfareScore,
    pub simulated_score: WelfareScore,
    pub score_delta: i16,
    pub top_recommendations: Vec<SchemeRecommendation>,
    pub future_plan: Vec<FutureRecommendation>,
}

/// Rescoring and re-ranking with the adjustments applied. The stored
/// profile itself is never modified.
pub fn simulate(
    profile: &Profile,
    schemes: &[Scheme],
    completed_applications: u32,
    adjustments: &ScenarioAdjustments,
    engine: &ScoringEngine,
) -> ScenarioOutcome {
    let current_score = engine.score(profile, completed_applications);

    let mut simulated = profile.clone();
    if let Some(income) = adjustments.income_override {
        simulated.income = income;
    }
    simulated.age = apply_age_offset(profile.age, adjustments.age_offset);

    let simulated_score = engine.score(&simulated, completed_applications);

    let eligible = eligibility::eligible_schemes(&simulated, schemes);
    let mut top_recommendations = ranking::rank_schemes(&simulated, &eligible, &simulated_score);
    top_recommendations.truncate(TOP_RECOMMENDATIONS);

    ScenarioOutcome {
        current_score,
        simulated_score,
        score_delta: i16::from(simulated_score.total) - i16::from(current_score.total),
        top_recommendations,
        future_plan: planner::plan_future_recommendations(&simulated),
    }
}

// Offsets below zero or past the u8 range clamp instead of wrapping.
fn apply_age_offset(age: u8, offset: i16) -> u8 {
    (i16::from(age) + offset).clamp(0, i16::from(u8::MAX)) as u8
}
