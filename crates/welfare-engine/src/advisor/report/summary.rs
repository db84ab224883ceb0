use std::collections::HashMap;

use super::super::domain::{Profile, RiskCategory, Scheme, UserId};
use super::super::scoring::ScoringEngine;
use super::super::validation::{self, ProfileDraft};
use super::super::{eligibility, ranking};
use super::views::{
    CohortInsights, CohortSummary, FlaggedProfileView, RiskBandEntry, StateCountEntry,
    TopSchemeEntry,
};

/// One stored profile plus its completed-application count.
#[derive(Debug, Clone)]
pub struct CohortEntry {
    pub user_id: UserId,
    pub profile: Profile,
    pub completed_applications: u32,
}

/// Aggregates accumulated across every stored profile.
#[derive(Debug, Default)]
pub struct CohortReport {
    pub total_profiles: usize,
    pub score_sum: u64,
    pub risk_counts: HashMap<RiskCategory, usize>,
    pub state_counts: HashMap<String, usize>,
    pub top_scheme_counts: HashMap<&'static str, usize>,
    pub flagged: Vec<FlaggedProfile>,
}

impl CohortReport {
    /// Scores and ranks every entry once, counting each profile's top
    /// recommendation toward the modal scheme.
    pub fn build(entries: &[CohortEntry], schemes: &[Scheme], engine: &ScoringEngine) -> Self {
        let mut score_sum: u64 = 0;
        let mut risk_counts: HashMap<RiskCategory, usize> = HashMap::new();
        let mut state_counts: HashMap<String, usize> = HashMap::new();
        let mut top_scheme_counts: HashMap<&'static str, usize> = HashMap::new();
        let mut flagged = Vec::new();

        for entry in entries {
            let score = engine.score(&entry.profile, entry.completed_applications);
            score_sum += u64::from(score.total);
            *risk_counts.entry(score.risk_category).or_default() += 1;
            *state_counts.entry(entry.profile.state.clone()).or_default() += 1;

            let eligible = eligibility::eligible_schemes(&entry.profile, schemes);
            let ranked = ranking::rank_schemes(&entry.profile, &eligible, &score);
            if let Some(top) = ranked.first() {
                *top_scheme_counts.entry(top.scheme.name).or_default() += 1;
            }

            let warnings = validation::validate_profile(&ProfileDraft::from(&entry.profile));
            if !warnings.is_empty() {
                flagged.push(FlaggedProfile {
                    user_id: entry.user_id.clone(),
                    warnings,
                });
            }
        }

        Self {
            total_profiles: entries.len(),
            score_sum,
            risk_counts,
            state_counts,
            top_scheme_counts,
            flagged,
        }
    }

    pub fn summary(&self) -> CohortSummary {
        let average_score = if self.total_profiles == 0 {
            0
        } else {
            (self.score_sum as f64 / self.total_profiles as f64).round() as u8
        };

        let high_risk_profiles = self
            .risk_counts
            .get(&RiskCategory::High)
            .copied()
            .unwrap_or(0);
        let high_risk_pct = if self.total_profiles == 0 {
            0
        } else {
            ((high_risk_profiles as f64 / self.total_profiles as f64) * 100.0).round() as u8
        };

        let risk_distribution = RiskCategory::ordered()
            .into_iter()
            .map(|category| RiskBandEntry {
                category,
                category_label: category.label(),
                profiles: self.risk_counts.get(&category).copied().unwrap_or(0),
            })
            .collect();

        let mut state_distribution: Vec<StateCountEntry> = self
            .state_counts
            .iter()
            .map(|(state, count)| StateCountEntry {
                state: state.clone(),
                profiles: *count,
            })
            .collect();
        state_distribution.sort_by(|a, b| {
            b.profiles
                .cmp(&a.profiles)
                .then_with(|| a.state.cmp(&b.state))
        });

        // Highest count wins; ties fall to the alphabetically first name.
        let top_scheme = self
            .top_scheme_counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(name, count)| TopSchemeEntry {
                scheme: *name,
                profiles: *count,
            });

        let flagged_profiles = self.flagged.iter().map(FlaggedProfile::to_view).collect();

        CohortSummary {
            total_profiles: self.total_profiles,
            average_score,
            high_risk_profiles,
            high_risk_pct,
            risk_distribution,
            state_distribution,
            top_scheme,
            flagged_profiles,
        }
    }
}

impl CohortSummary {
    pub fn insights(&self) -> CohortInsights {
        super::generate_insights(self)
    }
}

/// Profile whose draft raised plausibility warnings.
#[derive(Debug, Clone)]
pub struct FlaggedProfile {
    pub user_id: UserId,
    pub warnings: Vec<String>,
}

impl FlaggedProfile {
    pub fn to_view(&self) -> FlaggedProfileView {
        FlaggedProfileView {
            user_id: self.user_id.clone(),
            warning_count: self.warnings.len(),
            warnings: self.warnings.clone(),
        }
    }
}
