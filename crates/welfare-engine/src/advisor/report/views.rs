use serde::Serialize;

use super::super::domain::{RiskCategory, UserId};

#[derive(Debug, Clone, Serialize)]
pub struct RiskBandEntry {
    pub category: RiskCategory,
    pub category_label: &'static str,
    pub profiles: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StateCountEntry {
    pub state: String,
    pub profiles: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopSchemeEntry {
    pub scheme: &'static str,
    pub profiles: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlaggedProfileView {
    pub user_id: UserId,
    pub warning_count: usize,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CohortSummary {
    pub total_profiles: usize,
    pub average_score: u8,
    pub high_risk_profiles: usize,
    pub high_risk_pct: u8,
    pub risk_distribution: Vec<RiskBandEntry>,
    pub state_distribution: Vec<StateCountEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_scheme: Option<TopSchemeEntry>,
    pub flagged_profiles: Vec<FlaggedProfileView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CohortInsights {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_actions: Vec<String>,
}
