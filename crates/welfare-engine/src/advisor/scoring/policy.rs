use super::super::domain::RiskCategory;
use super::config::ScoringConfig;

pub(super) fn classify(total: u8, config: &ScoringConfig) -> RiskCategory {
    if total >= config.high_risk_threshold {
        RiskCategory::High
    } else if total >= config.medium_risk_threshold {
        RiskCategory::Medium
    } else {
        RiskCategory::Low
    }
}
