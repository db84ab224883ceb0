use serde::{Deserialize, Serialize};

/// Tunable parts of the welfare scoring rubric. The per-factor weight
/// tables in `rules` are fixed; only the completion bonus and the risk
/// thresholds are operator-adjustable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points awarded per completed scheme application.
    pub completion_bonus_step: u32,
    /// Ceiling on the total completion bonus.
    pub completion_bonus_cap: u8,
    /// Total score at or above which a profile is high risk.
    pub high_risk_threshold: u8,
    /// Total score at or above which a profile is medium risk.
    pub medium_risk_threshold: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            completion_bonus_step: 2,
            completion_bonus_cap: 10,
            high_risk_threshold: 65,
            medium_risk_threshold: 40,
        }
    }
}
