use super::views::{CohortInsights, CohortSummary};

pub(crate) fn generate_insights(summary: &CohortSummary) -> CohortInsights {
    let mut observations = Vec::new();
    let mut recommended_actions = Vec::new();

    if summary.total_profiles == 0 {
        observations.push("No citizen profiles enrolled yet".to_string());
        return CohortInsights {
            observations,
            recommended_actions,
        };
    }

    observations.push(format!(
        "{} profile(s) enrolled with an average welfare score of {}",
        summary.total_profiles, summary.average_score
    ));

    if summary.high_risk_profiles > 0 {
        observations.push(format!(
            "{} profile(s) ({}%) show high welfare need",
            summary.high_risk_profiles, summary.high_risk_pct
        ));
        recommended_actions.push(
            "Prioritize outreach to high-need citizens before the next enrollment window"
                .to_string(),
        );
    }

    if let Some(top) = &summary.top_scheme {
        observations.push(format!(
            "{} is the most recommended scheme ({} profile(s))",
            top.scheme, top.profiles
        ));
    }

    if let Some(leading) = summary.state_distribution.first() {
        observations.push(format!(
            "{} has the largest enrolled population ({} profile(s))",
            leading.state, leading.profiles
        ));
    }

    if !summary.flagged_profiles.is_empty() {
        recommended_actions.push(format!(
            "Review {} profile(s) flagged with plausibility warnings",
            summary.flagged_profiles.len()
        ));
    }

    if recommended_actions.is_empty() {
        recommended_actions.push("Maintain the current advisory cadence".to_string());
    }

    CohortInsights {
        observations,
        recommended_actions,
    }
}
