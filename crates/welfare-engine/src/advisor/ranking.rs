use super::domain::{
    Occupation, Profile, RiskCategory, Scheme, SchemeDomain, SchemeRecommendation, WelfareScore,
};

/// Ranks already-eligible schemes for a profile, highest match first.
/// The sort is stable, so equally-scored schemes keep catalog order.
pub fn rank_schemes(
    profile: &Profile,
    schemes: &[&Scheme],
    score: &WelfareScore,
) -> Vec<SchemeRecommendation> {
    let mut ranked: Vec<SchemeRecommendation> = schemes
        .iter()
        .copied()
        .map(|scheme| recommend(profile, scheme, score))
        .collect();

    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}

fn recommend(profile: &Profile, scheme: &Scheme, score: &WelfareScore) -> SchemeRecommendation {
    let mut match_score: i32 = 0;
    let mut reasons: Vec<String> = Vec::new();

    // Headroom under the income ceiling, worth up to 30 points. Schemes
    // without a ceiling contribute nothing here.
    if scheme.income_limit > 0 {
        let ratio = 1.0 - profile.household_income() as f64 / scheme.income_limit as f64;
        match_score += (ratio * 30.0).round() as i32;
        if ratio > 0.5 {
            reasons.push("Your income qualifies you well within the limit".to_string());
        }
    }

    if domain_affinity(scheme.domain).contains(&profile.occupation) {
        match_score += 25;
        reasons.push(format!(
            "Highly relevant for {} in {} domain",
            profile.occupation.label(),
            scheme.domain.label()
        ));
    } else {
        match_score += 10;
        reasons.push(format!(
            "{} domain provides supplementary support",
            scheme.domain.label()
        ));
    }

    match score.risk_category {
        RiskCategory::High => {
            match_score += 25;
            reasons.push("Priority recommended due to high welfare need".to_string());
        }
        RiskCategory::Medium => {
            match_score += 15;
            reasons.push("Beneficial for improving welfare coverage".to_string());
        }
        RiskCategory::Low => {
            match_score += 8;
            reasons.push("Additional welfare enhancement opportunity".to_string());
        }
    }

    if profile.family_size >= 5 {
        match_score += 20;
        reasons.push("Large family size increases benefit value".to_string());
    } else if profile.family_size >= 3 {
        match_score += 12;
        reasons.push("Family coverage benefits apply".to_string());
    } else {
        match_score += 5;
    }

    SchemeRecommendation {
        scheme: scheme.clone(),
        match_score,
        reason: format!("{}.", reasons.join(". ")),
    }
}

/// Occupations with a direct claim on each scheme domain. Anything else
/// still earns the supplementary-support base points.
fn domain_affinity(domain: SchemeDomain) -> &'static [Occupation] {
    match domain {
        SchemeDomain::Education => &[Occupation::Student, Occupation::Unemployed],
        SchemeDomain::Agriculture => &[Occupation::Farmer, Occupation::DailyWageWorker],
        SchemeDomain::Health => &[
            Occupation::Farmer,
            Occupation::Unemployed,
            Occupation::Student,
            Occupation::Housewife,
            Occupation::Homemaker,
            Occupation::Retired,
        ],
        SchemeDomain::Women => &[
            Occupation::Student,
            Occupation::Farmer,
            Occupation::Unemployed,
            Occupation::SelfEmployed,
            Occupation::Housewife,
            Occupation::Homemaker,
        ],
        SchemeDomain::Senior => &[
            Occupation::Unemployed,
            Occupation::Farmer,
            Occupation::Retired,
            Occupation::Housewife,
            Occupation::Homemaker,
        ],
        SchemeDomain::Msme => &[
            Occupation::SelfEmployed,
            Occupation::Farmer,
            Occupation::DailyWageWorker,
        ],
        SchemeDomain::Financial => &[
            Occupation::Student,
            Occupation::Farmer,
            Occupation::Salaried,
            Occupation::SelfEmployed,
            Occupation::Government,
            Occupation::Unemployed,
            Occupation::Housewife,
            Occupation::Homemaker,
            Occupation::Retired,
        ],
    }
}
