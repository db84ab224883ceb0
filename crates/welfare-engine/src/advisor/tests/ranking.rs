use super::common::*;
use crate::advisor::domain::{Scheme, SchemeDomain};
use crate::advisor::{eligible_schemes, rank_schemes, SchemeCatalog};

fn flat_grant(id: &'static str) -> Scheme {
    Scheme {
        id,
        name: "Flat Grant",
        domain: SchemeDomain::Financial,
        description: "Unconditional support grant",
        min_age: 0,
        max_age: 120,
        income_limit: 0,
        occupation_required: Vec::new(),
        gender_required: None,
        benefits: vec!["One-time payout"],
        risks: Vec::new(),
        required_documents: Vec::new(),
        estimated_financial_impact: "Rs 1,000 one-time",
        portal_url: None,
    }
}

#[test]
fn recommendations_sort_by_match_score_descending() {
    let catalog = SchemeCatalog::standard();
    let profile = farmer_profile();
    let score = scoring_engine().score(&profile, 0);

    let eligible = eligible_schemes(&profile, catalog.schemes());
    let ranked = rank_schemes(&profile, &eligible, &score);

    let ordered: Vec<(&str, i32)> = ranked
        .iter()
        .map(|recommendation| (recommendation.scheme.id, recommendation.match_score))
        .collect();
    assert_eq!(
        ordered,
        vec![
            ("fin-1", 94),
            ("agri-2", 85),
            ("agri-1", 80),
            ("health-1", 76),
        ]
    );
}

#[test]
fn income_headroom_reason_appears_above_half_ratio() {
    let catalog = SchemeCatalog::standard();
    let profile = farmer_profile();
    let score = scoring_engine().score(&profile, 0);

    let eligible = eligible_schemes(&profile, catalog.schemes());
    let ranked = rank_schemes(&profile, &eligible, &score);

    let jan_dhan = ranked
        .iter()
        .find(|recommendation| recommendation.scheme.id == "fin-1")
        .expect("ranked scheme");
    assert!(jan_dhan
        .reason
        .contains("Your income qualifies you well within the limit"));

    // Household income sits at exactly half of this scheme's limit, which
    // earns ratio points but not the headroom reason.
    let kisan_credit = ranked
        .iter()
        .find(|recommendation| recommendation.scheme.id == "agri-2")
        .expect("ranked scheme");
    assert!(!kisan_credit
        .reason
        .contains("Your income qualifies you well within the limit"));
}

#[test]
fn affinity_hit_names_the_occupation_and_domain() {
    let catalog = SchemeCatalog::standard();
    let profile = farmer_profile();
    let score = scoring_engine().score(&profile, 0);

    let eligible = eligible_schemes(&profile, catalog.schemes());
    let ranked = rank_schemes(&profile, &eligible, &score);

    let pm_kisan = ranked
        .iter()
        .find(|recommendation| recommendation.scheme.id == "agri-1")
        .expect("ranked scheme");
    assert_eq!(
        pm_kisan.reason,
        "Highly relevant for Farmer in Agriculture domain. \
         Priority recommended due to high welfare need. \
         Large family size increases benefit value."
    );
}

#[test]
fn affinity_miss_falls_back_to_supplementary_reason() {
    let catalog = SchemeCatalog::standard();
    let profile = student_profile();
    let score = scoring_engine().score(&profile, 0);

    let pm_kisan = catalog.find("agri-1").expect("catalog scheme");
    let ranked = rank_schemes(&profile, &[pm_kisan], &score);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].match_score, 42);
    assert_eq!(
        ranked[0].reason,
        "Agriculture domain provides supplementary support. \
         Beneficial for improving welfare coverage. \
         Family coverage benefits apply."
    );
}

#[test]
fn zero_income_limit_skips_the_income_component() {
    let profile = farmer_profile();
    let score = scoring_engine().score(&profile, 0);
    let grant = flat_grant("grant-1");

    let ranked = rank_schemes(&profile, &[&grant], &score);

    assert_eq!(ranked[0].match_score, 70);
    assert!(!ranked[0].reason.contains("income qualifies"));
}

#[test]
fn equal_scores_keep_input_order() {
    let profile = farmer_profile();
    let score = scoring_engine().score(&profile, 0);
    let first = flat_grant("grant-a");
    let second = flat_grant("grant-b");

    let ranked = rank_schemes(&profile, &[&first, &second], &score);

    assert_eq!(ranked[0].scheme.id, "grant-a");
    assert_eq!(ranked[1].scheme.id, "grant-b");
    assert_eq!(ranked[0].match_score, ranked[1].match_score);
}

#[test]
fn small_families_still_collect_base_points() {
    let profile = salaried_profile();
    let score = scoring_engine().score(&profile, 0);
    let grant = flat_grant("grant-1");

    let ranked = rank_schemes(&profile, &[&grant], &score);

    // Financial affinity hit for salaried heads, low need, family of two.
    assert_eq!(ranked[0].match_score, 25 + 8 + 5);
    assert!(!ranked[0].reason.contains("family"));
}
