use super::common::*;
use crate::advisor::domain::Occupation;
use crate::advisor::{validate_profile, ProfileDraft};

#[test]
fn government_employee_with_low_income_is_flagged() {
    let mut profile = salaried_profile();
    profile.occupation = Occupation::Government;
    profile.income = 80_000;

    let warnings = validate_profile(&ProfileDraft::from(&profile));

    assert_eq!(warnings, vec!["Income seems low for a Government employee"]);
}

#[test]
fn salaried_income_floor_is_fifty_thousand() {
    let mut profile = salaried_profile();
    profile.income = 49_999;
    let warnings = validate_profile(&ProfileDraft::from(&profile));
    assert_eq!(
        warnings,
        vec!["Income seems unusually low for salaried employment"]
    );

    profile.income = 50_000;
    assert!(validate_profile(&ProfileDraft::from(&profile)).is_empty());
}

#[test]
fn student_collects_income_and_age_warnings_together() {
    let mut profile = student_profile();
    profile.income = 600_000;
    profile.age = 55;

    let warnings = validate_profile(&ProfileDraft::from(&profile));

    assert_eq!(
        warnings,
        vec![
            "Income seems high for a Student",
            "Age seems high for Student occupation",
        ]
    );
}

#[test]
fn homemaker_income_ceiling_names_the_alternative() {
    let mut profile = farmer_profile();
    profile.occupation = Occupation::Homemaker;
    profile.income = 900_000;

    let warnings = validate_profile(&ProfileDraft::from(&profile));

    assert_eq!(
        warnings,
        vec![
            "Income seems high for Homemaker/Housewife (consider listing as other occupation if self-employed)"
        ]
    );
}

#[test]
fn implausible_age_and_family_size_are_flagged() {
    let mut draft = ProfileDraft {
        age: Some(12),
        family_size: Some(25),
        ..ProfileDraft::default()
    };

    let warnings = validate_profile(&draft);

    assert_eq!(
        warnings,
        vec![
            "Age value appears invalid",
            "Family size value appears unusual",
        ]
    );

    draft.age = Some(121);
    draft.family_size = Some(0);
    let warnings = validate_profile(&draft);
    assert_eq!(warnings.len(), 2);
}

#[test]
fn plausible_profiles_produce_no_warnings() {
    assert!(validate_profile(&ProfileDraft::from(&farmer_profile())).is_empty());
    assert!(validate_profile(&ProfileDraft::from(&salaried_profile())).is_empty());
    assert!(validate_profile(&ProfileDraft::from(&student_profile())).is_empty());
}

#[test]
fn empty_draft_skips_every_check() {
    assert!(validate_profile(&ProfileDraft::default()).is_empty());
}

#[test]
fn occupation_checks_need_both_fields_present() {
    let draft = ProfileDraft {
        income: Some(10),
        ..ProfileDraft::default()
    };
    assert!(validate_profile(&draft).is_empty());

    let draft = ProfileDraft {
        occupation: Some(Occupation::Government),
        ..ProfileDraft::default()
    };
    assert!(validate_profile(&draft).is_empty());
}
