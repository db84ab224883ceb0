use std::collections::HashMap;
use std::sync::OnceLock;

use crate::advisor::domain::{Area, EducationLevel, Gender, Occupation};

use super::normalizer::normalize_token;

static OCCUPATION_MAP: OnceLock<HashMap<String, Occupation>> = OnceLock::new();
static EDUCATION_MAP: OnceLock<HashMap<String, EducationLevel>> = OnceLock::new();

/// Field officers type occupations freehand, so unknown spellings fall
/// back to `Other` rather than failing the row.
pub(crate) fn occupation_for(value: &str) -> Occupation {
    occupation_map()
        .get(&normalize_token(value))
        .copied()
        .unwrap_or(Occupation::Other)
}

pub(crate) fn education_for(value: &str) -> EducationLevel {
    education_map()
        .get(&normalize_token(value))
        .copied()
        .unwrap_or(EducationLevel::Other)
}

pub(crate) fn gender_for(value: Option<&str>) -> Gender {
    match value.map(normalize_token).as_deref() {
        Some("male" | "m" | "man") => Gender::Male,
        Some("female" | "f" | "woman") => Gender::Female,
        _ => Gender::Other,
    }
}

/// Area has no safe fallback; an unrecognized value is a row issue.
pub(crate) fn area_for(value: &str) -> Option<Area> {
    match normalize_token(value).as_str() {
        "rural" | "village" => Some(Area::Rural),
        "urban" | "city" | "town" => Some(Area::Urban),
        _ => None,
    }
}

/// Missing flags mean "no cover"; unrecognized tokens are row issues.
pub(crate) fn flag_for(value: Option<&str>) -> Option<bool> {
    match value {
        None => Some(false),
        Some(raw) => match normalize_token(raw).as_str() {
            "yes" | "y" | "true" | "1" => Some(true),
            "no" | "n" | "false" | "0" => Some(false),
            _ => None,
        },
    }
}

fn occupation_map() -> &'static HashMap<String, Occupation> {
    OCCUPATION_MAP.get_or_init(|| {
        const ALIASES: &[(&str, Occupation)] = &[
            ("farmer", Occupation::Farmer),
            ("cultivator", Occupation::Farmer),
            ("agriculture", Occupation::Farmer),
            ("daily wage worker", Occupation::DailyWageWorker),
            ("daily wage", Occupation::DailyWageWorker),
            ("daily wage labourer", Occupation::DailyWageWorker),
            ("labourer", Occupation::DailyWageWorker),
            ("laborer", Occupation::DailyWageWorker),
            ("salaried", Occupation::Salaried),
            ("salaried employee", Occupation::Salaried),
            ("private employee", Occupation::Salaried),
            ("self-employed", Occupation::SelfEmployed),
            ("self employed", Occupation::SelfEmployed),
            ("business", Occupation::SelfEmployed),
            ("shopkeeper", Occupation::SelfEmployed),
            ("entrepreneur", Occupation::SelfEmployed),
            ("unemployed", Occupation::Unemployed),
            ("jobless", Occupation::Unemployed),
            ("student", Occupation::Student),
            ("retired", Occupation::Retired),
            ("pensioner", Occupation::Retired),
            ("housewife", Occupation::Housewife),
            ("house wife", Occupation::Housewife),
            ("homemaker", Occupation::Homemaker),
            ("home maker", Occupation::Homemaker),
            ("government", Occupation::Government),
            ("government employee", Occupation::Government),
            ("govt employee", Occupation::Government),
            ("govt", Occupation::Government),
        ];

        let mut map = HashMap::with_capacity(ALIASES.len());
        for (alias, occupation) in ALIASES {
            map.insert(normalize_token(alias), *occupation);
        }
        map
    })
}

fn education_map() -> &'static HashMap<String, EducationLevel> {
    EDUCATION_MAP.get_or_init(|| {
        const ALIASES: &[(&str, EducationLevel)] = &[
            ("none", EducationLevel::None),
            ("no formal education", EducationLevel::None),
            ("illiterate", EducationLevel::None),
            ("primary", EducationLevel::Primary),
            ("primary school", EducationLevel::Primary),
            ("secondary", EducationLevel::Secondary),
            ("secondary school", EducationLevel::Secondary),
            ("matric", EducationLevel::Secondary),
            ("10th", EducationLevel::Secondary),
            ("higher secondary", EducationLevel::HigherSecondary),
            ("senior secondary", EducationLevel::HigherSecondary),
            ("intermediate", EducationLevel::HigherSecondary),
            ("12th", EducationLevel::HigherSecondary),
            ("graduate", EducationLevel::Graduate),
            ("graduation", EducationLevel::Graduate),
            ("bachelors", EducationLevel::Graduate),
            ("bachelor's degree", EducationLevel::Graduate),
            ("postgraduate", EducationLevel::Postgraduate),
            ("post graduate", EducationLevel::Postgraduate),
            ("masters", EducationLevel::Postgraduate),
            ("master's degree", EducationLevel::Postgraduate),
        ];

        let mut map = HashMap::with_capacity(ALIASES.len());
        for (alias, education) in ALIASES {
            map.insert(normalize_token(alias), *education);
        }
        map
    })
}
