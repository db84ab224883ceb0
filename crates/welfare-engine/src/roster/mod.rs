mod mapping;
mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::advisor::domain::{FamilyMember, Profile, UserId};

use parser::RosterRow;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster export: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Row that could not be converted into a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterIssue {
    pub row: usize,
    pub reason: String,
}

/// Outcome of a roster import: usable profiles plus per-row issues.
#[derive(Debug)]
pub struct RosterImport {
    pub profiles: Vec<(UserId, Profile)>,
    pub issues: Vec<RosterIssue>,
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<RosterImport, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<RosterImport, RosterImportError> {
        let mut profiles = Vec::new();
        let mut issues = Vec::new();

        for (row_number, record) in parser::parse_rows(reader)? {
            match record {
                Ok(row) => match build_profile(row) {
                    Ok((user_id, profile)) => profiles.push((user_id, profile)),
                    Err(reason) => issues.push(RosterIssue {
                        row: row_number,
                        reason,
                    }),
                },
                Err(error) => issues.push(RosterIssue {
                    row: row_number,
                    reason: error.to_string(),
                }),
            }
        }

        Ok(RosterImport { profiles, issues })
    }
}

fn build_profile(row: RosterRow) -> Result<(UserId, Profile), String> {
    let citizen_id = row
        .citizen_id
        .ok_or_else(|| "missing citizen id".to_string())?;

    let age = row
        .age
        .as_deref()
        .ok_or_else(|| "missing age".to_string())?
        .parse::<u8>()
        .map_err(|_| "invalid age".to_string())?;

    let income = match row.annual_income.as_deref() {
        Some(value) => value
            .parse::<u64>()
            .map_err(|_| "invalid annual income".to_string())?,
        None => 0,
    };

    let occupation = row
        .occupation
        .as_deref()
        .map_or(crate::advisor::domain::Occupation::Other, |value| {
            mapping::occupation_for(value)
        });

    let education = row
        .education
        .as_deref()
        .map_or(crate::advisor::domain::EducationLevel::Other, |value| {
            mapping::education_for(value)
        });

    let gender = mapping::gender_for(row.gender.as_deref());

    let area = row
        .area
        .as_deref()
        .and_then(mapping::area_for)
        .ok_or_else(|| "unknown area".to_string())?;

    let state = row.state.ok_or_else(|| "missing state".to_string())?;

    let family_size = row
        .family_size
        .as_deref()
        .ok_or_else(|| "missing family size".to_string())?
        .parse::<u8>()
        .map_err(|_| "invalid family size".to_string())?;

    let has_health_insurance = mapping::flag_for(row.health_insurance.as_deref())
        .ok_or_else(|| "invalid health insurance flag".to_string())?;
    let has_pension = mapping::flag_for(row.pension.as_deref())
        .ok_or_else(|| "invalid pension flag".to_string())?;

    let mut family_members = match row.family_members.as_deref() {
        Some(packed) => parse_family_members(packed)?,
        None => Vec::new(),
    };
    family_members.truncate(usize::from(family_size).saturating_sub(1));

    let profile = Profile {
        age,
        income,
        occupation,
        education,
        gender,
        area,
        state,
        family_size,
        family_members,
        has_health_insurance,
        has_pension,
    };

    Ok((UserId(citizen_id), profile))
}

// Members arrive packed as "Occupation:Income;Occupation:Income". The
// income part may be blank; a segment without a colon is occupation only.
fn parse_family_members(packed: &str) -> Result<Vec<FamilyMember>, String> {
    let mut members = Vec::new();

    for segment in packed.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let (occupation, income) = match segment.split_once(':') {
            Some((occupation, income)) => (occupation, income.trim()),
            None => (segment, ""),
        };

        let annual_income = if income.is_empty() {
            0
        } else {
            income
                .parse::<u64>()
                .map_err(|_| format!("invalid family member entry: {segment}"))?
        };

        members.push(FamilyMember {
            occupation: mapping::occupation_for(occupation),
            annual_income,
        });
    }

    Ok(members)
}
