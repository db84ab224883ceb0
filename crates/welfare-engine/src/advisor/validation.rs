use serde::{Deserialize, Serialize};

use super::domain::{Area, EducationLevel, FamilyMember, Gender, Occupation, Profile};

/// Partially filled profile as captured during intake. Checks that need
/// an absent field simply do not fire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDraft {
    pub age: Option<u8>,
    pub income: Option<u64>,
    pub occupation: Option<Occupation>,
    pub education: Option<EducationLevel>,
    pub gender: Option<Gender>,
    pub area: Option<Area>,
    pub state: Option<String>,
    pub family_size: Option<u8>,
    pub family_members: Vec<FamilyMember>,
    pub has_health_insurance: Option<bool>,
    pub has_pension: Option<bool>,
}

impl From<&Profile> for ProfileDraft {
    fn from(profile: &Profile) -> Self {
        Self {
            age: Some(profile.age),
            income: Some(profile.income),
            occupation: Some(profile.occupation),
            education: Some(profile.education),
            gender: Some(profile.gender),
            area: Some(profile.area),
            state: Some(profile.state.clone()),
            family_size: Some(profile.family_size),
            family_members: profile.family_members.clone(),
            has_health_insurance: Some(profile.has_health_insurance),
            has_pension: Some(profile.has_pension),
        }
    }
}

/// Plausibility checks over a draft. Warnings are advisory and never
/// block a save. The three groups (income, age, family size) fire
/// independently, so a draft can collect several at once.
pub fn validate_profile(draft: &ProfileDraft) -> Vec<String> {
    let mut warnings = Vec::new();

    if let (Some(income), Some(occupation)) = (draft.income, draft.occupation) {
        match occupation {
            Occupation::Government if income < 100_000 => {
                warnings.push("Income seems low for a Government employee".to_string());
            }
            Occupation::Salaried if income < 50_000 => {
                warnings.push("Income seems unusually low for salaried employment".to_string());
            }
            Occupation::Student if income > 500_000 => {
                warnings.push("Income seems high for a Student".to_string());
            }
            Occupation::Housewife | Occupation::Homemaker if income > 800_000 => {
                warnings.push(
                    "Income seems high for Homemaker/Housewife (consider listing as other occupation if self-employed)"
                        .to_string(),
                );
            }
            _ => {}
        }
    }

    if let Some(age) = draft.age {
        if age < 14 || age > 120 {
            warnings.push("Age value appears invalid".to_string());
        }
        if draft.occupation == Some(Occupation::Student) && age > 50 {
            warnings.push("Age seems high for Student occupation".to_string());
        }
    }

    if let Some(family_size) = draft.family_size {
        if family_size < 1 || family_size > 20 {
            warnings.push("Family size value appears unusual".to_string());
        }
    }

    warnings
}
