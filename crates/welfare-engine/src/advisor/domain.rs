use serde::{Deserialize, Serialize};

/// Identifier wrapper for citizens known to the profile store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Identifier wrapper for submitted scheme applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Identifier wrapper referencing a catalog scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemeId(pub String);

/// Declared occupation of a citizen or household member.
///
/// Values outside the known set deserialize to `Other`, which carries the
/// documented fallback weight in scoring and never appears in domain
/// affinity tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    Farmer,
    DailyWageWorker,
    Salaried,
    SelfEmployed,
    Unemployed,
    Student,
    Retired,
    Housewife,
    Homemaker,
    Government,
    #[serde(other)]
    Other,
}

impl Occupation {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::Farmer,
            Self::DailyWageWorker,
            Self::Salaried,
            Self::SelfEmployed,
            Self::Unemployed,
            Self::Student,
            Self::Retired,
            Self::Housewife,
            Self::Homemaker,
            Self::Government,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Farmer => "Farmer",
            Self::DailyWageWorker => "Daily wage worker",
            Self::Salaried => "Salaried",
            Self::SelfEmployed => "Self-employed",
            Self::Unemployed => "Unemployed",
            Self::Student => "Student",
            Self::Retired => "Retired",
            Self::Housewife => "Housewife",
            Self::Homemaker => "Homemaker",
            Self::Government => "Government",
            Self::Other => "Other",
        }
    }
}

/// Highest completed education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    None,
    Primary,
    Secondary,
    HigherSecondary,
    Graduate,
    Postgraduate,
    #[serde(other)]
    Other,
}

impl EducationLevel {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::None,
            Self::Primary,
            Self::Secondary,
            Self::HigherSecondary,
            Self::Graduate,
            Self::Postgraduate,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::HigherSecondary => "Higher Secondary",
            Self::Graduate => "Graduate",
            Self::Postgraduate => "Postgraduate",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Rural or urban residence. Informational only; no scoring rule reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    Rural,
    Urban,
}

impl Area {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rural => "Rural",
            Self::Urban => "Urban",
        }
    }
}

/// A dependent or co-earning member of the household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub occupation: Occupation,
    #[serde(default)]
    pub annual_income: u64,
}

/// Declared socio-economic profile of a citizen.
///
/// The advisory engine only reads profiles; ownership stays with the
/// profile store. `family_members` holds at most `family_size - 1`
/// entries, enforced wherever profiles are saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u8,
    pub income: u64,
    pub occupation: Occupation,
    pub education: EducationLevel,
    pub gender: Gender,
    pub area: Area,
    pub state: String,
    pub family_size: u8,
    #[serde(default)]
    pub family_members: Vec<FamilyMember>,
    pub has_health_insurance: bool,
    pub has_pension: bool,
}

impl Profile {
    /// Primary income plus every declared member income. Total function;
    /// an empty member list contributes nothing.
    pub fn household_income(&self) -> u64 {
        self.income
            + self
                .family_members
                .iter()
                .map(|member| member.annual_income)
                .sum::<u64>()
    }

    /// True when the citizen or any declared member holds the occupation.
    pub fn household_has(&self, occupation: Occupation) -> bool {
        self.occupation == occupation
            || self
                .family_members
                .iter()
                .any(|member| member.occupation == occupation)
    }
}

/// Benefit category a scheme belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeDomain {
    Education,
    Agriculture,
    Health,
    Women,
    Senior,
    Msme,
    Financial,
}

impl SchemeDomain {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Education,
            Self::Agriculture,
            Self::Health,
            Self::Women,
            Self::Senior,
            Self::Msme,
            Self::Financial,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Agriculture => "Agriculture",
            Self::Health => "Health",
            Self::Women => "Women",
            Self::Senior => "Senior",
            Self::Msme => "MSME",
            Self::Financial => "Financial",
        }
    }
}

/// Immutable catalog record for a government welfare scheme.
///
/// Only the constraint fields participate in eligibility; the rest is
/// descriptive material surfaced to citizens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scheme {
    pub id: &'static str,
    pub name: &'static str,
    pub domain: SchemeDomain,
    pub description: &'static str,
    pub min_age: u8,
    pub max_age: u8,
    pub income_limit: u64,
    pub occupation_required: Vec<Occupation>,
    pub gender_required: Option<Gender>,
    pub benefits: Vec<&'static str>,
    pub risks: Vec<&'static str>,
    pub required_documents: Vec<&'static str>,
    pub estimated_financial_impact: &'static str,
    pub portal_url: Option<&'static str>,
}

/// Three-tier welfare need classification derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    High,
    Medium,
    Low,
}

impl RiskCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Composite 0-100 welfare need score with its named sub-scores.
///
/// Recomputed on every call and never stored; the total already includes
/// the completed-application bonus and the 100-point clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelfareScore {
    pub total: u8,
    pub income: u8,
    pub dependents: u8,
    pub insurance: u8,
    pub occupation: u8,
    pub education: u8,
    pub risk_category: RiskCategory,
}

/// An eligible scheme paired with its relevance score and rationale.
///
/// `match_score` orders recommendations only; the per-term weights do not
/// sum to a fixed total, so the value is not a percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeRecommendation {
    pub scheme: Scheme,
    pub match_score: i32,
    pub reason: String,
}

/// A time-boxed advisory action derived from the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FutureRecommendation {
    pub year_range: &'static str,
    pub title: &'static str,
    pub action: &'static str,
}
