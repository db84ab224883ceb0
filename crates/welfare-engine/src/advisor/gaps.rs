use serde::Serialize;

use super::domain::{EducationLevel, Occupation, Profile};

/// Welfare dimensions a profile currently lacks cover for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageGap {
    HealthInsurance,
    PensionCoverage,
    EducationSupport,
    IncomeSupport,
    EmploymentAssistance,
    WomenLivelihoodSupport,
    FamilyWelfareSupport,
}

impl CoverageGap {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HealthInsurance => "Health Insurance",
            Self::PensionCoverage => "Pension Coverage",
            Self::EducationSupport => "Education Support",
            Self::IncomeSupport => "Income Support",
            Self::EmploymentAssistance => "Employment Assistance",
            Self::WomenLivelihoodSupport => "Women & Livelihood Support",
            Self::FamilyWelfareSupport => "Family Welfare Support",
        }
    }
}

/// Runs the gap checks in a fixed order. Income thresholds read the
/// citizen's own income, not the household total.
pub fn detect_coverage_gaps(profile: &Profile) -> Vec<CoverageGap> {
    let mut gaps = Vec::new();

    if !profile.has_health_insurance {
        gaps.push(CoverageGap::HealthInsurance);
    }

    if !profile.has_pension {
        gaps.push(CoverageGap::PensionCoverage);
    }

    if matches!(
        profile.education,
        EducationLevel::None | EducationLevel::Primary
    ) {
        gaps.push(CoverageGap::EducationSupport);
    }

    if profile.income < 200_000 {
        gaps.push(CoverageGap::IncomeSupport);
    }

    if matches!(
        profile.occupation,
        Occupation::Unemployed | Occupation::DailyWageWorker
    ) {
        gaps.push(CoverageGap::EmploymentAssistance);
    }

    if matches!(
        profile.occupation,
        Occupation::Housewife | Occupation::Homemaker
    ) {
        gaps.push(CoverageGap::WomenLivelihoodSupport);
    }

    if profile.family_size >= 5 && profile.income < 300_000 {
        gaps.push(CoverageGap::FamilyWelfareSupport);
    }

    gaps
}
