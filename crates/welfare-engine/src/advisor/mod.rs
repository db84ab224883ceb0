//! Citizen welfare advisory: profile scoring, scheme matching, and forward planning.
//!
//! A stored [`Profile`] flows through the [`ScoringEngine`] to produce a
//! [`WelfareScore`], which drives eligibility filtering and ranking across the
//! [`SchemeCatalog`]. The [`AdvisorService`] ties those stages together with
//! application tracking, what-if simulation, and cohort reporting.

pub mod catalog;
pub mod domain;
pub(crate) mod eligibility;
pub(crate) mod gaps;
pub(crate) mod planner;
pub(crate) mod ranking;
pub mod repository;
pub mod report;
pub mod router;
pub(crate) mod scenario;
pub(crate) mod scoring;
pub mod service;
pub(crate) mod validation;

#[cfg(test)]
mod tests;

pub use catalog::SchemeCatalog;
pub use domain::{
    ApplicationId, Area, EducationLevel, FamilyMember, FutureRecommendation, Gender, Occupation,
    Profile, RiskCategory, Scheme, SchemeDomain, SchemeId, SchemeRecommendation, UserId,
    WelfareScore,
};
pub use eligibility::{eligible_schemes, qualifies};
pub use gaps::{detect_coverage_gaps, CoverageGap};
pub use planner::plan_future_recommendations;
pub use ranking::rank_schemes;
pub use repository::{
    Application, ApplicationStatus, ApplicationStore, Notification, NotificationError,
    NotificationPublisher, ProfileRepository, RepositoryError,
};
pub use router::advisor_router;
pub use scenario::{simulate, ScenarioAdjustments, ScenarioOutcome};
pub use scoring::{ScoringConfig, ScoringEngine};
pub use service::{AdvisorService, AdvisorServiceError, AdvisoryReport, SavedProfile};
pub use validation::{validate_profile, ProfileDraft};
