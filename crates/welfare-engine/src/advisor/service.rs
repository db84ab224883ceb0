use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use super::catalog::SchemeCatalog;
use super::domain::{
    ApplicationId, FutureRecommendation, Profile, SchemeId, SchemeRecommendation, UserId,
    WelfareScore,
};
use super::gaps::{self, CoverageGap};
use super::repository::{
    Application, ApplicationStatus, ApplicationStore, Notification, NotificationError,
    NotificationPublisher, ProfileRepository, RepositoryError,
};
use super::report::{CohortEntry, CohortReport};
use super::scenario::{self, ScenarioAdjustments, ScenarioOutcome};
use super::scoring::{ScoringConfig, ScoringEngine};
use super::validation::{self, ProfileDraft};
use super::{eligibility, planner, ranking};

/// Service composing the catalog, the scorer, and the storage seams.
pub struct AdvisorService<P, A, N> {
    profiles: Arc<P>,
    applications: Arc<A>,
    notifications: Arc<N>,
    engine: Arc<ScoringEngine>,
    catalog: Arc<SchemeCatalog>,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

impl<P, A, N> AdvisorService<P, A, N>
where
    P: ProfileRepository + 'static,
    A: ApplicationStore + 'static,
    N: NotificationPublisher + 'static,
{
    pub fn new(
        profiles: Arc<P>,
        applications: Arc<A>,
        notifications: Arc<N>,
        config: ScoringConfig,
    ) -> Self {
        Self::with_catalog(
            profiles,
            applications,
            notifications,
            config,
            SchemeCatalog::standard(),
        )
    }

    pub fn with_catalog(
        profiles: Arc<P>,
        applications: Arc<A>,
        notifications: Arc<N>,
        config: ScoringConfig,
        catalog: SchemeCatalog,
    ) -> Self {
        Self {
            profiles,
            applications,
            notifications,
            engine: Arc::new(ScoringEngine::new(config)),
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &SchemeCatalog {
        &self.catalog
    }

    /// Store a profile, trimming the member list to the declared family
    /// size minus the citizen themselves. Warnings come back with the
    /// stored copy and never block the save.
    pub fn save_profile(
        &self,
        user_id: UserId,
        mut profile: Profile,
    ) -> Result<SavedProfile, AdvisorServiceError> {
        let declared_members = usize::from(profile.family_size).saturating_sub(1);
        profile.family_members.truncate(declared_members);

        let warnings = validation::validate_profile(&ProfileDraft::from(&profile));
        self.profiles.upsert(user_id, profile.clone())?;

        Ok(SavedProfile { profile, warnings })
    }

    /// Full advisory answer for a stored profile.
    pub fn advise(&self, user_id: &UserId) -> Result<AdvisoryReport, AdvisorServiceError> {
        let profile = self
            .profiles
            .fetch(user_id)?
            .ok_or(RepositoryError::NotFound)?;
        let completed = self.completed_applications(user_id)?;

        let mut report = self.advise_profile(&profile, completed);
        report.user_id = Some(user_id.clone());
        Ok(report)
    }

    /// Advisory answer for an ad-hoc profile that is not stored anywhere.
    pub fn advise_profile(&self, profile: &Profile, completed_applications: u32) -> AdvisoryReport {
        let score = self.engine.score(profile, completed_applications);
        let eligible = eligibility::eligible_schemes(profile, self.catalog.schemes());
        let recommendations = ranking::rank_schemes(profile, &eligible, &score);

        AdvisoryReport {
            user_id: None,
            household_income: profile.household_income(),
            score,
            recommendations,
            coverage_gaps: gaps::detect_coverage_gaps(profile),
            future_plan: planner::plan_future_recommendations(profile),
            warnings: validation::validate_profile(&ProfileDraft::from(profile)),
            completed_applications,
        }
    }

    /// Record a new application for a catalog scheme.
    pub fn apply(
        &self,
        user_id: &UserId,
        scheme_id: &str,
        applied_on: NaiveDate,
    ) -> Result<Application, AdvisorServiceError> {
        if self.profiles.fetch(user_id)?.is_none() {
            return Err(RepositoryError::NotFound.into());
        }

        let scheme = self
            .catalog
            .find(scheme_id)
            .ok_or_else(|| AdvisorServiceError::UnknownScheme(scheme_id.to_string()))?;

        let application = Application {
            id: next_application_id(),
            user_id: user_id.clone(),
            scheme_id: SchemeId(scheme.id.to_string()),
            status: ApplicationStatus::Applied,
            applied_on,
        };

        let stored = self.applications.insert(application)?;
        Ok(stored)
    }

    /// Move an application through its lifecycle. Approvals notify the
    /// citizen through the configured publisher.
    pub fn set_application_status(
        &self,
        application_id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Application, AdvisorServiceError> {
        let mut application = self
            .applications
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;

        application.status = status;
        self.applications.update(application.clone())?;

        if status == ApplicationStatus::Approved {
            let scheme_name = self
                .catalog
                .find(&application.scheme_id.0)
                .map_or(application.scheme_id.0.as_str(), |scheme| scheme.name);
            self.notifications.publish(Notification {
                user_id: application.user_id.clone(),
                message: format!("Your {scheme_name} application has been approved!"),
            })?;
        }

        Ok(application)
    }

    /// What-if simulation over a stored profile.
    pub fn simulate(
        &self,
        user_id: &UserId,
        adjustments: &ScenarioAdjustments,
    ) -> Result<ScenarioOutcome, AdvisorServiceError> {
        let profile = self
            .profiles
            .fetch(user_id)?
            .ok_or(RepositoryError::NotFound)?;
        let completed = self.completed_applications(user_id)?;

        Ok(scenario::simulate(
            &profile,
            self.catalog.schemes(),
            completed,
            adjustments,
            &self.engine,
        ))
    }

    /// Aggregate view across every stored profile.
    pub fn cohort(&self) -> Result<CohortReport, AdvisorServiceError> {
        let mut entries = Vec::new();
        for (user_id, profile) in self.profiles.all()? {
            let completed = self.completed_applications(&user_id)?;
            entries.push(CohortEntry {
                user_id,
                profile,
                completed_applications: completed,
            });
        }

        Ok(CohortReport::build(
            &entries,
            self.catalog.schemes(),
            &self.engine,
        ))
    }

    fn completed_applications(&self, user_id: &UserId) -> Result<u32, AdvisorServiceError> {
        let applications = self.applications.for_user(user_id)?;
        Ok(applications
            .iter()
            .filter(|application| application.status == ApplicationStatus::Completed)
            .count() as u32)
    }
}

/// Full advisory answer for one citizen.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub household_income: u64,
    pub score: WelfareScore,
    pub recommendations: Vec<SchemeRecommendation>,
    pub coverage_gaps: Vec<CoverageGap>,
    pub future_plan: Vec<FutureRecommendation>,
    pub warnings: Vec<String>,
    pub completed_applications: u32,
}

/// Outcome of a profile save: the stored copy plus advisory warnings.
#[derive(Debug, Clone, Serialize)]
pub struct SavedProfile {
    pub profile: Profile,
    pub warnings: Vec<String>,
}

/// Error raised by the advisor service.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),
}
