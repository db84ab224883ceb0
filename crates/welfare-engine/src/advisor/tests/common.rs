use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::advisor::domain::{
    ApplicationId, Area, EducationLevel, FamilyMember, Gender, Occupation, Profile, UserId,
};
use crate::advisor::repository::{
    Application, ApplicationStore, Notification, NotificationError, NotificationPublisher,
    ProfileRepository, RepositoryError,
};
use crate::advisor::{advisor_router, AdvisorService, ScoringConfig, ScoringEngine};

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig {
        completion_bonus_step: 2,
        completion_bonus_cap: 10,
        high_risk_threshold: 65,
        medium_risk_threshold: 40,
    }
}

pub(super) fn scoring_engine() -> ScoringEngine {
    ScoringEngine::new(scoring_config())
}

/// Rural farming household with four dependents and no coverage.
/// Scores 84 under the default weights, which lands in the high band.
pub(super) fn farmer_profile() -> Profile {
    Profile {
        age: 45,
        income: 180_000,
        occupation: Occupation::Farmer,
        education: EducationLevel::Secondary,
        gender: Gender::Male,
        area: Area::Rural,
        state: "Bihar".to_string(),
        family_size: 5,
        family_members: vec![
            FamilyMember {
                occupation: Occupation::Student,
                annual_income: 0,
            },
            FamilyMember {
                occupation: Occupation::Housewife,
                annual_income: 0,
            },
            FamilyMember {
                occupation: Occupation::Student,
                annual_income: 0,
            },
            FamilyMember {
                occupation: Occupation::Farmer,
                annual_income: 20_000,
            },
        ],
        has_health_insurance: false,
        has_pension: false,
    }
}

/// Fully covered urban earner, scores 19 (low band).
pub(super) fn salaried_profile() -> Profile {
    Profile {
        age: 30,
        income: 900_000,
        occupation: Occupation::Salaried,
        education: EducationLevel::Postgraduate,
        gender: Gender::Female,
        area: Area::Urban,
        state: "Karnataka".to_string(),
        family_size: 2,
        family_members: vec![FamilyMember {
            occupation: Occupation::Salaried,
            annual_income: 600_000,
        }],
        has_health_insurance: true,
        has_pension: true,
    }
}

/// Dependent student in a single-earner household, scores 59 (medium band).
pub(super) fn student_profile() -> Profile {
    Profile {
        age: 20,
        income: 0,
        occupation: Occupation::Student,
        education: EducationLevel::HigherSecondary,
        gender: Gender::Male,
        area: Area::Urban,
        state: "Delhi".to_string(),
        family_size: 4,
        family_members: vec![
            FamilyMember {
                occupation: Occupation::Salaried,
                annual_income: 250_000,
            },
            FamilyMember {
                occupation: Occupation::Housewife,
                annual_income: 0,
            },
            FamilyMember {
                occupation: Occupation::Student,
                annual_income: 0,
            },
        ],
        has_health_insurance: true,
        has_pension: false,
    }
}

pub(super) fn build_service() -> (
    AdvisorService<MemoryProfiles, MemoryApplications, MemoryNotifications>,
    Arc<MemoryProfiles>,
    Arc<MemoryApplications>,
    Arc<MemoryNotifications>,
) {
    let profiles = Arc::new(MemoryProfiles::default());
    let applications = Arc::new(MemoryApplications::default());
    let notifications = Arc::new(MemoryNotifications::default());
    let service = AdvisorService::new(
        profiles.clone(),
        applications.clone(),
        notifications.clone(),
        scoring_config(),
    );
    (service, profiles, applications, notifications)
}

#[derive(Default, Clone)]
pub(super) struct MemoryProfiles {
    records: Arc<Mutex<HashMap<UserId, Profile>>>,
}

impl ProfileRepository for MemoryProfiles {
    fn upsert(&self, user_id: UserId, profile: Profile) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("profile mutex poisoned");
        guard.insert(user_id, profile);
        Ok(())
    }

    fn fetch(&self, user_id: &UserId) -> Result<Option<Profile>, RepositoryError> {
        let guard = self.records.lock().expect("profile mutex poisoned");
        Ok(guard.get(user_id).cloned())
    }

    fn all(&self) -> Result<Vec<(UserId, Profile)>, RepositoryError> {
        let guard = self.records.lock().expect("profile mutex poisoned");
        let mut entries: Vec<(UserId, Profile)> = guard
            .iter()
            .map(|(user_id, profile)| (user_id.clone(), profile.clone()))
            .collect();
        entries.sort_by(|a, b| a.0 .0.cmp(&b.0 .0));
        Ok(entries)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryApplications {
    records: Arc<Mutex<HashMap<ApplicationId, Application>>>,
}

impl ApplicationStore for MemoryApplications {
    fn insert(&self, application: Application) -> Result<Application, RepositoryError> {
        let mut guard = self.records.lock().expect("application mutex poisoned");
        if guard.contains_key(&application.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(application.id.clone(), application.clone());
        Ok(application)
    }

    fn update(&self, application: Application) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("application mutex poisoned");
        guard.insert(application.id.clone(), application);
        Ok(())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        let guard = self.records.lock().expect("application mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn for_user(&self, user_id: &UserId) -> Result<Vec<Application>, RepositoryError> {
        let guard = self.records.lock().expect("application mutex poisoned");
        let mut matches: Vec<Application> = guard
            .values()
            .filter(|application| &application.user_id == user_id)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        Ok(matches)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifications {
    events: Arc<Mutex<Vec<Notification>>>,
}

impl MemoryNotifications {
    pub(super) fn events(&self) -> Vec<Notification> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .clone()
    }
}

impl NotificationPublisher for MemoryNotifications {
    fn publish(&self, notification: Notification) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct ConflictApplications;

impl ApplicationStore for ConflictApplications {
    fn insert(&self, _application: Application) -> Result<Application, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _application: Application) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        Ok(None)
    }

    fn for_user(&self, _user_id: &UserId) -> Result<Vec<Application>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableProfiles;

impl ProfileRepository for UnavailableProfiles {
    fn upsert(&self, _user_id: UserId, _profile: Profile) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _user_id: &UserId) -> Result<Option<Profile>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn all(&self) -> Result<Vec<(UserId, Profile)>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 65536)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn advisor_router_with_service(
    service: AdvisorService<MemoryProfiles, MemoryApplications, MemoryNotifications>,
) -> axum::Router {
    advisor_router(Arc::new(service))
}
