use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use welfare_engine::advisor::domain::{ApplicationId, Profile, UserId};
use welfare_engine::advisor::repository::{
    Application, ApplicationStore, Notification, NotificationError, NotificationPublisher,
    ProfileRepository, RepositoryError,
};
use welfare_engine::advisor::ScoringConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    records: Arc<Mutex<HashMap<UserId, Profile>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
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
        let mut entries: Vec<_> = guard
            .iter()
            .map(|(user_id, profile)| (user_id.clone(), profile.clone()))
            .collect();
        entries.sort_by(|a, b| a.0 .0.cmp(&b.0 .0));
        Ok(entries)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationStore {
    records: Arc<Mutex<HashMap<ApplicationId, Application>>>,
}

impl ApplicationStore for InMemoryApplicationStore {
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
        if guard.contains_key(&application.id) {
            guard.insert(application.id.clone(), application);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        let guard = self.records.lock().expect("application mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn for_user(&self, user_id: &UserId) -> Result<Vec<Application>, RepositoryError> {
        let guard = self.records.lock().expect("application mutex poisoned");
        let mut entries: Vec<_> = guard
            .values()
            .filter(|application| &application.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        Ok(entries)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryNotificationPublisher {
    events: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationPublisher for InMemoryNotificationPublisher {
    fn publish(&self, notification: Notification) -> Result<(), NotificationError> {
        let mut guard = self.events.lock().expect("notification mutex poisoned");
        guard.push(notification);
        Ok(())
    }
}

impl InMemoryNotificationPublisher {
    pub(crate) fn events(&self) -> Vec<Notification> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .clone()
    }
}

pub(crate) fn default_scoring_config() -> ScoringConfig {
    ScoringConfig {
        completion_bonus_step: 2,
        completion_bonus_cap: 10,
        high_risk_threshold: 65,
        medium_risk_threshold: 40,
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
