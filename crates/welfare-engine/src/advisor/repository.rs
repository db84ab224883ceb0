use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{ApplicationId, Profile, SchemeId, UserId};

/// Lifecycle of a tracked scheme application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    Approved,
    Completed,
}

impl ApplicationStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Applied, Self::Approved, Self::Completed]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Approved => "Approved",
            Self::Completed => "Completed",
        }
    }
}

/// A citizen's tracked application for one scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub user_id: UserId,
    pub scheme_id: SchemeId,
    pub status: ApplicationStatus,
    pub applied_on: NaiveDate,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ProfileRepository: Send + Sync {
    fn upsert(&self, user_id: UserId, profile: Profile) -> Result<(), RepositoryError>;
    fn fetch(&self, user_id: &UserId) -> Result<Option<Profile>, RepositoryError>;
    fn all(&self) -> Result<Vec<(UserId, Profile)>, RepositoryError>;
}

/// Application tracking behind the same isolation seam.
pub trait ApplicationStore: Send + Sync {
    fn insert(&self, application: Application) -> Result<Application, RepositoryError>;
    fn update(&self, application: Application) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError>;
    fn for_user(&self, user_id: &UserId) -> Result<Vec<Application>, RepositoryError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound citizen alert hooks (e.g., SMS or portal-inbox adapters).
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, notification: Notification) -> Result<(), NotificationError>;
}

/// Notification payload so routes/tests can assert integration boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub user_id: UserId,
    pub message: String,
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
