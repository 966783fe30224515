// cv_repository.rs
use crate::cv::domain::{CvContent, CvRecord};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CVRepositoryError {
    #[error("CV not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Storage for the one CV each user may own. Every method is keyed by the
/// owning user, never by the record id.
#[async_trait]
pub trait CVRepository: Send + Sync {
    async fn fetch_cv_by_user_id(&self, user_id: Uuid)
        -> Result<Option<CvRecord>, CVRepositoryError>;

    /// Inserts a new record. `content` is stored as given.
    async fn create_cv(
        &self,
        user_id: Uuid,
        content: CvContent,
    ) -> Result<CvRecord, CVRepositoryError>;

    /// Overwrites every section of the user's record and bumps `updated_at`.
    /// Returns `NotFound` if the user has no record.
    async fn update_cv(
        &self,
        user_id: Uuid,
        content: CvContent,
    ) -> Result<CvRecord, CVRepositoryError>;

    /// Returns `NotFound` if the user has no record.
    async fn delete_cv(&self, user_id: Uuid) -> Result<(), CVRepositoryError>;
}
