use crate::cv::application::ports::outgoing::{CVRepository, CVRepositoryError};
use crate::cv::domain::{CvContent, CvPatch, CvRecord};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpsertCVError {
    /// Building or inserting the first CV for the user failed.
    #[error("Error creating CV data: {0}")]
    CreateFailed(String),

    /// Applying the patch to, or writing over, an existing CV failed.
    #[error("Error saving CV data: {0}")]
    SaveFailed(String),

    /// Looking up the current CV failed.
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

fn detail(err: CVRepositoryError) -> String {
    match err {
        CVRepositoryError::DatabaseError(msg) => msg,
        CVRepositoryError::NotFound => "CV not found".to_string(),
    }
}

/// Creates the caller's CV or overwrites the sections present in the patch.
#[async_trait]
pub trait IUpsertCVUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, patch: CvPatch) -> Result<CvRecord, UpsertCVError>;
}

#[derive(Debug, Clone)]
pub struct UpsertCVUseCase<R: CVRepository> {
    repository: R,
}

impl<R: CVRepository> UpsertCVUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpsertCVUseCase for UpsertCVUseCase<R>
where
    R: CVRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid, patch: CvPatch) -> Result<CvRecord, UpsertCVError> {
        let existing = self
            .repository
            .fetch_cv_by_user_id(user_id)
            .await
            .map_err(|e| UpsertCVError::RepositoryError(detail(e)))?;

        match existing {
            Some(cv) => {
                let content = cv
                    .into_content()
                    .apply(patch)
                    .map_err(UpsertCVError::SaveFailed)?
                    .normalized();
                self.repository
                    .update_cv(user_id, content)
                    .await
                    .map_err(|e| UpsertCVError::SaveFailed(detail(e)))
            }
            None => {
                let content = CvContent::default()
                    .apply(patch)
                    .map_err(UpsertCVError::CreateFailed)?
                    .normalized();
                self.repository
                    .create_cv(user_id, content)
                    .await
                    .map_err(|e| UpsertCVError::CreateFailed(detail(e)))
            }
        }
    }
}
