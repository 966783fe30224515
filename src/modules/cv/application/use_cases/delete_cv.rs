use crate::cv::application::ports::outgoing::{CVRepository, CVRepositoryError};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteCVError {
    #[error("CV not found")]
    CVNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CVRepositoryError> for DeleteCVError {
    fn from(err: CVRepositoryError) -> Self {
        match err {
            CVRepositoryError::NotFound => Self::CVNotFound,
            CVRepositoryError::DatabaseError(msg) => Self::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait IDeleteCVUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<(), DeleteCVError>;
}

pub struct DeleteCVUseCase<R>
where
    R: CVRepository + Send + Sync,
{
    cv_repository: R,
}

impl<R> DeleteCVUseCase<R>
where
    R: CVRepository + Send + Sync,
{
    pub fn new(cv_repository: R) -> Self {
        Self { cv_repository }
    }
}

#[async_trait]
impl<R> IDeleteCVUseCase for DeleteCVUseCase<R>
where
    R: CVRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<(), DeleteCVError> {
        // Verify the user actually has a CV before removing it
        self.cv_repository
            .fetch_cv_by_user_id(user_id)
            .await?
            .ok_or(DeleteCVError::CVNotFound)?;

        self.cv_repository.delete_cv(user_id).await?;

        tracing::info!(%user_id, "CV deleted");
        Ok(())
    }
}
