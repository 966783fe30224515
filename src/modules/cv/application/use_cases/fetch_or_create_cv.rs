use crate::cv::application::ports::outgoing::{CVRepository, CVRepositoryError};
use crate::cv::domain::{CvContent, CvRecord};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchOrCreateCVError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CVRepositoryError> for FetchOrCreateCVError {
    fn from(err: CVRepositoryError) -> Self {
        match err {
            CVRepositoryError::DatabaseError(msg) => Self::RepositoryError(msg),
            CVRepositoryError::NotFound => Self::RepositoryError("CV not found".to_string()),
        }
    }
}

/// Returns the caller's CV, creating the all-default one on first access.
#[async_trait]
pub trait IFetchOrCreateCVUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<CvRecord, FetchOrCreateCVError>;
}

#[derive(Debug, Clone)]
pub struct FetchOrCreateCVUseCase<R: CVRepository> {
    repository: R,
}

impl<R: CVRepository> FetchOrCreateCVUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IFetchOrCreateCVUseCase for FetchOrCreateCVUseCase<R>
where
    R: CVRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<CvRecord, FetchOrCreateCVError> {
        if let Some(existing) = self.repository.fetch_cv_by_user_id(user_id).await? {
            return Ok(existing);
        }

        tracing::info!(%user_id, "No CV found, creating default");

        let created = self
            .repository
            .create_cv(user_id, CvContent::initial())
            .await?;

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv::domain::{Education, Project, WorkExperience};
    use chrono::Utc;
    use mockall::{mock, predicate::*};

    mock! {
        pub CVRepositoryMock {}
        #[async_trait]
        impl CVRepository for CVRepositoryMock {
            async fn fetch_cv_by_user_id(&self, user_id: Uuid) -> Result<Option<CvRecord>, CVRepositoryError>;
            async fn create_cv(&self, user_id: Uuid, content: CvContent) -> Result<CvRecord, CVRepositoryError>;
            async fn update_cv(&self, user_id: Uuid, content: CvContent) -> Result<CvRecord, CVRepositoryError>;
            async fn delete_cv(&self, user_id: Uuid) -> Result<(), CVRepositoryError>;
        }
    }

    fn record_for(user_id: Uuid, content: CvContent) -> CvRecord {
        let now = Utc::now();
        CvRecord {
            id: Uuid::new_v4(),
            user_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_returns_existing_cv_without_creating() {
        let user_id = Uuid::new_v4();
        let mut content = CvContent::initial();
        content.skills = vec!["Rust".to_string()];
        let existing = record_for(user_id, content);
        let returned = existing.clone();

        let mut repository = MockCVRepositoryMock::new();
        repository
            .expect_fetch_cv_by_user_id()
            .with(eq(user_id))
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository.expect_create_cv().never();

        let use_case = FetchOrCreateCVUseCase::new(repository);
        let result = use_case.execute(user_id).await;

        assert_eq!(result, Ok(existing));
    }

    #[tokio::test]
    async fn test_creates_default_cv_when_missing() {
        let user_id = Uuid::new_v4();

        let mut repository = MockCVRepositoryMock::new();
        repository
            .expect_fetch_cv_by_user_id()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create_cv()
            .withf(move |id, content| *id == user_id && *content == CvContent::initial())
            .times(1)
            .returning(|id, content| Ok(record_for(id, content)));

        let use_case = FetchOrCreateCVUseCase::new(repository);
        let cv = use_case.execute(user_id).await.expect("CV should be created");

        assert_eq!(cv.user_id, user_id);
        assert_eq!(cv.content.education, vec![Education::default()]);
        assert_eq!(cv.content.work_experience, vec![WorkExperience::default()]);
        assert_eq!(cv.content.projects, vec![Project::default()]);
        assert!(cv.content.skills.is_empty());
        assert!(cv.content.interests.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_repository_error() {
        let mut repository = MockCVRepositoryMock::new();
        repository
            .expect_fetch_cv_by_user_id()
            .returning(|_| Err(CVRepositoryError::DatabaseError("connection reset".into())));
        repository.expect_create_cv().never();

        let use_case = FetchOrCreateCVUseCase::new(repository);
        let result = use_case.execute(Uuid::new_v4()).await;

        assert_eq!(
            result,
            Err(FetchOrCreateCVError::RepositoryError(
                "connection reset".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_create_failure_is_repository_error() {
        let mut repository = MockCVRepositoryMock::new();
        repository
            .expect_fetch_cv_by_user_id()
            .returning(|_| Ok(None));
        repository
            .expect_create_cv()
            .returning(|_, _| Err(CVRepositoryError::DatabaseError("insert failed".into())));

        let use_case = FetchOrCreateCVUseCase::new(repository);
        let result = use_case.execute(Uuid::new_v4()).await;

        assert!(matches!(
            result,
            Err(FetchOrCreateCVError::RepositoryError(msg)) if msg == "insert failed"
        ));
    }
}
