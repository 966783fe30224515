use crate::cv::application::ports::outgoing::{CVRepository, CVRepositoryError};
use crate::cv::domain::{CvContent, CvRecord};
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{
    ActiveModel as CvActiveModel, Column as CvColumn, ContentColumns, Entity as CvEntity,
    Model as CvModel,
};

#[derive(Debug, Clone)]
pub struct CVRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl CVRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(&self, user_id: Uuid) -> Result<Option<CvModel>, CVRepositoryError> {
        CvEntity::find()
            .filter(CvColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|err| CVRepositoryError::DatabaseError(err.to_string()))
    }
}

#[async_trait]
impl CVRepository for CVRepoPostgres {
    async fn fetch_cv_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<CvRecord>, CVRepositoryError> {
        self.find_model(user_id)
            .await?
            .map(|model| model.to_domain())
            .transpose()
    }

    async fn create_cv(
        &self,
        user_id: Uuid,
        content: CvContent,
    ) -> Result<CvRecord, CVRepositoryError> {
        let columns = ContentColumns::from_content(&content)?;
        let now = chrono::Utc::now().fixed_offset();

        let active_model = CvActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            personal_details: Set(columns.personal_details),
            about: Set(columns.about),
            education: Set(columns.education),
            work_experience: Set(columns.work_experience),
            skills: Set(columns.skills),
            interests: Set(columns.interests),
            projects: Set(columns.projects),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted: CvModel = CvEntity::insert(active_model)
            .exec_with_returning(&*self.db)
            .await
            .map_err(|err| CVRepositoryError::DatabaseError(err.to_string()))?;

        inserted.to_domain()
    }

    async fn update_cv(
        &self,
        user_id: Uuid,
        content: CvContent,
    ) -> Result<CvRecord, CVRepositoryError> {
        let existing = self
            .find_model(user_id)
            .await?
            .ok_or(CVRepositoryError::NotFound)?;
        let columns = ContentColumns::from_content(&content)?;

        // Every section is written, so concurrent saves never interleave fields
        let mut active_model: CvActiveModel = existing.into();
        active_model.personal_details = Set(columns.personal_details);
        active_model.about = Set(columns.about);
        active_model.education = Set(columns.education);
        active_model.work_experience = Set(columns.work_experience);
        active_model.skills = Set(columns.skills);
        active_model.interests = Set(columns.interests);
        active_model.projects = Set(columns.projects);
        active_model.updated_at = Set(chrono::Utc::now().fixed_offset());

        let updated = active_model
            .update(&*self.db)
            .await
            .map_err(|err| CVRepositoryError::DatabaseError(err.to_string()))?;

        updated.to_domain()
    }

    async fn delete_cv(&self, user_id: Uuid) -> Result<(), CVRepositoryError> {
        let result = CvEntity::delete_many()
            .filter(CvColumn::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(|err| CVRepositoryError::DatabaseError(err.to_string()))?;

        if result.rows_affected == 0 {
            return Err(CVRepositoryError::NotFound);
        }

        Ok(())
    }
}
