use crate::cv::application::ports::outgoing::CVRepositoryError;
use crate::cv::domain::{CvContent, CvRecord};
use sea_orm::entity::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use uuid::Uuid;

// This is the SeaORM model that directly represents the "cvs" table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cvs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub user_id: Uuid,

    #[sea_orm(column_type = "JsonBinary")]
    pub personal_details: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub about: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub education: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub work_experience: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub interests: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub projects: JsonValue,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

/// JSONB payloads for every editable section of a CV row.
pub struct ContentColumns {
    pub personal_details: JsonValue,
    pub about: JsonValue,
    pub education: JsonValue,
    pub work_experience: JsonValue,
    pub skills: JsonValue,
    pub interests: JsonValue,
    pub projects: JsonValue,
}

fn column<T: DeserializeOwned>(name: &str, value: &JsonValue) -> Result<T, CVRepositoryError> {
    serde_json::from_value(value.clone()).map_err(|e| {
        CVRepositoryError::DatabaseError(format!("Malformed {} column: {}", name, e))
    })
}

fn encode<T: serde::Serialize>(value: &T) -> Result<JsonValue, CVRepositoryError> {
    serde_json::to_value(value).map_err(|e| CVRepositoryError::DatabaseError(e.to_string()))
}

impl ContentColumns {
    pub fn from_content(content: &CvContent) -> Result<Self, CVRepositoryError> {
        Ok(Self {
            personal_details: encode(&content.personal_details)?,
            about: encode(&content.about)?,
            education: encode(&content.education)?,
            work_experience: encode(&content.work_experience)?,
            skills: encode(&content.skills)?,
            interests: encode(&content.interests)?,
            projects: encode(&content.projects)?,
        })
    }
}

impl Model {
    pub fn to_domain(&self) -> Result<CvRecord, CVRepositoryError> {
        Ok(CvRecord {
            id: self.id,
            user_id: self.user_id,
            content: CvContent {
                personal_details: column("personal_details", &self.personal_details)?,
                about: column("about", &self.about)?,
                education: column("education", &self.education)?,
                work_experience: column("work_experience", &self.work_experience)?,
                skills: column("skills", &self.skills)?,
                interests: column("interests", &self.interests)?,
                projects: column("projects", &self.projects)?,
            },
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
