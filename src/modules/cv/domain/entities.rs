use chrono::{DateTime, Utc};
use serde::{
    de::{DeserializeOwned, Error, Unexpected},
    Deserialize, Deserializer, Serialize,
};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

/// The single CV document owned by one user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CvRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(flatten)]
    pub content: CvContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Everything in a CV that the owner can edit.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CvContent {
    pub personal_details: PersonalDetails,
    pub about: About,
    pub education: Vec<Education>,
    pub work_experience: Vec<WorkExperience>,
    #[serde(deserialize_with = "texts")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "texts")]
    pub interests: Vec<String>,
    pub projects: Vec<Project>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDetails {
    #[serde(deserialize_with = "text")]
    pub full_name: String,
    #[serde(deserialize_with = "text")]
    pub phone: String,
    #[serde(deserialize_with = "text")]
    pub email: String,
    #[serde(deserialize_with = "text")]
    pub address: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(default)]
pub struct About {
    #[serde(deserialize_with = "text")]
    pub profile: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "text")]
    pub institution: String,
    #[serde(deserialize_with = "text")]
    pub qualification: String,
    #[serde(deserialize_with = "text")]
    pub time: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(default)]
pub struct WorkExperience {
    #[serde(deserialize_with = "text")]
    pub company: String,
    #[serde(deserialize_with = "text")]
    pub position: String,
    #[serde(deserialize_with = "text")]
    pub time: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    #[serde(deserialize_with = "text")]
    pub languages: String,
}

/// Sections supplied by an upsert, still in their JSON form. `None` means
/// "keep what is stored".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CvPatch {
    pub personal_details: Option<Value>,
    pub about: Option<Value>,
    pub education: Option<Value>,
    pub work_experience: Option<Value>,
    pub skills: Option<Value>,
    pub interests: Option<Value>,
    pub projects: Option<Value>,
}

impl CvRecord {
    pub fn into_content(self) -> CvContent {
        self.content
    }
}

/// Reads a scalar in a string position as its string form. `null` becomes
/// `""`; objects and arrays are rejected.
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    scalar_text(Value::deserialize(deserializer)?).map_err(not_a_string::<D::Error>)
}

fn texts<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Vec::<Value>::deserialize(deserializer)?
        .into_iter()
        .map(|item| scalar_text(item).map_err(not_a_string::<D::Error>))
        .collect()
}

fn scalar_text(value: Value) -> Result<String, Value> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(other),
    }
}

fn not_a_string<E: Error>(value: Value) -> E {
    let unexpected = match value {
        Value::Array(_) => Unexpected::Seq,
        _ => Unexpected::Map,
    };
    E::invalid_type(unexpected, &"a string")
}

fn cast<T: DeserializeOwned>(section: &str, supplied: Option<Value>, current: T) -> Result<T, String> {
    match supplied {
        Some(value) => serde_json::from_value(value)
            .map_err(|e| format!("Cast to {} failed: {}", section, e)),
        None => Ok(current),
    }
}

fn cast_texts(section: &str, supplied: Option<Value>, current: Vec<String>) -> Result<Vec<String>, String> {
    match supplied {
        Some(value) => texts(value).map_err(|e| format!("Cast to {} failed: {}", section, e)),
        None => Ok(current),
    }
}

impl CvContent {
    /// Replaces every section present in `patch` wholesale. Fails when a
    /// supplied section cannot be read as that section's shape.
    pub fn apply(self, patch: CvPatch) -> Result<Self, String> {
        Ok(Self {
            personal_details: cast("personalDetails", patch.personal_details, self.personal_details)?,
            about: cast("about", patch.about, self.about)?,
            education: cast("education", patch.education, self.education)?,
            work_experience: cast("workExperience", patch.work_experience, self.work_experience)?,
            skills: cast_texts("skills", patch.skills, self.skills)?,
            interests: cast_texts("interests", patch.interests, self.interests)?,
            projects: cast("projects", patch.projects, self.projects)?,
        })
    }
}
