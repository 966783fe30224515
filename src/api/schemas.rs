// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::cv::domain::CvRecord;
use crate::shared::api::FieldError;

/// Success body carrying the caller's CV
#[derive(Serialize, ToSchema)]
pub struct CvResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: CvRecord,
}

/// Success body returned after a save
#[derive(Serialize, ToSchema)]
pub struct CvSavedResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "CV saved successfully")]
    pub message: String,
    pub data: CvRecord,
}

/// Success body with only a message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "CV deleted successfully")]
    pub message: String,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Human-readable error message
    #[schema(example = "Validation failed")]
    pub message: String,
    /// Diagnostic detail or machine-readable code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Every violated field rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}
