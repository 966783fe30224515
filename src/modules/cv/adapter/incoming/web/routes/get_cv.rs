use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    cv::application::use_cases::fetch_or_create_cv::FetchOrCreateCVError,
    shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    get,
    path = "/api/cv",
    tag = "cv",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "The caller's CV, created with defaults on first read", body = crate::api::schemas::CvResponse),
        (
            status = 401,
            description = "Missing or invalid token",
            body = crate::api::schemas::ErrorResponse,
            example = json!({
                "success": false,
                "message": "Not authorized, no token",
                "error": "MISSING_AUTH_HEADER"
            })
        ),
        (
            status = 500,
            description = "Storage failure",
            body = crate::api::schemas::ErrorResponse,
            example = json!({
                "success": false,
                "message": "Server error while fetching CV data"
            })
        ),
    )
)]
#[get("/api/cv")]
pub async fn get_cv_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.fetch_or_create_cv_use_case.execute(user.user_id).await {
        Ok(cv) => ApiResponse::success(cv),
        Err(FetchOrCreateCVError::RepositoryError(e)) => {
            error!("Error fetching CV data for user {}: {}", user.user_id, e);
            ApiResponse::internal_error("Server error while fetching CV data")
        }
    }
}
