use actix_web::{http::StatusCode, post, web, Responder};
use tracing::{error, warn};

use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    cv::{
        adapter::incoming::web::upsert_request::UpsertCVRequest,
        application::use_cases::upsert_cv::UpsertCVError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/cv",
    tag = "cv",
    security(("BearerAuth" = [])),
    request_body = UpsertCVRequest,
    responses(
        (status = 200, description = "CV created or updated", body = crate::api::schemas::CvSavedResponse),
        (
            status = 400,
            description = "Validation failed, or the CV could not be built or written",
            body = crate::api::schemas::ErrorResponse,
            example = json!({
                "success": false,
                "message": "Validation failed",
                "errors": [
                    {
                        "path": "personalDetails.email",
                        "msg": "Please enter a valid email",
                        "location": "body"
                    }
                ]
            })
        ),
        (status = 401, description = "Missing or invalid token", body = crate::api::schemas::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/cv")]
pub async fn upsert_cv_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    req: web::Json<UpsertCVRequest>,
) -> impl Responder {
    let request = req.into_inner();

    let errors = request.validate();
    if !errors.is_empty() {
        warn!(
            "Rejected CV update for user {}: {} invalid field(s)",
            user.user_id,
            errors.len()
        );
        return ApiResponse::validation_failed(errors);
    }

    match data
        .upsert_cv_use_case
        .execute(user.user_id, request.into_patch())
        .await
    {
        Ok(cv) => ApiResponse::success_with_message("CV saved successfully", cv),
        Err(UpsertCVError::CreateFailed(detail)) => {
            error!("Error creating CV data for user {}: {}", user.user_id, detail);
            ApiResponse::error_with_detail(StatusCode::BAD_REQUEST, "Error creating CV data", &detail)
        }
        Err(UpsertCVError::SaveFailed(detail)) => {
            error!("Error saving CV data for user {}: {}", user.user_id, detail);
            ApiResponse::error_with_detail(StatusCode::BAD_REQUEST, "Error saving CV data", &detail)
        }
        Err(UpsertCVError::RepositoryError(e)) => {
            error!("Error looking up CV data for user {}: {}", user.user_id, e);
            ApiResponse::internal_error("Server error while saving CV data")
        }
    }
}
