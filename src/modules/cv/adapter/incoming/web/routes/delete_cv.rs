use actix_web::{delete, web, Responder};
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    cv::application::use_cases::delete_cv::DeleteCVError, shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    delete,
    path = "/api/cv",
    tag = "cv",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "CV removed", body = crate::api::schemas::MessageResponse),
        (status = 401, description = "Missing or invalid token", body = crate::api::schemas::ErrorResponse),
        (
            status = 404,
            description = "The caller has no CV",
            body = crate::api::schemas::ErrorResponse,
            example = json!({ "success": false, "message": "CV not found" })
        ),
        (status = 500, description = "Storage failure", body = crate::api::schemas::ErrorResponse),
    )
)]
#[delete("/api/cv")]
pub async fn delete_cv_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.delete_cv_use_case.execute(user.user_id).await {
        Ok(()) => ApiResponse::message("CV deleted successfully"),
        Err(DeleteCVError::CVNotFound) => ApiResponse::not_found("CV not found"),
        Err(DeleteCVError::RepositoryError(e)) => {
            error!("Error deleting CV data for user {}: {}", user.user_id, e);
            ApiResponse::internal_error("Server error while deleting CV data")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv::application::use_cases::delete_cv::IDeleteCVUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::create_token_provider;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockDeleteCVUseCase {
        result: Result<(), DeleteCVError>,
    }

    #[async_trait]
    impl IDeleteCVUseCase for MockDeleteCVUseCase {
        async fn execute(&self, _user_id: Uuid) -> Result<(), DeleteCVError> {
            self.result.clone()
        }
    }

    async fn call_delete(result: Result<(), DeleteCVError>) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_delete_cv(MockDeleteCVUseCase { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(create_token_provider(Uuid::new_v4()))
                .service(delete_cv_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/cv")
            .insert_header(("Authorization", "Bearer test_token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_delete_cv_success() {
        let (status, body) = call_delete(Ok(())).await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "CV deleted successfully");
        assert!(body.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_delete_cv_not_found() {
        let (status, body) = call_delete(Err(DeleteCVError::CVNotFound)).await;

        assert_eq!(status, 404);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "CV not found");
    }

    #[actix_web::test]
    async fn test_delete_cv_repository_error() {
        let (status, body) = call_delete(Err(DeleteCVError::RepositoryError(
            "Database connection failed".to_string(),
        )))
        .await;

        assert_eq!(status, 500);
        assert_eq!(body["message"], "Server error while deleting CV data");
        assert!(body.get("error").is_none());
    }
}
