use crate::api::schemas::{CvResponse, CvSavedResponse, ErrorResponse, MessageResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::cv::adapter::incoming::web::UpsertCVRequest;
use crate::cv::domain::{About, CvRecord, Education, PersonalDetails, Project, WorkExperience};
use crate::shared::api::FieldError;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CV API",
        version = "1.0.0",
        description = "API documentation for the per-user CV service",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        crate::cv::adapter::incoming::web::routes::get_cv_handler,
        crate::cv::adapter::incoming::web::routes::upsert_cv_handler,
        crate::cv::adapter::incoming::web::routes::delete_cv_handler,
    ),
    components(
        schemas(
            // Response wrappers
            CvResponse,
            CvSavedResponse,
            MessageResponse,
            ErrorResponse,
            FieldError,

            // CV
            UpsertCVRequest,
            CvRecord,
            PersonalDetails,
            About,
            Education,
            WorkExperience,
            Project
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "cv", description = "CV management endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
