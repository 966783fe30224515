// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform body for every API response: `{success, data?, message?, errors?, error?}`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One failed rule on one request field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct FieldError {
    /// Dotted path of the offending field
    #[schema(example = "personalDetails.email")]
    pub path: String,
    #[schema(example = "Please enter a valid email")]
    pub msg: String,
    #[schema(example = "body")]
    pub location: String,
}

impl FieldError {
    pub fn body(path: &str, msg: &str) -> Self {
        Self {
            path: path.to_string(),
            msg: msg.to_string(),
            location: "body".to_string(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: Option<T>, message: Option<&str>) -> Self {
        ApiResponse {
            success: true,
            data,
            message: message.map(str::to_string),
            errors: None,
            error: None,
        }
    }

    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::ok(Some(data), None))
    }

    pub fn success_with_message(message: &str, data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::ok(Some(data), Some(message)))
    }
}

impl ApiResponse<()> {
    fn failure(message: &str) -> Self {
        ApiResponse {
            success: false,
            data: None,
            message: Some(message.to_string()),
            errors: None,
            error: None,
        }
    }

    pub fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(Self::ok(None, Some(message)))
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(Self::failure(message))
    }

    /// Failure that also carries a diagnostic detail in `error`.
    pub fn error_with_detail(status: StatusCode, message: &str, detail: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            error: Some(detail.to_string()),
            ..Self::failure(message)
        })
    }

    pub fn validation_failed(errors: Vec<FieldError>) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiResponse::<()> {
            errors: Some(errors),
            ..Self::failure("Validation failed")
        })
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error_with_detail(StatusCode::UNAUTHORIZED, message, code)
    }

    pub fn internal_error(message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}
