// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Answers unparsable JSON bodies with the standard envelope instead of plain text.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        tracing::debug!("Rejected JSON payload: {}", message);
        actix_web::error::InternalError::from_response(err, ApiResponse::bad_request(&message))
            .into()
    })
}
