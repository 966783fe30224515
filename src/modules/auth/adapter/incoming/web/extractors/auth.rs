use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use crate::shared::api::ApiResponse;

/// The user a bearer access token resolved to.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let jwt_service = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
            Some(service) => service,
            None => {
                tracing::error!("Token provider is not registered in app data");
                return ready(Err(create_api_error(ApiResponse::internal_error(
                    "Internal server error",
                ))));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Not authorized, no token",
                ))));
            }
        };

        match jwt_service.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: claims.sub,
            })),
            Err(TokenError::InvalidTokenType(_)) => ready(Err(create_api_error(
                ApiResponse::unauthorized("INVALID_TOKEN_TYPE", "Not authorized, invalid token type"),
            ))),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Not authorized, token failed",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|s| s.to_string())
}
