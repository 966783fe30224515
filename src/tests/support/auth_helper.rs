use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

/// Accepts any bearer token as belonging to `user_id`.
pub struct MockTokenProvider {
    user_id: Uuid,
}

impl TokenProvider for MockTokenProvider {
    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Ok(TokenClaims {
            sub: self.user_id,
            exp: 9999999999,
            iat: 0,
            nbf: 0,
            iss: "Ekstion".to_string(),
            token_type: "access".to_string(),
        })
    }
}

pub fn create_token_provider(user_id: Uuid) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(Arc::new(MockTokenProvider { user_id }) as Arc<dyn TokenProvider + Send + Sync>)
}

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "Ekstion".to_string(),
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        access_token_expiry: 3600,
    })
}

/// `Authorization` header value carrying a freshly signed access token.
pub fn bearer_for(service: &JwtTokenService, user_id: Uuid) -> String {
    let token = service
        .generate_access_token(user_id)
        .expect("Token should be generated");
    format!("Bearer {}", token)
}
