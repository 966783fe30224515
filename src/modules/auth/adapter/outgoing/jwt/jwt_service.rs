use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use std::fmt;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    /// Initialize the service with config
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            decoding_key,
        }
    }
}

// Tokens are minted by the account service in production. Tests sign their
// own with the same secret and issuer.
#[cfg(test)]
impl JwtTokenService {
    pub fn generate_access_token(
        &self,
        user_id: uuid::Uuid,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        use chrono::{Duration, Utc};
        use jsonwebtoken::{encode, EncodingKey, Header};

        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.secret_key.as_bytes()),
        )
    }
}

impl TokenProvider for JwtTokenService {
    /// Verify and decode an access token
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[&self.config.issuer]);

        let decoded = decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;

            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token verification failed: Token expired");
                    TokenError::TokenExpired
                }
                ErrorKind::ImmatureSignature => {
                    tracing::warn!("Token verification failed: Token not yet valid");
                    TokenError::TokenNotYetValid
                }
                ErrorKind::InvalidSignature => {
                    tracing::error!("Security alert: Invalid token signature detected");
                    TokenError::InvalidSignature
                }
                _ => {
                    tracing::warn!("Token verification failed: {}", e);
                    TokenError::MalformedToken
                }
            }
        })?;

        if decoded.claims.token_type != ACCESS_TOKEN_TYPE {
            tracing::warn!(
                "Token type mismatch: expected 'access', got '{}'",
                decoded.claims.token_type
            );
            return Err(TokenError::InvalidTokenType(ACCESS_TOKEN_TYPE.to_string()));
        }

        Ok(decoded.claims)
    }
}
