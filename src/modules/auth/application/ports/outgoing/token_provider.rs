use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenError {
    TokenExpired,
    TokenNotYetValid,
    InvalidTokenType(String),
    InvalidSignature,
    MalformedToken,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::TokenExpired => write!(f, "Token has expired"),
            TokenError::TokenNotYetValid => write!(f, "Token is not yet valid"),
            TokenError::InvalidTokenType(expected) => {
                write!(f, "Invalid token type, expected: {}", expected)
            }
            TokenError::InvalidSignature => write!(f, "Invalid token signature"),
            TokenError::MalformedToken => write!(f, "Malformed token"),
        }
    }
}
impl Error for TokenError {}

/// Structure for JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid, // User ID
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub iss: String,
    pub token_type: String, // only "access" is accepted by the API
}

/// Turns bearer tokens into user identities. Tokens are issued by the
/// account service; this API only ever verifies them.
pub trait TokenProvider: Send + Sync {
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
