use actix_web::dev::Payload;
use actix_web::http::header::HeaderMap;
use actix_web::{web, FromRequest, HttpRequest};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use thiserror::Error;

use crate::errors::ApiError;

/// Errors that can occur while authenticating a request
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing authorization header")]
    MissingToken,

    #[error("authorization header must use Bearer scheme")]
    InvalidScheme,

    #[error("token has expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(String),
}

/// Claims carried by tokens issued by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Stable account id; profiles are resolved from this subject.
    pub sub: String,
    pub exp: usize,
}

/// Validates bearer tokens against the shared signing secret
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Validate a raw token and return its claims
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::Invalid(e.to_string()),
            }
        })?;

        Ok(data.claims)
    }
}

/// The authenticated caller, extracted before any handler runs.
///
/// Extraction failure rejects the request with 401 without touching the
/// store; handlers that take AuthUser can assume a valid token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub subject: String,
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthUser, ApiError> {
    let validator = req
        .app_data::<web::Data<TokenValidator>>()
        .ok_or_else(|| ApiError::Unauthorized("token validation unavailable".to_string()))?;

    let token = extract_bearer_token(req.headers())?;
    let claims = validator.validate(&token)?;

    Ok(AuthUser {
        subject: claims.sub,
    })
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    let header = headers
        .get("Authorization")
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidScheme)?;

    let token = header.strip_prefix("Bearer ").ok_or(AuthError::InvalidScheme)?;

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn issue(secret: &str, sub: &str, exp: usize) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("token encodes")
    }

    fn future_exp() -> usize {
        (chrono::Utc::now().timestamp() + 3600) as usize
    }

    #[test]
    fn test_valid_token_roundtrip() {
        let validator = TokenValidator::new("test-secret");
        let token = issue("test-secret", "user-42", future_exp());

        let claims = validator.validate(&token).expect("token validates");
        assert_eq!(claims.sub, "user-42");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let validator = TokenValidator::new("test-secret");
        let token = issue("other-secret", "user-42", future_exp());

        assert!(matches!(
            validator.validate(&token),
            Err(AuthError::Invalid(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let validator = TokenValidator::new("test-secret");
        let exp = (chrono::Utc::now().timestamp() - 3600) as usize;
        let token = issue("test-secret", "user-42", exp);

        assert!(matches!(validator.validate(&token), Err(AuthError::Expired)));
    }
}
