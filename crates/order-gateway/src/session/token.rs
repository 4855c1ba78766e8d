//! JWT issuing and validation.

use crate::model::User;
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    Signing(String),

    #[error("Invalid token: {0}")]
    Invalid(String),

    /// The configured lifetime does not yield a representable expiry.
    #[error("Token lifetime of {0} hours is out of range")]
    LifetimeOutOfRange(i64),

    /// The token is well-formed but was issued to someone else.
    #[error("Token subject does not match user {0}")]
    SubjectMismatch(String),
}

/// Claims carried by gateway tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    /// Username.
    pub aud: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and checks HS256 tokens.
#[derive(Clone)]
pub struct TokenService {
    issuer: String,
    ttl_hours: i64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str, issuer: impl Into<String>, ttl_hours: i64) -> Self {
        Self {
            issuer: issuer.into(),
            ttl_hours,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        let now = Utc::now();
        let expires_at = TimeDelta::try_hours(self.ttl_hours)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or(TokenError::LifetimeOutOfRange(self.ttl_hours))?;
        let claims = Claims {
            sub: user.id.to_string(),
            aud: user.username.clone(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Checks signature, expiry, issuer and that the token belongs to `user`.
    pub fn validate(&self, token: &str, user: &User) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&user.username]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| TokenError::Invalid(e.to_string()))?
            .claims;
        if claims.sub != user.id.to_string() {
            return Err(TokenError::SubjectMismatch(user.id.to_string()));
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;

    fn user(id: u32, username: &str) -> User {
        User {
            id: UserId(id),
            username: username.to_string(),
            password: None,
            name: String::new(),
            surname: String::new(),
            email: String::new(),
        }
    }

    #[test]
    fn test_issued_token_validates_for_its_user() {
        let tokens = TokenService::new("secret", "photosi", 24);
        let mario = user(1, "mario");

        let token = tokens.issue(&mario).unwrap();
        let claims = tokens.validate(&token, &mario).unwrap();

        assert_eq!(claims.sub, "1");
        assert_eq!(claims.aud, "mario");
        assert_eq!(claims.iss, "photosi");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_token_rejected_for_other_user() {
        let tokens = TokenService::new("secret", "photosi", 24);
        let token = tokens.issue(&user(1, "mario")).unwrap();

        // Different audience
        assert!(matches!(
            tokens.validate(&token, &user(1, "luigi")),
            Err(TokenError::Invalid(_))
        ));
        // Same username, different id
        assert_eq!(
            tokens.validate(&token, &user(2, "mario")),
            Err(TokenError::SubjectMismatch("2".to_string()))
        );
    }

    #[test]
    fn test_token_rejected_with_wrong_secret_or_issuer() {
        let mario = user(1, "mario");
        let token = TokenService::new("secret", "photosi", 24).issue(&mario).unwrap();

        assert!(TokenService::new("other", "photosi", 24)
            .validate(&token, &mario)
            .is_err());
        assert!(TokenService::new("secret", "elsewhere", 24)
            .validate(&token, &mario)
            .is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = TokenService::new("secret", "photosi", -1);
        let mario = user(1, "mario");

        let token = tokens.issue(&mario).unwrap();

        assert!(tokens.validate(&token, &mario).is_err());
    }

    #[test]
    fn test_unrepresentable_lifetime_is_an_error() {
        let mario = user(1, "mario");

        assert_eq!(
            TokenService::new("secret", "photosi", 3_000_000_000_000).issue(&mario),
            Err(TokenError::LifetimeOutOfRange(3_000_000_000_000))
        );
        assert_eq!(
            TokenService::new("secret", "photosi", 2_400_000_000).issue(&mario),
            Err(TokenError::LifetimeOutOfRange(2_400_000_000))
        );
    }
}
