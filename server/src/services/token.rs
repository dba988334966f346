//! JWT issuance and verification.
//!
//! ARCHITECTURE
//! ============
//! Two token kinds share one HS256 secret. Access tokens are short-lived and
//! travel as `Authorization: Bearer`; refresh tokens are long-lived and live
//! in an HttpOnly cookie. The `type` claim keeps the two from being swapped:
//! a refresh token is rejected where an access token is expected and the
//! other way round.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::config::AuthConfig;

/// Which role a token was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Registered and private claims carried by every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to.
    pub sub: String,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
    #[serde(rename = "type")]
    pub kind: TokenKind,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("expected {expected:?} token, got {actual:?}")]
    WrongKind { expected: TokenKind, actual: TokenKind },
    #[error("token expiry out of range")]
    ExpiryOutOfRange,
    #[error("invalid token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),
}

/// Signs and verifies tokens with the configured secret and lifetimes.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.secret_key.as_bytes();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            access_ttl: config.access_token_ttl,
            refresh_ttl: config.refresh_token_ttl,
        }
    }

    /// Issue an access token for `username`.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails or the expiry is not representable.
    pub fn issue_access(&self, username: &str) -> Result<String, TokenError> {
        self.issue(username, TokenKind::Access, self.access_ttl)
    }

    /// Issue a refresh token for `username`.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails or the expiry is not representable.
    pub fn issue_refresh(&self, username: &str) -> Result<String, TokenError> {
        self.issue(username, TokenKind::Refresh, self.refresh_ttl)
    }

    pub(crate) fn issue(&self, username: &str, kind: TokenKind, ttl: Duration) -> Result<String, TokenError> {
        let exp = OffsetDateTime::now_utc()
            .checked_add(ttl)
            .ok_or(TokenError::ExpiryOutOfRange)?
            .unix_timestamp();
        let claims = Claims { sub: username.to_owned(), exp, kind };
        Ok(jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify signature, expiry and kind of a bearer access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is malformed, expired, signed with another
    /// secret, or is not an access token.
    pub fn verify_access(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify(token, TokenKind::Access)
    }

    /// Verify signature, expiry and kind of a refresh token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is malformed, expired, signed with another
    /// secret, or is not a refresh token.
    pub fn verify_refresh(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify(token, TokenKind::Refresh)
    }

    fn verify(&self, token: &str, expected: TokenKind) -> Result<Claims, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e),
            }
        })?;
        let claims = data.claims;
        if claims.kind != expected {
            return Err(TokenError::WrongKind { expected, actual: claims.kind });
        }
        Ok(claims)
    }
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
