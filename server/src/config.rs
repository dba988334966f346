//! Runtime configuration loaded from the environment.
//!
//! DESIGN
//! ======
//! Every knob has a default so a bare `cargo run` serves the demo account.
//! Malformed values fall back to the default rather than aborting startup;
//! the only value worth warning about is the built-in signing secret.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use time::Duration;

pub(crate) const DEFAULT_PORT: u16 = 8000;
pub(crate) const DEFAULT_SECRET_KEY: &str = "change-me-in-production";
const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: u32 = 30;
const DEFAULT_REFRESH_TOKEN_EXPIRE_DAYS: u16 = 7;
const DEFAULT_CORS_ALLOW_ORIGIN: &str = "http://localhost:3001";

/// Parse a boolean-ish environment variable.
///
/// Accepts `1/0`, `true/false`, `yes/no`, `on/off` in any case. Returns `None`
/// when the variable is unset or unrecognized.
pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Like [`env_parse`] but zero also falls back to `default`.
///
/// Negative and out-of-range input fails to parse into the unsigned `T`, so
/// callers get a bounded, strictly positive value.
pub(crate) fn env_positive<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Default + PartialEq + Copy,
{
    let value = env_parse(key, default);
    if value == T::default() { default } else { value }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

/// Settings for token issuance, cookies, and CORS.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify every token.
    pub secret_key: String,
    /// Lifetime of bearer access tokens.
    pub access_token_ttl: Duration,
    /// Lifetime of refresh tokens and of the cookie carrying them.
    pub refresh_token_ttl: Duration,
    /// The single browser origin allowed to make credentialed requests.
    pub cors_allow_origin: String,
    /// Whether the refresh cookie is marked `Secure`.
    pub cookie_secure: bool,
}

impl AuthConfig {
    /// Load from `JWT_SECRET_KEY`, `ACCESS_TOKEN_EXPIRE_MINUTES`,
    /// `REFRESH_TOKEN_EXPIRE_DAYS`, `CORS_ALLOW_ORIGIN`, `COOKIE_SECURE`.
    #[must_use]
    pub fn from_env() -> Self {
        let secret_key = env_string("JWT_SECRET_KEY", DEFAULT_SECRET_KEY);
        let access_minutes = env_positive("ACCESS_TOKEN_EXPIRE_MINUTES", DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES);
        let refresh_days = env_positive("REFRESH_TOKEN_EXPIRE_DAYS", DEFAULT_REFRESH_TOKEN_EXPIRE_DAYS);

        Self {
            secret_key,
            access_token_ttl: Duration::minutes(i64::from(access_minutes)),
            refresh_token_ttl: Duration::days(i64::from(refresh_days)),
            cors_allow_origin: env_string("CORS_ALLOW_ORIGIN", DEFAULT_CORS_ALLOW_ORIGIN),
            cookie_secure: env_bool("COOKIE_SECURE").unwrap_or(true),
        }
    }

    /// True when the signing secret was never overridden.
    #[must_use]
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: DEFAULT_SECRET_KEY.to_owned(),
            access_token_ttl: Duration::minutes(i64::from(DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES)),
            refresh_token_ttl: Duration::days(i64::from(DEFAULT_REFRESH_TOKEN_EXPIRE_DAYS)),
            cors_allow_origin: DEFAULT_CORS_ALLOW_ORIGIN.to_owned(),
            cookie_secure: true,
        }
    }
}

/// Listening port from `PORT`.
#[must_use]
pub fn port() -> u16 {
    env_parse("PORT", DEFAULT_PORT)
}
