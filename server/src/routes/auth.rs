//! Auth routes: password login, refresh-cookie exchange, logout, current user.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::{HeaderMap, header, request::Parts};
use axum::response::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use super::error::ApiError;
use crate::config::AuthConfig;
use crate::services::token::Claims;
use crate::services::users::UserProfile;
use crate::state::AppState;

pub(crate) const REFRESH_COOKIE_NAME: &str = "refresh_token";
const TOKEN_TYPE: &str = "bearer";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    fn bearer(access_token: String) -> Self {
        Self { access_token, token_type: TOKEN_TYPE.to_owned() }
    }
}

fn refresh_cookie(value: String, max_age: Duration, config: &AuthConfig) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(max_age)
        .build()
}

/// Extract the token from an `Authorization: Bearer <token>` header.
/// The scheme is matched case-insensitively.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the bearer access token.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: UserProfile,
    pub claims: Claims,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(ApiError::NotAuthenticated)?;

        let app_state = AppState::from_ref(state);
        let claims = app_state.tokens.verify_access(token).map_err(|e| {
            tracing::debug!(error = %e, "bearer token rejected");
            ApiError::InvalidBearer
        })?;
        let user = app_state.users.get(&claims.sub).ok_or(ApiError::InvalidBearer)?;

        Ok(Self { user: UserProfile::from(user), claims })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /auth/login`: Verify credentials, return an access token and set the
/// refresh cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<TokenResponse>), ApiError> {
    let Json(body) = body?;
    let Some(user) = state.users.authenticate(&body.username, &body.password) else {
        tracing::warn!(username = %body.username, "login rejected");
        return Err(ApiError::InvalidCredentials);
    };

    let access_token = state.tokens.issue_access(&user.username).map_err(ApiError::TokenIssue)?;
    let refresh_token = state.tokens.issue_refresh(&user.username).map_err(ApiError::TokenIssue)?;

    tracing::info!(username = %user.username, "login succeeded");
    let cookie = refresh_cookie(refresh_token, state.config.refresh_token_ttl, &state.config);
    Ok((jar.add(cookie), Json(TokenResponse::bearer(access_token))))
}

/// `POST /auth/refresh`: Exchange the refresh cookie for a new access token.
///
/// The refresh token itself is not rotated.
pub async fn refresh(State(state): State<AppState>, jar: CookieJar) -> Result<Json<TokenResponse>, ApiError> {
    let token = jar
        .get(REFRESH_COOKIE_NAME)
        .map(Cookie::value)
        .filter(|v| !v.is_empty())
        .ok_or(ApiError::MissingRefreshToken)?;

    let claims = state.tokens.verify_refresh(token).map_err(|e| {
        tracing::debug!(error = %e, "refresh token rejected");
        ApiError::InvalidRefreshToken
    })?;
    let user = state.users.get(&claims.sub).ok_or(ApiError::UserNotFound)?;

    let access_token = state.tokens.issue_access(&user.username).map_err(ApiError::TokenIssue)?;
    Ok(Json(TokenResponse::bearer(access_token)))
}

/// `POST /auth/logout`: Expire the refresh cookie.
///
/// Needs no credentials; access tokens simply run out.
pub async fn logout(State(state): State<AppState>) -> (CookieJar, Json<serde_json::Value>) {
    let cookie = refresh_cookie(String::new(), Duration::ZERO, &state.config);
    let jar = CookieJar::new().add(cookie);
    (jar, Json(serde_json::json!({ "message": "Successfully logged out" })))
}

/// `GET /auth/me`: Return the current user.
pub async fn me(auth: AuthUser) -> Json<UserProfile> {
    tracing::debug!(username = %auth.claims.sub, exp = auth.claims.exp, "current user lookup");
    Json(auth.user)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
