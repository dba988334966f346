//! Error responses shared by every route.
//!
//! Bodies are always `{"detail": "<message>"}`. Bearer failures additionally
//! carry `WWW-Authenticate: Bearer` so clients know which scheme to retry with.

use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};

use crate::services::token::TokenError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Incorrect username or password")]
    InvalidCredentials,
    #[error("Refresh token missing")]
    MissingRefreshToken,
    #[error("Invalid refresh token")]
    InvalidRefreshToken,
    #[error("User not found")]
    UserNotFound,
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Could not validate credentials")]
    InvalidBearer,
    #[error("{0}")]
    InvalidBody(String),
    #[error("Could not issue token")]
    TokenIssue(#[source] TokenError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotAuthenticated => StatusCode::FORBIDDEN,
            Self::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::TokenIssue(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Every malformed request body is a 422, whatever axum's own status would be.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::TokenIssue(e) = &self {
            tracing::error!(error = %e, "token signing failed");
        }
        let status = self.status();
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        let mut response = (status, body).into_response();
        if matches!(self, Self::InvalidBearer) {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
