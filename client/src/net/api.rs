//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser, where the refresh cookie lives.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and data
//! fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ProductCatalog, TokenResponse, User, UserDirectory};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REFRESH_ENDPOINT: &str = "/auth/refresh";
pub const LOGOUT_ENDPOINT: &str = "/auth/logout";
pub const ME_ENDPOINT: &str = "/auth/me";
pub const USERS_ENDPOINT: &str = "/api/users";
pub const PRODUCTS_ENDPOINT: &str = "/api/products";

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Prefer the server's `detail` text; fall back to the bare status.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16, detail: Option<String>) -> String {
    detail
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"))
}

#[cfg(feature = "hydrate")]
async fn error_from(resp: gloo_net::http::Response) -> String {
    let detail = resp
        .json::<super::types::ErrorDetail>()
        .await
        .ok()
        .map(|body| body.detail);
    failure_message(resp.status(), detail)
}

#[cfg(feature = "hydrate")]
async fn get_with_bearer<T>(url: &str, token: &str) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &bearer_header(token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_from(resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Exchange credentials for an access token via `POST /auth/login`.
/// The server also sets the HttpOnly refresh cookie.
///
/// # Errors
///
/// Returns the server's error detail (or a status message) on failure.
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        resp.json::<TokenResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Trade the refresh cookie for a fresh access token via `POST /auth/refresh`.
/// Returns `None` when there is no valid session or on the server.
pub async fn refresh() -> Option<TokenResponse> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(REFRESH_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<TokenResponse>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Clear the refresh cookie by calling `POST /auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await;
    }
}

/// Fetch the user behind `token` from `/auth/me`.
/// Returns `None` if the token is rejected or on the server.
pub async fn fetch_current_user(token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        get_with_bearer::<User>(ME_ENDPOINT, token).await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Fetch the demo user directory from `/api/users`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn fetch_users(token: &str) -> Result<UserDirectory, String> {
    #[cfg(feature = "hydrate")]
    {
        get_with_bearer(USERS_ENDPOINT, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch the demo product catalog from `/api/products`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn fetch_products(token: &str) -> Result<ProductCatalog, String> {
    #[cfg(feature = "hydrate")]
    {
        get_with_bearer(PRODUCTS_ENDPOINT, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}
