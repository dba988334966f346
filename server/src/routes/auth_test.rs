use super::*;
use axum::http::{HeaderValue, Request};

use crate::config::AuthConfig;
use crate::services::users::{DEMO_EMAIL, DEMO_PASSWORD, DEMO_USERNAME, UserStore};
use crate::state::test_helpers::{test_app_state, test_app_state_insecure_cookie};

fn login_body(username: &str, password: &str) -> Result<Json<LoginRequest>, JsonRejection> {
    Ok(Json(LoginRequest { username: username.to_owned(), password: password.to_owned() }))
}

fn parts_with_auth(value: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/auth/me");
    if let Some(value) = value {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(()).unwrap().into_parts().0
}

fn jar_with_refresh(token: &str) -> CookieJar {
    CookieJar::new().add(Cookie::new(REFRESH_COOKIE_NAME, token.to_owned()))
}

// =============================================================================
// bearer_token
// =============================================================================

#[test]
fn bearer_token_parses_scheme_case_insensitively() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("bearer abc.def"));
    assert_eq!(bearer_token(&headers), Some("abc.def"));
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer  xyz "));
    assert_eq!(bearer_token(&headers), Some("xyz"));
}

#[test]
fn bearer_token_rejects_other_schemes_and_blanks() {
    let mut headers = HeaderMap::new();
    assert_eq!(bearer_token(&headers), None);
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));
    assert_eq!(bearer_token(&headers), None);
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer"));
    assert_eq!(bearer_token(&headers), None);
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer   "));
    assert_eq!(bearer_token(&headers), None);
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_returns_bearer_token_and_refresh_cookie() {
    let state = test_app_state();
    let (jar, Json(body)) = login(State(state.clone()), CookieJar::new(), login_body(DEMO_USERNAME, DEMO_PASSWORD))
        .await
        .unwrap();

    assert_eq!(body.token_type, "bearer");
    assert_eq!(state.tokens.verify_access(&body.access_token).unwrap().sub, DEMO_USERNAME);

    let cookie = jar.get(REFRESH_COOKIE_NAME).unwrap();
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    assert_eq!(state.tokens.verify_refresh(cookie.value()).unwrap().sub, DEMO_USERNAME);
}

#[tokio::test]
async fn login_cookie_secure_follows_config() {
    let state = test_app_state_insecure_cookie();
    let (jar, _) = login(State(state), CookieJar::new(), login_body(DEMO_USERNAME, DEMO_PASSWORD))
        .await
        .unwrap();
    assert_eq!(jar.get(REFRESH_COOKIE_NAME).unwrap().secure(), Some(false));
}

#[tokio::test]
async fn login_wrong_password_is_rejected() {
    let result = login(State(test_app_state()), CookieJar::new(), login_body(DEMO_USERNAME, "nope")).await;
    assert!(matches!(result, Err(ApiError::InvalidCredentials)));
}

#[tokio::test]
async fn login_unknown_user_is_rejected() {
    let result = login(State(test_app_state()), CookieJar::new(), login_body("ghost", DEMO_PASSWORD)).await;
    assert!(matches!(result, Err(ApiError::InvalidCredentials)));
}

// =============================================================================
// refresh
// =============================================================================

#[tokio::test]
async fn refresh_issues_new_access_token() {
    let state = test_app_state();
    let refresh_token = state.tokens.issue_refresh(DEMO_USERNAME).unwrap();
    let Json(body) = refresh(State(state.clone()), jar_with_refresh(&refresh_token)).await.unwrap();
    assert_eq!(body.token_type, "bearer");
    assert_eq!(state.tokens.verify_access(&body.access_token).unwrap().sub, DEMO_USERNAME);
}

#[tokio::test]
async fn refresh_without_cookie_is_missing() {
    let result = refresh(State(test_app_state()), CookieJar::new()).await;
    assert!(matches!(result, Err(ApiError::MissingRefreshToken)));
}

#[tokio::test]
async fn refresh_with_empty_cookie_is_missing() {
    let result = refresh(State(test_app_state()), jar_with_refresh("")).await;
    assert!(matches!(result, Err(ApiError::MissingRefreshToken)));
}

#[tokio::test]
async fn refresh_rejects_access_token_in_cookie() {
    let state = test_app_state();
    let access_token = state.tokens.issue_access(DEMO_USERNAME).unwrap();
    let result = refresh(State(state), jar_with_refresh(&access_token)).await;
    assert!(matches!(result, Err(ApiError::InvalidRefreshToken)));
}

#[tokio::test]
async fn refresh_rejects_garbage() {
    let result = refresh(State(test_app_state()), jar_with_refresh("garbage")).await;
    assert!(matches!(result, Err(ApiError::InvalidRefreshToken)));
}

#[tokio::test]
async fn refresh_for_removed_user_is_user_not_found() {
    let state = AppState::new(AuthConfig::default(), UserStore::new());
    let refresh_token = state.tokens.issue_refresh("ghost").unwrap();
    let result = refresh(State(state), jar_with_refresh(&refresh_token)).await;
    assert!(matches!(result, Err(ApiError::UserNotFound)));
}

// =============================================================================
// logout
// =============================================================================

#[tokio::test]
async fn logout_expires_refresh_cookie() {
    let (jar, Json(body)) = logout(State(test_app_state())).await;
    let cookie = jar.get(REFRESH_COOKIE_NAME).unwrap();
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(body["message"], "Successfully logged out");
}

// =============================================================================
// AuthUser extractor + me
// =============================================================================

#[tokio::test]
async fn auth_user_accepts_valid_access_token() {
    let state = test_app_state();
    let token = state.tokens.issue_access(DEMO_USERNAME).unwrap();
    let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));

    let auth = AuthUser::from_request_parts(&mut parts, &state).await.unwrap();
    let Json(profile) = me(auth).await;
    assert_eq!(profile.username, DEMO_USERNAME);
    assert_eq!(profile.email, DEMO_EMAIL);
}

#[tokio::test]
async fn auth_user_without_header_is_not_authenticated() {
    let state = test_app_state();
    let mut parts = parts_with_auth(None);
    let result = AuthUser::from_request_parts(&mut parts, &state).await;
    assert!(matches!(result, Err(ApiError::NotAuthenticated)));
}

#[tokio::test]
async fn auth_user_rejects_refresh_token_as_bearer() {
    let state = test_app_state();
    let token = state.tokens.issue_refresh(DEMO_USERNAME).unwrap();
    let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));
    let result = AuthUser::from_request_parts(&mut parts, &state).await;
    assert!(matches!(result, Err(ApiError::InvalidBearer)));
}

#[tokio::test]
async fn auth_user_rejects_token_for_unknown_user() {
    let state = test_app_state();
    let token = state.tokens.issue_access("ghost").unwrap();
    let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));
    let result = AuthUser::from_request_parts(&mut parts, &state).await;
    assert!(matches!(result, Err(ApiError::InvalidBearer)));
}

#[tokio::test]
async fn auth_user_rejects_garbage_token() {
    let state = test_app_state();
    let mut parts = parts_with_auth(Some("Bearer not-a-token"));
    let result = AuthUser::from_request_parts(&mut parts, &state).await;
    assert!(matches!(result, Err(ApiError::InvalidBearer)));
}
