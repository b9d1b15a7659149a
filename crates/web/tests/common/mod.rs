//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as production)
//! on top of the `#[sqlx::test]`-provided pool, and drives it in-process via
//! `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use basket_web::config::ServerConfig;
use basket_web::router::build_app_router;
use basket_web::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        request_timeout_secs: 30,
        session_expiry_days: 7,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

#[allow(dead_code)]
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

#[allow(dead_code)]
pub async fn get_with_cookie(app: Router, path: &str, cookie: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(path)
            .header(COOKIE, cookie)
            .body(Body::empty())
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

/// POST a `application/x-www-form-urlencoded` body.
#[allow(dead_code)]
pub async fn post_form(app: Router, path: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

/// The `Location` header of a redirect response.
#[allow(dead_code)]
pub fn location(response: &Response) -> Option<&str> {
    response.headers().get(LOCATION)?.to_str().ok()
}

/// Extract a cookie value from the response's `Set-Cookie` headers.
/// Returns `None` for a missing or cleared (empty-valued) cookie.
#[allow(dead_code)]
pub fn response_cookie(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| {
            let rest = v.strip_prefix(name)?.strip_prefix('=')?;
            let value = rest.split(';').next().unwrap_or_default();
            (!value.is_empty()).then(|| value.to_string())
        })
}

/// True when the response clears the named cookie (`Max-Age=0`).
#[allow(dead_code)]
pub fn clears_cookie(response: &Response, name: &str) -> bool {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with(&format!("{name}=;")) && v.contains("Max-Age=0"))
}

/// Collect the response body into a string.
#[allow(dead_code)]
pub async fn body_string(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body is UTF-8")
}

// ---------------------------------------------------------------------------
// Flow helpers
// ---------------------------------------------------------------------------

/// Register a user through the API and return their session cookie
/// (`session=<token>`), ready for a `Cookie` request header.
#[allow(dead_code)]
pub async fn register_user(app: &Router, email: &str, name: &str) -> String {
    let body = format!(
        "email={}&name={name}&password=long-enough-password",
        email.replace('@', "%40")
    );
    let response = post_form(app.clone(), "/register", &body).await;
    let token = response_cookie(&response, "session").expect("registration sets session cookie");
    format!("session={token}")
}
