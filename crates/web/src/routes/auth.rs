//! Route definitions for registration, login, and logout.

use axum::routing::get;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// GET,POST /register
/// GET,POST /login
/// GET      /logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", get(auth::register_form).post(auth::register))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
}
