pub mod auth;
pub mod cart;
pub mod catalog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /                    catalog
///
/// GET  /register            registration form
/// POST /register            create user + auto-login
/// GET  /login               login form
/// POST /login               verify credentials
/// GET  /logout              clear session
///
/// GET  /add/{item_id}       add to cart        (requires auth)
/// GET  /cart                show cart          (requires auth)
/// GET  /increase/{link_id}  increment line     (requires auth)
/// GET  /decrease/{link_id}  decrement line     (requires auth)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(auth::router())
        .merge(cart::router())
}
