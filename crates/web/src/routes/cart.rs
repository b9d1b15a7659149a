//! Route definitions for the cart. All routes require authentication via the
//! [`crate::middleware::auth::CurrentUser`] extractor on their handlers.

use axum::routing::get;
use axum::Router;

use crate::handlers::cart;
use crate::state::AppState;

/// ```text
/// GET /add/{item_id}
/// GET /cart
/// GET /increase/{link_id}
/// GET /decrease/{link_id}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add/{item_id}", get(cart::add))
        .route("/cart", get(cart::show))
        .route("/increase/{link_id}", get(cart::increase))
        .route("/decrease/{link_id}", get(cart::decrease))
}
