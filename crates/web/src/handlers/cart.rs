//! Handlers for the cart: add, show, increase, decrease.
//!
//! All routes require authentication; [`CurrentUser`] redirects anonymous
//! visitors to `/login` before any mutation can happen.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use basket_core::error::CoreError;
use basket_core::types::DbId;
use basket_db::repositories::LinkRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::views;

/// GET /add/{item_id}
///
/// Add one unit of the item to the caller's cart, then back to the catalog.
pub async fn add(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<DbId>,
) -> AppResult<Response> {
    let link = LinkRepo::add_item(&state.pool, user.id, item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "item",
            id: item_id,
        }))?;

    tracing::debug!(user_id = user.id, item_id, amount = link.amount, "Added to cart");
    Ok(Redirect::to("/").into_response())
}

/// GET /cart
///
/// Render the caller's cart lines and total.
pub async fn show(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Response> {
    let entries = LinkRepo::list_for_user(&state.pool, user.id).await?;
    Ok(views::cart_page(&entries, &user).into_response())
}

/// GET /increase/{link_id}
///
/// Increment the cart line, then back to the cart. A line that does not exist
/// or belongs to another user is a 404.
pub async fn increase(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(link_id): Path<DbId>,
) -> AppResult<Response> {
    LinkRepo::increase(&state.pool, user.id, link_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "cart link",
            id: link_id,
        }))?;

    Ok(Redirect::to("/cart").into_response())
}

/// GET /decrease/{link_id}
///
/// Decrement the cart line (removing it at amount 1), then back to the cart.
pub async fn decrease(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(link_id): Path<DbId>,
) -> AppResult<Response> {
    LinkRepo::decrease(&state.pool, user.id, link_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "cart link",
            id: link_id,
        }))?;

    Ok(Redirect::to("/cart").into_response())
}
