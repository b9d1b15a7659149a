//! Handler for the catalog home page.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use basket_db::repositories::ItemRepo;

use crate::error::AppResult;
use crate::flash;
use crate::middleware::auth::MaybeUser;
use crate::state::AppState;
use crate::views;

/// GET /
///
/// Render the catalog with all items. Shows for anonymous and authenticated
/// visitors alike.
pub async fn home(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    headers: HeaderMap,
) -> AppResult<Response> {
    let items = ItemRepo::list(&state.pool).await?;

    let pending = flash::take(&headers);
    let page = views::catalog_page(&items, user.as_ref(), pending).into_response();
    Ok(match pending {
        Some(_) => flash::clear_on(page),
        None => page,
    })
}
