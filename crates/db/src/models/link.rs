//! Cart link (cart line) model and DTOs.

use basket_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A cart line row from the `cart_links` table: `amount` units of one item
/// in one user's cart. At most one row exists per (user, item) pair.
#[derive(Debug, Clone, FromRow)]
pub struct CartLink {
    pub id: DbId,
    pub user_id: DbId,
    pub item_id: DbId,
    pub amount: i64,
    pub created_at: Timestamp,
}

/// A cart line joined to its item, as shown on the cart page.
#[derive(Debug, Clone, FromRow)]
pub struct CartEntry {
    pub link_id: DbId,
    pub item_id: DbId,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub img_url: Option<String>,
    pub amount: i64,
}

/// Result of a decrease on a cart line.
#[derive(Debug, Clone)]
pub enum DecreaseOutcome {
    /// Amount was decremented; the updated row.
    Updated(CartLink),
    /// Amount would have reached zero; the row was deleted.
    Removed,
}
