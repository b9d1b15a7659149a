//! Catalog item model and DTOs.

use basket_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A catalog item row from the `items` table.
///
/// Items are immutable after creation; there are no edit or delete routes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// Price in the smallest currency unit.
    pub price: i64,
    pub img_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new item (used by the seed binary).
#[derive(Debug, Clone)]
pub struct CreateItem {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub img_url: Option<String>,
}
