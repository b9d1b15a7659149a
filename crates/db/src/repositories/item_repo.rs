//! Repository for the `items` table.

use basket_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::item::{CreateItem, Item};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, price, img_url, created_at";

/// Provides read and seed operations for catalog items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateItem) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (title, description, price, img_url)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.img_url)
            .fetch_one(pool)
            .await
    }

    /// Find an item by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = ?1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an item by its unique title.
    pub async fn find_by_title(
        pool: &SqlitePool,
        title: &str,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE title = ?1");
        sqlx::query_as::<_, Item>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List the whole catalog in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY id");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }
}
