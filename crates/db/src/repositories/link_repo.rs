//! Repository for the `cart_links` table -- the cart engine.
//!
//! Every mutation is a single guarded statement, so two requests touching
//! the same cart line serialize at the database without a read-to-write
//! lock upgrade that could fail under WAL. `increase` and `decrease` take
//! the calling user's id and match it against the row, so a link owned by
//! another user behaves exactly like a missing link.

use basket_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::link::{CartEntry, CartLink, DecreaseOutcome};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, item_id, amount, created_at";

/// Provides cart-line operations scoped to one user.
pub struct LinkRepo;

impl LinkRepo {
    /// Add one unit of an item to the user's cart.
    ///
    /// An existing line for (user, item) gets `amount + 1`; otherwise a new
    /// line with `amount = 1` is inserted. The upsert makes the whole
    /// operation one atomic statement. Returns `None` when the item does
    /// not exist.
    pub async fn add_item(
        pool: &SqlitePool,
        user_id: DbId,
        item_id: DbId,
    ) -> Result<Option<CartLink>, sqlx::Error> {
        let query = format!(
            "INSERT INTO cart_links (user_id, item_id, amount)
             VALUES (?1, ?2, 1)
             ON CONFLICT (user_id, item_id) DO UPDATE SET amount = amount + 1
             RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, CartLink>(&query)
            .bind(user_id)
            .bind(item_id)
            .fetch_one(pool)
            .await;

        match result {
            Ok(link) => Ok(Some(link)),
            // An unknown item trips the foreign key on item_id.
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => Ok(None),
            Err(other) => Err(other),
        }
    }

    /// Increment the amount on a cart line owned by `user_id`.
    ///
    /// Returns `None` when the line does not exist or belongs to another user.
    pub async fn increase(
        pool: &SqlitePool,
        user_id: DbId,
        link_id: DbId,
    ) -> Result<Option<CartLink>, sqlx::Error> {
        let query = format!(
            "UPDATE cart_links SET amount = amount + 1
             WHERE id = ?1 AND user_id = ?2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CartLink>(&query)
            .bind(link_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Decrement the amount on a cart line owned by `user_id`, deleting the
    /// row entirely when the amount would reach zero.
    ///
    /// Both statements guard on the current amount, so an interleaved
    /// mutation can never drop a line that still has units left.
    /// Returns `None` when the line does not exist or belongs to another user.
    pub async fn decrease(
        pool: &SqlitePool,
        user_id: DbId,
        link_id: DbId,
    ) -> Result<Option<DecreaseOutcome>, sqlx::Error> {
        let update = format!(
            "UPDATE cart_links SET amount = amount - 1
             WHERE id = ?1 AND user_id = ?2 AND amount > 1
             RETURNING {COLUMNS}"
        );
        if let Some(link) = sqlx::query_as::<_, CartLink>(&update)
            .bind(link_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?
        {
            return Ok(Some(DecreaseOutcome::Updated(link)));
        }

        let removed: Option<DbId> = sqlx::query_scalar(
            "DELETE FROM cart_links
             WHERE id = ?1 AND user_id = ?2 AND amount = 1
             RETURNING id",
        )
        .bind(link_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(removed.map(|_| DecreaseOutcome::Removed))
    }

    /// List the user's cart lines joined to their items, ordered by line id.
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<CartEntry>, sqlx::Error> {
        sqlx::query_as::<_, CartEntry>(
            "SELECT l.id AS link_id, i.id AS item_id, i.title, i.description,
                    i.price, i.img_url, l.amount
             FROM cart_links l
             JOIN items i ON i.id = l.item_id
             WHERE l.user_id = ?1
             ORDER BY l.id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
