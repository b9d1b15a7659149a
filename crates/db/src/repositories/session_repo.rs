//! Repository for the `sessions` table.

use basket_core::types::DbId;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::session::{CreateSession, Session};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, token_hash, expires_at, created_at";

/// Provides CRUD operations for user sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (user_id, token_hash, expires_at)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.user_id)
            .bind(&input.token_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find an unexpired session by its token hash.
    pub async fn find_active_by_token_hash(
        pool: &SqlitePool,
        token_hash: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions
             WHERE token_hash = ?1 AND expires_at > ?2"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(token_hash)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete the session with the given token hash (logout).
    /// Returns `true` if a row was deleted.
    pub async fn delete_by_token_hash(
        pool: &SqlitePool,
        token_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE token_hash = ?1")
            .bind(token_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete all sessions for a user. Returns the count of deleted rows.
    pub async fn delete_all_for_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = ?1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete expired sessions. Returns the count of deleted rows.
    pub async fn delete_expired(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?1")
            .bind(Utc::now())
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
