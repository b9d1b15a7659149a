//! User session model and DTOs.

use basket_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `sessions` table.
///
/// The plaintext session token lives only in the user's cookie; the database
/// stores its SHA-256 hex digest.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a new session at login.
pub struct CreateSession {
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
}
