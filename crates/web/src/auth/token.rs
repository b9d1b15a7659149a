//! Opaque session tokens.
//!
//! Session tokens are random strings; only their SHA-256 hash is stored
//! server-side so a database leak does not compromise active sessions.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a cryptographically random session token.
///
/// Returns a tuple of `(plaintext_token, sha256_hex_hash)`. The plaintext is
/// sent to the client in the session cookie; only the hash is persisted.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
///
/// Use this to compare an incoming cookie token against the stored hash.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_hash_matches() {
        let (plaintext, hash) = generate_session_token();

        // Re-hashing the same plaintext must produce the same digest.
        let rehashed = hash_session_token(&plaintext);
        assert_eq!(hash, rehashed, "hash of the same token must be stable");

        // Sanity: the hash should be a 64-char hex string (SHA-256).
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn test_tokens_are_unique() {
        let (a, _) = generate_session_token();
        let (b, _) = generate_session_token();
        assert_ne!(a, b);
    }
}
