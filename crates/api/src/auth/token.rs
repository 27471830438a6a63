//! Opaque bearer-token generation.
//!
//! Tokens carry no claims and have no expiry; they are invalidated only by
//! password rotation. The value is the SHA-256 hex digest of a fresh UUIDv4,
//! giving a 64-character string with no structure to parse.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a candidate bearer token.
pub fn generate_token() -> String {
    let mut hasher = Sha256::new();
    hasher.update(Uuid::new_v4().as_bytes());
    format!("{:x}", hasher.finalize())
}
