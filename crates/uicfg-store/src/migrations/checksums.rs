//! Checksum computation for migrations
//!
//! Records a SHA256 of each migration's SQL alongside its id

use sha2::{Digest, Sha256};

/// Compute SHA256 checksum of a string
pub fn compute_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
