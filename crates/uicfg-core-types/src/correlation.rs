//! Correlation types for request tracking
//!
//! A `RequestId` is minted by the transport for every inbound procedure call
//! and attached to log events and errors produced while serving it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new RequestId using UUIDv7 (time-ordered)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_generation() {
        let id1 = RequestId::new();
        let id2 = RequestId::new();

        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_request_id_display() {
        let id = RequestId::from_string("req-1".to_string());
        assert_eq!(format!("{}", id), "req-1");
    }

    #[test]
    fn test_serialization_is_transparent_string() {
        let id = RequestId::from_string("req-42".to_string());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"req-42\"");
        let back: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
