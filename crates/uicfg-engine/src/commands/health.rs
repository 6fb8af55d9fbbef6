use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Liveness answer for the `healthcheck` procedure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Always `ok`; does not touch the store
pub fn healthcheck() -> HealthStatus {
    HealthStatus {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    }
}
