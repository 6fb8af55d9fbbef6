//! Error handling for uicfg-store
//!
//! Wraps driver and filesystem failures into the canonical ExError

use uicfg_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
