//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

use crate::errors::{from_rusqlite, io_error, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path, creating parent directories
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
    }
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection
///
/// Requests WAL journaling. In-memory databases answer `memory` and keep
/// their journal mode.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON")
        .map_err(from_rusqlite)?;

    // journal_mode reports the resulting mode as a row
    let mode: String = conn
        .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
        .map_err(from_rusqlite)?;
    tracing::debug!(journal_mode = mode.as_str(), "connection configured");

    Ok(())
}
