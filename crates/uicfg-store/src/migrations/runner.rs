//! Migration runner
//!
//! Applies migrations in order, each in its own transaction, skipping ids
//! already recorded in `schema_version`.

use crate::errors::{from_rusqlite, migration_error, Result};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::get_migrations;
use rusqlite::{Connection, OptionalExtension};

/// A row of the `schema_version` bookkeeping table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMigration {
    pub migration_id: String,
    pub applied_at: i64,
    pub checksum: Option<String>,
}

/// Apply all pending migrations to the database
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    create_schema_version_table(conn)?;

    for migration in get_migrations() {
        apply_migration(conn, migration.id, migration.sql)?;
    }

    Ok(())
}

/// List applied migrations in application order
pub fn applied_migrations(conn: &Connection) -> Result<Vec<AppliedMigration>> {
    let mut stmt = conn
        .prepare("SELECT migration_id, applied_at, checksum FROM schema_version ORDER BY id")
        .map_err(from_rusqlite)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(AppliedMigration {
                migration_id: row.get(0)?,
                applied_at: row.get(1)?,
                checksum: row.get(2)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(rows)
}

/// Create the schema_version table if it doesn't exist
fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        )",
        [],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// Apply a single migration if not already applied
fn apply_migration(conn: &mut Connection, migration_id: &str, sql: &str) -> Result<()> {
    let already_applied = conn
        .query_row(
            "SELECT 1 FROM schema_version WHERE migration_id = ?",
            [migration_id],
            |_| Ok(()),
        )
        .optional()
        .map_err(from_rusqlite)?
        .is_some();

    if already_applied {
        return Ok(());
    }

    let checksum = compute_checksum(sql);
    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(sql)
        .map_err(|e| migration_error(migration_id, &e.to_string()))?;

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?, ?, ?)",
        rusqlite::params![migration_id, now, checksum],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(migration_id, checksum = checksum.as_str(), "migration applied");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_migrations() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert!(apply_migrations(&mut conn).is_ok());
    }

    #[test]
    fn test_idempotency() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        assert!(apply_migrations(&mut conn).is_ok());
        assert_eq!(applied_migrations(&conn).unwrap().len(), 1);
    }
}
