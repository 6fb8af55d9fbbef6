//! SQLite repository implementation
//!
//! `SqliteRepo` holds the SQL for the `ui_config` table as associated
//! functions over a borrowed connection. `SqliteConfigStore` owns a migrated
//! connection and exposes those functions through `ConfigStore`.

use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row};
use std::path::Path;
use uicfg_core::errors::UiConfigError;
use uicfg_core::model::now;
use uicfg_core::{AttributeRow, AttributeRowPatch, ConfigStore, ExResult, NewAttributeRow};

const SELECT_COLUMNS: &str = "SELECT id, component_type, component_id, style_property, style_value, created_at, updated_at FROM ui_config";

/// SQLite repository for attribute rows
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a row; SQLite assigns the id
    pub fn insert_row(conn: &Connection, row: NewAttributeRow) -> Result<AttributeRow> {
        let at = now();

        conn.execute(
            "INSERT INTO ui_config (component_type, component_id, style_property, style_value, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.component_type,
                row.component_id,
                row.style_property,
                row.style_value,
                at.timestamp_millis(),
                at.timestamp_millis(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(AttributeRow::from_new(conn.last_insert_rowid(), row, at))
    }

    /// Get a row by id
    pub fn get_row(conn: &Connection, id: i64) -> Result<Option<AttributeRow>> {
        let result = conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                [id],
                map_row,
            )
            .optional()
            .map_err(from_rusqlite)?;

        Ok(result)
    }

    /// Rows for one component instance, ascending id
    pub fn rows_for_component(
        conn: &Connection,
        component_type: &str,
        component_id: &str,
    ) -> Result<Vec<AttributeRow>> {
        let mut stmt = conn
            .prepare(&format!(
                "{} WHERE component_type = ?1 AND component_id = ?2 ORDER BY id ASC",
                SELECT_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([component_type, component_id], map_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    /// Apply a patch by id inside one transaction
    ///
    /// Absent patch fields keep their column value via COALESCE. When no row
    /// matches, the transaction is dropped (rolled back) and `NotFound` is
    /// returned.
    pub fn update_row(
        conn: &mut Connection,
        id: i64,
        patch: &AttributeRowPatch,
    ) -> Result<AttributeRow> {
        let tx = conn.transaction().map_err(from_rusqlite)?;

        let changed = tx
            .execute(
                "UPDATE ui_config SET
                    component_type = COALESCE(?1, component_type),
                    component_id = COALESCE(?2, component_id),
                    style_property = COALESCE(?3, style_property),
                    style_value = COALESCE(?4, style_value),
                    updated_at = ?5
                 WHERE id = ?6",
                rusqlite::params![
                    patch.component_type.as_deref(),
                    patch.component_id.as_deref(),
                    patch.style_property.as_deref(),
                    patch.style_value.as_deref(),
                    now().timestamp_millis(),
                    id,
                ],
            )
            .map_err(from_rusqlite)?;

        if changed == 0 {
            return Err(UiConfigError::RowNotFound { id }.into());
        }

        let row = Self::get_row(&tx, id)?.ok_or(UiConfigError::RowNotFound { id })?;
        tx.commit().map_err(from_rusqlite)?;

        Ok(row)
    }

    /// Total number of rows (diagnostics and tests)
    pub fn count_rows(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM ui_config", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }
}

/// Epoch-millis column to a timestamp; out-of-range values fail the row
fn millis_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let millis: i64 = row.get(idx)?;
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Integer,
            format!("timestamp {} ms is out of range", millis).into(),
        )
    })
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<AttributeRow> {
    Ok(AttributeRow {
        id: row.get(0)?,
        component_type: row.get(1)?,
        component_id: row.get(2)?,
        style_property: row.get(3)?,
        style_value: row.get(4)?,
        created_at: millis_column(row, 5)?,
        updated_at: millis_column(row, 6)?,
    })
}

/// `ConfigStore` backed by a single SQLite connection
///
/// The connection is opened, configured and migrated once at construction
/// and lives as long as the store.
pub struct SqliteConfigStore {
    conn: Connection,
}

impl SqliteConfigStore {
    /// Open (creating if needed) a database file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_connection(db::open(path)?)
    }

    /// Throwaway in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Configure and migrate an existing connection, then take ownership
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl ConfigStore for SqliteConfigStore {
    fn insert_row(&mut self, row: NewAttributeRow) -> ExResult<AttributeRow> {
        SqliteRepo::insert_row(&self.conn, row)
    }

    fn rows_for_component(
        &self,
        component_type: &str,
        component_id: &str,
    ) -> ExResult<Vec<AttributeRow>> {
        SqliteRepo::rows_for_component(&self.conn, component_type, component_id)
    }

    fn update_row(&mut self, id: i64, patch: &AttributeRowPatch) -> ExResult<AttributeRow> {
        SqliteRepo::update_row(&mut self.conn, id, patch)
    }
}
