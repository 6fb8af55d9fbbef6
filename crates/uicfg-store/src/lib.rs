//! uicfg Store - SQLite persistence for attribute rows
//!
//! Provides:
//! - Connection opening and configuration
//! - Embedded SQL migrations with checksums
//! - `SqliteConfigStore`, the `ConfigStore` implementation over one table

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::{SqliteConfigStore, SqliteRepo};
