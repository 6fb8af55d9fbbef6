//! Repository layer for persisting attribute rows to SQLite

pub mod sqlite_repo;

pub use sqlite_repo::{SqliteConfigStore, SqliteRepo};
