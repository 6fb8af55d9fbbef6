//! uicfg Core - attribute model, resolution and store contract
//!
//! This crate provides the foundational data structures and operations for
//! the UI configuration store, including:
//! - `AttributeRow` and its create/patch inputs
//! - The button attribute resolver (rows → typed `ButtonConfig`)
//! - The `ConfigStore` contract plus an in-memory implementation
//! - Config operations with structured start/end logging
//! - The structured error and logging facilities shared by every crate

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod resolver;

// Re-exported so the logging macros resolve field names from any crate
pub use uicfg_core_types::schema;

pub use errors::{ExError, ExErrorKind, ExResult, UiConfigError};
pub use model::{AttributeRow, AttributeRowPatch, ButtonConfig, NewAttributeRow};
pub use ops::{ConfigStore, MemoryStore};
pub use resolver::resolve_button_config;
