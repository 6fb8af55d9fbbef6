//! Command orchestration layer.
//!
//! One command per exposed procedure; each delegates to the matching
//! operation in `uicfg_core::ops`.

pub mod health;
pub mod ui_command;

pub use health::{healthcheck, HealthStatus};
pub use ui_command::{apply_ui_command, UiCommand, UiCommandResult};
