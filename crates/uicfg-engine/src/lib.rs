//! uicfg Engine - transport-facing orchestration
//!
//! Maps the exposed procedures onto config operations:
//! - `commands`: typed `UiCommand` inventory and `apply_ui_command`
//! - `rpc`: JSON request/response dispatcher and a line-delimited serve loop

pub mod commands;
pub mod rpc;

pub use commands::{apply_ui_command, HealthStatus, UiCommand, UiCommandResult};
pub use rpc::{handle_request, serve, RpcRequest, RpcResponse};
