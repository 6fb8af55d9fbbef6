//! Transport commands
//!
//! Usage:
//!   uicfg serve    one JSON request per stdin line, one response per stdout line
//!   uicfg health

use uicfg_core::ConfigStore;
use uicfg_engine::commands::healthcheck;
use uicfg_engine::rpc;

use super::print_json;

/// Execute serve until stdin closes
pub fn execute_serve(store: &mut dyn ConfigStore) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("serving JSON requests on stdio");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    rpc::serve(store, stdin.lock(), stdout.lock())?;
    tracing::info!("stdin closed, stopping");
    Ok(())
}

/// Execute health
pub fn execute_health() -> Result<(), Box<dyn std::error::Error>> {
    print_json(&healthcheck())
}
