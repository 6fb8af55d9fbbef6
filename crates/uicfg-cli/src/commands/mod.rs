pub mod button;
pub mod config;
pub mod serve;

use serde::Serialize;

/// Print a command result as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
