//! Button config command
//!
//! Usage: uicfg button [BUTTON_ID]

use clap::Args;
use uicfg_core::ConfigStore;
use uicfg_engine::{apply_ui_command, UiCommand};

use super::print_json;

#[derive(Debug, Args)]
pub struct ButtonArgs {
    /// Button id; defaults to "default-button"
    pub button_id: Option<String>,
}

/// Execute button
pub fn execute(
    args: ButtonArgs,
    store: &mut dyn ConfigStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = UiCommand::GetButtonConfig {
        button_id: args.button_id,
    };
    print_json(&apply_ui_command(cmd, store)?)
}
