//! Attribute row commands
//!
//! Usage:
//!   uicfg create --type <T> --id <ID> --property <P> --value <V>
//!   uicfg get --type <T> --id <ID>
//!   uicfg update <ROW_ID> [--type <T>] [--id <ID>] [--property <P>] [--value <V>]

use clap::Args;
use uicfg_core::{AttributeRowPatch, ConfigStore, NewAttributeRow};
use uicfg_engine::{apply_ui_command, UiCommand};

use super::print_json;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Component type, e.g. "button"
    #[arg(long = "type")]
    pub component_type: String,

    /// Component instance id, e.g. "main-button"
    #[arg(long = "id")]
    pub component_id: String,

    /// Style property name
    #[arg(long = "property")]
    pub style_property: String,

    /// Raw style value ("null" clears a button action)
    #[arg(long = "value")]
    pub style_value: String,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    #[arg(long = "type")]
    pub component_type: String,

    #[arg(long = "id")]
    pub component_id: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Row id returned by `create`
    pub row_id: i64,

    #[arg(long = "type")]
    pub component_type: Option<String>,

    #[arg(long = "id")]
    pub component_id: Option<String>,

    #[arg(long = "property")]
    pub style_property: Option<String>,

    #[arg(long = "value")]
    pub style_value: Option<String>,
}

/// Execute create
pub fn execute_create(
    args: CreateArgs,
    store: &mut dyn ConfigStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = UiCommand::CreateUiConfig(NewAttributeRow::new(
        args.component_type,
        args.component_id,
        args.style_property,
        args.style_value,
    ));
    print_json(&apply_ui_command(cmd, store)?)
}

/// Execute get
pub fn execute_get(
    args: GetArgs,
    store: &mut dyn ConfigStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = UiCommand::GetUiConfig {
        component_type: args.component_type,
        component_id: args.component_id,
    };
    print_json(&apply_ui_command(cmd, store)?)
}

/// Execute update
pub fn execute_update(
    args: UpdateArgs,
    store: &mut dyn ConfigStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let patch = AttributeRowPatch {
        component_type: args.component_type,
        component_id: args.component_id,
        style_property: args.style_property,
        style_value: args.style_value,
    };
    let cmd = UiCommand::UpdateUiConfig {
        id: args.row_id,
        patch,
    };
    print_json(&apply_ui_command(cmd, store)?)
}
