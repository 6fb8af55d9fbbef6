//! Typed command inventory for the exposed procedures.

use serde::Serialize;
use uicfg_core::ops::{create_ui_config, get_button_config, get_ui_config, update_ui_config};
use uicfg_core::{
    AttributeRow, AttributeRowPatch, ButtonConfig, ConfigStore, ExResult, NewAttributeRow,
};

use super::health::{healthcheck, HealthStatus};

pub const METHOD_CREATE_UI_CONFIG: &str = "createUIConfig";
pub const METHOD_GET_UI_CONFIG: &str = "getUIConfig";
pub const METHOD_UPDATE_UI_CONFIG: &str = "updateUIConfig";
pub const METHOD_GET_BUTTON_CONFIG: &str = "getButtonConfig";
pub const METHOD_HEALTHCHECK: &str = "healthcheck";

/// Commands accepted by the transport, one per procedure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Insert a new attribute row.
    CreateUiConfig(NewAttributeRow),
    /// List rows for one component instance.
    GetUiConfig {
        component_type: String,
        component_id: String,
    },
    /// Patch a row by id.
    UpdateUiConfig { id: i64, patch: AttributeRowPatch },
    /// Resolve a button; `None` means the default button.
    GetButtonConfig { button_id: Option<String> },
    /// Liveness probe.
    Healthcheck,
}

impl UiCommand {
    /// Wire name of the procedure this command serves.
    pub fn method(&self) -> &'static str {
        match self {
            UiCommand::CreateUiConfig(_) => METHOD_CREATE_UI_CONFIG,
            UiCommand::GetUiConfig { .. } => METHOD_GET_UI_CONFIG,
            UiCommand::UpdateUiConfig { .. } => METHOD_UPDATE_UI_CONFIG,
            UiCommand::GetButtonConfig { .. } => METHOD_GET_BUTTON_CONFIG,
            UiCommand::Healthcheck => METHOD_HEALTHCHECK,
        }
    }
}

/// Result of applying a command.
///
/// Serializes as the bare payload (row, row list, button config or health).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UiCommandResult {
    Row(AttributeRow),
    Rows(Vec<AttributeRow>),
    Button(ButtonConfig),
    Health(HealthStatus),
}

/// Apply a command against the given store.
pub fn apply_ui_command(cmd: UiCommand, store: &mut dyn ConfigStore) -> ExResult<UiCommandResult> {
    match cmd {
        UiCommand::CreateUiConfig(input) => create_ui_config(store, input).map(UiCommandResult::Row),
        UiCommand::GetUiConfig {
            component_type,
            component_id,
        } => get_ui_config(&*store, &component_type, &component_id).map(UiCommandResult::Rows),
        UiCommand::UpdateUiConfig { id, patch } => {
            update_ui_config(store, id, &patch).map(UiCommandResult::Row)
        }
        UiCommand::GetButtonConfig { button_id } => {
            get_button_config(&*store, button_id.as_deref()).map(UiCommandResult::Button)
        }
        UiCommand::Healthcheck => Ok(UiCommandResult::Health(healthcheck())),
    }
}
