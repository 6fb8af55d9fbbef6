use serde::{Deserialize, Serialize};

/// Component type the button view reads
pub const BUTTON_COMPONENT_TYPE: &str = "button";

/// Button id used when the caller names none
pub const DEFAULT_BUTTON_ID: &str = "default-button";

pub const DEFAULT_COLOR: &str = "red";
pub const DEFAULT_TEXT: &str = "click here";
pub const DEFAULT_ACTION: Option<&str> = None;

/// Stored `action` value meaning "explicitly no action"
pub const NULL_SENTINEL: &str = "null";

/// Resolved, fully populated button configuration
///
/// Never persisted; recomputed from attribute rows on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonConfig {
    pub color: String,
    pub text: String,
    pub action: Option<String>,
}

impl ButtonConfig {
    /// Apply one `(property, value)` pair; unknown properties are ignored
    pub fn apply(&mut self, property: &str, value: &str) {
        match property {
            "color" => self.color = value.to_string(),
            "text" => self.text = value.to_string(),
            "action" => {
                self.action = if value == NULL_SENTINEL {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            _ => {}
        }
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            text: DEFAULT_TEXT.to_string(),
            action: DEFAULT_ACTION.map(str::to_string),
        }
    }
}
