pub mod attribute_row;
pub mod button_config;

pub use attribute_row::{now, AttributeRow, AttributeRowPatch, NewAttributeRow};
pub use button_config::{
    ButtonConfig, BUTTON_COMPONENT_TYPE, DEFAULT_ACTION, DEFAULT_BUTTON_ID, DEFAULT_COLOR,
    DEFAULT_TEXT, NULL_SENTINEL,
};
