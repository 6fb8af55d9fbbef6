//! Attribute resolution
//!
//! Folds loosely typed attribute rows over the default button configuration.
//! The fold is last-wins: a later row for the same property replaces the
//! value an earlier row set. Callers pass rows in store order (ascending id),
//! which makes the most recently inserted row win.

use crate::model::{AttributeRow, ButtonConfig};

/// Resolve a button configuration from its attribute rows
///
/// Properties other than `color`, `text` and `action` are ignored. An empty
/// input yields `ButtonConfig::default()`.
pub fn resolve_button_config<'a, I>(rows: I) -> ButtonConfig
where
    I: IntoIterator<Item = &'a AttributeRow>,
{
    resolve_properties(
        rows.into_iter()
            .map(|row| (row.style_property.as_str(), row.style_value.as_str())),
    )
}

/// Same fold over bare `(property, value)` pairs
pub fn resolve_properties<'a, I>(pairs: I) -> ButtonConfig
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .fold(ButtonConfig::default(), |mut config, (property, value)| {
            config.apply(property, value);
            config
        })
}
