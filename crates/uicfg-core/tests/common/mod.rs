use uicfg_core::ops::create_ui_config;
use uicfg_core::{AttributeRow, ConfigStore, MemoryStore, NewAttributeRow};

/// Create a new empty store for testing
#[allow(dead_code)]
pub fn new_store() -> MemoryStore {
    MemoryStore::new()
}

/// Insert `(property, value)` rows for one component, in order
#[allow(dead_code)]
pub fn seed_component<S: ConfigStore>(
    store: &mut S,
    component_type: &str,
    component_id: &str,
    props: &[(&str, &str)],
) -> Vec<AttributeRow> {
    props
        .iter()
        .map(|(property, value)| {
            create_ui_config(
                store,
                NewAttributeRow::new(component_type, component_id, *property, *value),
            )
            .unwrap()
        })
        .collect()
}

/// Build an unsaved row for feeding the resolver directly
#[allow(dead_code)]
pub fn row(id: i64, property: &str, value: &str) -> AttributeRow {
    AttributeRow::from_new(
        id,
        NewAttributeRow::new("button", "test-button", property, value),
        uicfg_core::model::now(),
    )
}
