//! Command layer tests: every procedure through apply_ui_command.

use uicfg_core::{AttributeRowPatch, ButtonConfig, ExErrorKind, MemoryStore, NewAttributeRow};
use uicfg_engine::{apply_ui_command, UiCommand, UiCommandResult};
use uicfg_store::SqliteConfigStore;

fn create(store: &mut dyn uicfg_core::ConfigStore, id: &str, p: &str, v: &str) -> i64 {
    match apply_ui_command(
        UiCommand::CreateUiConfig(NewAttributeRow::new("button", id, p, v)),
        store,
    )
    .unwrap()
    {
        UiCommandResult::Row(row) => row.id,
        other => panic!("expected row, got {:?}", other),
    }
}

#[test]
fn test_create_get_update_round_trip_in_memory() {
    let mut store = MemoryStore::new();
    let id = create(&mut store, "b", "color", "red");

    let updated = apply_ui_command(
        UiCommand::UpdateUiConfig {
            id,
            patch: AttributeRowPatch::new().style_value("blue"),
        },
        &mut store,
    )
    .unwrap();
    let UiCommandResult::Row(updated) = updated else {
        panic!("expected row");
    };
    assert_eq!(updated.style_value, "blue");

    let listed = apply_ui_command(
        UiCommand::GetUiConfig {
            component_type: "button".to_string(),
            component_id: "b".to_string(),
        },
        &mut store,
    )
    .unwrap();
    assert_eq!(listed, UiCommandResult::Rows(vec![updated]));
}

#[test]
fn test_button_config_over_sqlite() {
    let mut store = SqliteConfigStore::open_in_memory().unwrap();
    create(&mut store, "B", "color", "blue");
    create(&mut store, "B", "text", "custom text");
    create(&mut store, "B", "action", "submit");

    let result = apply_ui_command(
        UiCommand::GetButtonConfig {
            button_id: Some("B".to_string()),
        },
        &mut store,
    )
    .unwrap();

    assert_eq!(
        result,
        UiCommandResult::Button(ButtonConfig {
            color: "blue".to_string(),
            text: "custom text".to_string(),
            action: Some("submit".to_string()),
        })
    );
}

#[test]
fn test_update_unknown_id_surfaces_not_found() {
    let mut store = MemoryStore::new();
    let err = apply_ui_command(
        UiCommand::UpdateUiConfig {
            id: 1,
            patch: AttributeRowPatch::new().style_value("x"),
        },
        &mut store,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_healthcheck_does_not_need_store() {
    let mut store = MemoryStore::new();
    store.set_unavailable(true);

    let result = apply_ui_command(UiCommand::Healthcheck, &mut store).unwrap();
    let UiCommandResult::Health(health) = result else {
        panic!("expected health");
    };
    assert_eq!(health.status, "ok");
}

#[test]
fn test_method_names_match_wire_names() {
    assert_eq!(UiCommand::Healthcheck.method(), "healthcheck");
    assert_eq!(
        UiCommand::GetButtonConfig { button_id: None }.method(),
        "getButtonConfig"
    );
}
