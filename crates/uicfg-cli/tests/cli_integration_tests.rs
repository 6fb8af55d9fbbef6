//! CLI integration tests
//!
//! Drive the built `uicfg` binary against a scratch database.

use rusqlite::Connection;
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn uicfg(dir: &TempDir, db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_uicfg"))
        .current_dir(dir.path())
        .env_remove("UICFG_DB")
        .arg("--db")
        .arg(db)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

fn setup() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("store.db");
    (temp_dir, db_path)
}

#[test]
fn test_create_then_button_config() {
    let (dir, db) = setup();

    for (property, value) in [("color", "blue"), ("text", "custom text"), ("action", "submit")] {
        let created = stdout_json(&uicfg(
            &dir,
            &db,
            &[
                "create", "--type", "button", "--id", "B", "--property", property, "--value", value,
            ],
        ));
        assert_eq!(created["style_value"], Value::from(value));
    }

    let config = stdout_json(&uicfg(&dir, &db, &["button", "B"]));
    assert_eq!(
        config,
        serde_json::json!({"color": "blue", "text": "custom text", "action": "submit"})
    );

    let conn = Connection::open(&db).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM ui_config", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 3);
}

#[test]
fn test_button_without_rows_prints_default() {
    let (dir, db) = setup();
    let config = stdout_json(&uicfg(&dir, &db, &["button", "B2"]));
    assert_eq!(
        config,
        serde_json::json!({"color": "red", "text": "click here", "action": null})
    );
}

#[test]
fn test_update_then_get() {
    let (dir, db) = setup();
    let created = stdout_json(&uicfg(
        &dir,
        &db,
        &["create", "--type", "button", "--id", "B", "--property", "text", "--value", "a"],
    ));
    let row_id = created["id"].as_i64().unwrap().to_string();

    let updated = stdout_json(&uicfg(&dir, &db, &["update", &row_id, "--value", "b"]));
    assert_eq!(updated["style_value"], Value::from("b"));
    assert_eq!(updated["style_property"], Value::from("text"));
    assert_eq!(updated["created_at"], created["created_at"]);

    let rows = stdout_json(&uicfg(&dir, &db, &["get", "--type", "button", "--id", "B"]));
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["style_value"], Value::from("b"));
}

#[test]
fn test_update_unknown_id_fails() {
    let (dir, db) = setup();
    let output = uicfg(&dir, &db, &["update", "404", "--value", "x"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_NOT_FOUND"), "stderr: {}", stderr);
    assert!(stderr.contains("UI configuration with id 404 not found"));
}

#[test]
fn test_health_reports_ok() {
    let (dir, db) = setup();
    let health = stdout_json(&uicfg(&dir, &db, &["health"]));
    assert_eq!(health["status"], Value::from("ok"));
    assert!(!db.exists(), "health must not open the database");
}

#[test]
fn test_db_path_from_env() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("env.db");

    let output = Command::new(env!("CARGO_BIN_EXE_uicfg"))
        .current_dir(dir.path())
        .env("UICFG_DB", &db)
        .args(["create", "--type", "button", "--id", "E", "--property", "color", "--value", "teal"])
        .output()
        .unwrap();

    stdout_json(&output);
    assert!(db.exists());
}

#[test]
fn test_serve_over_stdio() {
    let (dir, db) = setup();
    let mut child = Command::new(env!("CARGO_BIN_EXE_uicfg"))
        .current_dir(dir.path())
        .env_remove("UICFG_DB")
        .arg("--db")
        .arg(&db)
        .arg("serve")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let stdin = child.stdin.as_mut().unwrap();
        writeln!(
            stdin,
            r#"{{"id":1,"method":"createUIConfig","params":{{"component_type":"button","component_id":"S","style_property":"action","style_value":"null"}}}}"#
        )
        .unwrap();
        writeln!(stdin, r#"{{"id":2,"method":"getButtonConfig","params":{{"button_id":"S"}}}}"#)
            .unwrap();
    }

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let responses: Vec<Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[1]["id"], Value::from(2));
    assert_eq!(responses[1]["result"]["action"], Value::Null);
}
