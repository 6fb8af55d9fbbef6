//! JSON procedure-call dispatcher.
//!
//! Requests are `{"id"?, "method", "params"?}` objects; responses carry either
//! `result` or `error` plus the server-minted `request_id`. One request per
//! line in `serve`.

use std::io::{BufRead, Write};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uicfg_core::errors::UiConfigError;
use uicfg_core::{
    log_op_end, log_op_error, log_op_start, AttributeRowPatch, ConfigStore, ExError, ExErrorKind,
    ExResult, NewAttributeRow,
};
use uicfg_core_types::RequestId;

use crate::commands::ui_command::{
    METHOD_CREATE_UI_CONFIG, METHOD_GET_BUTTON_CONFIG, METHOD_GET_UI_CONFIG, METHOD_HEALTHCHECK,
    METHOD_UPDATE_UI_CONFIG,
};
use crate::commands::{apply_ui_command, UiCommand};

pub const OP_RPC_REQUEST: &str = "rpc_request";

/// Inbound procedure call
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcRequest {
    /// Caller correlation value, echoed back untouched
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// Error payload of a failed call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: String,
    pub message: String,
}

impl From<&ExError> for RpcError {
    fn from(err: &ExError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.message().to_string(),
        }
    }
}

/// Outbound response; exactly one of `result` / `error` is set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub request_id: RequestId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    fn ok(id: Option<Value>, request_id: RequestId, result: Value) -> Self {
        Self {
            id,
            request_id,
            result: Some(result),
            error: None,
        }
    }

    fn err(id: Option<Value>, request_id: RequestId, err: &ExError) -> Self {
        Self {
            id,
            request_id,
            result: None,
            error: Some(err.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GetUiConfigParams {
    #[serde(alias = "componentType")]
    component_type: String,
    #[serde(alias = "componentId")]
    component_id: String,
}

#[derive(Debug, Deserialize)]
struct UpdateUiConfigParams {
    id: i64,
    #[serde(flatten)]
    patch: AttributeRowPatch,
}

#[derive(Debug, Default, Deserialize)]
struct GetButtonConfigParams {
    #[serde(default)]
    button_id: Option<String>,
}

fn invalid_input(reason: impl Into<String>) -> ExError {
    UiConfigError::InvalidInput {
        reason: reason.into(),
    }
    .into()
}

fn decode<T: serde::de::DeserializeOwned>(method: &str, params: Value) -> ExResult<T> {
    // Absent params behave like an empty object
    let params = if params.is_null() {
        Value::Object(Default::default())
    } else {
        params
    };
    serde_json::from_value(params)
        .map_err(|e| invalid_input(format!("bad params for {}: {}", method, e)))
}

/// Map a method name and its params onto a command
///
/// # Errors
/// `InvalidInput` for an unknown method or params that do not decode.
pub fn parse_command(method: &str, params: Value) -> ExResult<UiCommand> {
    match method {
        METHOD_CREATE_UI_CONFIG => {
            let input: NewAttributeRow = decode(method, params)?;
            Ok(UiCommand::CreateUiConfig(input))
        }
        METHOD_GET_UI_CONFIG => {
            let p: GetUiConfigParams = decode(method, params)?;
            Ok(UiCommand::GetUiConfig {
                component_type: p.component_type,
                component_id: p.component_id,
            })
        }
        METHOD_UPDATE_UI_CONFIG => {
            let p: UpdateUiConfigParams = decode(method, params)?;
            Ok(UiCommand::UpdateUiConfig {
                id: p.id,
                patch: p.patch,
            })
        }
        METHOD_GET_BUTTON_CONFIG => {
            let p: GetButtonConfigParams = decode(method, params)?;
            Ok(UiCommand::GetButtonConfig {
                button_id: p.button_id,
            })
        }
        METHOD_HEALTHCHECK => Ok(UiCommand::Healthcheck),
        other => Err(invalid_input(format!("unknown method '{}'", other))),
    }
}

fn execute(store: &mut dyn ConfigStore, request: RpcRequest) -> ExResult<Value> {
    let cmd = parse_command(&request.method, request.params)?;
    let result = apply_ui_command(cmd, store)?;
    serde_json::to_value(result).map_err(|e| UiConfigError::from(e).into())
}

/// Serve one decoded request
pub fn dispatch(store: &mut dyn ConfigStore, request: RpcRequest) -> RpcResponse {
    let request_id = RequestId::new();
    let start = Instant::now();
    let id = request.id.clone();
    let method = request.method.clone();

    log_op_start!(
        OP_RPC_REQUEST,
        method = method.as_str(),
        request_id = request_id.as_str(),
    );

    match execute(store, request) {
        Ok(result) => {
            log_op_end!(
                OP_RPC_REQUEST,
                duration_ms = start.elapsed().as_millis() as u64,
                method = method.as_str(),
                request_id = request_id.as_str(),
            );
            RpcResponse::ok(id, request_id, result)
        }
        Err(err) => {
            let err = err.with_request_id(request_id.clone());
            log_op_error!(
                OP_RPC_REQUEST,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                method = method.as_str(),
                request_id = request_id.as_str(),
            );
            RpcResponse::err(id, request_id, &err)
        }
    }
}

/// Serve one raw JSON request and return the JSON response
///
/// Never fails: undecodable input yields an `ERR_INVALID_INPUT` response.
pub fn handle_request(store: &mut dyn ConfigStore, raw: &str) -> String {
    let response = match serde_json::from_str::<RpcRequest>(raw) {
        Ok(request) => dispatch(store, request),
        Err(e) => {
            let request_id = RequestId::new();
            let err = invalid_input(format!("malformed request: {}", e))
                .with_request_id(request_id.clone());
            tracing::warn!(
                op = OP_RPC_REQUEST,
                request_id = request_id.as_str(),
                err_code = err.code(),
                "rejected malformed request"
            );
            RpcResponse::err(None, request_id, &err)
        }
    };

    serde_json::to_string(&response).unwrap_or_else(|e| serialization_failure(&e.to_string()))
}

/// Minimal error body used when a response cannot be encoded
fn serialization_failure(message: &str) -> String {
    serde_json::json!({
        "error": {"code": ExErrorKind::Serialization.code(), "message": message}
    })
    .to_string()
}

/// Line-delimited request loop
///
/// Reads one JSON request per line until EOF and writes one response line
/// per request. Blank lines are skipped.
pub fn serve<R: BufRead, W: Write>(
    store: &mut dyn ConfigStore,
    reader: R,
    mut writer: W,
) -> std::io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_request(store, &line);
        writeln!(writer, "{}", response)?;
        writer.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_get_ui_config_accepts_camel_case() {
        let cmd = parse_command(
            METHOD_GET_UI_CONFIG,
            json!({"componentType": "button", "componentId": "b"}),
        )
        .unwrap();
        assert_eq!(
            cmd,
            UiCommand::GetUiConfig {
                component_type: "button".to_string(),
                component_id: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_button_without_params_uses_default() {
        let cmd = parse_command(METHOD_GET_BUTTON_CONFIG, Value::Null).unwrap();
        assert_eq!(cmd, UiCommand::GetButtonConfig { button_id: None });
    }

    #[test]
    fn test_parse_update_collects_patch_fields() {
        let cmd = parse_command(
            METHOD_UPDATE_UI_CONFIG,
            json!({"id": 3, "style_value": "x"}),
        )
        .unwrap();
        assert_eq!(
            cmd,
            UiCommand::UpdateUiConfig {
                id: 3,
                patch: AttributeRowPatch::new().style_value("x"),
            }
        );
    }

    #[test]
    fn test_parse_create_requires_all_fields() {
        let err = parse_command(
            METHOD_CREATE_UI_CONFIG,
            json!({"component_type": "button", "component_id": "b"}),
        )
        .unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_INPUT");
    }

    #[test]
    fn test_serialization_failure_body_escapes_message() {
        let message = "bad \\ path \"quoted\"\n\u{1}";
        let body: Value = serde_json::from_str(&serialization_failure(message)).unwrap();
        assert_eq!(body["error"]["code"], json!("ERR_SERIALIZATION"));
        assert_eq!(body["error"]["message"], json!(message));
    }

    #[test]
    fn test_every_command_method_parses_back() {
        let cases = [
            (
                UiCommand::CreateUiConfig(NewAttributeRow::new("button", "b", "color", "red")),
                json!({"component_type": "button", "component_id": "b", "style_property": "color", "style_value": "red"}),
            ),
            (
                UiCommand::GetUiConfig {
                    component_type: "button".to_string(),
                    component_id: "b".to_string(),
                },
                json!({"component_type": "button", "component_id": "b"}),
            ),
            (
                UiCommand::UpdateUiConfig {
                    id: 1,
                    patch: AttributeRowPatch::new(),
                },
                json!({"id": 1}),
            ),
            (UiCommand::GetButtonConfig { button_id: None }, Value::Null),
            (UiCommand::Healthcheck, Value::Null),
        ];

        for (cmd, params) in cases {
            assert_eq!(parse_command(cmd.method(), params).unwrap(), cmd);
        }
    }

    #[test]
    fn test_unknown_method_is_invalid_input() {
        let err = parse_command("deleteUIConfig", Value::Null).unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_INPUT");
        assert!(err.message().contains("deleteUIConfig"));
    }
}
