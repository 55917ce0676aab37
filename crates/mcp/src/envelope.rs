// Construction of the single-block response envelope returned for every call

use crate::protocol::{CallToolResult, ToolContent};
use codeverify_client::BackendError;
use codeverify_core::ValidationError;
use serde_json::{json, Value};

/// Wrap a payload as pretty JSON; `isError` is omitted
pub fn success(payload: &Value) -> CallToolResult {
    CallToolResult {
        content: vec![ToolContent::text(render(payload))],
        is_error: None,
    }
}

/// `{success: false, error, details}` with `isError: true`
pub fn failure(message: impl Into<String>, details: Value) -> CallToolResult {
    let body = json!({
        "success": false,
        "error": message.into(),
        "details": details,
    });
    CallToolResult {
        content: vec![ToolContent::text(render(&body))],
        is_error: Some(true),
    }
}

pub fn unknown_tool(name: &str) -> CallToolResult {
    failure(format!("Unknown tool: {}", name), Value::Null)
}

pub fn from_validation_error(error: &ValidationError) -> CallToolResult {
    failure(error.to_string(), error.details())
}

pub fn from_backend_error(error: &BackendError) -> CallToolResult {
    failure(error.message(), error.details())
}

fn render(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
