// Local time tool

use crate::envelope;
use crate::protocol::CallToolResult;
use codeverify_core::{TimeFormat, TimeSnapshot, ValidatedArguments};

pub fn current_time(args: &ValidatedArguments) -> CallToolResult {
    let format = args
        .get_str("format")
        .and_then(TimeFormat::parse)
        .unwrap_or_default();

    render(&TimeSnapshot::now(format))
}

fn render(snapshot: &TimeSnapshot) -> CallToolResult {
    match serde_json::to_value(snapshot) {
        Ok(value) => envelope::success(&value),
        Err(e) => envelope::failure(format!("Failed to render time: {}", e), serde_json::Value::Null),
    }
}
