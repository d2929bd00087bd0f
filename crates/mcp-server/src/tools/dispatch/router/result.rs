use super::super::{CallToolResult, Content, McpError};
use fileops_core::FileOpsError;
use fileops_protocol::{serialize_json_pretty, ErrorBody};
use serde::Serialize;

/// Success payload or `{"error": ...}` body flagged as a tool error.
///
/// Only a payload that cannot be serialized becomes a protocol-level internal error.
pub(in crate::tools::dispatch) fn tool_result<T: Serialize>(
    outcome: fileops_core::Result<T>,
) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(value) => Ok(CallToolResult::success(vec![Content::text(render(&value)?)])),
        Err(err) => tool_error(&err),
    }
}

pub(in crate::tools::dispatch) fn tool_error(
    err: &FileOpsError,
) -> Result<CallToolResult, McpError> {
    log::debug!("tool error ({}): {err}", err.code());
    let body = render(&ErrorBody::new(err.to_string()))?;
    Ok(CallToolResult::error(vec![Content::text(body)]))
}

fn render<T: Serialize>(value: &T) -> Result<String, McpError> {
    serialize_json_pretty(value).map_err(|err| {
        log::warn!("Failed to serialize tool output: {err:#}");
        McpError::internal_error(format!("failed to serialize tool output: {err}"), None)
    })
}
