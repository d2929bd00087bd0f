
use super::FileOpsService;
use fileops_core::{AllowedRoots, Config};
use rmcp::model::CallToolResult;
use std::path::Path;

fn service_for(root: &Path) -> FileOpsService {
    FileOpsService::new(Config::new(AllowedRoots::new([root])))
}

fn result_json(result: &CallToolResult) -> serde_json::Value {
    let text = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .expect("tool result has a text item");
    serde_json::from_str(text).expect("tool result text is JSON")
}
