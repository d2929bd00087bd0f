use super::super::{CallToolResult, FileOpsService, McpError, ReadFileRequest};
use super::result::tool_result;
use fileops_protocol::DEFAULT_ENCODING;

pub(in crate::tools::dispatch) async fn read_file(
    service: &FileOpsService,
    request: ReadFileRequest,
) -> Result<CallToolResult, McpError> {
    let ReadFileRequest { path, encoding } = request;
    let encoding = encoding.unwrap_or_else(|| DEFAULT_ENCODING.to_string());
    log::debug!("read_file path={path} encoding={encoding}");

    let outcome = service
        .run_blocking(move |ops| ops.read_file(&path, &encoding))
        .await?;
    tool_result(outcome)
}
