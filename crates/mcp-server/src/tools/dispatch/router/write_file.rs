use super::super::{CallToolResult, FileOpsService, McpError, WriteFileRequest};
use super::result::tool_result;
use fileops_protocol::DEFAULT_ENCODING;

pub(in crate::tools::dispatch) async fn write_file(
    service: &FileOpsService,
    request: WriteFileRequest,
) -> Result<CallToolResult, McpError> {
    let WriteFileRequest {
        path,
        content,
        encoding,
        create_dirs,
    } = request;
    let encoding = encoding.unwrap_or_else(|| DEFAULT_ENCODING.to_string());
    let create_dirs = create_dirs.unwrap_or(false);
    log::debug!(
        "write_file path={path} encoding={encoding} create_dirs={create_dirs} chars={}",
        content.chars().count()
    );

    let outcome = service
        .run_blocking(move |ops| ops.write_file(&path, &content, &encoding, create_dirs))
        .await?;
    tool_result(outcome)
}
