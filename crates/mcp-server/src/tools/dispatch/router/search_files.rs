use super::super::{CallToolResult, FileOpsService, McpError, SearchFilesRequest};
use super::result::tool_result;
use fileops_core::SearchQuery;
use fileops_protocol::{clamp_max_results, DEFAULT_SEARCH_PATTERN};

/// Directory searched when the caller omits one (the server working directory).
const DEFAULT_SEARCH_DIRECTORY: &str = ".";

pub(in crate::tools::dispatch) async fn search_files(
    service: &FileOpsService,
    request: SearchFilesRequest,
) -> Result<CallToolResult, McpError> {
    let SearchFilesRequest {
        directory,
        pattern,
        content_pattern,
        max_results,
    } = request;
    let directory = directory.unwrap_or_else(|| DEFAULT_SEARCH_DIRECTORY.to_string());
    let pattern = pattern.unwrap_or_else(|| DEFAULT_SEARCH_PATTERN.to_string());
    let max_results = clamp_max_results(max_results);
    log::debug!(
        "search_files directory={directory} pattern={pattern} content_pattern={content_pattern:?} max_results={max_results}"
    );

    let outcome = service
        .run_blocking(move |ops| {
            let query = SearchQuery::new(&directory)
                .pattern(&pattern)
                .content_pattern(content_pattern.as_deref())
                .max_results(max_results);
            ops.search_files(&query)
        })
        .await?;
    tool_result(outcome)
}
