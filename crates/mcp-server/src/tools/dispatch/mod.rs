//! MCP tool dispatch for File Ops
//!
//! Every tool runs its filesystem handler on the blocking pool and turns the outcome into a
//! single JSON text item.

use super::schemas::read_file::ReadFileRequest;
use super::schemas::search_files::SearchFilesRequest;
use super::schemas::write_file::WriteFileRequest;
use fileops_core::FileOps;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;

mod router;
mod service;

#[cfg(test)]
mod tests;

/// File Ops MCP Service
#[derive(Clone)]
pub struct FileOpsService {
    /// Sandboxed handlers (shares the immutable config)
    ops: FileOps,
    /// Tool router
    tool_router: ToolRouter<Self>,
}
