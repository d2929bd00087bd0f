use super::super::*;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_router};

pub(super) fn build_tool_router() -> ToolRouter<FileOpsService> {
    FileOpsService::tool_router()
}

#[tool_router]
impl FileOpsService {
    /// Read a text file inside the allowed roots.
    #[tool(
        description = "Read a text file and return its content with metadata (canonical path, name, size in bytes, encoding, line count). Undecodable bytes are replaced rather than failing."
    )]
    pub async fn read_file(
        &self,
        Parameters(request): Parameters<ReadFileRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::read_file::read_file(self, request).await
    }

    /// Create or overwrite a text file inside the allowed roots.
    #[tool(
        description = "Write text to a file, replacing any existing content. Set create_dirs=true to create missing parent directories. Returns the number of encoded bytes written."
    )]
    pub async fn write_file(
        &self,
        Parameters(request): Parameters<WriteFileRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::write_file::write_file(self, request).await
    }

    /// Recursive name/content search inside the allowed roots.
    #[tool(
        description = "Search a directory tree for files whose name matches a glob, optionally keeping only files containing a case-insensitive text (up to 5 matching lines per file). Hidden, VCS and dependency/build directories are skipped."
    )]
    pub async fn search_files(
        &self,
        Parameters(request): Parameters<SearchFilesRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::search_files::search_files(self, request).await
    }
}
