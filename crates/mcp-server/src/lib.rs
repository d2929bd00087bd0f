//! File Ops MCP Server
//!
//! Gives AI agents sandboxed access to the local filesystem via the MCP protocol.
//!
//! ## Tools
//!
//! - `read_file` - Read a text file with a chosen encoding
//! - `write_file` - Create or overwrite a text file, optionally creating parent directories
//! - `search_files` - Recursive file-name glob search with an optional content filter
//!
//! Every path is checked against the allowed roots from `FILE_OPS_ROOT` (platform path-list
//! separator; defaults to the working directory).
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "file-ops": {
//!       "command": "file-ops-mcp",
//!       "env": { "FILE_OPS_ROOT": "/home/me/projects" }
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use fileops_core::Config;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod tools;

pub use tools::FileOpsService;

pub async fn main_entry() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::from_env();
    if config.roots().is_empty() {
        log::warn!("No usable allowed roots configured; every request will be denied");
    }
    for root in config.roots().roots() {
        log::info!("Allowed root: {}", root.display());
    }

    log::info!("Starting File Ops MCP server");

    let service = FileOpsService::new(config);
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("File Ops MCP server stopped");
    Ok(())
}
