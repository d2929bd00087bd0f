use super::{router, FileOpsService, McpError};
use fileops_core::{Config, FileOps};
use rmcp::model::{Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool_handler, ServerHandler};

impl FileOpsService {
    pub fn new(config: Config) -> Self {
        Self::from_ops(FileOps::new(config))
    }

    pub fn from_ops(ops: FileOps) -> Self {
        Self {
            ops,
            tool_router: router::build_tool_router(),
        }
    }

    /// Runs a synchronous handler on the blocking pool with a handle to the shared config.
    pub(super) async fn run_blocking<T, F>(&self, job: F) -> Result<T, McpError>
    where
        F: FnOnce(FileOps) -> T + Send + 'static,
        T: Send + 'static,
    {
        let ops = self.ops.clone();
        tokio::task::spawn_blocking(move || job(ops))
            .await
            .map_err(|err| McpError::internal_error(format!("tool task failed: {err}"), None))
    }
}

fn tool_instructions(config: &Config) -> String {
    let roots = config
        .roots()
        .roots()
        .iter()
        .map(|root| format!("- {}", root.display()))
        .collect::<Vec<_>>();
    let roots = if roots.is_empty() {
        "- (none: every request is denied)".to_string()
    } else {
        roots.join("\n")
    };

    format!(
        "Sandboxed filesystem access. Tools: read_file, write_file, search_files.\n\
         Every path must resolve inside one of the allowed roots:\n{roots}\n\
         Results are JSON; failures return {{\"error\": \"...\"}} with isError=true."
    )
}

#[tool_handler]
impl ServerHandler for FileOpsService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(tool_instructions(self.ops.config())),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
