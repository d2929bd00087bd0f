use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WriteFileRequest {
    #[schemars(description = "Path of the file to create or overwrite; must be inside an allowed root")]
    pub path: String,

    #[schemars(description = "Full text content to write")]
    pub content: String,

    #[schemars(description = "Text encoding used to encode the content (default: utf-8)")]
    pub encoding: Option<String>,

    /// Create missing parent directories (default: false)
    #[schemars(description = "Create missing parent directories (default: false)")]
    pub create_dirs: Option<bool>,
}
