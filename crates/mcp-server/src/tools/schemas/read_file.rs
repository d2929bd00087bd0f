use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReadFileRequest {
    /// File to read (absolute, or relative to the server working directory)
    #[schemars(description = "Path of the file to read; must be inside an allowed root")]
    pub path: String,

    /// Text encoding label (default: utf-8)
    #[schemars(description = "Text encoding used to decode the file (default: utf-8)")]
    pub encoding: Option<String>,
}
