use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchFilesRequest {
    /// Directory to search (default: server working directory)
    #[schemars(
        description = "Directory to search recursively (default: server working directory); must be inside an allowed root"
    )]
    pub directory: Option<String>,

    /// Shell glob matched against file names (default: "*")
    #[schemars(description = "File name glob: '*', '?', '[abc]', '[!abc]' (default: '*')")]
    pub pattern: Option<String>,

    /// Case-insensitive substring that must appear on at least one line
    #[schemars(
        description = "Optional case-insensitive text filter; matching lines are reported per file"
    )]
    pub content_pattern: Option<String>,

    /// Maximum number of files to return (default: 100, bounded to 1..=1000)
    #[schemars(description = "Maximum number of files to return (default: 100, range 1-1000)")]
    pub max_results: Option<usize>,
}
