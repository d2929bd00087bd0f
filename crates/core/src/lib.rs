//! # File Ops Core
//!
//! Sandboxed local-filesystem access: read, write and recursive search, all gated by one
//! allowed-roots policy.
//!
//! ## Flow
//!
//! ```text
//! caller path
//!     │
//!     ├──> AllowedRoots::resolve (canonicalize, containment check)
//!     │      └─> denied → AccessDenied
//!     │
//!     └──> handler (read_file / write_file / search_files)
//!            └─> Ok(payload) | Err(FileOpsError)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use fileops_core::{AllowedRoots, Config, FileOps, SearchQuery};
//!
//! let ops = FileOps::new(Config::new(AllowedRoots::new(["/sandbox"])));
//! ops.write_file("/sandbox/test.txt", "Hello, MCP!\nLine two.", "utf-8", false)?;
//! let read = ops.read_file("/sandbox/test.txt", "utf-8")?;
//! assert_eq!(read.line_count, 2);
//!
//! let found = ops.search_files(&SearchQuery::new("/sandbox").content_pattern(Some("mcp")))?;
//! assert_eq!(found.count, 1);
//! # Ok::<(), fileops_core::FileOpsError>(())
//! ```

mod config;
mod encoding;
mod error;
mod lines;
mod pattern;
mod read;
mod roots;
mod scanner;
mod search;
mod write;

#[cfg(test)]
mod test_support;

use std::path::PathBuf;
use std::sync::Arc;

pub use config::{
    Config, SearchLimits, GLOB_CASE_SENSITIVE_ENV, MATCH_TEXT_CHARS_ENV, MAX_MATCHES_PER_FILE_ENV,
    ROOT_ENV,
};
pub use error::{FileOpsError, Result};
pub use roots::{resolve_path, AllowedRoots};
pub use search::SearchQuery;

pub use fileops_protocol::{ReadResult, SearchEntry, SearchMatch, SearchResult, WriteResult};

/// Handler set bound to one immutable configuration.
///
/// Cloning is cheap; clones share the configuration.
#[derive(Debug, Clone)]
pub struct FileOps {
    config: Arc<Config>,
}

impl FileOps {
    pub fn new(config: Config) -> Self {
        Self::from_shared(Arc::new(config))
    }

    pub fn from_shared(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_allowed(&self, path: &str) -> bool {
        self.config.roots().is_allowed(path)
    }

    fn authorize(&self, path: &str) -> Result<PathBuf> {
        self.config.roots().resolve(path).ok_or_else(|| {
            log::warn!("Denied access outside allowed roots: {path}");
            FileOpsError::AccessDenied {
                path: path.to_string(),
            }
        })
    }
}
