//! Wire shapes for the file-ops tools.
//!
//! Every tool call produces exactly one of two JSON documents: the success payload for that
//! operation, or an [`ErrorBody`]. Handlers never mix the two.

use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENCODING: &str = "utf-8";
pub const DEFAULT_SEARCH_PATTERN: &str = "*";
pub const DEFAULT_MAX_RESULTS: usize = 100;
pub const MIN_MAX_RESULTS: usize = 1;
pub const MAX_MAX_RESULTS: usize = 1_000;
pub const DEFAULT_MAX_MATCHES_PER_FILE: usize = 5;
pub const DEFAULT_MATCH_TEXT_CHARS: usize = 100;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ReadResult {
    /// Canonical absolute path of the file that was read.
    pub path: String,
    pub name: String,
    /// Size on disk in bytes (not the decoded length).
    pub size: u64,
    pub encoding: String,
    pub content: String,
    pub line_count: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct WriteResult {
    pub success: bool,
    pub path: String,
    /// Length of the content after encoding with the requested encoding.
    pub bytes_written: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct SearchMatch {
    /// 1-based line number.
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct SearchEntry {
    /// Path relative to the searched directory, `/`-separated.
    pub path: String,
    pub name: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<SearchMatch>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct SearchResult {
    pub directory: String,
    pub pattern: String,
    pub content_pattern: Option<String>,
    pub count: usize,
    pub results: Vec<SearchEntry>,
}

impl SearchResult {
    pub fn new(
        directory: String,
        pattern: String,
        content_pattern: Option<String>,
        results: Vec<SearchEntry>,
    ) -> Self {
        Self {
            directory,
            pattern,
            content_pattern,
            count: results.len(),
            results,
        }
    }
}

pub fn clamp_max_results(requested: Option<usize>) -> usize {
    requested
        .unwrap_or(DEFAULT_MAX_RESULTS)
        .clamp(MIN_MAX_RESULTS, MAX_MAX_RESULTS)
}

pub fn serialize_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn search_entry_omits_matches_when_absent() {
        let entry = SearchEntry {
            path: "docs/a.txt".to_string(),
            name: "a.txt".to_string(),
            size: 3,
            matches: None,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({"path": "docs/a.txt", "name": "a.txt", "size": 3})
        );
    }

    #[test]
    fn search_result_counts_results_and_keeps_null_content_pattern() {
        let result = SearchResult::new(
            "/sandbox".to_string(),
            "*".to_string(),
            None,
            vec![SearchEntry {
                path: "a.txt".to_string(),
                name: "a.txt".to_string(),
                size: 1,
                matches: Some(vec![SearchMatch {
                    line: 1,
                    text: "a".to_string(),
                }]),
            }],
        );
        assert_eq!(result.count, 1);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["content_pattern"], serde_json::Value::Null);
        assert_eq!(value["results"][0]["matches"][0]["line"], 1);
    }

    #[test]
    fn error_body_is_a_single_field() {
        let raw = serialize_json_pretty(&ErrorBody::new("nope")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, json!({"error": "nope"}));
    }

    #[test]
    fn max_results_is_clamped() {
        assert_eq!(clamp_max_results(None), DEFAULT_MAX_RESULTS);
        assert_eq!(clamp_max_results(Some(0)), 1);
        assert_eq!(clamp_max_results(Some(50)), 50);
        assert_eq!(clamp_max_results(Some(5_000)), MAX_MAX_RESULTS);
    }
}
