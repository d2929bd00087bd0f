use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use fileops_protocol::{
    SearchEntry, SearchMatch, SearchResult, DEFAULT_MAX_RESULTS, DEFAULT_SEARCH_PATTERN,
    MAX_MAX_RESULTS, MIN_MAX_RESULTS,
};

use crate::config::SearchLimits;
use crate::encoding::decode_utf8_lossy_dropping;
use crate::error::{FileOpsError, Result};
use crate::lines::{truncate_to_chars, UniversalLines};
use crate::pattern::NamePattern;
use crate::scanner::DirScanner;
use crate::FileOps;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchQuery<'a> {
    pub directory: &'a str,
    /// Shell glob applied to file names.
    pub pattern: &'a str,
    /// Case-insensitive substring filter; empty behaves like `None`.
    pub content_pattern: Option<&'a str>,
    /// Clamped to `1..=1000` when the search runs.
    pub max_results: usize,
}

impl<'a> SearchQuery<'a> {
    pub fn new(directory: &'a str) -> Self {
        Self {
            directory,
            pattern: DEFAULT_SEARCH_PATTERN,
            content_pattern: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    #[must_use]
    pub fn pattern(mut self, pattern: &'a str) -> Self {
        self.pattern = pattern;
        self
    }

    #[must_use]
    pub fn content_pattern(mut self, content_pattern: Option<&'a str>) -> Self {
        self.content_pattern = content_pattern;
        self
    }

    #[must_use]
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

impl FileOps {
    /// Recursive file search under `query.directory`.
    ///
    /// Walk order is depth-first with siblings sorted by name, so truncation at `max_results`
    /// always keeps the same files. Unreadable files are skipped; only failures on the search
    /// root itself abort the search.
    ///
    /// Hidden names (leading `.`) and dependency/build directories are pruned only below the
    /// search root: `~/.config/app` can be searched, but its own `.cache` is skipped.
    pub fn search_files(&self, query: &SearchQuery<'_>) -> Result<SearchResult> {
        let directory = query.directory;
        let root = self.authorize(directory)?;

        let meta = fs::metadata(&root).map_err(|err| FileOpsError::from_io(directory, err))?;
        if !meta.is_dir() {
            return Err(FileOpsError::NotADirectory {
                path: directory.to_string(),
            });
        }
        fs::read_dir(&root).map_err(|err| FileOpsError::from_io(directory, err))?;

        let limits = self.config.limits();
        let name_pattern = NamePattern::new(query.pattern, limits.glob_case_sensitive)?;
        let needle = query
            .content_pattern
            .filter(|p| !p.is_empty())
            .map(str::to_lowercase);
        let max_results = query.max_results.clamp(MIN_MAX_RESULTS, MAX_MAX_RESULTS);

        let scanner = DirScanner::new(&root, self.config.roots());
        let mut results: Vec<SearchEntry> = Vec::new();
        for file in scanner.files() {
            if !name_pattern.matches(&file.name) {
                continue;
            }

            let matches = match needle.as_deref() {
                Some(needle) => match scan_content(&file.path, needle, limits) {
                    Some(found) if !found.is_empty() => Some(found),
                    _ => continue,
                },
                None => None,
            };

            results.push(SearchEntry {
                path: file.relative,
                name: file.name,
                size: file.size,
                matches,
            });
            if results.len() >= max_results {
                log::debug!("search stopped at max_results={max_results}");
                break;
            }
        }

        log::debug!(
            "search {} pattern={} content_pattern={:?}: {} results",
            root.display(),
            query.pattern,
            query.content_pattern,
            results.len()
        );

        Ok(SearchResult::new(
            root.display().to_string(),
            query.pattern.to_string(),
            query.content_pattern.map(str::to_string),
            results,
        ))
    }
}

/// Collects matching lines, at most one per line and `max_matches_per_file` per file.
///
/// `needle` must already be lowercase. Returns `None` when the file cannot be read; the caller
/// skips such files.
fn scan_content(path: &Path, needle: &str, limits: &SearchLimits) -> Option<Vec<SearchMatch>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            log::debug!("Skipping {}: {err}", path.display());
            return None;
        }
    };

    let mut matches = Vec::new();
    for (idx, line) in UniversalLines::new(BufReader::new(file)).enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::debug!("Skipping {}: {err}", path.display());
                return None;
            }
        };

        let text = decode_utf8_lossy_dropping(&line);
        if !text.to_lowercase().contains(needle) {
            continue;
        }
        matches.push(SearchMatch {
            line: idx + 1,
            text: truncate_to_chars(text.trim(), limits.match_text_chars),
        });
        if matches.len() >= limits.max_matches_per_file {
            break;
        }
    }
    Some(matches)
}
