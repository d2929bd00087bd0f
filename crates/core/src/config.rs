use std::env;
use std::path::PathBuf;

use fileops_protocol::{DEFAULT_MATCH_TEXT_CHARS, DEFAULT_MAX_MATCHES_PER_FILE};

use crate::roots::AllowedRoots;

/// Allowed roots, separated by the platform path-list separator (`:` on Unix, `;` on Windows).
pub const ROOT_ENV: &str = "FILE_OPS_ROOT";
pub const GLOB_CASE_SENSITIVE_ENV: &str = "FILE_OPS_GLOB_CASE_SENSITIVE";
pub const MAX_MATCHES_PER_FILE_ENV: &str = "FILE_OPS_MAX_MATCHES_PER_FILE";
pub const MATCH_TEXT_CHARS_ENV: &str = "FILE_OPS_MATCH_TEXT_CHARS";

const MAX_MATCHES_PER_FILE_LIMIT: usize = 1_000;
const MATCH_TEXT_CHARS_LIMIT: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_matches_per_file: usize,
    pub match_text_chars: usize,
    pub glob_case_sensitive: bool,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_matches_per_file: DEFAULT_MAX_MATCHES_PER_FILE,
            match_text_chars: DEFAULT_MATCH_TEXT_CHARS,
            glob_case_sensitive: true,
        }
    }
}

impl SearchLimits {
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_matches_per_file: env_usize(
                MAX_MATCHES_PER_FILE_ENV,
                defaults.max_matches_per_file,
                MAX_MATCHES_PER_FILE_LIMIT,
            ),
            match_text_chars: env_usize(
                MATCH_TEXT_CHARS_ENV,
                defaults.match_text_chars,
                MATCH_TEXT_CHARS_LIMIT,
            ),
            glob_case_sensitive: env_bool(GLOB_CASE_SENSITIVE_ENV, defaults.glob_case_sensitive),
        }
    }
}

/// Immutable service configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    roots: AllowedRoots,
    limits: SearchLimits,
}

impl Config {
    pub fn new(roots: AllowedRoots) -> Self {
        Self {
            roots,
            limits: SearchLimits::default(),
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Reads `FILE_OPS_*` variables. Unset or blank `FILE_OPS_ROOT` means the current
    /// working directory; invalid numeric/bool values fall back to defaults with a warning.
    pub fn from_env() -> Self {
        Self::new(roots_from_env()).with_limits(SearchLimits::from_env())
    }

    pub fn roots(&self) -> &AllowedRoots {
        &self.roots
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }
}

fn roots_from_env() -> AllowedRoots {
    let configured: Vec<PathBuf> = env::var_os(ROOT_ENV)
        .map(|raw| {
            env::split_paths(&raw)
                .filter(|p| !p.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default();
    if !configured.is_empty() {
        return AllowedRoots::new(configured);
    }

    match env::current_dir() {
        Ok(cwd) => AllowedRoots::new([cwd]),
        Err(err) => {
            log::warn!("{ROOT_ENV} is unset and the working directory is unavailable ({err}); all paths will be denied");
            AllowedRoots::default()
        }
    }
}

fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_bool(key: &str, default: bool) -> bool {
    let Some(value) = env_value(key) else {
        return default;
    };
    if value == "1" || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes") {
        return true;
    }
    if value == "0" || value.eq_ignore_ascii_case("false") || value.eq_ignore_ascii_case("no") {
        return false;
    }
    log::warn!("Invalid {key}='{value}', using default {default}");
    default
}

fn env_usize(key: &str, default: usize, max: usize) -> usize {
    let Some(value) = env_value(key) else {
        return default;
    };
    match value.parse::<usize>() {
        Ok(parsed) => parsed.clamp(1, max),
        Err(err) => {
            log::warn!("Invalid {key}='{value}' ({err}), using default {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ENV_MUTEX;
    use tempfile::tempdir;

    const ALL_KEYS: [&str; 4] = [
        ROOT_ENV,
        GLOB_CASE_SENSITIVE_ENV,
        MAX_MATCHES_PER_FILE_ENV,
        MATCH_TEXT_CHARS_ENV,
    ];

    fn clear_env() {
        for key in ALL_KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn defaults_to_working_directory() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let config = Config::from_env();
        let cwd = env::current_dir().unwrap().canonicalize().unwrap();
        assert_eq!(config.roots().roots(), &[cwd]);
        assert_eq!(*config.limits(), SearchLimits::default());
    }

    #[test]
    fn splits_roots_on_platform_separator() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let a = tempdir().unwrap();
        let b = tempdir().unwrap();
        let joined = env::join_paths([a.path(), b.path()]).unwrap();
        env::set_var(ROOT_ENV, &joined);

        let config = Config::from_env();
        clear_env();

        assert_eq!(
            config.roots().roots(),
            &[
                a.path().canonicalize().unwrap(),
                b.path().canonicalize().unwrap()
            ]
        );
    }

    #[test]
    fn limits_are_read_and_clamped() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        env::set_var(GLOB_CASE_SENSITIVE_ENV, "false");
        env::set_var(MAX_MATCHES_PER_FILE_ENV, "0");
        env::set_var(MATCH_TEXT_CHARS_ENV, "not-a-number");
        let config = Config::from_env();
        clear_env();

        let limits = config.limits();
        assert!(!limits.glob_case_sensitive);
        assert_eq!(limits.max_matches_per_file, 1);
        assert_eq!(limits.match_text_chars, DEFAULT_MATCH_TEXT_CHARS);
    }
}
