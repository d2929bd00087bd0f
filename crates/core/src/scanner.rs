use ignore::{DirEntry, WalkBuilder};
use std::cmp::Ordering;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::roots::AllowedRoots;

/// Directory names that are never descended into, regardless of the hidden-name rule.
const IGNORED_DIR_NAMES: &[&str] = &[
    "node_modules",
    "__pycache__",
    "venv",
    ".venv",
    "target",
    "build",
    "dist",
    ".git",
];

/// A regular file found under the scan root.
#[derive(Debug, Clone)]
pub(crate) struct ScannedFile {
    pub(crate) path: PathBuf,
    /// `/`-separated path relative to the scan root.
    pub(crate) relative: String,
    pub(crate) name: String,
    pub(crate) size: u64,
}

/// Depth-first walker with entry-level pruning.
///
/// Order is deterministic: entries are visited depth-first, siblings sorted by file name
/// (byte-wise), so the same tree always yields the same sequence.
pub(crate) struct DirScanner<'a> {
    root: PathBuf,
    roots: &'a AllowedRoots,
}

impl<'a> DirScanner<'a> {
    pub(crate) fn new(root: impl AsRef<Path>, roots: &'a AllowedRoots) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            roots,
        }
    }

    /// Lazily yields regular files; callers stop iterating to cut the walk short.
    pub(crate) fn files(&self) -> impl Iterator<Item = ScannedFile> + '_ {
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(by_file_name)
            .filter_entry(is_kept);

        builder.build().filter_map(move |result| match result {
            Ok(entry) => self.to_scanned_file(&entry),
            Err(err) => {
                log::debug!("Skipping unreadable entry: {err}");
                None
            }
        })
    }

    fn to_scanned_file(&self, entry: &DirEntry) -> Option<ScannedFile> {
        let file_type = entry.file_type()?;
        let path = entry.path();

        let size = if file_type.is_file() {
            entry.metadata().ok()?.len()
        } else if file_type.is_symlink() {
            // Symlinked files are reported only when their target is inside the sandbox.
            let target = fs::canonicalize(path).ok()?;
            let meta = fs::metadata(&target).ok()?;
            if !meta.is_file() || !self.roots.contains(&target) {
                log::debug!("Skipping symlink {} -> {}", path.display(), target.display());
                return None;
            }
            meta.len()
        } else {
            return None;
        };

        let relative = path
            .strip_prefix(&self.root)
            .ok()?
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let name = entry.file_name().to_string_lossy().into_owned();

        Some(ScannedFile {
            path: path.to_path_buf(),
            relative,
            name,
            size,
        })
    }
}

fn by_file_name(a: &OsStr, b: &OsStr) -> Ordering {
    a.cmp(b)
}

/// Entry filter applied before descent, so a pruned directory hides its whole subtree.
fn is_kept(entry: &DirEntry) -> bool {
    entry.depth() == 0 || !is_pruned_name(entry.file_name())
}

fn is_pruned_name(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    name.starts_with('.') || IGNORED_DIR_NAMES.iter().any(|ignored| *ignored == name)
}
