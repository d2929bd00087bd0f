use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// The sandbox boundary: canonical directories under which file operations are permitted.
///
/// Roots are canonicalized once, when the set is built. Every check canonicalizes the candidate
/// and compares component-wise, so `..` segments and symlinks cannot escape a root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedRoots {
    roots: Vec<PathBuf>,
}

impl AllowedRoots {
    /// Builds the root set, dropping entries that cannot be canonicalized (they could never
    /// contain a resolvable path) and duplicates.
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut roots: Vec<PathBuf> = Vec::new();
        for raw in paths {
            let raw = raw.as_ref();
            match raw.canonicalize() {
                Ok(root) => {
                    if !roots.contains(&root) {
                        roots.push(root);
                    }
                }
                Err(err) => {
                    log::warn!("Ignoring allowed root {}: {err}", raw.display());
                }
            }
        }
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Fail-closed containment check. Never panics and never reports an error: anything that
    /// cannot be resolved is simply not allowed.
    pub fn is_allowed(&self, path: impl AsRef<Path>) -> bool {
        self.resolve(path).is_some()
    }

    /// Resolves `path` and returns its canonical form when it lies within a root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Option<PathBuf> {
        if self.roots.is_empty() {
            return None;
        }
        let resolved = resolve_path(path.as_ref()).ok()?;
        self.contains(&resolved).then_some(resolved)
    }

    /// Containment test for an already-canonical path.
    pub fn contains(&self, canonical: &Path) -> bool {
        self.roots.iter().any(|root| canonical.starts_with(root))
    }
}

/// Upper bound on dangling-symlink redirects before resolution gives up.
const MAX_SYMLINK_HOPS: usize = 40;

/// Canonicalizes `path`, tolerating a missing tail.
///
/// The deepest existing ancestor is canonicalized (following symlinks) and the components that
/// do not exist yet are re-applied lexically. A dangling symlink on the way is followed to where
/// it points, so the result is the location the OS would write to. Errors other than
/// "not found" / "not a directory" are returned unchanged, as is a redirect chain longer than
/// `MAX_SYMLINK_HOPS`.
pub fn resolve_path(path: &Path) -> io::Result<PathBuf> {
    let mut candidate = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    for _ in 0..=MAX_SYMLINK_HOPS {
        match resolve_once(&candidate)? {
            Resolution::Resolved(resolved) => return Ok(resolved),
            Resolution::Redirect(next) => candidate = next,
        }
    }
    Err(io::Error::other(format!(
        "too many levels of symbolic links: {}",
        path.display()
    )))
}

enum Resolution {
    Resolved(PathBuf),
    /// The path runs through a dangling symlink; resolve this rewritten path instead.
    Redirect(PathBuf),
}

fn resolve_once(absolute: &Path) -> io::Result<Resolution> {
    let mut tail: Vec<Component<'_>> = Vec::new();
    let mut cursor = absolute;
    let mut base = loop {
        match cursor.canonicalize() {
            Ok(canonical) => break canonical,
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                if is_symlink(cursor) {
                    let target = fs::read_link(cursor)?;
                    let mut next = match cursor.parent() {
                        Some(parent) => parent.join(target),
                        None => target,
                    };
                    for component in tail.iter().rev() {
                        next.push(component.as_os_str());
                    }
                    return Ok(Resolution::Redirect(next));
                }

                let (Some(last), Some(parent)) = (cursor.components().next_back(), cursor.parent())
                else {
                    return Err(err);
                };
                tail.push(last);
                cursor = parent;
            }
            Err(err) => return Err(err),
        }
    };

    for component in tail.into_iter().rev() {
        match component {
            Component::Normal(name) => base.push(name),
            Component::ParentDir => {
                base.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    Ok(Resolution::Resolved(base))
}

fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false)
}
