//! Confinement of request paths to the media root.
//!
//! Every filesystem path derived from a request goes through [`MediaRoot::resolve`].
//! The lexical checks run before the filesystem is touched; the canonical-form check
//! afterwards catches symlinks that point outside the root.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Outcome of resolving one logical request path. Produced per request, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPath {
    /// Absolute path inside the media root. Existence is not guaranteed.
    Valid(PathBuf),
    /// The path would escape the root, or could not be checked.
    Invalid,
}

impl ResolvedPath {
    pub fn is_valid(&self) -> bool {
        matches!(self, ResolvedPath::Valid(_))
    }

    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            ResolvedPath::Valid(path) => Some(path),
            ResolvedPath::Invalid => None,
        }
    }
}

/// Canonical absolute media root.
#[derive(Debug, Clone)]
pub struct MediaRoot {
    root: PathBuf,
}

impl MediaRoot {
    /// Canonicalise `dir` (relative paths resolve against the working directory).
    /// Fails when it does not exist or is not a directory.
    pub fn open(dir: &Path) -> io::Result<Self> {
        let root = std::fs::canonicalize(dir)?;
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a directory",
            ));
        }
        Ok(MediaRoot { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Map a logical, already percent-decoded path onto the media root.
    ///
    /// Rejects `..` segments, absolute paths and NUL bytes outright. Paths that exist are
    /// canonicalised and must still sit under the root. For paths that do not exist yet, the
    /// deepest existing ancestor is canonicalised instead and must sit under the root; the
    /// caller's existence check then turns them into a 404.
    pub fn resolve(&self, logical: &str) -> ResolvedPath {
        if logical.contains('\0') {
            tracing::warn!("Rejected path with NUL byte: {:?}", logical);
            return ResolvedPath::Invalid;
        }

        let mut joined = self.root.clone();
        for component in Path::new(logical).components() {
            match component {
                Component::Normal(part) => joined.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    tracing::warn!("Rejected path escaping media root: {:?}", logical);
                    return ResolvedPath::Invalid;
                }
            }
        }

        match joined.canonicalize() {
            Ok(canonical) if canonical.starts_with(&self.root) => ResolvedPath::Valid(canonical),
            Ok(canonical) => {
                tracing::warn!(
                    "Rejected {:?}: resolves to {} outside media root {}",
                    logical,
                    canonical.display(),
                    self.root.display()
                );
                ResolvedPath::Invalid
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => self.resolve_missing(&joined, logical),
            Err(e) => {
                tracing::debug!("Cannot canonicalize {}: {}", joined.display(), e);
                ResolvedPath::Invalid
            }
        }
    }

    /// Confine a path that does not exist through its deepest existing ancestor. A dangling
    /// symlink on the way is rejected: its target could appear later, outside the root.
    fn resolve_missing(&self, joined: &Path, logical: &str) -> ResolvedPath {
        let mut missing = Vec::new();
        let mut existing = joined;
        loop {
            match existing.canonicalize() {
                Ok(canonical) if canonical.starts_with(&self.root) => {
                    let mut resolved = canonical;
                    resolved.extend(missing.iter().rev());
                    return ResolvedPath::Valid(resolved);
                }
                Ok(canonical) => {
                    tracing::warn!(
                        "Rejected {:?}: {} resolves outside media root {}",
                        logical,
                        canonical.display(),
                        self.root.display()
                    );
                    return ResolvedPath::Invalid;
                }
                // Present as a link, but its target is missing.
                Err(_) if existing.symlink_metadata().is_ok() => {
                    tracing::warn!("Rejected {:?}: dangling symlink {}", logical, existing.display());
                    return ResolvedPath::Invalid;
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    let (Some(parent), Some(name)) = (existing.parent(), existing.file_name()) else {
                        return ResolvedPath::Invalid;
                    };
                    missing.push(name);
                    existing = parent;
                }
                Err(e) => {
                    tracing::debug!("Cannot canonicalize {}: {}", existing.display(), e);
                    return ResolvedPath::Invalid;
                }
            }
        }
    }

    /// True when `path` exists and its canonical form lies under the root.
    /// `Path::starts_with` compares whole components, so `/media-evil` never matches `/media`.
    pub fn contains(&self, path: &Path) -> bool {
        path.canonicalize()
            .map(|canonical| canonical.starts_with(&self.root))
            .unwrap_or(false)
    }
}
