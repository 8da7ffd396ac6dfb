//! Filesystem path classification

use std::path::Path;

/// What a filesystem path points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Path does not exist, or its metadata could not be read
    Missing,
    /// Path is a file
    File,
    /// Path is a directory
    Directory,
}

/// Classify a path with a single metadata lookup
///
/// Any lookup failure reports [`PathKind::Missing`], including permission
/// errors. Callers that need to tell the causes apart must stat the path
/// themselves.
pub fn path_kind(path: impl AsRef<Path>) -> PathKind {
    match std::fs::metadata(path.as_ref()) {
        Ok(meta) if meta.is_dir() => PathKind::Directory,
        Ok(_) => PathKind::File,
        Err(_) => PathKind::Missing,
    }
}
