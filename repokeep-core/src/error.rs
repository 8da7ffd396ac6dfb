//! Error types for repokeep

use thiserror::Error;

/// Result type alias for repokeep operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for repokeep operations
#[derive(Error, Debug)]
pub enum Error {
    /// Working directory is missing, not a directory, or unresolvable
    #[error("invalid path '{path}': {reason}")]
    Path { path: String, reason: String },

    /// External command could not be spawned or exited with failure
    #[error("command `{command}` failed: {reason}")]
    Process { command: String, reason: String },

    /// Commit history query failed
    #[error("history query failed in '{path}': {detail}")]
    History { path: String, detail: String },

    /// Fetching a remote failed
    #[error("could not fetch remote '{remote}' in '{path}'")]
    Fetch { path: String, remote: String },

    /// Target path is a file where a checkout directory was expected
    #[error("target path '{path}' is a file; expected a directory or nothing")]
    PathConflict { path: String },

    /// No browser opener is known for this operating system
    #[error("unsupported platform '{os}'")]
    UnsupportedPlatform { os: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
