//! Branch inspection and comparison

use std::path::Path;

use super::GitCli;
use crate::convert::values_equal;
use crate::process::ProcessRunner;
use crate::Result;

impl<R: ProcessRunner> GitCli<R> {
    /// Name of the branch currently checked out at `path`
    ///
    /// Empty when HEAD is detached.
    pub fn current_branch(&self, path: &Path) -> Result<String> {
        let run = self.git(Some(path), &["branch", "--show-current"])?;
        Ok(run.stdout.trim().to_string())
    }

    /// Whether the branch checked out at `path` is `branch`
    ///
    /// Compared case-insensitively, ignoring surrounding whitespace and
    /// line terminators. A failed invocation is returned as an error,
    /// never escalated past the caller.
    pub fn is_on_branch(&self, path: &Path, branch: &str) -> Result<bool> {
        let current = self.current_branch(path)?;
        Ok(values_equal(&current, branch))
    }
}
