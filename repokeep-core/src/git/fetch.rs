//! Remote fetching

use std::path::Path;

use super::GitCli;
use crate::process::ProcessRunner;
use crate::{Error, Result};

impl<R: ProcessRunner> GitCli<R> {
    /// Fetch `remote` in the repository at `path`
    pub fn fetch(&self, path: &Path, remote: &str) -> Result<()> {
        self.git(Some(path), &["fetch", remote]).map_err(|e| {
            tracing::debug!(error = %e, remote, "git fetch failed");
            Error::Fetch {
                path: path.display().to_string(),
                remote: remote.to_string(),
            }
        })?;

        Ok(())
    }

    /// Fetch the `origin` remote
    pub fn fetch_origin(&self, path: &Path) -> Result<()> {
        self.fetch(path, "origin")
    }
}
