//! Commit history queries

use std::path::Path;

use super::GitCli;
use crate::process::ProcessRunner;
use crate::{Error, Result};

/// Pretty format for log scans: hash | refs | date | subject
///
/// The quotes are part of the argument, so every output line starts and
/// ends with a literal quote character.
const LOG_FORMAT: &str = "--pretty=\"%H | %D | %cD | %s\"";

/// How many log entries a scan looks at
const LOG_SCAN_LIMIT: &str = "-10";

impl<R: ProcessRunner> GitCli<R> {
    /// Whether the commit `hash` is reachable from the branch currently
    /// checked out at `path`
    ///
    /// `git branch --contains` marks the active branch with `*`; the
    /// hash counts as present as soon as a marked line shows up.
    pub fn has_commit_hash(&self, path: &Path, hash: &str) -> Result<bool> {
        let run = self
            .git(Some(path), &["branch", "--contains", hash])
            .map_err(|e| Error::History {
                path: path.display().to_string(),
                detail: format!("could not list branches containing '{}': {}", hash, e),
            })?;

        Ok(run.lines.iter().any(|line| line.contains('*')))
    }

    /// Hash of the most recent qualifying commit on `branch`
    ///
    /// `branch` is prefixed with `origin/` unless it already references
    /// origin. The scan covers at most the ten newest entries, newest
    /// first. With `not_merged`, entries recording a merge are skipped.
    /// `Ok(None)` means the scan found nothing qualifying, which is
    /// distinct from the query itself failing.
    pub fn last_commit_hash(
        &self,
        path: &Path,
        branch: &str,
        not_merged: bool,
    ) -> Result<Option<String>> {
        let branch_ref = if branch.contains("origin") {
            branch.to_string()
        } else {
            format!("origin/{}", branch)
        };

        let run = self
            .git(
                Some(path),
                &["log", &branch_ref, LOG_FORMAT, "--abbrev-commit", LOG_SCAN_LIMIT],
            )
            .map_err(|e| Error::History {
                path: path.display().to_string(),
                detail: format!("could not read log of '{}': {}", branch_ref, e),
            })?;

        for line in &run.lines {
            if not_merged && line.contains("Merge") {
                continue;
            }

            let hash = line
                .split(' ')
                .next()
                .unwrap_or_default()
                .replace('"', "");

            return Ok(Some(hash).filter(|h| !h.is_empty()));
        }

        Ok(None)
    }
}
