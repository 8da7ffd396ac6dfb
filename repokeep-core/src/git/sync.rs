//! Checkout reconciliation against a remote branch
//!
//! The decision is a function of what the target path currently is
//! (missing, file, directory) crossed with the requested strategy:
//!
//! | target    | RemoveAndClone   | Pull                     | Checkout  |
//! |-----------|------------------|--------------------------|-----------|
//! | missing   | clone            | clone                    | clone     |
//! | directory | remove, clone    | pull or fall back to checkout | checkout |
//! | file      | conflict error   | conflict error           | conflict error |

use std::path::{Path, PathBuf};

use super::GitCli;
use crate::path::{path_kind, PathKind};
use crate::process::ProcessRunner;
use crate::{Error, Result};

/// How an existing checkout is reconciled with the remote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneStrategy {
    /// Remove the target directory and clone from scratch
    RemoveAndClone,
    /// Pull when already on the requested branch, otherwise check it out
    Pull,
    /// Check out the requested branch, whatever is currently active
    Checkout,
}

/// A synchronization request
#[derive(Debug, Clone)]
pub struct SyncRequest {
    /// Local checkout location
    pub target: PathBuf,
    /// Remote repository address
    pub remote_url: String,
    /// Branch to synchronize with
    pub branch: String,
    /// Reconciliation strategy
    pub strategy: CloneStrategy,
}

/// What a completed synchronization actually did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Fresh clone into a previously missing target
    Cloned { target: PathBuf, branch: String },
    /// Existing checkout removed, then cloned from scratch
    Recloned { target: PathBuf, branch: String },
    /// Existing checkout pulled on the requested branch
    Pulled { target: PathBuf, branch: String },
    /// Requested branch checked out in the existing checkout
    CheckedOut { target: PathBuf, branch: String },
}

impl<R: ProcessRunner> GitCli<R> {
    /// Reconcile the checkout at `request.target` with the remote
    ///
    /// A target that is a file is a conflict and nothing is invoked. A
    /// missing target is cloned regardless of strategy. Concurrent
    /// reconciliation of the same target is the caller's problem to
    /// prevent; the engine takes no locks.
    pub fn sync(&self, request: &SyncRequest) -> Result<SyncOutcome> {
        match path_kind(&request.target) {
            PathKind::File => Err(Error::PathConflict {
                path: request.target.display().to_string(),
            }),
            PathKind::Missing => {
                self.clone_branch(&request.target, &request.remote_url, &request.branch)?;
                tracing::info!(
                    target = %request.target.display(),
                    branch = %request.branch,
                    "cloned"
                );
                Ok(SyncOutcome::Cloned {
                    target: request.target.clone(),
                    branch: request.branch.clone(),
                })
            }
            PathKind::Directory => self.sync_existing(request),
        }
    }

    /// Reconciliation for a target that is already a directory
    fn sync_existing(&self, request: &SyncRequest) -> Result<SyncOutcome> {
        let target = request.target.as_path();
        let branch = request.branch.as_str();

        match request.strategy {
            CloneStrategy::RemoveAndClone => {
                remove_checkout(target)?;
                tracing::info!(target = %target.display(), "removed existing checkout");

                self.clone_branch(target, &request.remote_url, branch)?;
                Ok(SyncOutcome::Recloned {
                    target: target.to_path_buf(),
                    branch: branch.to_string(),
                })
            }
            CloneStrategy::Pull => {
                if self.is_on_branch(target, branch)? {
                    self.git(Some(target), &["pull"])?;
                    tracing::info!(target = %target.display(), branch, "pulled");
                    Ok(SyncOutcome::Pulled {
                        target: target.to_path_buf(),
                        branch: branch.to_string(),
                    })
                } else {
                    tracing::info!(branch, "local branch differs, falling back to checkout");
                    self.checkout_branch(target, branch)
                }
            }
            CloneStrategy::Checkout => self.checkout_branch(target, branch),
        }
    }

    /// Fetch origin, then check out `branch`
    ///
    /// The fetch keeps the remote refs current so the checkout can
    /// resolve a branch that only exists remotely. A checkout failure
    /// after a successful fetch is reported as-is; the completed fetch
    /// is visible in the log.
    fn checkout_branch(&self, target: &Path, branch: &str) -> Result<SyncOutcome> {
        self.fetch_origin(target)?;
        tracing::debug!(target = %target.display(), "fetched origin");

        self.git(Some(target), &["checkout", branch])?;
        tracing::info!(target = %target.display(), branch, "checked out");

        Ok(SyncOutcome::CheckedOut {
            target: target.to_path_buf(),
            branch: branch.to_string(),
        })
    }

    /// `git clone <url> -b <branch> <target>`, creating parent
    /// directories first
    fn clone_branch(&self, target: &Path, remote_url: &str, branch: &str) -> Result<()> {
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let target_arg = target.to_string_lossy();
        self.git(None, &["clone", remote_url, "-b", branch, &target_arg])?;

        Ok(())
    }
}

/// Remove an existing checkout directory, recursively
///
/// Failure aborts the reconciliation before any clone is attempted, so
/// the target is never left half-removed without a report.
fn remove_checkout(target: &Path) -> Result<()> {
    std::fs::remove_dir_all(target).map_err(|e| Error::Path {
        path: target.display().to_string(),
        reason: format!("could not remove existing checkout: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::{CloneStrategy, SyncOutcome, SyncRequest};
    use crate::process::ScriptedRunner;
    use crate::{Error, GitCli};

    fn request(target: &Path, strategy: CloneStrategy) -> SyncRequest {
        SyncRequest {
            target: target.to_path_buf(),
            remote_url: "git@github.com:owner/repo.git".to_string(),
            branch: "main".to_string(),
            strategy,
        }
    }

    #[test]
    fn test_missing_target_clones_for_every_strategy() {
        for strategy in [
            CloneStrategy::RemoveAndClone,
            CloneStrategy::Pull,
            CloneStrategy::Checkout,
        ] {
            let dir = tempfile::tempdir().unwrap();
            let target = dir.path().join("checkout");

            let runner = ScriptedRunner::new();
            runner.push_stdout("");

            let git = GitCli::new(&runner);
            let outcome = git.sync(&request(&target, strategy)).unwrap();

            assert_eq!(
                outcome,
                SyncOutcome::Cloned {
                    target: target.clone(),
                    branch: "main".to_string(),
                }
            );
            assert_eq!(
                runner.calls(),
                vec![format!(
                    "git clone git@github.com:owner/repo.git -b main {}",
                    target.display()
                )]
            );
        }
    }

    #[test]
    fn test_file_target_is_conflict_with_zero_invocations() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("checkout");
        std::fs::write(&target, b"not a directory").unwrap();

        for strategy in [
            CloneStrategy::RemoveAndClone,
            CloneStrategy::Pull,
            CloneStrategy::Checkout,
        ] {
            let runner = ScriptedRunner::new();
            let git = GitCli::new(&runner);

            let result = git.sync(&request(&target, strategy));
            assert!(matches!(result, Err(Error::PathConflict { .. })));
            assert!(runner.calls().is_empty());
        }
    }

    #[test]
    fn test_pull_on_matching_branch() {
        let dir = tempfile::tempdir().unwrap();

        let runner = ScriptedRunner::new();
        runner.push_stdout("main\n"); // branch --show-current
        runner.push_stdout(""); // pull

        let git = GitCli::new(&runner);
        let outcome = git.sync(&request(dir.path(), CloneStrategy::Pull)).unwrap();

        assert_eq!(
            outcome,
            SyncOutcome::Pulled {
                target: dir.path().to_path_buf(),
                branch: "main".to_string(),
            }
        );
        assert_eq!(
            runner.calls(),
            vec!["git branch --show-current", "git pull"]
        );
    }

    #[test]
    fn test_pull_falls_back_to_checkout_on_other_branch() {
        let dir = tempfile::tempdir().unwrap();

        let runner = ScriptedRunner::new();
        runner.push_stdout("develop\n"); // branch --show-current
        runner.push_stdout(""); // fetch origin
        runner.push_stdout(""); // checkout

        let git = GitCli::new(&runner);
        let outcome = git.sync(&request(dir.path(), CloneStrategy::Pull)).unwrap();

        assert_eq!(
            outcome,
            SyncOutcome::CheckedOut {
                target: dir.path().to_path_buf(),
                branch: "main".to_string(),
            }
        );
        assert_eq!(
            runner.calls(),
            vec![
                "git branch --show-current",
                "git fetch origin",
                "git checkout main"
            ]
        );
    }

    #[test]
    fn test_checkout_strategy() {
        let dir = tempfile::tempdir().unwrap();

        let runner = ScriptedRunner::new();
        runner.push_stdout(""); // fetch origin
        runner.push_stdout(""); // checkout

        let git = GitCli::new(&runner);
        let outcome = git
            .sync(&request(dir.path(), CloneStrategy::Checkout))
            .unwrap();

        assert_eq!(
            outcome,
            SyncOutcome::CheckedOut {
                target: dir.path().to_path_buf(),
                branch: "main".to_string(),
            }
        );
        assert_eq!(runner.calls(), vec!["git fetch origin", "git checkout main"]);
    }

    #[test]
    fn test_remove_and_clone_removes_directory_first() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("checkout");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("stale"), b"old content").unwrap();

        let runner = ScriptedRunner::new();
        runner.push_stdout(""); // clone

        let git = GitCli::new(&runner);
        let outcome = git
            .sync(&request(&target, CloneStrategy::RemoveAndClone))
            .unwrap();

        assert_eq!(
            outcome,
            SyncOutcome::Recloned {
                target: target.clone(),
                branch: "main".to_string(),
            }
        );
        assert!(!target.exists());
        assert_eq!(
            runner.calls(),
            vec![format!(
                "git clone git@github.com:owner/repo.git -b main {}",
                target.display()
            )]
        );
    }

    #[test]
    fn test_pull_propagates_branch_query_failure() {
        let dir = tempfile::tempdir().unwrap();

        let runner = ScriptedRunner::new();
        runner.push_failure(Error::Process {
            command: "git branch --show-current".to_string(),
            reason: "exited with exit status: 128".to_string(),
        });

        let git = GitCli::new(&runner);
        let result = git.sync(&request(dir.path(), CloneStrategy::Pull));

        assert!(matches!(result, Err(Error::Process { .. })));
        assert_eq!(runner.calls(), vec!["git branch --show-current"]);
    }

    #[test]
    fn test_checkout_failure_after_fetch_is_reported() {
        let dir = tempfile::tempdir().unwrap();

        let runner = ScriptedRunner::new();
        runner.push_stdout(""); // fetch origin
        runner.push_failure(Error::Process {
            command: "git checkout main".to_string(),
            reason: "exited with exit status: 1".to_string(),
        });

        let git = GitCli::new(&runner);
        let result = git.sync(&request(dir.path(), CloneStrategy::Checkout));

        assert!(matches!(result, Err(Error::Process { .. })));
        assert_eq!(runner.calls(), vec!["git fetch origin", "git checkout main"]);
    }

    #[test]
    fn test_clone_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target: PathBuf = dir.path().join("nested").join("deeper").join("checkout");

        let runner = ScriptedRunner::new();
        runner.push_stdout("");

        let git = GitCli::new(&runner);
        git.sync(&request(&target, CloneStrategy::Pull)).unwrap();

        assert!(target.parent().unwrap().is_dir());
    }
}
