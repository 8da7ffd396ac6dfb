//! Git operations for repokeep
//!
//! This module provides branch inspection, commit history queries,
//! remote fetching, and checkout reconciliation. Every operation shells
//! out to the git executable through a [`ProcessRunner`], so the whole
//! module can be exercised against a scripted runner in tests.

mod branch;
mod fetch;
mod history;
mod sync;

pub use sync::{CloneStrategy, SyncOutcome, SyncRequest};

use std::path::Path;

use crate::process::{Invocation, ProcessRunner};
use crate::Result;

/// Git command-line wrapper bound to a [`ProcessRunner`]
#[derive(Debug)]
pub struct GitCli<R> {
    runner: R,
    program: String,
}

impl<R: ProcessRunner> GitCli<R> {
    /// Create a wrapper that invokes `git` from the search path
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            program: "git".to_string(),
        }
    }

    /// Use a custom git executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Run git with the given arguments, optionally in `workdir`
    fn git(&self, workdir: Option<&Path>, args: &[&str]) -> Result<Invocation> {
        self.runner.run(workdir, &self.program, args)
    }
}
