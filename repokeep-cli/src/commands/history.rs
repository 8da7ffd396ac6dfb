//! Commit history inspection commands

use std::path::PathBuf;

use clap::Args;
use repokeep_core::{Config, GitCli, SystemRunner};

#[derive(Args, Debug)]
pub struct LastCommitArgs {
    /// Local checkout path
    pub path: PathBuf,

    /// Branch to inspect (prefixed with origin/ unless already qualified)
    pub branch: String,

    /// Skip merge commits
    #[arg(long)]
    pub skip_merges: bool,
}

impl LastCommitArgs {
    /// Execute the last-commit command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let git = GitCli::new(SystemRunner::new()).with_program(config.git.program.as_str());

        match git.last_commit_hash(&self.path, &self.branch, self.skip_merges)? {
            Some(hash) => println!("{}", hash),
            None => println!("No matching commit in the scanned log window"),
        }

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ContainsArgs {
    /// Local checkout path
    pub path: PathBuf,

    /// Commit hash to look for
    pub hash: String,
}

impl ContainsArgs {
    /// Execute the contains command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let git = GitCli::new(SystemRunner::new()).with_program(config.git.program.as_str());

        if git.has_commit_hash(&self.path, &self.hash)? {
            println!("Commit {} is on the current branch", self.hash);
        } else {
            println!("Commit {} is not on the current branch", self.hash);
        }

        Ok(())
    }
}
