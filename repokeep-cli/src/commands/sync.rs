//! Synchronize a checkout with its remote branch

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use repokeep_core::{
    endpoint, CloneStrategy, Config, GitCli, SyncOutcome, SyncRequest, SystemRunner,
};

/// Strategy names accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// Remove the checkout and clone from scratch
    RemoveAndClone,
    /// Pull when on the requested branch, otherwise check it out
    Pull,
    /// Check out the requested branch
    Checkout,
}

impl From<StrategyArg> for CloneStrategy {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::RemoveAndClone => CloneStrategy::RemoveAndClone,
            StrategyArg::Pull => CloneStrategy::Pull,
            StrategyArg::Checkout => CloneStrategy::Checkout,
        }
    }
}

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Local checkout path
    pub path: PathBuf,

    /// Remote repository address
    pub remote_url: String,

    /// Branch to synchronize with
    #[arg(short, long)]
    pub branch: String,

    /// Reconciliation strategy
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Pull)]
    pub strategy: StrategyArg,
}

impl SyncArgs {
    /// Execute the sync command
    pub fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        if verbose && endpoint::is_local_endpoint(&self.remote_url) {
            println!("Remote address is a local endpoint");
        }

        let git = GitCli::new(SystemRunner::new()).with_program(config.git.program.as_str());

        let request = SyncRequest {
            target: self.path.clone(),
            remote_url: self.remote_url.clone(),
            branch: self.branch.clone(),
            strategy: self.strategy.into(),
        };

        let outcome = git
            .sync(&request)
            .with_context(|| format!("could not synchronize '{}'", self.path.display()))?;

        match outcome {
            SyncOutcome::Cloned { target, branch } => {
                println!("Cloned '{}' at branch '{}'", target.display(), branch);
            }
            SyncOutcome::Recloned { target, branch } => {
                println!("Recloned '{}' at branch '{}'", target.display(), branch);
            }
            SyncOutcome::Pulled { target, branch } => {
                println!("Pulled '{}' on branch '{}'", target.display(), branch);
            }
            SyncOutcome::CheckedOut { target, branch } => {
                println!("Checked out branch '{}' in '{}'", branch, target.display());
            }
        }

        Ok(())
    }
}
