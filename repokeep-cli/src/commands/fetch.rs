//! Fetch a remote

use std::path::PathBuf;

use clap::Args;
use repokeep_core::{Config, GitCli, SystemRunner};

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Local checkout path
    pub path: PathBuf,

    /// Remote to fetch (defaults to the configured remote)
    #[arg(short, long)]
    pub remote: Option<String>,
}

impl FetchArgs {
    /// Execute the fetch command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let remote = self.remote.as_deref().unwrap_or(&config.git.remote);
        let git = GitCli::new(SystemRunner::new()).with_program(config.git.program.as_str());

        git.fetch(&self.path, remote)?;
        println!("Fetched '{}' in '{}'", remote, self.path.display());

        Ok(())
    }
}
