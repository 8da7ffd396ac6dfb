//! Open a remote address in the web browser

use anyhow::bail;
use clap::Args;
use repokeep_core::{browser, endpoint};

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Remote address (scheme URL or SCP-style)
    pub address: String,
}

impl OpenArgs {
    /// Execute the open command
    pub fn execute(&self) -> anyhow::Result<()> {
        let Some(url) = endpoint::web_url(&self.address) else {
            bail!(
                "'{}' is a local endpoint, nothing to open in a browser",
                self.address
            );
        };

        browser::open_browser(&url)?;
        println!("Opened {}", url);

        Ok(())
    }
}
