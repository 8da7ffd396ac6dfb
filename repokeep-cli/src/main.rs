//! Repokeep CLI - Command line interface for repokeep
//!
//! Keeps local git checkouts synchronized with their remote branches.

mod commands;

use clap::{Parser, Subcommand};
use repokeep_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{ContainsArgs, FetchArgs, LastCommitArgs, OpenArgs, SyncArgs};

/// Repokeep: keep local checkouts synchronized with their remotes
#[derive(Parser, Debug)]
#[command(name = "repokeep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Name or path of the git executable (overrides config and env)
    #[arg(long, global = true, env = "REPOKEEP_GIT_PATH")]
    git_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Synchronize a checkout with its remote branch
    #[command(visible_alias = "s")]
    Sync(SyncArgs),

    /// Fetch a remote
    Fetch(FetchArgs),

    /// Show the most recent commit hash on a remote branch
    LastCommit(LastCommitArgs),

    /// Check whether the current branch contains a commit
    Contains(ContainsArgs),

    /// Open a remote address in the web browser
    Open(OpenArgs),

    /// Show current configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.git_path.clone(), None)?;

    if cli.verbose {
        tracing::info!(
            git_path = %config.git.program,
            remote = %config.git.remote,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("repokeep {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Sync(args)) => {
            args.execute(cli.verbose, &config)?;
        }
        Some(Commands::Fetch(args)) => {
            args.execute(&config)?;
        }
        Some(Commands::LastCommit(args)) => {
            args.execute(&config)?;
        }
        Some(Commands::Contains(args)) => {
            args.execute(&config)?;
        }
        Some(Commands::Open(args)) => {
            args.execute()?;
        }
        Some(Commands::Config) => {
            println!("Repokeep Configuration");
            println!("======================");
            println!();
            println!("Git Settings:");
            println!("  program: {}", config.git.program);
            println!("  remote: {}", config.git.remote);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Repokeep - keep local checkouts synchronized with their remotes");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
