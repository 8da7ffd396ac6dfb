//! Repokeep Core - Core library for keeping local checkouts synchronized
//!
//! This crate provides the reconciliation engine that keeps a local git
//! checkout aligned with a remote branch, together with the process,
//! path, and conversion primitives it is built on. Every git operation
//! goes through an injectable [`ProcessRunner`], so the whole engine can
//! be exercised without spawning anything.

pub mod browser;
pub mod config;
pub mod convert;
pub mod endpoint;
pub mod error;
pub mod git;
pub mod path;
pub mod process;

pub use config::{Config, GitConfig};
pub use error::{Error, Result};
pub use git::{CloneStrategy, GitCli, SyncOutcome, SyncRequest};
pub use path::{path_kind, PathKind};
pub use process::{Invocation, ProcessRunner, SystemRunner};
