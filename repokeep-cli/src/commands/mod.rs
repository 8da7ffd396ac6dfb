//! CLI command implementations

pub mod fetch;
pub mod history;
pub mod open;
pub mod sync;

pub use fetch::FetchArgs;
pub use history::{ContainsArgs, LastCommitArgs};
pub use open::OpenArgs;
pub use sync::SyncArgs;
