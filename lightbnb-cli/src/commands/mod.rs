//! Subcommand implementations

pub mod search;
pub mod serve;

pub use search::{run_search, SearchArgs};
pub use serve::{run_serve, ServeArgs};
