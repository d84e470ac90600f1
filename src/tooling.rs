//! Tooling & Integration Layer
//!
//! Command-line interface and the interactive browse loop over a
//! [`ChartSession`](crate::session::ChartSession).

pub mod browse;
pub mod cli;

pub use browse::{BrowseCommand, BrowseOutcome};
pub use cli::{Cli, CliContext, Commands};
