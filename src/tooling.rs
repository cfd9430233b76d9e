//! Tooling & Integration Layer
//!
//! Provides the command-line surface over the playlist tree.

pub mod cli;

pub use cli::{Cli, CliContext, Commands, ExportArgs, PrintArgs};
