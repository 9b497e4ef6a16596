//! Bistro CLI library.
//!
//! This library provides the pieces behind the `bistro` binary: configuration,
//! the exercise catalog, batch intake, reporters and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exercises;
pub mod intake;
pub mod output;
pub mod reporter;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use reporter::{ConsoleReporter, TracingReporter};
