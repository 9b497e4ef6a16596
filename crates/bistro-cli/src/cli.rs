//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bistro - domain primitive exercises for a restaurant ordering model.
#[derive(Debug, Parser)]
#[command(name = "bistro")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Where step reports go
    #[arg(short, long, value_enum, global = true)]
    pub reporter: Option<CliReporter>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "BISTRO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable output (default)
    Pretty,
    /// One JSON document per report
    Json,
}

/// Reporter options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliReporter {
    /// Print reports to stdout
    Console,
    /// Emit reports as tracing events
    Tracing,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run exercises (all by default)
    Run(RunArgs),

    /// List available exercises
    List,

    /// Ingest a JSON array of raw orders into a fresh repository
    Orders(IngestArgs),

    /// Ingest a JSON array of raw customers, keeping those with valid emails
    Customers(IngestArgs),
}

/// Arguments for the run command.
#[derive(Debug, Default, Parser)]
pub struct RunArgs {
    /// Step to run; repeat for several
    #[arg(short, long = "step")]
    pub steps: Vec<u32>,
}

/// Arguments for the ingest commands.
#[derive(Debug, Parser)]
pub struct IngestArgs {
    /// JSON file to read
    pub file: PathBuf,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Pretty => crate::config::OutputFormat::Pretty,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<CliReporter> for crate::config::ReporterKind {
    fn from(reporter: CliReporter) -> Self {
        match reporter {
            CliReporter::Console => crate::config::ReporterKind::Console,
            CliReporter::Tracing => crate::config::ReporterKind::Tracing,
        }
    }
}
