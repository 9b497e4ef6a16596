//! Bistro CLI - runs the domain primitive exercises and ingests raw batches.

use bistro_cli::commands;
use bistro_cli::reporter::build_reporter;
use bistro_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> bistro_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // An explicit config path must exist; the default one is optional
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    // Flags override the file
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let reporter_kind = cli
        .reporter
        .map(Into::into)
        .unwrap_or(config.settings.reporter);
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None => {
            let reporter = build_reporter(reporter_kind, formatter);
            commands::execute_run(Default::default(), &config, reporter.as_ref())?;
        }
        Some(Command::Run(args)) => {
            let reporter = build_reporter(reporter_kind, formatter);
            commands::execute_run(args, &config, reporter.as_ref())?;
        }
        Some(Command::List) => commands::execute_list(&formatter)?,
        Some(Command::Orders(args)) => commands::execute_orders(args, &formatter)?,
        Some(Command::Customers(args)) => commands::execute_customers(args, &formatter)?,
    }

    Ok(())
}
