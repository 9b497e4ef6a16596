//! Reporter implementations for the CLI.

use crate::config::ReporterKind;
use crate::output::Formatter;
use bistro_domain::Reporter;
use serde_json::Value;
use tracing::info;

/// Prints each report to stdout through a [`Formatter`].
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    formatter: Formatter,
}

impl ConsoleReporter {
    /// Create a console reporter.
    pub fn new(formatter: Formatter) -> Self {
        Self { formatter }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, step: u32, message: &str, payload: &Value) {
        println!("{}", self.formatter.report(step, message, payload));
    }
}

/// Emits each report as an `info` tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, step: u32, message: &str, payload: &Value) {
        info!(step, payload = %payload, "{}", message);
    }
}

/// Build the reporter selected in configuration.
pub fn build_reporter(kind: ReporterKind, formatter: Formatter) -> Box<dyn Reporter> {
    match kind {
        ReporterKind::Console => Box::new(ConsoleReporter::new(formatter)),
        ReporterKind::Tracing => Box::new(TracingReporter),
    }
}
