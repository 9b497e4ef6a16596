//! Run command implementation.

use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::Result;
use crate::exercises;
use bistro_domain::Reporter;

/// Execute the run command.
///
/// Steps given on the command line take precedence over `[exercises] steps`
/// in the configuration file.
pub fn execute_run(args: RunArgs, config: &Config, reporter: &dyn Reporter) -> Result<()> {
    let steps = if args.steps.is_empty() {
        &config.exercises.steps
    } else {
        &args.steps
    };

    exercises::run_steps(steps, reporter)
}
