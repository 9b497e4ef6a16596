//! List command implementation.

use crate::error::Result;
use crate::exercises;
use crate::output::Formatter;

/// Execute the list command.
pub fn execute_list(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_exercises(&exercises::catalog())?);
    Ok(())
}
