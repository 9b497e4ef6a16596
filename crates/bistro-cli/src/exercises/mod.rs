//! Numbered demonstration exercises.
//!
//! Each exercise builds values from raw input through the domain
//! constructors and reports what was accepted and what was rejected. An
//! exercise fails only if a constructor it expects to succeed fails, or one
//! it expects to fail succeeds.

mod contact;
mod hours;
mod orders;
mod pricing;
mod seating;

use crate::error::{CliError, Result};
use bistro_domain::{DomainError, Reporter};
use serde_json::{json, Value};
use std::fmt::Debug;
use tracing::{debug, info};

/// One numbered exercise.
#[derive(Debug, Clone, Copy)]
pub struct Exercise {
    /// Step number used in reports
    pub step: u32,
    /// Short title
    pub title: &'static str,
    /// Body of the exercise
    pub run: fn(&dyn Reporter) -> Result<()>,
}

/// Every exercise, in step order.
pub fn catalog() -> Vec<Exercise> {
    vec![
        Exercise {
            step: 1,
            title: "Price rejects negative and oversized amounts",
            run: pricing::price,
        },
        Exercise {
            step: 2,
            title: "Quantity is a whole number between 1 and 100",
            run: pricing::quantity,
        },
        Exercise {
            step: 3,
            title: "Email, phone and name are distinct types",
            run: contact::contact_fields,
        },
        Exercise {
            step: 4,
            title: "Table never seats more guests than its capacity",
            run: seating::seating,
        },
        Exercise {
            step: 5,
            title: "Order ids are well-formed and unique",
            run: orders::orders,
        },
        Exercise {
            step: 6,
            title: "Operating hours handle closing after midnight",
            run: hours::hours,
        },
        Exercise {
            step: 8,
            title: "Only customers with valid emails are kept",
            run: contact::email_batch,
        },
    ]
}

/// Run the given steps in order, or every exercise when `steps` is empty.
///
/// Unknown steps are rejected before anything runs.
pub fn run_steps(steps: &[u32], reporter: &dyn Reporter) -> Result<()> {
    let all = catalog();

    let selected: Vec<Exercise> = if steps.is_empty() {
        all
    } else {
        steps
            .iter()
            .map(|step| {
                all.iter()
                    .find(|e| e.step == *step)
                    .copied()
                    .ok_or_else(|| {
                        CliError::InvalidInput(format!("Unknown exercise step: {}", step))
                    })
            })
            .collect::<Result<_>>()?
    };

    for exercise in &selected {
        debug!(step = exercise.step, title = exercise.title, "Running exercise");
        (exercise.run)(reporter)?;
    }

    info!(count = selected.len(), "Exercises complete");
    Ok(())
}

/// Payload describing a domain failure.
fn error_payload(err: &DomainError) -> Value {
    json!({
        "kind": err.kind(),
        "error": err.to_string(),
    })
}

/// Report a construction that must be rejected.
fn expect_rejected<T: Debug>(
    reporter: &dyn Reporter,
    step: u32,
    message: &str,
    result: std::result::Result<T, DomainError>,
) -> Result<DomainError> {
    match result {
        Err(e) => {
            reporter.report(step, message, &error_payload(&e));
            Ok(e)
        }
        Ok(value) => Err(CliError::Exercise(format!(
            "step {} accepted {:?}",
            step, value
        ))),
    }
}
