//! Step 6: operating hours.

use super::expect_rejected;
use crate::error::Result;
use bistro_domain::{Hour, OperatingHours, Reporter, Restaurant};
use serde_json::json;

pub(super) fn hours(reporter: &dyn Reporter) -> Result<()> {
    let diner = Restaurant::new("Joe's Diner", OperatingHours::new(22.0, 6.0)?);
    let test_hour = Hour::new(2.0)?;

    reporter.report(
        6,
        "Overnight opening hours are checked in one place",
        &json!({
            "restaurant": diner,
            "crosses_midnight": diner.hours.crosses_midnight(),
            "test_hour": test_hour,
            "is_open": diner.is_open_at(test_hour),
        }),
    );

    expect_rejected(
        reporter,
        6,
        "Invalid hours rejected at creation",
        OperatingHours::new(25.0, -5.0),
    )?;
    Ok(())
}
