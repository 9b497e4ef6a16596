//! Step 4: table seating.

use super::expect_rejected;
use crate::error::Result;
use bistro_domain::{Reporter, Table};
use serde_json::json;

pub(super) fn seating(reporter: &dyn Reporter) -> Result<()> {
    let mut table = Table::new(5.0, 4.0)?;
    table.seat_guests(3.0)?;
    reporter.report(4, "Table state stays valid", &json!({ "table": table }));

    expect_rejected(
        reporter,
        4,
        "Seating past capacity rejected",
        table.seat_guests(2.0),
    )?;
    reporter.report(
        4,
        "Rejected seating left the table unchanged",
        &json!({ "table": table, "available_seats": table.available_seats() }),
    );

    let mut empty = Table::new(3.0, 6.0)?;
    expect_rejected(
        reporter,
        4,
        "Negative guest count rejected",
        empty.seat_guests(-2.0),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_domain::NoopReporter;

    #[test]
    fn test_seating_exercise() {
        seating(&NoopReporter).unwrap();
    }
}
