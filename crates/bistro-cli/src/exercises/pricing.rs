//! Steps 1 and 2: prices and quantities.

use super::expect_rejected;
use crate::error::Result;
use bistro_domain::{LineItem, Price, Quantity, Reporter};
use serde_json::json;

pub(super) fn price(reporter: &dyn Reporter) -> Result<()> {
    let item = LineItem::new("Burger", Price::new(50.0)?, Quantity::new(1.0)?);
    reporter.report(
        1,
        "Burger priced through Price::new",
        &json!({ "item": item, "total": item.total() }),
    );

    expect_rejected(reporter, 1, "Negative price rejected", Price::new(-50.0))?;
    expect_rejected(
        reporter,
        1,
        "Price above the maximum rejected",
        Price::new(10_000.01),
    )?;
    Ok(())
}

pub(super) fn quantity(reporter: &dyn Reporter) -> Result<()> {
    let pizza = LineItem::new("Pizza", Price::new(15.0)?, Quantity::new(2.0)?);
    reporter.report(
        2,
        "Pizza order uses a validated quantity",
        &json!({ "order": pizza, "total": pizza.total() }),
    );

    let coffee = LineItem::new("Coffee", Price::new(3.0)?, Quantity::new(15.0)?);
    reporter.report(
        2,
        "Bulk coffee order stays within the limit",
        &json!({ "order": coffee, "total": coffee.total() }),
    );

    expect_rejected(reporter, 2, "Negative quantity rejected", Quantity::new(-3.0))?;
    expect_rejected(reporter, 2, "Huge quantity rejected", Quantity::new(50_000.0))?;
    expect_rejected(reporter, 2, "Fractional quantity rejected", Quantity::new(2.5))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_domain::NoopReporter;

    #[test]
    fn test_price_exercise() {
        price(&NoopReporter).unwrap();
    }

    #[test]
    fn test_quantity_exercise() {
        quantity(&NoopReporter).unwrap();
    }
}
