//! Steps 3 and 8: contact fields and email filtering.

use super::expect_rejected;
use crate::error::Result;
use crate::intake::{ingest_customers, RawCustomer};
use bistro_domain::{Customer, CustomerName, Email, Phone, Reporter};
use serde_json::json;

pub(super) fn contact_fields(reporter: &dyn Reporter) -> Result<()> {
    let customer = Customer::parse("John Doe", "john@example.com", "555-123-4567")?;
    reporter.report(
        3,
        "Customer fields cannot be swapped",
        &json!({ "customer": customer }),
    );

    expect_rejected(reporter, 3, "A name is not an email", Email::new("John Doe"))?;
    expect_rejected(reporter, 3, "Letters are not a phone number", Phone::new("555-PIZZA"))?;
    expect_rejected(reporter, 3, "Blank name rejected", CustomerName::new("   "))?;
    Ok(())
}

fn sample_customers() -> Vec<RawCustomer> {
    [
        ("Alice", "alice@example.com"),
        ("Bob", "not-an-email"),
        ("Charlie", "charlie@@double.com"),
        ("Diana", "@no-local-part.com"),
        ("Eve", "eve@"),
        ("Frank", " "),
    ]
    .into_iter()
    .map(|(name, email)| RawCustomer {
        name: name.to_string(),
        email: email.to_string(),
    })
    .collect()
}

pub(super) fn email_batch(reporter: &dyn Reporter) -> Result<()> {
    let intake = ingest_customers(sample_customers());

    for skipped in &intake.skipped {
        reporter.report(
            8,
            "Skipped customer because email is invalid",
            &json!({
                "customer": skipped.item,
                "kind": skipped.kind,
                "error": skipped.reason,
            }),
        );
    }

    reporter.report(
        8,
        "Only customers with valid emails are kept",
        &json!({
            "kept": intake.accepted,
            "skipped": intake.skipped.len(),
        }),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_domain::NoopReporter;

    #[test]
    fn test_contact_exercise() {
        contact_fields(&NoopReporter).unwrap();
    }

    #[test]
    fn test_email_batch_keeps_one() {
        let intake = ingest_customers(sample_customers());
        assert_eq!(intake.accepted.len(), 1);
        email_batch(&NoopReporter).unwrap();
    }
}
