//! Step 5: order ids and the repository.

use crate::error::Result;
use crate::intake::{ingest_orders, RawOrder};
use bistro_domain::{OrderStore, Reporter};
use bistro_store::InMemoryOrderRepository;
use serde_json::json;

fn sample_orders() -> Vec<RawOrder> {
    [
        ("", "Alice", 25.0),
        ("ORD-12345", "Bob", 30.0),
        ("ORD-12345", "Charlie", 15.0),
        ("not-a-number", "Diana", 20.0),
        ("ORD-67890", "Eve", 22.0),
    ]
    .into_iter()
    .map(|(order_id, customer_name, total)| RawOrder {
        order_id: order_id.to_string(),
        customer_name: customer_name.to_string(),
        total,
    })
    .collect()
}

pub(super) fn orders(reporter: &dyn Reporter) -> Result<()> {
    let mut repo = InMemoryOrderRepository::new();
    let intake = ingest_orders(sample_orders(), &mut repo);

    for skipped in &intake.skipped {
        reporter.report(
            5,
            "Skipped order because its id is malformed or already used",
            &json!({
                "order": skipped.item,
                "kind": skipped.kind,
                "error": skipped.reason,
            }),
        );
    }

    reporter.report(
        5,
        "Repository holds only well-formed unique ids",
        &json!({ "orders": repo.list(), "count": repo.len() }),
    );
    Ok(())
}
