//! Batch intake of raw records.
//!
//! Each raw item is validated on its own. A failure skips that item, logs a
//! warning and moves on; it never aborts the batch.

use crate::error::Result;
use bistro_domain::{DomainError, Email, ErrorKind, OrderId, OrderRecord, OrderStore};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// An order as it arrives from outside, before any validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOrder {
    /// Unvalidated order id
    #[serde(default)]
    pub order_id: String,
    /// Customer display name
    #[serde(default)]
    pub customer_name: String,
    /// Order total
    #[serde(default)]
    pub total: f64,
}

/// A customer contact as it arrives from outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCustomer {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Unvalidated email address
    #[serde(default)]
    pub email: String,
}

/// A customer whose email has been validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailContact {
    /// Display name
    pub name: String,
    /// Validated, lower-cased email
    pub email: Email,
}

/// An item the intake rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skipped<T> {
    /// Position of the item in its batch
    pub index: usize,
    /// The raw item as received
    pub item: T,
    /// Kind of failure
    pub kind: ErrorKind,
    /// Rendered error message
    pub reason: String,
}

/// Result of ingesting a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Intake<T, R> {
    /// Items that passed validation, in batch order
    pub accepted: Vec<T>,
    /// Items that failed, in batch order
    pub skipped: Vec<Skipped<R>>,
}

impl<T, R> Default for Intake<T, R> {
    fn default() -> Self {
        Self {
            accepted: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<T, R> Intake<T, R> {
    fn skip(&mut self, index: usize, item: R, err: &DomainError) {
        self.skip_with(index, item, err.kind(), err.to_string());
    }

    fn skip_with(&mut self, index: usize, item: R, kind: ErrorKind, reason: String) {
        warn!(index, kind = kind.as_str(), reason = %reason, "Skipping item");
        self.skipped.push(Skipped {
            index,
            item,
            kind,
            reason,
        });
    }
}

/// Decode one JSON document into a raw item.
///
/// Callers skip a document of the wrong shape as `InvalidFormat`, the same
/// kind a malformed text field gets.
fn decode<R: DeserializeOwned>(doc: &Value) -> std::result::Result<R, String> {
    R::deserialize(doc).map_err(|e| format!("malformed record: {}", e))
}

fn store_order<S>(item: &RawOrder, store: &mut S) -> std::result::Result<OrderId, DomainError>
where
    S: OrderStore,
    S::Error: Into<DomainError>,
{
    let order_id = OrderId::new(&item.order_id)?;
    let record = OrderRecord::new(order_id.clone(), item.customer_name.clone(), item.total);
    store.add(record).map_err(Into::into)?;
    Ok(order_id)
}

fn parse_contact(item: &RawCustomer) -> std::result::Result<EmailContact, DomainError> {
    Ok(EmailContact {
        name: item.name.clone(),
        email: Email::new(&item.email)?,
    })
}

/// Validate each raw order and add the survivors to `store`.
///
/// Returns the ids that were stored and the items that were skipped, either
/// for a malformed id or for an id the store already holds.
pub fn ingest_orders<S>(raw: Vec<RawOrder>, store: &mut S) -> Intake<OrderId, RawOrder>
where
    S: OrderStore,
    S::Error: Into<DomainError>,
{
    let mut intake = Intake::default();

    for (index, item) in raw.into_iter().enumerate() {
        match store_order(&item, store) {
            Ok(order_id) => {
                debug!(index, order_id = %order_id, "Accepted order");
                intake.accepted.push(order_id);
            }
            Err(e) => intake.skip(index, item, &e),
        }
    }

    intake
}

/// Like [`ingest_orders`], but starting from untyped JSON documents.
///
/// A document that does not decode into a [`RawOrder`] is skipped like any
/// other bad item; the rest of the batch still goes through.
pub fn ingest_order_documents<S>(docs: Vec<Value>, store: &mut S) -> Intake<OrderId, Value>
where
    S: OrderStore,
    S::Error: Into<DomainError>,
{
    let mut intake = Intake::default();

    for (index, doc) in docs.into_iter().enumerate() {
        let item: RawOrder = match decode(&doc) {
            Ok(item) => item,
            Err(reason) => {
                intake.skip_with(index, doc, ErrorKind::InvalidFormat, reason);
                continue;
            }
        };

        match store_order(&item, store) {
            Ok(order_id) => {
                debug!(index, order_id = %order_id, "Accepted order");
                intake.accepted.push(order_id);
            }
            Err(e) => intake.skip(index, doc, &e),
        }
    }

    intake
}

/// Keep the customers whose email parses.
pub fn ingest_customers(raw: Vec<RawCustomer>) -> Intake<EmailContact, RawCustomer> {
    let mut intake = Intake::default();

    for (index, item) in raw.into_iter().enumerate() {
        match parse_contact(&item) {
            Ok(contact) => intake.accepted.push(contact),
            Err(e) => intake.skip(index, item, &e),
        }
    }

    intake
}

/// Like [`ingest_customers`], but starting from untyped JSON documents.
pub fn ingest_customer_documents(docs: Vec<Value>) -> Intake<EmailContact, Value> {
    let mut intake = Intake::default();

    for (index, doc) in docs.into_iter().enumerate() {
        let item: RawCustomer = match decode(&doc) {
            Ok(item) => item,
            Err(reason) => {
                intake.skip_with(index, doc, ErrorKind::InvalidFormat, reason);
                continue;
            }
        };

        match parse_contact(&item) {
            Ok(contact) => intake.accepted.push(contact),
            Err(e) => intake.skip(index, doc, &e),
        }
    }

    intake
}

/// Read a JSON array of documents.
///
/// Only the outer array has to be well-formed; each element is decoded later
/// on its own.
pub fn read_documents<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
