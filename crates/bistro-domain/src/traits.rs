//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Implementations live in other crates.

use crate::{OrderId, OrderRecord};
use serde_json::Value;

/// Trait for storing orders keyed by their id
///
/// Implemented by the infrastructure layer (bistro-store). An implementation
/// must reject a record whose id is already stored; the id's format is
/// already guaranteed by [`OrderId`].
pub trait OrderStore {
    /// Error type for store operations
    type Error;

    /// Insert a record, failing if its id is already present
    fn add(&mut self, record: OrderRecord) -> Result<(), Self::Error>;

    /// Get a record by id
    fn get(&self, id: &OrderId) -> Option<&OrderRecord>;

    /// All stored records. Order is not part of the contract.
    fn list(&self) -> Vec<&OrderRecord>;

    /// Number of stored records
    fn len(&self) -> usize;

    /// Whether the store holds no records
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sink for human-readable progress reports
///
/// Reporting never fails and never feeds back into domain behavior.
pub trait Reporter {
    /// Record one outcome of a numbered step
    fn report(&self, step: u32, message: &str, payload: &Value);
}

/// Reporter that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&self, _step: u32, _message: &str, _payload: &Value) {}
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, step: u32, message: &str, payload: &Value) {
        (**self).report(step, message, payload)
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&self, step: u32, message: &str, payload: &Value) {
        (**self).report(step, message, payload)
    }
}
