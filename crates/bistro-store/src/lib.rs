//! Bistro Storage Layer
//!
//! Implements the OrderStore trait with an in-memory map.
//!
//! # Architecture
//!
//! - Records are keyed by their validated `OrderId`
//! - The store only answers "has this id been used"; whether the id is
//!   well-formed was settled when the `OrderId` was constructed
//! - Storage lives for the lifetime of the process; nothing is persisted
//!
//! # Examples
//!
//! ```
//! use bistro_domain::{OrderId, OrderRecord, OrderStore};
//! use bistro_store::InMemoryOrderRepository;
//!
//! let mut repo = InMemoryOrderRepository::new();
//! let id = OrderId::new("ORD-12345").unwrap();
//! repo.add(OrderRecord::new(id.clone(), "Bob", 30.0)).unwrap();
//! assert!(repo.add(OrderRecord::new(id, "Charlie", 15.0)).is_err());
//! assert_eq!(repo.len(), 1);
//! ```

#![warn(missing_docs)]

use bistro_domain::{DomainError, ErrorKind, OrderId, OrderRecord, OrderStore};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during storage operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An order with this id is already stored
    #[error("Duplicate order id: {0}")]
    Duplicate(OrderId),
}

impl StoreError {
    /// The domain error kind this failure corresponds to
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Duplicate(_) => ErrorKind::DuplicateIdentity,
        }
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(id) => DomainError::DuplicateIdentity(id.to_string()),
        }
    }
}

/// In-memory implementation of OrderStore
///
/// `list` returns records in insertion order. Callers should not depend on
/// that.
///
/// # Thread Safety
///
/// `add` checks for the key and then writes. Share a repository across
/// threads only behind a lock held for the whole call.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: HashMap<OrderId, OrderRecord>,
    insertion_order: Vec<OrderId>,
}

impl InMemoryOrderRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an order with this id is stored
    pub fn contains(&self, id: &OrderId) -> bool {
        self.orders.contains_key(id)
    }
}

impl OrderStore for InMemoryOrderRepository {
    type Error = StoreError;

    fn add(&mut self, record: OrderRecord) -> Result<(), Self::Error> {
        if self.orders.contains_key(&record.order_id) {
            warn!(order_id = %record.order_id, "Rejected duplicate order id");
            return Err(StoreError::Duplicate(record.order_id));
        }

        debug!(order_id = %record.order_id, "Stored order");
        self.insertion_order.push(record.order_id.clone());
        self.orders.insert(record.order_id.clone(), record);
        Ok(())
    }

    fn get(&self, id: &OrderId) -> Option<&OrderRecord> {
        self.orders.get(id)
    }

    fn list(&self) -> Vec<&OrderRecord> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.orders.get(id))
            .collect()
    }

    fn len(&self) -> usize {
        self.orders.len()
    }
}
