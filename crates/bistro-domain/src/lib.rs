//! Bistro Domain Layer
//!
//! Domain primitives for a small restaurant ordering model. Raw numbers and
//! strings enter through smart constructors and come out as types that can
//! only hold valid values.
//!
//! ## Key Concepts
//!
//! - **Domain primitives**: `Price`, `Quantity`, `Hour`, `Email`, `Phone`,
//!   `CustomerName`, `OrderId`, each a newtype with a private field
//! - **Table**: an entity whose guest count never exceeds its capacity
//! - **OperatingHours**: a value object that decides whether it is open,
//!   including spans past midnight
//! - **OrderStore**: the repository boundary that enforces unique order ids
//!
//! ## Architecture
//!
//! - Construction is the only validation point; there are no setters
//! - Failures are [`DomainError`] values with a [`ErrorKind`], never sentinels
//! - Storage and reporting are trait boundaries implemented elsewhere

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contact;
pub mod error;
pub mod hour;
pub mod menu;
pub mod operating_hours;
pub mod order;
pub mod price;
pub mod primitive;
pub mod quantity;
pub mod restaurant;
pub mod table;
pub mod traits;

// Re-exports for convenience
pub use contact::{Customer, CustomerName, Email, Phone};
pub use error::{DomainError, ErrorKind, Result};
pub use hour::Hour;
pub use menu::LineItem;
pub use operating_hours::OperatingHours;
pub use order::{OrderId, OrderRecord};
pub use price::Price;
pub use primitive::DomainPrimitive;
pub use quantity::Quantity;
pub use restaurant::Restaurant;
pub use table::Table;
pub use traits::{NoopReporter, OrderStore, Reporter};
