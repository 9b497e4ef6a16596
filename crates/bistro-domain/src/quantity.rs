//! Quantity module - how many of an item go on one order line

use crate::error::{DomainError, Result};
use crate::primitive::{ensure_integer, ensure_range, DomainPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Most units of one item a single order may ask for
pub const MAX_QUANTITY: u32 = 100;

/// A whole number of units in `1..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Create a quantity
    ///
    /// # Errors
    /// `NotInteger` for fractional input (checked first), `OutOfRange` for
    /// zero, negatives and anything above 100.
    pub fn new(raw: f64) -> Result<Self> {
        let whole = ensure_integer(Self::NAME, raw)?;
        let whole = ensure_range(Self::NAME, whole, 1.0..=f64::from(MAX_QUANTITY))?;
        Ok(Self(whole as u32))
    }

    /// Get the number of units
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl DomainPrimitive for Quantity {
    type Raw = f64;
    const NAME: &'static str = "Quantity";

    fn parse(raw: &f64) -> Result<Self> {
        Self::new(*raw)
    }

    fn to_raw(&self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<f64> for Quantity {
    type Error = DomainError;

    fn try_from(raw: f64) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
