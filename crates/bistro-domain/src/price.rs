//! Price module - monetary amounts on the menu

use crate::error::{DomainError, Result};
use crate::primitive::{ensure_range, DomainPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest amount a single price may carry
pub const MAX_PRICE: f64 = 10_000.0;

/// A monetary amount in `0..=10_000`
///
/// Constructed only through [`Price::new`]. Deserialization goes through the
/// same check, so a `Price` read from JSON is as trustworthy as one built in
/// code.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Create a price
    ///
    /// # Errors
    /// Returns `OutOfRange` if the amount is negative, above 10,000 or NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use bistro_domain::Price;
    ///
    /// assert_eq!(Price::new(50.0).unwrap().value(), 50.0);
    /// assert!(Price::new(-50.0).is_err());
    /// ```
    pub fn new(amount: f64) -> Result<Self> {
        let amount = ensure_range(Self::NAME, amount, 0.0..=MAX_PRICE)?;
        // -0.0 passes the range check; store it as 0.0
        Ok(Self(amount + 0.0))
    }

    /// Get the amount
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl DomainPrimitive for Price {
    type Raw = f64;
    const NAME: &'static str = "Price";

    fn parse(raw: &f64) -> Result<Self> {
        Self::new(*raw)
    }

    fn to_raw(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(amount: f64) -> Result<Self> {
        Self::new(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
