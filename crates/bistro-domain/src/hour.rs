//! Hour of the day on a 24-hour clock

use crate::error::{DomainError, Result};
use crate::primitive::{ensure_integer, ensure_range, DomainPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole clock hour in `0..=23`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub struct Hour(u8);

impl Hour {
    /// Last valid hour of the day
    pub const MAX: u8 = 23;

    /// Create an hour
    ///
    /// # Errors
    /// `NotInteger` for fractional input, `OutOfRange` outside `0..=23`.
    pub fn new(raw: f64) -> Result<Self> {
        let whole = ensure_integer(Self::NAME, raw)?;
        let whole = ensure_range(Self::NAME, whole, 0.0..=f64::from(Self::MAX))?;
        Ok(Self(whole as u8))
    }

    /// Get the hour
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl DomainPrimitive for Hour {
    type Raw = f64;
    const NAME: &'static str = "Hour";

    fn parse(raw: &f64) -> Result<Self> {
        Self::new(*raw)
    }

    fn to_raw(&self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<f64> for Hour {
    type Error = DomainError;

    fn try_from(raw: f64) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> Self {
        hour.0
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}
