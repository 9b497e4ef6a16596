//! Operating hours - when a restaurant takes guests

use crate::error::Result;
use crate::hour::Hour;
use serde::{Deserialize, Serialize};

/// Opening and closing hour, possibly spanning midnight
///
/// The open interval is half-open: the opening hour is included, the closing
/// hour is not. When `opens > closes` the span wraps past midnight.
/// `opens == closes` describes an empty interval and is never open.
///
/// [`OperatingHours::is_open_at`] is the only place this rule lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperatingHours {
    opens: Hour,
    closes: Hour,
}

impl OperatingHours {
    /// Build operating hours from raw clock values
    ///
    /// # Errors
    /// The [`Hour`] error for the first field that is not a valid hour.
    ///
    /// # Examples
    ///
    /// ```
    /// use bistro_domain::{Hour, OperatingHours};
    ///
    /// let late_night = OperatingHours::new(22.0, 6.0).unwrap();
    /// assert!(late_night.is_open_at(Hour::new(2.0).unwrap()));
    /// assert!(!late_night.is_open_at(Hour::new(10.0).unwrap()));
    /// ```
    pub fn new(opens: f64, closes: f64) -> Result<Self> {
        Ok(Self::from_hours(Hour::new(opens)?, Hour::new(closes)?))
    }

    /// Build operating hours from validated hours
    pub fn from_hours(opens: Hour, closes: Hour) -> Self {
        Self { opens, closes }
    }

    /// Opening hour (inclusive)
    pub fn opens(&self) -> Hour {
        self.opens
    }

    /// Closing hour (exclusive)
    pub fn closes(&self) -> Hour {
        self.closes
    }

    /// Whether the span wraps past midnight
    pub fn crosses_midnight(&self) -> bool {
        self.opens > self.closes
    }

    /// Whether guests are taken during the given hour
    pub fn is_open_at(&self, hour: Hour) -> bool {
        if self.opens <= self.closes {
            hour >= self.opens && hour < self.closes
        } else {
            hour >= self.opens || hour < self.closes
        }
    }
}
