//! Restaurant record

use crate::hour::Hour;
use crate::operating_hours::OperatingHours;
use serde::{Deserialize, Serialize};

/// A named restaurant with its operating hours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Display name
    pub name: String,

    /// When guests are taken
    pub hours: OperatingHours,
}

impl Restaurant {
    /// Create a new restaurant
    pub fn new(name: impl Into<String>, hours: OperatingHours) -> Self {
        Self {
            name: name.into(),
            hours,
        }
    }

    /// Whether the restaurant is open during the given hour
    pub fn is_open_at(&self, hour: Hour) -> bool {
        self.hours.is_open_at(hour)
    }
}
