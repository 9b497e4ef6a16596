//! Order lines built from validated prices and quantities

use crate::price::Price;
use crate::quantity::Quantity;
use serde::{Deserialize, Serialize};

/// One line of an order: an item, its unit price and how many were ordered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Menu item name
    pub item_name: String,

    /// Price of one unit
    pub unit_price: Price,

    /// Units ordered
    pub quantity: Quantity,
}

impl LineItem {
    /// Create a new line item
    pub fn new(item_name: impl Into<String>, unit_price: Price, quantity: Quantity) -> Self {
        Self {
            item_name: item_name.into(),
            unit_price,
            quantity,
        }
    }

    /// Line total
    ///
    /// Both factors are bounded, so the result lies in `0..=1_000_000`.
    pub fn total(&self) -> f64 {
        self.unit_price.value() * f64::from(self.quantity.value())
    }
}
