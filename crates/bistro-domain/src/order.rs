//! Order identity and order records

use crate::error::{DomainError, Result};
use crate::primitive::{ensure_non_empty, DomainPrimitive};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// "ORD-" followed by at least five ASCII digits
static ORDER_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ORD-[0-9]{5,}$").expect("order id pattern is valid"));

/// Identifier of an order, e.g. `ORD-12345`
///
/// Only well-formedness is checked here. Whether an id has already been used
/// is a question for the repository holding the orders.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(String);

impl OrderId {
    /// Parse an order id
    ///
    /// # Errors
    /// `EmptyValue` for blank input, `InvalidFormat` if the trimmed text does
    /// not match `ORD-` plus five or more digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use bistro_domain::OrderId;
    ///
    /// let id = OrderId::new(" ORD-12345 ").unwrap();
    /// assert_eq!(id.as_str(), "ORD-12345");
    /// assert!(OrderId::new("not-a-number").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = ensure_non_empty(Self::NAME, raw)?;
        if !ORDER_ID_PATTERN.is_match(trimmed) {
            return Err(DomainError::invalid_format(
                Self::NAME,
                "expected 'ORD-' followed by at least 5 digits",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the id as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric part after `ORD-`
    pub fn sequence(&self) -> &str {
        &self.0["ORD-".len()..]
    }
}

impl DomainPrimitive for OrderId {
    type Raw = str;
    const NAME: &'static str = "OrderId";

    fn parse(raw: &str) -> Result<Self> {
        Self::new(raw)
    }

    fn to_raw(&self) -> String {
        self.0.clone()
    }
}

impl FromStr for OrderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for OrderId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An order as kept by an order repository
///
/// Only the id is a validated primitive; the name and total are carried as
/// given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Unique order id
    pub order_id: OrderId,

    /// Name of the ordering customer
    pub customer_name: String,

    /// Order total
    pub total: f64,
}

impl OrderRecord {
    /// Create a new order record
    pub fn new(order_id: OrderId, customer_name: impl Into<String>, total: f64) -> Self {
        Self {
            order_id,
            customer_name: customer_name.into(),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_order_id_creation() {
        let id = OrderId::new("ORD-12345").unwrap();
        assert_eq!(id.as_str(), "ORD-12345");
        assert_eq!(id.sequence(), "12345");
        assert!(OrderId::new("ORD-0000012345").is_ok());
    }

    #[test]
    fn test_order_id_trimmed() {
        assert_eq!(OrderId::new("\tORD-67890 ").unwrap().as_str(), "ORD-67890");
    }

    #[test]
    fn test_order_id_rejections() {
        assert_eq!(OrderId::new("").unwrap_err().kind(), ErrorKind::EmptyValue);
        assert_eq!(OrderId::new("not-a-number").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert_eq!(OrderId::new("ORD-1234").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert_eq!(OrderId::new("ord-12345").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert_eq!(OrderId::new("ORD-12345x").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert_eq!(OrderId::new("XORD-12345").unwrap_err().kind(), ErrorKind::InvalidFormat);
        // Non-ASCII digits do not count
        assert_eq!(OrderId::new("ORD-١٢٣٤٥").unwrap_err().kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_order_record_serializes_id_as_string() {
        let record = OrderRecord::new(OrderId::new("ORD-12345").unwrap(), "Bob", 30.0);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["order_id"], "ORD-12345");
        assert_eq!(json["customer_name"], "Bob");
    }
}
