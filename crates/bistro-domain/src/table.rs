//! Table entity - a dining table that seats guests up to its capacity

use crate::error::{DomainError, Result};
use crate::primitive::ensure_positive_integer;
use serde::Serialize;

/// A dining table
///
/// The table number is its identity and never changes. The guest count can
/// only move through [`Table::seat_guests`], which checks
/// `current_guests + count <= capacity` before committing, so
/// `0 <= current_guests <= capacity` holds after every call.
///
/// There is no operation that lowers the guest count.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    number: u32,
    capacity: u32,
    current_guests: u32,
}

impl Table {
    /// Create an empty table
    ///
    /// # Errors
    /// `NotInteger` or `OutOfRange` unless both the number and the capacity
    /// are positive whole numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use bistro_domain::Table;
    ///
    /// let mut table = Table::new(5.0, 4.0).unwrap();
    /// table.seat_guests(3.0).unwrap();
    /// assert!(table.seat_guests(2.0).is_err());
    /// assert_eq!(table.current_guests(), 3);
    /// ```
    pub fn new(number: f64, capacity: f64) -> Result<Self> {
        let number = ensure_positive_integer("Table number", number)?;
        let capacity = ensure_positive_integer("Table capacity", capacity)?;
        Ok(Self {
            number,
            capacity,
            current_guests: 0,
        })
    }

    /// Seat a party at this table
    ///
    /// # Errors
    /// `NotInteger`/`OutOfRange` if `count` is not a positive whole number,
    /// `InvariantViolation` if the party does not fit. The guest count is
    /// unchanged on any error.
    pub fn seat_guests(&mut self, count: f64) -> Result<()> {
        let count = ensure_positive_integer("Guest count", count)?;
        let seated = self
            .current_guests
            .checked_add(count)
            .filter(|total| *total <= self.capacity)
            .ok_or_else(|| {
                DomainError::InvariantViolation(format!(
                    "seating {} guest(s) at table {} exceeds capacity {} ({} already seated)",
                    count, self.number, self.capacity, self.current_guests
                ))
            })?;
        self.current_guests = seated;
        Ok(())
    }

    /// Table number (identity)
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Maximum number of guests
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Guests currently seated
    pub fn current_guests(&self) -> u32 {
        self.current_guests
    }

    /// Seats still free
    pub fn available_seats(&self) -> u32 {
        self.capacity - self.current_guests
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_new_table_is_empty() {
        let table = Table::new(5.0, 4.0).unwrap();
        assert_eq!(table.number(), 5);
        assert_eq!(table.capacity(), 4);
        assert_eq!(table.current_guests(), 0);
        assert_eq!(table.available_seats(), 4);
    }

    #[test]
    fn test_invalid_table_rejected() {
        assert_eq!(Table::new(0.0, 4.0).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(Table::new(-1.0, 4.0).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(Table::new(1.5, 4.0).unwrap_err().kind(), ErrorKind::NotInteger);
        assert_eq!(Table::new(3.0, 0.0).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(Table::new(3.0, 2.5).unwrap_err().kind(), ErrorKind::NotInteger);
    }

    #[test]
    fn test_seat_then_overflow() {
        let mut table = Table::new(5.0, 4.0).unwrap();
        table.seat_guests(3.0).unwrap();
        assert_eq!(table.current_guests(), 3);

        let err = table.seat_guests(2.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        assert_eq!(table.current_guests(), 3);
    }

    #[test]
    fn test_fill_to_capacity() {
        let mut table = Table::new(1.0, 4.0).unwrap();
        table.seat_guests(2.0).unwrap();
        table.seat_guests(2.0).unwrap();
        assert_eq!(table.current_guests(), 4);
        assert_eq!(table.available_seats(), 0);
        assert!(table.seat_guests(1.0).is_err());
    }

    #[test]
    fn test_bad_guest_counts_leave_state_untouched() {
        let mut table = Table::new(3.0, 6.0).unwrap();
        assert_eq!(table.seat_guests(-2.0).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(table.seat_guests(0.0).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(table.seat_guests(1.5).unwrap_err().kind(), ErrorKind::NotInteger);
        assert_eq!(table.current_guests(), 0);
    }
}
