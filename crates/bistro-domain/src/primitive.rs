//! Validated scalar pattern
//!
//! A domain primitive wraps a raw number or string and can only be obtained
//! through its smart constructor. Once built it never changes, so holding a
//! value of the type is proof that the predicate held.

use crate::error::{DomainError, Result};
use std::borrow::Borrow;
use std::ops::RangeInclusive;

/// A scalar that exists only in validated form.
///
/// Each concrete type implements `parse` by calling its own `new`, which is
/// the single place its predicate is checked. `to_raw` hands back the
/// normalized primitive in the shape `parse` accepts, so any value can be fed
/// through the constructor again.
pub trait DomainPrimitive: Sized {
    /// Raw input accepted by the smart constructor (`f64` or `str`)
    type Raw: ?Sized + ToOwned;

    /// Name used in error messages
    const NAME: &'static str;

    /// Validate raw input and wrap it
    fn parse(raw: &Self::Raw) -> Result<Self>;

    /// The normalized underlying primitive
    fn to_raw(&self) -> <Self::Raw as ToOwned>::Owned;
}

/// Feed a primitive's underlying value back through its constructor.
///
/// Always succeeds for a value that was itself produced by `parse`.
pub fn reparse<P: DomainPrimitive>(value: &P) -> Result<P> {
    let raw = value.to_raw();
    P::parse(raw.borrow())
}

/// Reject anything that is not a finite whole number.
pub(crate) fn ensure_integer(field: &'static str, raw: f64) -> Result<f64> {
    if raw.is_finite() && raw.fract() == 0.0 {
        Ok(raw)
    } else {
        Err(DomainError::NotInteger { field })
    }
}

/// Reject values outside an inclusive range. NaN is never in range.
pub(crate) fn ensure_range(
    field: &'static str,
    raw: f64,
    range: RangeInclusive<f64>,
) -> Result<f64> {
    if raw.is_nan() {
        return Err(DomainError::out_of_range(field, "must be a number"));
    }
    if raw < *range.start() {
        return Err(DomainError::out_of_range(field, below_reason(*range.start())));
    }
    if raw > *range.end() {
        return Err(DomainError::out_of_range(field, "exceeds maximum"));
    }
    Ok(raw)
}

fn below_reason(min: f64) -> &'static str {
    if min > 0.0 {
        "must be positive"
    } else {
        "cannot be negative"
    }
}

/// Whole number in `1..=u32::MAX`, as used for counts and identifiers.
pub(crate) fn ensure_positive_integer(field: &'static str, raw: f64) -> Result<u32> {
    let whole = ensure_integer(field, raw)?;
    let whole = ensure_range(field, whole, 1.0..=f64::from(u32::MAX))?;
    Ok(whole as u32)
}

/// Trim and reject text that is left empty.
pub(crate) fn ensure_non_empty<'a>(field: &'static str, raw: &'a str) -> Result<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(DomainError::EmptyValue { field })
    } else {
        Ok(trimmed)
    }
}
