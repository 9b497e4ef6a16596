//! Domain error types
//!
//! Every failure carries the name of the field that was rejected and a fixed
//! description of the broken rule. Raw input is never copied into an error.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Discriminant of a [`DomainError`], for callers that branch on the kind of
/// failure rather than its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Numeric value outside its permitted bound
    OutOfRange,
    /// Value required to be a whole number is not
    NotInteger,
    /// Required text is empty or whitespace-only
    EmptyValue,
    /// Text fails a structural pattern
    InvalidFormat,
    /// An entity operation would break its invariant
    InvariantViolation,
    /// Identifier already present in a repository
    DuplicateIdentity,
}

impl ErrorKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::OutOfRange => "out_of_range",
            ErrorKind::NotInteger => "not_integer",
            ErrorKind::EmptyValue => "empty_value",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::InvariantViolation => "invariant_violation",
            ErrorKind::DuplicateIdentity => "duplicate_identity",
        }
    }
}

/// Errors raised by smart constructors, entities and repositories
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Numeric value outside its permitted bound
    #[error("{field} is out of range: {reason}")]
    OutOfRange {
        /// Name of the rejected field
        field: &'static str,
        /// Which bound was crossed
        reason: &'static str,
    },

    /// Value required to be a whole number is not
    #[error("{field} must be a whole number")]
    NotInteger {
        /// Name of the rejected field
        field: &'static str,
    },

    /// Required text is empty after trimming
    #[error("{field} cannot be empty")]
    EmptyValue {
        /// Name of the rejected field
        field: &'static str,
    },

    /// Text fails a structural pattern
    #[error("{field} has an invalid format: {reason}")]
    InvalidFormat {
        /// Name of the rejected field
        field: &'static str,
        /// Which structural rule failed
        reason: &'static str,
    },

    /// Entity state would leave its invariant
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Identifier already used in a repository
    #[error("Duplicate identity: {0}")]
    DuplicateIdentity(String),
}

impl DomainError {
    /// The kind of failure, independent of field and message
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::OutOfRange { .. } => ErrorKind::OutOfRange,
            DomainError::NotInteger { .. } => ErrorKind::NotInteger,
            DomainError::EmptyValue { .. } => ErrorKind::EmptyValue,
            DomainError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            DomainError::InvariantViolation(_) => ErrorKind::InvariantViolation,
            DomainError::DuplicateIdentity(_) => ErrorKind::DuplicateIdentity,
        }
    }

    pub(crate) fn out_of_range(field: &'static str, reason: &'static str) -> Self {
        DomainError::OutOfRange { field, reason }
    }

    pub(crate) fn invalid_format(field: &'static str, reason: &'static str) -> Self {
        DomainError::InvalidFormat { field, reason }
    }
}
