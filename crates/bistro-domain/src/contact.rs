//! Customer contact details
//!
//! Email, phone and name are all text underneath, but each gets its own type
//! so one can never be passed where another is expected.

use crate::error::{DomainError, Result};
use crate::primitive::{ensure_non_empty, DomainPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shortest accepted phone number, dashes included
pub const MIN_PHONE_LEN: usize = 7;

/// Email address, trimmed and lower-cased
///
/// Structural check only: one `@`, a non-empty local part, and a domain with
/// a dot that neither touches the `@` nor ends the address. No DNS lookup.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse an email address
    ///
    /// # Errors
    /// `EmptyValue` for blank input, `InvalidFormat` for a malformed address.
    ///
    /// # Examples
    ///
    /// ```
    /// use bistro_domain::Email;
    ///
    /// let email = Email::new("  Alice@Example.com ").unwrap();
    /// assert_eq!(email.as_str(), "alice@example.com");
    /// assert!(Email::new("not-an-email").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self> {
        let normalized = ensure_non_empty(Self::NAME, raw)?.to_lowercase();
        let fail = |reason| Err(DomainError::invalid_format(Self::NAME, reason));

        if normalized.chars().any(char::is_whitespace) {
            return fail("must not contain whitespace");
        }
        let Some((local, domain)) = normalized.split_once('@') else {
            return fail("missing '@'");
        };
        if domain.contains('@') {
            return fail("must contain exactly one '@'");
        }
        if local.is_empty() {
            return fail("local part is empty");
        }
        if domain.is_empty() {
            return fail("domain part is empty");
        }
        match domain.rfind('.') {
            None => return fail("domain has no '.'"),
            Some(0) => return fail("'.' cannot follow '@'"),
            Some(dot) if dot == domain.len() - 1 => return fail("domain cannot end with '.'"),
            Some(_) => {}
        }

        Ok(Self(normalized))
    }

    /// Get the address as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after the `@`
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

/// Phone number made of digits and dashes, starting with a digit
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Parse a phone number
    ///
    /// # Errors
    /// `EmptyValue` for blank input; `InvalidFormat` when shorter than seven
    /// characters, not starting with a digit, or containing anything other
    /// than digits and `-`.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = ensure_non_empty(Self::NAME, raw)?;
        let fail = |reason| Err(DomainError::invalid_format(Self::NAME, reason));

        if trimmed.chars().count() < MIN_PHONE_LEN {
            return fail("must be at least 7 characters");
        }
        if !trimmed.starts_with(|c: char| c.is_ascii_digit()) {
            return fail("must start with a digit");
        }
        if !trimmed.chars().all(|c| c.is_ascii_digit() || c == '-') {
            return fail("may only contain digits and '-'");
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the number as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits only, dashes removed
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

/// A customer's display name, trimmed
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerName(String);

impl CustomerName {
    /// Parse a customer name
    ///
    /// # Errors
    /// `EmptyValue` if nothing is left after trimming.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = ensure_non_empty(Self::NAME, raw)?;
        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! text_primitive_impls {
    ($ty:ident, $name:literal) => {
        impl DomainPrimitive for $ty {
            type Raw = str;
            const NAME: &'static str = $name;

            fn parse(raw: &str) -> Result<Self> {
                Self::new(raw)
            }

            fn to_raw(&self) -> String {
                self.0.clone()
            }
        }

        impl FromStr for $ty {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self> {
                Self::new(&value)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = DomainError;

            fn try_from(value: &str) -> Result<Self> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_primitive_impls!(Email, "Email");
text_primitive_impls!(Phone, "Phone");
text_primitive_impls!(CustomerName, "CustomerName");

/// A customer with validated contact details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Display name
    pub name: CustomerName,

    /// Contact email
    pub email: Email,

    /// Contact phone
    pub phone: Phone,
}

impl Customer {
    /// Assemble a customer from already-validated parts
    pub fn new(name: CustomerName, email: Email, phone: Phone) -> Self {
        Self { name, email, phone }
    }

    /// Parse all three fields from raw text, failing on the first bad one
    pub fn parse(name: &str, email: &str, phone: &str) -> Result<Self> {
        Ok(Self {
            name: CustomerName::new(name)?,
            email: Email::new(email)?,
            phone: Phone::new(phone)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn email_kind(raw: &str) -> ErrorKind {
        Email::new(raw).unwrap_err().kind()
    }

    #[test]
    fn test_email_normalized() {
        let email = Email::new("Alice@Example.com").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn test_email_rejects_bad_structure() {
        assert_eq!(email_kind("not-an-email"), ErrorKind::InvalidFormat);
        assert_eq!(email_kind("John Doe"), ErrorKind::InvalidFormat);
        assert_eq!(email_kind("charlie@@double.com"), ErrorKind::InvalidFormat);
        assert_eq!(email_kind("a@b@c.com"), ErrorKind::InvalidFormat);
        assert_eq!(email_kind("@no-local-part.com"), ErrorKind::InvalidFormat);
        assert_eq!(email_kind("eve@"), ErrorKind::InvalidFormat);
        assert_eq!(email_kind("eve@localhost"), ErrorKind::InvalidFormat);
        assert_eq!(email_kind("eve@.com"), ErrorKind::InvalidFormat);
        assert_eq!(email_kind("eve@example."), ErrorKind::InvalidFormat);
        assert_eq!(email_kind("eve smith@example.com"), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_email_blank_is_empty_value() {
        assert_eq!(email_kind(""), ErrorKind::EmptyValue);
        assert_eq!(email_kind(" "), ErrorKind::EmptyValue);
    }

    #[test]
    fn test_email_error_does_not_echo_input() {
        let err = Email::new("secret-value").unwrap_err();
        assert!(!err.to_string().contains("secret-value"));
    }

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new(" 555-123-4567 ").unwrap();
        assert_eq!(phone.as_str(), "555-123-4567");
        assert_eq!(phone.digits(), "5551234567");
        assert!(Phone::new("5551234").is_ok());
    }

    #[test]
    fn test_phone_rejections() {
        assert_eq!(Phone::new("555-12").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert_eq!(Phone::new("-555-1234").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert_eq!(Phone::new("555-PIZZA").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert_eq!(Phone::new("555 123 4567").unwrap_err().kind(), ErrorKind::InvalidFormat);
        assert_eq!(Phone::new("   ").unwrap_err().kind(), ErrorKind::EmptyValue);
    }

    #[test]
    fn test_customer_name() {
        assert_eq!(CustomerName::new("  John Doe ").unwrap().as_str(), "John Doe");
        assert_eq!(CustomerName::new("   ").unwrap_err().kind(), ErrorKind::EmptyValue);
    }

    #[test]
    fn test_customer_parse() {
        let customer = Customer::parse("Jane Doe", "jane@example.com", "555-987-6543").unwrap();
        assert_eq!(customer.name.as_str(), "Jane Doe");
        assert_eq!(customer.email.as_str(), "jane@example.com");

        let err = Customer::parse("Jane Doe", "555-987-6543", "jane@example.com").unwrap_err();
        assert_eq!(err, DomainError::invalid_format("Email", "missing '@'"));
    }

    #[test]
    fn test_from_str_and_serde() {
        let email: Email = "Bob@Example.org".parse().unwrap();
        assert_eq!(email.to_string(), "bob@example.org");

        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"bob@example.org\"");
        assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
        assert!(serde_json::from_str::<CustomerName>("\"  \"").is_err());
    }
}
