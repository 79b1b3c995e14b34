//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input string is too short.
    #[error("phone number must be at least {min} digits")]
    TooShort {
        /// Minimum allowed number of digits.
        min: usize,
    },
    /// The input string is too long.
    #[error("phone number must be at most {max} digits")]
    TooLong {
        /// Maximum allowed number of digits.
        max: usize,
    },
    /// The input contains a character that is not a digit.
    #[error("phone number contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// A phone number.
///
/// Phone numbers are the account identity for the storefront. This type
/// provides basic validation only; it does not verify the number against any
/// numbering plan.
///
/// ## Constraints
///
/// - 5-20 digits
/// - An optional leading `+`
/// - No separators (spaces, dashes, parentheses)
///
/// ## Examples
///
/// ```
/// use shoplite_core::Phone;
///
/// // Valid phone numbers
/// assert!(Phone::parse("13800138000").is_ok());
/// assert!(Phone::parse("+8613800138000").is_ok());
///
/// // Invalid phone numbers
/// assert!(Phone::parse("").is_err());             // empty
/// assert!(Phone::parse("138 0013 8000").is_err()); // separators
/// assert!(Phone::parse("123").is_err());           // too short
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Minimum number of digits.
    pub const MIN_DIGITS: usize = 5;

    /// Maximum number of digits.
    pub const MAX_DIGITS: usize = 20;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Has fewer than 5 or more than 20 digits
    /// - Contains anything other than digits and an optional leading `+`
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        let digits = s.strip_prefix('+').unwrap_or(s);

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(PhoneError::InvalidCharacter(bad));
        }

        if digits.len() < Self::MIN_DIGITS {
            return Err(PhoneError::TooShort {
                min: Self::MIN_DIGITS,
            });
        }

        if digits.len() > Self::MAX_DIGITS {
            return Err(PhoneError::TooLong {
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_numbers() {
        assert!(Phone::parse("13800138000").is_ok());
        assert!(Phone::parse("+8613800138000").is_ok());
        assert!(Phone::parse("12345").is_ok());
        assert!(Phone::parse("+4915123456789").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Phone::parse(""), Err(PhoneError::Empty)));
    }

    #[test]
    fn test_parse_too_short() {
        assert!(matches!(
            Phone::parse("1234"),
            Err(PhoneError::TooShort { .. })
        ));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "1".repeat(21);
        assert!(matches!(
            Phone::parse(&long),
            Err(PhoneError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_separators() {
        assert!(matches!(
            Phone::parse("138 0013 8000"),
            Err(PhoneError::InvalidCharacter(' '))
        ));
        assert!(matches!(
            Phone::parse("138-0013-8000"),
            Err(PhoneError::InvalidCharacter('-'))
        ));
    }

    #[test]
    fn test_parse_rejects_inner_plus() {
        assert!(matches!(
            Phone::parse("1380+138000"),
            Err(PhoneError::InvalidCharacter('+'))
        ));
    }

    #[test]
    fn test_display() {
        let phone = Phone::parse("13800138000").unwrap();
        assert_eq!(format!("{phone}"), "13800138000");
    }

    #[test]
    fn test_serde_roundtrip() {
        let phone = Phone::parse("+8613800138000").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+8613800138000\"");

        let parsed: Phone = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, phone);
    }
}
