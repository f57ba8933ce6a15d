//! Validated primitive types shared across the intake system.
//!
//! Each type enforces its invariant at construction time, so code that holds
//! one of these values never needs to re-check it.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The input text was shorter than the required minimum
    #[error("Text must be at least {min} characters")]
    TooShort { min: usize },
    /// The input text exceeded the permitted maximum
    #[error("Text must be at most {max} characters")]
    TooLong { max: usize },
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one
/// non-whitespace character. The input is automatically trimmed of leading and
/// trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Creates a `NonEmptyText` whose trimmed length must fall within
    /// `min..=max` characters.
    pub fn bounded(input: impl AsRef<str>, min: usize, max: usize) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        let len = trimmed.chars().count();
        if len < min {
            return Err(TextError::TooShort { min });
        }
        if len > max {
            return Err(TextError::TooLong { max });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing an email address.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EmailError {
    /// The input was not a syntactically plausible email address
    #[error("Invalid email address")]
    Invalid,
}

/// A syntactically valid email address.
///
/// The check is deliberately shallow: one `@`, a non-empty local part, and a
/// dotted domain with no whitespace. Deliverability is not verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses an email address from the given input, trimming surrounding
    /// whitespace first.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, EmailError> {
        let trimmed = input.as_ref().trim();
        if trimmed.chars().any(char::is_whitespace) {
            return Err(EmailError::Invalid);
        }

        let (local, domain) = trimmed.split_once('@').ok_or(EmailError::Invalid)?;
        if local.is_empty() || domain.contains('@') {
            return Err(EmailError::Invalid);
        }

        // A dotted domain with non-empty labels, e.g. "mail.example.com".
        if domain.split('.').any(str::is_empty) || !domain.contains('.') {
            return Err(EmailError::Invalid);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing a phone number.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PhoneError {
    /// The input carried fewer than the minimum number of digits
    #[error("Phone number must contain at least {min} digits")]
    TooFewDigits { min: usize },
}

/// Minimum number of digits required for a phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

/// A phone number carrying at least [`MIN_PHONE_DIGITS`] digits.
///
/// Formatting characters (`+`, spaces, dashes, parentheses, dots) are allowed
/// and preserved; only the digit count is validated, which keeps the check
/// locale-agnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parses a phone number from the given input.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, PhoneError> {
        let trimmed = input.as_ref().trim();
        let digits = trimmed.chars().filter(char::is_ascii_digit).count();
        if digits < MIN_PHONE_DIGITS {
            return Err(PhoneError::TooFewDigits {
                min: MIN_PHONE_DIGITS,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the phone number as entered, surrounding whitespace removed.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::parse(&s).map_err(serde::de::Error::custom)
    }
}
