//! PhoneNumber value object.

use crate::error::{LineField, ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Phone line prefix, including the parameter separator.
pub const PHONE_PREFIX: &str = "TEL;";

/// Type assigned to every number unless type preservation is requested.
pub const DEFAULT_PHONE_TYPE: &str = "CELL";

static PHONE_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^TEL;TYPE=(\w+):(.*)").expect("Failed to compile phone line regex")
});

/// A normalized telephone entry of a contact.
///
/// The number keeps only ASCII digits and `+`; the type is an uppercase token.
/// Two entries are equal (and hash identically) when both the normalized
/// number and the type match, so duplicates collapse inside a set.
///
/// # Example
///
/// ```
/// use vcf_cleaner::domain::PhoneNumber;
///
/// let phone = PhoneNumber::from_line("TEL;TYPE=work:(555) 123-4567", false).unwrap();
/// assert_eq!(phone.number(), "5551234567");
/// assert_eq!(phone.phone_type(), "CELL");
/// assert_eq!(phone.to_string(), "TEL;TYPE=CELL:5551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    number: String,
    phone_type: String,
}

impl PhoneNumber {
    /// Parse a `TEL;TYPE=<word>:<rest>` line.
    ///
    /// The type token is uppercased, and every character of the number that is
    /// not a digit or `+` is stripped. Unless `preserve_type` is set, the parsed
    /// type is replaced by [`DEFAULT_PHONE_TYPE`]. A number part without any
    /// digit normalizes to an empty number, which renders as `TEL;TYPE=<type>:`
    /// and parses back to the same entry.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::NoMatch` if the line does not have the phone shape.
    pub fn from_line(line: &str, preserve_type: bool) -> ParseResult<Self> {
        let captures = PHONE_LINE_REGEX
            .captures(line)
            .ok_or_else(|| ParseError::no_match(LineField::Phone, line))?;

        let declared_type = captures[1].to_uppercase();
        let number = Self::normalize_number(&captures[2]);

        let phone = Self {
            number,
            phone_type: declared_type,
        };

        Ok(if preserve_type {
            phone
        } else {
            phone.into_default_type()
        })
    }

    /// Keep only digits and `+`.
    fn normalize_number(raw: &str) -> String {
        raw.chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect()
    }

    /// Same number with the type collapsed to [`DEFAULT_PHONE_TYPE`].
    pub(crate) fn into_default_type(self) -> Self {
        Self {
            number: self.number,
            phone_type: DEFAULT_PHONE_TYPE.to_string(),
        }
    }

    /// The normalized number (digits and `+` only).
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The uppercase type token.
    pub fn phone_type(&self) -> &str {
        &self.phone_type
    }
}

// Renders the original line shape
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}TYPE={}:{}", PHONE_PREFIX, self.phone_type, self.number)
    }
}
