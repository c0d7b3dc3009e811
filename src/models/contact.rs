//! Contact record built from the lines of one vCard.

use crate::classifier::{
    self, LineKind, BEGIN_MARKER, CATEGORIES_PREFIX, END_MARKER, FULL_NAME_PREFIX, NAME_PREFIX,
    VERSION_PREFIX,
};
use crate::domain::PhoneNumber;
use crate::error::{EmptyRecordError, LineField, ParseError, ParseResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

const NAME_SEPARATOR: char = ';';
const CATEGORY_SEPARATOR: &str = ",";

static NAME_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^N:([^;]*);([^;]*);([^;]*);([^;]*);([^;]*)")
        .expect("Failed to compile name line regex")
});

static CATEGORY_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^CATEGORIES:(.+)").expect("Failed to compile category line regex")
});

/// A single contact accumulated from classified lines.
///
/// Phones, categories and passthrough lines are sets, so repeated or
/// equivalent lines within one record merge instead of duplicating.
/// Categories and passthrough lines are kept ordered, which makes the
/// serialized output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    prefix: String,
    first_name: String,
    middle_name: String,
    surname: String,
    suffix: String,
    phones: HashSet<PhoneNumber>,
    categories: BTreeSet<String>,
    other_info: BTreeSet<String>,

    /// Type tokens as declared in the source, before any collapsing.
    /// Diagnostic only; never affects parsing or output.
    declared_phone_types: BTreeSet<String>,

    preserve_phone_type: bool,
}

impl ContactRecord {
    /// Create an empty record that collapses phone types to the default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record that keeps each phone's declared type.
    pub fn with_phone_type_preserved() -> Self {
        Self {
            preserve_phone_type: true,
            ..Self::default()
        }
    }

    /// Feed one raw line into the record.
    ///
    /// Service lines, blank lines and `FN:` lines are consumed without effect.
    /// A malformed name, phone or category line leaves the record unchanged
    /// and is reported through the returned error; callers treat it as non-fatal.
    pub fn add_line(&mut self, line: &str) -> ParseResult<()> {
        match classifier::classify(line) {
            LineKind::Begin
            | LineKind::End
            | LineKind::Version
            | LineKind::Blank
            | LineKind::FullName => Ok(()),
            LineKind::Name => self.add_name(line),
            LineKind::Phone => self.add_phone(line),
            LineKind::Category => self.add_categories(line),
            LineKind::Other => {
                self.other_info.insert(line.to_string());
                Ok(())
            }
        }
    }

    fn add_name(&mut self, line: &str) -> ParseResult<()> {
        let captures = NAME_LINE_REGEX
            .captures(line)
            .ok_or_else(|| ParseError::no_match(LineField::Name, line))?;

        self.surname = captures[1].to_string();
        self.first_name = captures[2].to_string();
        self.middle_name = captures[3].to_string();
        self.prefix = captures[4].to_string();
        self.suffix = captures[5].to_string();
        Ok(())
    }

    fn add_phone(&mut self, line: &str) -> ParseResult<()> {
        let declared = PhoneNumber::from_line(line, true)?;
        self.declared_phone_types
            .insert(declared.phone_type().to_string());

        let phone = if self.preserve_phone_type {
            declared
        } else {
            declared.into_default_type()
        };
        self.phones.insert(phone);
        Ok(())
    }

    fn add_categories(&mut self, line: &str) -> ParseResult<()> {
        let captures = CATEGORY_LINE_REGEX
            .captures(line)
            .ok_or_else(|| ParseError::no_match(LineField::Category, line))?;

        // Tokens are kept exactly as split, surrounding whitespace included
        self.categories.extend(
            captures[1]
                .split(CATEGORY_SEPARATOR)
                .map(str::to_string),
        );
        Ok(())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_name(&self) -> &str {
        &self.middle_name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn phones(&self) -> &HashSet<PhoneNumber> {
        &self.phones
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn other_info(&self) -> &BTreeSet<String> {
        &self.other_info
    }

    /// Phone type tokens seen in this record's source lines, uppercased.
    pub fn declared_phone_types(&self) -> &BTreeSet<String> {
        &self.declared_phone_types
    }

    /// Display name: prefix, first, middle, surname and suffix joined by a
    /// single space, skipping empty or whitespace-only parts.
    pub fn full_name(&self) -> String {
        [
            self.prefix.as_str(),
            self.first_name.as_str(),
            self.middle_name.as_str(),
            self.surname.as_str(),
            self.suffix.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// A record without phone numbers is empty and cannot be serialized.
    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }

    /// Rendered phone lines in ascending lexicographic order.
    pub fn sorted_phone_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.phones.iter().map(PhoneNumber::to_string).collect();
        lines.sort();
        lines
    }

    fn name_line(&self) -> String {
        let sep = NAME_SEPARATOR;
        format!(
            "{NAME_PREFIX}{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.surname, self.first_name, self.middle_name, self.prefix, self.suffix
        )
    }

    fn categories_line(&self) -> Option<String> {
        // `CATEGORIES:` alone would not parse back, so an all-empty set is omitted
        if self.categories.iter().all(String::is_empty) {
            return None;
        }
        let joined = self
            .categories
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(CATEGORY_SEPARATOR);
        Some(format!("{CATEGORIES_PREFIX}{joined}"))
    }

    /// Serialize the record as vCard text.
    ///
    /// Lines are emitted as begin marker, version (one decimal place), `FN`,
    /// `N`, optional `CATEGORIES`, sorted phones, optional passthrough lines
    /// and end marker, followed by two empty lines, all joined with `\n`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyRecordError` if the record has no phone numbers.
    pub fn serialize(
        &self,
        version: f64,
        include_other_info: bool,
    ) -> Result<String, EmptyRecordError> {
        if self.is_empty() {
            return Err(EmptyRecordError {
                full_name: self.full_name(),
            });
        }

        let mut lines = vec![
            BEGIN_MARKER.to_string(),
            format!("{VERSION_PREFIX}{version:.1}"),
            format!("{FULL_NAME_PREFIX}{}", self.full_name()),
            self.name_line(),
        ];

        if let Some(categories) = self.categories_line() {
            lines.push(categories);
        }

        lines.extend(self.sorted_phone_lines());

        if include_other_info {
            lines.extend(self.other_info.iter().cloned());
        }

        lines.push(END_MARKER.to_string());
        lines.push(String::new());
        lines.push(String::new());

        Ok(lines.join("\n"))
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]",
            self.full_name(),
            self.sorted_phone_lines().join(", ")
        )
    }
}
