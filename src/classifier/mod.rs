//! Line classification for simplified vCard text.
//!
//! Every raw line maps to exactly one [`LineKind`]. Checks run in a fixed
//! priority order, so a line that could match several prefixes always gets
//! the same kind.

use crate::domain::PHONE_PREFIX;

pub const BEGIN_MARKER: &str = "BEGIN:VCARD";
pub const END_MARKER: &str = "END:VCARD";
pub const VERSION_PREFIX: &str = "VERSION:";
pub const NAME_PREFIX: &str = "N:";
pub const CATEGORIES_PREFIX: &str = "CATEGORIES:";
pub const FULL_NAME_PREFIX: &str = "FN:";

/// Semantic kind of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `END:VCARD`
    End,
    /// `BEGIN:VCARD`
    Begin,
    /// `VERSION:...`
    Version,
    /// `N:...`
    Name,
    /// `TEL;...`
    Phone,
    /// `CATEGORIES:...`
    Category,
    /// `FN:...`, always regenerated from the name parts
    FullName,
    /// Empty or whitespace-only
    Blank,
    /// Any other property, kept verbatim
    Other,
}

impl LineKind {
    /// Record boundaries and version lines carry no contact data.
    pub fn is_service(self) -> bool {
        matches!(self, Self::Begin | Self::End | Self::Version)
    }
}

/// Classify a single line (without its line terminator).
pub fn classify(line: &str) -> LineKind {
    if line == END_MARKER {
        LineKind::End
    } else if line == BEGIN_MARKER {
        LineKind::Begin
    } else if line.starts_with(VERSION_PREFIX) {
        LineKind::Version
    } else if line.starts_with(NAME_PREFIX) {
        LineKind::Name
    } else if line.starts_with(PHONE_PREFIX) {
        LineKind::Phone
    } else if line.starts_with(CATEGORIES_PREFIX) {
        LineKind::Category
    } else if line.starts_with(FULL_NAME_PREFIX) {
        LineKind::FullName
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Other
    }
}
