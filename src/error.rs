//! Error types for the VCF cleaner.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Parse and empty-record errors are per-line / per-record and never abort a run;
//! only transcode (I/O) errors are fatal.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The structured field a line was expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineField {
    Phone,
    Name,
    Category,
}

impl fmt::Display for LineField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phone => write!(f, "phone"),
            Self::Name => write!(f, "name"),
            Self::Category => write!(f, "category"),
        }
    }
}

/// Errors raised when a line does not match its expected structured pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line did not match the pattern for its field
    #[error("No {kind} pattern matched line: {line}")]
    NoMatch { kind: LineField, line: String },
}

impl ParseError {
    pub(crate) fn no_match(kind: LineField, line: &str) -> Self {
        Self::NoMatch {
            kind,
            line: line.to_string(),
        }
    }
}

/// Serialization was attempted on a record without any phone number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Empty contact: {full_name:?} has no phone numbers")]
pub struct EmptyRecordError {
    /// Full name of the rejected record, for diagnostics
    pub full_name: String,
}

/// Fatal errors that abort a whole transcode run.
#[derive(Error, Debug)]
pub enum TranscodeError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested vCard version cannot be written
    #[error("Invalid vCard version: {0}")]
    InvalidVersion(f64),
}

impl TranscodeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with TranscodeError
pub type TranscodeResult<T> = Result<T, TranscodeError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
