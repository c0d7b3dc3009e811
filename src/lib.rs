//! VCF Cleaner - deduplicates and normalizes contacts in simplified vCard files.
//!
//! Parses a fixed subset of vCard properties (`BEGIN`/`END`, `VERSION`, `FN`,
//! `N`, `TEL;TYPE=`, `CATEGORIES`), merges duplicate phones and categories
//! within each contact, and writes the contacts back with normalized numbers
//! and a deterministic field order. Any other property line is kept as opaque
//! passthrough.
//!
//! # Architecture
//!
//! - **domain**: `PhoneNumber` value object
//! - **classifier**: maps each raw line to a `LineKind`
//! - **models**: `ContactRecord`, accumulation and serialization
//! - **transcoder**: whole-text parse/render and file entry points
//! - **metrics**: per-run `TranscodeReport`
//! - **config**: configuration from environment variables
//! - **error**: custom error types

pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod transcoder;

pub use classifier::{classify, LineKind};
pub use config::Config;
pub use domain::PhoneNumber;
pub use error::{ConfigError, EmptyRecordError, LineField, ParseError, TranscodeError};
pub use metrics::TranscodeReport;
pub use models::ContactRecord;
pub use transcoder::io::{clean, clean_with, parse_file, write_file};
pub use transcoder::{parse, render, FileTranscoder, DEFAULT_VERSION};
