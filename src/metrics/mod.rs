//! Per-run diagnostics for a transcode pass.
//!
//! Counts what was parsed, written and dropped, and which phone types were
//! declared in the source. None of it feeds back into parsing.

use serde::Serialize;
use std::collections::BTreeSet;

/// Summary of a single parse/render run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranscodeReport {
    /// Records built from terminated line groups
    pub records_parsed: u64,

    /// Records serialized into the output
    pub records_written: u64,

    /// Records skipped because they had no phone number
    pub empty_records_skipped: u64,

    /// Name, phone or category lines dropped as malformed
    pub lines_dropped: u64,

    /// Lines after the last end marker, discarded unprocessed
    pub trailing_lines_discarded: u64,

    /// Uppercased phone type tokens declared anywhere in the input
    pub phone_types_seen: BTreeSet<String>,
}

impl TranscodeReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a parsed record and the phone types it declared.
    pub fn record_parsed<'a>(&mut self, phone_types: impl IntoIterator<Item = &'a String>) {
        self.records_parsed += 1;
        self.phone_types_seen.extend(phone_types.into_iter().cloned());
    }

    /// Record a malformed line.
    pub fn record_dropped_line(&mut self) {
        self.lines_dropped += 1;
    }

    /// Record lines left over after the last end marker.
    pub fn record_trailing_lines(&mut self, count: usize) {
        self.trailing_lines_discarded += count as u64;
    }

    /// Record a successfully serialized record.
    pub fn record_written(&mut self) {
        self.records_written += 1;
    }

    /// Record an empty record excluded from output.
    pub fn record_empty_skipped(&mut self) {
        self.empty_records_skipped += 1;
    }
}
