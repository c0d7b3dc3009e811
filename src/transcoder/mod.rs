//! Text-level transcoding of whole vCard files.
//!
//! Splits raw text into per-record line groups on end markers, builds one
//! [`ContactRecord`] per group, and concatenates serialized records back
//! into an output blob. Per-line and per-record failures are logged and
//! counted; they never abort the batch.

pub mod io;

use crate::classifier::{self, LineKind};
use crate::metrics::TranscodeReport;
use crate::models::ContactRecord;
use tracing::{debug, warn};

/// Default vCard version written by [`render`] callers that don't choose one.
pub const DEFAULT_VERSION: f64 = 3.0;

/// Lines of the input grouped by record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineGroups<'a> {
    /// One entry per terminated record, service and blank lines removed
    pub groups: Vec<Vec<&'a str>>,

    /// Lines after the last end marker that never got terminated
    pub trailing: Vec<&'a str>,
}

/// Split `text` into record line groups.
///
/// A group is closed by each end marker. Service lines and blank lines are
/// left out of the groups. Lines following the last end marker are
/// returned separately as `trailing`. A trailing `\r` is stripped from every
/// line, so CRLF input groups the same as LF input.
pub fn split_groups(text: &str) -> LineGroups<'_> {
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match classifier::classify(line) {
            LineKind::End => groups.push(std::mem::take(&mut current)),
            kind if kind.is_service() || kind == LineKind::Blank => {}
            _ => current.push(line),
        }
    }

    LineGroups {
        groups,
        trailing: current,
    }
}

/// Builds records from text and renders them back, keeping a run report.
#[derive(Debug, Clone, Default)]
pub struct FileTranscoder {
    preserve_phone_type: bool,
    report: TranscodeReport,
}

impl FileTranscoder {
    /// Create a transcoder that collapses phone types to the default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep (or collapse) the declared phone types of parsed records.
    pub fn preserve_phone_type(mut self, preserve: bool) -> Self {
        self.preserve_phone_type = preserve;
        self
    }

    /// Diagnostics accumulated by every `parse` and `render` call so far.
    pub fn report(&self) -> &TranscodeReport {
        &self.report
    }

    /// Take the accumulated report, leaving an empty one behind.
    pub fn take_report(&mut self) -> TranscodeReport {
        std::mem::take(&mut self.report)
    }

    fn new_record(&self) -> ContactRecord {
        if self.preserve_phone_type {
            ContactRecord::with_phone_type_preserved()
        } else {
            ContactRecord::new()
        }
    }

    /// Parse `text` into one record per terminated group, in input order.
    pub fn parse(&mut self, text: &str) -> Vec<ContactRecord> {
        let LineGroups { groups, trailing } = split_groups(text);

        if !trailing.is_empty() {
            warn!(
                "Discarding {} line(s) after the last END:VCARD",
                trailing.len()
            );
            self.report.record_trailing_lines(trailing.len());
        }

        let mut records = Vec::with_capacity(groups.len());
        for lines in groups {
            let mut record = self.new_record();
            for line in lines {
                if let Err(e) = record.add_line(line) {
                    warn!("Dropping line: {}", e);
                    self.report.record_dropped_line();
                }
            }
            debug!("Parsed contact: {}", record);
            self.report.record_parsed(record.declared_phone_types());
            records.push(record);
        }

        records
    }

    /// Serialize every non-empty record and concatenate them in input order.
    ///
    /// Empty records are skipped with a warning; the rest are unaffected.
    pub fn render(
        &mut self,
        records: &[ContactRecord],
        version: f64,
        include_other_info: bool,
    ) -> String {
        let mut output = String::new();
        for record in records {
            match record.serialize(version, include_other_info) {
                Ok(text) => {
                    output.push_str(&text);
                    self.report.record_written();
                }
                Err(e) => {
                    warn!("Skipping record: {}", e);
                    self.report.record_empty_skipped();
                }
            }
        }
        output
    }
}

/// Parse `text` with default options.
pub fn parse(text: &str) -> Vec<ContactRecord> {
    FileTranscoder::new().parse(text)
}

/// Render `records` as vCard text, skipping empty ones.
pub fn render(records: &[ContactRecord], version: f64, include_other_info: bool) -> String {
    FileTranscoder::new().render(records, version, include_other_info)
}
