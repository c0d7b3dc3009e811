//! File-level entry points.
//!
//! Reading and writing are the only fatal failure points of a run; they are
//! wrapped in [`TranscodeError::Io`] together with the offending path.

use super::FileTranscoder;
use crate::config::Config;
use crate::error::{TranscodeError, TranscodeResult};
use crate::metrics::TranscodeReport;
use crate::models::ContactRecord;
use std::fs;
use std::path::Path;
use tracing::info;

fn read_text(path: &Path) -> TranscodeResult<String> {
    fs::read_to_string(path).map_err(|e| TranscodeError::io(path, e))
}

fn write_text(path: &Path, text: &str) -> TranscodeResult<()> {
    fs::write(path, text).map_err(|e| TranscodeError::io(path, e))
}

fn check_version(version: f64) -> TranscodeResult<()> {
    if Config::is_valid_version(version) {
        Ok(())
    } else {
        Err(TranscodeError::InvalidVersion(version))
    }
}

/// Read and parse a vCard file, collapsing phone types.
///
/// # Errors
///
/// Returns `TranscodeError::Io` if the file cannot be read.
pub fn parse_file(path: impl AsRef<Path>) -> TranscodeResult<Vec<ContactRecord>> {
    let path = path.as_ref();
    let text = read_text(path)?;
    Ok(FileTranscoder::new().parse(&text))
}

/// Render `records` and overwrite `path` with the result.
///
/// Empty records are skipped. The returned report covers the render only.
///
/// # Errors
///
/// Returns `TranscodeError::InvalidVersion` for a non-positive or non-finite
/// version, or `TranscodeError::Io` if the file cannot be written.
pub fn write_file(
    records: &[ContactRecord],
    path: impl AsRef<Path>,
    version: f64,
    include_other_info: bool,
) -> TranscodeResult<TranscodeReport> {
    check_version(version)?;

    let mut transcoder = FileTranscoder::new();
    let text = transcoder.render(records, version, include_other_info);
    write_text(path.as_ref(), &text)?;
    Ok(transcoder.take_report())
}

/// Clean `input` according to `config` and write the result to `output`.
///
/// `input` and `output` may be the same path; the input is fully read
/// before anything is written.
///
/// # Errors
///
/// Returns a `TranscodeError` if reading or writing fails or the configured
/// version is invalid.
pub fn clean_with(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &Config,
) -> TranscodeResult<TranscodeReport> {
    let (input, output) = (input.as_ref(), output.as_ref());
    check_version(config.vcard_version)?;

    let text = read_text(input)?;
    let mut transcoder = FileTranscoder::new().preserve_phone_type(config.preserve_phone_type);
    let records = transcoder.parse(&text);
    let cleaned = transcoder.render(&records, config.vcard_version, config.include_other_info);
    write_text(output, &cleaned)?;

    let report = transcoder.take_report();
    info!(
        "Cleaned {}: {} record(s) parsed, {} written, {} empty skipped, {} line(s) dropped",
        input.display(),
        report.records_parsed,
        report.records_written,
        report.empty_records_skipped,
        report.lines_dropped
    );
    Ok(report)
}

/// Clean the file at `path` in place with default settings
/// (version 3.0, no passthrough lines, phone types collapsed).
///
/// # Errors
///
/// Returns `TranscodeError::Io` if the file cannot be read or written.
pub fn clean(path: impl AsRef<Path>) -> TranscodeResult<TranscodeReport> {
    let path = path.as_ref();
    clean_with(path, path, &Config::default())
}
