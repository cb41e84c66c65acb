//! CSV ingestion implementation.
//!
//! The accepted dialect:
//!
//! - the first non-blank line is the header; names are trimmed
//! - every following line is split on `,`, trimmed, and zipped positionally against the header
//! - `"` has no special meaning, so a quoted comma still splits the field
//! - rows shorter than the header keep their missing cells missing; cells past the header width
//!   are dropped
//! - blank lines are skipped
//! - bytes that are not valid UTF-8 are replaced with U+FFFD, so the affected cells come out
//!   garbled instead of failing the load
//!
//! None of these situations is an error. [`super::ingest_from_path`] reports them to an
//! [`super::IngestionObserver`] as warnings instead.

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

use crate::error::IngestionResult;
use crate::types::DataSet;

/// Dataset plus what ingestion noticed on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CsvReport {
    pub(crate) dataset: DataSet,
    /// Lines whose field count differs from the header's.
    pub(crate) ragged_rows: usize,
    /// Lines (header included) with at least one byte sequence that is not UTF-8.
    pub(crate) invalid_utf8_lines: usize,
}

/// Ingest a CSV file into an in-memory [`DataSet`].
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> IngestionResult<DataSet> {
    read_csv_path(path.as_ref()).map(|report| report.dataset)
}

/// Ingest CSV text that is already in memory.
pub fn ingest_csv_from_str(input: &str) -> IngestionResult<DataSet> {
    ingest_csv_from_reader(input.as_bytes())
}

/// Ingest CSV data from any reader.
pub fn ingest_csv_from_reader<R: Read>(reader: R) -> IngestionResult<DataSet> {
    read_csv(reader).map(|report| report.dataset)
}

pub(crate) fn read_csv_path(path: &Path) -> IngestionResult<CsvReport> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}

pub(crate) fn read_csv<R: Read>(reader: R) -> IngestionResult<CsvReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut invalid_utf8_lines = 0usize;
    let (columns, lossy) = decode_record(rdr.byte_headers()?, usize::MAX);
    invalid_utf8_lines += usize::from(lossy);
    let width = columns.len();

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut ragged_rows = 0usize;
    for result in rdr.byte_records() {
        let record = result?;
        if record.len() != width {
            ragged_rows += 1;
        }
        let (row, lossy) = decode_record(&record, width);
        invalid_utf8_lines += usize::from(lossy);
        rows.push(row);
    }

    Ok(CsvReport {
        dataset: DataSet::new(columns, rows),
        ragged_rows,
        invalid_utf8_lines,
    })
}

/// Decode the first `limit` fields, replacing invalid UTF-8. The flag is set when anything was
/// replaced.
fn decode_record(record: &csv::ByteRecord, limit: usize) -> (Vec<String>, bool) {
    let mut lossy = false;
    let fields = record
        .iter()
        .take(limit)
        .map(|field| {
            let text = String::from_utf8_lossy(field);
            lossy |= matches!(text, Cow::Owned(_));
            text.trim().to_owned()
        })
        .collect();
    (fields, lossy)
}
