//! Export file reading with lossy UTF-8 decoding.

use std::path::Path;

use csv::ReaderBuilder;
use roster_model::{Record, SourceTable};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

use super::header::header_names;

/// Check that the input exists before any processing starts.
pub fn ensure_input_exists(path: &Path) -> Result<()> {
    std::fs::metadata(path)
        .map(|_| ())
        .map_err(|e| io_error(path, e))
}

/// Decode bytes as UTF-8, dropping malformed sequences.
///
/// Returns the decoded text and the number of bytes dropped.
pub fn decode_lossy(bytes: &[u8]) -> (String, usize) {
    let mut text = String::with_capacity(bytes.len());
    let mut dropped = 0;
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        dropped += chunk.invalid().len();
    }
    (text, dropped)
}

/// Read an export file into its header row and records.
///
/// The whole file is loaded into memory. Each call does an independent read.
pub fn read_source_table(path: &Path) -> Result<SourceTable> {
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    let (text, dropped) = decode_lossy(&bytes);
    if dropped > 0 {
        warn!(
            path = %path.display(),
            dropped_bytes = dropped,
            "dropped malformed UTF-8 bytes"
        );
    }
    let table = parse_source_table(&text, path)?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        "loaded export"
    );
    Ok(table)
}

/// Parse CSV text whose first row is the header.
///
/// `path` is only used for error reporting. Rows shorter than the header read
/// as empty cells; cells beyond the header are ignored.
pub fn parse_source_table(text: &str, path: &Path) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = header_names(reader.headers().map_err(|e| csv_error(path, e))?);
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| csv_error(path, e))?;
        let mut record = Record::new();
        for (column, value) in headers.iter().zip(row.iter()) {
            record.insert(column.as_str(), value);
        }
        records.push(record);
    }
    Ok(SourceTable::new(headers, records))
}

fn io_error(path: &Path, source: std::io::Error) -> IngestError {
    if source.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}
