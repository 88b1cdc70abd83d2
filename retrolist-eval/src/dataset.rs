//! JSONL dataset reading and writing.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use thiserror::Error;

use crate::record::Record;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: invalid JSON record: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Read one record per non-blank line. Line numbers in errors are 1-based.
///
/// # Errors
///
/// Returns an error on I/O failure or the first line that is not a JSON
/// record.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<Record>, DatasetError> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let record = serde_json::from_str(trimmed).map_err(|source| DatasetError::InvalidLine {
            line: index + 1,
            source,
        })?;
        records.push(record);
    }
    log::debug!("read {} dataset records", records.len());
    Ok(records)
}

/// Write each item as one compact JSON line.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn write_records<W: Write, T: Serialize>(
    mut writer: W,
    items: &[T],
) -> Result<(), DatasetError> {
    for item in items {
        serde_json::to_writer(&mut writer, item).map_err(DatasetError::Encode)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
