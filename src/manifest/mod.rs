//! Tab-separated delivery manifest reader.
//!
//! Accepted layout: one header row, then one line per shipped item with the
//! columns `code, description, document_number, size, quantity, color,
//! transfer_key`, taken by position. Header names are not interpreted and
//! extra trailing columns are ignored.

mod normalize;

pub use normalize::{RawRecord, normalize, parse_quantity};

use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};

use crate::error::Error;
use crate::fonts::winansi_to_char;
use crate::model::Row;

pub const REQUIRED_COLUMNS: usize = 7;

pub fn parse_path(path: &Path) -> Result<Vec<Row>, Error> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => Error::Io(
            std::io::Error::new(e.kind(), format!("{}: {}", e, path.display())),
        ),
        _ => Error::Io(e),
    })?;
    parse_reader(file)
}

pub fn parse_bytes(input: &[u8]) -> Result<Vec<Row>, Error> {
    parse_reader(input)
}

pub fn parse_reader(input: impl Read) -> Result<Vec<Row>, Error> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let found = reader.byte_headers()?.len();
    if found < REQUIRED_COLUMNS {
        return Err(Error::MissingColumns {
            found,
            required: REQUIRED_COLUMNS,
        });
    }

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    let mut record = ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        // Blank lines come through as a single empty field
        if record.iter().all(|f| f.iter().all(u8::is_ascii_whitespace)) {
            continue;
        }
        match normalize(raw_record(&record)) {
            Some(row) => rows.push(row),
            None => {
                dropped += 1;
                log::debug!(
                    "Dropping manifest line {} without document number",
                    record.position().map_or(0, |p| p.line())
                );
            }
        }
    }

    log::debug!("Parsed {} manifest rows ({} dropped)", rows.len(), dropped);
    Ok(rows)
}

fn raw_record(record: &ByteRecord) -> RawRecord {
    let field = |i: usize| record.get(i).map(decode_field).unwrap_or_default();
    RawRecord {
        code: field(0),
        description: field(1),
        document_number: field(2),
        size: field(3),
        quantity: field(4),
        color: field(5),
        transfer_key: field(6),
    }
}

/// UTF-8 when valid, otherwise Windows-1252 (what spreadsheet exports on
/// Windows usually produce).
fn decode_field(bytes: &[u8]) -> String {
    let text = match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| winansi_to_char(b)).collect(),
    };
    text.trim().to_string()
}
