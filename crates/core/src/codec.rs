//! Binary codec for vocabulary tables.
//!
//! The on-disk format is a headerless stream of fixed-width records,
//! one per entry in table order: `left: u32 LE`, `right: u32 LE`.
//! The entry count is recovered from the file size alone, so the byte
//! length must be an exact multiple of the record size.

use crate::error::{Result, VocabError};
use crate::vocab::{Symbol, VocabEntry, VocabTable};
use std::fs;
use std::path::Path;

/// Size in bytes of one serialized entry.
pub const RECORD_SIZE: usize = 8;

/// Serialize a table into its binary record stream.
///
/// The output length is always `RECORD_SIZE * table.len()`.
pub fn encode(table: &VocabTable) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(table.len() * RECORD_SIZE);

    for entry in table.entries() {
        bytes.extend_from_slice(&entry.left.to_le_bytes());
        bytes.extend_from_slice(&entry.right.to_le_bytes());
    }

    bytes
}

/// Deserialize a table from its binary record stream.
///
/// The record at byte offset `RECORD_SIZE * i` becomes entry `i`.
/// Fails when the byte length is not a whole number of records.
pub fn decode(bytes: &[u8]) -> Result<VocabTable> {
    if bytes.len() % RECORD_SIZE != 0 {
        return Err(VocabError::Format(format!(
            "byte length {} is not a multiple of the record size {}",
            bytes.len(),
            RECORD_SIZE
        )));
    }

    let entries = bytes
        .chunks_exact(RECORD_SIZE)
        .map(|record| {
            let left = Symbol::from_le_bytes(record[..4].try_into().expect("4-byte field"));
            let right = Symbol::from_le_bytes(record[4..].try_into().expect("4-byte field"));
            VocabEntry::new(left, right)
        })
        .collect();

    Ok(VocabTable::from_entries(entries))
}

/// Write a table to a file.
pub fn write_file(path: &Path, table: &VocabTable) -> Result<()> {
    fs::write(path, encode(table)).map_err(|e| VocabError::io(path, e))
}

/// Read a table back from a file.
pub fn read_file(path: &Path) -> Result<VocabTable> {
    let bytes = fs::read(path).map_err(|e| VocabError::io(path, e))?;
    decode(&bytes)
}
