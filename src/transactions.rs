//! Loading transaction lists from disk
//!
//! Two layouts are accepted:
//! - `*.json`: a JSON array of strings
//! - anything else: one transaction per line, as raw bytes

use crate::Result;
use std::path::Path;
use tracing::debug;

/// Read an ordered transaction list from `path`
///
/// Line-delimited files are split on `\n` without any text decoding, so
/// records may hold arbitrary bytes. A trailing `\r` is stripped from each
/// record. Empty lines in the middle are kept (an empty record is a valid
/// transaction) but the terminator after the last record is dropped.
pub fn load_transactions(path: impl AsRef<Path>) -> Result<Vec<Vec<u8>>> {
    let path = path.as_ref();
    let content = std::fs::read(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let transactions = if is_json {
        let records: Vec<String> = serde_json::from_slice(&content)?;
        records.into_iter().map(String::into_bytes).collect()
    } else {
        split_lines(&content)
    };

    debug!(
        path = %path.display(),
        count = transactions.len(),
        "loaded transactions"
    );
    Ok(transactions)
}

fn split_lines(content: &[u8]) -> Vec<Vec<u8>> {
    if content.is_empty() {
        return Vec::new();
    }
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    body.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect()
}
