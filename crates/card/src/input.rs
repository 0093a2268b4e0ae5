use anyhow::{Context, Result};
use std::io::BufRead;

/// Removes spaces so `4532 0151 1283 0366` passed as one argument becomes a
/// single number.
pub fn normalize(token: &str) -> String {
    token.replace(' ', "")
}

pub fn from_args(args: &[String]) -> Vec<String> {
    args.iter().map(|arg| normalize(arg)).collect()
}

/// Every whitespace-separated token of every non-blank line.
///
/// Bytes that are not UTF-8 are replaced with U+FFFD, so a malformed token
/// fails the checksum instead of aborting the batch.
pub fn from_reader<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut numbers = Vec::new();

    for line in reader.split(b'\n') {
        let line = line.context("Error reading stdin")?;
        let line = String::from_utf8_lossy(&line);
        numbers.extend(line.split_whitespace().map(normalize));
    }

    Ok(numbers)
}
