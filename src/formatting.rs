//! Text and Number Formatting Utilities
//!
//! This module provides the label helpers used by the node status dashboard:
//! client version strings, thousands separators and byte sizes.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref NON_VERSION_CHARS: Regex = Regex::new(r"[^0-9.]").unwrap();
}

const BYTES_PER_GIB: u128 = 1024 * 1024 * 1024;

/// Client name and version extracted from a node's `web3_clientVersion` string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientVersion {
    /// First slash-separated segment, as reported
    pub client: String,
    /// Digits and dots of the last slash-separated segment
    pub version: String,
}

impl ClientVersion {
    /// Parse a slash-delimited identifier such as `Geth/v1.10.2/linux-amd64/go1.16`.
    ///
    /// The client is the first segment and the version is the last one with every
    /// character other than an ASCII digit or `.` removed. Input without a slash is
    /// both first and last segment.
    pub fn parse(raw: &str) -> Self {
        let client = raw.split('/').next().unwrap_or_default();
        let last = raw.rsplit('/').next().unwrap_or_default();

        Self {
            client: client.to_string(),
            version: NON_VERSION_CHARS.replace_all(last, "").into_owned(),
        }
    }
}

impl fmt::Display for ClientVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.client, self.version)
    }
}

/// Format a client version string as `"{client} {version}"`
pub fn parse_client_version(raw: &str) -> String {
    ClientVersion::parse(raw).to_string()
}

/// Insert thousands separators into the integer part of a number's text form.
///
/// A comma goes before every group of three digits counted from the right of a
/// digit run, but only where the preceding character is a word character, so
/// `-1234567` becomes `-1,234,567` and the fractional part is left alone.
///
/// The text comes from `Display`, which never uses exponent notation and keeps the
/// sign of negative zero: `1e21f64` groups all 22 digits and `-0.0f64` gives `-0`.
/// Pass a pre-rendered string to control the text form.
pub fn format_thousands<T: fmt::Display>(value: T) -> String {
    let text = value.to_string();
    let bytes = text.as_bytes();
    let int_end = text.find('.').unwrap_or(text.len());

    // digits_from[i] = length of the ASCII digit run starting at i
    let mut digits_from = vec![0usize; bytes.len() + 1];
    for i in (0..bytes.len()).rev() {
        if bytes[i].is_ascii_digit() {
            digits_from[i] = digits_from[i + 1] + 1;
        }
    }

    let mut out = String::with_capacity(text.len() + text.len() / 3);
    for (i, ch) in text.char_indices() {
        if i > 0 && i < int_end {
            let run = digits_from[i];
            let prev = bytes[i - 1];
            if run > 0 && run % 3 == 0 && (prev.is_ascii_alphanumeric() || prev == b'_') {
                out.push(',');
            }
        }
        out.push(ch);
    }
    out
}

/// Format a byte count as gibibytes with two decimals, e.g. `"2.00 GB"`.
///
/// Returns `"N/A"` for a missing or zero count. Halfway values round up.
pub fn format_bytes(bytes: impl Into<Option<u64>>) -> String {
    match bytes.into() {
        None | Some(0) => "N/A".to_string(),
        Some(bytes) => {
            let hundredths = (u128::from(bytes) * 100 + BYTES_PER_GIB / 2) / BYTES_PER_GIB;
            format!("{}.{:02} GB", hundredths / 100, hundredths % 100)
        }
    }
}
