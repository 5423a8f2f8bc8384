//! Character sets accepted for template files.
//!
//! Names are matched case-insensitively. Anything `encoding_rs` knows by
//! label is accepted (`UTF-8`, `windows-1252`, `UTF-16LE`, `Shift_JIS`, ...).
//! A few names resolve differently than their web labels: `ISO-8859-1` and
//! `US-ASCII` are the real byte-for-byte charsets rather than aliases of
//! windows-1252, and plain `UTF-16` honours a byte order mark and falls back
//! to big-endian.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};
use std::fmt;
use std::str::FromStr;

use crate::core::DepTemplateError;

/// Encoding used to decode template override files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// ISO-8859-1: every byte is the code point of the same value.
    Latin1,
    /// 7-bit ASCII; bytes above `0x7F` are invalid.
    UsAscii,
    /// UTF-16 with byte order detection, big-endian without a mark.
    Utf16,
    Other(&'static Encoding),
}

impl Charset {
    pub const UTF_8: Self = Self::Other(encoding_rs::UTF_8);

    pub fn name(self) -> &'static str {
        match self {
            Self::Latin1 => "ISO-8859-1",
            Self::UsAscii => "US-ASCII",
            Self::Utf16 => "UTF-16",
            Self::Other(encoding) => encoding.name(),
        }
    }

    /// Decode `bytes` read from `path`. Byte order marks are kept as text,
    /// except for the one selecting the byte order of plain `UTF-16`.
    ///
    /// # Errors
    ///
    /// [`DepTemplateError::InvalidEncoding`] if `bytes` are not valid in this
    /// charset.
    pub fn decode(self, bytes: &[u8], path: &str) -> Result<String, DepTemplateError> {
        let decoded = match self {
            Self::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            Self::UsAscii => bytes
                .is_ascii()
                .then(|| bytes.iter().map(|&b| char::from(b)).collect()),
            Self::Utf16 => {
                let (encoding, body) = match bytes {
                    [0xFF, 0xFE, rest @ ..] => (UTF_16LE, rest),
                    [0xFE, 0xFF, rest @ ..] => (UTF_16BE, rest),
                    _ => (UTF_16BE, bytes),
                };
                decode_strict(encoding, body)
            }
            Self::Other(encoding) => decode_strict(encoding, bytes),
        };

        decoded.ok_or_else(|| DepTemplateError::InvalidEncoding {
            path: path.to_string(),
            charset: self.name().to_string(),
        })
    }
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

impl Default for Charset {
    fn default() -> Self {
        Self::UTF_8
    }
}

impl FromStr for Charset {
    type Err = DepTemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let normalized = label.to_ascii_lowercase().replace('_', "-");

        match normalized.as_str() {
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" | "l1" => return Ok(Self::Latin1),
            "us-ascii" | "ascii" | "iso646-us" => return Ok(Self::UsAscii),
            "utf-16" | "utf16" => return Ok(Self::Utf16),
            _ => {}
        }

        Encoding::for_label(label.as_bytes())
            .or_else(|| Encoding::for_label(normalized.as_bytes()))
            .filter(|encoding| *encoding != encoding_rs::REPLACEMENT)
            .map(Self::Other)
            .ok_or_else(|| DepTemplateError::UnsupportedCharset {
                charset: s.to_string(),
            })
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
