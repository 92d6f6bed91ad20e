//! Byte-text transcoding: Base64 and delimited hex transport encodings, plus
//! plain text ↔ bytes with a selectable character set.

use thiserror::Error;

use msgpack_bridge_base64::{from_base64, to_base64};

use crate::options::{HexSeparator, TextEncoding};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranscodeError {
    #[error("invalid base64 input")]
    InvalidBase64,
    #[error("invalid hex input")]
    InvalidHex,
    #[error("input is not valid utf-8")]
    InvalidUtf8,
    #[error("input contains non-ascii data")]
    NonAscii,
}

/// Encodes bytes as standard padded Base64. Empty input yields empty text.
pub fn encode_base64(bytes: &[u8]) -> String {
    to_base64(bytes)
}

/// Decodes Base64 display text to bytes.
///
/// The input is trimmed first. Length not a multiple of four, characters
/// outside `[A-Za-z0-9+/=]`, or misplaced padding all reject the input.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, TranscodeError> {
    from_base64(text.trim()).map_err(|_| TranscodeError::InvalidBase64)
}

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Renders bytes as uppercase hex pairs joined by the separator.
pub fn encode_hex(bytes: &[u8], separator: HexSeparator) -> String {
    let sep = separator.as_str();
    let mut out = String::with_capacity(bytes.len() * (2 + sep.len()));
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push(HEX_UPPER[(byte >> 4) as usize] as char);
        out.push(HEX_UPPER[(byte & 0xf) as usize] as char);
    }
    out
}

/// Parses delimited hex display text to bytes.
///
/// Dashes, commas, and whitespace are stripped first; what remains must be an
/// even-length sequence of hex digits. Case-insensitive.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, TranscodeError> {
    let cleaned: Vec<u8> = text
        .bytes()
        .filter(|b| !matches!(b, b'-' | b',') && !b.is_ascii_whitespace())
        .collect();
    if cleaned.len() % 2 != 0 {
        return Err(TranscodeError::InvalidHex);
    }
    let mut out = Vec::with_capacity(cleaned.len() / 2);
    for pair in cleaned.chunks_exact(2) {
        let hi = hex_digit(pair[0]).ok_or(TranscodeError::InvalidHex)?;
        let lo = hex_digit(pair[1]).ok_or(TranscodeError::InvalidHex)?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decodes raw bytes to text in the selected character set.
///
/// A UTF-8 byte-order mark decodes to a leading U+FEFF that stays in the
/// text; it is not stripped, so re-encoding reproduces the original bytes.
pub fn bytes_to_text(bytes: &[u8], encoding: TextEncoding) -> Result<String, TranscodeError> {
    match encoding {
        TextEncoding::Utf8 => String::from_utf8(bytes.to_vec())
            .map_err(|_| TranscodeError::InvalidUtf8),
        TextEncoding::Ascii => {
            if bytes.is_ascii() {
                // ASCII is a subset of UTF-8.
                Ok(String::from_utf8_lossy(bytes).into_owned())
            } else {
                Err(TranscodeError::NonAscii)
            }
        }
    }
}

/// Encodes text to raw bytes in the selected character set.
pub fn text_to_bytes(text: &str, encoding: TextEncoding) -> Result<Vec<u8>, TranscodeError> {
    match encoding {
        TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
        TextEncoding::Ascii => {
            if text.is_ascii() {
                Ok(text.as_bytes().to_vec())
            } else {
                Err(TranscodeError::NonAscii)
            }
        }
    }
}
