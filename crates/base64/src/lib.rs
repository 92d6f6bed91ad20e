//! Base64 encoding and decoding with the standard padded alphabet.
//!
//! The decoder is strict: input length must be a multiple of four, every
//! character must come from `[A-Za-z0-9+/=]`, and `=` may only appear as a
//! one- or two-character suffix.
//!
//! # Example
//!
//! ```
//! use msgpack_bridge_base64::{to_base64, from_base64};
//!
//! let data = b"hello world";
//! let encoded = to_base64(data);
//! let decoded = from_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod from_base64;
mod to_base64;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use from_base64::from_base64;
pub use to_base64::to_base64;

/// Error type for base64 decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input contains a character outside the standard alphabet.
    InvalidCharacter,
    /// The input length is not a multiple of four.
    InvalidLength,
    /// Padding appears anywhere other than a legal 1-2 character suffix.
    InvalidPadding,
}

impl std::fmt::Display for Base64Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Base64Error::InvalidCharacter => write!(f, "invalid base64 character"),
            Base64Error::InvalidLength => {
                write!(f, "base64 length must be a multiple of 4")
            }
            Base64Error::InvalidPadding => write!(f, "misplaced base64 padding"),
        }
    }
}

impl std::error::Error for Base64Error {}
