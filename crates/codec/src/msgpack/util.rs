//! One-shot MessagePack helpers.

use super::{DecodeError, Decoder, Encoder};
use crate::Value;

/// Encodes a value tree to canonical MessagePack bytes.
pub fn encode(value: &Value) -> Vec<u8> {
    let mut encoder = Encoder::new();
    encoder.encode(value)
}

/// Decodes a MessagePack byte sequence into a value tree.
pub fn decode(blob: &[u8]) -> Result<Value, DecodeError> {
    let mut decoder = Decoder::new();
    decoder.decode(blob)
}
