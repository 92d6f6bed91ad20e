use thiserror::Error;

/// Errors produced by the strict MessagePack decoder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A length prefix or payload would read past the end of the buffer.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// The leading byte is not a MessagePack format marker (`0xc1` included).
    #[error("unrecognized format byte 0x{0:02x}")]
    InvalidMarker(u8),
    /// A str payload is not valid UTF-8.
    #[error("invalid utf-8 in string payload")]
    InvalidUtf8,
    /// Container nesting exceeds the decoder's depth limit.
    #[error("nesting depth exceeds limit")]
    DepthLimit,
    /// The buffer holds more than one top-level value.
    #[error("trailing bytes after value")]
    TrailingData,
}
