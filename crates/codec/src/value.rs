//! [`Value`] — the generic value tree bridging MessagePack and JSON.

/// Universal in-memory value produced by the MessagePack decoder and consumed
/// by the encoder and the JSON bridge.
///
/// Integers keep the full signed and unsigned 64-bit ranges losslessly:
/// [`Value::UInt`] is used only for magnitudes above `i64::MAX`. Floats record
/// the wire width ([`Value::F32`] vs [`Value::F64`]) so a decoded tree
/// re-encodes with the original tag; JSON-derived trees only carry `F64`.
///
/// Maps are ordered key/value pairs. Key order, duplicate keys, and
/// non-string keys survive decoding unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// MessagePack nil / JSON null.
    Nil,
    Bool(bool),
    /// Signed integer, also covering unsigned values up to `i64::MAX`.
    Int(i64),
    /// Unsigned integer above `i64::MAX`.
    UInt(u64),
    /// 32-bit float as decoded from a float32 tag.
    F32(f32),
    /// 64-bit float.
    F64(f64),
    /// UTF-8 text (MessagePack str family).
    Str(String),
    /// Raw bytes (MessagePack bin family). No JSON equivalent; the JSON
    /// bridge projects it to a data URI string.
    Bin(Vec<u8>),
    Array(Vec<Value>),
    /// Ordered key/value pairs, duplicates and non-string keys preserved.
    Map(Vec<(Value, Value)>),
    /// Extension value, opaque tag plus payload.
    Ext(Ext),
}

/// MessagePack extension: a type tag byte plus raw payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ext {
    pub tag: i8,
    pub data: Vec<u8>,
}

impl Ext {
    pub fn new(tag: i8, data: Vec<u8>) -> Self {
        Self { tag, data }
    }
}

impl Value {
    /// Convenience constructor for a map from string keys.
    pub fn map_from<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (Value::Str(k.into()), v))
                .collect(),
        )
    }
}
