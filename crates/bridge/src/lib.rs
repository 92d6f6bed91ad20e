//! MessagePack ↔ JSON conversion pipelines.
//!
//! Four directional pipelines compose the byte-text transcoder, the
//! MessagePack codec, and the JSON bridge:
//!
//! - `MsgpackBase64ToJson` — decode Base64 → decode MessagePack → render JSON
//! - `JsonToMsgpackBase64` — parse JSON → encode MessagePack → encode Base64
//! - `MsgpackHexToJson` — decode hex → decode MessagePack → render JSON
//! - `JsonToMsgpackHex` — parse JSON → encode MessagePack → encode hex
//!
//! [`convert`] is the orchestrating entry point; per-stage failures map to a
//! small fixed set of sentinel strings and never propagate past it.
//! [`Session`] adds single-slot cancellation: a new request supersedes any
//! in-flight conversion, whose output is then discarded.

pub mod convert;
pub mod json;
pub mod options;
pub mod session;
pub mod transcode;

pub use convert::{accept, convert, DATA_TYPE_BASE64, DATA_TYPE_JSON};
pub use convert::{
    CONVERSION_FAILED, INVALID_BASE64, INVALID_HEX, INVALID_JSON, INVALID_MSGPACK,
};
pub use msgpack_bridge_codec::{Ext, Value};
pub use options::{ConvertMode, ConvertOptions, HexSeparator, Indent, TextEncoding};
pub use session::{Session, Ticket};
