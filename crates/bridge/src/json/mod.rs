//! JSON projection of the value tree: rendering with indentation modes and
//! strict parsing back into a tree.
//!
//! Binary and extension values have no JSON equivalent; both directions use
//! the same data-URI projection so MessagePack → JSON → MessagePack stays
//! lossless for them:
//!
//! - bytes ↔ `"data:application/octet-stream;base64,<b64>"`
//! - extension ↔ `"data:application/msgpack;base64;ext=<tag>,<b64>"`

mod parse;
mod render;

pub use parse::{parse, ParseError};
pub use render::{render, Renderer};

/// Data URI prefix for binary payloads.
pub const BIN_URI_START: &str = "data:application/octet-stream;base64,";

/// Data URI prefix for extension payloads, followed by `<tag>,<base64>`.
pub const EXT_URI_START: &str = "data:application/msgpack;base64;ext=";
