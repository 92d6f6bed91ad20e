//! Generic value tree and MessagePack binary codec.
//!
//! [`Value`] is the in-memory representation bridging MessagePack and JSON;
//! [`msgpack`] holds the strict decoder and the canonical minimal-width
//! encoder over it.

mod value;

pub mod msgpack;

pub use value::{Ext, Value};
