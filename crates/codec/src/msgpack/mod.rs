//! MessagePack encoder/decoder over the generic [`crate::Value`] tree.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod util;

pub use decoder::{Decoder, DEFAULT_MAX_DEPTH};
pub use encoder::Encoder;
pub use error::DecodeError;
pub use util::{decode, encode};
