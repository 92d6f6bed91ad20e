//! Binary buffer writer shared by the MessagePack and JSON encoders.

mod writer;

pub use writer::Writer;
