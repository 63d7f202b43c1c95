//! Byte-level iteration over a reader plus the token helpers the JSON parser is built on.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
