//! Low-level building blocks shared by the `geofeature` crates: a buffered byte iterator
//! and a small JSON value model with a parser and stringifier.

pub mod byte_iterator;
pub mod json;
