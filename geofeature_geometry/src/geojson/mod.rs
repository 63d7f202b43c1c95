//! GeoJSON text encoding of [`crate::GeoFeature`].
//!
//! - `encode` turns a feature into text, honouring [`EncodeOptions`]
//! - `decode` turns text into a feature
//! - `read` decodes from readers, including newline-delimited streams

mod decode;
mod encode;
mod options;
mod read;

pub use decode::*;
pub use encode::*;
pub use options::*;
pub use read::*;
