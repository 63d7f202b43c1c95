//! A small JSON model: [`JsonValue`], [`JsonObject`] and [`JsonArray`], together with a
//! parser and compact/pretty stringifiers.
//!
//! Objects keep their keys sorted, so stringified output is deterministic.

mod parse;
mod stringify;
mod types;

pub use parse::{MAX_NESTING_DEPTH, parse_json_iter, parse_json_str};
pub use stringify::*;
pub use types::{JsonArray, JsonObject, JsonValue};
