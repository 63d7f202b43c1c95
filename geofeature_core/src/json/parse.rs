//! Recursive-descent JSON parser on top of the byte iterator helpers.

use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string, parse_tag,
};
use anyhow::{Context, Result};
use std::collections::BTreeMap;

const MAX_PREVIEW_LENGTH: usize = 40;

/// Maximum number of nested arrays and objects in one document.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses a complete JSON document. Anything but whitespace after the value is an error.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_text(json, true);
	parse_document(&mut iter).with_context(|| format!("while parsing JSON '{}'", preview(json)))
}

fn parse_document(iter: &mut ByteIterator) -> Result<JsonValue> {
	let value = parse_json_iter(iter)?;
	iter.expect_end()?;
	Ok(value)
}

/// Parses the next JSON value and leaves the iterator right after it.
///
/// Containers nested deeper than [`MAX_NESTING_DEPTH`] are rejected.
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	parse_value(iter, 0)
}

fn parse_value(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' => {
			check_depth(iter, depth)?;
			parse_array_entries(iter, |iter2| parse_value(iter2, depth + 1)).map(|list| JsonValue::Array(JsonArray(list)))
		}
		b'{' => {
			check_depth(iter, depth)?;
			let mut map = BTreeMap::new();
			parse_object_entries(iter, |key, iter2| {
				map.insert(key, parse_value(iter2, depth + 1)?);
				Ok(())
			})?;
			Ok(JsonValue::Object(JsonObject(map)))
		}
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'-' => parse_number(iter),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn check_depth(iter: &ByteIterator, depth: usize) -> Result<()> {
	if depth >= MAX_NESTING_DEPTH {
		return Err(iter.format_error("maximum nesting depth exceeded"));
	}
	Ok(())
}

fn parse_number(iter: &mut ByteIterator) -> Result<JsonValue> {
	let number = parse_number_as::<f64>(iter)?;
	if !number.is_finite() {
		return Err(iter.format_error("number out of range"));
	}
	Ok(JsonValue::Number(number))
}

fn preview(json: &str) -> String {
	let trimmed = json.trim();
	if trimmed.chars().count() <= MAX_PREVIEW_LENGTH {
		trimmed.to_string()
	} else {
		format!("{}…", trimmed.chars().take(MAX_PREVIEW_LENGTH).collect::<String>())
	}
}
