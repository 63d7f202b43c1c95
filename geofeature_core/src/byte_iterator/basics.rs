//! Token helpers on top of [`ByteIterator`].
//!
//! - `parse_tag` matches fixed ASCII tags such as `true` or `null`
//! - `parse_quoted_json_string` reads a string literal, resolving escapes
//! - `parse_number_as_string` / `parse_number_as` read JSON number syntax
//! - `parse_object_entries` / `parse_array_entries` walk over containers
//!
//! Every helper leaves the iterator on the first byte after the token it read.

use super::iterator::ByteIterator;
use anyhow::{Error, Result};
use std::str::FromStr;

/// Matches the bytes of `tag` at the current position.
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if iter.expect_next_byte()? != expected {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

fn parse_hex4(iter: &mut ByteIterator) -> Result<u16> {
	let mut hex = [0u8; 4];
	for byte in &mut hex {
		*byte = iter.expect_next_byte()?;
	}
	std::str::from_utf8(&hex)
		.ok()
		.and_then(|text| u16::from_str_radix(text, 16).ok())
		.ok_or_else(|| iter.format_error("invalid unicode escape"))
}

fn parse_unicode_escape(iter: &mut ByteIterator) -> Result<char> {
	let high = parse_hex4(iter)?;
	let code_point = match high {
		0xD800..=0xDBFF => {
			if iter.expect_next_byte()? != b'\\' || iter.expect_next_byte()? != b'u' {
				return Err(iter.format_error("expected a low surrogate after a high surrogate"));
			}
			let low = parse_hex4(iter)?;
			if !(0xDC00..=0xDFFF).contains(&low) {
				return Err(iter.format_error("invalid low surrogate"));
			}
			0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
		}
		0xDC00..=0xDFFF => return Err(iter.format_error("unexpected low surrogate")),
		_ => u32::from(high),
	};
	char::from_u32(code_point).ok_or_else(|| iter.format_error("invalid unicode code point"))
}

/// Reads a quoted JSON string literal, including the surrounding quotes.
///
/// Supports the escapes `\" \\ \/ \b \f \n \r \t` and `\uXXXX`, with surrogate pairs
/// for characters outside the basic multilingual plane.
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		return Err(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);
	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let mut buffer = [0u8; 4];
					bytes.extend_from_slice(parse_unicode_escape(iter)?.encode_utf8(&mut buffer).as_bytes());
				}
				_ => return Err(iter.format_error("invalid escape sequence")),
			},
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).map_err(Error::from)
}

/// Reads a JSON number and returns its text: optional minus sign, integer part,
/// optional fraction and optional exponent.
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	let mut number = Vec::with_capacity(16);

	if let Some(b'-') = iter.peek() {
		number.push(iter.expect_next_byte()?);
	}

	let mut has_digits = false;
	while let Some(b'0'..=b'9') = iter.peek() {
		has_digits = true;
		number.push(iter.expect_next_byte()?);
	}
	if !has_digits {
		return Err(iter.format_error("expected digits in number"));
	}

	if let Some(b'.') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		let mut fraction_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			fraction_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if !fraction_digits {
			return Err(iter.format_error("expected digits after decimal point"));
		}
		if let Some(b'.') = iter.peek() {
			return Err(iter.format_error("unexpected '.' in number"));
		}
	}

	if let Some(b'e' | b'E') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		if let Some(b'+' | b'-') = iter.peek() {
			number.push(iter.expect_next_byte()?);
		}
		let mut exponent_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			exponent_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if !exponent_digits {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	String::from_utf8(number).map_err(Error::from)
}

/// Reads a JSON number and converts it with `R::from_str`.
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_as_string(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Walks over the entries of a `{ ... }` object.
///
/// `parse_value` receives each key and the iterator positioned at the start of the value;
/// it must consume exactly that value.
pub fn parse_object_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<R>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		return Err(iter.format_error("expected '{' while parsing an object"));
	}

	iter.skip_whitespace();
	if let Some(b'}') = iter.peek() {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b'"' {
			return Err(iter.format_error("parsing object, expected '\"'"));
		}
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_next_byte()? != b':' {
			return Err(iter.format_error("expected ':'"));
		}

		iter.skip_whitespace();
		parse_value(key, iter)?;

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => continue,
			b'}' => break,
			_ => return Err(iter.format_error("parsing object, expected ',' or '}'")),
		}
	}
	Ok(())
}

/// Walks over the entries of a `[ ... ]` array and collects what `parse_value` returns.
pub fn parse_array_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		return Err(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();

	iter.skip_whitespace();
	if let Some(b']') = iter.peek() {
		iter.advance();
		return Ok(result);
	}

	loop {
		iter.skip_whitespace();
		result.push(parse_value(iter)?);

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => continue,
			b']' => break,
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}

	Ok(result)
}
