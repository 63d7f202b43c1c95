use super::JsonValue;

/// Compact JSON text without whitespace.
pub fn stringify(json: &JsonValue) -> String {
	match json {
		JsonValue::String(s) => format!("\"{}\"", escape_json_string(s)),
		JsonValue::Number(n) => n.to_string(),
		JsonValue::Boolean(b) => b.to_string(),
		JsonValue::Null => String::from("null"),
		JsonValue::Array(arr) => arr.stringify(),
		JsonValue::Object(obj) => obj.stringify(),
	}
}

/// JSON text on one line with a space after every separator.
pub fn stringify_pretty_single_line(json: &JsonValue) -> String {
	match json {
		JsonValue::Array(arr) => arr.stringify_pretty_single_line(),
		JsonValue::Object(obj) => obj.stringify_pretty_single_line(),
		_ => stringify(json),
	}
}

/// JSON text over multiple lines. Containers that fit into `max_width` (given the
/// current `indention`) are kept on a single line.
pub fn stringify_pretty_multi_line(json: &JsonValue, max_width: usize, depth: usize, indention: usize) -> String {
	match json {
		JsonValue::Array(arr) => {
			let single_line = arr.stringify_pretty_single_line();
			if single_line.len() + indention <= max_width {
				return single_line;
			}
			arr.stringify_pretty_multi_line(max_width, depth)
		}
		JsonValue::Object(obj) => {
			let single_line = obj.stringify_pretty_single_line();
			if single_line.len() + indention <= max_width {
				return single_line;
			}
			obj.stringify_pretty_multi_line(max_width, depth)
		}
		_ => stringify(json),
	}
}

pub fn escape_json_string(input: &str) -> String {
	let mut output = String::with_capacity(input.len() + 2);
	for c in input.chars() {
		match c {
			'"' => output.push_str("\\\""),
			'\\' => output.push_str("\\\\"),
			'\n' => output.push_str("\\n"),
			'\r' => output.push_str("\\r"),
			'\t' => output.push_str("\\t"),
			'\u{08}' => output.push_str("\\b"),
			'\u{0c}' => output.push_str("\\f"),
			c if c.is_control() => output.push_str(&format!("\\u{:04x}", c as u32)),
			c => output.push(c),
		}
	}
	output
}

#[cfg(test)]
mod tests {
	use super::super::parse_json_str;
	use super::*;
	use anyhow::Result;
	use rstest::rstest;

	#[rstest]
	#[case("\"Hello, World!\"", "\"Hello, World!\"")]
	#[case("42", "42")]
	#[case("102.0", "102")]
	#[case("0.5", "0.5")]
	#[case("1.2", "1.2")]
	#[case("-7.25e2", "-725")]
	#[case("true", "true")]
	#[case("null", "null")]
	#[case("\"Line1\\nLine2\\tTab\\\\\"", "\"Line1\\nLine2\\tTab\\\\\"")]
	#[case("\"Unicode: 😊\"", "\"Unicode: 😊\"")]
	#[case("[\"item1\", 123, false, null]", "[\"item1\",123,false,null]")]
	#[case("{\"b\": 1, \"a\": {\"c\": [3.14]}}", "{\"a\":{\"c\":[3.14]},\"b\":1}")]
	fn compact(#[case] input: &str, #[case] expected: &str) -> Result<()> {
		assert_eq!(stringify(&parse_json_str(input)?), expected);
		Ok(())
	}

	#[test]
	fn escape_control_characters() {
		assert_eq!(escape_json_string("Control:\x01\x02"), "Control:\\u0001\\u0002");
		assert_eq!(escape_json_string("\u{08}\u{0c}"), "\\b\\f");
	}

	#[test]
	fn pretty_single_line() -> Result<()> {
		assert_eq!(stringify_pretty_single_line(&parse_json_str("[1,2,3]")?), "[ 1, 2, 3 ]");
		assert_eq!(stringify_pretty_single_line(&parse_json_str("\"abc\"")?), "\"abc\"");
		Ok(())
	}

	#[test]
	fn pretty_multi_line() -> Result<()> {
		let json = parse_json_str("{\"a\":1,\"bb\":[\"alpha\",\"beta\"]}")?;
		assert_eq!(
			stringify_pretty_multi_line(&json, 12, 0, 0),
			"{\n  \"a\": 1,\n  \"bb\": [\n    \"alpha\",\n    \"beta\"\n  ]\n}"
		);
		assert_eq!(
			stringify_pretty_multi_line(&json, 80, 0, 0),
			"{ \"a\": 1, \"bb\": [ \"alpha\", \"beta\" ] }"
		);
		Ok(())
	}
}
