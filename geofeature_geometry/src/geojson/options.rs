use geofeature_core::json::{JsonValue, stringify_pretty_multi_line, stringify_pretty_single_line};

/// Line width used by [`EncodeOptions::pretty`].
pub const DEFAULT_MAX_WIDTH: usize = 100;

/// Layout of the JSON text written by the encoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JsonFormat {
	/// No whitespace at all.
	#[default]
	Compact,
	/// Everything on one line, with a space after each separator.
	PrettySingleLine,
	/// Indented over several lines; containers that fit into `max_width` stay on one line.
	PrettyMultiLine { max_width: usize },
}

impl JsonFormat {
	#[must_use]
	pub fn render(&self, json: &JsonValue) -> String {
		match self {
			JsonFormat::Compact => json.stringify(),
			JsonFormat::PrettySingleLine => stringify_pretty_single_line(json),
			JsonFormat::PrettyMultiLine { max_width } => stringify_pretty_multi_line(json, *max_width, 0, 0),
		}
	}
}

/// Settings for [`encode_feature_with`](super::encode_feature_with).
///
/// The default writes compact text with full coordinate precision.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EncodeOptions {
	/// Decimal places kept in coordinates and `bbox`; `None` keeps all of them.
	pub precision: Option<u8>,
	pub format: JsonFormat,
}

impl EncodeOptions {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_precision(mut self, precision: u8) -> Self {
		self.precision = Some(precision);
		self
	}

	#[must_use]
	pub fn with_format(mut self, format: JsonFormat) -> Self {
		self.format = format;
		self
	}

	/// Multi-line output with [`DEFAULT_MAX_WIDTH`].
	#[must_use]
	pub fn pretty(self) -> Self {
		self.with_format(JsonFormat::PrettyMultiLine {
			max_width: DEFAULT_MAX_WIDTH,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn builder() {
		assert_eq!(
			EncodeOptions::default(),
			EncodeOptions {
				precision: None,
				format: JsonFormat::Compact
			}
		);
		let options = EncodeOptions::new().with_precision(3).pretty();
		assert_eq!(options.precision, Some(3));
		assert_eq!(options.format, JsonFormat::PrettyMultiLine { max_width: 100 });
	}

	#[rstest]
	#[case(JsonFormat::Compact, r#"{"a":[1,2],"b":"x"}"#)]
	#[case(JsonFormat::PrettySingleLine, r#"{ "a": [ 1, 2 ], "b": "x" }"#)]
	#[case(JsonFormat::PrettyMultiLine { max_width: 100 }, r#"{ "a": [ 1, 2 ], "b": "x" }"#)]
	#[case(JsonFormat::PrettyMultiLine { max_width: 20 }, "{\n  \"a\": [ 1, 2 ],\n  \"b\": \"x\"\n}")]
	fn render(#[case] format: JsonFormat, #[case] expected: &str) {
		let json = JsonValue::from(vec![("a", JsonValue::from(vec![1, 2])), ("b", JsonValue::from("x"))]);
		assert_eq!(format.render(&json), expected);
	}
}
