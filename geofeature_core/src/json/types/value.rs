//! The `JsonValue` enum and its accessors.

use crate::json::*;
use anyhow::{Result, bail};

/// Any JSON datum: array, boolean, null, number, object or string.
///
/// Numbers are stored as `f64`, which represents integers exactly up to 2^53.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	/// Parses JSON text into a `JsonValue`.
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		parse_json_str(json)
	}

	/// Returns the JSON type as a lowercase name (`"array"`, `"object"`, …).
	#[must_use]
	pub fn type_as_str(&self) -> &str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Null => "null",
			Number(_) => "number",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	/// Compact JSON text without whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	#[must_use]
	pub fn new_array() -> JsonValue {
		JsonValue::Array(JsonArray::default())
	}

	#[must_use]
	pub fn new_object() -> JsonValue {
		JsonValue::Object(JsonObject::default())
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, JsonValue::Null)
	}

	pub fn as_array(&self) -> Result<&JsonArray> {
		if let JsonValue::Array(array) = self {
			Ok(array)
		} else {
			bail!("expected an array, found {}", self.type_as_str())
		}
	}

	pub fn into_array(self) -> Result<JsonArray> {
		if let JsonValue::Array(array) = self {
			Ok(array)
		} else {
			bail!("expected an array, found {}", self.type_as_str())
		}
	}

	pub fn as_object(&self) -> Result<&JsonObject> {
		if let JsonValue::Object(object) = self {
			Ok(object)
		} else {
			bail!("expected an object, found {}", self.type_as_str())
		}
	}

	pub fn into_object(self) -> Result<JsonObject> {
		if let JsonValue::Object(object) = self {
			Ok(object)
		} else {
			bail!("expected an object, found {}", self.type_as_str())
		}
	}

	pub fn as_string(&self) -> Result<String> {
		self.as_str().map(ToOwned::to_owned)
	}

	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => bail!("expected a string, found {}", self.type_as_str()),
		}
	}

	pub fn as_number(&self) -> Result<f64> {
		match self {
			JsonValue::Number(value) => Ok(*value),
			_ => bail!("expected a number, found {}", self.type_as_str()),
		}
	}

	/// Returns the number as `i64`; fails for fractional or out-of-range numbers.
	pub fn as_integer(&self) -> Result<i64> {
		let value = self.as_number()?;
		if value.fract() != 0.0 || !value.is_finite() || value.abs() >= 9.223_372_036_854_776e18 {
			bail!("expected an integer, found {value}")
		}
		Ok(value as i64)
	}

	pub fn as_bool(&self) -> Result<bool> {
		match self {
			JsonValue::Boolean(value) => Ok(*value),
			_ => bail!("expected a boolean, found {}", self.type_as_str()),
		}
	}

	/// Fails if a non-finite number (NaN or ±infinity) occurs anywhere in this value,
	/// since JSON text has no representation for it. The error names the offending path.
	pub fn ensure_finite(&self) -> Result<()> {
		fn walk(value: &JsonValue, path: &mut Vec<String>) -> Result<()> {
			match value {
				JsonValue::Number(number) if !number.is_finite() => {
					bail!("unsupported value {number} at '/{}'", path.join("/"))
				}
				JsonValue::Array(array) => {
					for (index, entry) in array.iter().enumerate() {
						path.push(index.to_string());
						walk(entry, path)?;
						path.pop();
					}
				}
				JsonValue::Object(object) => {
					for (key, entry) in object.iter() {
						path.push(key.clone());
						walk(entry, path)?;
						path.pop();
					}
				}
				_ => {}
			}
			Ok(())
		}
		walk(self, &mut Vec::new())
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<&String> for JsonValue {
	fn from(input: &String) -> Self {
		JsonValue::String(input.clone())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<&JsonValue> for JsonValue {
	fn from(input: &JsonValue) -> Self {
		input.clone()
	}
}

impl<I> From<I> for JsonValue
where
	JsonArray: From<I>,
{
	fn from(input: I) -> Self {
		JsonValue::Array(input.into())
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn conversions() {
		assert_eq!(JsonValue::from("hello"), JsonValue::String("hello".to_string()));
		assert_eq!(JsonValue::from(String::from("hi")), JsonValue::String("hi".to_string()));
		assert_eq!(JsonValue::from(true), JsonValue::Boolean(true));
		assert_eq!(JsonValue::from(23.42), JsonValue::Number(23.42));
		assert_eq!(JsonValue::from(42), JsonValue::Number(42.0));
		assert_eq!(
			JsonValue::from(vec!["a", "b"]),
			JsonValue::Array(JsonArray(vec![JsonValue::from("a"), JsonValue::from("b")]))
		);
	}

	#[rstest]
	#[case(JsonValue::from("x"), "string")]
	#[case(JsonValue::from(1), "number")]
	#[case(JsonValue::from(false), "boolean")]
	#[case(JsonValue::Null, "null")]
	#[case(JsonValue::new_array(), "array")]
	#[case(JsonValue::new_object(), "object")]
	fn type_names(#[case] value: JsonValue, #[case] expected: &str) {
		assert_eq!(value.type_as_str(), expected);
	}

	#[test]
	fn accessors_report_the_found_type() {
		let value = JsonValue::from(42);
		assert_eq!(value.as_number().unwrap(), 42.0);
		assert_eq!(value.as_str().unwrap_err().to_string(), "expected a string, found number");
		assert_eq!(
			JsonValue::from("x").as_object().unwrap_err().to_string(),
			"expected an object, found string"
		);
		assert!(JsonValue::Null.as_array().is_err());
		assert!(JsonValue::from(true).as_bool().unwrap());
		assert!(JsonValue::Null.is_null());
	}

	#[test]
	fn into_accessors_take_ownership() {
		let array = JsonValue::from(vec![1, 2]).into_array().unwrap();
		assert_eq!(array, JsonArray(vec![JsonValue::from(1), JsonValue::from(2)]));
		assert_eq!(
			JsonValue::from("x").into_array().unwrap_err().to_string(),
			"expected an array, found string"
		);

		let object = JsonValue::from(vec![("k", JsonValue::Null)]).into_object().unwrap();
		assert!(object.get("k").is_some_and(JsonValue::is_null));
		assert_eq!(
			JsonValue::new_array().into_object().unwrap_err().to_string(),
			"expected an object, found array"
		);
	}

	#[rstest]
	#[case(0.0, Some(0))]
	#[case(-17.0, Some(-17))]
	#[case(1234567890123.0, Some(1234567890123))]
	#[case(1.5, None)]
	#[case(f64::NAN, None)]
	#[case(1e300, None)]
	fn integers(#[case] number: f64, #[case] expected: Option<i64>) {
		assert_eq!(JsonValue::Number(number).as_integer().ok(), expected);
	}

	#[test]
	fn ensure_finite_names_the_path() {
		let value = JsonValue::from(vec![
			("a", JsonValue::from(vec![1.0, 2.0])),
			("b", JsonValue::from(vec![0.0, f64::INFINITY])),
		]);
		assert_eq!(
			value.ensure_finite().unwrap_err().to_string(),
			"unsupported value inf at '/b/1'"
		);
		assert!(JsonValue::from(vec![1.0, 2.0]).ensure_finite().is_ok());
	}

	#[test]
	fn parse_str() {
		let parsed = JsonValue::parse_str(r#"{"key":"value","number":42}"#).unwrap();
		assert_eq!(
			parsed,
			JsonValue::from(vec![("key", JsonValue::from("value")), ("number", JsonValue::from(42))])
		);
		assert!(JsonValue::parse_str(r#"{"key":}"#).is_err());
	}
}
