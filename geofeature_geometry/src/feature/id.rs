use anyhow::{Result, bail};
use geofeature_core::json::JsonValue;
use std::fmt::Display;

/// Identifier of a feature. GeoJSON allows either a string or a number.
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureId {
	String(String),
	Number(f64),
}

impl FeatureId {
	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		match self {
			FeatureId::String(s) => JsonValue::from(s),
			FeatureId::Number(n) => JsonValue::from(*n),
		}
	}

	/// Reads an `id` member. `null` means there is no id.
	pub fn from_json(json: &JsonValue) -> Result<Option<FeatureId>> {
		Ok(match json {
			JsonValue::Null => None,
			JsonValue::String(s) => Some(FeatureId::String(s.clone())),
			JsonValue::Number(n) => Some(FeatureId::Number(*n)),
			_ => bail!("a feature id must be a string or a number, found {}", json.type_as_str()),
		})
	}
}

impl Display for FeatureId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			FeatureId::String(s) => write!(f, "{s}"),
			FeatureId::Number(n) => write!(f, "{n}"),
		}
	}
}

impl From<&str> for FeatureId {
	fn from(value: &str) -> Self {
		FeatureId::String(value.to_string())
	}
}

impl From<String> for FeatureId {
	fn from(value: String) -> Self {
		FeatureId::String(value)
	}
}

impl From<f64> for FeatureId {
	fn from(value: f64) -> Self {
		FeatureId::Number(value)
	}
}

macro_rules! impl_from_integer {
	($($t:ty),+) => {$(
		impl From<$t> for FeatureId {
			fn from(value: $t) -> Self {
				FeatureId::Number(value as f64)
			}
		}
	)+};
}

impl_from_integer!(i32, u32, i64, u64);
