//! JSON object type backed by an ordered map.

use crate::json::*;
use anyhow::Result;
use std::{
	collections::{BTreeMap, btree_map},
	fmt::{Debug, Display},
};

/// A JSON object. Keys are kept in sorted order.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub BTreeMap<String, JsonValue>);

impl JsonObject {
	#[must_use]
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	/// Copies all entries of `object` into this one, overwriting existing keys.
	pub fn assign(&mut self, object: JsonObject) {
		self.0.extend(object.0);
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	/// Looks up `key` exactly, then falls back to an ASCII case-insensitive match.
	#[must_use]
	pub fn get_ignore_case(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key).or_else(|| {
			self
				.0
				.iter()
				.find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
				.map(|(_, value)| value)
		})
	}

	pub fn get_string(&self, key: &str) -> Result<Option<String>> {
		self.get(key).map(JsonValue::as_string).transpose()
	}

	pub fn get_object(&self, key: &str) -> Result<Option<&JsonObject>> {
		self.get(key).map(JsonValue::as_object).transpose()
	}

	pub fn get_number(&self, key: &str) -> Result<Option<f64>> {
		self.get(key).map(JsonValue::as_number).transpose()
	}

	pub fn get_array(&self, key: &str) -> Result<Option<&JsonArray>> {
		self.get(key).map(JsonValue::as_array).transpose()
	}

	pub fn get_number_vec(&self, key: &str) -> Result<Option<Vec<f64>>> {
		self.get_array(key)?.map(JsonArray::as_number_vec).transpose()
	}

	/// Sets `key`, converting `value` into a `JsonValue`.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.insert(key.to_owned(), JsonValue::from(value));
	}

	/// Sets `key` only when `value` is `Some`.
	pub fn set_optional<T>(&mut self, key: &str, value: &Option<T>)
	where
		JsonValue: From<T>,
		T: Clone,
	{
		if let Some(v) = value {
			self.0.insert(key.to_owned(), JsonValue::from(v.clone()));
		}
	}

	pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
		self.0.remove(key)
	}

	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn keys(&self) -> impl Iterator<Item = &String> {
		self.0.keys()
	}

	pub fn iter(&self) -> btree_map::Iter<'_, String, JsonValue> {
		self.0.iter()
	}

	/// Compact JSON text: `{"a":1,"b":2}`.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), stringify(value)))
			.collect::<Vec<_>>();
		format!("{{{}}}", items.join(","))
	}

	/// Pretty JSON text on one line: `{ "a": 1, "b": 2 }`.
	#[must_use]
	pub fn stringify_pretty_single_line(&self) -> String {
		if self.0.is_empty() {
			return String::from("{}");
		}
		let items = self
			.0
			.iter()
			.map(|(key, value)| {
				format!(
					"\"{}\": {}",
					escape_json_string(key),
					stringify_pretty_single_line(value)
				)
			})
			.collect::<Vec<_>>();
		format!("{{ {} }}", items.join(", "))
	}

	/// Pretty JSON text over several lines, indented by two spaces per `depth`.
	/// Nested values that fit into `max_width` stay on one line.
	#[must_use]
	pub fn stringify_pretty_multi_line(&self, max_width: usize, depth: usize) -> String {
		if self.0.is_empty() {
			return String::from("{}");
		}
		let indent = "  ".repeat(depth);
		let items = self
			.0
			.iter()
			.map(|(key, value)| {
				let key_string = format!("{indent}  \"{}\": ", escape_json_string(key));
				format!(
					"{key_string}{}",
					stringify_pretty_multi_line(value, max_width, depth + 1, key_string.len())
				)
			})
			.collect::<Vec<_>>();
		format!("{{\n{}\n{indent}}}", items.join(",\n"))
	}

	/// Parses JSON text whose root must be an object.
	pub fn parse_str(json: &str) -> Result<JsonObject> {
		JsonValue::parse_str(json)?.into_object()
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

impl<'a> IntoIterator for &'a JsonObject {
	type Item = (&'a String, &'a JsonValue);
	type IntoIter = btree_map::Iter<'a, String, JsonValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl FromIterator<(String, JsonValue)> for JsonObject {
	fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
		JsonObject(BTreeMap::from_iter(iter))
	}
}

impl<T> From<Vec<(&str, T)>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonValue::Object(JsonObject::from(input))
	}
}

impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonObject(
			input
				.into_iter()
				.map(|(key, value)| (key.to_string(), JsonValue::from(value)))
				.collect(),
		)
	}
}
