use anyhow::{Context, Result};
use geofeature_core::json::JsonValue;
use std::fmt::Debug;

/// Shared interface of all coordinate-based geometry types.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Converts the geometry into the nested JSON arrays of its `coordinates` member.
	/// Optionally rounds coordinate values to the given precision.
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue;

	/// Reads the geometry from the nested JSON arrays of a `coordinates` member.
	fn from_coord_json(json: &JsonValue) -> Result<Self>;

	/// Returns `Some([x_min, y_min, x_max, y_max])`, or `None` if the geometry has no positions.
	fn compute_bounds(&self) -> Option<[f64; 4]>;
}

/// Represents geometries that can be wrapped into a corresponding multi-geometry.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	fn into_multi(self) -> Multi;
}

/// Represents composite geometries that are collections of simpler elements.
/// For example, a polygon is made of rings, and a multilinestring is made of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	fn new() -> Self;

	fn as_vec(&self) -> &Vec<Item>;

	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	fn into_inner(self) -> Vec<Item>;

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}

/// Reads a JSON array and converts each entry with `parse`. Errors name the failing index.
pub(crate) fn parse_coord_list<T>(json: &JsonValue, parse: impl Fn(&JsonValue) -> Result<T>) -> Result<Vec<T>> {
	json
		.as_array()?
		.iter()
		.enumerate()
		.map(|(index, entry)| parse(entry).with_context(|| format!("at index {index}")))
		.collect()
}

/// Combines two optional bounding boxes into the one covering both.
pub(crate) fn merge_bounds(a: Option<[f64; 4]>, b: Option<[f64; 4]>) -> Option<[f64; 4]> {
	match (a, b) {
		(Some(a), Some(b)) => Some([a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]),
		(a, None) => a,
		(None, b) => b,
	}
}
