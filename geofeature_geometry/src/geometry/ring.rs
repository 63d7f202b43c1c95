use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, traits::parse_coord_list};
use anyhow::Result;
use geofeature_core::json::JsonValue;
use std::fmt::Debug;

/// One boundary of a polygon: a sequence of positions that is expected, but not
/// required, to end where it starts.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Whether the first and last positions are equal.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		!self.0.is_empty() && self.0.first() == self.0.last()
	}
}

impl GeometryTrait for RingGeometry {
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(self.0.iter().map(|coord| coord.to_json(precision)).collect::<Vec<_>>())
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self> {
		Ok(Self(parse_coord_list(json, Coordinates::from_json)?))
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		let mut bounds = None;
		for c in &self.0 {
			c.extend_bounds(&mut bounds);
		}
		bounds
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);
