use super::{CompositeGeometryTrait, GeometryTrait, PolygonGeometry, traits::parse_coord_list};
use anyhow::Result;
use geofeature_core::json::JsonValue;
use std::fmt::Debug;

/// A set of polygons, each with its own outer ring and holes.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(
			self
				.0
				.iter()
				.map(|poly| poly.to_coord_json(precision))
				.collect::<Vec<_>>(),
		)
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self> {
		Ok(Self(parse_coord_list(json, PolygonGeometry::from_coord_json)?))
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		self
			.0
			.iter()
			.fold(None, |bounds, poly| super::traits::merge_bounds(bounds, poly.compute_bounds()))
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);
