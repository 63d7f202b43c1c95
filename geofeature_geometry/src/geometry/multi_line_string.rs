use super::{CompositeGeometryTrait, GeometryTrait, LineStringGeometry, traits::parse_coord_list};
use anyhow::Result;
use geofeature_core::json::JsonValue;
use std::fmt::Debug;

/// A set of line strings.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		JsonValue::from(
			self
				.0
				.iter()
				.map(|line| line.to_coord_json(precision))
				.collect::<Vec<_>>(),
		)
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self> {
		Ok(Self(parse_coord_list(json, LineStringGeometry::from_coord_json)?))
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		self
			.0
			.iter()
			.fold(None, |bounds, line| super::traits::merge_bounds(bounds, line.compute_bounds()))
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<LineStringGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn coord_json_round_trip() -> Result<()> {
		let multi = MultiLineStringGeometry::from(vec![vec![[0, 0], [1, 1]], vec![[5, 5], [6, 7]]]);
		let json = multi.to_coord_json(None);
		assert_eq!(json.stringify(), "[[[0,0],[1,1]],[[5,5],[6,7]]]");
		assert_eq!(MultiLineStringGeometry::from_coord_json(&json)?, multi);
		assert_eq!(multi.compute_bounds(), Some([0.0, 0.0, 6.0, 7.0]));
		Ok(())
	}
}
