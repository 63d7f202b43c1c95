use super::{Coordinates, GeometryTrait, MultiPointGeometry, SingleGeometryTrait};
use anyhow::Result;
use geofeature_core::json::JsonValue;
use std::fmt::Debug;

/// A single position.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}

	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		self.0.to_json(precision)
	}

	fn from_coord_json(json: &JsonValue) -> Result<Self> {
		Ok(Self(Coordinates::from_json(json)?))
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		let mut bounds = None;
		self.0.extend_bounds(&mut bounds);
		bounds
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry(vec![self])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	#[test]
	fn from_array_ref() {
		let p = PointGeometry::from(&[1, 2]);
		assert_eq!(p.as_coord(), &Coordinates::new(1.0, 2.0));
		assert_eq!(p, PointGeometry::new(Coordinates::new(1.0, 2.0)));
		assert_ne!(p, PointGeometry::from(&[3, 4]));
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", PointGeometry::from(&[1, 2])), "[1.0, 2.0]");
	}

	#[test]
	fn to_coord_json_with_precision() {
		let json = PointGeometry::from([1.23456, 2.34567]).to_coord_json(Some(2));
		assert_eq!(json, JsonValue::from([1.23, 2.35]));
	}

	#[test]
	fn from_coord_json() -> Result<()> {
		let point = PointGeometry::from_coord_json(&JsonValue::from([102.0, 0.5]))?;
		assert_eq!(point, PointGeometry::from([102.0, 0.5]));
		assert!(PointGeometry::from_coord_json(&JsonValue::from(vec![[1, 2]])).is_err());
		Ok(())
	}

	#[test]
	fn compute_bounds() {
		let bounds = PointGeometry::from([3.0, 7.0]).compute_bounds();
		assert_eq!(bounds, Some([3.0, 7.0, 3.0, 7.0]));
	}

	#[test]
	fn into_multi() {
		let p = PointGeometry::from(&[1, 2]);
		let multi = p.clone().into_multi();
		assert_eq!(multi.len(), 1);
		assert_eq!(multi.first(), Some(&p));
	}
}
