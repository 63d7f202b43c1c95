use super::{traits::merge_bounds, *};
use anyhow::{Context, Result, bail};
use geofeature_core::json::{JsonObject, JsonValue};
use std::fmt::Debug;

/// Any GeoJSON geometry object.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(Vec<Geometry>),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}

	pub fn new_multi_point<T>(value: Vec<T>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}

	pub fn new_line_string<T>(value: Vec<T>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}

	pub fn new_multi_line_string<T>(value: Vec<Vec<T>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}

	pub fn new_polygon<T>(value: Vec<Vec<T>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}

	pub fn new_multi_polygon<T>(value: Vec<Vec<Vec<T>>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	#[must_use]
	pub fn new_collection(geometries: Vec<Geometry>) -> Self {
		Self::GeometryCollection(geometries)
	}

	/// The GeoJSON `type` of this geometry, e.g. `"MultiPolygon"`.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::LineString(_) => "LineString",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::GeometryCollection(_) => "GeometryCollection",
		}
	}

	/// Wraps single geometries into their multi counterpart. Multi geometries and
	/// collections are returned unchanged.
	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			_ => self,
		}
	}

	/// Converts the geometry into a GeoJSON geometry object.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> JsonObject {
		let mut json = JsonObject::new();
		json.set("type", self.type_name());
		match self {
			Geometry::GeometryCollection(geometries) => {
				let members = geometries
					.iter()
					.map(|g| JsonValue::from(g.to_json(precision)))
					.collect::<Vec<_>>();
				json.set("geometries", members);
			}
			_ => json.set("coordinates", self.to_coord_json(precision)),
		}
		json
	}

	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue {
		match self {
			Geometry::Point(g) => g.to_coord_json(precision),
			Geometry::MultiPoint(g) => g.to_coord_json(precision),
			Geometry::LineString(g) => g.to_coord_json(precision),
			Geometry::MultiLineString(g) => g.to_coord_json(precision),
			Geometry::Polygon(g) => g.to_coord_json(precision),
			Geometry::MultiPolygon(g) => g.to_coord_json(precision),
			Geometry::GeometryCollection(_) => JsonValue::Null,
		}
	}

	/// Reads a GeoJSON geometry object.
	///
	/// The `type` member selects the variant. `coordinates` must be nested to the depth
	/// that type requires; `GeometryCollection` reads its `geometries` array instead.
	pub fn from_json(json: &JsonObject) -> Result<Geometry> {
		let type_name = json
			.get_string("type")?
			.context("geometry must have a 'type'")?;

		if type_name == "GeometryCollection" {
			let members = json
				.get_array("geometries")?
				.context("a GeometryCollection must have 'geometries'")?;
			let geometries = members
				.iter()
				.enumerate()
				.map(|(index, member)| {
					Geometry::from_json(member.as_object()?).with_context(|| format!("while parsing geometries[{index}]"))
				})
				.collect::<Result<Vec<_>>>()?;
			return Ok(Geometry::GeometryCollection(geometries));
		}

		let parse: fn(&JsonValue) -> Result<Geometry> = match type_name.as_str() {
			"Point" => |c| Ok(Geometry::Point(PointGeometry::from_coord_json(c)?)),
			"MultiPoint" => |c| Ok(Geometry::MultiPoint(MultiPointGeometry::from_coord_json(c)?)),
			"LineString" => |c| Ok(Geometry::LineString(LineStringGeometry::from_coord_json(c)?)),
			"MultiLineString" => |c| Ok(Geometry::MultiLineString(MultiLineStringGeometry::from_coord_json(c)?)),
			"Polygon" => |c| Ok(Geometry::Polygon(PolygonGeometry::from_coord_json(c)?)),
			"MultiPolygon" => |c| Ok(Geometry::MultiPolygon(MultiPolygonGeometry::from_coord_json(c)?)),
			_ => bail!("unknown geometry type '{type_name}'"),
		};

		let coordinates = json
			.get("coordinates")
			.with_context(|| format!("a {type_name} must have 'coordinates'"))?;
		parse(coordinates).with_context(|| format!("while parsing the coordinates of a {type_name}"))
	}

	/// Returns `[x_min, y_min, x_max, y_max]` over all positions, or `None` if there are none.
	#[must_use]
	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		match self {
			Geometry::Point(g) => g.compute_bounds(),
			Geometry::MultiPoint(g) => g.compute_bounds(),
			Geometry::LineString(g) => g.compute_bounds(),
			Geometry::MultiLineString(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
			Geometry::MultiPolygon(g) => g.compute_bounds(),
			Geometry::GeometryCollection(geometries) => geometries
				.iter()
				.fold(None, |bounds, g| merge_bounds(bounds, g.compute_bounds())),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::LineString(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}
