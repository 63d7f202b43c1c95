use super::{FeatureId, Properties};
use crate::geometry::{Coordinates, Geometry};
use anyhow::{Context, Result, bail};
use geofeature_core::json::{JsonArray, JsonObject, JsonValue};

const FEATURE_KEYS: [&str; 6] = ["bbox", "crs", "geometry", "id", "properties", "type"];

/// A GeoJSON Feature: a geometry with properties and optional `id`, `bbox` and `crs`.
///
/// `bbox` and `crs` are only written when they hold something, so a feature without
/// them encodes to the same text whether they are `None` or empty. `geometry` and
/// `properties` are always written.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoFeature {
	pub id: Option<FeatureId>,
	pub bbox: Option<Vec<f64>>,
	pub geometry: Option<Geometry>,
	pub properties: Properties,
	/// Coordinate reference system, passed through without interpretation.
	pub crs: Option<JsonObject>,
}

impl GeoFeature {
	pub const TYPE_NAME: &'static str = "Feature";

	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			geometry: Some(geometry),
			..Self::default()
		}
	}

	pub fn new_point<T>(position: T) -> Self
	where
		Coordinates: From<T>,
	{
		Self::new(Geometry::new_point(position))
	}

	pub fn new_multi_point<T>(positions: Vec<T>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::new(Geometry::new_multi_point(positions))
	}

	pub fn new_line_string<T>(positions: Vec<T>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::new(Geometry::new_line_string(positions))
	}

	pub fn new_multi_line_string<T>(lines: Vec<Vec<T>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::new(Geometry::new_multi_line_string(lines))
	}

	pub fn new_polygon<T>(rings: Vec<Vec<T>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::new(Geometry::new_polygon(rings))
	}

	pub fn new_multi_polygon<T>(polygons: Vec<Vec<Vec<T>>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::new(Geometry::new_multi_polygon(polygons))
	}

	#[must_use]
	pub fn new_collection(geometries: Vec<Geometry>) -> Self {
		Self::new(Geometry::new_collection(geometries))
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		Self::TYPE_NAME
	}

	pub fn set_id<T: Into<FeatureId>>(&mut self, id: T) {
		self.id = Some(id.into());
	}

	pub fn set_bbox(&mut self, bbox: Vec<f64>) {
		self.bbox = Some(bbox);
	}

	pub fn set_crs(&mut self, crs: JsonObject) {
		self.crs = Some(crs);
	}

	pub fn set_properties(&mut self, properties: Properties) {
		self.properties = properties;
	}

	pub fn set_geometry(&mut self, geometry: Geometry) {
		self.geometry = Some(geometry);
	}

	#[must_use]
	pub fn with_id<T: Into<FeatureId>>(mut self, id: T) -> Self {
		self.set_id(id);
		self
	}

	#[must_use]
	pub fn with_properties(mut self, properties: Properties) -> Self {
		self.set_properties(properties);
		self
	}

	/// Envelope `[x_min, y_min, x_max, y_max]` of the geometry.
	#[must_use]
	pub fn compute_bbox(&self) -> Option<[f64; 4]> {
		self.geometry.as_ref().and_then(Geometry::compute_bounds)
	}

	/// Stores [`compute_bbox`](Self::compute_bbox) in `bbox`. Clears `bbox` if there is no envelope.
	pub fn update_bbox(&mut self) {
		self.bbox = self.compute_bbox().map(Vec::from);
	}

	/// Builds the GeoJSON object of this feature. Coordinates and `bbox` are rounded
	/// to `precision` decimal places if given.
	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> JsonObject {
		let mut json = JsonObject::new();
		json.set("type", Self::TYPE_NAME);
		if let Some(id) = &self.id {
			json.set("id", id.to_json());
		}
		if let Some(bbox) = self.bbox.as_ref().filter(|b| !b.is_empty()) {
			json.set("bbox", Coordinates::from(bbox).to_json(precision));
		}
		json.set(
			"geometry",
			self
				.geometry
				.as_ref()
				.map_or(JsonValue::Null, |g| JsonValue::from(g.to_json(precision))),
		);
		json.set("properties", self.properties.to_json());
		if let Some(crs) = self.crs.as_ref().filter(|c| !c.is_empty()) {
			json.set("crs", crs.clone());
		}
		json
	}

	/// Reads a GeoJSON Feature object.
	///
	/// Missing members and members set to `null` keep their default. A `type` other
	/// than `"Feature"` is an error; a missing `type` is accepted.
	pub fn from_json(json: &JsonObject) -> Result<GeoFeature> {
		let mut feature = GeoFeature::default();

		for key in json.keys() {
			if !FEATURE_KEYS.contains(&key.as_str()) {
				log::trace!("ignoring foreign member '{key}'");
			}
		}

		if let Some(value) = member(json, "type") {
			let type_name = value.as_str().context("while parsing type")?;
			if type_name != Self::TYPE_NAME {
				bail!("expected type '{}', found '{type_name}'", Self::TYPE_NAME);
			}
		}

		if let Some(value) = member(json, "id") {
			feature.id = FeatureId::from_json(value)?;
		}

		if let Some(value) = member(json, "bbox") {
			let bbox = value
				.as_array()
				.and_then(JsonArray::as_number_vec)
				.context("while parsing bbox")?;
			feature.bbox = Some(bbox).filter(|b| !b.is_empty());
		}

		if let Some(value) = member(json, "geometry") {
			let geometry = value
				.as_object()
				.and_then(Geometry::from_json)
				.context("while parsing geometry")?;
			feature.geometry = Some(geometry);
		}

		if let Some(value) = member(json, "properties") {
			feature.properties = value
				.as_object()
				.and_then(Properties::from_json)
				.context("while parsing properties")?;
		}

		if let Some(value) = member(json, "crs") {
			let crs = value.as_object().context("while parsing crs")?;
			feature.crs = Some(crs.clone()).filter(|c| !c.is_empty());
		}

		Ok(feature)
	}
}

fn member<'a>(json: &'a JsonObject, key: &str) -> Option<&'a JsonValue> {
	json.get(key).filter(|value| !value.is_null())
}
