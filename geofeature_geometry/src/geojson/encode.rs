use super::EncodeOptions;
use crate::{GeoFeature, Geometry};
use anyhow::{Context, Result};
use geofeature_core::json::JsonValue;

/// Encodes a feature as compact GeoJSON text with full precision.
pub fn encode_feature(feature: &GeoFeature) -> Result<String> {
	encode_feature_with(feature, &EncodeOptions::default())
}

/// Encodes a feature as GeoJSON text.
///
/// Fails if the feature holds a number JSON cannot represent (NaN or infinity).
pub fn encode_feature_with(feature: &GeoFeature, options: &EncodeOptions) -> Result<String> {
	let json = JsonValue::from(feature.to_json(options.precision));
	json.ensure_finite().context("while encoding GeoJSON feature")?;
	let text = options.format.render(&json);
	log::debug!(
		"encoded feature with {} geometry into {} bytes",
		feature.geometry.as_ref().map_or("no", Geometry::type_name),
		text.len()
	);
	Ok(text)
}
