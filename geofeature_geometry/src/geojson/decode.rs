use crate::{GeoFeature, Geometry};
use anyhow::{Context, Result};
use geofeature_core::json::{JsonValue, parse_json_str};

/// Decodes GeoJSON text holding a single Feature object.
///
/// Nothing is returned unless the whole text is valid: malformed JSON, a non-object root
/// and any member of the wrong shape are all errors.
pub fn decode_feature(text: &str) -> Result<GeoFeature> {
	parse_json_str(text)
		.and_then(decode_value)
		.context("while decoding GeoJSON feature")
}

pub(crate) fn decode_value(json: JsonValue) -> Result<GeoFeature> {
	let feature = GeoFeature::from_json(&json.into_object()?)?;
	log::trace!(
		"decoded feature with {} geometry",
		feature.geometry.as_ref().map_or("no", Geometry::type_name)
	);
	Ok(feature)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Address, FeatureId, Geometry, Properties, encode_feature};
	use geofeature_core::json::JsonObject;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[test]
	fn heterogeneous_properties() -> Result<()> {
		let feature = decode_feature(
			r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[102.0,0.5]},"properties":{"bool":true,"falsebool":false,"int":1,"float64":1.2,"string":"text"}}"#,
		)?;
		assert_eq!(feature.geometry, Some(Geometry::new_point([102.0, 0.5])));
		assert!(feature.properties.is_zero());
		Ok(())
	}

	#[test]
	fn string_id_passes_through() -> Result<()> {
		let feature = decode_feature(r#"{"type":"Feature","id":"abc","geometry":null,"properties":{}}"#)?;
		assert_eq!(feature.id, Some(FeatureId::from("abc")));
		assert!(encode_feature(&feature)?.contains(r#""id":"abc""#));
		Ok(())
	}

	#[test]
	fn absent_id_stays_absent() -> Result<()> {
		let feature = decode_feature(r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":{}}"#)?;
		assert_eq!(feature.id, None);
		assert!(!encode_feature(&feature)?.contains("\"id\""));
		Ok(())
	}

	#[test]
	fn nominatim_result() -> Result<()> {
		let feature = decode_feature(
			r#"{
				"type": "Feature",
				"bbox": [13.0883, 52.3382, 13.7611, 52.6755],
				"geometry": { "type": "Point", "coordinates": [13.3888599, 52.5170365] },
				"properties": {
					"place_id": 159535026,
					"osm_type": "relation",
					"osm_id": 62422,
					"place_rank": 8,
					"category": "boundary",
					"type": "administrative",
					"importance": 0.8522,
					"addresstype": "city",
					"name": "Berlin",
					"display_name": "Berlin, Deutschland",
					"address": { "city": "Berlin", "country": "Deutschland", "country_code": "de" }
				}
			}"#,
		)?;
		assert_eq!(feature.bbox, Some(vec![13.0883, 52.3382, 13.7611, 52.6755]));
		let properties = &feature.properties;
		assert_eq!(properties.place_id, 159535026);
		assert_eq!(properties.osm_id, 62422);
		assert_eq!(properties.category, "boundary");
		assert_eq!(properties.place_type, "administrative");
		assert_eq!(properties.address_type.as_deref(), Some("city"));
		assert_eq!(properties.address.as_ref().map(|a| a.country_code.as_str()), Some("de"));
		assert_eq!(properties.icon, None);
		Ok(())
	}

	fn sample_features() -> Vec<GeoFeature> {
		let mut with_everything = GeoFeature::new_multi_polygon(vec![vec![vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 0.0]]]])
			.with_id(4711)
			.with_properties(Properties {
				place_id: 1,
				icon: Some("https://example.org/icon.png".to_string()),
				address: Some(Address::default()),
				..Properties::default()
			});
		with_everything.update_bbox();
		with_everything.set_crs(JsonObject::from(vec![("type", "name")]));

		vec![
			GeoFeature::default(),
			GeoFeature::new_point([102.0, 0.5]),
			GeoFeature::new_line_string(vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).with_id("abc"),
			GeoFeature::new_collection(vec![
				Geometry::new_point([0, 0]),
				Geometry::new_multi_line_string(vec![vec![[0, 0], [1, 1]]]),
			]),
			with_everything,
		]
	}

	#[test]
	fn round_trip() -> Result<()> {
		for feature in sample_features() {
			let text = encode_feature(&feature)?;
			assert_eq!(decode_feature(&text)?, feature, "{text}");
		}
		Ok(())
	}

	#[rstest]
	#[case("{not json")]
	#[case(r#"{"type":"Feature","geometry":{"type":"NotAShape"}}"#)]
	#[case(r#"{"type":"Feature"} trailing"#)]
	#[case("[1,2]")]
	#[case("")]
	#[case(r#"{"type":"Feature","geometry":{"type":"Polygon","coordinates":[1,2]}}"#)]
	#[case(r#"{"type":"Feature","properties":{"place_rank":"high"}}"#)]
	#[case(r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1e400,0]}}"#)]
	#[case(r#"{"type":"Feature","properties":{"Importance":-1e999}}"#)]
	fn malformed_input_is_rejected(#[case] text: &str) {
		assert!(decode_feature(text).is_err());
	}

	#[rstest]
	#[case(200)]
	#[case(10_000)]
	fn deeply_nested_unknown_property_is_rejected(#[case] depth: usize) {
		let text = format!(
			r#"{{"type":"Feature","geometry":null,"properties":{{"x":{}{}}}}}"#,
			"[".repeat(depth),
			"]".repeat(depth)
		);
		let message = format!("{:#}", decode_feature(&text).unwrap_err());
		assert!(message.contains("maximum nesting depth exceeded"), "{message}");
	}

	#[test]
	fn moderately_nested_unknown_property_is_ignored() -> Result<()> {
		let text = format!(
			r#"{{"type":"Feature","geometry":null,"properties":{{"x":{}{}}}}}"#,
			"[".repeat(50),
			"]".repeat(50)
		);
		assert_eq!(decode_feature(&text)?, GeoFeature::default());
		Ok(())
	}

	#[test]
	fn error_chain_names_the_problem() {
		let error = decode_feature(r#"{"type":"Feature","geometry":{"type":"NotAShape"}}"#).unwrap_err();
		assert_eq!(
			format!("{error:#}"),
			"while decoding GeoJSON feature: while parsing geometry: unknown geometry type 'NotAShape'"
		);

		let error = decode_feature("{not json").unwrap_err();
		assert_eq!(
			format!("{error:#}"),
			"while decoding GeoJSON feature: while parsing JSON '{not json': parsing object, expected '\"' at position 1: {"
		);

		let error = decode_feature("[]").unwrap_err();
		assert_eq!(
			format!("{error:#}"),
			"while decoding GeoJSON feature: expected an object, found array"
		);
	}
}
