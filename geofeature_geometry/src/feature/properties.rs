//! Geocoding metadata attached to a feature.
//!
//! Keys are matched exactly first and then ASCII case-insensitively, so both
//! `"Category"` and `"category"` fill [`Properties::category`]. Unknown keys are ignored.

use anyhow::{Context, Result};
use geofeature_core::json::{JsonObject, JsonValue};

const PROPERTY_KEYS: [&str; 12] = [
	"place_id",
	"osm_type",
	"osm_id",
	"display_name",
	"place_rank",
	"Category",
	"Type",
	"Importance",
	"Icon",
	"addresstype",
	"Name",
	"Address",
];

const ADDRESS_KEYS: [&str; 9] = [
	"Tourism",
	"Road",
	"Suburb",
	"City",
	"County",
	"State",
	"Postcode",
	"Country",
	"country_code",
];

/// Properties payload of a feature, shaped like the output of a Nominatim-style geocoder.
///
/// Plain fields default to zero or empty and are always written. `Option` fields are
/// written only when set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties {
	pub place_id: i64,
	pub osm_type: String,
	pub osm_id: i64,
	pub display_name: String,
	pub place_rank: i64,
	pub category: String,
	pub place_type: String,
	pub importance: f64,
	pub icon: Option<String>,
	pub address_type: Option<String>,
	pub name: Option<String>,
	pub address: Option<Address>,
}

/// Postal address of a place. All fields are written whenever the address is present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Address {
	pub tourism: String,
	pub road: String,
	pub suburb: String,
	pub city: String,
	pub county: String,
	pub state: String,
	pub postcode: String,
	pub country: String,
	pub country_code: String,
}

impl Properties {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether every field still has its zero value.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		*self == Self::default()
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut json = JsonObject::new();
		json.set("place_id", self.place_id);
		json.set("osm_type", &self.osm_type);
		json.set("osm_id", self.osm_id);
		json.set("display_name", &self.display_name);
		json.set("place_rank", self.place_rank);
		json.set("Category", &self.category);
		json.set("Type", &self.place_type);
		json.set("Importance", self.importance);
		json.set_optional("Icon", &self.icon);
		json.set_optional("addresstype", &self.address_type);
		json.set_optional("Name", &self.name);
		if let Some(address) = &self.address {
			json.set("Address", address.to_json());
		}
		json
	}

	pub fn from_json(json: &JsonObject) -> Result<Properties> {
		log_unknown_keys(json, &PROPERTY_KEYS, "properties");
		Ok(Properties {
			place_id: read_integer(json, "place_id")?,
			osm_type: read_string(json, "osm_type")?,
			osm_id: read_integer(json, "osm_id")?,
			display_name: read_string(json, "display_name")?,
			place_rank: read_integer(json, "place_rank")?,
			category: read_string(json, "Category")?,
			place_type: read_string(json, "Type")?,
			importance: read_number(json, "Importance")?,
			icon: read_optional_string(json, "Icon")?,
			address_type: read_optional_string(json, "addresstype")?,
			name: read_optional_string(json, "Name")?,
			address: field(json, "Address")
				.map(|value| Address::from_json(value.as_object()?))
				.transpose()
				.context("while parsing property 'Address'")?,
		})
	}
}

impl Address {
	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		JsonObject::from(vec![
			("Tourism", &self.tourism),
			("Road", &self.road),
			("Suburb", &self.suburb),
			("City", &self.city),
			("County", &self.county),
			("State", &self.state),
			("Postcode", &self.postcode),
			("Country", &self.country),
			("country_code", &self.country_code),
		])
	}

	pub fn from_json(json: &JsonObject) -> Result<Address> {
		log_unknown_keys(json, &ADDRESS_KEYS, "address");
		Ok(Address {
			tourism: read_string(json, "Tourism")?,
			road: read_string(json, "Road")?,
			suburb: read_string(json, "Suburb")?,
			city: read_string(json, "City")?,
			county: read_string(json, "County")?,
			state: read_string(json, "State")?,
			postcode: read_string(json, "Postcode")?,
			country: read_string(json, "Country")?,
			country_code: read_string(json, "country_code")?,
		})
	}
}

/// Looks up `key`; `null` counts as missing.
fn field<'a>(json: &'a JsonObject, key: &str) -> Option<&'a JsonValue> {
	json.get_ignore_case(key).filter(|value| !value.is_null())
}

fn read_string(json: &JsonObject, key: &str) -> Result<String> {
	Ok(read_optional_string(json, key)?.unwrap_or_default())
}

fn read_optional_string(json: &JsonObject, key: &str) -> Result<Option<String>> {
	field(json, key)
		.map(JsonValue::as_string)
		.transpose()
		.with_context(|| format!("while parsing property '{key}'"))
}

fn read_integer(json: &JsonObject, key: &str) -> Result<i64> {
	field(json, key)
		.map_or(Ok(0), JsonValue::as_integer)
		.with_context(|| format!("while parsing property '{key}'"))
}

fn read_number(json: &JsonObject, key: &str) -> Result<f64> {
	field(json, key)
		.map_or(Ok(0.0), JsonValue::as_number)
		.with_context(|| format!("while parsing property '{key}'"))
}

fn log_unknown_keys(json: &JsonObject, known: &[&str], scope: &str) {
	for key in json.keys() {
		if !known.iter().any(|k| k.eq_ignore_ascii_case(key)) {
			log::trace!("ignoring unknown {scope} key '{key}'");
		}
	}
}
