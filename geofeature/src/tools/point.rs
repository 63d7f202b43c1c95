use anyhow::Result;
use geofeature_geometry::{EncodeOptions, FeatureId, GeoFeature, encode_feature_with};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// longitude or x coordinate
	#[arg(allow_hyphen_values = true)]
	x: f64,

	/// latitude or y coordinate
	#[arg(allow_hyphen_values = true)]
	y: f64,

	/// feature id; written as a number if it is written like one (e.g. 42 or 1.5)
	#[arg(long)]
	id: Option<String>,

	/// value of the "Name" property
	#[arg(long)]
	name: Option<String>,

	/// also write the bbox of the point
	#[arg(long)]
	bbox: bool,

	/// round coordinates to this many decimal places
	#[arg(long, value_name = "int")]
	precision: Option<u8>,
}

/// A number only when it prints back as the same text, so `007` or `1e3` stay strings.
fn parse_id(id: &str) -> FeatureId {
	match id.parse::<f64>() {
		Ok(number) if number.is_finite() && number.to_string() == id => FeatureId::Number(number),
		_ => FeatureId::from(id),
	}
}

fn build_feature(arguments: &Subcommand) -> GeoFeature {
	let mut feature = GeoFeature::new_point([arguments.x, arguments.y]);
	if let Some(id) = &arguments.id {
		feature.set_id(parse_id(id));
	}
	feature.properties.name.clone_from(&arguments.name);
	if arguments.bbox {
		feature.update_bbox();
	}
	feature
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let options = EncodeOptions {
		precision: arguments.precision,
		..EncodeOptions::default()
	};
	let text = encode_feature_with(&build_feature(arguments), &options)?;
	println!("{text}");
	Ok(())
}
