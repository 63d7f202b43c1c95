use super::open_input;
use anyhow::{Context, Result};
use geofeature_geometry::{GeoFeature, Geometry, read_feature};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file containing a single Feature, or "-" for stdin
	#[arg()]
	input: String,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let reader = open_input(&arguments.input)?;
	let feature = read_feature(reader).with_context(|| format!("while reading '{}'", arguments.input))?;
	print!("{}", summarize(&feature));
	Ok(())
}

fn format_bbox(bbox: &[f64]) -> String {
	let values = bbox.iter().map(ToString::to_string).collect::<Vec<_>>();
	format!("[{}]", values.join(", "))
}

fn summarize(feature: &GeoFeature) -> String {
	let properties = &feature.properties;

	let id = feature.id.as_ref().map_or_else(|| String::from("none"), ToString::to_string);
	let geometry = feature.geometry.as_ref().map_or("none", Geometry::type_name);
	let bbox = feature.bbox.as_deref().map_or_else(|| String::from("none"), format_bbox);
	let extent = feature
		.compute_bbox()
		.map_or_else(|| String::from("none"), |b| format_bbox(&b));

	let mut lines = vec![
		format!("id:           {id}"),
		format!("geometry:     {geometry}"),
		format!("bbox:         {bbox}"),
		format!("extent:       {extent}"),
	];
	if !properties.display_name.is_empty() {
		lines.push(format!("display name: {}", properties.display_name));
	}
	if let Some(name) = &properties.name {
		lines.push(format!("name:         {name}"));
	}
	let status = if properties.is_zero() { "empty" } else { "set" };
	lines.push(format!("properties:   {status}"));
	let crs = if feature.crs.is_some() { "present" } else { "none" };
	lines.push(format!("crs:          {crs}"));

	let mut text = lines.join("\n");
	text.push('\n');
	text
}
