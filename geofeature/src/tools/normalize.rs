use super::{open_input, write_output};
use anyhow::{Context, Result};
use geofeature_geometry::{EncodeOptions, encode_feature_with, read_feature, read_ndgeojson_iter};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file containing a single Feature, or "-" for stdin
	#[arg()]
	input: String,

	/// write the result to this file instead of stdout
	#[arg(long, short)]
	output: Option<PathBuf>,

	/// round coordinates and bbox to this many decimal places
	#[arg(long, value_name = "int", display_order = 1)]
	precision: Option<u8>,

	/// indent the output over several lines
	#[arg(long, conflicts_with = "lines", display_order = 2)]
	pretty: bool,

	/// read and write newline-delimited GeoJSON, one feature per line
	#[arg(long, display_order = 2)]
	lines: bool,
}

impl Subcommand {
	fn encode_options(&self) -> EncodeOptions {
		let mut options = EncodeOptions::new();
		options.precision = self.precision;
		if self.pretty { options.pretty() } else { options }
	}
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let options = arguments.encode_options();
	let reader = open_input(&arguments.input)?;

	let mut text = String::new();
	let mut count = 0;
	if arguments.lines {
		for feature in read_ndgeojson_iter(reader) {
			let feature = feature.with_context(|| format!("while reading '{}'", arguments.input))?;
			text.push_str(&encode_feature_with(&feature, &options)?);
			text.push('\n');
			count += 1;
		}
	} else {
		let feature = read_feature(reader).with_context(|| format!("while reading '{}'", arguments.input))?;
		text.push_str(&encode_feature_with(&feature, &options)?);
		text.push('\n');
		count += 1;
	}

	log::info!("normalized {count} feature(s)");
	write_output(arguments.output.as_deref(), &text)
}
