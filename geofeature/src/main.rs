mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Decode GeoJSON features and encode them again
	Normalize(tools::normalize::Subcommand),

	/// Show a summary of a GeoJSON feature
	Probe(tools::probe::Subcommand),

	/// Build a point feature from coordinates
	Point(tools::point::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Normalize(arguments) => tools::normalize::run(arguments),
		Commands::Probe(arguments) => tools::probe::run(arguments),
		Commands::Point(arguments) => tools::point::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;
	use std::path::PathBuf;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	pub fn get_testdata(filename: &str) -> String {
		PathBuf::from(env!("CARGO_MANIFEST_DIR"))
			.parent()
			.unwrap()
			.join("testdata")
			.join(filename)
			.to_string_lossy()
			.into_owned()
	}

	#[test]
	fn help() {
		let err = run_command(vec!["geofeature"]).unwrap_err().to_string();
		assert!(err.contains("Usage: geofeature [OPTIONS] <COMMAND>"), "{err}");
	}

	#[test]
	fn version() {
		let err = run_command(vec!["geofeature", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("geofeature "));
	}

	#[test]
	fn normalize_subcommand() {
		let output = run_command(vec!["geofeature", "normalize"]).unwrap_err().to_string();
		assert!(output.starts_with("Decode GeoJSON features and encode them again"), "{output}");
	}

	#[test]
	fn probe_subcommand() {
		let output = run_command(vec!["geofeature", "probe"]).unwrap_err().to_string();
		assert!(output.starts_with("Show a summary of a GeoJSON feature"), "{output}");
	}

	#[test]
	fn point_subcommand() {
		let output = run_command(vec!["geofeature", "point"]).unwrap_err().to_string();
		assert!(output.starts_with("Build a point feature from coordinates"), "{output}");
	}
}
