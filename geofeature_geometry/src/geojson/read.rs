use super::decode::{decode_feature, decode_value};
use crate::GeoFeature;
use anyhow::{Context, Result, anyhow};
use geofeature_core::{byte_iterator::ByteIterator, json::parse_json_iter};
use std::io::{BufRead, Read};

/// Reads a single GeoJSON Feature from `reader`.
pub fn read_feature(reader: impl Read) -> Result<GeoFeature> {
	let mut iter = ByteIterator::from_reader(reader, true);
	let json = parse_json_iter(&mut iter)?;
	iter.expect_end()?;
	decode_value(json).context("while decoding GeoJSON feature")
}

fn process_line(line: std::io::Result<String>, index: usize) -> Result<Option<GeoFeature>> {
	match line {
		Ok(line) if line.trim().is_empty() => Ok(None),
		Ok(line) => decode_feature(&line)
			.map(Some)
			.map_err(|e| anyhow!("line {}: {e:#}", index + 1)),
		Err(e) => Err(anyhow!("line {}: {e}", index + 1)),
	}
}

/// Reads newline-delimited GeoJSON: one Feature per line. Blank lines are skipped and
/// errors name the line they occurred on.
pub fn read_ndgeojson_iter(reader: impl BufRead) -> impl Iterator<Item = Result<GeoFeature>> {
	reader
		.lines()
		.enumerate()
		.filter_map(|(index, line)| process_line(line, index).transpose())
}
