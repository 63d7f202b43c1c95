pub mod normalize;
pub mod point;
pub mod probe;

use anyhow::{Context, Result};
use std::{
	fs::File,
	io::{BufRead, BufReader, Write},
	path::Path,
};

/// Opens `input` for reading. `-` stands for stdin.
pub fn open_input(input: &str) -> Result<Box<dyn BufRead>> {
	if input == "-" {
		log::debug!("reading from stdin");
		return Ok(Box::new(std::io::stdin().lock()));
	}
	let file = File::open(input).with_context(|| format!("while opening '{input}'"))?;
	Ok(Box::new(BufReader::new(file)))
}

/// Writes `text` to `output`, or to stdout if no path is given.
pub fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
	if let Some(path) = output {
		log::debug!("writing {} bytes to {path:?}", text.len());
		std::fs::write(path, text).with_context(|| format!("while writing {path:?}"))
	} else {
		let mut stdout = std::io::stdout().lock();
		stdout.write_all(text.as_bytes())?;
		stdout.flush()?;
		Ok(())
	}
}
