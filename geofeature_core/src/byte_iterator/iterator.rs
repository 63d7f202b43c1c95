//! A peekable byte iterator over any `std::io::Read` source.
//!
//! When debug mode is enabled, the iterator keeps a small ring buffer of the most recently
//! read bytes, so that parse errors can show the text right before the failure.

use anyhow::{Error, Result, anyhow};
use std::io::{self, ErrorKind, Read};

const DEBUG_RING_BUFFER_SIZE: usize = 24;
const BUFFER_SIZE: usize = 4096;

/// Iterator over the bytes of a reader with one byte of look-ahead.
pub struct ByteIterator<'a> {
	buffer: [u8; BUFFER_SIZE],
	buffer_len: usize,
	buffer_pos: usize,
	source: Box<dyn Read + 'a>,
	peeked_byte: Option<u8>,
	position: usize,
	is_debug_enabled: bool,
	debug_buffer: [u8; DEBUG_RING_BUFFER_SIZE],
	read_error: Option<io::Error>,
}

impl<'a> ByteIterator<'a> {
	/// Creates an iterator reading from `reader`.
	///
	/// With `debug` enabled, error messages include a snapshot of the recently read bytes.
	pub fn from_reader(reader: impl Read + 'a, debug: bool) -> Self {
		let mut instance = ByteIterator {
			buffer: [0; BUFFER_SIZE],
			buffer_len: 0,
			buffer_pos: 0,
			source: Box::new(reader),
			peeked_byte: None,
			position: 0,
			is_debug_enabled: debug,
			debug_buffer: [0; DEBUG_RING_BUFFER_SIZE],
			read_error: None,
		};
		instance.fill_buffer();
		instance.advance();
		instance
	}

	/// Creates an iterator over the bytes of a string slice.
	pub fn from_text(text: &'a str, debug: bool) -> Self {
		Self::from_reader(text.as_bytes(), debug)
	}

	/// Refills the buffer. A failed read ends the input and is kept for [`end_error`](Self::end_error).
	fn fill_buffer(&mut self) {
		self.buffer_pos = 0;
		self.buffer_len = 0;
		if self.read_error.is_some() {
			return;
		}
		loop {
			match self.source.read(&mut self.buffer) {
				Ok(len) => {
					self.buffer_len = len;
					return;
				}
				Err(error) if error.kind() == ErrorKind::Interrupted => {}
				Err(error) => {
					self.read_error = Some(error);
					return;
				}
			}
		}
	}

	#[inline]
	fn next_byte(&mut self) -> Option<u8> {
		if self.buffer_pos >= self.buffer_len {
			self.fill_buffer();
			if self.buffer_len == 0 {
				return None;
			}
		}
		let byte = self.buffer[self.buffer_pos];
		self.buffer_pos += 1;
		Some(byte)
	}

	/// Builds an error that names the current byte position and, in debug mode,
	/// the bytes read just before it.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let position = self.position.saturating_sub(1);
		if !self.is_debug_enabled {
			return anyhow!("{msg} at position {position}");
		}

		let (start_index, length) = if self.position < DEBUG_RING_BUFFER_SIZE {
			(0, position)
		} else {
			(self.position % DEBUG_RING_BUFFER_SIZE, DEBUG_RING_BUFFER_SIZE - 1)
		};

		let snapshot: Vec<u8> = self
			.debug_buffer
			.iter()
			.cycle()
			.skip(start_index)
			.take(length)
			.copied()
			.collect();

		let mut snippet = String::from_utf8_lossy(&snapshot).into_owned();
		if self.peeked_byte.is_none() {
			snippet.push_str("<EOF>");
		}
		anyhow!("{msg} at position {position}: {snippet}")
	}

	/// The error for running out of input: the read failure that ended it, if any,
	/// otherwise "unexpected end".
	#[must_use]
	pub fn end_error(&self) -> Error {
		match &self.read_error {
			Some(error) => anyhow!("{error}").context(format!(
				"while reading input at position {}",
				self.position.saturating_sub(1)
			)),
			None => self.format_error("unexpected end"),
		}
	}

	/// Number of bytes consumed so far, plus one for the peeked byte.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Returns the next byte without consuming it.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.peeked_byte
	}

	/// Drops the peeked byte and loads the next one. A no-op at the end of input.
	#[inline]
	pub fn advance(&mut self) {
		if self.peeked_byte.is_none() && self.position > 0 {
			return;
		}
		self.peeked_byte = self.next_byte();
		if self.is_debug_enabled
			&& let Some(byte) = self.peeked_byte
		{
			self.debug_buffer[self.position % DEBUG_RING_BUFFER_SIZE] = byte;
		}
		self.position += 1;
	}

	/// Returns the peeked byte and advances.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peeked_byte;
		self.advance();
		current_byte
	}

	/// Like [`consume`](Self::consume), but the end of input is an error.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		if let Some(current_byte) = self.peeked_byte {
			self.advance();
			Ok(current_byte)
		} else {
			Err(self.end_error())
		}
	}

	/// Like [`peek`](Self::peek), but the end of input is an error.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peeked_byte.ok_or_else(|| self.end_error())
	}

	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Fails unless only whitespace is left. A read failure also fails here.
	pub fn expect_end(&mut self) -> Result<()> {
		self.skip_whitespace();
		match self.peek() {
			None if self.read_error.is_some() => Err(self.end_error()),
			None => Ok(()),
			Some(_) => Err(self.format_error("unexpected trailing characters")),
		}
	}
}
