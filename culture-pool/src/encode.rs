//! Write side of the pool: sizing pass, filling pass and the two-pass driver.

use std::collections::HashMap;

use crate::{Error, PoolOffset, Result};

/// Words at the start of every pool: the empty string (length + terminator)
/// and one alignment word, so the first real value starts at an odd offset.
pub const RESERVED_WORDS: usize = 3;

/// Words occupied by a string of `units` UTF-16 code units: the length word,
/// the content and a pad word when the content length is even.
pub const fn string_span(units: usize) -> usize {
	let n = units + 1;
	n + n % 2
}

/// Words occupied by an array of `count` entries: the count word, one offset
/// pair per entry and a pad word.
pub const fn array_span(count: usize) -> usize { 2 * count + 2 }

/// Values already placed in the pool during one pass.
///
/// Every pass starts from a fresh set. The empty string and the empty arrays
/// are pre-seeded at [`PoolOffset::EMPTY`].
#[derive(Debug, Clone)]
pub struct DedupeSet {
	strings: HashMap<String, PoolOffset>,
	word_arrays: HashMap<Vec<u16>, PoolOffset>,
}

impl Default for DedupeSet {
	fn default() -> Self { Self::new() }
}

impl DedupeSet {
	pub fn new() -> Self {
		let mut strings = HashMap::new();
		strings.insert(String::new(), PoolOffset::EMPTY);
		let mut word_arrays = HashMap::new();
		word_arrays.insert(Vec::new(), PoolOffset::EMPTY);
		Self { strings, word_arrays }
	}

	pub fn string(&self, s: &str) -> Option<PoolOffset> { self.strings.get(s).copied() }

	pub fn word_array(&self, values: &[u16]) -> Option<PoolOffset> { self.word_arrays.get(values).copied() }

	fn record_string(&mut self, s: &str, at: PoolOffset) { self.strings.insert(s.to_string(), at); }

	fn record_word_array(&mut self, values: &[u16], at: PoolOffset) { self.word_arrays.insert(values.to_vec(), at); }

	/// Distinct strings seen, including the pre-seeded empty string.
	pub fn string_count(&self) -> usize { self.strings.len() }
}

/// Destination of one encoding pass.
///
/// The sizing pass and the filling pass implement the same interface so a
/// single plan can drive both.
pub trait PoolSink {
	fn string(&mut self, s: &str) -> Result<PoolOffset>;
	fn string_array(&mut self, items: &[String]) -> Result<PoolOffset>;
	fn word_array(&mut self, values: &[u16]) -> Result<PoolOffset>;
	/// Next free word index.
	fn cursor(&self) -> usize;
}

fn utf16_len(s: &str) -> Result<usize> {
	let units = s.encode_utf16().count();
	if units > u16::MAX as usize {
		return Err(Error::TooLong { len: units });
	}
	Ok(units)
}

fn check_count(count: usize) -> Result<()> {
	if count > u16::MAX as usize {
		return Err(Error::TooLong { len: count });
	}
	Ok(())
}

/// Sizing pass: counts words without writing, tracking a virtual cursor so
/// its dedupe decisions match the filling pass exactly.
#[derive(Debug, Clone)]
pub struct PoolSizer {
	seen: DedupeSet,
	cursor: usize,
}

impl Default for PoolSizer {
	fn default() -> Self { Self::new() }
}

impl PoolSizer {
	pub fn new() -> Self { Self { seen: DedupeSet::new(), cursor: RESERVED_WORDS } }

	/// Total pool words so far, reserved prefix included.
	pub fn len(&self) -> usize { self.cursor }

	pub fn is_empty(&self) -> bool { self.cursor == RESERVED_WORDS }

	/// Words `s` adds to the pool: 0 when already counted in this pass.
	pub fn size_of_string(&mut self, s: &str) -> Result<usize> {
		if self.seen.string(s).is_some() {
			return Ok(0);
		}
		let units = utf16_len(s)?;
		let at = PoolOffset::from_index(self.cursor)?;
		self.seen.record_string(s, at);
		let span = string_span(units);
		self.cursor += span;
		Ok(span)
	}

	/// Words the elements and the array block add to the pool.
	pub fn size_of_string_array(&mut self, items: &[String]) -> Result<usize> {
		if items.is_empty() {
			return Ok(0);
		}
		check_count(items.len())?;
		let mut words = 0;
		for s in items {
			words += self.size_of_string(s)?;
		}
		let span = array_span(items.len());
		self.cursor += span;
		Ok(words + span)
	}

	pub fn size_of_word_array(&mut self, values: &[u16]) -> Result<usize> {
		if self.seen.word_array(values).is_some() {
			return Ok(0);
		}
		check_count(values.len())?;
		let at = PoolOffset::from_index(self.cursor)?;
		self.seen.record_word_array(values, at);
		let span = string_span(values.len());
		self.cursor += span;
		Ok(span)
	}
}

impl PoolSink for PoolSizer {
	fn string(&mut self, s: &str) -> Result<PoolOffset> {
		self.size_of_string(s)?;
		Ok(self.seen.string(s).unwrap_or(PoolOffset::EMPTY))
	}

	fn string_array(&mut self, items: &[String]) -> Result<PoolOffset> {
		if items.is_empty() {
			return Ok(PoolOffset::EMPTY);
		}
		check_count(items.len())?;
		for s in items {
			self.size_of_string(s)?;
		}
		let at = PoolOffset::from_index(self.cursor)?;
		self.cursor += array_span(items.len());
		Ok(at)
	}

	fn word_array(&mut self, values: &[u16]) -> Result<PoolOffset> {
		self.size_of_word_array(values)?;
		Ok(self.seen.word_array(values).unwrap_or(PoolOffset::EMPTY))
	}

	fn cursor(&self) -> usize { self.cursor }
}

/// Filling pass: appends values to an owned word buffer.
#[derive(Debug, Clone)]
pub struct PoolWriter {
	words: Vec<u16>,
	seen: DedupeSet,
}

impl Default for PoolWriter {
	fn default() -> Self { Self { words: vec![0; RESERVED_WORDS], seen: DedupeSet::new() } }
}

impl PoolWriter {
	pub fn new() -> Self { Self::default() }

	/// Allocate the whole pool up front; fails instead of aborting when the
	/// allocation cannot be satisfied.
	pub fn with_capacity(total_words: usize) -> Result<Self> {
		let mut words = Vec::new();
		words
			.try_reserve_exact(total_words.max(RESERVED_WORDS))
			.map_err(|_| Error::OutOfMemory { words: total_words })?;
		words.resize(RESERVED_WORDS, 0);
		Ok(Self { words, seen: DedupeSet::new() })
	}

	pub fn len(&self) -> usize { self.words.len() }

	pub fn is_empty(&self) -> bool { self.words.len() == RESERVED_WORDS }

	pub fn as_words(&self) -> &[u16] { &self.words }

	pub fn into_words(self) -> Vec<u16> { self.words }

	fn check_aligned(&self) -> Result<()> {
		if self.words.len() % 2 == 0 {
			return Err(Error::Misaligned { cursor: self.words.len() });
		}
		Ok(())
	}

	fn push_units(&mut self, units: &[u16]) {
		self.words.push(units.len() as u16);
		self.words.extend_from_slice(units);
		if units.len() % 2 == 0 {
			self.words.push(0);
		}
	}

	pub fn write_string(&mut self, s: &str) -> Result<PoolOffset> {
		if let Some(at) = self.seen.string(s) {
			return Ok(at);
		}
		self.check_aligned()?;
		utf16_len(s)?;
		let units: Vec<u16> = s.encode_utf16().collect();
		let at = PoolOffset::from_index(self.words.len())?;
		self.push_units(&units);
		self.seen.record_string(s, at);
		Ok(at)
	}

	/// Elements first, then the count word, the offset pairs and the pad.
	pub fn write_string_array(&mut self, items: &[String]) -> Result<PoolOffset> {
		if items.is_empty() {
			return Ok(PoolOffset::EMPTY);
		}
		check_count(items.len())?;
		let offsets = items.iter().map(|s| self.write_string(s)).collect::<Result<Vec<_>>>()?;
		self.check_aligned()?;
		let at = PoolOffset::from_index(self.words.len())?;
		self.words.push(offsets.len() as u16);
		for off in offsets {
			self.words.extend_from_slice(&off.to_words());
		}
		self.words.push(0);
		Ok(at)
	}

	pub fn write_word_array(&mut self, values: &[u16]) -> Result<PoolOffset> {
		if let Some(at) = self.seen.word_array(values) {
			return Ok(at);
		}
		check_count(values.len())?;
		self.check_aligned()?;
		let at = PoolOffset::from_index(self.words.len())?;
		self.push_units(values);
		self.seen.record_word_array(values, at);
		Ok(at)
	}
}

impl PoolSink for PoolWriter {
	fn string(&mut self, s: &str) -> Result<PoolOffset> { self.write_string(s) }
	fn string_array(&mut self, items: &[String]) -> Result<PoolOffset> { self.write_string_array(items) }
	fn word_array(&mut self, values: &[u16]) -> Result<PoolOffset> { self.write_word_array(values) }
	fn cursor(&self) -> usize { self.words.len() }
}

/// Run `plan` once against a [`PoolSizer`] and once against a [`PoolWriter`]
/// sized from the first pass. Returns the second run's output and the pool.
///
/// The plan must be deterministic; a size mismatch between the passes is
/// reported as [`Error::Diverged`].
pub fn encode_two_pass<T, F>(mut plan: F) -> Result<(T, Vec<u16>)>
where
	F: FnMut(&mut dyn PoolSink) -> Result<T>,
{
	let mut sizer = PoolSizer::new();
	plan(&mut sizer)?;
	let sized = sizer.len();
	let mut writer = PoolWriter::with_capacity(sized)?;
	let out = plan(&mut writer)?;
	if writer.len() != sized {
		return Err(Error::Diverged { sized, filled: writer.len() });
	}
	tracing::trace!(words = sized, strings = writer.seen.string_count(), "pool encoded");
	Ok((out, writer.into_words()))
}
