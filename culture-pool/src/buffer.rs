//! Read side of the pool: bounds-checked decoding of strings and arrays.

use crate::{Error, PoolOffset, Result};

/// Borrowed, read-only view of a pool.
///
/// ```
/// use culture_pool::{encode_two_pass, PoolSink, PoolView};
/// let (off, words) = encode_two_pass(|sink| sink.string("abc")).unwrap();
/// let view = PoolView::new(&words);
/// assert_eq!(view.read_string(off).unwrap(), "abc");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PoolView<'a> {
	words: &'a [u16],
}

impl<'a> PoolView<'a> {
	pub fn new(words: &'a [u16]) -> Self { Self { words } }

	pub fn len(&self) -> usize { self.words.len() }

	pub fn is_empty(&self) -> bool { self.words.is_empty() }

	pub fn as_words(&self) -> &'a [u16] { self.words }

	fn word(&self, index: usize) -> Result<u16> {
		self.words.get(index).copied().ok_or(Error::OutOfBounds { offset: index, len: self.words.len() })
	}

	fn span(&self, start: usize, count: usize) -> Result<&'a [u16]> {
		let end = start.checked_add(count).ok_or(Error::OutOfBounds { offset: start, len: self.words.len() })?;
		self.words.get(start..end).ok_or(Error::OutOfBounds { offset: end, len: self.words.len() })
	}

	/// Decode the length-prefixed string at `offset`.
	pub fn read_string(&self, offset: PoolOffset) -> Result<String> {
		if offset.is_empty_slot() {
			return Ok(String::new());
		}
		let at = offset.index();
		let len = self.word(at)? as usize;
		if len == 0 {
			return Ok(String::new());
		}
		let units = self.span(at + 1, len)?;
		String::from_utf16(units).map_err(|_| Error::malformed(format!("invalid UTF-16 string at {offset}")))
	}

	/// Decode the string array at `offset`: a count word followed by offset pairs.
	pub fn read_string_array(&self, offset: PoolOffset) -> Result<Vec<String>> {
		let at = offset.index();
		let count = self.word(at)? as usize;
		let pairs = self.span(at + 1, count * 2)?;
		pairs
			.chunks_exact(2)
			.map(|pair| self.read_string(PoolOffset::from_words(pair[0], pair[1])))
			.collect()
	}

	/// Decode the word array at `offset`: a count word followed by raw values.
	pub fn read_word_array(&self, offset: PoolOffset) -> Result<Vec<u16>> {
		let at = offset.index();
		let count = self.word(at)? as usize;
		Ok(self.span(at + 1, count)?.to_vec())
	}
}

/// Reinterpret little-endian bytes as words.
pub fn words_from_le_bytes(bytes: &[u8]) -> Result<Vec<u16>> {
	if bytes.len() % 2 != 0 {
		return Err(Error::malformed(format!("odd byte length {}", bytes.len())));
	}
	let mut words = Vec::new();
	words.try_reserve_exact(bytes.len() / 2).map_err(|_| Error::OutOfMemory { words: bytes.len() / 2 })?;
	words.extend(bytes.chunks_exact(2).map(|b| u16::from_le_bytes([b[0], b[1]])));
	Ok(words)
}

pub fn words_to_le_bytes(words: &[u16]) -> Vec<u8> {
	words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_sentinel_never_touches_content() {
		// A zero-length view still decodes offset 0.
		let view = PoolView::new(&[]);
		assert_eq!(view.read_string(PoolOffset::EMPTY).unwrap(), "");
	}

	#[test]
	fn reads_handwritten_layout() {
		// [0] empty, [1] pad, [2] pad, [3] "hi" + pad, [7] array of one → @3
		let words = [0, 0, 0, 2, 'h' as u16, 'i' as u16, 0, 1, 3, 0, 0];
		let view = PoolView::new(&words);
		assert_eq!(view.read_string(PoolOffset::new(3)).unwrap(), "hi");
		assert_eq!(view.read_string_array(PoolOffset::new(7)).unwrap(), vec!["hi".to_string()]);
		assert_eq!(view.read_word_array(PoolOffset::new(3)).unwrap(), vec!['h' as u16, 'i' as u16]);
	}

	#[test]
	fn out_of_bounds_is_an_error() {
		let words = [0, 0, 0, 9, 'a' as u16];
		let view = PoolView::new(&words);
		assert!(matches!(view.read_string(PoolOffset::new(3)), Err(Error::OutOfBounds { .. })));
		assert!(matches!(view.read_string(PoolOffset::new(40)), Err(Error::OutOfBounds { .. })));
	}

	#[test]
	fn invalid_utf16_is_malformed() {
		let words = [0, 0, 0, 1, 0xD800, 0];
		let view = PoolView::new(&words);
		assert!(matches!(view.read_string(PoolOffset::new(3)), Err(Error::Malformed(_))));
	}

	#[test]
	fn byte_conversion() {
		let words = words_from_le_bytes(&[0x34, 0x12, 0xFF, 0x00]).unwrap();
		assert_eq!(words, vec![0x1234, 0x00FF]);
		assert_eq!(words_to_le_bytes(&words), vec![0x34, 0x12, 0xFF, 0x00]);
		assert!(words_from_le_bytes(&[1, 2, 3]).is_err());
	}
}
