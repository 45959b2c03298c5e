use std::fmt;

/// Word index into a pool, relative to the pool start (not the image start).
///
/// Stored in headers and arrays as two words, low word first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PoolOffset(u32);

impl PoolOffset {
	/// The canonical empty string (and empty array) slot.
	pub const EMPTY: PoolOffset = PoolOffset(0);

	pub const fn new(raw: u32) -> Self { Self(raw) }

	pub const fn get(self) -> u32 { self.0 }

	pub const fn index(self) -> usize { self.0 as usize }

	pub const fn is_empty_slot(self) -> bool { self.0 == 0 }

	pub fn from_index(index: usize) -> crate::Result<Self> {
		u32::try_from(index).map(Self).map_err(|_| crate::Error::TooLong { len: index })
	}

	pub const fn to_words(self) -> [u16; 2] { [(self.0 & 0xFFFF) as u16, (self.0 >> 16) as u16] }

	pub const fn from_words(lo: u16, hi: u16) -> Self { Self((hi as u32) << 16 | lo as u32) }
}

impl fmt::Display for PoolOffset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "@{}", self.0) }
}
