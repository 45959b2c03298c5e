//! Culture pool codec.
//! - A flat pool of 16-bit words holding length-prefixed UTF-16 strings,
//!   string arrays (count + offset pairs) and word arrays.
//! - Offsets are word indices relative to the pool start ([`PoolOffset`]).
//! - Offset 0 is the canonical empty string; every write keeps the cursor odd.
//! - Encoding runs a sizing pass and a filling pass over the same plan
//!   ([`encode_two_pass`]), so both passes visit values identically.
//!
//! This crate avoids unsafe code; every read is bounds-checked.

#![forbid(unsafe_code)]

pub mod buffer;
pub mod encode;
pub mod layout;
pub mod offset;

pub use buffer::{words_from_le_bytes, words_to_le_bytes, PoolView};
pub use encode::{
	array_span, encode_two_pass, string_span, DedupeSet, PoolSink, PoolSizer, PoolWriter, RESERVED_WORDS,
};
pub use layout::{EncodeFields, FieldKind, FieldValue, HeaderLayout, HeaderView, Slot};
pub use offset::PoolOffset;

/// Error type for pool operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("pool read out of bounds: offset {offset}, pool length {len}")]
	OutOfBounds { offset: usize, len: usize },
	#[error("pool cursor {cursor} is not odd-aligned")]
	Misaligned { cursor: usize },
	#[error("value too long for the pool: {len} units")]
	TooLong { len: usize },
	#[error("sizing pass computed {sized} words but filling pass wrote {filled}")]
	Diverged { sized: usize, filled: usize },
	#[error("out of memory allocating {words} pool words")]
	OutOfMemory { words: usize },
	#[error("malformed pool data: {0}")]
	Malformed(String),
}

impl Error {
	pub fn malformed(msg: impl Into<String>) -> Self { Self::Malformed(msg.into()) }
}

/// Convenience result alias.
pub type Result<T, E = Error> = core::result::Result<T, E>;
