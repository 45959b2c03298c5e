//! Fixed header layout: a dense sequence of inline words and pool offsets.

use crate::{Error, PoolOffset, PoolSink, PoolView, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
	/// Inline 16-bit scalar.
	Word,
	/// Offset of a string.
	Str,
	/// Offset of a string array.
	StrArray,
	/// Offset of a word array.
	WordArray,
}

impl FieldKind {
	/// Header words the field occupies.
	pub const fn header_words(self) -> usize {
		match self {
			FieldKind::Word => 1,
			_ => 2,
		}
	}
}

/// One field value handed to the encoder.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
	Word(u16),
	Str(&'a str),
	StrArray(&'a [String]),
	WordArray(&'a [u16]),
}

impl FieldValue<'_> {
	pub fn kind(&self) -> FieldKind {
		match self {
			FieldValue::Word(_) => FieldKind::Word,
			FieldValue::Str(_) => FieldKind::Str,
			FieldValue::StrArray(_) => FieldKind::StrArray,
			FieldValue::WordArray(_) => FieldKind::WordArray,
		}
	}
}

/// A record whose fields can be visited in header order.
///
/// Implementations must visit the same fields in the same order on every
/// call: both encoding passes rely on it.
pub trait EncodeFields {
	fn for_each_field(&self, visit: &mut dyn FnMut(FieldValue<'_>) -> Result<()>) -> Result<()>;
}

/// Position of one field inside the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
	pub word: usize,
	pub kind: FieldKind,
}

/// Slot positions for a field list. The total size is padded to an even
/// number of words so consecutive headers keep offset pairs aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
	slots: Vec<Slot>,
	words: usize,
}

impl HeaderLayout {
	pub fn new(kinds: impl IntoIterator<Item = FieldKind>) -> Self {
		let mut word = 0;
		let slots = kinds
			.into_iter()
			.map(|kind| {
				let slot = Slot { word, kind };
				word += kind.header_words();
				slot
			})
			.collect();
		Self { slots, words: word + word % 2 }
	}

	/// Header size in words.
	pub fn words(&self) -> usize { self.words }

	pub fn len(&self) -> usize { self.slots.len() }

	pub fn is_empty(&self) -> bool { self.slots.is_empty() }

	pub fn slot(&self, index: usize) -> Option<Slot> { self.slots.get(index).copied() }

	pub fn slots(&self) -> &[Slot] { &self.slots }

	/// Place every field of `record` through `sink` and return the header words.
	pub fn encode<R: EncodeFields + ?Sized>(&self, record: &R, sink: &mut dyn PoolSink) -> Result<Vec<u16>> {
		let mut header = vec![0u16; self.words];
		let mut index = 0usize;
		record.for_each_field(&mut |value| {
			let slot = self
				.slot(index)
				.ok_or_else(|| Error::malformed(format!("record has more than {} fields", self.len())))?;
			if slot.kind != value.kind() {
				return Err(Error::malformed(format!(
					"field {index}: expected {:?}, got {:?}",
					slot.kind,
					value.kind()
				)));
			}
			let offset = match value {
				FieldValue::Word(v) => {
					header[slot.word] = v;
					None
				}
				FieldValue::Str(s) => Some(sink.string(s)?),
				FieldValue::StrArray(items) => Some(sink.string_array(items)?),
				FieldValue::WordArray(values) => Some(sink.word_array(values)?),
			};
			if let Some(off) = offset {
				header[slot.word..slot.word + 2].copy_from_slice(&off.to_words());
			}
			index += 1;
			Ok(())
		})?;
		if index != self.len() {
			return Err(Error::malformed(format!("record visited {index} of {} fields", self.len())));
		}
		Ok(header)
	}
}

/// Read access to one encoded header and the pool its offsets point into.
#[derive(Debug, Clone, Copy)]
pub struct HeaderView<'a> {
	header: &'a [u16],
	pool: PoolView<'a>,
}

impl<'a> HeaderView<'a> {
	pub fn new(header: &'a [u16], pool: PoolView<'a>) -> Self { Self { header, pool } }

	pub fn pool(&self) -> PoolView<'a> { self.pool }

	fn at(&self, word: usize) -> Result<u16> {
		self.header.get(word).copied().ok_or(Error::OutOfBounds { offset: word, len: self.header.len() })
	}

	fn expect(slot: Slot, kind: FieldKind) -> Result<()> {
		if slot.kind != kind {
			return Err(Error::malformed(format!("slot at word {} is {:?}, read as {kind:?}", slot.word, slot.kind)));
		}
		Ok(())
	}

	pub fn word(&self, slot: Slot) -> Result<u16> {
		Self::expect(slot, FieldKind::Word)?;
		self.at(slot.word)
	}

	pub fn offset(&self, slot: Slot) -> Result<PoolOffset> {
		if slot.kind == FieldKind::Word {
			return Err(Error::malformed(format!("slot at word {} holds no offset", slot.word)));
		}
		Ok(PoolOffset::from_words(self.at(slot.word)?, self.at(slot.word + 1)?))
	}

	pub fn string(&self, slot: Slot) -> Result<String> {
		Self::expect(slot, FieldKind::Str)?;
		self.pool.read_string(self.offset(slot)?)
	}

	pub fn string_array(&self, slot: Slot) -> Result<Vec<String>> {
		Self::expect(slot, FieldKind::StrArray)?;
		self.pool.read_string_array(self.offset(slot)?)
	}

	pub fn word_array(&self, slot: Slot) -> Result<Vec<u16>> {
		Self::expect(slot, FieldKind::WordArray)?;
		self.pool.read_word_array(self.offset(slot)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::encode_two_pass;

	struct Sample {
		digits: u16,
		name: String,
		days: Vec<String>,
		grouping: Vec<u16>,
	}

	impl EncodeFields for Sample {
		fn for_each_field(&self, visit: &mut dyn FnMut(FieldValue<'_>) -> Result<()>) -> Result<()> {
			visit(FieldValue::Word(self.digits))?;
			visit(FieldValue::Str(&self.name))?;
			visit(FieldValue::StrArray(&self.days))?;
			visit(FieldValue::WordArray(&self.grouping))
		}
	}

	fn layout() -> HeaderLayout {
		HeaderLayout::new([FieldKind::Word, FieldKind::Str, FieldKind::StrArray, FieldKind::WordArray])
	}

	#[test]
	fn layout_positions_and_padding() {
		let l = layout();
		assert_eq!(l.slot(1), Some(Slot { word: 1, kind: FieldKind::Str }));
		assert_eq!(l.slot(3), Some(Slot { word: 5, kind: FieldKind::WordArray }));
		// 1 + 2 + 2 + 2 = 7, padded to 8
		assert_eq!(l.words(), 8);
	}

	#[test]
	fn header_roundtrip() {
		let l = layout();
		let rec = Sample { digits: 2, name: "fr-FR".into(), days: vec!["lundi".into(), "mardi".into()], grouping: vec![3] };
		let (header, pool) = encode_two_pass(|sink| l.encode(&rec, sink)).unwrap();
		let view = HeaderView::new(&header, PoolView::new(&pool));
		assert_eq!(view.word(l.slots()[0]).unwrap(), 2);
		assert_eq!(view.string(l.slots()[1]).unwrap(), "fr-FR");
		assert_eq!(view.string_array(l.slots()[2]).unwrap(), rec.days);
		assert_eq!(view.word_array(l.slots()[3]).unwrap(), vec![3]);
	}

	#[test]
	fn kind_mismatch_rejected() {
		let l = HeaderLayout::new([FieldKind::Str]);
		let rec = Sample { digits: 0, name: String::new(), days: vec![], grouping: vec![] };
		let err = encode_two_pass(|sink| l.encode(&rec, sink)).unwrap_err();
		assert!(matches!(err, Error::Malformed(_)));
	}

	#[test]
	fn reading_with_wrong_kind_fails() {
		let l = layout();
		let header = vec![0u16; l.words()];
		let pool = vec![0u16; 3];
		let view = HeaderView::new(&header, PoolView::new(&pool));
		assert!(view.string(l.slots()[0]).is_err());
		assert!(view.offset(l.slots()[0]).is_err());
		assert_eq!(view.string(l.slots()[1]).unwrap(), "");
	}
}
