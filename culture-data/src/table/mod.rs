//! Culture data tables: a fixed-size record array plus a shared pool, with
//! name, id and region indexes.
//!
//! Image layout (little-endian words):
//!
//! ```text
//! 0..2   magic            8..10  records at      16..18 pool at
//! 2      version          10..12 name index at
//! 3      record count     12..14 id index at
//! 4      record words     14..16 region index at
//! 5..8   name / id / region entry counts
//! ```
//!
//! Name and id entries are 6 words (`offset:u32 lcid:u32 record:u16 pad` and
//! `lcid:u32 record:u16 offset:u32 pad`), region entries 4 words
//! (`offset:u32 record:u16 pad`). All offsets are image-relative word indexes
//! except name offsets, which point into the pool.

use std::cmp::Ordering;
use std::path::PathBuf;

use culture_core::Lcid;
use culture_pool::{words_from_le_bytes, HeaderView, PoolOffset, PoolView};

use crate::errors::{Error, Result};
use crate::fields::{CultureFields, FieldId, HEADER_LAYOUT};

pub mod builder;
pub mod builtin;

pub use builder::{Alias, TableBuilder, TableEntry};

pub const TABLE_MAGIC: [u16; 2] = [0x5443, 0x4C42];
pub const TABLE_VERSION: u16 = 1;
pub(crate) const FILE_HEADER_WORDS: usize = 18;
pub(crate) const NAME_ENTRY_WORDS: usize = 6;
pub(crate) const ID_ENTRY_WORDS: usize = 6;
pub(crate) const REGION_ENTRY_WORDS: usize = 4;

/// Where a table's data came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOrigin {
	/// Shipped culture data.
	Builtin,
	/// A custom or replacement culture file.
	Custom { path: PathBuf },
	/// Assembled at runtime from host OS locale data.
	Synthetic { lcid: Lcid },
}

/// Result of a name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameHit {
	pub index: usize,
	pub lcid: Lcid,
	/// Name as stored, original casing.
	pub name: String,
}

/// Result of an id lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdHit {
	pub index: usize,
	pub name: String,
}

#[derive(Debug, Clone)]
struct NameEntry {
	key: String,
	name: String,
	lcid: Lcid,
	record: usize,
}

#[derive(Debug, Clone)]
struct IdEntry {
	lcid: Lcid,
	record: usize,
	name: String,
}

#[derive(Debug, Clone)]
struct RegionEntry {
	key: String,
	record: usize,
}

/// An immutable culture table. Shared by every record it backs.
#[derive(Debug)]
pub struct CultureTable {
	origin: TableOrigin,
	words: Vec<u16>,
	records_at: usize,
	record_words: usize,
	record_count: usize,
	pool_at: usize,
	names: Vec<NameEntry>,
	ids: Vec<IdEntry>,
	regions: Vec<RegionEntry>,
}

fn read_u32(words: &[u16], at: usize) -> Result<u32> {
	match words.get(at..at + 2) {
		Some(&[lo, hi]) => Ok(u32::from(hi) << 16 | u32::from(lo)),
		_ => Err(Error::corrupt_table(format!("word {at} past end of image"))),
	}
}

fn read_u16(words: &[u16], at: usize) -> Result<u16> {
	words.get(at).copied().ok_or_else(|| Error::corrupt_table(format!("word {at} past end of image")))
}

impl CultureTable {
	pub fn from_bytes(bytes: &[u8], origin: TableOrigin) -> Result<Self> {
		Self::from_words(words_from_le_bytes(bytes)?, origin)
	}

	/// Validate an image and index it. Every record is decoded once here so
	/// later reads cannot fail on a structurally valid table.
	pub fn from_words(words: Vec<u16>, origin: TableOrigin) -> Result<Self> {
		if words.len() < FILE_HEADER_WORDS || words[0..2] != TABLE_MAGIC {
			return Err(Error::corrupt_table("bad magic"));
		}
		let version = read_u16(&words, 2)?;
		if version != TABLE_VERSION {
			return Err(Error::corrupt_table(format!("unsupported version {version}")));
		}
		let record_count = read_u16(&words, 3)? as usize;
		let record_words = read_u16(&words, 4)? as usize;
		if record_words != HEADER_LAYOUT.words() {
			return Err(Error::corrupt_table(format!(
				"record size {record_words} words, expected {}",
				HEADER_LAYOUT.words()
			)));
		}
		let name_count = read_u16(&words, 5)? as usize;
		let id_count = read_u16(&words, 6)? as usize;
		let region_count = read_u16(&words, 7)? as usize;
		let records_at = read_u32(&words, 8)? as usize;
		let names_at = read_u32(&words, 10)? as usize;
		let ids_at = read_u32(&words, 12)? as usize;
		let regions_at = read_u32(&words, 14)? as usize;
		let pool_at = read_u32(&words, 16)? as usize;

		let sections = [
			(records_at, record_count * record_words),
			(names_at, name_count * NAME_ENTRY_WORDS),
			(ids_at, id_count * ID_ENTRY_WORDS),
			(regions_at, region_count * REGION_ENTRY_WORDS),
		];
		for (at, len) in sections {
			if at < FILE_HEADER_WORDS || at + len > pool_at {
				return Err(Error::corrupt_table(format!("section at {at} overlaps header or pool")));
			}
		}
		if pool_at > words.len() {
			return Err(Error::corrupt_table("pool starts past end of image"));
		}

		let mut table = Self {
			origin,
			words,
			records_at,
			record_words,
			record_count,
			pool_at,
			names: Vec::with_capacity(name_count),
			ids: Vec::with_capacity(id_count),
			regions: Vec::with_capacity(region_count),
		};
		for i in 0..record_count {
			CultureFields::decode(&table.header(i)?)?;
		}
		table.names = (0..name_count)
			.map(|i| -> Result<NameEntry> {
				let at = names_at + i * NAME_ENTRY_WORDS;
				let name = table.pool_string(read_u32(&table.words, at)?)?;
				let lcid = Lcid::new(read_u32(&table.words, at + 2)?);
				let record = table.check_record(read_u16(&table.words, at + 4)?)?;
				Ok(NameEntry { key: name.to_ascii_lowercase(), name, lcid, record })
			})
			.collect::<Result<_>>()?;
		table.ids = (0..id_count)
			.map(|i| -> Result<IdEntry> {
				let at = ids_at + i * ID_ENTRY_WORDS;
				let lcid = Lcid::new(read_u32(&table.words, at)?);
				let record = table.check_record(read_u16(&table.words, at + 2)?)?;
				let name = table.pool_string(read_u32(&table.words, at + 3)?)?;
				Ok(IdEntry { lcid, record, name })
			})
			.collect::<Result<_>>()?;
		table.regions = (0..region_count)
			.map(|i| -> Result<RegionEntry> {
				let at = regions_at + i * REGION_ENTRY_WORDS;
				let key = table.pool_string(read_u32(&table.words, at)?)?.to_ascii_lowercase();
				let record = table.check_record(read_u16(&table.words, at + 2)?)?;
				Ok(RegionEntry { key, record })
			})
			.collect::<Result<_>>()?;
		table.names.sort_by(|a, b| a.key.cmp(&b.key));
		table.ids.sort_by_key(|e| e.lcid);
		table.regions.sort_by(|a, b| a.key.cmp(&b.key));
		tracing::debug!(origin = ?table.origin, records = record_count, names = name_count, "culture table loaded");
		Ok(table)
	}

	fn check_record(&self, record: u16) -> Result<usize> {
		let record = record as usize;
		if record >= self.record_count {
			return Err(Error::corrupt_table(format!("index entry refers to record {record} of {}", self.record_count)));
		}
		Ok(record)
	}

	fn pool_string(&self, offset: u32) -> Result<String> {
		Ok(self.pool().read_string(PoolOffset::new(offset))?)
	}

	pub fn origin(&self) -> &TableOrigin { &self.origin }

	pub fn is_builtin(&self) -> bool { self.origin == TableOrigin::Builtin }

	/// Number of records.
	pub fn item_count(&self) -> usize { self.record_count }

	/// Size of one record header in words.
	pub fn record_size(&self) -> usize { self.record_words }

	pub fn as_words(&self) -> &[u16] { &self.words }

	pub fn pool(&self) -> PoolView<'_> { PoolView::new(&self.words[self.pool_at..]) }

	/// Header of record `index` together with this table's pool.
	pub fn header(&self, index: usize) -> Result<HeaderView<'_>> {
		if index >= self.record_count {
			return Err(Error::corrupt_table(format!("record {index} of {}", self.record_count)));
		}
		let at = self.records_at + index * self.record_words;
		Ok(HeaderView::new(&self.words[at..at + self.record_words], self.pool()))
	}

	/// Decode a whole record.
	pub fn decode(&self, index: usize) -> Result<CultureFields> { Ok(CultureFields::decode(&self.header(index)?)?) }

	/// Look up a canonical (lowercase) culture name.
	pub fn lookup_by_name(&self, canonical: &str) -> Option<NameHit> {
		let i = self.names.binary_search_by(|e| cmp_key(&e.key, canonical)).ok()?;
		let e = &self.names[i];
		Some(NameHit { index: e.record, lcid: e.lcid, name: e.name.clone() })
	}

	pub fn lookup_by_id(&self, lcid: Lcid) -> Option<IdHit> {
		let i = self.ids.binary_search_by_key(&lcid, |e| e.lcid).ok()?;
		let e = &self.ids[i];
		Some(IdHit { index: e.record, name: e.name.clone() })
	}

	/// Look up a canonical (lowercase) region name. Separate index space from
	/// culture names.
	pub fn lookup_region(&self, canonical: &str) -> Option<usize> {
		let i = self.regions.binary_search_by(|e| cmp_key(&e.key, canonical)).ok()?;
		Some(self.regions[i].record)
	}

	pub fn is_known_id(&self, lcid: Lcid) -> bool { self.lookup_by_id(lcid).is_some() }

	/// Names and ids of every index entry, aliases included.
	pub fn entries(&self) -> impl Iterator<Item = (&str, Lcid)> + '_ {
		self.names.iter().map(|e| (e.name.as_str(), e.lcid))
	}

	/// Decoded `SNAME` and `ILANGUAGE` of a record.
	pub fn identity(&self, index: usize) -> Result<(String, Lcid)> {
		let header = self.header(index)?;
		let name = header.string(FieldId::Name.slot())?;
		let lcid = Lcid::new(u32::from(header.word(FieldId::LanguageId.slot())?));
		Ok((name, lcid))
	}
}

fn cmp_key(key: &str, target: &str) -> Ordering { key.cmp(target) }
