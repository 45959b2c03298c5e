//! Table image authoring. Used for the compiled-in builtin table, custom
//! culture files and synthetic single-record tables.

use std::collections::BTreeMap;
use std::path::Path;

use culture_core::Lcid;
use culture_pool::{encode_two_pass, words_to_le_bytes, PoolOffset, PoolSink};
use serde::{Deserialize, Serialize};

use super::{
	CultureTable, TableOrigin, FILE_HEADER_WORDS, ID_ENTRY_WORDS, NAME_ENTRY_WORDS, REGION_ENTRY_WORDS, TABLE_MAGIC,
	TABLE_VERSION,
};
use crate::errors::{Error, Result};
use crate::fields::{CultureFields, HEADER_LAYOUT};

/// An extra name and id that resolve to an existing record, such as an
/// alternate sort order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
	pub name: String,
	pub id: Lcid,
}

/// One record plus the aliases indexed against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
	pub fields: CultureFields,
	#[serde(default)]
	pub aliases: Vec<Alias>,
}

impl TableEntry {
	pub fn new(fields: CultureFields) -> Self { Self { fields, aliases: Vec::new() } }

	pub fn alias(&mut self, name: impl Into<String>, id: Lcid) -> &mut Self {
		self.aliases.push(Alias { name: name.into(), id });
		self
	}

	fn lcid(&self) -> Lcid { Lcid::new(u32::from(self.fields.language_id)) }
}

struct Placed {
	headers: Vec<Vec<u16>>,
	names: Vec<PoolOffset>,
	regions: Vec<(usize, PoolOffset)>,
}

#[derive(Debug, Default, Clone)]
pub struct TableBuilder {
	entries: Vec<TableEntry>,
}

fn count16(what: &str, n: usize) -> Result<u16> {
	u16::try_from(n).map_err(|_| Error::corrupt_table(format!("too many {what}: {n}")))
}

fn u32_words(n: usize) -> Result<[u16; 2]> {
	let v = u32::try_from(n).map_err(|_| Error::corrupt_table(format!("image offset {n} exceeds 32 bits")))?;
	Ok([v as u16, (v >> 16) as u16])
}

impl TableBuilder {
	pub fn new() -> Self { Self::default() }

	pub fn from_entries(entries: impl IntoIterator<Item = TableEntry>) -> Self {
		Self { entries: entries.into_iter().collect() }
	}

	pub fn add(&mut self, fields: CultureFields) -> &mut TableEntry {
		self.entries.push(TableEntry::new(fields));
		let last = self.entries.len() - 1;
		&mut self.entries[last]
	}

	pub fn push(&mut self, entry: TableEntry) { self.entries.push(entry); }

	pub fn len(&self) -> usize { self.entries.len() }

	pub fn is_empty(&self) -> bool { self.entries.is_empty() }

	/// Every (name, id, record) triple the name index will hold.
	fn index_names(&self) -> Vec<(&str, Lcid, usize)> {
		self.entries
			.iter()
			.enumerate()
			.flat_map(|(i, e)| {
				std::iter::once((e.fields.name.as_str(), e.lcid(), i))
					.chain(e.aliases.iter().map(move |a| (a.name.as_str(), a.id, i)))
			})
			.collect()
	}

	/// Encode to a word image. Headers are placed first, then index names,
	/// then region names (first culture naming a region wins).
	pub fn build(&self) -> Result<Vec<u16>> {
		let record_count = count16("records", self.entries.len())?;
		let names = self.index_names();
		let mut region_owner: BTreeMap<String, usize> = BTreeMap::new();
		for (i, e) in self.entries.iter().enumerate() {
			if !e.fields.region_name.is_empty() {
				region_owner.entry(e.fields.region_name.to_ascii_lowercase()).or_insert(i);
			}
		}

		let (placed, pool) = encode_two_pass(|sink: &mut dyn PoolSink| {
			let headers = self
				.entries
				.iter()
				.map(|e| HEADER_LAYOUT.encode(&e.fields, sink))
				.collect::<culture_pool::Result<Vec<_>>>()?;
			let name_offsets =
				names.iter().map(|(name, _, _)| sink.string(name)).collect::<culture_pool::Result<Vec<_>>>()?;
			let regions = region_owner
				.values()
				.map(|&i| -> culture_pool::Result<_> { Ok((i, sink.string(&self.entries[i].fields.region_name)?)) })
				.collect::<culture_pool::Result<Vec<_>>>()?;
			Ok(Placed { headers, names: name_offsets, regions })
		})?;

		let mut by_name: Vec<(String, usize)> =
			names.iter().enumerate().map(|(k, (name, _, _))| (name.to_ascii_lowercase(), k)).collect();
		by_name.sort();
		if let Some(w) = by_name.windows(2).find(|w| w[0].0 == w[1].0) {
			return Err(Error::corrupt_table(format!("duplicate culture name {:?}", w[0].0)));
		}
		let mut by_id: Vec<(Lcid, usize)> = names.iter().enumerate().map(|(k, (_, id, _))| (*id, k)).collect();
		by_id.sort();
		if let Some(w) = by_id.windows(2).find(|w| w[0].0 == w[1].0) {
			return Err(Error::corrupt_table(format!("duplicate culture id {}", w[0].0)));
		}

		let record_words = HEADER_LAYOUT.words();
		let records_at = FILE_HEADER_WORDS;
		let names_at = records_at + self.entries.len() * record_words;
		let ids_at = names_at + names.len() * NAME_ENTRY_WORDS;
		let regions_at = ids_at + names.len() * ID_ENTRY_WORDS;
		let pool_at = regions_at + placed.regions.len() * REGION_ENTRY_WORDS;

		let mut image = Vec::new();
		image
			.try_reserve_exact(pool_at + pool.len())
			.map_err(|_| culture_pool::Error::OutOfMemory { words: pool_at + pool.len() })?;
		image.extend_from_slice(&TABLE_MAGIC);
		image.push(TABLE_VERSION);
		image.push(record_count);
		image.push(count16("record words", record_words)?);
		image.push(count16("names", names.len())?);
		image.push(count16("ids", names.len())?);
		image.push(count16("regions", placed.regions.len())?);
		for at in [records_at, names_at, ids_at, regions_at, pool_at] {
			image.extend_from_slice(&u32_words(at)?);
		}
		for header in &placed.headers {
			image.extend_from_slice(header);
		}
		for &(_, k) in &by_name {
			let (_, id, record) = names[k];
			image.extend_from_slice(&placed.names[k].to_words());
			image.extend_from_slice(&u32_words(id.get() as usize)?);
			image.extend_from_slice(&[record as u16, 0]);
		}
		for &(id, k) in &by_id {
			let (_, _, record) = names[k];
			image.extend_from_slice(&u32_words(id.get() as usize)?);
			image.push(record as u16);
			image.extend_from_slice(&placed.names[k].to_words());
			image.push(0);
		}
		for &(record, offset) in &placed.regions {
			image.extend_from_slice(&offset.to_words());
			image.extend_from_slice(&[record as u16, 0]);
		}
		debug_assert_eq!(image.len(), pool_at);
		image.extend_from_slice(&pool);
		Ok(image)
	}

	pub fn build_table(&self, origin: TableOrigin) -> Result<CultureTable> {
		CultureTable::from_words(self.build()?, origin)
	}

	/// Write the image to `path` as little-endian bytes.
	pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
		let words = self.build()?;
		std::fs::write(path.as_ref(), words_to_le_bytes(&words))?;
		tracing::info!(path = %path.as_ref().display(), records = self.entries.len(), words = words.len(), "culture table written");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn culture(id: u16, name: &str) -> CultureFields {
		CultureFields { language_id: id, name: name.into(), ..Default::default() }
	}

	#[test]
	fn duplicate_names_rejected() {
		let mut b = TableBuilder::new();
		b.add(culture(0x0409, "en-US"));
		b.add(culture(0x0809, "EN-us"));
		assert!(matches!(b.build(), Err(Error::CorruptTable(_))));
	}

	#[test]
	fn duplicate_ids_rejected() {
		let mut b = TableBuilder::new();
		b.add(culture(0x0409, "en-US")).alias("en-US_x", Lcid::new(0x0409));
		assert!(matches!(b.build(), Err(Error::CorruptTable(_))));
	}

	#[test]
	fn first_culture_owns_region() {
		let mut b = TableBuilder::new();
		b.add(CultureFields { region_name: "CH".into(), ..culture(0x0807, "de-CH") });
		b.add(CultureFields { region_name: "CH".into(), ..culture(0x100C, "fr-CH") });
		let t = b.build_table(TableOrigin::Builtin).unwrap();
		assert_eq!(t.lookup_region("ch"), Some(0));
	}

	#[test]
	fn written_file_loads_back() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("x-custom.nlp");
		let mut b = TableBuilder::new();
		b.add(culture(0x1000, "x-custom"));
		b.write_to(&path).unwrap();
		let bytes = std::fs::read(&path).unwrap();
		let t = CultureTable::from_bytes(&bytes, TableOrigin::Custom { path: path.clone() }).unwrap();
		assert_eq!(t.lookup_by_name("x-custom").unwrap().lcid, Lcid::CUSTOM_UNSPECIFIED);
	}

	#[test]
	fn header_strings_share_pool_with_index() {
		let mut b = TableBuilder::new();
		b.add(culture(0x0407, "de-DE"));
		let t = b.build_table(TableOrigin::Builtin).unwrap();
		let header = t.header(0).unwrap();
		let name_offset = header.offset(crate::fields::FieldId::Name.slot()).unwrap();
		assert_eq!(t.pool().read_string(name_offset).unwrap(), "de-DE");
		// one string beyond the reserved words: "de-DE" (5 units, 6 words)
		assert_eq!(t.pool().len(), culture_pool::RESERVED_WORDS + 6);
	}
}
