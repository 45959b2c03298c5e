//! Mapping between cultures and regions and the fixed "data item" numbers
//! of the legacy persistence format.
//!
//! Lookups toward items never fail: ids the map cannot represent (custom
//! cultures, for one) map to item 0, the invariant culture. Lookups from an
//! item are strict, since an unknown item means corrupt persisted data.

use culture_core::Lcid;
use once_cell::sync::Lazy;

use crate::errors::{Error, Result};

/// (culture id, item) pairs of the default map.
const CULTURE_ITEMS: &[(u32, u16)] = &[
	(0x007F, 0),
	(0x0009, 1),
	(0x0409, 2),
	(0x0809, 3),
	(0x0007, 4),
	(0x0407, 5),
	(0x10407, 6),
	(0x000A, 7),
	(0x0C0A, 8),
	(0x040A, 9),
	(0x000C, 10),
	(0x040C, 11),
	(0x0011, 12),
	(0x0411, 13),
	(0x40411, 14),
];

/// (builtin region record index, item) pairs of the default map.
const REGION_ITEMS: &[(u16, u16)] = &[(0, 0), (2, 1), (3, 2), (5, 3), (7, 4), (9, 5), (11, 6)];

static DEFAULT_MAP: Lazy<LegacyIndexMap> = Lazy::new(|| LegacyIndexMap::new(CULTURE_ITEMS, REGION_ITEMS));

#[derive(Debug, Clone, Default)]
pub struct LegacyIndexMap {
	/// Sorted by id.
	culture_to_item: Vec<(Lcid, u16)>,
	/// Indexed by item.
	item_to_culture: Vec<Option<Lcid>>,
	/// Sorted by table index.
	region_to_item: Vec<(u16, u16)>,
	/// Sorted by item.
	item_to_region: Vec<(u16, u16)>,
}

impl LegacyIndexMap {
	pub fn new(cultures: &[(u32, u16)], regions: &[(u16, u16)]) -> Self {
		let mut culture_to_item: Vec<(Lcid, u16)> = cultures.iter().map(|&(id, item)| (Lcid::new(id), item)).collect();
		culture_to_item.sort_unstable();
		let len = cultures.iter().map(|&(_, item)| item as usize + 1).max().unwrap_or(0);
		let mut item_to_culture = vec![None; len];
		for &(id, item) in cultures {
			item_to_culture[item as usize] = Some(Lcid::new(id));
		}
		let mut region_to_item = regions.to_vec();
		region_to_item.sort_unstable();
		let mut item_to_region: Vec<(u16, u16)> = regions.iter().map(|&(index, item)| (item, index)).collect();
		item_to_region.sort_unstable();
		Self { culture_to_item, item_to_culture, region_to_item, item_to_region }
	}

	/// The map matching the builtin table, loaded once.
	pub fn default_map() -> &'static LegacyIndexMap { &DEFAULT_MAP }

	pub fn culture_item(&self, id: Lcid) -> u16 {
		self.culture_to_item.binary_search_by_key(&id, |&(i, _)| i).map_or(0, |k| self.culture_to_item[k].1)
	}

	pub fn culture_id(&self, item: u16) -> Result<Lcid> {
		self.item_to_culture
			.get(item as usize)
			.copied()
			.flatten()
			.ok_or_else(|| Error::invalid_state(format!("culture data item {item} out of range")))
	}

	pub fn region_item(&self, table_index: usize) -> u16 {
		let Ok(index) = u16::try_from(table_index) else { return 0 };
		self.region_to_item.binary_search_by_key(&index, |&(i, _)| i).map_or(0, |k| self.region_to_item[k].1)
	}

	pub fn region_index(&self, item: u16) -> Result<usize> {
		self.item_to_region
			.binary_search_by_key(&item, |&(i, _)| i)
			.map(|k| self.item_to_region[k].1 as usize)
			.map_err(|_| Error::invalid_state(format!("region data item {item} out of range")))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::table::builtin::builtin_table;

	#[test]
	fn culture_mappings_are_asymmetric() {
		let map = LegacyIndexMap::default_map();
		assert_eq!(map.culture_item(Lcid::new(0x10407)), 6);
		assert_eq!(map.culture_id(6).unwrap(), Lcid::new(0x10407));
		assert_eq!(map.culture_item(Lcid::CUSTOM_UNSPECIFIED), 0);
		assert!(matches!(map.culture_id(999), Err(Error::SerializationInvalidState(_))));
	}

	#[test]
	fn region_mappings() {
		let map = LegacyIndexMap::default_map();
		assert_eq!(map.region_item(5), 3);
		assert_eq!(map.region_index(3).unwrap(), 5);
		assert_eq!(map.region_item(1), 0);
		assert_eq!(map.region_item(usize::MAX), 0);
		assert!(map.region_index(42).is_err());
	}

	#[test]
	fn default_map_matches_builtin_table() {
		let t = builtin_table().unwrap();
		let map = LegacyIndexMap::default_map();
		for &(id, item) in CULTURE_ITEMS {
			assert!(t.is_known_id(Lcid::new(id)), "{id:#x}");
			assert_eq!(map.culture_item(Lcid::new(id)), item);
		}
		for &(index, _) in REGION_ITEMS {
			let region = t.decode(index as usize).unwrap().region_name;
			assert_eq!(t.lookup_region(&region.to_ascii_lowercase()), Some(index as usize));
		}
	}
}
