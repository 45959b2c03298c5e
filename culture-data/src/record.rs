//! Resolved culture records.
//!
//! A record is an immutable, shared handle on one entry of a backing table
//! plus the user override flag. Cloning with a different flag shares the
//! same data.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use culture_core::Lcid;
use culture_pool::{HeaderView, Slot};
use serde::Serialize;

use crate::fields::{CultureFields, FieldId};
use crate::legacy::LegacyIndexMap;
use crate::provider::LocaleProvider;
use crate::table::{CultureTable, TableOrigin};

/// Which kind of table backs a record. Exactly one holds per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
	Builtin,
	Custom,
	Synthetic,
}

pub(crate) struct RecordData {
	pub(crate) table: Arc<CultureTable>,
	pub(crate) index: usize,
	pub(crate) culture_id: Lcid,
	pub(crate) culture_name: String,
	pub(crate) actual_id: Lcid,
	pub(crate) actual_name: String,
	pub(crate) is_synthetic: bool,
	pub(crate) provider: Arc<dyn LocaleProvider>,
}

#[derive(Clone)]
pub struct CultureRecord {
	data: Arc<RecordData>,
	use_user_override: bool,
}

impl CultureRecord {
	pub(crate) fn new(data: RecordData, use_user_override: bool) -> Self {
		Self { data: Arc::new(data), use_user_override }
	}

	pub fn use_user_override(&self) -> bool { self.use_user_override }

	/// Same data with the override flag set to `use_user_override`. Returns
	/// an identical handle when the flag already matches.
	pub fn clone_with_user_override(&self, use_user_override: bool) -> Self {
		Self { data: Arc::clone(&self.data), use_user_override }
	}

	/// Whether both records are backed by the same decoded data.
	pub fn shares_data_with(&self, other: &CultureRecord) -> bool { Arc::ptr_eq(&self.data, &other.data) }

	pub fn culture_id(&self) -> Lcid { self.data.culture_id }

	pub fn culture_name(&self) -> &str { &self.data.culture_name }

	/// Id the caller asked for, such as an alternate sort or OS replacement id.
	pub fn actual_culture_id(&self) -> Lcid { self.data.actual_id }

	pub fn actual_name(&self) -> &str { &self.data.actual_name }

	pub fn provenance(&self) -> Provenance {
		match self.data.table.origin() {
			TableOrigin::Builtin => Provenance::Builtin,
			TableOrigin::Custom { .. } => Provenance::Custom,
			TableOrigin::Synthetic { .. } => Provenance::Synthetic,
		}
	}

	/// The culture is an OS locale unknown to the builtin table.
	pub fn is_synthetic(&self) -> bool { self.data.is_synthetic }

	pub fn is_custom_culture(&self) -> bool { self.provenance() == Provenance::Custom }

	/// A custom file standing in for a culture with a concrete id.
	pub fn is_replacement_culture(&self) -> bool {
		self.is_custom_culture() && !self.data.culture_id.is_custom_sentinel()
	}

	pub fn table(&self) -> &Arc<CultureTable> { &self.data.table }

	/// Record index within [`CultureRecord::table`].
	pub fn data_offset(&self) -> usize { self.data.index }

	pub(crate) fn provider(&self) -> &dyn LocaleProvider { self.data.provider.as_ref() }

	/// Decode every stored field. Table values only; no user overrides.
	pub fn fields(&self) -> CultureFields {
		self.data.table.decode(self.data.index).unwrap_or_else(|e| {
			tracing::error!(culture = %self.data.culture_name, error = %e, "culture record unreadable");
			CultureFields::default()
		})
	}

	pub fn legacy_data_item(&self) -> u16 { LegacyIndexMap::default_map().culture_item(self.culture_id()) }

	/// Legacy item of the region this record was resolved from; 0 outside
	/// the builtin table.
	pub fn legacy_region_item(&self) -> u16 {
		match self.provenance() {
			Provenance::Builtin => LegacyIndexMap::default_map().region_item(self.data.index),
			_ => 0,
		}
	}

	fn read<T: Default>(&self, field: FieldId, f: impl FnOnce(&HeaderView<'_>, Slot) -> culture_pool::Result<T>) -> T {
		let read = self.data.table.header(self.data.index).and_then(|view| Ok(f(&view, field.slot())?));
		read.unwrap_or_else(|e| {
			tracing::error!(culture = %self.data.culture_name, field = field.tag(), error = %e, "culture field unreadable");
			T::default()
		})
	}

	pub(crate) fn word(&self, field: FieldId) -> u16 { self.read(field, |v, s| v.word(s)) }

	pub(crate) fn string(&self, field: FieldId) -> String { self.read(field, |v, s| v.string(s)) }

	pub(crate) fn strings(&self, field: FieldId) -> Vec<String> { self.read(field, |v, s| v.string_array(s)) }

	pub(crate) fn words(&self, field: FieldId) -> Vec<u16> { self.read(field, |v, s| v.word_array(s)) }
}

/// Equal when decoded from the same table entry with the same override
/// flag, id and (case-insensitive) name.
impl PartialEq for CultureRecord {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.data.table, &other.data.table)
			&& self.data.index == other.data.index
			&& self.use_user_override == other.use_user_override
			&& self.data.culture_id == other.data.culture_id
			&& self.data.culture_name.eq_ignore_ascii_case(&other.data.culture_name)
	}
}

impl Eq for CultureRecord {}

impl Hash for CultureRecord {
	fn hash<H: Hasher>(&self, state: &mut H) {
		if self.data.culture_id.is_custom_sentinel() {
			self.data.culture_name.to_ascii_lowercase().hash(state);
		} else {
			self.data.culture_id.hash(state);
		}
	}
}

impl fmt::Debug for CultureRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CultureRecord")
			.field("name", &self.data.culture_name)
			.field("id", &self.data.culture_id)
			.field("actual_name", &self.data.actual_name)
			.field("actual_id", &self.data.actual_id)
			.field("provenance", &self.provenance())
			.field("synthetic", &self.data.is_synthetic)
			.field("index", &self.data.index)
			.field("use_user_override", &self.use_user_override)
			.finish()
	}
}
