//! Synthetic cultures: OS locales absent from the builtin table, assembled
//! into private single-record tables and cached per locale id.

use std::sync::Arc;

use culture_core::Lcid;

use crate::errors::{Error, Result};
use crate::name::canonicalize;
use crate::provider::NameQuery;
use crate::record::{CultureRecord, RecordData};
use crate::service::CultureService;
use crate::table::{CultureTable, TableBuilder, TableOrigin};

pub mod assemble;
pub mod names;

pub use assemble::{assemble, dense_calendar_names, normalize_calendars, os_grouping_to_table};
pub use names::{detect_script, SyntheticNames};

impl CultureService {
	/// Materialize OS locale `id`. `false` when the OS has no data for it.
	pub fn materialize(&self, id: Lcid) -> Result<bool> { Ok(self.synthetic_table(id)?.is_some()) }

	pub(crate) fn synthetic_table(&self, id: Lcid) -> Result<Option<Arc<CultureTable>>> {
		let cache = self.synthetic_cache();
		if let Some(table) = cache.get(&id) {
			return Ok(Some(Arc::clone(table.value())));
		}
		let names = self.synthetic_names();
		let name = match names.name_for(id) {
			Some(name) => name.to_string(),
			None => match self.provider().query_name(id, NameQuery::Normalized) {
				Some(name) if canonicalize(&name).is_ok() && !name.is_empty() => name,
				_ => {
					tracing::debug!(%id, "no name for OS locale");
					return Ok(None);
				}
			},
		};
		let info = {
			let _guard = self.lock();
			self.provider().query_fields(id)
		};
		let Some(info) = info else {
			tracing::debug!(%id, "OS has no locale data");
			return Ok(None);
		};

		let fields = assemble(id, &name, &info, names, self.builtin());
		let mut builder = TableBuilder::new();
		builder.add(fields);
		let words = builder.build().map_err(|e| match e {
			Error::Pool(culture_pool::Error::OutOfMemory { words }) => Error::OutOfMemory { lcid: id, words },
			e => e,
		})?;
		let size = words.len();
		let table = Arc::new(CultureTable::from_words(words, TableOrigin::Synthetic { lcid: id })?);

		let _guard = self.lock();
		let cached = Arc::clone(cache.entry(id).or_insert(table).value());
		tracing::info!(%id, name = %name, words = size, "synthetic culture materialized");
		Ok(Some(cached))
	}

	/// Record for a materialized OS locale. Identity comes straight from the
	/// synthetic table.
	pub(crate) fn synthetic_record(&self, id: Lcid, use_user_override: bool) -> Result<Option<CultureRecord>> {
		let Some(table) = self.synthetic_table(id)? else {
			return Ok(None);
		};
		let (name, _) = table.identity(0)?;
		let data = RecordData {
			table,
			index: 0,
			culture_id: id,
			culture_name: name.clone(),
			actual_id: id,
			actual_name: name,
			is_synthetic: true,
			provider: Arc::clone(self.provider()),
		};
		Ok(Some(CultureRecord::new(data, use_user_override)))
	}
}
