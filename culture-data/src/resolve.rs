//! Culture resolution: names, ids and regions to records.
//!
//! Each tier is a [`Strategy`]. Name lookups try [`NAME_STRATEGIES`] in
//! order; id lookups try [`ID_STRATEGIES`]. A strategy either produces a
//! candidate table entry, which goes through the common finishing step, or a
//! complete record.

use std::sync::Arc;

use culture_core::Lcid;

use crate::errors::{Error, Result};
use crate::name::canonicalize;
use crate::provider::NameQuery;
use crate::record::{CultureRecord, RecordData};
use crate::service::CultureService;
use crate::table::{CultureTable, IdHit, NameHit, TableOrigin};

/// What to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CultureQuery {
	Name(String),
	Id(Lcid),
}

/// One resolution tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
	/// Custom or replacement culture file for the name (or its sort base).
	Custom,
	/// Builtin table entry for the name.
	Builtin,
	/// OS locale known by synthetic name; continues as an id lookup.
	SyntheticName,
	/// OS locale whose custom replacement file exists.
	SyntheticReplacement,
	/// OS-level alternate sort of a builtin culture.
	BuiltinAlternateSort,
	/// OS locale assembled from host data.
	SyntheticPlain,
}

pub const NAME_STRATEGIES: &[Strategy] = &[Strategy::Custom, Strategy::Builtin, Strategy::SyntheticName];
pub const ID_STRATEGIES: &[Strategy] =
	&[Strategy::SyntheticReplacement, Strategy::BuiltinAlternateSort, Strategy::SyntheticPlain];

struct Candidate {
	table: Arc<CultureTable>,
	index: usize,
	actual_id: Lcid,
	actual_name: String,
	synthetic: bool,
}

enum Found {
	Candidate(Candidate),
	Record(CultureRecord),
}

struct NameLookup {
	canonical: String,
	builtin: Option<NameHit>,
	/// Name to look for in custom files: alternate sorts share their base's file.
	custom_name: String,
}

struct IdLookup {
	id: Lcid,
	/// Builtin entry of the sort base, for ids with a sort component.
	base: Option<IdHit>,
	/// Canonical name a replacement file would have.
	replacement_name: Option<String>,
}

enum Lookup {
	Name(NameLookup),
	Id(IdLookup),
}

impl CultureService {
	/// Resolve a culture by name. The empty name is the invariant culture.
	pub fn get_culture(&self, name: &str, use_user_override: bool) -> Result<CultureRecord> {
		let canonical = canonicalize(name)?;
		if canonical.is_empty() {
			return self.invariant(use_user_override);
		}
		let cache = self.name_cache();
		if let Some(record) = self.cached(cache, &canonical, use_user_override) {
			return Ok(record);
		}
		let record = self.resolve_name(name, &canonical, use_user_override)?;
		Ok(self.store(cache, &canonical, record))
	}

	/// Resolve a culture by id. Ids with a builtin or synthetic name resolve
	/// through the name cache.
	pub fn get_culture_by_id(&self, id: Lcid, use_user_override: bool) -> Result<CultureRecord> {
		if id.is_invariant() {
			return self.invariant(use_user_override);
		}
		if let Some(hit) = self.builtin().lookup_by_id(id) {
			return self.get_culture(&hit.name, use_user_override);
		}
		if let Some(name) = self.synthetic_names().name_for(id).map(str::to_owned) {
			return self.get_culture(&name, use_user_override);
		}
		self.resolve_id(id, use_user_override)
	}

	/// Resolve a region name: the builtin region index first, then any
	/// culture of that name.
	pub fn get_region(&self, name: &str, use_user_override: bool) -> Result<CultureRecord> {
		let canonical = canonicalize(name)?;
		if canonical.is_empty() {
			return Err(Error::InvalidRegionName(name.to_string()));
		}
		let cache = self.region_cache();
		if let Some(record) = self.cached(cache, &canonical, use_user_override) {
			return Ok(record);
		}
		let record = match self.builtin().lookup_region(&canonical) {
			Some(index) => {
				let (actual_name, actual_id) = self.builtin().identity(index)?;
				let candidate =
					Candidate { table: Arc::clone(self.builtin()), index, actual_id, actual_name, synthetic: false };
				self.finish(candidate, use_user_override)?
			}
			None => {
				let record = self.get_culture(name, use_user_override).map_err(|e| match e {
					Error::CultureNotFound(_) => Error::InvalidRegionName(name.to_string()),
					e => e,
				})?;
				if record.region_name().is_empty() {
					return Err(Error::InvalidRegionName(name.to_string()));
				}
				record
			}
		};
		Ok(self.store(cache, &canonical, record))
	}

	pub fn resolve(&self, query: &CultureQuery, use_user_override: bool) -> Result<CultureRecord> {
		match query {
			CultureQuery::Name(name) => self.get_culture(name, use_user_override),
			CultureQuery::Id(id) => self.get_culture_by_id(*id, use_user_override),
		}
	}

	/// The invariant culture. Never cached, never fails on a valid service.
	pub fn invariant(&self, use_user_override: bool) -> Result<CultureRecord> {
		let hit = self.builtin().lookup_by_id(Lcid::INVARIANT).ok_or_else(|| Error::not_found_id(Lcid::INVARIANT))?;
		let candidate = Candidate {
			table: Arc::clone(self.builtin()),
			index: hit.index,
			actual_id: Lcid::INVARIANT,
			actual_name: hit.name,
			synthetic: false,
		};
		self.finish(candidate, use_user_override)
	}

	/// Which tier serves `query`, without touching the record caches.
	///
	/// An id with a synthetic name resolves through that name, so the name
	/// tier that matches is reported (`SyntheticName` when the id tiers do
	/// the work).
	pub fn resolution_strategy(&self, query: &CultureQuery) -> Result<Option<Strategy>> {
		let lookup = match query {
			CultureQuery::Name(name) => {
				let canonical = canonicalize(name)?;
				if canonical.is_empty() {
					return Ok(Some(Strategy::Builtin));
				}
				Lookup::Name(self.name_lookup(canonical))
			}
			CultureQuery::Id(id) if id.is_invariant() || self.builtin().is_known_id(*id) => {
				return Ok(Some(Strategy::Builtin));
			}
			CultureQuery::Id(id) => match self.synthetic_names().name_for(*id) {
				Some(name) => Lookup::Name(self.name_lookup(canonicalize(name)?)),
				None => Lookup::Id(self.id_lookup(*id)),
			},
		};
		Ok(self.first_match(&lookup, false)?.map(|(strategy, _)| strategy))
	}

	fn resolve_name(&self, name: &str, canonical: &str, use_user_override: bool) -> Result<CultureRecord> {
		let lookup = Lookup::Name(self.name_lookup(canonical.to_string()));
		match self.first_match(&lookup, use_user_override)? {
			Some((_, Found::Candidate(candidate))) => self.finish(candidate, use_user_override),
			Some((_, Found::Record(record))) => Ok(record),
			None => Err(Error::not_found_name(name)),
		}
	}

	fn resolve_id(&self, id: Lcid, use_user_override: bool) -> Result<CultureRecord> {
		if id.is_invariant() {
			return self.invariant(use_user_override);
		}
		let lookup = Lookup::Id(self.id_lookup(id));
		match self.first_match(&lookup, use_user_override)? {
			Some((_, Found::Candidate(candidate))) => self.finish(candidate, use_user_override),
			Some((_, Found::Record(record))) => Ok(record),
			None => Err(Error::not_found_id(id)),
		}
	}

	fn name_lookup(&self, canonical: String) -> NameLookup {
		let builtin = self.builtin().lookup_by_name(&canonical);
		let custom_name = match &builtin {
			Some(hit) if hit.lcid.is_alternate_sort() => self
				.builtin()
				.lookup_by_id(hit.lcid.sort_base())
				.map(|base| base.name.to_ascii_lowercase())
				.unwrap_or_else(|| canonical.clone()),
			_ => canonical.clone(),
		};
		NameLookup { canonical, builtin, custom_name }
	}

	fn id_lookup(&self, id: Lcid) -> IdLookup {
		let base = if id.sort_id() != 0 { self.builtin().lookup_by_id(id.sort_base()) } else { None };
		let replacement_name = match &base {
			Some(hit) => Some(hit.name.to_ascii_lowercase()),
			None => self.synthetic_names().name_for(id).and_then(|n| canonicalize(n).ok()),
		};
		IdLookup { id, base, replacement_name }
	}

	fn first_match(&self, lookup: &Lookup, use_user_override: bool) -> Result<Option<(Strategy, Found)>> {
		let strategies = match lookup {
			Lookup::Name(_) => NAME_STRATEGIES,
			Lookup::Id(_) => ID_STRATEGIES,
		};
		for &strategy in strategies {
			let found = match lookup {
				Lookup::Name(l) => self.try_name(strategy, l, use_user_override)?,
				Lookup::Id(l) => self.try_id(strategy, l, use_user_override)?,
			};
			if let Some(found) = found {
				tracing::debug!(?strategy, "culture resolved");
				return Ok(Some((strategy, found)));
			}
		}
		Ok(None)
	}

	fn try_name(&self, strategy: Strategy, l: &NameLookup, use_user_override: bool) -> Result<Option<Found>> {
		match strategy {
			Strategy::Custom => {
				// With custom cultures disabled, only entries under a custom
				// sentinel id that replace nothing remain visible.
				let disabled = self.config().disable_custom_cultures;
				let replaces = l.builtin.is_some() || self.synthetic_names().lcid_for(&l.canonical).is_some();
				if disabled && replaces {
					return Ok(None);
				}
				let Some(table) = self.custom_table(&l.custom_name, l.builtin.is_some() || disabled)? else {
					return Ok(None);
				};
				let Some(hit) = table.lookup_by_name(&l.custom_name).or_else(|| table.lookup_by_name(&l.canonical))
				else {
					return Ok(None);
				};
				if disabled && !hit.lcid.is_custom_sentinel() {
					tracing::debug!(name = %l.canonical, lcid = %hit.lcid, "custom culture ignored while disabled");
					return Ok(None);
				}
				let (actual_id, actual_name) = match &l.builtin {
					Some(b) => (b.lcid, b.name.clone()),
					None => (hit.lcid, hit.name),
				};
				Ok(Some(Found::Candidate(Candidate { table, index: hit.index, actual_id, actual_name, synthetic: false })))
			}
			Strategy::Builtin => Ok(l.builtin.as_ref().map(|hit| {
				Found::Candidate(Candidate {
					table: Arc::clone(self.builtin()),
					index: hit.index,
					actual_id: hit.lcid,
					actual_name: hit.name.clone(),
					synthetic: false,
				})
			})),
			Strategy::SyntheticName => match self.synthetic_names().lcid_for(&l.canonical) {
				Some(id) => Ok(Some(Found::Record(self.resolve_id(id, use_user_override)?))),
				None => Ok(None),
			},
			_ => Ok(None),
		}
	}

	fn try_id(&self, strategy: Strategy, l: &IdLookup, use_user_override: bool) -> Result<Option<Found>> {
		let names = self.synthetic_names();
		match strategy {
			Strategy::SyntheticReplacement => {
				let (Some(exact), Some(replacement)) = (names.name_for(l.id), &l.replacement_name) else {
					return Ok(None);
				};
				if self.config().disable_custom_cultures || !self.custom_store().exists(replacement) {
					return Ok(None);
				}
				let Some(table) = self.custom_table(replacement, false)? else {
					return Ok(None);
				};
				let Some(hit) = table.lookup_by_name(replacement) else {
					return Ok(None);
				};
				Ok(Some(Found::Candidate(Candidate {
					table,
					index: hit.index,
					actual_id: l.id,
					actual_name: exact.to_string(),
					synthetic: true,
				})))
			}
			Strategy::BuiltinAlternateSort => {
				let Some(base) = &l.base else {
					return Ok(None);
				};
				if !names.is_installed(l.id) {
					return Ok(None);
				}
				let actual_name = names
					.name_for(l.id)
					.map(str::to_owned)
					.or_else(|| self.provider().query_name(l.id, NameQuery::Normalized))
					.unwrap_or_else(|| base.name.clone());
				Ok(Some(Found::Candidate(Candidate {
					table: Arc::clone(self.builtin()),
					index: base.index,
					actual_id: l.id,
					actual_name,
					synthetic: true,
				})))
			}
			Strategy::SyntheticPlain => Ok(self.synthetic_record(l.id, use_user_override)?.map(Found::Record)),
			_ => Ok(None),
		}
	}

	/// Common tail: identity from the decoded record, then custom records are
	/// reclassified as synthetic when they stand in for an OS locale.
	fn finish(&self, c: Candidate, use_user_override: bool) -> Result<CultureRecord> {
		let (culture_name, stored_id) = c.table.identity(c.index)?;
		let mut synthetic = c.synthetic || matches!(c.table.origin(), TableOrigin::Synthetic { .. });
		if !synthetic && matches!(c.table.origin(), TableOrigin::Custom { .. }) {
			let names = self.synthetic_names();
			synthetic = if c.actual_id.is_custom_sentinel() {
				canonicalize(&culture_name).ok().and_then(|k| names.lcid_for(&k)).is_some()
			} else {
				names.name_for(stored_id).is_some() || names.name_for(c.actual_id).is_some()
			};
		}
		let data = RecordData {
			table: c.table,
			index: c.index,
			culture_id: c.actual_id,
			culture_name,
			actual_id: c.actual_id,
			actual_name: c.actual_name,
			is_synthetic: synthetic,
			provider: Arc::clone(self.provider()),
		};
		Ok(CultureRecord::new(data, use_user_override))
	}
}
