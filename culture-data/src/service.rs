//! The interning service: owns the builtin table, the OS provider and every
//! process-wide cache.
//!
//! Caches are created on first use under the service lock. Reads never take
//! the lock; inserts do, and never replace an existing entry.

use std::sync::{Arc, Mutex, MutexGuard};

use culture_core::{CultureConfig, Lcid};
use dashmap::DashMap;
use once_cell::sync::OnceCell;

use crate::custom::CustomCultureStore;
use crate::errors::{Error, Result};
use crate::provider::LocaleProvider;
use crate::record::CultureRecord;
use crate::synthetic::SyntheticNames;
use crate::table::builtin::builtin_table;
use crate::table::{CultureTable, TableOrigin};

/// Records per canonical name: slot 0 without, slot 1 with user override.
pub(crate) type RecordCache = DashMap<String, [Option<CultureRecord>; 2]>;

/// Entry counts of the service caches; `None` for a cache not created yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
	pub by_name: Option<usize>,
	pub by_region: Option<usize>,
	pub synthetic_names: Option<usize>,
	pub synthetic_data: Option<usize>,
	pub custom_tables: usize,
}

pub struct CultureService {
	config: CultureConfig,
	builtin: Arc<CultureTable>,
	provider: Arc<dyn LocaleProvider>,
	custom: CustomCultureStore,
	lock: Mutex<()>,
	by_name: OnceCell<RecordCache>,
	by_region: OnceCell<RecordCache>,
	synthetic_names: OnceCell<SyntheticNames>,
	synthetic_data: OnceCell<DashMap<Lcid, Arc<CultureTable>>>,
	custom_tables: DashMap<String, Arc<CultureTable>>,
}

impl std::fmt::Debug for CultureService {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CultureService")
			.field("config", &self.config)
			.field("builtin_records", &self.builtin.item_count())
			.field("caches", &self.cache_stats())
			.finish()
	}
}

impl CultureService {
	/// Build a service from configuration: the builtin table comes from
	/// `builtin_table` when set, the compiled-in seed otherwise.
	pub fn new(config: CultureConfig, provider: Arc<dyn LocaleProvider>) -> Result<Self> {
		let builtin = match &config.builtin_table {
			Some(path) => {
				let bytes = std::fs::read(path)?;
				tracing::info!(path = %path.display(), "using prebuilt builtin table");
				CultureTable::from_bytes(&bytes, TableOrigin::Builtin)?
			}
			None => builtin_table()?,
		};
		Self::with_builtin(config, builtin, provider)
	}

	pub fn with_builtin(config: CultureConfig, builtin: CultureTable, provider: Arc<dyn LocaleProvider>) -> Result<Self> {
		if !builtin.is_builtin() {
			return Err(Error::corrupt_table("builtin table must have builtin origin"));
		}
		if !builtin.is_known_id(Lcid::INVARIANT) {
			return Err(Error::corrupt_table("builtin table has no invariant culture"));
		}
		let custom = CustomCultureStore::from_config(&config);
		tracing::debug!(records = builtin.item_count(), custom_dir = %custom.dir().display(), "culture service ready");
		Ok(Self {
			config,
			builtin: Arc::new(builtin),
			provider,
			custom,
			lock: Mutex::new(()),
			by_name: OnceCell::new(),
			by_region: OnceCell::new(),
			synthetic_names: OnceCell::new(),
			synthetic_data: OnceCell::new(),
			custom_tables: DashMap::new(),
		})
	}

	pub fn config(&self) -> &CultureConfig { &self.config }

	pub fn builtin(&self) -> &Arc<CultureTable> { &self.builtin }

	pub fn provider(&self) -> &Arc<dyn LocaleProvider> { &self.provider }

	pub fn custom_store(&self) -> &CustomCultureStore { &self.custom }

	/// The single service lock. A poisoned lock is recovered: it guards no data.
	pub(crate) fn lock(&self) -> MutexGuard<'_, ()> {
		match self.lock.lock() {
			Ok(guard) => guard,
			Err(poisoned) => poisoned.into_inner(),
		}
	}

	/// Initialize `cell` under the service lock on first use. `init` must
	/// not take the lock itself.
	pub(crate) fn get_or_init<'a, T>(&'a self, cell: &'a OnceCell<T>, what: &str, init: impl FnOnce() -> T) -> &'a T {
		if let Some(value) = cell.get() {
			return value;
		}
		let _guard = self.lock();
		cell.get_or_init(|| {
			tracing::trace!(cache = what, "creating cache");
			init()
		})
	}

	pub(crate) fn name_cache(&self) -> &RecordCache { self.get_or_init(&self.by_name, "by_name", DashMap::new) }

	pub(crate) fn region_cache(&self) -> &RecordCache { self.get_or_init(&self.by_region, "by_region", DashMap::new) }

	pub(crate) fn synthetic_cache(&self) -> &DashMap<Lcid, Arc<CultureTable>> {
		self.get_or_init(&self.synthetic_data, "synthetic_data", DashMap::new)
	}

	/// Names of OS locales missing from the builtin table. Enumerating the
	/// OS happens once, under the lock.
	pub fn synthetic_names(&self) -> &SyntheticNames {
		self.get_or_init(&self.synthetic_names, "synthetic_names", || {
			SyntheticNames::build(self.provider.as_ref(), &self.builtin)
		})
	}

	/// Cached record for `key`. A missing slot is filled from its sibling by
	/// flipping the override flag.
	pub(crate) fn cached(&self, cache: &RecordCache, key: &str, use_user_override: bool) -> Option<CultureRecord> {
		let slot = usize::from(use_user_override);
		let (hit, sibling) = {
			let slots = cache.get(key)?;
			(slots[slot].clone(), slots[1 - slot].clone())
		};
		if hit.is_some() {
			return hit;
		}
		let cloned = sibling?.clone_with_user_override(use_user_override);
		Some(self.store(cache, key, cloned))
	}

	/// Insert `record` unless its slot is already filled; returns what the
	/// cache holds afterwards. A filled sibling slot wins over `record`, so
	/// both override variants always share data.
	pub(crate) fn store(&self, cache: &RecordCache, key: &str, record: CultureRecord) -> CultureRecord {
		let flag = record.use_user_override();
		let slot = usize::from(flag);
		let _guard = self.lock();
		let mut slots = cache.entry(key.to_string()).or_default();
		let value = match (&slots[slot], &slots[1 - slot]) {
			(Some(existing), _) => existing.clone(),
			(None, Some(sibling)) => sibling.clone_with_user_override(flag),
			(None, None) => record,
		};
		slots[slot] = Some(value.clone());
		value
	}

	/// Custom table for `canonical`, loaded once per name. Misses are not
	/// remembered, so a file installed later is picked up.
	pub(crate) fn custom_table(&self, canonical: &str, known_fallback: bool) -> Result<Option<Arc<CultureTable>>> {
		if let Some(table) = self.custom_tables.get(canonical) {
			return Ok(Some(Arc::clone(table.value())));
		}
		let Some(table) = self.custom.load(canonical, known_fallback)? else {
			return Ok(None);
		};
		let table = Arc::clone(self.custom_tables.entry(canonical.to_string()).or_insert(Arc::new(table)).value());
		Ok(Some(table))
	}

	pub fn cache_stats(&self) -> CacheStats {
		CacheStats {
			by_name: self.by_name.get().map(DashMap::len),
			by_region: self.by_region.get().map(DashMap::len),
			synthetic_names: self.synthetic_names.get().map(SyntheticNames::len),
			synthetic_data: self.synthetic_data.get().map(DashMap::len),
			custom_tables: self.custom_tables.len(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::provider::NullLocaleProvider;
	use crate::table::TableBuilder;

	fn service() -> CultureService {
		CultureService::new(CultureConfig::default(), Arc::new(NullLocaleProvider)).unwrap()
	}

	#[test]
	fn caches_start_uncreated() {
		let s = service();
		assert_eq!(s.cache_stats(), CacheStats::default());
		s.name_cache();
		assert_eq!(s.cache_stats().by_name, Some(0));
		assert_eq!(s.cache_stats().by_region, None);
	}

	#[test]
	fn builtin_without_invariant_rejected() {
		let mut b = TableBuilder::new();
		b.add(crate::fields::CultureFields { language_id: 0x0409, name: "en-US".into(), ..Default::default() });
		let table = b.build_table(TableOrigin::Builtin).unwrap();
		let err = CultureService::with_builtin(CultureConfig::default(), table, Arc::new(NullLocaleProvider)).unwrap_err();
		assert!(matches!(err, Error::CorruptTable(_)));
	}

	#[test]
	fn prebuilt_table_from_config() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("builtin.ctbl");
		TableBuilder::from_entries(crate::table::builtin::builtin_entries()).write_to(&path).unwrap();
		let config = CultureConfig { builtin_table: Some(path), ..Default::default() };
		let s = CultureService::new(config, Arc::new(NullLocaleProvider)).unwrap();
		assert_eq!(s.builtin().item_count(), crate::table::builtin::builtin_entries().len());
	}

	#[test]
	fn poisoned_lock_is_recovered() {
		let s = Arc::new(service());
		let s2 = Arc::clone(&s);
		let _ = std::thread::spawn(move || {
			let _guard = s2.lock();
			panic!("poison the lock");
		})
		.join();
		drop(s.lock());
		assert!(s.synthetic_names().is_empty());
	}
}
