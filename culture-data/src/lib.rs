//! Culture data resolution.
//!
//! A [`CultureService`] resolves culture names, locale ids and region names
//! to immutable [`CultureRecord`]s. Records come from three sources, tried in
//! a fixed order:
//! - the builtin table shipped with the service,
//! - custom culture files (`<data dir>/<name>.<ext>`) replacing or adding
//!   cultures,
//! - synthetic cultures assembled from host OS locale data
//!   ([`LocaleProvider`]).
//!
//! Records are interned per canonical name and override flag. All tables use
//! the same pooled wire format ([`CultureTable`], built by [`TableBuilder`]).
//!
//! ```
//! use std::sync::Arc;
//! use culture_core::CultureConfig;
//! use culture_data::{CultureService, NullLocaleProvider};
//!
//! let service = CultureService::new(CultureConfig::default(), Arc::new(NullLocaleProvider)).unwrap();
//! let de = service.get_culture("DE-de", false).unwrap();
//! assert_eq!(de.culture_name(), "de-DE");
//! assert_eq!(de.decimal_separator(), ",");
//! ```

#![forbid(unsafe_code)]

mod accessors;
mod custom;
mod errors;
mod fields;
mod legacy;
pub mod name;
pub mod patterns;
mod provider;
mod record;
mod resolve;
mod service;
mod synthetic;
mod table;

pub use custom::CustomCultureStore;
pub use errors::{CultureKey, Error, InvalidNameReason, Result};
pub use fields::{flags, CultureFields, FieldId, HEADER_LAYOUT};
pub use legacy::LegacyIndexMap;
pub use provider::{
	CalendarName, LiveField, LocaleProvider, NameQuery, NullLocaleProvider, OsLocaleInfo, StaticLocale,
	StaticLocaleProvider,
};
pub use record::{CultureRecord, Provenance};
pub use resolve::{CultureQuery, Strategy, ID_STRATEGIES, NAME_STRATEGIES};
pub use service::{CacheStats, CultureService};
pub use synthetic::{
	assemble, dense_calendar_names, detect_script, normalize_calendars, os_grouping_to_table, SyntheticNames,
};
pub use table::builtin::{builtin_entries, builtin_table};
pub use table::{
	Alias, CultureTable, IdHit, NameHit, TableBuilder, TableEntry, TableOrigin, TABLE_MAGIC, TABLE_VERSION,
};
