use std::collections::BTreeMap;
use std::path::Path;

use culture_core::Lcid;
use serde::{Deserialize, Serialize};

use super::{LiveField, LocaleProvider, NameQuery, OsLocaleInfo};
use crate::errors::Result;

/// One installed locale of a [`StaticLocaleProvider`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticLocale {
	pub id: Lcid,
	/// Normalized OS name; absent on hosts that cannot report one.
	pub name: Option<String>,
	pub iso_language: String,
	pub iso_region: String,
	/// Script detection sample; defaults to the first day name.
	pub sample: Option<String>,
	pub sort_key: Option<Vec<u8>>,
	pub fields: Option<OsLocaleInfo>,
	/// User customizations, reported only while this locale is the user default.
	pub live: BTreeMap<LiveField, String>,
}

impl StaticLocale {
	pub fn new(id: Lcid) -> Self { Self { id, ..Default::default() } }

	pub fn named(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn iso(mut self, language: impl Into<String>, region: impl Into<String>) -> Self {
		self.iso_language = language.into();
		self.iso_region = region.into();
		self
	}

	pub fn sample(mut self, text: impl Into<String>) -> Self {
		self.sample = Some(text.into());
		self
	}

	pub fn sort_key(mut self, key: impl Into<Vec<u8>>) -> Self {
		self.sort_key = Some(key.into());
		self
	}

	pub fn fields(mut self, fields: OsLocaleInfo) -> Self {
		self.fields = Some(fields);
		self
	}

	pub fn live(mut self, field: LiveField, value: impl Into<String>) -> Self {
		self.live.insert(field, value.into());
		self
	}
}

/// In-memory snapshot of host locale data, in OS enumeration order.
///
/// Loaded from JSON by the command line tool; built in code by tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticLocaleProvider {
	pub user_default: Lcid,
	pub locales: Vec<StaticLocale>,
}

impl Default for StaticLocaleProvider {
	fn default() -> Self { Self { user_default: Lcid::INVARIANT, locales: Vec::new() } }
}

fn non_empty(s: &str) -> Option<String> { (!s.is_empty()).then(|| s.to_string()) }

impl StaticLocaleProvider {
	pub fn new() -> Self { Self::default() }

	pub fn with_locale(mut self, locale: StaticLocale) -> Self {
		self.locales.push(locale);
		self
	}

	pub fn with_user_default(mut self, id: Lcid) -> Self {
		self.user_default = id;
		self
	}

	pub fn from_json(text: &str) -> Result<Self> { Ok(serde_json::from_str(text)?) }

	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let text = std::fs::read_to_string(path.as_ref())?;
		let provider = Self::from_json(&text)?;
		tracing::debug!(path = %path.as_ref().display(), locales = provider.locales.len(), "OS locale snapshot loaded");
		Ok(provider)
	}

	fn locale(&self, id: Lcid) -> Option<&StaticLocale> { self.locales.iter().find(|l| l.id == id) }
}

impl LocaleProvider for StaticLocaleProvider {
	fn query_name(&self, id: Lcid, query: NameQuery) -> Option<String> {
		let locale = self.locale(id)?;
		let fields = locale.fields.as_ref();
		match query {
			NameQuery::Normalized => locale.name.clone(),
			NameQuery::IsoLanguage => {
				non_empty(&locale.iso_language).or_else(|| fields.and_then(|f| non_empty(&f.iso639_language)))
			}
			NameQuery::IsoRegion => {
				non_empty(&locale.iso_region).or_else(|| fields.and_then(|f| non_empty(&f.iso3166_country)))
			}
			NameQuery::Sample => locale
				.sample
				.clone()
				.or_else(|| fields.and_then(|f| f.day_names.first()).and_then(|d| non_empty(d))),
		}
	}

	fn query_fields(&self, id: Lcid) -> Option<OsLocaleInfo> { self.locale(id)?.fields.clone() }

	fn enumerate_installed_ids(&self) -> Vec<Lcid> { self.locales.iter().map(|l| l.id).collect() }

	fn user_default_id(&self) -> Lcid { self.user_default }

	fn query_live_field(&self, id: Lcid, field: LiveField) -> Option<String> {
		if id != self.user_default {
			return None;
		}
		self.locale(id)?.live.get(&field).cloned()
	}

	fn sort_key(&self, id: Lcid, _text: &str) -> Option<Vec<u8>> { self.locale(id)?.sort_key.clone() }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> StaticLocaleProvider {
		StaticLocaleProvider::new()
			.with_locale(
				StaticLocale::new(Lcid::new(0x0481))
					.iso("mi", "NZ")
					.fields(OsLocaleInfo { day_names: vec!["Rātapu".into()], ..Default::default() }),
			)
			.with_locale(StaticLocale::new(Lcid::new(0x0409)).named("en-US").live(LiveField::DecimalSeparator, ","))
			.with_user_default(Lcid::new(0x0409))
	}

	#[test]
	fn names_fall_back_to_field_block() {
		let p = sample();
		let id = Lcid::new(0x0481);
		assert_eq!(p.query_name(id, NameQuery::Normalized), None);
		assert_eq!(p.query_name(id, NameQuery::IsoLanguage).as_deref(), Some("mi"));
		assert_eq!(p.query_name(id, NameQuery::Sample).as_deref(), Some("Rātapu"));
		assert_eq!(p.enumerate_installed_ids(), vec![id, Lcid::new(0x0409)]);
	}

	#[test]
	fn live_fields_only_for_user_default() {
		let p = sample();
		assert_eq!(p.query_live_field(Lcid::new(0x0409), LiveField::DecimalSeparator).as_deref(), Some(","));
		assert_eq!(p.query_live_field(Lcid::new(0x0481), LiveField::DecimalSeparator), None);
	}

	#[test]
	fn json_snapshot_roundtrip() {
		let p = sample();
		let json = serde_json::to_string(&p).unwrap();
		assert_eq!(StaticLocaleProvider::from_json(&json).unwrap(), p);
		let minimal = StaticLocaleProvider::from_json(r#"{"locales":[{"id":1153,"iso_language":"mi"}]}"#).unwrap();
		assert_eq!(minimal.user_default, Lcid::INVARIANT);
		assert_eq!(minimal.locales[0].id, Lcid::new(0x0481));
	}
}
