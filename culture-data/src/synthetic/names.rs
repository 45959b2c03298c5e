//! Names for OS locales missing from the builtin table.
//!
//! Each non-builtin locale is named, in priority order, from the legacy
//! correction table, the OS's normalized name, or a computed
//! `language[-Script]-REGION` tag. Computed names that collide are re-tagged
//! with their script, or suffixed with the id when no script is detectable.

use std::collections::{HashMap, HashSet};

use culture_core::Lcid;

use crate::name::canonicalize;
use crate::provider::{LocaleProvider, NameQuery};
use crate::table::CultureTable;

/// Names some OS releases report wrongly, keyed by id.
pub const LEGACY_NAME_FIXES: &[(u32, &str)] = &[
	(0x0468, "ha-Latn-NG"),
	(0x085D, "iu-Latn-CA"),
	(0x085F, "tzm-Latn-DZ"),
	(0x046B, "quz-BO"),
	(0x086B, "quz-EC"),
	(0x0C6B, "quz-PE"),
	(0x042E, "hsb-DE"),
	(0x082E, "dsb-DE"),
	(0x0483, "co-FR"),
];

/// Language-region pairs that always carry a script tag: another locale
/// with the same bare name exists but may not be enumerated first.
pub const SCRIPT_TAGGED_PAIRS: &[&str] =
	&["az-AZ", "uz-UZ", "sr-BA", "bs-BA", "sr-CS", "iu-CA", "mn-CN", "ha-NG", "tg-TJ"];

/// Scripts recognized by code point, for scripts whose sort keys carry no
/// distinguishing primary weight.
const SCRIPT_BLOCKS: &[(u32, u32, &str)] = &[
	(0x0F00, 0x0FFF, "Tibt"),
	(0x1800, 0x18AF, "Mong"),
	(0x0780, 0x07BF, "Thaa"),
	(0x0700, 0x074F, "Syrc"),
	(0x1780, 0x17FF, "Khmr"),
	(0x0E80, 0x0EFF, "Laoo"),
	(0x1200, 0x137F, "Ethi"),
	(0x13A0, 0x13FF, "Cher"),
	(0x1400, 0x167F, "Cans"),
	(0xA000, 0xA48F, "Yiii"),
	(0x1000, 0x109F, "Mymr"),
];

/// Scripts by the first primary weight byte of a sort key.
const SORT_KEY_SCRIPTS: &[(u8, &str)] = &[
	(0x0E, "Latn"),
	(0x0F, "Grek"),
	(0x10, "Cyrl"),
	(0x11, "Armn"),
	(0x12, "Hebr"),
	(0x13, "Arab"),
	(0x14, "Deva"),
	(0x15, "Beng"),
	(0x16, "Guru"),
	(0x17, "Gujr"),
	(0x18, "Orya"),
	(0x19, "Taml"),
	(0x1A, "Telu"),
	(0x1B, "Knda"),
	(0x1C, "Mlym"),
	(0x1D, "Sinh"),
	(0x1E, "Thai"),
	(0x1F, "Laoo"),
	(0x20, "Tibt"),
	(0x21, "Geor"),
	(0x22, "Kana"),
	(0x23, "Bopo"),
	(0x24, "Hang"),
	(0x25, "Ethi"),
	(0x80, "Hani"),
];

pub fn legacy_name_fix(id: Lcid) -> Option<&'static str> {
	LEGACY_NAME_FIXES.iter().find(|(fix, _)| *fix == id.get()).map(|(_, name)| *name)
}

/// Script of the first character in `sample` that falls in a known block.
pub fn script_from_blocks(sample: &str) -> Option<&'static str> {
	sample.chars().find_map(|c| {
		let cp = c as u32;
		SCRIPT_BLOCKS.iter().find(|(lo, hi, _)| (*lo..=*hi).contains(&cp)).map(|(_, _, tag)| *tag)
	})
}

pub fn script_from_sort_key(key: &[u8]) -> Option<&'static str> {
	let first = *key.first()?;
	SORT_KEY_SCRIPTS.iter().find(|(b, _)| *b == first).map(|(_, tag)| *tag)
}

/// Script of a locale's native sample text: by block first, then by sort key.
pub fn detect_script(provider: &dyn LocaleProvider, id: Lcid) -> Option<&'static str> {
	let sample = provider.query_name(id, NameQuery::Sample)?;
	if let Some(tag) = script_from_blocks(&sample) {
		return Some(tag);
	}
	script_from_sort_key(&provider.sort_key(id, &sample)?)
}

/// Bidirectional map between synthetic culture names and ids, plus the set
/// of ids the OS enumerated. Built once and immutable afterwards.
#[derive(Debug, Default, Clone)]
pub struct SyntheticNames {
	by_name: HashMap<String, Lcid>,
	by_id: HashMap<Lcid, String>,
	installed: HashSet<Lcid>,
}

struct Computed {
	id: Lcid,
	language: String,
	region: String,
}

impl SyntheticNames {
	pub fn build(provider: &dyn LocaleProvider, builtin: &CultureTable) -> Self {
		let mut names = Self::default();
		let mut computed = Vec::new();
		for id in provider.enumerate_installed_ids() {
			names.installed.insert(id);
			if builtin.is_known_id(id) {
				continue;
			}
			if let Some(fixed) = legacy_name_fix(id) {
				names.insert(builtin, id, fixed.to_string());
				continue;
			}
			if let Some(os_name) = provider.query_name(id, NameQuery::Normalized).filter(|n| !n.is_empty()) {
				names.insert(builtin, id, os_name);
				continue;
			}
			if id.sort_id() != 0 {
				continue;
			}
			let language = provider.query_name(id, NameQuery::IsoLanguage).unwrap_or_default();
			if language.is_empty() {
				tracing::debug!(%id, "OS locale has no ISO language; skipped");
				continue;
			}
			let region = provider.query_name(id, NameQuery::IsoRegion).unwrap_or_default();
			computed.push(Computed { id, language, region });
		}

		let mut bare_count: HashMap<String, usize> = HashMap::new();
		for c in &computed {
			*bare_count.entry(bare_name(&c.language, &c.region).to_ascii_lowercase()).or_default() += 1;
		}
		for c in computed {
			let bare = bare_name(&c.language, &c.region);
			let colliding = bare_count.get(&bare.to_ascii_lowercase()).copied().unwrap_or(0) > 1;
			let forced = SCRIPT_TAGGED_PAIRS.iter().any(|p| p.eq_ignore_ascii_case(&bare));
			let name = if colliding || forced {
				match detect_script(provider, c.id) {
					Some(script) if c.region.is_empty() => format!("{}-{script}", c.language),
					Some(script) => format!("{}-{script}-{}", c.language, c.region),
					None => names.untagged(&bare, c.id),
				}
			} else {
				bare
			};
			names.insert(builtin, c.id, name);
		}
		tracing::debug!(installed = names.installed.len(), synthetic = names.by_id.len(), "synthetic culture names built");
		names
	}

	/// Name for a colliding locale whose script cannot be detected. The first
	/// keeps the bare name; later ones are suffixed with their id.
	fn untagged(&self, bare: &str, id: Lcid) -> String {
		let taken = canonicalize(bare).is_ok_and(|key| self.by_name.contains_key(&key));
		if !taken {
			return bare.to_string();
		}
		let name = format!("{bare}-x-{:04x}", id.get());
		tracing::warn!(%id, name = %name, "script of colliding OS locale undetectable; named by id");
		name
	}

	fn insert(&mut self, builtin: &CultureTable, id: Lcid, name: String) {
		let Ok(key) = canonicalize(&name) else {
			tracing::warn!(%id, name = %name, "OS locale name is not a valid culture name; skipped");
			return;
		};
		if builtin.lookup_by_name(&key).is_some() || self.by_name.contains_key(&key) {
			tracing::warn!(%id, name = %name, "synthetic culture name already taken; skipped");
			return;
		}
		self.by_name.insert(key, id);
		self.by_id.insert(id, name);
	}

	/// Id of a synthetic culture by canonical name.
	pub fn lcid_for(&self, canonical: &str) -> Option<Lcid> { self.by_name.get(canonical).copied() }

	/// Synthetic name of exactly `id`.
	pub fn name_for(&self, id: Lcid) -> Option<&str> { self.by_id.get(&id).map(String::as_str) }

	/// Whether the OS enumerated `id`, builtin or not.
	pub fn is_installed(&self, id: Lcid) -> bool { self.installed.contains(&id) }

	pub fn len(&self) -> usize { self.by_id.len() }

	pub fn is_empty(&self) -> bool { self.by_id.is_empty() }

	pub fn iter(&self) -> impl Iterator<Item = (Lcid, &str)> + '_ { self.by_id.iter().map(|(id, n)| (*id, n.as_str())) }
}

fn bare_name(language: &str, region: &str) -> String {
	if region.is_empty() {
		language.to_string()
	} else {
		format!("{language}-{region}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::provider::{StaticLocale, StaticLocaleProvider};
	use crate::table::builtin::builtin_table;

	#[test]
	fn script_detection() {
		assert_eq!(script_from_blocks("ཉི་མ་"), Some("Tibt"));
		assert_eq!(script_from_blocks("ᠨᠢᠮ"), Some("Mong"));
		assert_eq!(script_from_blocks("Monday"), None);
		assert_eq!(script_from_sort_key(&[0x10, 0x2A, 0x01]), Some("Cyrl"));
		assert_eq!(script_from_sort_key(&[0x01]), None);
		assert_eq!(script_from_sort_key(&[]), None);
	}

	#[test]
	fn naming_priority() {
		let p = StaticLocaleProvider::new()
			.with_locale(StaticLocale::new(Lcid::new(0x0409)).named("en-US"))
			.with_locale(StaticLocale::new(Lcid::new(0x0468)).named("ha-Latn-NE"))
			.with_locale(StaticLocale::new(Lcid::new(0x0481)).named("mi-NZ"))
			.with_locale(StaticLocale::new(Lcid::new(0x0470)).iso("ig", "NG"));
		let names = SyntheticNames::build(&p, &builtin_table().unwrap());
		assert_eq!(names.name_for(Lcid::new(0x0409)), None, "builtin ids are skipped");
		assert!(names.is_installed(Lcid::new(0x0409)));
		assert_eq!(names.name_for(Lcid::new(0x0468)), Some("ha-Latn-NG"));
		assert_eq!(names.name_for(Lcid::new(0x0481)), Some("mi-NZ"));
		assert_eq!(names.name_for(Lcid::new(0x0470)), Some("ig-NG"));
		assert_eq!(names.lcid_for("mi-nz"), Some(Lcid::new(0x0481)));
		assert_eq!(names.len(), 3);
	}

	#[test]
	fn collisions_are_script_tagged() {
		let p = StaticLocaleProvider::new()
			.with_locale(StaticLocale::new(Lcid::new(0x0850)).iso("mn", "MN").sample("ᠨᠢᠮ"))
			.with_locale(StaticLocale::new(Lcid::new(0x0450)).iso("mn", "MN").sample("Ням").sort_key(vec![0x10, 0x33]));
		let names = SyntheticNames::build(&p, &builtin_table().unwrap());
		assert_eq!(names.name_for(Lcid::new(0x0850)), Some("mn-Mong-MN"));
		assert_eq!(names.name_for(Lcid::new(0x0450)), Some("mn-Cyrl-MN"));
	}

	#[test]
	fn forced_pairs_tagged_without_collision() {
		let p = StaticLocaleProvider::new()
			.with_locale(StaticLocale::new(Lcid::new(0x042C)).iso("az", "AZ").sample("bazar").sort_key(vec![0x0E, 0x02]));
		let names = SyntheticNames::build(&p, &builtin_table().unwrap());
		assert_eq!(names.name_for(Lcid::new(0x042C)), Some("az-Latn-AZ"));
	}

	#[test]
	fn undetectable_collision_named_by_id() {
		let p = StaticLocaleProvider::new()
			.with_locale(StaticLocale::new(Lcid::new(0x0401)).iso("xx", "YY"))
			.with_locale(StaticLocale::new(Lcid::new(0x0801)).iso("xx", "YY"))
			.with_locale(StaticLocale::new(Lcid::new(0x0C01)).iso("xx", "YY"));
		let names = SyntheticNames::build(&p, &builtin_table().unwrap());
		assert_eq!(names.name_for(Lcid::new(0x0401)), Some("xx-YY"));
		assert_eq!(names.name_for(Lcid::new(0x0801)), Some("xx-YY-x-0801"));
		assert_eq!(names.name_for(Lcid::new(0x0C01)), Some("xx-YY-x-0c01"));
		assert_eq!(names.lcid_for("xx-yy-x-0801"), Some(Lcid::new(0x0801)));
		assert_eq!(names.len(), 3);
	}

	#[test]
	fn sort_variants_need_an_os_name() {
		let p = StaticLocaleProvider::new()
			.with_locale(StaticLocale::new(Lcid::new(0x20481)).iso("mi", "NZ"))
			.with_locale(StaticLocale::new(Lcid::new(0x10481)).named("mi-NZ_alt"));
		let names = SyntheticNames::build(&p, &builtin_table().unwrap());
		assert_eq!(names.name_for(Lcid::new(0x20481)), None);
		assert_eq!(names.name_for(Lcid::new(0x10481)), Some("mi-NZ_alt"));
	}
}
