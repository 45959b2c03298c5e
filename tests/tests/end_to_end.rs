// End-to-end culture resolution through configuration files, custom
// culture files and OS locale snapshots.

use std::collections::HashMap;
use std::sync::Arc;

use culture_core::Lcid;
use culture_data::{
	builtin_entries, CultureFields, CultureRecord, LegacyIndexMap, LiveField, OsLocaleInfo, Provenance, StaticLocale,
	TableEntry,
};
use culture_integration_tests::{init_tracing, CultureHarness, TestResult};

const MAORI: Lcid = Lcid::new(0x0481);

fn maori() -> StaticLocale {
	StaticLocale::new(MAORI)
		.named("mi-NZ")
		.fields(OsLocaleInfo {
			english_language: "Maori".into(),
			english_country: "New Zealand".into(),
			iso639_language: "mi".into(),
			iso3166_country: "NZ".into(),
			parent_name: "en".into(),
			decimal_separator: ".".into(),
			group_separator: ",".into(),
			grouping: "3;0".into(),
			time_formats: vec!["HH:mm:ss".into()],
			short_dates: vec!["d/MM/yyyy".into()],
			default_calendar: 1,
			calendars: vec![1],
			..Default::default()
		})
		.live(LiveField::DecimalSeparator, "·")
		.live(LiveField::ShortDate, "yyyy-MM-dd")
}

fn builtin(name: &str) -> CultureFields {
	builtin_entries().into_iter().map(|e| e.fields).find(|f| f.name == name).unwrap_or_default()
}

#[test]
fn configured_service_resolves_all_tiers() -> TestResult<()> {
	init_tracing();
	let harness = CultureHarness::new()?.with_os_locale(maori()).with_user_default(MAORI);
	harness.install_custom(
		"fr-fr",
		vec![TableEntry::new(CultureFields { currency_symbol: "F".into(), ..builtin("fr-FR") })],
	)?;
	let service = harness.service_from_files()?;

	let fr = service.get_culture("fr-FR", false)?;
	assert_eq!(fr.provenance(), Provenance::Custom);
	assert!(fr.is_replacement_culture());
	assert_eq!(fr.currency_symbol(), "F");

	let mi = service.get_culture("mi-nz", true)?;
	assert_eq!(mi.provenance(), Provenance::Synthetic);
	assert_eq!(mi.parent_name(), "en");
	assert_eq!(mi.parent_id(), Lcid::new(0x0009));
	assert!(mi.user_override_active());
	assert_eq!(mi.decimal_separator(), "·");
	assert_eq!(mi.short_date_pattern(), "yyyy-MM-dd");
	assert_eq!(mi.date_separator(), "-");

	let stored = service.get_culture("mi-NZ", false)?;
	assert!(stored.shares_data_with(&mi));
	assert_eq!(stored.decimal_separator(), ".");
	assert_eq!(stored.date_separator(), "/");

	let us = service.get_culture("en-US", false)?;
	assert_eq!(us.provenance(), Provenance::Builtin);
	Ok(())
}

#[test]
fn disabling_custom_cultures_in_config() -> TestResult<()> {
	let mut harness = CultureHarness::new()?;
	harness.install_custom(
		"fr-fr",
		vec![TableEntry::new(CultureFields { currency_symbol: "F".into(), ..builtin("fr-FR") })],
	)?;
	harness.config_mut().disable_custom_cultures = true;
	let service = harness.service_from_files()?;
	assert!(service.config().disable_custom_cultures);
	assert_eq!(service.get_culture("fr-FR", false)?.provenance(), Provenance::Builtin);
	Ok(())
}

#[test]
fn prebuilt_builtin_table() -> TestResult<()> {
	let mut harness = CultureHarness::new()?;
	let path = harness.scratch("builtin.ctbl");
	let mut entries = builtin_entries();
	let mut extra = TableEntry::new(CultureFields {
		language_id: 0x0C09,
		parent_id: 0x0009,
		name: "en-AU".into(),
		region_name: "AU".into(),
		..builtin("en-US")
	});
	extra.alias("en-AU_test", Lcid::new(0x10C09));
	entries.push(extra);
	culture_data::TableBuilder::from_entries(entries).write_to(&path)?;
	harness.config_mut().builtin_table = Some(path);

	let service = harness.service_from_files()?;
	assert_eq!(service.builtin().item_count(), builtin_entries().len() + 1);
	let au = service.get_region("au", false)?;
	assert_eq!(au.culture_name(), "en-AU");
	let alias = service.get_culture_by_id(Lcid::new(0x10C09), false)?;
	assert_eq!(alias.culture_name(), "en-AU");
	assert_eq!(alias.fields(), au.fields());
	Ok(())
}

#[test]
fn corrupt_replacement_falls_back_to_builtin() -> TestResult<()> {
	let harness = CultureHarness::new()?;
	harness.install_raw("de-de", &[0x43, 0x54, 0x42, 0x4C, 0xFF])?;
	harness.install_raw("qps-broken", b"")?;
	let service = harness.service()?;
	assert_eq!(service.get_culture("de-DE", false)?.provenance(), Provenance::Builtin);
	// The phonebook sort shares the base culture's file.
	assert_eq!(service.get_culture("de-DE_phoneb", false)?.provenance(), Provenance::Builtin);
	assert!(matches!(
		service.get_culture("qps-broken", false),
		Err(culture_data::Error::CorruptedCustomCultureFile { .. })
	));
	Ok(())
}

#[test]
fn legacy_items_round_trip() -> TestResult<()> {
	let service = CultureHarness::new()?.service()?;
	let map = LegacyIndexMap::default_map();
	for name in ["", "en-US", "de-DE_phoneb", "es-ES_tradnl", "ja-JP_radstr", "fr"] {
		let record = service.get_culture(name, false)?;
		let restored = service.get_culture_by_id(map.culture_id(record.legacy_data_item())?, false)?;
		assert_eq!(restored.culture_id(), record.culture_id(), "{name:?}");
		assert_eq!(restored.fields(), record.fields());
	}
	for region in ["US", "GB", "JP"] {
		let record = service.get_region(region, false)?;
		let index = map.region_index(record.legacy_region_item())?;
		assert_eq!(service.builtin().decode(index)?.region_name, region);
	}
	assert!(map.culture_id(u16::MAX).is_err());
	Ok(())
}

#[test]
fn concurrent_mixed_lookups_agree() -> TestResult<()> {
	let harness = CultureHarness::new()?.with_os_locale(maori());
	let service = Arc::new(harness.service()?);
	let handles: Vec<_> = (0..16)
		.map(|i| {
			let service = Arc::clone(&service);
			std::thread::spawn(move || -> TestResult<Vec<(String, CultureRecord)>> {
				let flag = i % 2 == 1;
				Ok(vec![
					("mi-NZ".into(), service.get_culture("mi-NZ", flag)?),
					("mi-NZ".into(), service.get_culture_by_id(MAORI, flag)?),
					("de-DE".into(), service.get_culture("DE-DE", flag)?),
					("US".into(), service.get_region("us", flag)?),
				])
			})
		})
		.collect();

	let mut seen: HashMap<String, CultureRecord> = HashMap::new();
	for handle in handles {
		let results = handle.join().map_err(|_| anyhow::anyhow!("lookup thread panicked"))??;
		for (key, record) in results {
			let first = seen.entry(key).or_insert_with(|| record.clone());
			assert!(first.shares_data_with(&record), "{record:?}");
		}
	}
	let stats = service.cache_stats();
	assert_eq!(stats.by_name, Some(2));
	assert_eq!(stats.by_region, Some(1));
	assert_eq!(stats.synthetic_data, Some(1));
	Ok(())
}
