//! Compiled-in builtin culture data.
//!
//! The seed covers the invariant culture and a handful of neutral and
//! specific cultures, including the three classic alternate sort orders
//! (`de-DE_phoneb`, `es-ES_tradnl`, `ja-JP_radstr`). A prebuilt image can
//! replace it through configuration.

use culture_core::Lcid;

use super::{CultureTable, TableBuilder, TableEntry, TableOrigin};
use crate::errors::Result;
use crate::fields::{flags, CultureFields};

fn strs(items: &[&str]) -> Vec<String> { items.iter().map(|s| s.to_string()).collect() }

const GREGORIAN: u16 = 1;
const JAPANESE: u16 = 3;

const ENGLISH_DAYS: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
const ENGLISH_MONTHS: [&str; 12] = [
	"January", "February", "March", "April", "May", "June", "July", "August", "September", "October", "November",
	"December",
];

fn digits() -> Vec<String> { (0..10).map(|d| d.to_string()).collect() }

fn invariant() -> CultureFields {
	CultureFields {
		language_id: 0x007F,
		parent_id: 0x007F,
		digits: 2,
		negative_number: 1,
		currency_digits: 2,
		calendar_type: GREGORIAN,
		geo_id: 244,
		ansi_code_page: 1252,
		oem_code_page: 437,
		mac_code_page: 10000,
		ebcdic_code_page: 37,
		input_language_handle: 0x0409,
		region_name: "IV".into(),
		iso639_language: "iv".into(),
		iso639_language3: "ivl".into(),
		iso3166_country: "IV".into(),
		iso3166_country3: "IVC".into(),
		abbrev_language: "IVL".into(),
		abbrev_country: "IVC".into(),
		english_display_name: "Invariant Language (Invariant Country)".into(),
		native_display_name: "Invariant Language (Invariant Country)".into(),
		english_language: "Invariant Language".into(),
		native_language: "Invariant Language".into(),
		english_country: "Invariant Country".into(),
		native_country: "Invariant Country".into(),
		list_separator: ",".into(),
		decimal_separator: ".".into(),
		group_separator: ",".into(),
		currency_symbol: "\u{00A4}".into(),
		intl_currency_symbol: "XDR".into(),
		english_currency: "International Monetary Fund".into(),
		native_currency: "International Monetary Fund".into(),
		currency_decimal_separator: ".".into(),
		currency_group_separator: ",".into(),
		positive_sign: "+".into(),
		negative_sign: "-".into(),
		nan_symbol: "NaN".into(),
		positive_infinity: "Infinity".into(),
		negative_infinity: "-Infinity".into(),
		percent_symbol: "%".into(),
		permille_symbol: "\u{2030}".into(),
		am_designator: "AM".into(),
		pm_designator: "PM".into(),
		time_separator: ":".into(),
		date_separator: "/".into(),
		month_day: "MMMM dd".into(),
		grouping: vec![3],
		currency_grouping: vec![3],
		optional_calendars: vec![GREGORIAN],
		time_formats: strs(&["HH:mm:ss"]),
		short_time_formats: strs(&["HH:mm"]),
		short_dates: strs(&["MM/dd/yyyy", "yyyy-MM-dd"]),
		long_dates: strs(&["dddd, dd MMMM yyyy"]),
		year_months: strs(&["yyyy MMMM"]),
		day_names: strs(&ENGLISH_DAYS),
		abbrev_day_names: strs(&["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
		shortest_day_names: strs(&["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]),
		month_names: strs(&ENGLISH_MONTHS),
		abbrev_month_names: strs(&["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]),
		native_digits: digits(),
		native_calendar_names: strs(&["", "Gregorian Calendar"]),
		..Default::default()
	}
}

fn english() -> CultureFields {
	CultureFields {
		language_id: 0x0009,
		name: "en".into(),
		ietf_tag: "en".into(),
		region_name: String::new(),
		iso639_language: "en".into(),
		iso639_language3: "eng".into(),
		iso3166_country: String::new(),
		iso3166_country3: String::new(),
		abbrev_language: "ENU".into(),
		abbrev_country: "USA".into(),
		english_display_name: "English".into(),
		native_display_name: "English".into(),
		english_language: "English".into(),
		native_language: "English".into(),
		english_country: String::new(),
		native_country: String::new(),
		console_fallback_name: "en".into(),
		scripts: "Latn;".into(),
		currency_symbol: "$".into(),
		intl_currency_symbol: "USD".into(),
		english_currency: "US Dollar".into(),
		native_currency: "US Dollar".into(),
		month_day: "MMMM d".into(),
		time_formats: strs(&["h:mm:ss tt", "hh:mm:ss tt", "H:mm:ss", "HH:mm:ss"]),
		short_time_formats: strs(&["h:mm tt", "hh:mm tt", "H:mm", "HH:mm"]),
		short_dates: strs(&["M/d/yyyy", "M/d/yy", "MM/dd/yy", "MM/dd/yyyy", "yy/MM/dd", "yyyy-MM-dd", "dd-MMM-yy"]),
		long_dates: strs(&["dddd, MMMM d, yyyy", "MMMM d, yyyy", "dddd, d MMMM, yyyy", "d MMMM, yyyy"]),
		year_months: strs(&["MMMM yyyy"]),
		native_calendar_names: strs(&["", "Gregorian Calendar"]),
		measure: 1,
		negative_currency: 0,
		..invariant()
	}
}

fn english_us() -> CultureFields {
	CultureFields {
		language_id: 0x0409,
		parent_id: 0x0009,
		flags: flags::SPECIFIC,
		name: "en-US".into(),
		parent_name: "en".into(),
		ietf_tag: "en-US".into(),
		region_name: "US".into(),
		iso3166_country: "US".into(),
		iso3166_country3: "USA".into(),
		english_display_name: "English (United States)".into(),
		native_display_name: "English (United States)".into(),
		english_country: "United States".into(),
		native_country: "United States".into(),
		console_fallback_name: "en-US".into(),
		geo_id: 244,
		..english()
	}
}

fn english_gb() -> CultureFields {
	CultureFields {
		language_id: 0x0809,
		parent_id: 0x0009,
		flags: flags::SPECIFIC,
		first_day_of_week: 1,
		first_week_of_year: 2,
		measure: 0,
		positive_currency: 0,
		negative_currency: 1,
		geo_id: 242,
		oem_code_page: 850,
		input_language_handle: 0x0809,
		name: "en-GB".into(),
		parent_name: "en".into(),
		ietf_tag: "en-GB".into(),
		region_name: "GB".into(),
		iso3166_country: "GB".into(),
		iso3166_country3: "GBR".into(),
		abbrev_language: "ENG".into(),
		abbrev_country: "GBR".into(),
		english_display_name: "English (United Kingdom)".into(),
		native_display_name: "English (United Kingdom)".into(),
		english_country: "United Kingdom".into(),
		native_country: "United Kingdom".into(),
		console_fallback_name: "en-GB".into(),
		currency_symbol: "\u{00A3}".into(),
		intl_currency_symbol: "GBP".into(),
		english_currency: "UK Pound Sterling".into(),
		native_currency: "Pound Sterling".into(),
		time_formats: strs(&["HH:mm:ss", "H:mm:ss"]),
		short_time_formats: strs(&["HH:mm", "H:mm"]),
		short_dates: strs(&["dd/MM/yyyy", "dd/MM/yy", "d/M/yy", "d.M.yy", "yyyy-MM-dd"]),
		long_dates: strs(&["dd MMMM yyyy", "d MMMM yyyy"]),
		month_day: "dd MMMM".into(),
		..english()
	}
}

fn german() -> CultureFields {
	CultureFields {
		language_id: 0x0007,
		parent_id: 0x007F,
		first_day_of_week: 1,
		first_week_of_year: 2,
		positive_currency: 3,
		negative_currency: 8,
		oem_code_page: 850,
		input_language_handle: 0x0407,
		name: "de".into(),
		ietf_tag: "de".into(),
		region_name: String::new(),
		iso639_language: "de".into(),
		iso639_language3: "deu".into(),
		iso3166_country: String::new(),
		iso3166_country3: String::new(),
		abbrev_language: "DEU".into(),
		abbrev_country: "DEU".into(),
		english_display_name: "German".into(),
		native_display_name: "Deutsch".into(),
		english_language: "German".into(),
		native_language: "Deutsch".into(),
		english_country: String::new(),
		native_country: String::new(),
		console_fallback_name: "de".into(),
		scripts: "Latn;".into(),
		list_separator: ";".into(),
		decimal_separator: ",".into(),
		group_separator: ".".into(),
		currency_symbol: "\u{20AC}".into(),
		intl_currency_symbol: "EUR".into(),
		english_currency: "Euro".into(),
		native_currency: "Euro".into(),
		currency_decimal_separator: ",".into(),
		currency_group_separator: ".".into(),
		nan_symbol: "n. def.".into(),
		am_designator: String::new(),
		pm_designator: String::new(),
		date_separator: ".".into(),
		month_day: "dd MMMM".into(),
		time_formats: strs(&["HH:mm:ss", "H:mm:ss", "HH.mm' Uhr '"]),
		short_time_formats: strs(&["HH:mm", "H:mm"]),
		short_dates: strs(&["dd.MM.yyyy", "dd.MM.yy", "d.M.yy", "yyyy-MM-dd"]),
		long_dates: strs(&["dddd, d. MMMM yyyy", "d. MMMM yyyy", "d. MMM. yyyy"]),
		year_months: strs(&["MMMM yyyy"]),
		day_names: strs(&["Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag"]),
		abbrev_day_names: strs(&["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"]),
		shortest_day_names: strs(&["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"]),
		month_names: strs(&[
			"Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September", "Oktober", "November",
			"Dezember",
		]),
		abbrev_month_names: strs(&["Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez"]),
		native_calendar_names: strs(&["", "Gregorianischer Kalender"]),
		..invariant()
	}
}

fn german_de() -> CultureFields {
	CultureFields {
		language_id: 0x0407,
		parent_id: 0x0007,
		flags: flags::SPECIFIC,
		geo_id: 94,
		name: "de-DE".into(),
		parent_name: "de".into(),
		ietf_tag: "de-DE".into(),
		region_name: "DE".into(),
		iso3166_country: "DE".into(),
		iso3166_country3: "DEU".into(),
		english_display_name: "German (Germany)".into(),
		native_display_name: "Deutsch (Deutschland)".into(),
		english_country: "Germany".into(),
		native_country: "Deutschland".into(),
		console_fallback_name: "de-DE".into(),
		..german()
	}
}

fn spanish() -> CultureFields {
	CultureFields {
		language_id: 0x000A,
		parent_id: 0x007F,
		first_day_of_week: 1,
		positive_currency: 3,
		negative_currency: 8,
		oem_code_page: 850,
		input_language_handle: 0x0C0A,
		name: "es".into(),
		ietf_tag: "es".into(),
		region_name: String::new(),
		iso639_language: "es".into(),
		iso639_language3: "spa".into(),
		iso3166_country: String::new(),
		iso3166_country3: String::new(),
		abbrev_language: "ESN".into(),
		abbrev_country: "ESP".into(),
		english_display_name: "Spanish".into(),
		native_display_name: "español".into(),
		english_language: "Spanish".into(),
		native_language: "español".into(),
		english_country: String::new(),
		native_country: String::new(),
		console_fallback_name: "es".into(),
		scripts: "Latn;".into(),
		list_separator: ";".into(),
		decimal_separator: ",".into(),
		group_separator: ".".into(),
		currency_symbol: "\u{20AC}".into(),
		intl_currency_symbol: "EUR".into(),
		english_currency: "Euro".into(),
		native_currency: "euro".into(),
		currency_decimal_separator: ",".into(),
		currency_group_separator: ".".into(),
		am_designator: "a. m.".into(),
		pm_designator: "p. m.".into(),
		month_day: "d' de 'MMMM".into(),
		time_formats: strs(&["H:mm:ss", "HH:mm:ss"]),
		short_time_formats: strs(&["H:mm", "HH:mm"]),
		short_dates: strs(&["dd/MM/yyyy", "dd/MM/yy", "d/MM/yy", "d/M/yy", "yyyy-MM-dd"]),
		long_dates: strs(&["dddd, d' de 'MMMM' de 'yyyy", "d' de 'MMMM' de 'yyyy"]),
		year_months: strs(&["MMMM' de 'yyyy"]),
		day_names: strs(&["domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado"]),
		abbrev_day_names: strs(&["do.", "lu.", "ma.", "mi.", "ju.", "vi.", "sá."]),
		shortest_day_names: strs(&["D", "L", "M", "X", "J", "V", "S"]),
		month_names: strs(&[
			"enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre", "octubre",
			"noviembre", "diciembre",
		]),
		abbrev_month_names: strs(&[
			"ene.", "feb.", "mar.", "abr.", "may.", "jun.", "jul.", "ago.", "sept.", "oct.", "nov.", "dic.",
		]),
		native_calendar_names: strs(&["", "calendario gregoriano"]),
		..invariant()
	}
}

fn spanish_es() -> CultureFields {
	CultureFields {
		language_id: 0x0C0A,
		parent_id: 0x000A,
		flags: flags::SPECIFIC,
		geo_id: 217,
		name: "es-ES".into(),
		parent_name: "es".into(),
		ietf_tag: "es-ES".into(),
		region_name: "ES".into(),
		iso3166_country: "ES".into(),
		iso3166_country3: "ESP".into(),
		english_display_name: "Spanish (Spain)".into(),
		native_display_name: "español (España)".into(),
		english_country: "Spain".into(),
		native_country: "España".into(),
		console_fallback_name: "es-ES".into(),
		..spanish()
	}
}

fn french() -> CultureFields {
	CultureFields {
		language_id: 0x000C,
		parent_id: 0x007F,
		first_day_of_week: 1,
		first_week_of_year: 2,
		positive_currency: 3,
		negative_currency: 8,
		oem_code_page: 850,
		input_language_handle: 0x040C,
		name: "fr".into(),
		ietf_tag: "fr".into(),
		region_name: String::new(),
		iso639_language: "fr".into(),
		iso639_language3: "fra".into(),
		iso3166_country: String::new(),
		iso3166_country3: String::new(),
		abbrev_language: "FRA".into(),
		abbrev_country: "FRA".into(),
		english_display_name: "French".into(),
		native_display_name: "français".into(),
		english_language: "French".into(),
		native_language: "français".into(),
		english_country: String::new(),
		native_country: String::new(),
		console_fallback_name: "fr".into(),
		scripts: "Latn;".into(),
		list_separator: ";".into(),
		decimal_separator: ",".into(),
		group_separator: "\u{202F}".into(),
		currency_symbol: "\u{20AC}".into(),
		intl_currency_symbol: "EUR".into(),
		english_currency: "Euro".into(),
		native_currency: "euro".into(),
		currency_decimal_separator: ",".into(),
		currency_group_separator: "\u{202F}".into(),
		am_designator: String::new(),
		pm_designator: String::new(),
		month_day: "d MMMM".into(),
		time_formats: strs(&["HH:mm:ss", "HH' h 'mm"]),
		short_time_formats: strs(&["HH:mm", "HH' h 'mm"]),
		short_dates: strs(&["dd/MM/yyyy", "dd/MM/yy", "dd.MM.yy", "dd-MM-yy", "yyyy-MM-dd"]),
		long_dates: strs(&["dddd d MMMM yyyy", "d MMM yy", "d MMMM yyyy"]),
		year_months: strs(&["MMMM yyyy"]),
		day_names: strs(&["dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi"]),
		abbrev_day_names: strs(&["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."]),
		shortest_day_names: strs(&["di", "lu", "ma", "me", "je", "ve", "sa"]),
		month_names: strs(&[
			"janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre", "octobre",
			"novembre", "décembre",
		]),
		abbrev_month_names: strs(&[
			"janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.", "déc.",
		]),
		native_calendar_names: strs(&["", "calendrier grégorien"]),
		..invariant()
	}
}

fn french_fr() -> CultureFields {
	CultureFields {
		language_id: 0x040C,
		parent_id: 0x000C,
		flags: flags::SPECIFIC,
		geo_id: 84,
		name: "fr-FR".into(),
		parent_name: "fr".into(),
		ietf_tag: "fr-FR".into(),
		region_name: "FR".into(),
		iso3166_country: "FR".into(),
		iso3166_country3: "FRA".into(),
		english_display_name: "French (France)".into(),
		native_display_name: "français (France)".into(),
		english_country: "France".into(),
		native_country: "France".into(),
		console_fallback_name: "fr-FR".into(),
		..french()
	}
}

fn japanese() -> CultureFields {
	CultureFields {
		language_id: 0x0011,
		parent_id: 0x007F,
		negative_currency: 1,
		ansi_code_page: 932,
		oem_code_page: 932,
		mac_code_page: 10001,
		ebcdic_code_page: 20290,
		input_language_handle: 0x0411,
		name: "ja".into(),
		ietf_tag: "ja".into(),
		region_name: String::new(),
		iso639_language: "ja".into(),
		iso639_language3: "jpn".into(),
		iso3166_country: String::new(),
		iso3166_country3: String::new(),
		abbrev_language: "JPN".into(),
		abbrev_country: "JPN".into(),
		english_display_name: "Japanese".into(),
		native_display_name: "日本語".into(),
		english_language: "Japanese".into(),
		native_language: "日本語".into(),
		english_country: String::new(),
		native_country: String::new(),
		console_fallback_name: "ja".into(),
		scripts: "Hani;Hira;Jpan;Kana;".into(),
		currency_symbol: "\u{00A5}".into(),
		intl_currency_symbol: "JPY".into(),
		english_currency: "Japanese Yen".into(),
		native_currency: "円".into(),
		currency_digits: 0,
		am_designator: "午前".into(),
		pm_designator: "午後".into(),
		month_day: "M月d日".into(),
		time_formats: strs(&["H:mm:ss", "HH:mm:ss", "tt h:mm:ss", "tt hh:mm:ss"]),
		short_time_formats: strs(&["H:mm", "HH:mm", "tt h:mm", "tt hh:mm"]),
		short_dates: strs(&["yyyy/MM/dd", "yyyy/M/d", "yy/MM/dd", "yy/M/d"]),
		long_dates: strs(&["yyyy'年'M'月'd'日'", "yyyy'年'M'月'd'日'dddd"]),
		year_months: strs(&["yyyy'年'M'月'"]),
		day_names: strs(&["日曜日", "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日"]),
		abbrev_day_names: strs(&["日", "月", "火", "水", "木", "金", "土"]),
		shortest_day_names: strs(&["日", "月", "火", "水", "木", "金", "土"]),
		month_names: strs(&["1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月"]),
		abbrev_month_names: strs(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]),
		optional_calendars: vec![GREGORIAN, JAPANESE],
		native_calendar_names: strs(&["", "西暦 (日本語)", "", "和暦"]),
		..invariant()
	}
}

fn japanese_jp() -> CultureFields {
	CultureFields {
		language_id: 0x0411,
		parent_id: 0x0011,
		flags: flags::SPECIFIC,
		geo_id: 122,
		name: "ja-JP".into(),
		parent_name: "ja".into(),
		ietf_tag: "ja-JP".into(),
		region_name: "JP".into(),
		iso3166_country: "JP".into(),
		iso3166_country3: "JPN".into(),
		english_display_name: "Japanese (Japan)".into(),
		native_display_name: "日本語 (日本)".into(),
		english_country: "Japan".into(),
		native_country: "日本".into(),
		console_fallback_name: "ja-JP".into(),
		..japanese()
	}
}

/// The builtin seed in record order.
pub fn builtin_entries() -> Vec<TableEntry> {
	let mut de_de = TableEntry::new(german_de());
	de_de.alias("de-DE_phoneb", Lcid::new(0x10407));
	let mut es_es = TableEntry::new(spanish_es());
	es_es.alias("es-ES_tradnl", Lcid::SPANISH_TRADITIONAL_SORT);
	let mut ja_jp = TableEntry::new(japanese_jp());
	ja_jp.alias("ja-JP_radstr", Lcid::new(0x40411));
	vec![
		TableEntry::new(invariant()),
		TableEntry::new(english()),
		TableEntry::new(english_us()),
		TableEntry::new(english_gb()),
		TableEntry::new(german()),
		de_de,
		TableEntry::new(spanish()),
		es_es,
		TableEntry::new(french()),
		TableEntry::new(french_fr()),
		TableEntry::new(japanese()),
		ja_jp,
	]
}

/// Encode the builtin seed into a table.
pub fn builtin_table() -> Result<CultureTable> {
	TableBuilder::from_entries(builtin_entries()).build_table(TableOrigin::Builtin)
}
