//! Turns an OS field block into a complete record: composite names, parent
//! and console fallback mapping, calendar normalization, grouping conversion
//! and pattern-derived separators.

use culture_core::Lcid;

use super::names::SyntheticNames;
use crate::fields::{flags, CultureFields};
use crate::name::{canonicalize, strip_sort_suffix};
use crate::patterns::{separator_between, short_time_from_long, DATE_LETTERS, TIME_LETTERS};
use crate::provider::{CalendarName, OsLocaleInfo};
use crate::table::CultureTable;

const GREGORIAN: u16 = 1;

/// Convert an OS grouping string to the table convention.
///
/// The OS marks a repeating last group with a trailing `0`; the table marks
/// a non-repeating one that way. `"3;0"` becomes `[3]` and `"3"` becomes
/// `[3, 0]`. Returns `None` for anything but `;`-separated digits.
pub fn os_grouping_to_table(os: &str) -> Option<Vec<u16>> {
	let os = os.trim();
	if os.is_empty() {
		return None;
	}
	let mut groups = os
		.split(';')
		.map(|g| g.trim().parse::<u16>().ok().filter(|&n| n <= 9))
		.collect::<Option<Vec<_>>>()?;
	match groups.last() {
		Some(0) => {
			groups.pop();
		}
		_ => groups.push(0),
	}
	Some(groups)
}

/// Calendar ids with the default first, without duplicates or zeros.
pub fn normalize_calendars(calendars: &[u16], default: u16) -> Vec<u16> {
	let mut out = Vec::with_capacity(calendars.len() + 1);
	for &id in std::iter::once(&default).chain(calendars) {
		if id != 0 && !out.contains(&id) {
			out.push(id);
		}
	}
	if out.is_empty() {
		out.push(GREGORIAN);
	}
	out
}

/// Calendar names indexed by calendar id; ids with no name are empty.
pub fn dense_calendar_names(names: &[CalendarName]) -> Vec<String> {
	let Some(max) = names.iter().map(|c| c.id as usize).max() else {
		return Vec::new();
	};
	let mut dense = vec![String::new(); max + 1];
	for c in names {
		dense[c.id as usize] = c.name.clone();
	}
	dense
}

fn display_name(language: &str, country: &str) -> String {
	if country.is_empty() {
		language.to_string()
	} else {
		format!("{language} ({country})")
	}
}

/// Map an OS-reported culture name to a builtin or synthetic culture.
fn related_culture(name: &str, names: &SyntheticNames, builtin: &CultureTable) -> Option<(Lcid, String)> {
	let key = canonicalize(name).ok().filter(|k| !k.is_empty())?;
	if let Some(hit) = builtin.lookup_by_name(&key) {
		return Some((hit.lcid, hit.name));
	}
	let id = names.lcid_for(&key)?;
	Some((id, names.name_for(id).unwrap_or(name).to_string()))
}

/// Build the full record for OS locale `id` named `name`.
pub fn assemble(
	id: Lcid,
	name: &str,
	info: &OsLocaleInfo,
	names: &SyntheticNames,
	builtin: &CultureTable,
) -> CultureFields {
	let (parent_id, parent_name) =
		related_culture(&info.parent_name, names, builtin).unwrap_or((Lcid::INVARIANT, String::new()));
	let console_fallback_name = match related_culture(&info.console_fallback_name, names, builtin) {
		Some((_, fallback)) => fallback,
		None => builtin
			.lookup_by_id(Lcid::INVARIANT)
			.and_then(|hit| builtin.decode(hit.index).ok())
			.map(|inv| inv.console_fallback_name)
			.unwrap_or_default(),
	};

	let calendars = normalize_calendars(&info.calendars, info.default_calendar);
	let short_time_formats = if info.short_time_formats.is_empty() {
		let mut derived: Vec<String> = Vec::new();
		for short in info.time_formats.iter().map(|p| short_time_from_long(p)) {
			if !derived.contains(&short) {
				derived.push(short);
			}
		}
		derived
	} else {
		info.short_time_formats.clone()
	};
	let time_separator = info
		.time_formats
		.first()
		.and_then(|p| separator_between(p, TIME_LETTERS))
		.unwrap_or_else(|| ":".to_string());
	let date_separator = info
		.short_dates
		.first()
		.and_then(|p| separator_between(p, DATE_LETTERS))
		.unwrap_or_else(|| "/".to_string());

	let mut record_flags = flags::SYNTHETIC;
	if !info.iso3166_country.is_empty() {
		record_flags |= flags::SPECIFIC;
	}
	if info.right_to_left {
		record_flags |= flags::RIGHT_TO_LEFT;
	}

	CultureFields {
		language_id: id.lang_id(),
		parent_id: parent_id.lang_id(),
		digits: info.digits,
		negative_number: info.negative_number,
		currency_digits: info.currency_digits,
		positive_currency: info.positive_currency,
		negative_currency: info.negative_currency,
		positive_percent: info.positive_percent,
		negative_percent: info.negative_percent,
		calendar_type: calendars[0],
		first_day_of_week: info.first_day_of_week,
		first_week_of_year: info.first_week_of_year,
		measure: info.measure,
		digit_substitution: info.digit_substitution,
		line_orientations: 0,
		geo_id: info.geo_id,
		ansi_code_page: info.ansi_code_page,
		oem_code_page: info.oem_code_page,
		mac_code_page: info.mac_code_page,
		ebcdic_code_page: info.ebcdic_code_page,
		input_language_handle: id.lang_id(),
		flags: record_flags,

		name: name.to_string(),
		parent_name,
		ietf_tag: strip_sort_suffix(name).to_string(),
		region_name: info.iso3166_country.clone(),
		iso639_language: info.iso639_language.clone(),
		iso639_language3: info.iso639_language3.clone(),
		iso3166_country: info.iso3166_country.clone(),
		iso3166_country3: info.iso3166_country3.clone(),
		abbrev_language: info.abbrev_language.clone(),
		abbrev_country: info.abbrev_country.clone(),
		english_display_name: display_name(&info.english_language, &info.english_country),
		native_display_name: display_name(&info.native_language, &info.native_country),
		english_language: info.english_language.clone(),
		native_language: info.native_language.clone(),
		english_country: info.english_country.clone(),
		native_country: info.native_country.clone(),
		console_fallback_name,
		scripts: info.scripts.clone(),
		list_separator: info.list_separator.clone(),
		decimal_separator: info.decimal_separator.clone(),
		group_separator: info.group_separator.clone(),
		currency_symbol: info.currency_symbol.clone(),
		intl_currency_symbol: info.intl_currency_symbol.clone(),
		english_currency: info.english_currency.clone(),
		native_currency: info.native_currency.clone(),
		currency_decimal_separator: info.currency_decimal_separator.clone(),
		currency_group_separator: info.currency_group_separator.clone(),
		positive_sign: info.positive_sign.clone(),
		negative_sign: info.negative_sign.clone(),
		nan_symbol: info.nan_symbol.clone(),
		positive_infinity: info.positive_infinity.clone(),
		negative_infinity: info.negative_infinity.clone(),
		percent_symbol: info.percent_symbol.clone(),
		permille_symbol: info.permille_symbol.clone(),
		am_designator: info.am_designator.clone(),
		pm_designator: info.pm_designator.clone(),
		time_separator,
		date_separator,
		month_day: info.month_day.clone(),

		grouping: os_grouping_to_table(&info.grouping).unwrap_or_else(|| vec![3]),
		currency_grouping: os_grouping_to_table(&info.currency_grouping).unwrap_or_else(|| vec![3]),
		optional_calendars: calendars,

		time_formats: info.time_formats.clone(),
		short_time_formats,
		short_dates: info.short_dates.clone(),
		long_dates: info.long_dates.clone(),
		year_months: info.year_months.clone(),
		day_names: info.day_names.clone(),
		abbrev_day_names: info.abbrev_day_names.clone(),
		shortest_day_names: info.shortest_day_names.clone(),
		month_names: info.month_names.clone(),
		abbrev_month_names: info.abbrev_month_names.clone(),
		genitive_month_names: info.genitive_month_names.clone(),
		native_digits: info.native_digits.clone(),
		native_calendar_names: dense_calendar_names(&info.native_calendar_names),
	}
}
