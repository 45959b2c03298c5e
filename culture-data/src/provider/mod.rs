//! Host OS locale capability.
//!
//! Every query may report "unsupported" by returning `None` (or an empty
//! list). Callers treat that as "fall back to table data", never as an error.

use culture_core::Lcid;
use serde::{Deserialize, Serialize};

mod fixed;

pub use fixed::{StaticLocale, StaticLocaleProvider};

/// Which name of a locale to ask the OS for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameQuery {
	/// The OS's own normalized culture name, where supported.
	Normalized,
	/// Two-letter ISO 639 language code.
	IsoLanguage,
	/// Two-letter ISO 3166 region code.
	IsoRegion,
	/// A native sample string (a day name) used for script detection.
	Sample,
}

/// Fields the user can customize for their default locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveField {
	ListSeparator,
	DecimalSeparator,
	GroupSeparator,
	Grouping,
	CurrencySymbol,
	CurrencyDecimalSeparator,
	CurrencyGroupSeparator,
	CurrencyGrouping,
	PositiveSign,
	NegativeSign,
	Digits,
	NegativeNumber,
	CurrencyDigits,
	PositiveCurrency,
	NegativeCurrency,
	AmDesignator,
	PmDesignator,
	TimeFormat,
	ShortDate,
	LongDate,
	YearMonth,
	FirstDayOfWeek,
	FirstWeekOfYear,
	Measure,
	CalendarType,
	DigitSubstitution,
	NativeDigits,
}

impl LiveField {
	pub const fn tag(self) -> &'static str {
		match self {
			LiveField::ListSeparator => "SLIST",
			LiveField::DecimalSeparator => "SDECIMAL",
			LiveField::GroupSeparator => "STHOUSAND",
			LiveField::Grouping => "SGROUPING",
			LiveField::CurrencySymbol => "SCURRENCY",
			LiveField::CurrencyDecimalSeparator => "SMONDECIMALSEP",
			LiveField::CurrencyGroupSeparator => "SMONTHOUSANDSEP",
			LiveField::CurrencyGrouping => "SMONGROUPING",
			LiveField::PositiveSign => "SPOSITIVESIGN",
			LiveField::NegativeSign => "SNEGATIVESIGN",
			LiveField::Digits => "IDIGITS",
			LiveField::NegativeNumber => "INEGNUMBER",
			LiveField::CurrencyDigits => "ICURRDIGITS",
			LiveField::PositiveCurrency => "ICURRENCY",
			LiveField::NegativeCurrency => "INEGCURR",
			LiveField::AmDesignator => "S1159",
			LiveField::PmDesignator => "S2359",
			LiveField::TimeFormat => "STIMEFORMAT",
			LiveField::ShortDate => "SSHORTDATE",
			LiveField::LongDate => "SLONGDATE",
			LiveField::YearMonth => "SYEARMONTH",
			LiveField::FirstDayOfWeek => "IFIRSTDAYOFWEEK",
			LiveField::FirstWeekOfYear => "IFIRSTWEEKOFYEAR",
			LiveField::Measure => "IMEASURE",
			LiveField::CalendarType => "ICALENDARTYPE",
			LiveField::DigitSubstitution => "IDIGITSUBSTITUTION",
			LiveField::NativeDigits => "SNATIVEDIGITS",
		}
	}
}

/// Native name of one calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarName {
	pub id: u16,
	pub name: String,
}

/// The raw field block the OS reports for one locale. Grouping strings use
/// the OS convention (`"3;0"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsLocaleInfo {
	pub english_language: String,
	pub native_language: String,
	pub english_country: String,
	pub native_country: String,
	pub iso639_language: String,
	pub iso639_language3: String,
	pub iso3166_country: String,
	pub iso3166_country3: String,
	pub abbrev_language: String,
	pub abbrev_country: String,
	pub parent_name: String,
	pub console_fallback_name: String,
	pub scripts: String,
	pub right_to_left: bool,

	pub list_separator: String,
	pub decimal_separator: String,
	pub group_separator: String,
	pub grouping: String,
	pub digits: u16,
	pub negative_number: u16,
	pub positive_sign: String,
	pub negative_sign: String,
	pub nan_symbol: String,
	pub positive_infinity: String,
	pub negative_infinity: String,
	pub percent_symbol: String,
	pub permille_symbol: String,
	pub positive_percent: u16,
	pub negative_percent: u16,
	pub native_digits: Vec<String>,
	pub digit_substitution: u16,
	pub measure: u16,

	pub currency_symbol: String,
	pub intl_currency_symbol: String,
	pub english_currency: String,
	pub native_currency: String,
	pub currency_decimal_separator: String,
	pub currency_group_separator: String,
	pub currency_grouping: String,
	pub currency_digits: u16,
	pub positive_currency: u16,
	pub negative_currency: u16,

	pub am_designator: String,
	pub pm_designator: String,
	pub time_formats: Vec<String>,
	/// Empty when the OS has no short time list; derived from the time
	/// formats then.
	pub short_time_formats: Vec<String>,
	pub short_dates: Vec<String>,
	pub long_dates: Vec<String>,
	pub year_months: Vec<String>,
	pub month_day: String,
	pub day_names: Vec<String>,
	pub abbrev_day_names: Vec<String>,
	pub shortest_day_names: Vec<String>,
	pub month_names: Vec<String>,
	pub abbrev_month_names: Vec<String>,
	pub genitive_month_names: Vec<String>,
	pub first_day_of_week: u16,
	pub first_week_of_year: u16,
	pub default_calendar: u16,
	pub calendars: Vec<u16>,
	pub native_calendar_names: Vec<CalendarName>,

	pub geo_id: u16,
	pub ansi_code_page: u16,
	pub oem_code_page: u16,
	pub mac_code_page: u16,
	pub ebcdic_code_page: u16,
}

/// Source of host locale data.
///
/// `enumerate_installed_ids` and `query_fields` read process-global OS state;
/// callers serialize them.
pub trait LocaleProvider: Send + Sync {
	fn query_name(&self, id: Lcid, query: NameQuery) -> Option<String>;
	fn query_fields(&self, id: Lcid) -> Option<OsLocaleInfo>;
	fn enumerate_installed_ids(&self) -> Vec<Lcid>;
	fn user_default_id(&self) -> Lcid;
	fn query_live_field(&self, id: Lcid, field: LiveField) -> Option<String>;
	fn sort_key(&self, id: Lcid, text: &str) -> Option<Vec<u8>>;
}

/// A host without locale support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLocaleProvider;

impl LocaleProvider for NullLocaleProvider {
	fn query_name(&self, _: Lcid, _: NameQuery) -> Option<String> { None }
	fn query_fields(&self, _: Lcid) -> Option<OsLocaleInfo> { None }
	fn enumerate_installed_ids(&self) -> Vec<Lcid> { Vec::new() }
	fn user_default_id(&self) -> Lcid { Lcid::INVARIANT }
	fn query_live_field(&self, _: Lcid, _: LiveField) -> Option<String> { None }
	fn sort_key(&self, _: Lcid, _: &str) -> Option<Vec<u8>> { None }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn null_provider_supports_nothing() {
		let p = NullLocaleProvider;
		assert!(p.enumerate_installed_ids().is_empty());
		assert_eq!(p.user_default_id(), Lcid::INVARIANT);
		assert!(p.query_fields(Lcid::new(0x0409)).is_none());
		assert!(p.query_live_field(Lcid::new(0x0409), LiveField::DecimalSeparator).is_none());
	}

	#[test]
	fn live_field_names() {
		assert_eq!(LiveField::Grouping.tag(), "SGROUPING");
		assert_eq!(serde_json::to_string(&LiveField::ShortDate).unwrap(), "\"short_date\"");
	}
}
