//! Typed field accessors and the user override layer.
//!
//! Overridable fields consult the OS only when the record was requested with
//! user override and it is the user's default locale. A live value that is
//! empty or fails validation falls back to the stored value.

use culture_core::Lcid;

use crate::fields::{flags, FieldId};
use crate::name::canonicalize;
use crate::patterns::{separator_between, DATE_LETTERS, TIME_LETTERS};
use crate::provider::{LiveField, NameQuery};
use crate::record::CultureRecord;
use crate::synthetic::os_grouping_to_table;

macro_rules! stored_string {
	($($(#[$meta:meta])* $method:ident => $field:ident;)+) => {
		$( $(#[$meta])* pub fn $method(&self) -> String { self.string(FieldId::$field) } )+
	};
}

macro_rules! stored_word {
	($($(#[$meta:meta])* $method:ident => $field:ident;)+) => {
		$( $(#[$meta])* pub fn $method(&self) -> u16 { self.word(FieldId::$field) } )+
	};
}

macro_rules! stored_strings {
	($($(#[$meta:meta])* $method:ident => $field:ident;)+) => {
		$( $(#[$meta])* pub fn $method(&self) -> Vec<String> { self.strings(FieldId::$field) } )+
	};
}

macro_rules! overridable_string {
	($($method:ident => $field:ident, $live:ident;)+) => {
		$( pub fn $method(&self) -> String { self.override_string(LiveField::$live, FieldId::$field) } )+
	};
}

macro_rules! overridable_word {
	($($method:ident => $field:ident, $live:ident;)+) => {
		$( pub fn $method(&self) -> u16 { self.override_word(LiveField::$live, FieldId::$field) } )+
	};
}

macro_rules! overridable_list {
	($($method:ident => $field:ident, $live:ident;)+) => {
		$( pub fn $method(&self) -> Vec<String> { self.override_list(LiveField::$live, FieldId::$field) } )+
	};
}

impl CultureRecord {
	/// Whether live OS values apply to this record: override requested and
	/// the record is the user's default locale. Custom cultures reporting a
	/// generic id match by name.
	pub fn user_override_active(&self) -> bool {
		if !self.use_user_override() {
			return false;
		}
		let user = self.provider().user_default_id();
		let actual = self.actual_culture_id();
		if actual == user {
			return true;
		}
		if actual.is_custom_sentinel() && user.is_custom_sentinel() {
			return self
				.provider()
				.query_name(user, NameQuery::Normalized)
				.and_then(|n| canonicalize(&n).ok())
				.is_some_and(|n| n.eq_ignore_ascii_case(self.culture_name()));
		}
		false
	}

	fn live(&self, field: LiveField) -> Option<String> {
		if !self.user_override_active() {
			return None;
		}
		self.provider().query_live_field(self.actual_culture_id(), field).filter(|v| !v.is_empty())
	}

	fn override_string(&self, live: LiveField, field: FieldId) -> String {
		self.live(live).unwrap_or_else(|| self.string(field))
	}

	fn override_word(&self, live: LiveField, field: FieldId) -> u16 {
		self.live(live).and_then(|v| v.trim().parse().ok()).unwrap_or_else(|| self.word(field))
	}

	/// The live value leads the stored list.
	fn override_list(&self, live: LiveField, field: FieldId) -> Vec<String> {
		let mut list = self.strings(field);
		if let Some(v) = self.live(live) {
			list.retain(|s| *s != v);
			list.insert(0, v);
		}
		list
	}

	fn override_grouping(&self, live: LiveField, field: FieldId) -> Vec<u16> {
		self.live(live).and_then(|v| os_grouping_to_table(&v)).unwrap_or_else(|| self.words(field))
	}

	// Identity and names

	pub fn name(&self) -> &str { self.culture_name() }

	stored_string! {
		ietf_tag => IetfTag;
		parent_name => ParentName;
		/// Region of a specific culture; empty for neutral cultures.
		region_name => RegionName;
		english_display_name => EnglishDisplayName;
		native_display_name => NativeDisplayName;
		english_language => EnglishLanguage;
		native_language => NativeLanguage;
		english_country => EnglishCountry;
		native_country => NativeCountry;
		two_letter_iso_language => Iso639Language;
		three_letter_iso_language => Iso639Language3;
		two_letter_iso_region => Iso3166Country;
		three_letter_iso_region => Iso3166Country3;
		three_letter_windows_language => AbbrevLanguage;
		three_letter_windows_region => AbbrevCountry;
		console_fallback_name => ConsoleFallbackName;
		scripts => Scripts;
	}

	pub fn parent_id(&self) -> Lcid { Lcid::new(u32::from(self.word(FieldId::ParentId))) }

	/// `ILANGUAGE` as stored; alternate sorts report their base.
	pub fn language_id(&self) -> Lcid { Lcid::new(u32::from(self.word(FieldId::LanguageId))) }

	pub fn is_neutral(&self) -> bool { self.word(FieldId::Flags) & flags::SPECIFIC == 0 }

	pub fn is_right_to_left(&self) -> bool { self.word(FieldId::Flags) & flags::RIGHT_TO_LEFT != 0 }

	// Numbers

	overridable_string! {
		list_separator => ListSeparator, ListSeparator;
		decimal_separator => DecimalSeparator, DecimalSeparator;
		group_separator => GroupSeparator, GroupSeparator;
		positive_sign => PositiveSign, PositiveSign;
		negative_sign => NegativeSign, NegativeSign;
		currency_symbol => CurrencySymbol, CurrencySymbol;
		currency_decimal_separator => CurrencyDecimalSeparator, CurrencyDecimalSeparator;
		currency_group_separator => CurrencyGroupSeparator, CurrencyGroupSeparator;
		am_designator => AmDesignator, AmDesignator;
		pm_designator => PmDesignator, PmDesignator;
	}

	overridable_word! {
		digits => Digits, Digits;
		negative_number => NegativeNumber, NegativeNumber;
		currency_digits => CurrencyDigits, CurrencyDigits;
		positive_currency => PositiveCurrency, PositiveCurrency;
		negative_currency => NegativeCurrency, NegativeCurrency;
		first_day_of_week => FirstDayOfWeek, FirstDayOfWeek;
		first_week_of_year => FirstWeekOfYear, FirstWeekOfYear;
		measure => Measure, Measure;
		digit_substitution => DigitSubstitution, DigitSubstitution;
	}

	stored_string! {
		nan_symbol => NanSymbol;
		positive_infinity => PositiveInfinity;
		negative_infinity => NegativeInfinity;
		percent_symbol => PercentSymbol;
		permille_symbol => PermilleSymbol;
		intl_currency_symbol => IntlCurrencySymbol;
		english_currency => EnglishCurrency;
		native_currency => NativeCurrency;
		month_day => MonthDay;
	}

	stored_word! {
		positive_percent => PositivePercent;
		negative_percent => NegativePercent;
		geo_id => GeoId;
		ansi_code_page => AnsiCodePage;
		oem_code_page => OemCodePage;
		mac_code_page => MacCodePage;
		ebcdic_code_page => EbcdicCodePage;
		/// Keyboard layout id.
		input_language_handle => InputLanguageHandle;
	}

	/// Group sizes in table convention (trailing 0 = last group does not repeat).
	pub fn grouping(&self) -> Vec<u16> { self.override_grouping(LiveField::Grouping, FieldId::Grouping) }

	pub fn currency_grouping(&self) -> Vec<u16> {
		self.override_grouping(LiveField::CurrencyGrouping, FieldId::CurrencyGrouping)
	}

	pub fn is_metric(&self) -> bool { self.measure() == 0 }

	/// The ten native digits. A live value must be exactly ten characters.
	pub fn native_digits(&self) -> Vec<String> {
		match self.live(LiveField::NativeDigits) {
			Some(v) if v.chars().count() == 10 => v.chars().map(String::from).collect(),
			_ => self.strings(FieldId::NativeDigits),
		}
	}

	// Dates and times

	overridable_list! {
		time_formats => TimeFormats, TimeFormat;
		short_dates => ShortDates, ShortDate;
		long_dates => LongDates, LongDate;
		year_months => YearMonths, YearMonth;
	}

	stored_strings! {
		short_time_formats => ShortTimeFormats;
		day_names => DayNames;
		abbrev_day_names => AbbrevDayNames;
		shortest_day_names => ShortestDayNames;
		month_names => MonthNames;
		abbrev_month_names => AbbrevMonthNames;
		genitive_month_names => GenitiveMonthNames;
	}

	pub fn long_time_pattern(&self) -> String { self.time_formats().into_iter().next().unwrap_or_default() }

	pub fn short_date_pattern(&self) -> String { self.short_dates().into_iter().next().unwrap_or_default() }

	pub fn long_date_pattern(&self) -> String { self.long_dates().into_iter().next().unwrap_or_default() }

	/// Derived from the (possibly overridden) long time pattern.
	pub fn time_separator(&self) -> String {
		separator_between(&self.long_time_pattern(), TIME_LETTERS).unwrap_or_else(|| self.string(FieldId::TimeSeparator))
	}

	/// Derived from the (possibly overridden) short date pattern.
	pub fn date_separator(&self) -> String {
		separator_between(&self.short_date_pattern(), DATE_LETTERS).unwrap_or_else(|| self.string(FieldId::DateSeparator))
	}

	// Calendars

	/// Supported calendar ids, default first.
	pub fn optional_calendars(&self) -> Vec<u16> { self.words(FieldId::OptionalCalendars) }

	/// Default calendar. A live value must be one of the optional calendars.
	pub fn calendar_type(&self) -> u16 {
		let stored = self.word(FieldId::CalendarType);
		match self.live(LiveField::CalendarType).and_then(|v| v.trim().parse::<u16>().ok()) {
			Some(id) if self.optional_calendars().contains(&id) => id,
			_ => stored,
		}
	}

	pub fn native_calendar_name(&self, calendar: u16) -> String {
		self.strings(FieldId::NativeCalendarNames).into_iter().nth(calendar as usize).unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use culture_core::CultureConfig;

	use crate::provider::{StaticLocale, StaticLocaleProvider};
	use crate::service::CultureService;

	use super::*;

	fn service(provider: StaticLocaleProvider) -> CultureService {
		CultureService::new(CultureConfig::default(), Arc::new(provider)).unwrap()
	}

	fn customized_en_us() -> StaticLocaleProvider {
		StaticLocaleProvider::new()
			.with_locale(
				StaticLocale::new(Lcid::new(0x0409))
					.live(LiveField::DecimalSeparator, ",")
					.live(LiveField::Grouping, "3;2;0")
					.live(LiveField::CalendarType, "3")
					.live(LiveField::TimeFormat, "HH.mm.ss")
					.live(LiveField::Digits, "x"),
			)
			.with_user_default(Lcid::new(0x0409))
	}

	#[test]
	fn stored_values_without_override() {
		let s = service(customized_en_us());
		let r = s.get_culture("en-US", false).unwrap();
		assert!(!r.user_override_active());
		assert_eq!(r.decimal_separator(), ".");
		assert_eq!(r.grouping(), vec![3]);
		assert_eq!(r.time_separator(), ":");
		assert_eq!(r.two_letter_iso_region(), "US");
		assert_eq!(r.parent_id(), Lcid::new(0x0009));
		assert!(!r.is_neutral());
	}

	#[test]
	fn live_values_for_user_default() {
		let s = service(customized_en_us());
		let r = s.get_culture("en-US", true).unwrap();
		assert!(r.user_override_active());
		assert_eq!(r.decimal_separator(), ",");
		assert_eq!(r.grouping(), vec![3, 2]);
		assert_eq!(r.long_time_pattern(), "HH.mm.ss");
		assert_eq!(r.time_separator(), ".");
		// unparsable live value
		assert_eq!(r.digits(), 2);
		// Japanese calendar is not an en-US calendar
		assert_eq!(r.calendar_type(), 1);
		// not overridable
		assert_eq!(r.nan_symbol(), "NaN");
	}

	#[test]
	fn other_cultures_ignore_live_values() {
		let s = service(customized_en_us());
		let r = s.get_culture("en-GB", true).unwrap();
		assert!(!r.user_override_active());
		assert_eq!(r.decimal_separator(), ".");
	}

	#[test]
	fn calendar_override_validated_against_optional_calendars() {
		let p = StaticLocaleProvider::new()
			.with_locale(StaticLocale::new(Lcid::new(0x0411)).live(LiveField::CalendarType, "3"))
			.with_user_default(Lcid::new(0x0411));
		let s = service(p);
		let r = s.get_culture("ja-JP", true).unwrap();
		assert_eq!(r.optional_calendars(), vec![1, 3]);
		assert_eq!(r.calendar_type(), 3);
		assert_eq!(r.native_calendar_name(3), "和暦");
		assert_eq!(r.native_calendar_name(2), "");
		assert_eq!(r.native_calendar_name(40), "");
	}

	#[test]
	fn derived_separators() {
		let s = service(StaticLocaleProvider::new());
		let de = s.get_culture("de-DE", false).unwrap();
		assert_eq!(de.date_separator(), ".");
		assert_eq!(de.time_separator(), ":");
		let ja = s.get_culture("ja-JP", false).unwrap();
		assert_eq!(ja.date_separator(), "/");
	}
}
