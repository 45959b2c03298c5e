//! The culture record schema.
//!
//! One declarative list defines the value type ([`CultureFields`]), the field
//! identifiers ([`FieldId`]), the header layout and both encoding passes. A
//! field added here is sized, filled and decoded in the same position
//! everywhere.

use culture_pool::{EncodeFields, FieldKind, FieldValue, HeaderLayout, HeaderView, Slot};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

macro_rules! field_type {
	(Word) => { u16 };
	(Str) => { String };
	(StrArray) => { Vec<String> };
	(WordArray) => { Vec<u16> };
}

macro_rules! field_value {
	(Word, $e:expr) => { FieldValue::Word(*$e) };
	(Str, $e:expr) => { FieldValue::Str($e) };
	(StrArray, $e:expr) => { FieldValue::StrArray($e) };
	(WordArray, $e:expr) => { FieldValue::WordArray($e) };
}

macro_rules! field_read {
	(Word, $view:expr, $slot:expr) => { $view.word($slot)? };
	(Str, $view:expr, $slot:expr) => { $view.string($slot)? };
	(StrArray, $view:expr, $slot:expr) => { $view.string_array($slot)? };
	(WordArray, $view:expr, $slot:expr) => { $view.word_array($slot)? };
}

macro_rules! culture_fields {
	($( $(#[$meta:meta])* $field:ident : $kind:ident => $variant:ident $tag:literal, )+) => {
		/// Every value stored for one culture, in header order.
		#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
		#[serde(default)]
		pub struct CultureFields {
			$( $(#[$meta])* pub $field: field_type!($kind), )+
		}

		/// Names one header field.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
		pub enum FieldId {
			$( $variant, )+
		}

		impl FieldId {
			/// All fields in header order.
			pub const ALL: &'static [FieldId] = &[ $( FieldId::$variant, )+ ];

			/// Classic locale-data tag of the field (`SNAME`, `IDIGITS`, ...).
			pub const fn tag(self) -> &'static str {
				match self { $( FieldId::$variant => $tag, )+ }
			}

			pub const fn kind(self) -> FieldKind {
				match self { $( FieldId::$variant => FieldKind::$kind, )+ }
			}
		}

		impl EncodeFields for CultureFields {
			fn for_each_field(
				&self,
				visit: &mut dyn FnMut(FieldValue<'_>) -> culture_pool::Result<()>,
			) -> culture_pool::Result<()> {
				$( visit(field_value!($kind, &self.$field))?; )+
				Ok(())
			}
		}

		impl CultureFields {
			/// Decode every field of one header.
			pub fn decode(view: &HeaderView<'_>) -> culture_pool::Result<Self> {
				Ok(Self { $( $field: field_read!($kind, view, FieldId::$variant.slot()), )+ })
			}
		}
	};
}

culture_fields! {
	/// Language id without sort component.
	language_id: Word => LanguageId "ILANGUAGE",
	parent_id: Word => ParentId "IPARENT",
	digits: Word => Digits "IDIGITS",
	negative_number: Word => NegativeNumber "INEGNUMBER",
	currency_digits: Word => CurrencyDigits "ICURRDIGITS",
	positive_currency: Word => PositiveCurrency "ICURRENCY",
	negative_currency: Word => NegativeCurrency "INEGCURR",
	positive_percent: Word => PositivePercent "IPOSITIVEPERCENT",
	negative_percent: Word => NegativePercent "INEGATIVEPERCENT",
	/// Default calendar id.
	calendar_type: Word => CalendarType "ICALENDARTYPE",
	first_day_of_week: Word => FirstDayOfWeek "IFIRSTDAYOFWEEK",
	first_week_of_year: Word => FirstWeekOfYear "IFIRSTWEEKOFYEAR",
	/// 0 = metric, 1 = US.
	measure: Word => Measure "IMEASURE",
	digit_substitution: Word => DigitSubstitution "IDIGITSUBSTITUTION",
	line_orientations: Word => LineOrientations "ILINEORIENTATIONS",
	geo_id: Word => GeoId "IGEOID",
	ansi_code_page: Word => AnsiCodePage "IDEFAULTANSICODEPAGE",
	oem_code_page: Word => OemCodePage "IDEFAULTOEMCODEPAGE",
	mac_code_page: Word => MacCodePage "IDEFAULTMACCODEPAGE",
	ebcdic_code_page: Word => EbcdicCodePage "IDEFAULTEBCDICCODEPAGE",
	input_language_handle: Word => InputLanguageHandle "IINPUTLANGUAGEHANDLE",
	flags: Word => Flags "IFLAGS",

	name: Str => Name "SNAME",
	parent_name: Str => ParentName "SPARENT",
	ietf_tag: Str => IetfTag "SIETFTAG",
	region_name: Str => RegionName "SREGIONNAME",
	iso639_language: Str => Iso639Language "SISO639LANGNAME",
	iso639_language3: Str => Iso639Language3 "SISO639LANGNAME2",
	iso3166_country: Str => Iso3166Country "SISO3166CTRYNAME",
	iso3166_country3: Str => Iso3166Country3 "SISO3166CTRYNAME2",
	abbrev_language: Str => AbbrevLanguage "SABBREVLANGNAME",
	abbrev_country: Str => AbbrevCountry "SABBREVCTRYNAME",
	english_display_name: Str => EnglishDisplayName "SENGDISPLAYNAME",
	native_display_name: Str => NativeDisplayName "SNATIVEDISPLAYNAME",
	english_language: Str => EnglishLanguage "SENGLANGUAGE",
	native_language: Str => NativeLanguage "SNATIVELANGUAGE",
	english_country: Str => EnglishCountry "SENGCOUNTRY",
	native_country: Str => NativeCountry "SNATIVECOUNTRY",
	console_fallback_name: Str => ConsoleFallbackName "SCONSOLEFALLBACKNAME",
	scripts: Str => Scripts "SSCRIPTS",
	list_separator: Str => ListSeparator "SLIST",
	decimal_separator: Str => DecimalSeparator "SDECIMAL",
	group_separator: Str => GroupSeparator "STHOUSAND",
	currency_symbol: Str => CurrencySymbol "SCURRENCY",
	intl_currency_symbol: Str => IntlCurrencySymbol "SINTLSYMBOL",
	english_currency: Str => EnglishCurrency "SENGLISHCURRENCY",
	native_currency: Str => NativeCurrency "SNATIVECURRENCY",
	currency_decimal_separator: Str => CurrencyDecimalSeparator "SMONDECIMALSEP",
	currency_group_separator: Str => CurrencyGroupSeparator "SMONTHOUSANDSEP",
	positive_sign: Str => PositiveSign "SPOSITIVESIGN",
	negative_sign: Str => NegativeSign "SNEGATIVESIGN",
	nan_symbol: Str => NanSymbol "SNAN",
	positive_infinity: Str => PositiveInfinity "SPOSINFINITY",
	negative_infinity: Str => NegativeInfinity "SNEGINFINITY",
	percent_symbol: Str => PercentSymbol "SPERCENT",
	permille_symbol: Str => PermilleSymbol "SPERMILLE",
	am_designator: Str => AmDesignator "SAM1159",
	pm_designator: Str => PmDesignator "SPM2359",
	time_separator: Str => TimeSeparator "STIME",
	date_separator: Str => DateSeparator "SDATE",
	month_day: Str => MonthDay "SMONTHDAY",

	/// Group sizes; a trailing 0 means the last group does not repeat.
	grouping: WordArray => Grouping "SGROUPING",
	currency_grouping: WordArray => CurrencyGrouping "SMONGROUPING",
	/// Supported calendar ids, default first.
	optional_calendars: WordArray => OptionalCalendars "IOPTIONALCALENDARS",

	time_formats: StrArray => TimeFormats "STIMEFORMAT",
	short_time_formats: StrArray => ShortTimeFormats "SSHORTTIME",
	short_dates: StrArray => ShortDates "SSHORTDATE",
	long_dates: StrArray => LongDates "SLONGDATE",
	year_months: StrArray => YearMonths "SYEARMONTH",
	day_names: StrArray => DayNames "SDAYNAME",
	abbrev_day_names: StrArray => AbbrevDayNames "SABBREVDAYNAME",
	shortest_day_names: StrArray => ShortestDayNames "SSUPERSHORTDAYNAME",
	month_names: StrArray => MonthNames "SMONTHNAME",
	abbrev_month_names: StrArray => AbbrevMonthNames "SABBREVMONTHNAME",
	genitive_month_names: StrArray => GenitiveMonthNames "SMONTHGENITIVENAME",
	native_digits: StrArray => NativeDigits "SNATIVEDIGITS",
	/// Native calendar names indexed by calendar id; gaps are empty.
	native_calendar_names: StrArray => NativeCalendarNames "SNATIVECALNAMES",
}

/// Header slot positions for [`CultureFields`].
pub static HEADER_LAYOUT: Lazy<HeaderLayout> = Lazy::new(|| HeaderLayout::new(FieldId::ALL.iter().map(|f| f.kind())));

impl FieldId {
	pub fn slot(self) -> Slot { HEADER_LAYOUT.slots()[self as usize] }
}

/// `IFLAGS` bits.
pub mod flags {
	/// The culture names a region (a "specific" culture).
	pub const SPECIFIC: u16 = 0x0001;
	/// Record produced from host OS data rather than shipped tables.
	pub const SYNTHETIC: u16 = 0x0002;
	/// The culture uses right-to-left reading order.
	pub const RIGHT_TO_LEFT: u16 = 0x0004;
}
