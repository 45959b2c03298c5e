use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest accepted culture name: language (8) + region (8) + script and
/// variant tags (64) + sort suffix (4).
pub const MAX_CULTURE_NAME_LEN: usize = 8 + 8 + 64 + 4;

/// Legacy numeric locale identifier.
///
/// Layout (least significant bit first):
/// - bits 0..10: primary language
/// - bits 10..16: sub-language
/// - bits 16..20: sort id (alternate collation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Lcid(u32);

impl Lcid {
	/// The invariant culture.
	pub const INVARIANT: Lcid = Lcid(0x007F);
	/// Reported by custom cultures that replace the user default locale.
	pub const CUSTOM_DEFAULT: Lcid = Lcid(0x0C00);
	/// Reported by supplemental custom cultures without an id of their own.
	pub const CUSTOM_UNSPECIFIED: Lcid = Lcid(0x1000);
	/// `es-ES_tradnl`: traditional sort Spanish, historically its own language id.
	pub const SPANISH_TRADITIONAL_SORT: Lcid = Lcid(0x040A);
	/// `es-ES`: international sort Spanish, the base of the traditional sort.
	pub const SPANISH_INTERNATIONAL_SORT: Lcid = Lcid(0x0C0A);

	pub const fn new(raw: u32) -> Self { Self(raw) }

	pub const fn get(self) -> u32 { self.0 }

	/// Language id without the sort component.
	pub const fn lang_id(self) -> u16 { (self.0 & 0xFFFF) as u16 }

	pub const fn primary_language(self) -> u16 { (self.0 & 0x03FF) as u16 }

	pub const fn sort_id(self) -> u8 { ((self.0 >> 16) & 0xF) as u8 }

	/// Same locale with the default sort order.
	pub const fn without_sort(self) -> Self { Self(self.0 & 0xFFFF) }

	/// True when this id names an alternate collation of some base locale,
	/// including the legacy traditional-sort Spanish id.
	pub const fn is_alternate_sort(self) -> bool {
		self.sort_id() != 0 || self.0 == Self::SPANISH_TRADITIONAL_SORT.0
	}

	/// The locale whose data an alternate sort shares.
	pub const fn sort_base(self) -> Self {
		if self.0 == Self::SPANISH_TRADITIONAL_SORT.0 {
			Self::SPANISH_INTERNATIONAL_SORT
		} else {
			self.without_sort()
		}
	}

	/// One of the two generic ids custom cultures report.
	pub const fn is_custom_sentinel(self) -> bool {
		self.0 == Self::CUSTOM_DEFAULT.0 || self.0 == Self::CUSTOM_UNSPECIFIED.0
	}

	pub const fn is_invariant(self) -> bool { self.0 == Self::INVARIANT.0 }
}

impl From<u32> for Lcid {
	fn from(v: u32) -> Self { Self(v) }
}

impl From<Lcid> for u32 {
	fn from(v: Lcid) -> Self { v.0 }
}

impl fmt::Display for Lcid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "0x{:04X}", self.0) }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid locale id: {0}")]
pub struct ParseLcidError(String);

/// Accepts `0x0407`, `0X407` or plain decimal.
impl FromStr for Lcid {
	type Err = ParseLcidError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let t = s.trim();
		let parsed = match t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
			Some(hex) => u32::from_str_radix(hex, 16),
			None => t.parse::<u32>(),
		};
		parsed.map(Lcid).map_err(|_| ParseLcidError(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sort_components() {
		let phonebook = Lcid::new(0x10407);
		assert_eq!(phonebook.sort_id(), 1);
		assert_eq!(phonebook.lang_id(), 0x0407);
		assert_eq!(phonebook.sort_base(), Lcid::new(0x0407));
		assert!(phonebook.is_alternate_sort());
		assert!(!Lcid::new(0x0407).is_alternate_sort());
	}

	#[test]
	fn spanish_traditional_is_alternate_sort() {
		let tradnl = Lcid::SPANISH_TRADITIONAL_SORT;
		assert_eq!(tradnl.sort_id(), 0);
		assert!(tradnl.is_alternate_sort());
		assert_eq!(tradnl.sort_base(), Lcid::SPANISH_INTERNATIONAL_SORT);
	}

	#[test]
	fn custom_sentinels() {
		assert!(Lcid::CUSTOM_DEFAULT.is_custom_sentinel());
		assert!(Lcid::CUSTOM_UNSPECIFIED.is_custom_sentinel());
		assert!(!Lcid::INVARIANT.is_custom_sentinel());
	}

	#[test]
	fn parse_hex_and_decimal() {
		assert_eq!("0x10407".parse::<Lcid>().unwrap(), Lcid::new(0x10407));
		assert_eq!("1033".parse::<Lcid>().unwrap(), Lcid::new(0x0409));
		assert!("0xZZ".parse::<Lcid>().is_err());
		assert_eq!(Lcid::new(0x407).to_string(), "0x0407");
	}
}
