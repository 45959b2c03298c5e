//! Culture name validation. Runs before any cache or file system access,
//! because every cache is keyed on the canonical form.

use crate::errors::{Error, InvalidNameReason, Result};
use culture_core::MAX_CULTURE_NAME_LEN;

/// Fold ASCII uppercase to lowercase and reject anything outside `[a-z0-9_-]`.
///
/// ```
/// assert_eq!(culture_data::name::canonicalize("de-DE_phoneb").unwrap(), "de-de_phoneb");
/// assert!(culture_data::name::canonicalize("en\\US").is_err());
/// ```
pub fn canonicalize(name: &str) -> Result<String> {
	let len = name.chars().count();
	if len > MAX_CULTURE_NAME_LEN {
		return Err(Error::InvalidName {
			name: name.to_string(),
			reason: InvalidNameReason::TooLong { len, max: MAX_CULTURE_NAME_LEN },
		});
	}
	name.chars()
		.map(|c| {
			let folded = c.to_ascii_lowercase();
			match folded {
				'a'..='z' | '0'..='9' | '_' | '-' => Ok(folded),
				_ => Err(Error::InvalidName { name: name.to_string(), reason: InvalidNameReason::InvalidCharacter(c) }),
			}
		})
		.collect()
}

/// Name without an alternate-sort suffix (`de-DE_phoneb` → `de-DE`).
pub fn strip_sort_suffix(name: &str) -> &str {
	name.split_once('_').map_or(name, |(base, _)| base)
}
