//! On-disk custom and replacement culture files.
//!
//! A file lives at `<dir>/<canonical name>.<extension>` and holds a table
//! image in the same format as the builtin table.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use culture_core::CultureConfig;

use crate::errors::{Error, Result};
use crate::table::{CultureTable, TableOrigin};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomCultureStore {
	dir: PathBuf,
	extension: String,
}

impl CustomCultureStore {
	pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
		Self { dir: dir.into(), extension: extension.into() }
	}

	pub fn from_config(config: &CultureConfig) -> Self {
		Self::new(config.locale_data_dir.clone(), config.custom_extension.clone())
	}

	pub fn dir(&self) -> &Path { &self.dir }

	/// `canonical` must already be validated; it is used verbatim as a file stem.
	pub fn path_for(&self, canonical: &str) -> PathBuf { self.dir.join(format!("{canonical}.{}", self.extension)) }

	pub fn exists(&self, canonical: &str) -> bool { self.path_for(canonical).is_file() }

	/// Load the custom table for `canonical`.
	///
	/// Returns `None` when there is no file, including when it disappears
	/// between the existence check and the read. A corrupt file is an error
	/// unless `known_fallback` says another tier can serve the name.
	pub fn load(&self, canonical: &str, known_fallback: bool) -> Result<Option<CultureTable>> {
		if !self.exists(canonical) {
			return Ok(None);
		}
		let path = self.path_for(canonical);
		let bytes = match std::fs::read(&path) {
			Ok(bytes) => bytes,
			Err(e) if e.kind() == ErrorKind::NotFound => {
				tracing::debug!(path = %path.display(), "custom culture file vanished before open");
				return Ok(None);
			}
			Err(e) => return Err(e.into()),
		};
		match CultureTable::from_bytes(&bytes, TableOrigin::Custom { path: path.clone() }) {
			Ok(table) => {
				tracing::debug!(path = %path.display(), records = table.item_count(), "custom culture file loaded");
				Ok(Some(table))
			}
			Err(e) if known_fallback => {
				tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt custom culture file");
				Ok(None)
			}
			Err(e) => Err(Error::CorruptedCustomCultureFile {
				name: canonical.to_string(),
				path,
				reason: e.to_string(),
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fields::CultureFields;
	use crate::table::TableBuilder;

	fn store(dir: &Path) -> CustomCultureStore { CustomCultureStore::new(dir, "nlp") }

	#[test]
	fn missing_file_is_none() {
		let dir = tempfile::tempdir().unwrap();
		let s = store(dir.path());
		assert!(!s.exists("x-none"));
		assert!(s.load("x-none", false).unwrap().is_none());
		assert_eq!(s.path_for("x-none"), dir.path().join("x-none.nlp"));
	}

	#[test]
	fn valid_file_loads() {
		let dir = tempfile::tempdir().unwrap();
		let s = store(dir.path());
		let mut b = TableBuilder::new();
		b.add(CultureFields { language_id: 0x1000, name: "x-test".into(), ..Default::default() });
		b.write_to(s.path_for("x-test")).unwrap();
		let t = s.load("x-test", false).unwrap().unwrap();
		assert!(matches!(t.origin(), TableOrigin::Custom { .. }));
		assert!(t.lookup_by_name("x-test").is_some());
	}

	#[test]
	fn corrupt_file_surfaces_unless_fallback_known() {
		let dir = tempfile::tempdir().unwrap();
		let s = store(dir.path());
		std::fs::write(s.path_for("en-us"), b"garbage!").unwrap();
		let err = s.load("en-us", false).unwrap_err();
		assert!(matches!(err, Error::CorruptedCustomCultureFile { ref name, .. } if name == "en-us"));
		assert!(s.load("en-us", true).unwrap().is_none());
	}
}
