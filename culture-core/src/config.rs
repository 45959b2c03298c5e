use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// Runtime settings for culture resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CultureConfig {
	pub log_level: String,
	/// Directory holding custom and replacement culture files.
	pub locale_data_dir: PathBuf,
	/// File extension of custom culture files, without the dot.
	pub custom_extension: String,
	/// Compatibility switch: ignore custom and replacement culture files.
	pub disable_custom_cultures: bool,
	/// Prebuilt table image to use instead of the compiled-in builtin table.
	pub builtin_table: Option<PathBuf>,
	/// JSON snapshot backing the static OS locale provider.
	pub os_locale_data: Option<PathBuf>,
}

impl Default for CultureConfig {
	fn default() -> Self {
		Self {
			log_level: "info".into(),
			locale_data_dir: PathBuf::from("globalization"),
			custom_extension: "nlp".into(),
			disable_custom_cultures: false,
			builtin_table: None,
			os_locale_data: None,
		}
	}
}

impl CultureConfig {
	pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let data = fs::read_to_string(path)?;
		let cfg: Self = toml::from_str(&data).map_err(|e| Error::config(format!("toml parse error: {e}")))?;
		cfg.validate()?;
		tracing::debug!(path = %path.display(), "loaded culture config");
		Ok(cfg)
	}

	pub fn from_env() -> Result<Self> {
		let mut cfg = Self::default();
		cfg.apply_env();
		cfg.validate()?;
		Ok(cfg)
	}

	/// Overlay `CULTURE_*` environment variables onto this configuration.
	pub fn apply_env(&mut self) {
		if let Ok(v) = std::env::var("CULTURE_LOG_LEVEL") { self.log_level = v; }
		if let Ok(v) = std::env::var("CULTURE_DATA_DIR") { self.locale_data_dir = PathBuf::from(v); }
		if let Ok(v) = std::env::var("CULTURE_CUSTOM_EXTENSION") { self.custom_extension = v; }
		if let Ok(v) = std::env::var("CULTURE_DISABLE_CUSTOM") {
			self.disable_custom_cultures = v == "1" || v.eq_ignore_ascii_case("true");
		}
		if let Ok(v) = std::env::var("CULTURE_BUILTIN_TABLE") { self.builtin_table = Some(PathBuf::from(v)); }
	}

	pub fn validate(&self) -> Result<()> {
		let allowed = ["trace", "debug", "info", "warn", "error"];
		if !allowed.contains(&self.log_level.as_str()) {
			return Err(Error::config(format!("invalid log_level: {}", self.log_level)));
		}
		let ext = self.custom_extension.as_str();
		if ext.is_empty() || ext.contains(['.', '/', '\\']) {
			return Err(Error::config(format!("invalid custom_extension: {ext:?}")));
		}
		Ok(())
	}
}
