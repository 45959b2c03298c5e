// Test harness for culture integration tests.
//
// Provides:
// - A temporary data directory for custom culture files
// - An in-memory OS locale snapshot that can also be written to disk
// - Services built either directly or through configuration files

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use culture_core::{CultureConfig, Lcid};
use culture_data::{CultureService, StaticLocale, StaticLocaleProvider, TableBuilder, TableEntry};
use tempfile::TempDir;

/// Test result type alias
pub type TestResult<T> = Result<T>;

/// Route tracing output through the test writer. Safe to call repeatedly.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_env_filter(tracing_subscriber::EnvFilter::new("culture_data=debug"))
		.try_init();
}

/// A data directory plus the OS locales a service built from it sees.
pub struct CultureHarness {
	dir: TempDir,
	config: CultureConfig,
	provider: StaticLocaleProvider,
}

impl CultureHarness {
	pub fn new() -> Result<Self> {
		let dir = tempfile::tempdir().context("creating data directory")?;
		let config = CultureConfig { locale_data_dir: dir.path().join("globalization"), ..Default::default() };
		std::fs::create_dir_all(&config.locale_data_dir)?;
		Ok(Self { dir, config, provider: StaticLocaleProvider::new() })
	}

	pub fn data_dir(&self) -> &Path { &self.config.locale_data_dir }

	pub fn config_mut(&mut self) -> &mut CultureConfig { &mut self.config }

	pub fn with_os_locale(mut self, locale: StaticLocale) -> Self {
		self.provider = self.provider.with_locale(locale);
		self
	}

	pub fn with_user_default(mut self, id: Lcid) -> Self {
		self.provider = self.provider.with_user_default(id);
		self
	}

	/// Compile `entries` into `<data dir>/<canonical>.nlp`.
	pub fn install_custom(&self, canonical: &str, entries: Vec<TableEntry>) -> Result<PathBuf> {
		let path = self.custom_path(canonical);
		TableBuilder::from_entries(entries).write_to(&path).with_context(|| format!("writing {}", path.display()))?;
		tracing::debug!(path = %path.display(), "custom culture installed");
		Ok(path)
	}

	/// Write arbitrary bytes where a custom culture file would live.
	pub fn install_raw(&self, canonical: &str, bytes: &[u8]) -> Result<PathBuf> {
		let path = self.custom_path(canonical);
		std::fs::write(&path, bytes)?;
		Ok(path)
	}

	fn custom_path(&self, canonical: &str) -> PathBuf {
		self.data_dir().join(format!("{canonical}.{}", self.config.custom_extension))
	}

	/// Service over the in-memory snapshot.
	pub fn service(&self) -> Result<CultureService> {
		Ok(CultureService::new(self.config.clone(), Arc::new(self.provider.clone()))?)
	}

	/// Write the OS snapshot and a configuration file pointing at it; returns
	/// the configuration path.
	pub fn write_files(&self) -> Result<PathBuf> {
		let snapshot = self.dir.path().join("os-locales.json");
		std::fs::write(&snapshot, serde_json::to_vec_pretty(&self.provider)?)?;
		let mut text = format!(
			"log_level = {}\nlocale_data_dir = {}\nos_locale_data = {}\ndisable_custom_cultures = {}\n",
			quoted(&self.config.log_level),
			quoted(&self.config.locale_data_dir.display().to_string()),
			quoted(&snapshot.display().to_string()),
			self.config.disable_custom_cultures,
		);
		if let Some(table) = &self.config.builtin_table {
			text.push_str(&format!("builtin_table = {}\n", quoted(&table.display().to_string())));
		}
		let path = self.dir.path().join("culture.toml");
		std::fs::write(&path, text)?;
		Ok(path)
	}

	/// Service built the way the command line tool builds one: configuration
	/// file first, then the OS snapshot it names.
	pub fn service_from_files(&self) -> Result<CultureService> {
		let config = CultureConfig::load_from_file(self.write_files()?)?;
		let snapshot = config.os_locale_data.clone().context("configuration names no OS snapshot")?;
		let provider = StaticLocaleProvider::load(snapshot)?;
		Ok(CultureService::new(config, Arc::new(provider))?)
	}

	/// Scratch path inside the harness directory.
	pub fn scratch(&self, name: &str) -> PathBuf { self.dir.path().join(name) }
}

fn quoted(s: &str) -> String { toml::Value::String(s.to_string()).to_string() }
