#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{ArgGroup, Parser, Subcommand};
use culture_core::{CultureConfig, Lcid};
use culture_data::{
	CultureQuery, CultureRecord, CultureService, CultureTable, LocaleProvider, NullLocaleProvider, StaticLocaleProvider,
	TableBuilder, TableEntry, TableOrigin,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "culture-cli", version, about = "Resolve cultures and inspect culture tables")]
struct Cli {
	/// TOML configuration file (default: CULTURE_* environment variables)
	#[arg(long, global = true)]
	config: Option<PathBuf>,
	/// Directory holding custom culture files
	#[arg(long, global = true)]
	data_dir: Option<PathBuf>,
	/// JSON snapshot of host locale data for synthetic cultures
	#[arg(long, global = true)]
	os_data: Option<PathBuf>,
	/// Print JSON instead of text
	#[arg(long, global = true)]
	json: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Resolve a culture by name or locale id
	#[command(group(ArgGroup::new("query").required(true).args(["name", "id"])))]
	Resolve {
		#[arg(long)]
		name: Option<String>,
		/// Locale id, hex (0x0407) or decimal
		#[arg(long)]
		id: Option<Lcid>,
		/// Apply the user's OS customizations
		#[arg(long)]
		user_override: bool,
	},
	/// Resolve a region name (US, de-DE, ...)
	Region {
		name: String,
		#[arg(long)]
		user_override: bool,
	},
	/// Compile a TOML or JSON culture description into a table file
	Compile { input: PathBuf, output: PathBuf },
	/// Print the records of a table file
	Dump { file: PathBuf },
	/// List builtin and synthetic culture names
	List,
}

/// Input document of `compile`.
#[derive(Debug, Deserialize)]
struct TableDoc {
	#[serde(default)]
	entries: Vec<TableEntry>,
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	let config = load_config(&cli)?;
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
		.with_writer(std::io::stderr)
		.init();

	match &cli.command {
		Command::Resolve { name, id, user_override } => {
			let query = match (name, id) {
				(Some(name), _) => CultureQuery::Name(name.clone()),
				(None, Some(id)) => CultureQuery::Id(*id),
				(None, None) => anyhow::bail!("either --name or --id is required"),
			};
			let service = service(config)?;
			let strategy = service.resolution_strategy(&query)?;
			let record = service.resolve(&query, *user_override)?;
			let mut out = summary(&record);
			out["strategy"] = json!(strategy.map(|s| format!("{s:?}")));
			print(&out, cli.json)
		}
		Command::Region { name, user_override } => {
			let record = service(config)?.get_region(name, *user_override)?;
			print(&summary(&record), cli.json)
		}
		Command::Compile { input, output } => {
			let doc = read_doc(input)?;
			let count = doc.entries.len();
			TableBuilder::from_entries(doc.entries)
				.write_to(output)
				.with_context(|| format!("compiling {}", input.display()))?;
			tracing::info!(records = count, output = %output.display(), "table written");
			print(&json!({ "records": count, "output": output.display().to_string() }), cli.json)
		}
		Command::Dump { file } => {
			let bytes = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
			let table = CultureTable::from_bytes(&bytes, TableOrigin::Custom { path: file.clone() })?;
			dump(&table, cli.json)
		}
		Command::List => {
			let service = service(config)?;
			let mut names: Vec<(String, Lcid, &str)> =
				service.builtin().entries().map(|(name, id)| (name.to_string(), id, "builtin")).collect();
			names.extend(service.synthetic_names().iter().map(|(id, name)| (name.to_string(), id, "synthetic")));
			names.sort_by(|a, b| a.0.to_ascii_lowercase().cmp(&b.0.to_ascii_lowercase()));
			if cli.json {
				let list: Vec<Value> =
					names.iter().map(|(n, id, kind)| json!({ "name": n, "id": id.to_string(), "kind": kind })).collect();
				println!("{}", serde_json::to_string_pretty(&list)?);
			} else {
				for (name, id, kind) in &names {
					println!("{id:>9}  {name:<16} {kind}");
				}
			}
			Ok(())
		}
	}
}

fn load_config(cli: &Cli) -> anyhow::Result<CultureConfig> {
	let mut config = match &cli.config {
		Some(path) => {
			let mut config = CultureConfig::load_from_file(path).with_context(|| format!("loading {}", path.display()))?;
			config.apply_env();
			config
		}
		None => CultureConfig::from_env()?,
	};
	if let Some(dir) = &cli.data_dir {
		config.locale_data_dir = dir.clone();
	}
	if let Some(path) = &cli.os_data {
		config.os_locale_data = Some(path.clone());
	}
	config.validate()?;
	Ok(config)
}

fn service(config: CultureConfig) -> anyhow::Result<CultureService> {
	let provider: Arc<dyn LocaleProvider> = match &config.os_locale_data {
		Some(path) => Arc::new(
			StaticLocaleProvider::load(path).with_context(|| format!("loading OS locale data {}", path.display()))?,
		),
		None => Arc::new(NullLocaleProvider),
	};
	Ok(CultureService::new(config, provider)?)
}

fn read_doc(path: &Path) -> anyhow::Result<TableDoc> {
	let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
	let doc = match path.extension().and_then(|e| e.to_str()) {
		Some("json") => serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?,
		_ => toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?,
	};
	Ok(doc)
}

fn summary(r: &CultureRecord) -> Value {
	json!({
		"name": r.culture_name(),
		"id": r.culture_id().to_string(),
		"actual_name": r.actual_name(),
		"actual_id": r.actual_culture_id().to_string(),
		"provenance": r.provenance(),
		"synthetic": r.is_synthetic(),
		"user_override": r.user_override_active(),
		"parent": r.parent_name(),
		"region": r.region_name(),
		"english_display_name": r.english_display_name(),
		"native_display_name": r.native_display_name(),
		"decimal_separator": r.decimal_separator(),
		"group_separator": r.group_separator(),
		"grouping": r.grouping(),
		"currency_symbol": r.currency_symbol(),
		"short_date_pattern": r.short_date_pattern(),
		"long_time_pattern": r.long_time_pattern(),
		"date_separator": r.date_separator(),
		"time_separator": r.time_separator(),
		"calendar": r.calendar_type(),
	})
}

fn print(value: &Value, as_json: bool) -> anyhow::Result<()> {
	if as_json {
		println!("{}", serde_json::to_string_pretty(value)?);
		return Ok(());
	}
	if let Value::Object(map) = value {
		for (key, v) in map {
			match v {
				Value::String(s) => println!("{key:>22}: {s}"),
				other => println!("{key:>22}: {other}"),
			}
		}
	}
	Ok(())
}

fn dump(table: &CultureTable, as_json: bool) -> anyhow::Result<()> {
	let records = (0..table.item_count()).map(|i| table.decode(i)).collect::<Result<Vec<_>, _>>()?;
	if as_json {
		let names: Vec<Value> = table.entries().map(|(name, id)| json!({ "name": name, "id": id.to_string() })).collect();
		println!("{}", serde_json::to_string_pretty(&json!({ "records": records, "names": names }))?);
		return Ok(());
	}
	println!("{} records, {} words per header", table.item_count(), table.record_size());
	for (index, fields) in records.iter().enumerate() {
		println!("{index:>4}  {:<16} {}", fields.name, Lcid::new(u32::from(fields.language_id)));
	}
	for (name, id) in table.entries() {
		println!("name  {name:<16} {id}");
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resolve_requires_a_query() {
		assert!(Cli::try_parse_from(["culture-cli", "resolve"]).is_err());
		let cli = Cli::try_parse_from(["culture-cli", "resolve", "--id", "0x10407", "--json"]).unwrap();
		match cli.command {
			Command::Resolve { id, name, user_override } => {
				assert_eq!(id, Some(Lcid::new(0x10407)));
				assert!(name.is_none() && !user_override);
			}
			other => panic!("unexpected command {other:?}"),
		}
		assert!(cli.json);
	}

	#[test]
	fn rejects_bad_id() {
		assert!(Cli::try_parse_from(["culture-cli", "resolve", "--id", "0xZZ"]).is_err());
	}

	#[test]
	fn compile_doc_in_toml() {
		let doc: TableDoc = toml::from_str(
			r#"
[[entries]]
fields = { language_id = 0x1000, name = "qps-Lab", decimal_separator = "," }
aliases = [{ name = "qps-Lab_alt", id = 0x11000 }]
"#,
		)
		.unwrap();
		assert_eq!(doc.entries.len(), 1);
		assert_eq!(doc.entries[0].fields.name, "qps-Lab");
		assert_eq!(doc.entries[0].aliases[0].id, Lcid::new(0x11000));
	}
}
