#![forbid(unsafe_code)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn cli() -> Command {
	let mut cmd = Command::cargo_bin("culture-cli").unwrap();
	cmd.env_remove("CULTURE_BUILTIN_TABLE").env_remove("CULTURE_DATA_DIR").env_remove("RUST_LOG");
	cmd
}

#[test]
fn help_shows_cliname() -> Result<(), Box<dyn std::error::Error>> {
	cli().arg("--help").assert().success().stdout(predicate::str::contains("culture-cli"));
	Ok(())
}

#[test]
fn resolve_alternate_sort_by_name() -> Result<(), Box<dyn std::error::Error>> {
	cli()
		.args(["resolve", "--name", "de-DE_phoneb", "--json"])
		.assert()
		.success()
		.stdout(predicate::str::contains("\"id\": \"0x10407\""))
		.stdout(predicate::str::contains("\"name\": \"de-DE\""))
		.stdout(predicate::str::contains("\"strategy\": \"Builtin\""));
	Ok(())
}

#[test]
fn unknown_region_fails() -> Result<(), Box<dyn std::error::Error>> {
	cli().args(["region", "ZZ"]).assert().failure().stderr(predicate::str::contains("not supported"));
	Ok(())
}

#[test]
fn invalid_name_fails() -> Result<(), Box<dyn std::error::Error>> {
	cli().args(["resolve", "--name", "en\\US"]).assert().failure().stderr(predicate::str::contains("invalid"));
	Ok(())
}

#[test]
fn compile_then_resolve_custom_culture() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let input = dir.path().join("lab.toml");
	std::fs::write(
		&input,
		r#"
[[entries]]
fields = { language_id = 0x1000, name = "qps-Lab", decimal_separator = ";", region_name = "QL" }
"#,
	)?;
	let table = dir.path().join("qps-lab.nlp");
	cli().arg("compile").arg(&input).arg(&table).assert().success();

	cli().arg("dump").arg(&table).assert().success().stdout(predicate::str::contains("qps-Lab"));

	cli()
		.args(["resolve", "--name", "QPS-LAB", "--json", "--data-dir"])
		.arg(dir.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("\"provenance\": \"custom\""))
		.stdout(predicate::str::contains("\"decimal_separator\": \";\""));
	Ok(())
}

#[test]
fn list_includes_aliases() -> Result<(), Box<dyn std::error::Error>> {
	cli().arg("list").assert().success().stdout(predicate::str::contains("ja-JP_radstr"));
	Ok(())
}

#[test]
fn synthetic_culture_from_os_snapshot() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let snapshot = dir.path().join("os.json");
	std::fs::write(
		&snapshot,
		r#"{
  "user_default": 1153,
  "locales": [
    {
      "id": 1153,
      "name": "mi-NZ",
      "fields": {
        "english_language": "Maori",
        "english_country": "New Zealand",
        "iso639_language": "mi",
        "iso3166_country": "NZ",
        "decimal_separator": ".",
        "grouping": "3;0"
      }
    }
  ]
}"#,
	)?;
	cli()
		.args(["resolve", "--id", "0x0481", "--json", "--os-data"])
		.arg(&snapshot)
		.assert()
		.success()
		.stdout(predicate::str::contains("\"synthetic\": true"))
		.stdout(predicate::str::contains("Maori (New Zealand)"));
	Ok(())
}
