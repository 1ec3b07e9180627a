// sentinel/src/commands/rules.rs
//
// USE CASE: list the active governance rule library.

use std::path::PathBuf;

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use sentinel_core::application::build_library;

use crate::cli::OutputFormat;

pub fn execute(rules: Option<PathBuf>, format: OutputFormat) -> anyhow::Result<()> {
    let library = build_library(rules.as_deref())?;

    match format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = library
                .rules()
                .iter()
                .map(|rule| {
                    serde_json::json!({
                        "id": rule.id,
                        "severity": rule.severity,
                        "description": rule.description,
                    })
                })
                .collect();
            println!("{}", serde_json::Value::Array(entries));
        }
        OutputFormat::Table => {
            println!("\n📚 Governance rule library ({} rules)", library.len());
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_header(vec!["Id", "Severity", "Description"]);
            for rule in library.rules() {
                table.add_row(vec![
                    rule.id.as_str(),
                    rule.severity.as_str(),
                    rule.description.as_str(),
                ]);
            }
            println!("{table}");
        }
    }

    Ok(())
}
