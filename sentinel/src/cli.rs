// sentinel/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sentinel")]
#[command(about = "SentinelFlow: pattern-based governance audits for low-code apps", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Machine-readable JSON (the service wire format)
    Json,
    /// Human-readable table
    Table,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🔎 Audits an app definition against the governance rule library
    Audit {
        /// Name of the app being scanned (required unless --request is used)
        #[arg(long)]
        app_name: Option<String>,

        /// File containing the app definition text (stdin when omitted)
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Full AuditRequest JSON document (app_name + app_definition_json)
        #[arg(long, conflicts_with_all = ["app_name", "file"])]
        request: Option<PathBuf>,

        /// External YAML rule library (defaults to the shipped rules)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Exit with an error code if the app is non-compliant (CI usage)
        #[arg(long)]
        check: bool,
    },

    /// 📚 Lists the active governance rule library
    Rules {
        /// External YAML rule library (defaults to the shipped rules)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}
