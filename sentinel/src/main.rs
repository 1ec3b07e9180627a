// sentinel/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Setup Logging (Tracing)
    // RUST_LOG=debug sentinel audit ... for details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: AUDIT AN APP DEFINITION ---
        Commands::Audit {
            app_name,
            file,
            request,
            rules,
            format,
            check,
        } => commands::audit::execute(commands::audit::AuditArgs {
            app_name,
            file,
            request,
            rules,
            format,
            check,
        }),

        // --- USE CASE: LIST THE RULE LIBRARY ---
        Commands::Rules { rules, format } => commands::rules::execute(rules, format),
    }
}
