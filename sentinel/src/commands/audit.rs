// sentinel/src/commands/audit.rs
//
// USE CASE: audit one app definition and report the governance verdict.
// This is the boundary adapter: it parses and validates input, delegates to
// the core engine, and maps every failure class to the service error
// wordings ("Invalid JSON format", "Schema Validation Failed", "Internal
// Server Error").

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use sentinel_core::SentinelError;
use sentinel_core::application::{build_library, parse_request, run_audit};
use sentinel_core::domain::audit::{AuditRequest, AuditResponse, Auditor};
use sentinel_core::infrastructure::error::InfrastructureError;

use crate::cli::OutputFormat;

/// Size guard at the boundary: matcher execution is the only potentially
/// expensive step, so pathological inputs are rejected before scanning.
pub const MAX_DEFINITION_BYTES: usize = 1024 * 1024;

pub struct AuditArgs {
    pub app_name: Option<String>,
    pub file: Option<PathBuf>,
    pub request: Option<PathBuf>,
    pub rules: Option<PathBuf>,
    pub format: OutputFormat,
    pub check: bool,
}

pub fn execute(args: AuditArgs) -> anyhow::Result<()> {
    match audit(&args) {
        Ok(response) => {
            render_response(&response, args.format)?;
            if args.check && !response.is_compliant {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(error) => {
            render_error(&error, args.format);
            std::process::exit(1);
        }
    }
}

fn audit(args: &AuditArgs) -> Result<AuditResponse, SentinelError> {
    let library = build_library(args.rules.as_deref())?;
    let auditor = Auditor::new(library);
    let request = load_request(args)?;
    tracing::info!(app = %request.app_name, "received audit request");
    run_audit(&auditor, &request)
}

fn load_request(args: &AuditArgs) -> Result<AuditRequest, SentinelError> {
    if let Some(path) = &args.request {
        let raw = fs::read_to_string(path)?;
        guard_size(raw.len())?;
        return parse_request(&raw);
    }

    let app_name = args.app_name.clone().ok_or_else(|| SentinelError::Validation {
        details: vec!["app_name: required unless --request is used".to_string()],
    })?;

    let app_definition_json = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    guard_size(app_definition_json.len())?;

    Ok(AuditRequest {
        app_name,
        app_definition_json,
    })
}

fn guard_size(bytes: usize) -> Result<(), SentinelError> {
    if bytes > MAX_DEFINITION_BYTES {
        return Err(SentinelError::Validation {
            details: vec![format!(
                "app_definition_json: exceeds the {MAX_DEFINITION_BYTES} byte limit"
            )],
        });
    }
    Ok(())
}

fn render_response(response: &AuditResponse, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(response)?);
        }
        OutputFormat::Table => {
            println!("\n📋 Audit report for '{}'", response.app_name);
            println!("   Date:  {}", response.audit_date.to_rfc3339());
            println!("   Score: {}/100", response.governance_score);
            if response.is_compliant {
                println!("   ✅ COMPLIANT");
            } else {
                println!("   ❌ NON-COMPLIANT");
            }

            if !response.findings.is_empty() {
                let mut table = Table::new();
                table
                    .load_preset(UTF8_FULL)
                    .set_header(vec!["Rule", "Severity", "Location", "Message"]);
                for finding in &response.findings {
                    table.add_row(vec![
                        finding.rule_id.as_str(),
                        finding.severity.as_str(),
                        finding.location.as_str(),
                        finding.message.as_str(),
                    ]);
                }
                println!("{table}");
            }
        }
    }
    Ok(())
}

/// Boundary error mapping. Wordings are part of the service contract
/// consumed by low-code connectors, so they stay stable.
fn render_error(error: &SentinelError, format: OutputFormat) {
    let (label, details): (String, Vec<String>) = match error {
        SentinelError::Infrastructure(InfrastructureError::Json(_)) => {
            ("Invalid JSON format".to_string(), vec![])
        }
        SentinelError::Validation { details } => {
            ("Schema Validation Failed".to_string(), details.clone())
        }
        // CLI-local faults (missing files, bad rule libraries) keep their
        // own message instead of hiding behind the generic wording
        SentinelError::Domain(e) => (e.to_string(), vec![]),
        SentinelError::Infrastructure(e) => (e.to_string(), vec![]),
        SentinelError::InternalError(_) => ("Internal Server Error".to_string(), vec![]),
    };

    match format {
        OutputFormat::Json => {
            let mut body = serde_json::json!({ "error": label });
            if !details.is_empty() {
                body["details"] = serde_json::json!(details);
            }
            println!("{body}");
        }
        OutputFormat::Table => {
            eprintln!("❌ {label}");
            for detail in details {
                eprintln!("   👉 {detail}");
            }
        }
    }
}
