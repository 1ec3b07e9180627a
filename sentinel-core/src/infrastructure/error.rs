// sentinel-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(sentinel::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- RULE FILES / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(sentinel::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    Yaml(#[from] serde_yaml::Error),

    #[error("Rule library file not found at '{0}'")]
    #[diagnostic(code(sentinel::infra::rules_missing))]
    RulesFileNotFound(String),

    // --- REQUEST PAYLOADS / JSON ---
    #[error("Invalid JSON format")]
    #[diagnostic(
        code(sentinel::infra::json),
        help("The request payload must be a valid JSON document.")
    )]
    Json(#[from] serde_json::Error),
}
