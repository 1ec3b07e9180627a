// sentinel-core/src/infrastructure/config.rs
//
// Loader for external rule-library files. The shipped default library is
// hardcoded in the domain; this adapter only covers the optional
// file-based override.

use crate::domain::audit::RuleDefinition;
use crate::infrastructure::error::InfrastructureError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

/// On-disk shape of a rule library file.
///
/// ```yaml
/// rules:
///   - id: SEC-101
///     severity: critical
///     description: "No production URLs in app definitions."
///     matcher:
///       pattern: "(?i)prod\\.example\\.com"
/// ```
#[derive(Debug, Deserialize)]
struct RuleFile {
    rules: Vec<RuleDefinition>,
}

#[instrument]
pub fn load_rule_definitions(path: &Path) -> Result<Vec<RuleDefinition>, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::RulesFileNotFound(
            path.display().to_string(),
        ));
    }

    let content = fs::read_to_string(path)?;
    let file: RuleFile = serde_yaml::from_str(&content)?;

    info!(path = %path.display(), rules = file.rules.len(), "rule library file loaded");
    Ok(file.rules)
}
