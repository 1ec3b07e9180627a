// sentinel-core/src/application/audit.rs
//
// The validate-then-delegate use case. The boundary adapter hands us raw or
// typed requests; schema validation acts as a firewall before the core
// engine ever sees the data.

use std::path::Path;

use crate::domain::audit::{AuditRequest, AuditResponse, Auditor, RuleLibrary};
use crate::error::SentinelError;
use crate::infrastructure::config::load_rule_definitions;
use crate::infrastructure::error::InfrastructureError;
use validator::Validate;

/// Parses a raw JSON document into an [`AuditRequest`].
pub fn parse_request(raw: &str) -> Result<AuditRequest, SentinelError> {
    let request: AuditRequest = serde_json::from_str(raw).map_err(InfrastructureError::Json)?;
    Ok(request)
}

/// Builds the rule library: the shipped default, or an external YAML file
/// when one is supplied.
pub fn build_library(rules_file: Option<&Path>) -> Result<RuleLibrary, SentinelError> {
    let library = match rules_file {
        Some(path) => RuleLibrary::from_definitions(load_rule_definitions(path)?)?,
        None => RuleLibrary::shipped()?,
    };
    Ok(library)
}

/// Validates the request, then delegates to the auditor.
pub fn run_audit(
    auditor: &Auditor,
    request: &AuditRequest,
) -> Result<AuditResponse, SentinelError> {
    // 1. Schema validation (pre-core; the engine assumes well-typed input)
    request.validate().map_err(|errors| {
        let details = errors
            .field_errors()
            .iter()
            .flat_map(|(field, issues)| {
                issues.iter().map(move |issue| match &issue.message {
                    Some(message) => format!("{field}: {message}"),
                    None => format!("{field}: {}", issue.code),
                })
            })
            .collect();
        SentinelError::Validation { details }
    })?;

    // 2. Delegate to the core engine
    Ok(auditor.evaluate(request)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;

    #[test]
    fn test_run_audit_happy_path() -> Result<()> {
        let auditor = Auditor::new(build_library(None)?);
        let request = AuditRequest {
            app_name: "CleanApp".to_string(),
            app_definition_json: "Set(varUserName, User().FullName);".to_string(),
        };

        let response = run_audit(&auditor, &request)?;
        assert_eq!(response.governance_score, 100);
        assert!(response.is_compliant);
        Ok(())
    }

    #[test]
    fn test_run_audit_rejects_empty_app_name() -> Result<()> {
        let auditor = Auditor::new(build_library(None)?);
        let request = AuditRequest {
            app_name: String::new(),
            app_definition_json: "x".to_string(),
        };

        let result = run_audit(&auditor, &request);
        match result {
            Err(SentinelError::Validation { details }) => {
                assert!(details.iter().any(|d| d.contains("app_name")));
            }
            other => anyhow::bail!("expected validation failure, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_request_rejects_malformed_json() {
        let result = parse_request("{not json");
        assert!(matches!(
            result,
            Err(SentinelError::Infrastructure(_))
        ));
    }

    #[test]
    fn test_parse_request_accepts_full_payload() -> Result<()> {
        let request = parse_request(
            r#"{"app_name": "MyApp", "app_definition_json": "Set(varX, 1)"}"#,
        )?;
        assert_eq!(request.app_name, "MyApp");
        Ok(())
    }

    #[test]
    fn test_build_library_from_yaml_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(
            file,
            r#"rules:
  - id: CUSTOM-001
    severity: info
    description: "Collect usage"
    matcher:
      literal: "Collect(""#
        )?;

        let library = build_library(Some(file.path()))?;
        assert_eq!(library.len(), 1);
        assert_eq!(library.rules()[0].id, "CUSTOM-001");
        Ok(())
    }
}
