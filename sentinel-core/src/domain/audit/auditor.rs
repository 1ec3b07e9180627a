// sentinel-core/src/domain/audit/auditor.rs
//
// The core logic engine: applies every library rule to one audit request
// and derives the governance score and compliance verdict. Evaluation is a
// pure, total function of the request text and the immutable library; the
// only fallible path is a violated input precondition.

use crate::domain::audit::model::{AuditRequest, AuditResponse, Finding};
use crate::domain::audit::rules::RuleLibrary;
use crate::domain::audit::severity::Severity;
use crate::domain::error::DomainError;
use chrono::Utc;
use tracing::{debug, info};

/// Minimum score required for a compliant verdict.
pub const COMPLIANCE_THRESHOLD: u8 = 70;

/// Matched excerpts embedded in finding messages are capped at this many
/// characters.
const MAX_EXCERPT_CHARS: usize = 50;

pub struct Auditor {
    library: RuleLibrary,
}

impl Auditor {
    pub fn new(library: RuleLibrary) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &RuleLibrary {
        &self.library
    }

    /// Audits one app definition against the rule library.
    ///
    /// Findings come out in library order, then match order within a rule.
    /// The boundary validates requests before calling this, but an empty
    /// app_name still fails with a clear error kind rather than producing a
    /// nonsense report.
    pub fn evaluate(&self, request: &AuditRequest) -> Result<AuditResponse, DomainError> {
        if request.app_name.is_empty() {
            return Err(DomainError::InvalidRequest(
                "app_name must not be empty".to_string(),
            ));
        }

        let source = request.app_definition_json.as_str();
        let mut findings: Vec<Finding> = Vec::new();

        for rule in self.library.rules() {
            let matches = rule.find_all(source);
            debug!(rule = %rule.id, matches = matches.len(), "rule evaluated");

            for rule_match in matches {
                let excerpt: String = rule_match.text.chars().take(MAX_EXCERPT_CHARS).collect();
                // Locations are character offsets, independent of UTF-8
                // byte widths.
                let offset = source[..rule_match.start].chars().count();

                findings.push(Finding {
                    rule_id: rule.id.clone(),
                    severity: rule.severity,
                    message: format!("{} Found pattern: '{excerpt}...'", rule.description),
                    location: format!("Index: {offset}"),
                });
            }
        }

        let governance_score = compute_score(&findings);
        let has_critical = findings
            .iter()
            .any(|f| f.severity == Severity::Critical);
        // Double gate: the threshold alone is not enough, a Critical
        // finding always fails compliance even if the score survives.
        let is_compliant = governance_score >= COMPLIANCE_THRESHOLD && !has_critical;

        info!(
            app = %request.app_name,
            score = governance_score,
            findings = findings.len(),
            compliant = is_compliant,
            "audit completed"
        );

        Ok(AuditResponse {
            app_name: request.app_name.clone(),
            audit_date: Utc::now(),
            governance_score,
            findings,
            is_compliant,
        })
    }
}

/// Start at 100, deduct per finding according to the severity table, floor
/// at 0. No upper clamp is needed since the score only decreases.
fn compute_score(findings: &[Finding]) -> u8 {
    let penalty: u32 = findings
        .iter()
        .map(|f| u32::from(f.severity.deduction()))
        .sum();
    // saturating_sub keeps the result within [0, 100], so the cast is exact
    100u32.saturating_sub(penalty) as u8
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::audit::rules::{MatcherDefinition, RuleDefinition, RuleLibrary};
    use anyhow::Result;

    fn shipped_auditor() -> Result<Auditor> {
        Ok(Auditor::new(RuleLibrary::shipped()?))
    }

    fn request(definition: &str) -> AuditRequest {
        AuditRequest {
            app_name: "TestApp".to_string(),
            app_definition_json: definition.to_string(),
        }
    }

    #[test]
    fn test_clean_app_scores_perfect() -> Result<()> {
        let auditor = shipped_auditor()?;
        let response = auditor.evaluate(&request("Set(varUserName, User().FullName);"))?;

        assert_eq!(response.governance_score, 100);
        assert!(response.is_compliant);
        assert!(response.findings.is_empty());
        assert_eq!(response.app_name, "TestApp");
        Ok(())
    }

    #[test]
    fn test_hardcoded_secret_fails_compliance() -> Result<()> {
        let auditor = shipped_auditor()?;
        let response = auditor.evaluate(&request(
            r#"Set(varConfig, { ClientId: "123", Secret: "super_secret_value" });"#,
        ))?;

        assert!(response.governance_score <= 80);
        assert!(!response.is_compliant);

        let criticals: Vec<_> = response
            .findings
            .iter()
            .filter(|f| f.severity == Severity::Critical)
            .collect();
        assert!(!criticals.is_empty());
        assert_eq!(criticals[0].rule_id, "SEC-001");
        Ok(())
    }

    #[test]
    fn test_naming_convention_warning() -> Result<()> {
        let auditor = shipped_auditor()?;
        let response = auditor.evaluate(&request(r#"Set(myVariable, "test");"#))?;

        let warnings: Vec<_> = response
            .findings
            .iter()
            .filter(|f| f.rule_id == "GOV-001")
            .collect();
        assert!(!warnings.is_empty());
        assert!(response.governance_score < 100);
        // No Critical present, so the threshold alone decides
        assert!(response.is_compliant);
        Ok(())
    }

    #[test]
    fn test_evaluation_is_deterministic() -> Result<()> {
        let auditor = shipped_auditor()?;
        let req = request("ssn; ClearCollect(colItems); Set(myVar, 1)");

        let first = auditor.evaluate(&req)?;
        let second = auditor.evaluate(&req)?;

        assert_eq!(first.governance_score, second.governance_score);
        assert_eq!(first.findings, second.findings);
        assert_eq!(first.is_compliant, second.is_compliant);
        Ok(())
    }

    #[test]
    fn test_additional_match_never_raises_score() -> Result<()> {
        let auditor = shipped_auditor()?;
        let base = auditor.evaluate(&request("ClearCollect(colA)"))?;
        let extended = auditor.evaluate(&request("ClearCollect(colA); ClearCollect(colB)"))?;

        assert!(extended.governance_score <= base.governance_score);
        // Every original finding survives in the extended report
        for finding in &base.findings {
            assert!(extended.findings.contains(finding));
        }
        Ok(())
    }

    #[test]
    fn test_score_floors_at_zero() -> Result<()> {
        let auditor = shipped_auditor()?;
        // Six Critical PRIV-001 hits: 100 - 6 * 20 would go negative
        let response = auditor.evaluate(&request("ssn ssn ssn ssn ssn ssn"))?;

        assert_eq!(response.governance_score, 0);
        assert!(!response.is_compliant);
        Ok(())
    }

    #[test]
    fn test_critical_gate_overrides_threshold() -> Result<()> {
        let auditor = shipped_auditor()?;
        // A single Critical leaves the score at 80, above the threshold,
        // yet compliance must still fail.
        let response = auditor.evaluate(&request("ssn"))?;

        assert_eq!(response.governance_score, 80);
        assert!(response.governance_score >= COMPLIANCE_THRESHOLD);
        assert!(!response.is_compliant);
        Ok(())
    }

    #[test]
    fn test_findings_keep_library_order() -> Result<()> {
        let auditor = shipped_auditor()?;
        // PERF occurrence appears first in the text, but SEC-001 comes
        // first in the library.
        let response = auditor.evaluate(&request(
            r#"ClearCollect(colItems); Secret: "value1"; Secret: "value2""#,
        ))?;

        let ids: Vec<&str> = response
            .findings
            .iter()
            .map(|f| f.rule_id.as_str())
            .collect();
        assert_eq!(ids, vec!["SEC-001", "SEC-001", "PERF-001"]);
        Ok(())
    }

    #[test]
    fn test_location_offsets_match_source() -> Result<()> {
        let auditor = shipped_auditor()?;
        let response = auditor.evaluate(&request("abc ssn xyz ssn"))?;

        let locations: Vec<&str> = response
            .findings
            .iter()
            .map(|f| f.location.as_str())
            .collect();
        assert_eq!(locations, vec!["Index: 4", "Index: 12"]);
        Ok(())
    }

    #[test]
    fn test_location_offsets_are_character_based() -> Result<()> {
        let auditor = shipped_auditor()?;
        // 'é' is two bytes but one character; the reported index counts
        // characters.
        let response = auditor.evaluate(&request("héllo ssn"))?;

        assert_eq!(response.findings.len(), 1);
        assert_eq!(response.findings[0].location, "Index: 6");
        Ok(())
    }

    #[test]
    fn test_excerpt_truncated_to_fifty_characters() -> Result<()> {
        let auditor = shipped_auditor()?;
        let long_value = "a".repeat(80);
        let response =
            auditor.evaluate(&request(&format!(r#"Secret: "{long_value}""#)))?;

        assert_eq!(response.findings.len(), 1);
        let message = &response.findings[0].message;
        assert!(message.ends_with("...'"));

        // Between the opening and closing quote of the excerpt sit exactly
        // 50 characters of matched text.
        let excerpt = message
            .split("Found pattern: '")
            .nth(1)
            .and_then(|s| s.strip_suffix("...'"))
            .unwrap();
        assert_eq!(excerpt.chars().count(), 50);
        Ok(())
    }

    #[test]
    fn test_excerpt_truncation_is_utf8_safe() -> Result<()> {
        // Multibyte characters straddling the cap must not split; a custom
        // rule makes the whole match multibyte.
        let library = RuleLibrary::from_definitions(vec![RuleDefinition {
            id: "UTF-001".to_string(),
            severity: Severity::Info,
            description: "Multibyte run.".to_string(),
            matcher: MatcherDefinition::Pattern("é+".to_string()),
        }])?;
        let auditor = Auditor::new(library);

        let response = auditor.evaluate(&request(&"é".repeat(60)))?;
        assert_eq!(response.findings.len(), 1);
        assert!(response.findings[0].message.contains(&"é".repeat(50)));
        Ok(())
    }

    #[test]
    fn test_empty_app_name_is_rejected() -> Result<()> {
        let auditor = shipped_auditor()?;
        let result = auditor.evaluate(&AuditRequest {
            app_name: String::new(),
            app_definition_json: "text".to_string(),
        });

        assert!(matches!(result, Err(DomainError::InvalidRequest(_))));
        Ok(())
    }

    #[test]
    fn test_library_unchanged_across_evaluations() -> Result<()> {
        let auditor = shipped_auditor()?;
        let baseline = auditor.evaluate(&request("ssn"))?;

        // A structurally different request in between must not perturb the
        // shared library.
        auditor.evaluate(&request(r#"ClearCollect(x); Set(other, "y")"#))?;

        let replay = auditor.evaluate(&request("ssn"))?;
        assert_eq!(auditor.library().len(), 4);
        assert_eq!(baseline.findings, replay.findings);
        assert_eq!(baseline.governance_score, replay.governance_score);
        Ok(())
    }
}
