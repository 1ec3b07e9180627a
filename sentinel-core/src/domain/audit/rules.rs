// sentinel-core/src/domain/audit/rules.rs
//
// The rule library: an ordered, immutable set of governance checks.
// Built once at startup and shared read-only by every evaluation, so it is
// safe for unlimited concurrent reads with zero synchronization.

use crate::domain::audit::matcher::{Matcher, RuleMatch};
use crate::domain::audit::severity::Severity;
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// One governance check: identity, weight and matching predicate.
#[derive(Debug, Clone)]
pub struct GovernanceRule {
    pub id: String,
    pub severity: Severity,
    pub description: String,
    matcher: Matcher,
}

impl GovernanceRule {
    /// All occurrences of this rule's pattern in `text`, left to right.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<RuleMatch<'t>> {
        self.matcher.find_all(text)
    }
}

/// Declarative form of a matcher, as it appears in a YAML rule file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum MatcherDefinition {
    /// Regex evaluated against the full text
    Pattern(String),
    /// Plain substring
    Literal(String),
    /// `<call>(<identifier>` where the identifier must not carry one of the
    /// allowed prefixes
    Declaration {
        call: String,
        allowed_prefixes: Vec<String>,
    },
}

/// Declarative form of a rule, as loaded from an external library file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub id: String,
    pub severity: Severity,
    pub description: String,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub matcher: MatcherDefinition,
}

pub struct RuleLibrary {
    rules: Vec<GovernanceRule>,
}

impl RuleLibrary {
    /// The shipped default library.
    ///
    /// In a larger deployment these would be loaded from a config file (see
    /// `infrastructure::config`), but the default set ships hardcoded.
    pub fn shipped() -> Result<Self, DomainError> {
        Self::from_definitions(vec![
            // Security: hardcoded client secrets or passwords.
            // Matches a secret-like keyword (optionally suffixed, e.g.
            // 'varSecretKey'), an assignment-like separator, then a quoted
            // non-empty string literal.
            RuleDefinition {
                id: "SEC-001".to_string(),
                severity: Severity::Critical,
                description: "Potential hardcoded secret or password detected.".to_string(),
                matcher: MatcherDefinition::Pattern(
                    r#"(?i)(secret|password|apikey|token)[a-zA-Z0-9_]*\s*[:=>,]\s*["'][^"']+["']"#
                        .to_string(),
                ),
            },
            // GDPR/privacy: explicit SSN or sensitive PII labels.
            RuleDefinition {
                id: "PRIV-001".to_string(),
                severity: Severity::Critical,
                description: "Potential PII exposure (SSN/Social Security).".to_string(),
                matcher: MatcherDefinition::Pattern(
                    r"(?i)(ssn|social\s?security|birth\s?date)".to_string(),
                ),
            },
            // Naming conventions (Hungarian notation), purely heuristic:
            // flags Set(myVariable, ...) when the identifier lacks a
            // var/loc/col prefix. Case-sensitive by design.
            RuleDefinition {
                id: "GOV-001".to_string(),
                severity: Severity::Warning,
                description: "Variable does not follow naming conventions (should start with 'var', 'loc', or 'col').".to_string(),
                matcher: MatcherDefinition::Declaration {
                    call: "Set".to_string(),
                    allowed_prefixes: vec![
                        "var".to_string(),
                        "loc".to_string(),
                        "col".to_string(),
                    ],
                },
            },
            // Performance: clearing large collections without filters.
            RuleDefinition {
                id: "PERF-001".to_string(),
                severity: Severity::Info,
                description: "Heavy operation detected: Clearing large collections might impact performance.".to_string(),
                matcher: MatcherDefinition::Literal("ClearCollect(".to_string()),
            },
        ])
    }

    /// Compiles a declarative rule list into a library.
    ///
    /// A malformed regex or a duplicate id is a configuration error and
    /// fails the whole build: a governance library that only half-loads
    /// would silently under-report.
    pub fn from_definitions(definitions: Vec<RuleDefinition>) -> Result<Self, DomainError> {
        let mut seen_ids: HashSet<String> = HashSet::with_capacity(definitions.len());
        let mut rules = Vec::with_capacity(definitions.len());

        for definition in definitions {
            if !seen_ids.insert(definition.id.clone()) {
                return Err(DomainError::DuplicateRuleId(definition.id));
            }

            let matcher = match &definition.matcher {
                MatcherDefinition::Pattern(regex) => Matcher::pattern(regex),
                MatcherDefinition::Literal(needle) => Ok(Matcher::literal(needle.clone())),
                MatcherDefinition::Declaration {
                    call,
                    allowed_prefixes,
                } => Matcher::declaration(call, allowed_prefixes),
            }
            .map_err(|e| DomainError::InvalidRuleMatcher {
                rule_id: definition.id.clone(),
                reason: e.to_string(),
            })?;

            rules.push(GovernanceRule {
                id: definition.id,
                severity: definition.severity,
                description: definition.description,
                matcher,
            });
        }

        debug!(rules = rules.len(), "rule library compiled");
        Ok(Self { rules })
    }

    /// Rules in library order.
    pub fn rules(&self) -> &[GovernanceRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
