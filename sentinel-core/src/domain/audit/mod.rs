// sentinel-core/src/domain/audit/mod.rs

pub mod auditor;
pub mod matcher;
pub mod model;
pub mod rules;
pub mod severity;

// Re-exports
pub use auditor::{Auditor, COMPLIANCE_THRESHOLD};
pub use matcher::{Matcher, RuleMatch};
pub use model::{AuditRequest, AuditResponse, Finding};
pub use rules::{GovernanceRule, MatcherDefinition, RuleDefinition, RuleLibrary};
pub use severity::Severity;
