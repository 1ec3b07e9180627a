// sentinel-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid matcher for rule '{rule_id}': {reason}")]
    #[diagnostic(
        code(sentinel::domain::rule_matcher),
        help("Check the regex syntax of the rule definition.")
    )]
    InvalidRuleMatcher { rule_id: String, reason: String },

    #[error("Duplicate rule id '{0}' in the rule library")]
    #[diagnostic(
        code(sentinel::domain::duplicate_rule),
        help("Rule ids must be unique across the library.")
    )]
    DuplicateRuleId(String),

    #[error("Invalid audit request: {0}")]
    #[diagnostic(code(sentinel::domain::invalid_request))]
    InvalidRequest(String),
}
