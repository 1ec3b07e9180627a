// sentinel-core/src/domain/audit/model.rs
//
// Wire-level entities of the audit engine. The JSON field names are part of
// the boundary contract consumed by low-code connectors, so they stay in
// snake_case exactly as declared here.

use crate::domain::audit::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One governance violation detected in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Identifier of the broken rule (back-reference, not an ownership link)
    pub rule_id: String,
    pub severity: Severity,
    /// Rule description plus a truncated excerpt of the matched text
    pub message: String,
    /// Offset marker, format "Index: <offset>"
    pub location: String,
}

/// The input payload submitted for auditing.
///
/// `app_definition_json` is the raw text to scan. Despite the name it is
/// arbitrary text, not necessarily valid JSON; the engine never parses it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuditRequest {
    #[validate(length(min = 1, message = "app_name must not be empty"))]
    pub app_name: String,
    pub app_definition_json: String,
}

/// The governance report returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResponse {
    pub app_name: String,
    /// Set at response construction, UTC
    pub audit_date: DateTime<Utc>,
    /// Health score, always within [0, 100]
    pub governance_score: u8,
    /// Ordered: rule-library order, then match order within a rule
    pub findings: Vec<Finding>,
    /// True iff the score meets the threshold and no Critical finding exists
    pub is_compliant: bool,
}
