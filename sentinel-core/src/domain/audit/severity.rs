// sentinel-core/src/domain/audit/severity.rs

use serde::{Deserialize, Serialize};

/// Severity level of a governance finding.
///
/// Serialized as the capitalized variant name ("Critical", "Warning",
/// "Info") on the wire; YAML rule files may also use the lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Security risks (e.g. hardcoded secrets)
    #[serde(alias = "critical")]
    Critical,
    /// Best-practice violations (e.g. poor naming)
    #[serde(alias = "warning")]
    Warning,
    /// General optimizations
    #[serde(alias = "info")]
    Info,
}

/// Fixed score deduction per finding, keyed by severity.
/// Extending the scoring policy means editing this table, not the scorer.
pub const SCORE_DEDUCTIONS: [(Severity, u8); 3] = [
    (Severity::Critical, 20),
    (Severity::Warning, 10),
    (Severity::Info, 2),
];

impl Severity {
    /// Points removed from the governance score for one finding.
    pub fn deduction(self) -> u8 {
        SCORE_DEDUCTIONS
            .iter()
            .find(|(severity, _)| *severity == self)
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
