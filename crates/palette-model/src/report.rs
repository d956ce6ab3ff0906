use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }
}

/// A single semantic finding from validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Stable rule code (e.g. "PJ0001").
    pub code: String,
    /// Human-readable message describing the finding.
    pub message: String,
    pub severity: Severity,
    /// Label of the color involved, if the finding is color-scoped.
    pub color: Option<String>,
    /// Occurrence count, when the rule aggregates.
    pub count: Option<u64>,
    /// Check category (e.g. "Format", "Ordering", "Grouping").
    pub category: Option<String>,
}

/// Validation findings for a single palette (or for the document itself,
/// under the reserved label "(document)").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub palette: String,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}
