//! Core types for lint violations and results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Guideline violation that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Location of a finding inside an API description.
///
/// The pointer follows the document structure, with path keys quoted:
/// `paths/"/pets/{pet_id}"/get/responses/200`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Document the finding belongs to.
    pub file: PathBuf,
    /// Structural pointer within the document.
    pub pointer: String,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, pointer: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            pointer: pointer.into(),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.pointer)
    }
}

/// A suggested fix for a violation, shown as a hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A guideline violation found during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "API002").
    pub code: String,
    /// Rule name (e.g., "no-trailing-slash").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Where the violation was found.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
    /// Link to the guideline this rule enforces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_ref: Option<String>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            suggestion: None,
            doc_ref: None,
        }
    }

    /// Adds a guideline reference to this violation.
    #[must_use]
    pub fn with_doc_ref(mut self, doc_ref: impl Into<String>) -> Self {
        self.doc_ref = Some(doc_ref.into());
        self
    }

    /// Adds a suggestion to this violation.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Follow-up hints for readers: the suggestion, then the guideline link.
    #[must_use]
    pub fn hints(&self) -> Vec<String> {
        let mut hints = Vec::new();
        if let Some(suggestion) = &self.suggestion {
            hints.push(format!("help: {}", suggestion.message));
        }
        if let Some(doc_ref) = &self.doc_ref {
            hints.push(format!("see: {doc_ref}"));
        }
        hints
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.location, self.severity, self.code, self.message
        )
    }
}

/// Result of evaluating one document.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found, in traversal order.
    pub violations: Vec<Violation>,
    /// Number of document nodes the rules were applied to.
    pub nodes_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no violations were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Counts violations by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity: Severity| {
            self.violations
                .iter()
                .filter(|v| v.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// One-line summary of the result.
    #[must_use]
    pub fn summary(&self) -> String {
        let (errors, warnings, infos) = self.count_by_severity();
        format!(
            "Found {} violation(s): {} error(s), {} warning(s), {} info(s) across {} node(s)",
            self.violations.len(),
            errors,
            warnings,
            infos,
            self.nodes_checked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            "API002",
            "no-trailing-slash",
            severity,
            Location::new("api.yaml", "paths/\"/users/\""),
            "path ends with a trailing slash",
        )
    }

    #[test]
    fn violation_new_has_no_doc_ref() {
        let v = make_violation(Severity::Error);
        assert!(v.doc_ref.is_none());
        assert!(v.suggestion.is_none());
    }

    #[test]
    fn violation_display_is_single_line() {
        let v = make_violation(Severity::Error);
        insta::assert_snapshot!(
            v.to_string(),
            @r#"api.yaml:paths/"/users/": error [API002] path ends with a trailing slash"#
        );
    }

    #[test]
    fn violation_hints_in_order() {
        let v = make_violation(Severity::Warning)
            .with_doc_ref("https://example.com/#136")
            .with_suggestion(Suggestion::new("Use \"/users\""));
        assert_eq!(
            v.hints(),
            vec!["help: Use \"/users\"", "see: https://example.com/#136"]
        );
    }

    #[test]
    fn violation_without_hints() {
        assert!(make_violation(Severity::Error).hints().is_empty());
    }

    #[test]
    fn has_violations_at_respects_threshold() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        assert!(!result.has_violations_at(Severity::Error));
        assert!(result.has_violations_at(Severity::Warning));
        assert!(result.has_violations_at(Severity::Info));
    }

    #[test]
    fn summary_counts_each_severity() {
        let mut result = LintResult::new();
        result.nodes_checked = 7;
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Info));

        assert_eq!(result.count_by_severity(), (2, 0, 1));
        assert_eq!(
            result.summary(),
            "Found 3 violation(s): 2 error(s), 0 warning(s), 1 info(s) across 7 node(s)"
        );
    }

    #[test]
    fn severity_orders_info_below_error() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }
}
