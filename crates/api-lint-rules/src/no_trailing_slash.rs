//! Rule to forbid trailing slashes on path keys.
//!
//! # Rationale
//!
//! `/users/` and `/users` name the same collection; accepting both splits
//! caches, links and client code. The root path `/` is exempt.

use api_lint_core::{DocumentContext, Node, NodeKind, Rule, Severity, Suggestion, Violation};

/// Rule code for no-trailing-slash.
pub const CODE: &str = "API002";

/// Rule name for no-trailing-slash.
pub const NAME: &str = "no-trailing-slash";

const GUIDELINE: &str = "https://opensource.zalando.com/restful-api-guidelines/#136";

/// Forbids path keys ending in `/`.
#[derive(Debug, Clone)]
pub struct NoTrailingSlash {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoTrailingSlash {
    fn default() -> Self {
        Self::new()
    }
}

impl NoTrailingSlash {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoTrailingSlash {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Must: Avoid Trailing Slashes"
    }

    fn guideline(&self) -> Option<&'static str> {
        Some(GUIDELINE)
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn applies_to(&self) -> &'static [NodeKind] {
        &[NodeKind::PathItem]
    }

    fn check(&self, ctx: &DocumentContext<'_>, node: &Node<'_>) -> Vec<Violation> {
        let Node::PathItem(item) = node else {
            return Vec::new();
        };
        if item.path.len() <= 1 || !item.path.ends_with('/') {
            return Vec::new();
        }

        let trimmed = item.path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };

        vec![Violation::new(
            CODE,
            NAME,
            self.severity,
            ctx.location(item.pointer()),
            format!("path \"{}\" ends with a trailing slash", item.path),
        )
        .with_suggestion(Suggestion::new(format!("Use \"{trimmed}\"")))
        .with_doc_ref(GUIDELINE)]
    }
}
