//! Rule to require lowercase, hyphen-separated path segments.
//!
//! # Rationale
//!
//! URLs are case-sensitive; mixing `orderItems`, `order_items` and
//! `order-items` across APIs makes them hard to guess. Path templates such
//! as `{orderId}` are parameters, not path text, and are skipped.

use api_lint_core::utils::{is_lowercase_hyphenated, static_segments, to_snake_case};
use api_lint_core::{DocumentContext, Node, NodeKind, Rule, Severity, Suggestion, Violation};

/// Rule code for lowercase-hyphen-path-segments.
pub const CODE: &str = "API007";

/// Rule name for lowercase-hyphen-path-segments.
pub const NAME: &str = "lowercase-hyphen-path-segments";

const GUIDELINE: &str = "https://opensource.zalando.com/restful-api-guidelines/#129";

/// Requires static path segments to be lowercase words joined by hyphens.
#[derive(Debug, Clone)]
pub struct LowercasePathSegments {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for LowercasePathSegments {
    fn default() -> Self {
        Self::new()
    }
}

impl LowercasePathSegments {
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

/// `orderItems` and `order_items` both become `order-items`.
fn to_kebab_case(segment: &str) -> String {
    to_snake_case(segment).replace('_', "-")
}

impl Rule for LowercasePathSegments {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Must: Use Lowercase Separate Words With Hyphens For Path Segments"
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

        static_segments(item.path)
            .filter(|segment| !is_lowercase_hyphenated(segment))
            .map(|segment| {
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.location(item.pointer()),
                    format!("path segment \"{segment}\" is not lowercase with hyphens"),
                )
                .with_suggestion(Suggestion::new(format!(
                    "Use \"{}\"",
                    to_kebab_case(segment)
                )))
                .with_doc_ref(GUIDELINE)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check, pointers};

    #[test]
    fn test_detects_camel_and_snake_segments() {
        let violations = check(
            LowercasePathSegments::new(),
            "paths:\n  /orderItems/{id}/sales_orders: {}\n",
        );
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].suggestion.as_ref().map(|s| s.message.as_str()),
            Some("Use \"order-items\"")
        );
        assert_eq!(
            violations[1].suggestion.as_ref().map(|s| s.message.as_str()),
            Some("Use \"sales-orders\"")
        );
    }

    #[test]
    fn test_ignores_template_segments() {
        let violations = check(
            LowercasePathSegments::new(),
            "paths:\n  /orders/{orderId}/line-items/{ItemID}: {}\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_accepts_dotted_segments() {
        let violations = check(
            LowercasePathSegments::new(),
            "paths:\n  /.well-known/schema-discovery: {}\n  /Users: {}\n",
        );
        assert_eq!(pointers(&violations), vec!["paths/\"/Users\""]);
    }
}
