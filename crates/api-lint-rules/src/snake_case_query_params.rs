//! Rule to require snake_case query parameter names.
//!
//! # Rationale
//!
//! Query parameters follow the same naming as payload properties, so that
//! a filter on `created_at` is spelled like the property it filters.
//! Path, header and body parameters are not checked.

use api_lint_core::utils::{is_snake_case, to_snake_case};
use api_lint_core::{
    DocumentContext, Node, NodeKind, ParameterLocation, Rule, Severity, Suggestion, Violation,
};

/// Rule code for snake-case-query-params.
pub const CODE: &str = "API008";

/// Rule name for snake-case-query-params.
pub const NAME: &str = "snake-case-query-params";

const GUIDELINE: &str = "https://opensource.zalando.com/restful-api-guidelines/#130";

/// Requires query parameter names to be snake_case.
#[derive(Debug, Clone)]
pub struct SnakeCaseQueryParams {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for SnakeCaseQueryParams {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeCaseQueryParams {
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

impl Rule for SnakeCaseQueryParams {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Must: Use snake_case For Query Parameters"
    }

    fn guideline(&self) -> Option<&'static str> {
        Some(GUIDELINE)
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn applies_to(&self) -> &'static [NodeKind] {
        &[NodeKind::Parameter]
    }

    fn check(&self, ctx: &DocumentContext<'_>, node: &Node<'_>) -> Vec<Violation> {
        let Node::Parameter(param) = node else {
            return Vec::new();
        };
        if param.location != Some(ParameterLocation::Query) || is_snake_case(param.name) {
            return Vec::new();
        }

        vec![Violation::new(
            CODE,
            NAME,
            self.severity,
            ctx.location(param.pointer.clone()),
            format!("query parameter \"{}\" is not snake_case", param.name),
        )
        .with_suggestion(Suggestion::new(format!(
            "Rename to \"{}\"",
            to_snake_case(param.name)
        )))
        .with_doc_ref(GUIDELINE)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check, pointers};

    #[test]
    fn test_detects_camel_case_query_param() {
        let violations = check(
            SnakeCaseQueryParams::new(),
            r"
paths:
  /orders:
    parameters:
      - name: pageSize
        in: query
    get:
      parameters:
        - name: sort_by
          in: query
        - name: createdAfter
          in: query
",
        );
        assert_eq!(
            pointers(&violations),
            vec![
                "paths/\"/orders\"/parameters/pageSize",
                "paths/\"/orders\"/get/parameters/createdAfter",
            ]
        );
        assert_eq!(
            violations[1].suggestion.as_ref().map(|s| s.message.as_str()),
            Some("Rename to \"created_after\"")
        );
    }

    #[test]
    fn test_ignores_other_locations() {
        let violations = check(
            SnakeCaseQueryParams::new(),
            r"
paths:
  /orders/{orderId}:
    get:
      parameters:
        - name: orderId
          in: path
        - name: X-Flow-Id
          in: header
        - $ref: '#/parameters/pageSize'
",
        );
        assert!(violations.is_empty());
    }
}
