//! Rule to require HTTP methods that match their semantics.
//!
//! # Rationale
//!
//! Clients, caches and proxies rely on method semantics. Reported misuse:
//!
//! - `POST` on a path ending in a variable (`/orders/{id}`): POST creates
//!   members of a collection, so it belongs on the collection path
//! - `GET` or `HEAD` declaring a request body: intermediaries may drop it
//! - `DELETE` requiring a request body
//!
//! Bodies are recognized in both dialects: Swagger 2 `in: body` parameters
//! (including path-level ones) and OpenAPI 3 `requestBody`.

use api_lint_core::utils::ends_with_variable;
use api_lint_core::{
    DocumentContext, HttpMethod, Node, NodeKind, Operation, Rule, Severity, Suggestion, Violation,
};

/// Rule code for correct-http-methods.
pub const CODE: &str = "API006";

/// Rule name for correct-http-methods.
pub const NAME: &str = "correct-http-methods";

const GUIDELINE: &str = "https://opensource.zalando.com/restful-api-guidelines/#148";

/// Flags operations whose method contradicts the path or body.
#[derive(Debug, Clone)]
pub struct CorrectHttpMethods {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for CorrectHttpMethods {
    fn default() -> Self {
        Self::new()
    }
}

impl CorrectHttpMethods {
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

/// Describes the misuse, if any, with a suggested fix.
fn misuse(op: &Operation<'_>) -> Option<(String, &'static str)> {
    match op.method {
        HttpMethod::Post if ends_with_variable(op.path()) => Some((
            format!("POST on \"{}\" which ends with a path variable", op.path()),
            "Use PUT or PATCH to modify a member, or POST to the collection path",
        )),
        HttpMethod::Get | HttpMethod::Head if op.declares_body() => Some((
            format!("{} must not declare a request body", op.method),
            "Pass the input as query parameters",
        )),
        HttpMethod::Delete if op.requires_body() => Some((
            "DELETE must not require a request body".to_string(),
            "Identify the resource by its path; pass filters as query parameters",
        )),
        _ => None,
    }
}

impl Rule for CorrectHttpMethods {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Must: Use HTTP Methods Correctly"
    }

    fn guideline(&self) -> Option<&'static str> {
        Some(GUIDELINE)
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn applies_to(&self) -> &'static [NodeKind] {
        &[NodeKind::Operation]
    }

    fn check(&self, ctx: &DocumentContext<'_>, node: &Node<'_>) -> Vec<Violation> {
        let Node::Operation(op) = node else {
            return Vec::new();
        };
        let Some((message, fix)) = misuse(op) else {
            return Vec::new();
        };

        vec![Violation::new(CODE, NAME, self.severity, ctx.location(op.pointer()), message)
            .with_suggestion(Suggestion::new(fix))
            .with_doc_ref(GUIDELINE)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check, pointers};

    #[test]
    fn test_detects_post_on_member_path() {
        let violations = check(
            CorrectHttpMethods::new(),
            "paths:\n  /greetings/{name}:\n    post: {}\n    put: {}\n",
        );
        assert_eq!(pointers(&violations), vec!["paths/\"/greetings/{name}\"/post"]);
    }

    #[test]
    fn test_allows_post_on_collection() {
        let violations = check(
            CorrectHttpMethods::new(),
            "paths:\n  /orders/{order_id}/items:\n    post: {}\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_detects_get_with_body_parameter() {
        let violations = check(
            CorrectHttpMethods::new(),
            r"
paths:
  /search:
    parameters:
      - name: query
        in: body
    get: {}
    head: {}
",
        );
        assert_eq!(
            pointers(&violations),
            vec!["paths/\"/search\"/get", "paths/\"/search\"/head"]
        );
        assert_eq!(violations[0].message, "GET must not declare a request body");
    }

    #[test]
    fn test_detects_get_with_request_body() {
        let violations = check(
            CorrectHttpMethods::new(),
            r"
openapi: 3.0.0
paths:
  /search:
    get:
      requestBody:
        content:
          application/json: {}
",
        );
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_delete_only_flagged_when_body_required() {
        let violations = check(
            CorrectHttpMethods::new(),
            r"
openapi: 3.0.0
paths:
  /orders/{id}:
    delete:
      requestBody:
        content:
          application/json: {}
  /orders:
    delete:
      requestBody:
        required: true
        content:
          application/json: {}
",
        );
        assert_eq!(pointers(&violations), vec!["paths/\"/orders\"/delete"]);
    }
}
