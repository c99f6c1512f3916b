//! Rule to require JSON objects as top-level response structures.
//!
//! # Rationale
//!
//! A bare array or scalar response cannot grow: adding paging links or
//! metadata later breaks every client. Wrapping the payload in an object
//! keeps that option open.
//!
//! Responses without a schema, or whose schema has no `type` (for example a
//! `$ref`), are not checked.

use api_lint_core::{DocumentContext, Node, NodeKind, Rule, Severity, Suggestion, Violation};

/// Rule code for top-level-json-object.
pub const CODE: &str = "API001";

/// Rule name for top-level-json-object.
pub const NAME: &str = "top-level-json-object";

const GUIDELINE: &str = "https://opensource.zalando.com/restful-api-guidelines/#110";

/// Requires response schemas to be objects.
#[derive(Debug, Clone)]
pub struct TopLevelJsonObject {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for TopLevelJsonObject {
    fn default() -> Self {
        Self::new()
    }
}

impl TopLevelJsonObject {
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

impl Rule for TopLevelJsonObject {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Must: Always Return JSON Objects As Top-Level Data Structures"
    }

    fn guideline(&self) -> Option<&'static str> {
        Some(GUIDELINE)
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn applies_to(&self) -> &'static [NodeKind] {
        &[NodeKind::Response]
    }

    fn check(&self, ctx: &DocumentContext<'_>, node: &Node<'_>) -> Vec<Violation> {
        let Node::Response(response) = node else {
            return Vec::new();
        };
        let Some(schema_type) = response.schema_type() else {
            return Vec::new();
        };
        if schema_type == "object" {
            return Vec::new();
        }

        vec![Violation::new(
            CODE,
            NAME,
            self.severity,
            ctx.location(response.pointer.clone()),
            format!("top-level response structure is \"{schema_type}\", not an object"),
        )
        .with_suggestion(Suggestion::new(
            "Wrap the payload in an object, e.g. {\"items\": [...]}",
        ))
        .with_doc_ref(GUIDELINE)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check, pointers};

    #[test]
    fn test_detects_array_response() {
        let violations = check(
            TopLevelJsonObject::new(),
            r"
paths:
  /pets:
    get:
      responses:
        200:
          description: all pets
          schema:
            type: array
            items:
              type: object
",
        );
        assert_eq!(pointers(&violations), vec!["paths/\"/pets\"/get/responses/200"]);
        assert!(violations[0].message.contains("\"array\""));
    }

    #[test]
    fn test_accepts_object_and_untyped_responses() {
        let violations = check(
            TopLevelJsonObject::new(),
            r"
paths:
  /pets:
    get:
      responses:
        200:
          schema:
            type: object
        404:
          description: not found
        default:
          schema:
            $ref: '#/definitions/Error'
",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_checks_each_json_media_type() {
        let violations = check(
            TopLevelJsonObject::new(),
            r"
openapi: 3.0.0
paths:
  /pets:
    get:
      responses:
        '200':
          content:
            application/json:
              schema:
                type: array
            application/problem+json:
              schema:
                type: object
            text/plain:
              schema:
                type: string
",
        );
        assert_eq!(
            pointers(&violations),
            vec!["paths/\"/pets\"/get/responses/200/content/application/json"]
        );
    }
}
