//! Rule to require snake_case property names.
//!
//! # Rationale
//!
//! Property names are part of the JSON payload contract. One naming style
//! across all APIs lets clients map payloads without per-API conventions.
//!
//! Every property reached from a body parameter, request body, response,
//! `definitions` or `components/schemas` is checked, including nested
//! objects, array items and `allOf`/`oneOf`/`anyOf` members.
//!
//! # Configuration
//!
//! - `ignore`: property names accepted as-is, e.g. `["_links", "@type"]`

use api_lint_core::utils::{is_snake_case, to_snake_case};
use api_lint_core::{DocumentContext, Node, NodeKind, Rule, Severity, Suggestion, Violation};

/// Rule code for snake-case-properties.
pub const CODE: &str = "API005";

/// Rule name for snake-case-properties.
pub const NAME: &str = "snake-case-properties";

const GUIDELINE: &str = "https://opensource.zalando.com/restful-api-guidelines/#118";

/// Requires schema property names to be snake_case.
#[derive(Debug, Clone)]
pub struct SnakeCaseProperties {
    /// Property names exempt from the check.
    pub ignore: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for SnakeCaseProperties {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeCaseProperties {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ignore: Vec::new(),
            severity: Severity::Error,
        }
    }

    /// Adds property names that are accepted without being snake_case.
    #[must_use]
    pub fn ignore<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for SnakeCaseProperties {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Must: Property Names Must Be snake_case"
    }

    fn guideline(&self) -> Option<&'static str> {
        Some(GUIDELINE)
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn applies_to(&self) -> &'static [NodeKind] {
        &[NodeKind::SchemaProperty]
    }

    fn check(&self, ctx: &DocumentContext<'_>, node: &Node<'_>) -> Vec<Violation> {
        let Node::SchemaProperty(property) = node else {
            return Vec::new();
        };
        if is_snake_case(property.name) || self.ignore.iter().any(|i| i == property.name) {
            return Vec::new();
        }

        vec![Violation::new(
            CODE,
            NAME,
            self.severity,
            ctx.location(property.pointer.clone()),
            format!("property \"{}\" is not snake_case", property.name),
        )
        .with_suggestion(Suggestion::new(format!(
            "Rename to \"{}\"",
            to_snake_case(property.name)
        )))
        .with_doc_ref(GUIDELINE)]
    }
}
