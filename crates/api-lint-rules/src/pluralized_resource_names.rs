//! Rule to require plural resource names in paths.
//!
//! # Rationale
//!
//! Collections are addressed by plural nouns (`/orders/{order_id}`), so a
//! path reads the same whether it names the collection or one member.
//!
//! Exempt segments: path templates (`{id}`), version markers (`v1`, reported
//! by `no-uri-versioning` instead), `.well-known`, and words listed in the
//! `ignore` option. For hyphenated segments only the last word is inflected.
//!
//! # Configuration
//!
//! - `ignore`: segments accepted as-is, e.g. `["health", "search"]`

use api_lint_core::utils::{is_version_segment, static_segments};
use api_lint_core::{DocumentContext, Node, NodeKind, Rule, Severity, Suggestion, Violation};

use crate::inflection::{is_plural, plural_noun};

/// Rule code for pluralized-resource-names.
pub const CODE: &str = "API004";

/// Rule name for pluralized-resource-names.
pub const NAME: &str = "pluralized-resource-names";

const GUIDELINE: &str = "https://opensource.zalando.com/restful-api-guidelines/#134";

/// Segments that are never resource names.
const ALWAYS_EXEMPT: &[&str] = &[".well-known"];

/// Requires static path segments to be plural nouns.
#[derive(Debug, Clone)]
pub struct PluralizedResourceNames {
    /// Segments exempt from the check (compared case-insensitively).
    pub ignore: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for PluralizedResourceNames {
    fn default() -> Self {
        Self::new()
    }
}

impl PluralizedResourceNames {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ignore: Vec::new(),
            severity: Severity::Error,
        }
    }

    /// Adds segments that are accepted without being plural.
    #[must_use]
    pub fn ignore<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(segments.into_iter().map(Into::into));
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn is_exempt(&self, segment: &str) -> bool {
        ALWAYS_EXEMPT.contains(&segment)
            || is_version_segment(segment)
            || self.ignore.iter().any(|i| i.eq_ignore_ascii_case(segment))
    }
}

/// Splits a segment into its leading words and the word that carries the
/// number: `order-item` yields `("order-", "item")`.
fn split_last_word(segment: &str) -> (&str, &str) {
    match segment.rfind('-') {
        Some(i) => segment.split_at(i + 1),
        None => ("", segment),
    }
}

impl Rule for PluralizedResourceNames {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Must: Pluralize Resource Names"
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
            .filter(|segment| !self.is_exempt(segment))
            .filter_map(|segment| {
                let (prefix, word) = split_last_word(segment);
                if word.is_empty() || is_plural(word) {
                    return None;
                }
                Some(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        ctx.location(item.pointer()),
                        format!("\"{segment}\" is not in plural form"),
                    )
                    .with_suggestion(Suggestion::new(format!(
                        "Use \"{prefix}{}\"",
                        plural_noun(word)
                    )))
                    .with_doc_ref(GUIDELINE),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check, pointers};

    #[test]
    fn test_detects_singular_resource() {
        let violations = check(PluralizedResourceNames::new(), "paths:\n  /user:\n    get: {}\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "\"user\" is not in plural form");
        assert_eq!(
            violations[0].suggestion.as_ref().map(|s| s.message.as_str()),
            Some("Use \"users\"")
        );
    }

    #[test]
    fn test_accepts_plural_resources() {
        let violations = check(
            PluralizedResourceNames::new(),
            "paths:\n  /users/{user_id}/orders: {}\n  /people: {}\n  /order-items: {}\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_one_violation_per_segment() {
        let violations = check(
            PluralizedResourceNames::new(),
            "paths:\n  /greeting/{name}/reply: {}\n",
        );
        assert_eq!(pointers(&violations).len(), 2);
        assert!(violations[0].message.contains("greeting"));
        assert!(violations[1].message.contains("reply"));
    }

    #[test]
    fn test_inflects_last_word_of_hyphenated_segment() {
        let violations = check(PluralizedResourceNames::new(), "paths:\n  /order-item: {}\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].suggestion.as_ref().map(|s| s.message.as_str()),
            Some("Use \"order-items\"")
        );
    }

    #[test]
    fn test_skips_templates_versions_and_well_known() {
        let violations = check(
            PluralizedResourceNames::new(),
            "paths:\n  /v1/{tenant}/.well-known/schemas: {}\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_ignore_list() {
        let violations = check(
            PluralizedResourceNames::new().ignore(["health"]),
            "paths:\n  /health: {}\n  /Health: {}\n  /status: {}\n",
        );
        assert_eq!(pointers(&violations), vec!["paths/\"/status\""]);
    }
}
