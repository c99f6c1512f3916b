//! Helpers for rule unit tests.

use api_lint_core::{Document, Evaluator, Rule, RuleRegistry, Violation};
use std::path::Path;

/// Runs a single rule over an inline YAML document.
pub(crate) fn check<R: Rule + 'static>(rule: R, yaml: &str) -> Vec<Violation> {
    let document = Document::parse(yaml, "test.yaml").expect("test document should parse");
    Evaluator::builder()
        .registry(RuleRegistry::default().with_rule(rule))
        .build()
        .evaluate(&document, Path::new("test.yaml"))
        .violations
}

/// Pointers of the given violations.
pub(crate) fn pointers(violations: &[Violation]) -> Vec<&str> {
    violations
        .iter()
        .map(|v| v.location.pointer.as_str())
        .collect()
}
