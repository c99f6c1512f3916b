//! Rule trait for defining guideline checks.

use crate::context::DocumentContext;
use crate::model::{Node, NodeKind};
use crate::types::{Severity, Violation};

/// A guideline check applied to document nodes.
///
/// The evaluator walks the document once and hands every node whose kind is
/// listed in [`Rule::applies_to`] to [`Rule::check`]. Rules are pure: they
/// must not fail on malformed input, a missing optional field simply means
/// the check does not apply.
///
/// # Example
///
/// ```ignore
/// use api_lint_core::{DocumentContext, Node, NodeKind, Rule, Violation};
///
/// pub struct NoRootPath;
///
/// impl Rule for NoRootPath {
///     fn name(&self) -> &'static str { "no-root-path" }
///     fn code(&self) -> &'static str { "API900" }
///     fn applies_to(&self) -> &'static [NodeKind] { &[NodeKind::PathItem] }
///
///     fn check(&self, ctx: &DocumentContext, node: &Node) -> Vec<Violation> {
///         let Node::PathItem(item) = node else { return Vec::new() };
///         if item.path != "/" {
///             return Vec::new();
///         }
///         vec![Violation::new(
///             self.code(),
///             self.name(),
///             self.default_severity(),
///             ctx.location(item.pointer()),
///             "the root path carries no resource",
///         )]
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-trailing-slash").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "API002").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the URL of the guideline this rule enforces.
    fn guideline(&self) -> Option<&'static str> {
        None
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Node kinds this rule inspects.
    fn applies_to(&self) -> &'static [NodeKind];

    /// Checks a single node and returns any violations found.
    fn check(&self, ctx: &DocumentContext<'_>, node: &Node<'_>) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use std::path::Path;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }
        fn applies_to(&self) -> &'static [NodeKind] {
            &[NodeKind::Document]
        }

        fn check(&self, ctx: &DocumentContext<'_>, _node: &Node<'_>) -> Vec<Violation> {
            vec![Violation::new(
                self.code(),
                self.name(),
                self.default_severity(),
                ctx.location("info"),
                "Test violation",
            )]
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
        assert!(rule.guideline().is_none());
    }

    #[test]
    fn test_rule_check_uses_context_file() {
        let doc = Document::default();
        let ctx = DocumentContext::new(Path::new("api.yaml"), &doc);
        let violations = TestRule.check(&ctx, &Node::Document(&doc));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.file, Path::new("api.yaml"));
        assert_eq!(violations[0].location.pointer, "info");
    }
}
