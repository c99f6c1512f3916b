//! Ordered collection of rules handed to the evaluator.

use crate::rule::{Rule, RuleBox};

/// A fixed, ordered set of rules.
///
/// Registry order is the order rules run at each node, and so the order of
/// violations reported for the same node.
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<RuleBox>,
}

impl RuleRegistry {
    /// Creates a registry from rules in their evaluation order.
    #[must_use]
    pub fn new(rules: Vec<RuleBox>) -> Self {
        Self { rules }
    }

    /// Appends a rule.
    #[must_use]
    pub fn with_rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Iterates over the rules in order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Rule + 'static)> {
        self.rules.iter().map(|rule| &**rule)
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Looks up a rule by name or code.
    #[must_use]
    pub fn get(&self, name_or_code: &str) -> Option<&(dyn Rule + 'static)> {
        self.iter()
            .find(|r| r.name() == name_or_code || r.code() == name_or_code)
    }

    /// Keeps only the rules whose name or code is listed, preserving
    /// registry order. Returns the selectors that matched no rule.
    pub fn retain_selected(&mut self, selectors: &[&str]) -> Vec<String> {
        let unknown: Vec<String> = selectors
            .iter()
            .filter(|s| self.get(s).is_none())
            .map(|s| (*s).to_string())
            .collect();
        self.rules
            .retain(|r| selectors.iter().any(|s| r.name() == *s || r.code() == *s));
        unknown
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter().map(Rule::name)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::DocumentContext;
    use crate::model::{Node, NodeKind};
    use crate::types::Violation;

    struct Named(&'static str, &'static str);

    impl Rule for Named {
        fn name(&self) -> &'static str {
            self.0
        }
        fn code(&self) -> &'static str {
            self.1
        }
        fn applies_to(&self) -> &'static [NodeKind] {
            &[]
        }
        fn check(&self, _ctx: &DocumentContext<'_>, _node: &Node<'_>) -> Vec<Violation> {
            Vec::new()
        }
    }

    fn registry() -> RuleRegistry {
        RuleRegistry::default()
            .with_rule(Named("first", "T001"))
            .with_rule(Named("second", "T002"))
            .with_rule(Named("third", "T003"))
    }

    #[test]
    fn preserves_insertion_order() {
        let names: Vec<&str> = registry().iter().map(Rule::name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn get_by_name_or_code() {
        let registry = registry();
        assert_eq!(registry.get("second").map(Rule::code), Some("T002"));
        assert_eq!(registry.get("T003").map(Rule::name), Some("third"));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn retain_selected_keeps_registry_order() {
        let mut registry = registry();
        let unknown = registry.retain_selected(&["third", "T001", "nope"]);
        let names: Vec<&str> = registry.iter().map(Rule::name).collect();
        assert_eq!(names, vec!["first", "third"]);
        assert_eq!(unknown, vec!["nope".to_string()]);
    }
}
