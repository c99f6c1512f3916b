//! Evaluator that walks a document and applies registered rules.

use crate::config::Config;
use crate::context::DocumentContext;
use crate::document::Document;
use crate::model::{schema_properties, Node, Operation, Parameter, PathItem};
use crate::registry::RuleRegistry;
use crate::types::{LintResult, Violation};

use std::path::Path;
use tracing::{debug, info};

/// Builder for configuring an [`Evaluator`].
#[derive(Default)]
pub struct EvaluatorBuilder {
    registry: RuleRegistry,
    config: Option<Config>,
}

impl EvaluatorBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rules to apply.
    #[must_use]
    pub fn registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the evaluator.
    #[must_use]
    pub fn build(self) -> Evaluator {
        Evaluator {
            registry: self.registry,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Applies a rule registry to documents.
///
/// Use [`Evaluator::builder()`] to construct an instance.
#[derive(Debug)]
pub struct Evaluator {
    registry: RuleRegistry,
    config: Config,
}

impl Evaluator {
    /// Creates a new builder for configuring an evaluator.
    #[must_use]
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.registry.len()
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluates a document and returns every violation in traversal order.
    ///
    /// A document without `paths` has nothing to check and yields an empty
    /// result.
    pub fn evaluate(&self, document: &Document, path: &Path) -> LintResult {
        info!("Evaluating {} with {} rules", path.display(), self.rule_count());

        let mut walk = Walk {
            evaluator: self,
            ctx: DocumentContext::new(path, document),
            result: LintResult::new(),
        };

        if document.paths().is_none() {
            info!("No paths in {}, nothing to check", path.display());
            return walk.result;
        }

        walk.visit(&Node::Document(document));

        for item in document.path_items() {
            walk.path_item(&item);
        }

        for (pointer, schema) in document.named_schemas() {
            walk.properties(&pointer, schema);
        }

        info!(
            "Evaluation complete: {} violations in {} nodes",
            walk.result.violations.len(),
            walk.result.nodes_checked
        );

        walk.result
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }
}

/// State of a single traversal.
struct Walk<'e> {
    evaluator: &'e Evaluator,
    ctx: DocumentContext<'e>,
    result: LintResult,
}

impl Walk<'_> {
    fn path_item(&mut self, item: &PathItem<'_>) {
        self.visit(&Node::PathItem(item));
        for param in item.parameters() {
            self.parameter(&param);
        }

        for op in item.operations() {
            self.operation(&op);
        }
    }

    fn operation(&mut self, op: &Operation<'_>) {
        self.visit(&Node::Operation(op));
        for param in op.parameters() {
            self.parameter(&param);
        }

        for (pointer, schema) in op.request_body_schemas() {
            self.properties(&pointer, schema);
        }

        for response in op.responses() {
            self.visit(&Node::Response(&response));
            if let Some(schema) = response.schema {
                self.properties(&response.pointer, schema);
            }
        }
    }

    fn parameter(&mut self, param: &Parameter<'_>) {
        self.visit(&Node::Parameter(param));
        if let Some(schema) = param.schema {
            self.properties(&param.pointer, schema);
        }
    }

    fn properties(&mut self, owner: &str, schema: &serde_yaml::Value) {
        for property in schema_properties(owner, schema) {
            self.visit(&Node::SchemaProperty(&property));
        }
    }

    /// Runs every enabled rule that applies to the node's kind.
    fn visit(&mut self, node: &Node<'_>) {
        let kind = node.kind();
        self.result.nodes_checked += 1;

        for rule in self.evaluator.registry.iter() {
            if !rule.applies_to().contains(&kind) {
                continue;
            }
            if !self.evaluator.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let violations = rule.check(&self.ctx, node);
            if !violations.is_empty() {
                debug!("{} reported {} violation(s)", rule.name(), violations.len());
            }
            let violations = self
                .evaluator
                .apply_severity_override(rule.name(), violations);
            self.result.violations.extend(violations);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeKind;
    use crate::rule::Rule;
    use crate::types::Severity;

    /// Reports every node of the kinds it is given, tagged with its kind.
    struct Tracer(&'static [NodeKind]);

    impl Rule for Tracer {
        fn name(&self) -> &'static str {
            "tracer"
        }
        fn code(&self) -> &'static str {
            "T000"
        }
        fn applies_to(&self) -> &'static [NodeKind] {
            self.0
        }
        fn check(&self, ctx: &DocumentContext<'_>, node: &Node<'_>) -> Vec<Violation> {
            let pointer = match node {
                Node::Document(_) => "document".to_string(),
                Node::PathItem(item) => item.pointer(),
                Node::Operation(op) => op.pointer(),
                Node::Parameter(param) => param.pointer.clone(),
                Node::Response(response) => response.pointer.clone(),
                Node::SchemaProperty(property) => property.pointer.clone(),
            };
            vec![Violation::new(
                self.code(),
                self.name(),
                self.default_severity(),
                ctx.location(pointer),
                format!("{:?}", node.kind()),
            )]
        }
    }

    const ALL_KINDS: &[NodeKind] = &[
        NodeKind::Document,
        NodeKind::PathItem,
        NodeKind::Operation,
        NodeKind::Parameter,
        NodeKind::Response,
        NodeKind::SchemaProperty,
    ];

    fn evaluate(yaml: &str, rule: Tracer, config: Config) -> LintResult {
        let doc = Document::parse(yaml, "api.yaml").unwrap();
        Evaluator::builder()
            .registry(RuleRegistry::default().with_rule(rule))
            .config(config)
            .build()
            .evaluate(&doc, Path::new("api.yaml"))
    }

    fn pointers(result: &LintResult) -> Vec<&str> {
        result
            .violations
            .iter()
            .map(|v| v.location.pointer.as_str())
            .collect()
    }

    #[test]
    fn missing_paths_yields_nothing() {
        let result = evaluate(
            "basePath: /v1\ndefinitions:\n  Pet:\n    properties:\n      petId: {}\n",
            Tracer(ALL_KINDS),
            Config::default(),
        );
        assert!(result.is_clean());
        assert_eq!(result.nodes_checked, 0);
    }

    #[test]
    fn traversal_follows_document_order() {
        let result = evaluate(
            r"
paths:
  /pets:
    parameters:
      - {name: tenant, in: header}
    get:
      parameters:
        - name: filter
          in: body
          schema:
            properties:
              kind: {}
      responses:
        200:
          schema:
            properties:
              total: {}
  /owners: {}
definitions:
  Pet:
    properties:
      name: {}
",
            Tracer(ALL_KINDS),
            Config::default(),
        );

        assert_eq!(
            pointers(&result),
            vec![
                "document",
                "paths/\"/pets\"",
                "paths/\"/pets\"/parameters/tenant",
                "paths/\"/pets\"/get",
                "paths/\"/pets\"/get/parameters/filter",
                "paths/\"/pets\"/get/parameters/filter/kind",
                "paths/\"/pets\"/get/responses/200",
                "paths/\"/pets\"/get/responses/200/total",
                "paths/\"/owners\"",
                "definitions/Pet/name",
            ]
        );
        assert_eq!(result.nodes_checked, 10);
    }

    #[test]
    fn rules_only_see_their_node_kinds() {
        let result = evaluate(
            "paths:\n  /a:\n    get: {}\n  /b:\n    post: {}\n",
            Tracer(&[NodeKind::Operation]),
            Config::default(),
        );
        assert_eq!(pointers(&result), vec!["paths/\"/a\"/get", "paths/\"/b\"/post"]);
        assert!(result.violations.iter().all(|v| v.message == "Operation"));
    }

    #[test]
    fn disabled_rule_is_skipped() {
        let config = Config::parse("[rules.tracer]\nenabled = false\n").unwrap();
        let result = evaluate("paths:\n  /a: {}\n", Tracer(ALL_KINDS), config);
        assert!(result.is_clean());
        assert_eq!(result.nodes_checked, 2);
    }

    #[test]
    fn severity_override_applies() {
        let config = Config::parse("[rules.tracer]\nseverity = \"warning\"\n").unwrap();
        let result = evaluate("paths:\n  /a: {}\n", Tracer(ALL_KINDS), config);
        assert_eq!(result.violations.len(), 2);
        assert!(result
            .violations
            .iter()
            .all(|v| v.severity == Severity::Warning));
    }

    #[test]
    fn evaluation_is_repeatable() {
        let doc = Document::parse(
            "paths:\n  /b:\n    get: {}\n  /a:\n    delete: {}\n",
            "api.yaml",
        )
        .unwrap();
        let evaluator = Evaluator::builder()
            .registry(RuleRegistry::default().with_rule(Tracer(ALL_KINDS)))
            .build();
        let first = evaluator.evaluate(&doc, Path::new("api.yaml"));
        let second = evaluator.evaluate(&doc, Path::new("api.yaml"));
        assert_eq!(first.violations, second.violations);
    }
}
