//! Rule to forbid API versions in URIs.
//!
//! # Rationale
//!
//! Versions in the URI (`/v1/orders`) tie clients to a deployment and force
//! every consumer to migrate at once. Compatible evolution and media type
//! versioning are preferred.
//!
//! Checked locations:
//!
//! - Swagger 2 `basePath`
//! - OpenAPI 3 `servers[].url` (path portion only)
//! - every path key
//!
//! Each location is reported at most once.

use api_lint_core::utils::{is_version_segment, static_segments, url_path};
use api_lint_core::{DocumentContext, Node, NodeKind, Rule, Severity, Suggestion, Violation};

/// Rule code for no-uri-versioning.
pub const CODE: &str = "API003";

/// Rule name for no-uri-versioning.
pub const NAME: &str = "no-uri-versioning";

const GUIDELINE: &str = "https://opensource.zalando.com/restful-api-guidelines/#115";

/// Forbids version segments in base paths, server URLs and path keys.
#[derive(Debug, Clone)]
pub struct NoUriVersioning {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoUriVersioning {
    fn default() -> Self {
        Self::new()
    }
}

impl NoUriVersioning {
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

    fn violation(
        &self,
        ctx: &DocumentContext<'_>,
        pointer: String,
        what: &str,
        version: &str,
    ) -> Violation {
        Violation::new(
            CODE,
            NAME,
            self.severity,
            ctx.location(pointer),
            format!("{what} contains the version segment \"{version}\""),
        )
        .with_suggestion(Suggestion::new(
            "Evolve the API compatibly or version through the media type",
        ))
        .with_doc_ref(GUIDELINE)
    }
}

fn version_in(path: &str) -> Option<&str> {
    static_segments(path).find(|s| is_version_segment(s))
}

impl Rule for NoUriVersioning {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Must: Do Not Use URI Versioning"
    }

    fn guideline(&self) -> Option<&'static str> {
        Some(GUIDELINE)
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn applies_to(&self) -> &'static [NodeKind] {
        &[NodeKind::Document, NodeKind::PathItem]
    }

    fn check(&self, ctx: &DocumentContext<'_>, node: &Node<'_>) -> Vec<Violation> {
        match node {
            Node::Document(document) => {
                let mut violations = Vec::new();
                if let Some(base_path) = document.base_path() {
                    if let Some(version) = version_in(base_path) {
                        violations.push(self.violation(
                            ctx,
                            "basePath".to_string(),
                            &format!("basePath \"{base_path}\""),
                            version,
                        ));
                    }
                }
                for (i, url) in document.server_urls().into_iter().enumerate() {
                    if let Some(version) = version_in(url_path(url)) {
                        violations.push(self.violation(
                            ctx,
                            format!("servers/{i}/url"),
                            &format!("server URL \"{url}\""),
                            version,
                        ));
                    }
                }
                violations
            }
            Node::PathItem(item) => version_in(item.path)
                .map(|version| {
                    self.violation(
                        ctx,
                        item.pointer(),
                        &format!("path \"{}\"", item.path),
                        version,
                    )
                })
                .into_iter()
                .collect(),
            _ => Vec::new(),
        }
    }
}
