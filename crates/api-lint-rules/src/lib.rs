//! # api-lint-rules
//!
//! Built-in RESTful API guideline rules for api-lint.
//!
//! Each rule checks one guideline and links to its text.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | API001 | `top-level-json-object` | Response bodies must be JSON objects |
//! | API002 | `no-trailing-slash` | Paths must not end with `/` |
//! | API003 | `no-uri-versioning` | No version segments in base paths, servers or paths |
//! | API004 | `pluralized-resource-names` | Resource path segments must be plural |
//! | API005 | `snake-case-properties` | Schema property names must be snake_case |
//! | API006 | `correct-http-methods` | Methods must match their semantics |
//! | API007 | `lowercase-hyphen-path-segments` | Path segments must be lowercase with hyphens |
//! | API008 | `snake-case-query-params` | Query parameter names must be snake_case |
//!
//! ## Usage
//!
//! ```ignore
//! use api_lint_core::{Document, Evaluator};
//!
//! let document = Document::from_file(path)?;
//! let result = Evaluator::builder()
//!     .registry(api_lint_rules::registry())
//!     .build()
//!     .evaluate(&document, path);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod correct_http_methods;
mod inflection;
pub mod lowercase_path_segments;
pub mod no_trailing_slash;
pub mod no_uri_versioning;
pub mod pluralized_resource_names;
mod registry;
pub mod snake_case_properties;
pub mod snake_case_query_params;
#[cfg(test)]
mod test_support;
pub mod top_level_json_object;

pub use correct_http_methods::CorrectHttpMethods;
pub use lowercase_path_segments::LowercasePathSegments;
pub use no_trailing_slash::NoTrailingSlash;
pub use no_uri_versioning::NoUriVersioning;
pub use pluralized_resource_names::PluralizedResourceNames;
pub use registry::{all_rules, registry, registry_from_config};
pub use snake_case_properties::SnakeCaseProperties;
pub use snake_case_query_params::SnakeCaseQueryParams;
pub use top_level_json_object::TopLevelJsonObject;

/// Re-export core types for convenience.
pub use api_lint_core::{Rule, Severity, Violation};
