//! # api-lint-core
//!
//! Core framework for checking Swagger/OpenAPI documents against RESTful
//! API guidelines.
//!
//! This crate provides the foundational traits and types for building
//! guideline checks. It includes:
//!
//! - [`Document`] for loading YAML/JSON API descriptions
//! - [`Node`] and the model views rules inspect
//! - [`Rule`] trait and the ordered [`RuleRegistry`]
//! - [`Evaluator`] for walking a document and applying rules
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use api_lint_core::{Document, Evaluator, RuleRegistry};
//!
//! let document = Document::from_file(path)?;
//! let evaluator = Evaluator::builder()
//!     .registry(RuleRegistry::default().with_rule(MyRule::new()))
//!     .build();
//!
//! let result = evaluator.evaluate(&document, path);
//! for violation in &result.violations {
//!     println!("{violation}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod document;
mod evaluator;
mod model;
mod registry;
mod rule;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use config::{Config, ConfigError, RuleConfig};
pub use context::DocumentContext;
pub use document::{key_to_string, Document, LoadError};
pub use evaluator::{Evaluator, EvaluatorBuilder};
pub use model::{
    schema_properties, HttpMethod, Node, NodeKind, Operation, Parameter, ParameterLocation,
    PathItem, Response, SchemaProperty,
};
pub use registry::RuleRegistry;
pub use rule::{Rule, RuleBox};
pub use types::{LintResult, Location, Severity, Suggestion, Violation};
