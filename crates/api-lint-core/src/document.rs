//! Loading of Swagger/OpenAPI documents.

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

use crate::model::PathItem;

/// Stands in for path items declared without a body (`/users:`).
static EMPTY_PATH_ITEM: LazyLock<Mapping> = LazyLock::new(Mapping::new);

/// Errors that can occur while loading a document.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    /// IO error reading the file.
    #[error("Failed to read {path}: {source}")]
    #[diagnostic(code(api_lint::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The file is not UTF-8 text.
    #[error("{path} is not valid UTF-8 text")]
    #[diagnostic(code(api_lint::encoding))]
    Encoding {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying decoding error.
        source: std::string::FromUtf8Error,
    },

    /// YAML/JSON syntax error.
    #[error("Failed to parse {name}: {message}")]
    #[diagnostic(
        code(api_lint::parse),
        help("the API description must be valid YAML or JSON")
    )]
    Parse {
        /// Display name of the document.
        name: String,
        /// Parser error message.
        message: String,
        /// Document text, for rendering the failing line.
        #[source_code]
        src: NamedSource<String>,
        /// Position reported by the parser, if any.
        #[label("syntax error here")]
        span: Option<SourceSpan>,
    },

    /// The document parsed, but its root is not a mapping.
    #[error("{name}: document root must be a mapping, found {found}")]
    #[diagnostic(code(api_lint::structure))]
    NotAMapping {
        /// Display name of the document.
        name: String,
        /// Kind of value found at the root.
        found: &'static str,
    },
}

/// A parsed API description.
///
/// Key order is preserved from the source text, which is what makes the
/// evaluation order (and therefore the report order) deterministic.
#[derive(Debug, Clone, Default)]
pub struct Document {
    name: String,
    root: Mapping,
}

impl Document {
    /// Loads a document from a YAML or JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not UTF-8, does not
    /// parse, or its root is not a mapping.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let content = String::from_utf8(bytes).map_err(|e| LoadError::Encoding {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, path.display().to_string())
    }

    /// Parses a document from YAML or JSON text.
    ///
    /// An empty document is accepted and has nothing to check.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse or its root is not a
    /// mapping.
    pub fn parse(content: &str, name: impl Into<String>) -> Result<Self, LoadError> {
        let name = name.into();
        let parse_error = |e: serde_yaml::Error, name: &str| LoadError::Parse {
            name: name.to_string(),
            message: e.to_string(),
            span: e.location().map(|loc| SourceSpan::from((loc.index(), 1))),
            src: NamedSource::new(name, content.to_string()),
        };

        let mut value: Value = serde_yaml::from_str(content).map_err(|e| parse_error(e, &name))?;
        value.apply_merge().map_err(|e| parse_error(e, &name))?;

        let root = match value {
            Value::Mapping(mapping) => mapping,
            Value::Null => Mapping::new(),
            other => {
                return Err(LoadError::NotAMapping {
                    name,
                    found: kind_of(&other),
                })
            }
        };

        debug!("Loaded {} with {} top-level key(s)", name, root.len());
        Ok(Self { name, root })
    }

    /// Display name of the document (usually its path).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The root mapping.
    #[must_use]
    pub fn root(&self) -> &Mapping {
        &self.root
    }

    /// Returns the `paths` mapping, if present.
    #[must_use]
    pub fn paths(&self) -> Option<&Mapping> {
        self.root.get("paths").and_then(Value::as_mapping)
    }

    /// Iterates over the path items in document order.
    ///
    /// A path key whose value is not a mapping still yields an item, with no
    /// operations or parameters.
    pub fn path_items(&self) -> impl Iterator<Item = PathItem<'_>> {
        self.paths()
            .into_iter()
            .flat_map(|paths| paths.iter())
            .filter_map(|(key, value)| {
                let item = value.as_mapping().unwrap_or(&*EMPTY_PATH_ITEM);
                Some(PathItem::new(key.as_str()?, item))
            })
    }

    /// Swagger 2 `basePath`.
    #[must_use]
    pub fn base_path(&self) -> Option<&str> {
        self.root.get("basePath").and_then(Value::as_str)
    }

    /// OpenAPI 3 `servers[].url` values.
    #[must_use]
    pub fn server_urls(&self) -> Vec<&str> {
        self.root
            .get("servers")
            .and_then(Value::as_sequence)
            .map(|servers| {
                servers
                    .iter()
                    .filter_map(|s| s.get("url").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Named schemas: Swagger 2 `definitions` followed by OpenAPI 3
    /// `components.schemas`, each paired with its pointer prefix.
    #[must_use]
    pub fn named_schemas(&self) -> Vec<(String, &Value)> {
        let definitions = self
            .root
            .get("definitions")
            .and_then(Value::as_mapping)
            .map(|m| ("definitions", m));
        let components = self
            .root
            .get("components")
            .and_then(|c| c.get("schemas"))
            .and_then(Value::as_mapping)
            .map(|m| ("components/schemas", m));

        definitions
            .into_iter()
            .chain(components)
            .flat_map(|(prefix, schemas)| {
                schemas.iter().filter_map(move |(name, schema)| {
                    Some((format!("{prefix}/{}", key_to_string(name)?), schema))
                })
            })
            .collect()
    }
}

/// Reads a mapping key as a string, accepting integer keys such as
/// unquoted status codes.
#[must_use]
pub fn key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
