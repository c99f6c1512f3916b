//! Borrowed views over the parts of an API description that rules inspect.
//!
//! The views never copy the underlying tree; they pair a node with the
//! pointer that locates it, so rules can report findings without re-walking
//! the document.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::document::{key_to_string, Document};

/// HTTP methods that identify operations under a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
}

impl HttpMethod {
    /// Parses a path item key; keys that are not methods yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "patch" => Some(Self::Patch),
            "delete" => Some(Self::Delete),
            "head" => Some(Self::Head),
            "options" => Some(Self::Options),
            _ => None,
        }
    }

    /// Lowercase name, as written in the document.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::Head => "head",
            Self::Options => "options",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    /// `in: query`
    Query,
    /// `in: path`
    Path,
    /// `in: header`
    Header,
    /// `in: body` (Swagger 2)
    Body,
    /// `in: formData` (Swagger 2)
    FormData,
    /// `in: cookie` (OpenAPI 3)
    Cookie,
}

impl ParameterLocation {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "query" => Some(Self::Query),
            "path" => Some(Self::Path),
            "header" => Some(Self::Header),
            "body" => Some(Self::Body),
            "formData" => Some(Self::FormData),
            "cookie" => Some(Self::Cookie),
            _ => None,
        }
    }
}

/// A path key and its path item mapping.
#[derive(Debug, Clone, Copy)]
pub struct PathItem<'a> {
    /// The URL template, e.g. `/pets/{pet_id}`.
    pub path: &'a str,
    /// The path item mapping.
    pub item: &'a Mapping,
}

impl<'a> PathItem<'a> {
    /// Creates a new path item view.
    #[must_use]
    pub fn new(path: &'a str, item: &'a Mapping) -> Self {
        Self { path, item }
    }

    /// Pointer to this path item.
    #[must_use]
    pub fn pointer(&self) -> String {
        format!("paths/\"{}\"", self.path)
    }

    /// Operations in document order.
    #[must_use]
    pub fn operations(&self) -> Vec<Operation<'a>> {
        let path_item = *self;
        self.item
            .iter()
            .filter_map(|(key, value)| {
                let method = HttpMethod::from_key(key.as_str()?)?;
                Some(Operation {
                    path_item,
                    method,
                    def: value.as_mapping()?,
                })
            })
            .collect()
    }

    /// Path-level parameters shared by every operation.
    #[must_use]
    pub fn parameters(&self) -> Vec<Parameter<'a>> {
        collect_parameters(self.item, &self.pointer())
    }
}

/// An HTTP method and its operation mapping.
#[derive(Debug, Clone, Copy)]
pub struct Operation<'a> {
    /// The path item that declares this operation.
    pub path_item: PathItem<'a>,
    /// The HTTP method.
    pub method: HttpMethod,
    /// The operation mapping.
    pub def: &'a Mapping,
}

impl<'a> Operation<'a> {
    /// The URL template of the owning path.
    #[must_use]
    pub fn path(&self) -> &'a str {
        self.path_item.path
    }

    /// Pointer to this operation.
    #[must_use]
    pub fn pointer(&self) -> String {
        format!("{}/{}", self.path_item.pointer(), self.method.as_str())
    }

    /// Parameters declared on the operation itself.
    #[must_use]
    pub fn parameters(&self) -> Vec<Parameter<'a>> {
        collect_parameters(self.def, &self.pointer())
    }

    /// Path-level parameters followed by operation parameters.
    #[must_use]
    pub fn effective_parameters(&self) -> Vec<Parameter<'a>> {
        let mut params = self.path_item.parameters();
        params.extend(self.parameters());
        params
    }

    /// OpenAPI 3 `requestBody`, when given inline.
    #[must_use]
    pub fn request_body(&self) -> Option<&'a Mapping> {
        self.def.get("requestBody").and_then(Value::as_mapping)
    }

    /// Returns true if the operation declares a request body in either dialect.
    #[must_use]
    pub fn declares_body(&self) -> bool {
        self.request_body().is_some()
            || self
                .effective_parameters()
                .iter()
                .any(|p| p.location == Some(ParameterLocation::Body))
    }

    /// Returns true if the operation declares a mandatory request body.
    #[must_use]
    pub fn requires_body(&self) -> bool {
        let body_required = self
            .request_body()
            .and_then(|body| body.get("required"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        body_required
            || self
                .effective_parameters()
                .iter()
                .any(|p| p.location == Some(ParameterLocation::Body) && p.required)
    }

    /// JSON schemas of the OpenAPI 3 request body, with their pointers.
    #[must_use]
    pub fn request_body_schemas(&self) -> Vec<(String, &'a Value)> {
        let Some(body) = self.request_body() else {
            return Vec::new();
        };
        json_media_schemas(body, &format!("{}/requestBody", self.pointer()))
            .into_iter()
            .filter_map(|(pointer, _, schema)| Some((pointer, schema?)))
            .collect()
    }

    /// Responses in document order. OpenAPI 3 responses yield one entry per
    /// JSON media type; Swagger 2 responses yield one entry each.
    #[must_use]
    pub fn responses(&self) -> Vec<Response<'a>> {
        let Some(responses) = self.def.get("responses").and_then(Value::as_mapping) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        for (code, def) in responses {
            let (Some(status), Some(def)) = (key_to_string(code), def.as_mapping()) else {
                continue;
            };
            let pointer = format!("{}/responses/{status}", self.pointer());

            if def.contains_key("content") {
                for (pointer, media_type, schema) in json_media_schemas(def, &pointer) {
                    out.push(Response {
                        pointer,
                        status: status.clone(),
                        media_type,
                        schema,
                    });
                }
            } else {
                out.push(Response {
                    pointer,
                    status,
                    media_type: None,
                    schema: def.get("schema"),
                });
            }
        }
        out
    }
}

/// A single parameter declaration.
#[derive(Debug, Clone)]
pub struct Parameter<'a> {
    /// Pointer to this parameter.
    pub pointer: String,
    /// Parameter name.
    pub name: &'a str,
    /// Declared location, if recognized.
    pub location: Option<ParameterLocation>,
    /// Whether the parameter is mandatory.
    pub required: bool,
    /// Schema of the parameter (body parameters and OpenAPI 3 parameters).
    pub schema: Option<&'a Value>,
}

impl<'a> Parameter<'a> {
    fn from_mapping(def: &'a Mapping, owner: &str) -> Option<Self> {
        if def.contains_key("$ref") {
            return None;
        }
        let name = def.get("name").and_then(Value::as_str)?;
        Some(Self {
            pointer: format!("{owner}/parameters/{name}"),
            name,
            location: def
                .get("in")
                .and_then(Value::as_str)
                .and_then(ParameterLocation::parse),
            required: def.get("required").and_then(Value::as_bool).unwrap_or(false),
            schema: def.get("schema"),
        })
    }
}

/// A response declaration, narrowed to one media type for OpenAPI 3.
#[derive(Debug, Clone)]
pub struct Response<'a> {
    /// Pointer to this response.
    pub pointer: String,
    /// Status code as written (`200`, `4XX`, `default`).
    pub status: String,
    /// Media type for OpenAPI 3 responses.
    pub media_type: Option<&'a str>,
    /// Response body schema.
    pub schema: Option<&'a Value>,
}

impl Response<'_> {
    /// Declared `type` of the body schema.
    #[must_use]
    pub fn schema_type(&self) -> Option<&str> {
        self.schema?.get("type")?.as_str()
    }
}

/// A named property inside a schema.
#[derive(Debug, Clone)]
pub struct SchemaProperty<'a> {
    /// Pointer to this property.
    pub pointer: String,
    /// Property name.
    pub name: &'a str,
    /// Property schema.
    pub schema: &'a Value,
}

/// Collects the properties of a schema, recursing through nested objects,
/// array items and composition keywords. `$ref` schemas are not followed.
#[must_use]
pub fn schema_properties<'a>(owner: &str, schema: &'a Value) -> Vec<SchemaProperty<'a>> {
    let mut out = Vec::new();
    collect_properties(owner, schema, &mut out);
    out
}

fn collect_properties<'a>(owner: &str, schema: &'a Value, out: &mut Vec<SchemaProperty<'a>>) {
    let Some(schema) = schema.as_mapping() else {
        return;
    };

    if let Some(properties) = schema.get("properties").and_then(Value::as_mapping) {
        for (name, property) in properties {
            let Some(name) = name.as_str() else {
                continue;
            };
            let pointer = format!("{owner}/{name}");
            out.push(SchemaProperty {
                pointer: pointer.clone(),
                name,
                schema: property,
            });
            collect_properties(&pointer, property, out);
        }
    }

    if let Some(items) = schema.get("items") {
        collect_properties(&format!("{owner}/items"), items, out);
    }

    for keyword in ["allOf", "oneOf", "anyOf"] {
        if let Some(members) = schema.get(keyword).and_then(Value::as_sequence) {
            for (i, member) in members.iter().enumerate() {
                collect_properties(&format!("{owner}/{keyword}/{i}"), member, out);
            }
        }
    }
}

fn collect_parameters<'a>(owner: &'a Mapping, pointer: &str) -> Vec<Parameter<'a>> {
    owner
        .get("parameters")
        .and_then(Value::as_sequence)
        .map(|params| {
            params
                .iter()
                .filter_map(Value::as_mapping)
                .filter_map(|def| Parameter::from_mapping(def, pointer))
                .collect()
        })
        .unwrap_or_default()
}

/// Media type entries of an OpenAPI 3 `content` mapping whose media type
/// mentions JSON, as `(pointer, media_type, schema)`.
fn json_media_schemas<'a>(
    owner: &'a Mapping,
    pointer: &str,
) -> Vec<(String, Option<&'a str>, Option<&'a Value>)> {
    let Some(content) = owner.get("content").and_then(Value::as_mapping) else {
        return Vec::new();
    };
    content
        .iter()
        .filter_map(|(media_type, def)| {
            let media_type = media_type.as_str()?;
            if !media_type.contains("json") {
                return None;
            }
            Some((
                format!("{pointer}/content/{media_type}"),
                Some(media_type),
                def.get("schema"),
            ))
        })
        .collect()
}

/// The kinds of document nodes rules can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// The whole document.
    Document,
    /// A path key with its path item.
    PathItem,
    /// An operation under a path.
    Operation,
    /// A parameter of a path or operation.
    Parameter,
    /// A response of an operation.
    Response,
    /// A property of a schema.
    SchemaProperty,
}

/// A document node handed to rules during evaluation.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// The whole document.
    Document(&'a Document),
    /// A path key with its path item.
    PathItem(&'a PathItem<'a>),
    /// An operation under a path.
    Operation(&'a Operation<'a>),
    /// A parameter of a path or operation.
    Parameter(&'a Parameter<'a>),
    /// A response of an operation.
    Response(&'a Response<'a>),
    /// A property of a schema.
    SchemaProperty(&'a SchemaProperty<'a>),
}

impl Node<'_> {
    /// The kind of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Document(_) => NodeKind::Document,
            Self::PathItem(_) => NodeKind::PathItem,
            Self::Operation(_) => NodeKind::Operation,
            Self::Parameter(_) => NodeKind::Parameter,
            Self::Response(_) => NodeKind::Response,
            Self::SchemaProperty(_) => NodeKind::SchemaProperty,
        }
    }
}
