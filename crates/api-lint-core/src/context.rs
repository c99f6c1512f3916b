//! Context types for rule execution.

use std::path::Path;

use crate::document::Document;
use crate::types::Location;

/// Context provided to rules while a document is evaluated.
#[derive(Debug, Clone, Copy)]
pub struct DocumentContext<'a> {
    /// Path of the document being checked, as given by the caller.
    pub path: &'a Path,
    /// The document being checked.
    pub document: &'a Document,
}

impl<'a> DocumentContext<'a> {
    /// Creates a new document context.
    #[must_use]
    pub fn new(path: &'a Path, document: &'a Document) -> Self {
        Self { path, document }
    }

    /// Builds a location for a pointer inside this document.
    #[must_use]
    pub fn location(&self, pointer: impl Into<String>) -> Location {
        Location::new(self.path, pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn location_joins_path_and_pointer() {
        let doc = Document::default();
        let ctx = DocumentContext::new(Path::new("specs/api.yaml"), &doc);
        let loc = ctx.location("paths/\"/pets\"");
        assert_eq!(loc.file, PathBuf::from("specs/api.yaml"));
        assert_eq!(loc.to_string(), "specs/api.yaml:paths/\"/pets\"");
    }
}
