use super::document::SchemaDocument;
use super::schema::SchemaNode;
use crate::error::EmitError;

const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Looks up local `#/definitions/<name>` references within one document.
#[derive(Debug, Clone, Copy)]
pub struct RefResolver<'a> {
    doc: &'a SchemaDocument,
}

impl<'a> RefResolver<'a> {
    pub fn new(doc: &'a SchemaDocument) -> Self {
        Self { doc }
    }

    /// Resolve a `$ref` string to the definition it points at.
    pub fn resolve(&self, ref_path: &str) -> Result<&'a SchemaNode, EmitError> {
        let name = parse_ref_name(ref_path)?;
        self.doc
            .definitions
            .as_ref()
            .and_then(|defs| defs.get(name))
            .ok_or_else(|| EmitError::UnresolvedReference(ref_path.to_string()))
    }
}

/// Parse a `$ref` like `#/definitions/io.k8s.api.core.v1.PodSpec` and extract the definition name.
pub fn parse_ref_name(ref_path: &str) -> Result<&str, EmitError> {
    ref_path
        .strip_prefix(DEFINITIONS_PREFIX)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| EmitError::UnresolvedReference(ref_path.to_string()))
}

/// The local `$ref` string pointing at definition `name`.
pub fn definition_ref(name: &str) -> String {
    format!("{DEFINITIONS_PREFIX}{name}")
}
