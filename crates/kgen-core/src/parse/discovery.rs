use super::document::SchemaDocument;
use super::schema::SchemaNode;

/// A definition annotated as a top-level API resource.
#[derive(Debug, Clone, Copy)]
pub struct ResourceSchema<'a> {
    /// Definition name, e.g. `io.k8s.api.apps.v1.Deployment`.
    pub name: &'a str,
    pub schema: &'a SchemaNode,
}

/// Return every definition carrying a group/version/kind annotation, in document order.
pub fn discover_resources(doc: &SchemaDocument) -> Vec<ResourceSchema<'_>> {
    let Some(definitions) = doc.definitions.as_ref() else {
        return Vec::new();
    };
    definitions
        .iter()
        .filter(|(_, schema)| !schema.group_version_kind.is_empty())
        .map(|(name, schema)| ResourceSchema {
            name: name.as_str(),
            schema,
        })
        .collect()
}
