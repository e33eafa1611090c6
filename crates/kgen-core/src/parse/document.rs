use indexmap::IndexMap;
use serde::Deserialize;

use super::schema::SchemaNode;

/// A JSON Schema document following the `definitions` convention.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SchemaDocument {
    pub definitions: Option<IndexMap<String, SchemaNode>>,
}

impl SchemaDocument {
    pub fn definition(&self, name: &str) -> Option<&SchemaNode> {
        self.definitions.as_ref()?.get(name)
    }
}
