use indexmap::IndexMap;
use serde::Deserialize;

/// A JSON Schema primitive type the engine knows how to map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

impl SchemaType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "integer" => Some(Self::Integer),
            "boolean" => Some(Self::Boolean),
            "array" => Some(Self::Array),
            "object" => Some(Self::Object),
            _ => None,
        }
    }
}

/// The `type` field can be a single type name or an array of names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeSet {
    /// Human-readable form used in error messages.
    pub fn describe(&self) -> String {
        match self {
            TypeSet::Single(t) => t.clone(),
            TypeSet::Multiple(ts) => format!("[{}]", ts.join(", ")),
        }
    }
}

/// `items` is either one schema for every element or a tuple of positional schemas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Items {
    Tuple(Vec<SchemaNode>),
    Single(Box<SchemaNode>),
}

/// `additionalProperties` can be a boolean or a schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Bool(bool),
    Schema(Box<SchemaNode>),
}

/// One `{group, kind, version}` entry of a resource annotation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceIdentity {
    #[serde(default)]
    pub group: String,
    pub kind: String,
    pub version: String,
}

impl ResourceIdentity {
    /// `group/version`, or just `version` for the core group.
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}

/// A JSON Schema fragment. Unknown keywords are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SchemaNode {
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    #[serde(rename = "type")]
    pub schema_type: Option<TypeSet>,

    pub format: Option<String>,

    pub description: Option<String>,

    // Object shape
    pub properties: Option<IndexMap<String, SchemaNode>>,

    #[serde(default)]
    pub required: Vec<String>,

    #[serde(rename = "additionalProperties")]
    pub additional_properties: Option<AdditionalProperties>,

    // Array shape
    pub items: Option<Items>,

    // Composition
    #[serde(rename = "oneOf", default)]
    pub one_of: Vec<SchemaNode>,

    #[serde(rename = "anyOf", default)]
    pub any_of: Vec<SchemaNode>,

    #[serde(rename = "x-kubernetes-group-version-kind", default)]
    pub group_version_kind: Vec<ResourceIdentity>,
}

impl SchemaNode {
    /// Identity of the resource this definition represents; only the first entry counts.
    pub fn resource_identity(&self) -> Option<&ResourceIdentity> {
        self.group_version_kind.first()
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties
            .as_ref()
            .is_some_and(|props| props.contains_key(name))
    }

    /// True when more than one of `$ref`, `oneOf`, `properties` is populated.
    pub fn is_ambiguous(&self) -> bool {
        let discriminators = [
            self.ref_path.is_some(),
            !self.one_of.is_empty(),
            self.properties.is_some(),
        ];
        discriminators.iter().filter(|present| **present).count() > 1
    }
}
