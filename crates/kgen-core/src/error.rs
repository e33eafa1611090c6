use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document has no definitions map")]
    MissingDefinitions,
}

/// Failures that abort emission of the current resource.
///
/// Each kind is distinct so a caller can decide to skip one resource and continue with the rest.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("definition {0} has no x-kubernetes-group-version-kind annotation")]
    MissingResourceIdentity(String),

    #[error("unresolved reference: {0}")]
    UnresolvedReference(String),

    #[error("{0}: oneOf is only supported on named types, not on properties")]
    UnsupportedUnionProperty(String),

    #[error("{0}: anyOf is not supported")]
    UnsupportedAnyOf(String),

    #[error("{0}: inline object schemas must be extracted into a named definition")]
    UnexpectedInlineObject(String),

    #[error("{0}: array items must be a single schema")]
    UnsupportedTupleItems(String),

    #[error("{context}: unsupported schema type {found}")]
    UnsupportedSchemaType { context: String, found: String },

    #[error("{context}: unsupported oneOf variant {found}")]
    UnsupportedUnionVariant { context: String, found: String },

    #[error("{0}: schema mixes $ref, oneOf and properties")]
    AmbiguousSchema(String),

    #[error("failed to render {0}")]
    Render(String),
}

/// A resource that could not be generated.
#[derive(Debug, Error)]
#[error("failed to generate {resource}")]
pub struct GenerateError {
    pub resource: String,
    #[source]
    pub source: EmitError,
}
