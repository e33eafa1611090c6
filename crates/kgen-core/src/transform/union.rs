use crate::error::EmitError;
use crate::ir::{Docs, ScalarKind, UnionDecl, UnionVariant};
use crate::parse::schema::{SchemaNode, SchemaType, TypeSet};

use super::naming::factory_name;

/// Model a `oneOf` node as a wrapper with one factory per scalar variant.
pub fn model_union(name: &str, node: &SchemaNode, docs: Docs) -> Result<UnionDecl, EmitError> {
    let mut variants: Vec<UnionVariant> = Vec::with_capacity(node.one_of.len());
    for variant in &node.one_of {
        let kind = scalar_kind(name, variant)?;
        if variants.iter().any(|v| v.kind == kind) {
            log::warn!("{name}: oneOf lists {kind} more than once");
            continue;
        }
        variants.push(UnionVariant {
            kind,
            factory: factory_name(kind),
        });
    }
    Ok(UnionDecl {
        name: name.to_string(),
        docs,
        variants,
    })
}

fn scalar_kind(name: &str, variant: &SchemaNode) -> Result<ScalarKind, EmitError> {
    let unsupported = |found: String| EmitError::UnsupportedUnionVariant {
        context: name.to_string(),
        found,
    };
    if let Some(ref ref_path) = variant.ref_path {
        return Err(unsupported(ref_path.clone()));
    }
    match &variant.schema_type {
        Some(TypeSet::Single(t)) => match SchemaType::from_name(t) {
            Some(SchemaType::String) => Ok(ScalarKind::String),
            Some(SchemaType::Number) => Ok(ScalarKind::Number),
            Some(SchemaType::Integer) => Ok(ScalarKind::Integer),
            Some(SchemaType::Boolean) => Ok(ScalarKind::Boolean),
            _ => Err(unsupported(t.clone())),
        },
        Some(multiple) => Err(unsupported(multiple.describe())),
        None => Err(unsupported("untyped schema".to_string())),
    }
}
