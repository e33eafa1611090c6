use crate::error::EmitError;
use crate::ir::{AliasDecl, FieldDecl, InterfaceDecl, TypeDecl};
use crate::parse::schema::SchemaNode;

use super::docs::docs_for;
use super::type_mapper::TypeMapper;
use super::union::model_union;

/// Build the single declaration for a named type.
///
/// `oneOf` becomes a union wrapper, `properties` an interface, and anything else an alias to the
/// node's own mapped type. `definition` is the source definition name, when there is one.
pub fn emit_type(
    name: &str,
    node: &SchemaNode,
    definition: Option<&str>,
    mapper: &mut TypeMapper<'_>,
) -> Result<TypeDecl, EmitError> {
    if node.is_ambiguous() {
        return Err(EmitError::AmbiguousSchema(name.to_string()));
    }
    let docs = docs_for(node, definition);

    if !node.one_of.is_empty() {
        return Ok(TypeDecl::Union(model_union(name, node, docs)?));
    }

    if let Some(ref properties) = node.properties {
        let mut fields = Vec::with_capacity(properties.len());
        for (prop_name, prop) in properties {
            let field_type = mapper.map_type(prop, &format!("{name}.{prop_name}"))?;
            fields.push(FieldDecl {
                name: prop_name.clone(),
                field_type,
                required: node.required.contains(prop_name),
                docs: docs_for(prop, None),
            });
        }
        return Ok(TypeDecl::Interface(InterfaceDecl {
            name: name.to_string(),
            docs,
            fields,
        }));
    }

    let target = mapper.map_type(node, name)?;
    Ok(TypeDecl::Alias(AliasDecl {
        name: name.to_string(),
        docs,
        target,
    }))
}
