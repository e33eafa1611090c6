use crate::config::NamingMode;
use crate::error::EmitError;
use crate::ir::TypeExpr;
use crate::parse::schema::{AdditionalProperties, Items, SchemaNode, SchemaType, TypeSet};

use super::naming::type_name_for_ref;
use super::scheduler::EmissionScheduler;

/// A named type waiting to be emitted; resolved lazily when the scheduler drains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredType {
    pub ref_path: String,
}

/// Maps schema nodes to type expressions, scheduling every referenced definition for emission.
pub struct TypeMapper<'s> {
    naming: NamingMode,
    scheduler: &'s mut EmissionScheduler<DeferredType>,
}

impl<'s> TypeMapper<'s> {
    pub fn new(naming: NamingMode, scheduler: &'s mut EmissionScheduler<DeferredType>) -> Self {
        Self { naming, scheduler }
    }

    /// Map a non-top-level node. `context` names the declaration or field for error messages.
    pub fn map_type(&mut self, node: &SchemaNode, context: &str) -> Result<TypeExpr, EmitError> {
        if !node.one_of.is_empty() {
            return Err(EmitError::UnsupportedUnionProperty(context.to_string()));
        }
        if !node.any_of.is_empty() {
            return Err(EmitError::UnsupportedAnyOf(context.to_string()));
        }
        if node.properties.is_some() {
            return Err(EmitError::UnexpectedInlineObject(context.to_string()));
        }
        if let Some(ref ref_path) = node.ref_path {
            return Ok(self.map_ref(ref_path));
        }

        let type_name = match &node.schema_type {
            None => return Ok(TypeExpr::String),
            Some(TypeSet::Single(t)) => t.as_str(),
            Some(multiple @ TypeSet::Multiple(_)) => {
                return Err(unsupported(context, multiple.describe()));
            }
        };

        match SchemaType::from_name(type_name) {
            Some(SchemaType::String) => match node.format.as_deref() {
                Some("date-time") => Ok(TypeExpr::Timestamp),
                _ => Ok(TypeExpr::String),
            },
            Some(SchemaType::Number | SchemaType::Integer) => Ok(TypeExpr::Number),
            Some(SchemaType::Boolean) => Ok(TypeExpr::Boolean),
            Some(SchemaType::Array) => match &node.items {
                Some(Items::Single(items)) => {
                    let element = self.map_type(items, &format!("{context}[]"))?;
                    Ok(TypeExpr::Array(Box::new(element)))
                }
                Some(Items::Tuple(_)) | None => {
                    Err(EmitError::UnsupportedTupleItems(context.to_string()))
                }
            },
            Some(SchemaType::Object) => match &node.additional_properties {
                Some(AdditionalProperties::Schema(value)) => {
                    let value = self.map_type(value, &format!("{context}{{}}"))?;
                    Ok(TypeExpr::Map(Box::new(value)))
                }
                _ => Err(unsupported(
                    context,
                    "object without an additionalProperties schema".to_string(),
                )),
            },
            None => Err(unsupported(context, type_name.to_string())),
        }
    }

    /// Name the referenced definition and make sure it gets emitted.
    fn map_ref(&mut self, ref_path: &str) -> TypeExpr {
        let name = type_name_for_ref(ref_path, self.naming);
        match self.scheduler.origin(&name) {
            Some(existing) if existing != ref_path => {
                log::warn!("{ref_path} and {existing} both map to type {name}; keeping the first");
            }
            Some(_) => {}
            None => {
                self.scheduler.request(
                    &name,
                    ref_path,
                    DeferredType {
                        ref_path: ref_path.to_string(),
                    },
                );
            }
        }
        TypeExpr::Ref(name)
    }
}

fn unsupported(context: &str, found: String) -> EmitError {
    EmitError::UnsupportedSchemaType {
        context: context.to_string(),
        found,
    }
}
