use std::fmt;

use super::schemas::{ConstructDecl, TypeDecl};

/// Everything emitted for one resource, in output order.
#[derive(Debug, Clone)]
pub struct ResourceUnit {
    /// Output unit base name, e.g. `apps-deployment-v1`.
    pub module_name: String,
    pub options: TypeDecl,
    pub construct: ConstructDecl,
    /// Auxiliary named types in the order the scheduler drained them.
    pub types: Vec<TypeDecl>,
}

impl ResourceUnit {
    /// Names of every declaration in the unit.
    pub fn declared_names(&self) -> Vec<&str> {
        let mut names = vec![self.options.name(), self.construct.name.as_str()];
        names.extend(self.types.iter().map(TypeDecl::name));
        names
    }
}

/// Documentation attached to a declaration or field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Docs {
    pub description: Option<String>,
    /// Captured from a "Defaults to X" / "Default is X" sentence, verbatim.
    pub default_value: Option<String>,
    /// Definition name the declaration was generated from.
    pub schema: Option<String>,
}

impl Docs {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.default_value.is_none() && self.schema.is_none()
    }
}

/// A resolved type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    String,
    /// `integer` and `number` collapse here.
    Number,
    Boolean,
    Timestamp,
    Array(Box<TypeExpr>),
    /// String-keyed map to the value type.
    Map(Box<TypeExpr>),
    /// Reference to a named declaration.
    Ref(String),
}

/// Primitive kinds allowed as `oneOf` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Number,
    Integer,
    Boolean,
}

impl ScalarKind {
    pub fn type_expr(&self) -> TypeExpr {
        match self {
            ScalarKind::String => TypeExpr::String,
            ScalarKind::Number | ScalarKind::Integer => TypeExpr::Number,
            ScalarKind::Boolean => TypeExpr::Boolean,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::String => "string",
            ScalarKind::Number => "number",
            ScalarKind::Integer => "integer",
            ScalarKind::Boolean => "boolean",
        };
        f.write_str(name)
    }
}
