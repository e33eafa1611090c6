use super::types::{Docs, ScalarKind, TypeExpr};
use crate::parse::schema::ResourceIdentity;

/// A named declaration emitted exactly once per resource.
#[derive(Debug, Clone)]
pub enum TypeDecl {
    Interface(InterfaceDecl),
    Alias(AliasDecl),
    Union(UnionDecl),
}

impl TypeDecl {
    pub fn name(&self) -> &str {
        match self {
            TypeDecl::Interface(i) => &i.name,
            TypeDecl::Alias(a) => &a.name,
            TypeDecl::Union(u) => &u.name,
        }
    }

    pub fn docs(&self) -> &Docs {
        match self {
            TypeDecl::Interface(i) => &i.docs,
            TypeDecl::Alias(a) => &a.docs,
            TypeDecl::Union(u) => &u.docs,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TypeDecl::Interface(_) => "interface",
            TypeDecl::Alias(_) => "alias",
            TypeDecl::Union(_) => "union",
        }
    }
}

/// A structural type with one field per schema property.
#[derive(Debug, Clone)]
pub struct InterfaceDecl {
    pub name: String,
    pub docs: Docs,
    pub fields: Vec<FieldDecl>,
}

/// A property of an interface, in document order.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    /// Property name exactly as written in the schema.
    pub name: String,
    pub field_type: TypeExpr,
    pub required: bool,
    pub docs: Docs,
}

/// A type alias (e.g., `type Quantity = string`).
#[derive(Debug, Clone)]
pub struct AliasDecl {
    pub name: String,
    pub docs: Docs,
    pub target: TypeExpr,
}

/// A wrapper holding one value of a closed set of scalar kinds.
///
/// Values can only be built through the per-variant factories.
#[derive(Debug, Clone)]
pub struct UnionDecl {
    pub name: String,
    pub docs: Docs,
    pub variants: Vec<UnionVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionVariant {
    pub kind: ScalarKind,
    /// Factory function name, e.g. `fromString`.
    pub factory: String,
}

/// The resource construct: fixed `apiVersion`/`kind` merged with caller options.
#[derive(Debug, Clone)]
pub struct ConstructDecl {
    pub name: String,
    pub options_name: String,
    /// Definition name in the source document.
    pub definition: String,
    pub identity: ResourceIdentity,
    pub docs: Docs,
}

impl ConstructDecl {
    pub fn api_version(&self) -> String {
        self.identity.api_version()
    }
}
