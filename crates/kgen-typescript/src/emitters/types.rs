use kgen_core::ir::{AliasDecl, InterfaceDecl, TypeDecl, UnionDecl};
use kgen_core::writer::CodeWriter;

use super::write_docs;
use crate::type_mapper::{property_key, type_expr_to_ts};

/// Emit one named declaration.
pub fn emit_type_decl(w: &mut dyn CodeWriter, decl: &TypeDecl, docs: bool) {
    if docs {
        write_docs(w, decl.docs());
    }
    match decl {
        TypeDecl::Interface(iface) => emit_interface(w, iface, docs),
        TypeDecl::Alias(alias) => emit_alias(w, alias),
        TypeDecl::Union(union) => emit_union(w, union),
    }
}

fn emit_interface(w: &mut dyn CodeWriter, iface: &InterfaceDecl, docs: bool) {
    w.open_block(&format!("export interface {} {{", iface.name));
    for (i, field) in iface.fields.iter().enumerate() {
        if docs && i > 0 && !field.docs.is_empty() {
            w.blank();
        }
        if docs {
            write_docs(w, &field.docs);
        }
        let optional = if field.required { "" } else { "?" };
        w.line(&format!(
            "readonly {}{optional}: {};",
            property_key(&field.name),
            type_expr_to_ts(&field.field_type)
        ));
    }
    w.close_block("}");
}

fn emit_alias(w: &mut dyn CodeWriter, alias: &AliasDecl) {
    w.line(&format!(
        "export type {} = {};",
        alias.name,
        type_expr_to_ts(&alias.target)
    ));
}

/// A wrapper class whose only public constructors are the per-variant factories.
fn emit_union(w: &mut dyn CodeWriter, union: &UnionDecl) {
    let mut value_types: Vec<String> = Vec::new();
    for variant in &union.variants {
        let ts = type_expr_to_ts(&variant.kind.type_expr());
        if !value_types.contains(&ts) {
            value_types.push(ts);
        }
    }

    w.open_block(&format!("export class {} {{", union.name));
    for variant in &union.variants {
        w.open_block(&format!(
            "public static {}(value: {}): {} {{",
            variant.factory,
            type_expr_to_ts(&variant.kind.type_expr()),
            union.name
        ));
        w.line(&format!("return new {}(value);", union.name));
        w.close_block("}");
    }
    w.blank();
    w.open_block(&format!(
        "private constructor(public readonly value: {}) {{",
        value_types.join(" | ")
    ));
    w.close_block("}");
    w.close_block("}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use kgen_core::ir::{Docs, FieldDecl, ScalarKind, TypeExpr, UnionVariant};
    use kgen_core::writer::TextWriter;

    fn render(decl: &TypeDecl, docs: bool) -> String {
        let mut w = TextWriter::default();
        emit_type_decl(&mut w, decl, docs);
        w.finish()
    }

    #[test]
    fn test_interface() {
        let decl = TypeDecl::Interface(InterfaceDecl {
            name: "ContainerPort".to_string(),
            docs: Docs::default(),
            fields: vec![
                FieldDecl {
                    name: "containerPort".to_string(),
                    field_type: TypeExpr::Number,
                    required: true,
                    docs: Docs::default(),
                },
                FieldDecl {
                    name: "x-extra".to_string(),
                    field_type: TypeExpr::Map(Box::new(TypeExpr::String)),
                    required: false,
                    docs: Docs::default(),
                },
            ],
        });
        assert_eq!(
            render(&decl, true),
            "export interface ContainerPort {\n  readonly containerPort: number;\n  readonly 'x-extra'?: { [key: string]: string };\n}\n"
        );
    }

    #[test]
    fn test_interface_field_docs_are_separated() {
        let field_docs = Docs {
            description: Some("Protocol.".to_string()),
            ..Default::default()
        };
        let decl = TypeDecl::Interface(InterfaceDecl {
            name: "Port".to_string(),
            docs: Docs::default(),
            fields: vec![
                FieldDecl {
                    name: "a".to_string(),
                    field_type: TypeExpr::String,
                    required: false,
                    docs: field_docs.clone(),
                },
                FieldDecl {
                    name: "b".to_string(),
                    field_type: TypeExpr::String,
                    required: false,
                    docs: field_docs,
                },
            ],
        });
        let out = render(&decl, true);
        assert!(out.contains("  readonly a?: string;\n\n  /**\n   * Protocol.\n   */\n  readonly b?: string;\n"));

        let bare = render(&decl, false);
        assert!(!bare.contains("/**"));
    }

    #[test]
    fn test_alias_with_docs() {
        let decl = TypeDecl::Alias(AliasDecl {
            name: "Time".to_string(),
            docs: Docs {
                description: Some("Time wrapper.".to_string()),
                default_value: None,
                schema: Some("io.k8s.Time".to_string()),
            },
            target: TypeExpr::Timestamp,
        });
        assert_eq!(
            render(&decl, true),
            "/**\n * Time wrapper.\n *\n * @schema io.k8s.Time\n */\nexport type Time = Date;\n"
        );
    }

    #[test]
    fn test_union_factories() {
        let decl = TypeDecl::Union(UnionDecl {
            name: "IntOrString".to_string(),
            docs: Docs::default(),
            variants: vec![
                UnionVariant {
                    kind: ScalarKind::String,
                    factory: "fromString".to_string(),
                },
                UnionVariant {
                    kind: ScalarKind::Integer,
                    factory: "fromInteger".to_string(),
                },
                UnionVariant {
                    kind: ScalarKind::Number,
                    factory: "fromNumber".to_string(),
                },
            ],
        });
        let out = render(&decl, true);
        assert_eq!(out.matches("public static from").count(), 3);
        assert!(out.contains("  public static fromInteger(value: number): IntOrString {\n    return new IntOrString(value);\n  }\n"));
        assert!(out.contains("private constructor(public readonly value: string | number) {"));
    }
}
