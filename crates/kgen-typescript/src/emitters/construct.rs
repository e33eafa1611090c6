use kgen_core::ir::{ConstructDecl, Docs};
use kgen_core::writer::CodeWriter;

use super::write_docs;
use crate::type_mapper::escape_single_quoted;

/// Emit the resource construct class.
///
/// `options_required` drops the `= {}` default when the options type has required fields.
pub fn emit_construct(
    w: &mut dyn CodeWriter,
    construct: &ConstructDecl,
    options_required: bool,
    docs: bool,
) {
    if docs {
        let class_docs = Docs {
            schema: Some(construct.definition.clone()),
            ..construct.docs.clone()
        };
        write_docs(w, &class_docs);
    }
    w.open_block(&format!("export class {} extends ApiObject {{", construct.name));

    if docs {
        w.line("/**");
        w.line(&format!(
            " * Defines a \"{}\" API object",
            construct.definition
        ));
        w.line(" * @param scope the scope in which to define this object");
        w.line(" * @param name a scope-local name for the object");
        w.line(" * @param options configuration options");
        w.line(" */");
    }
    let default = if options_required { "" } else { " = {}" };
    w.open_block(&format!(
        "public constructor(scope: Construct, name: string, options: {}{default}) {{",
        construct.options_name
    ));
    w.open_block("super(scope, name, {");
    w.line("...options,");
    w.line(&format!(
        "kind: '{}',",
        escape_single_quoted(&construct.identity.kind)
    ));
    w.line(&format!(
        "apiVersion: '{}',",
        escape_single_quoted(&construct.api_version())
    ));
    w.close_block("});");
    w.close_block("}");

    w.close_block("}");
}
