pub mod construct;
pub mod header;
pub mod types;

use kgen_core::ir::Docs;
use kgen_core::writer::CodeWriter;

/// Escape `*/` sequences that would prematurely close JSDoc comment blocks.
fn escape_jsdoc(value: &str) -> String {
    value.replace("*/", "*\\/")
}

/// Write a JSDoc block: description lines, then `@default` and `@schema` tags.
pub fn write_docs(w: &mut dyn CodeWriter, docs: &Docs) {
    if docs.is_empty() {
        return;
    }
    w.line("/**");
    if let Some(ref description) = docs.description {
        for line in description.lines() {
            write_doc_line(w, line);
        }
    }
    let has_tags = docs.default_value.is_some() || docs.schema.is_some();
    if docs.description.is_some() && has_tags {
        w.line(" *");
    }
    if let Some(ref default_value) = docs.default_value {
        write_doc_line(w, &format!("@default {default_value}"));
    }
    if let Some(ref schema) = docs.schema {
        write_doc_line(w, &format!("@schema {schema}"));
    }
    w.line(" */");
}

fn write_doc_line(w: &mut dyn CodeWriter, text: &str) {
    let text = escape_jsdoc(text.trim_end());
    if text.is_empty() {
        w.line(" *");
    } else {
        w.line(&format!(" * {text}"));
    }
}
