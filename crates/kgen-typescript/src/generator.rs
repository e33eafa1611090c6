use kgen_core::error::EmitError;
use kgen_core::ir::{ResourceUnit, TypeDecl};
use kgen_core::writer::{CodeWriter, TextWriter};
use kgen_core::{CodeGenerator, GeneratedFile};

use crate::emitters;

/// TypeScript construct generator: one `.ts` file per resource.
#[derive(Debug, Clone, Default)]
pub struct TypescriptGenerator {
    pub no_docs: bool,
}

impl TypescriptGenerator {
    pub fn new(no_docs: bool) -> Self {
        Self { no_docs }
    }
}

impl CodeGenerator for TypescriptGenerator {
    fn render(&self, unit: &ResourceUnit) -> Result<GeneratedFile, EmitError> {
        let docs = !self.no_docs;
        let mut w = TextWriter::default();

        emitters::header::emit_header(&mut w, &unit.construct)?;

        w.blank();
        emitters::types::emit_type_decl(&mut w, &unit.options, docs);

        w.blank();
        emitters::construct::emit_construct(
            &mut w,
            &unit.construct,
            has_required_fields(&unit.options),
            docs,
        );

        for decl in &unit.types {
            w.blank();
            emitters::types::emit_type_decl(&mut w, decl, docs);
        }

        log::debug!(
            "rendered {} with {} auxiliary types",
            unit.module_name,
            unit.types.len()
        );

        Ok(GeneratedFile {
            path: format!("{}.ts", unit.module_name),
            content: w.finish(),
        })
    }
}

fn has_required_fields(options: &TypeDecl) -> bool {
    match options {
        TypeDecl::Interface(iface) => iface.fields.iter().any(|f| f.required),
        TypeDecl::Alias(_) | TypeDecl::Union(_) => true,
    }
}
