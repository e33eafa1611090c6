pub mod config;
pub mod error;
pub mod ir;
pub mod parse;
pub mod transform;
pub mod writer;

use config::KgenConfig;
use error::{EmitError, GenerateError};
use parse::discovery::discover_resources;
use parse::document::SchemaDocument;
use transform::ResourceEmitter;

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that render one resource unit into a file.
pub trait CodeGenerator {
    fn render(&self, unit: &ir::ResourceUnit) -> Result<GeneratedFile, EmitError>;
}

/// Emit and render every resource in `doc` selected by `config`.
///
/// Resources without `metadata` are skipped. A failing resource aborts the run unless
/// `config.keep_going` is set, in which case it is logged and left out.
pub fn generate(
    generator: &dyn CodeGenerator,
    doc: &SchemaDocument,
    config: &KgenConfig,
) -> Result<Vec<GeneratedFile>, GenerateError> {
    let emitter = ResourceEmitter::new(doc, config.naming);
    let mut files = Vec::new();

    for resource in discover_resources(doc) {
        let selected = resource
            .schema
            .resource_identity()
            .is_some_and(|id| config.includes_kind(&id.kind));
        if !selected {
            continue;
        }

        let rendered = emitter
            .emit(&resource)
            .and_then(|unit| unit.map(|u| generator.render(&u)).transpose());
        match rendered {
            Ok(Some(file)) => files.push(file),
            Ok(None) => {}
            Err(source) if config.keep_going => {
                log::error!("skipping {}: {source}", resource.name);
            }
            Err(source) => {
                return Err(GenerateError {
                    resource: resource.name.to_string(),
                    source,
                });
            }
        }
    }

    Ok(files)
}
