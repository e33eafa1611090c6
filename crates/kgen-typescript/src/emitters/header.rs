use kgen_core::error::EmitError;
use kgen_core::ir::ConstructDecl;
use kgen_core::writer::CodeWriter;
use minijinja::{Environment, context};

/// Module imports every generated file needs: `(name, module)`.
const IMPORTS: [(&str, &str); 2] = [("ApiObject", "cdk8s"), ("Construct", "constructs")];

/// Emit the generated-file banner and imports.
pub fn emit_header(w: &mut dyn CodeWriter, construct: &ConstructDecl) -> Result<(), EmitError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("header.ts.j2", include_str!("../../templates/header.ts.j2"))
        .map_err(|e| EmitError::Render(format!("header template: {e}")))?;
    let tmpl = env
        .get_template("header.ts.j2")
        .map_err(|e| EmitError::Render(format!("header template: {e}")))?;

    let imports: Vec<minijinja::Value> = IMPORTS
        .iter()
        .map(|(name, module)| context! { name => name, module => module })
        .collect();

    let rendered = tmpl
        .render(context! {
            definition => construct.definition.clone(),
            api_version => construct.api_version(),
            kind => construct.identity.kind.clone(),
            imports => imports,
        })
        .map_err(|e| EmitError::Render(format!("header for {}: {e}", construct.name)))?;

    for line in rendered.trim_end().lines() {
        w.line(line);
    }
    Ok(())
}
