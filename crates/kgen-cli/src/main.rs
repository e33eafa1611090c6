use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use kgen_core::config::{self, CONFIG_FILE_NAME, KgenConfig};
use kgen_core::ir::TypeDecl;
use kgen_core::parse::discovery::discover_resources;
use kgen_core::parse::document::SchemaDocument;
use kgen_core::transform::ResourceEmitter;
use kgen_core::transform::naming::module_name;
use kgen_core::{GeneratedFile, generate, parse};
use kgen_typescript::TypescriptGenerator;

#[derive(Parser)]
#[command(
    name = "kgen",
    about = "Generate typed constructs from Kubernetes API schemas",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript constructs from a schema document
    Generate {
        /// Path to the schema document (JSON or YAML)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip resources that fail instead of aborting
        #[arg(long)]
        keep_going: bool,
    },

    /// List the resources discovered in a schema document
    List {
        /// Path to the schema document
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Show the declarations each resource would produce
    Inspect {
        /// Path to the schema document
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new kgen configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            keep_going,
        } => cmd_generate(input, output, keep_going),

        Commands::List { input } => cmd_list(input),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "kgen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<KgenConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_document(path: &Path) -> Result<SchemaDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let doc = match ext {
        "yaml" | "yml" => parse::from_yaml(&content),
        _ => parse::from_json(&content),
    }
    .with_context(|| format!("failed to parse {}", path.display()))?;

    log::debug!("loaded {}", path.display());
    Ok(doc)
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

/// Generate the "do not edit" README.
fn readme_content() -> &'static str {
    r#"# Generated Code - Do Not Edit

This directory is generated by kgen.
Any manual changes will be overwritten the next time `kgen generate` is run.

To regenerate, run:
```
kgen generate
```

To customize the generated output, edit your `.kgen.yaml` configuration file.
"#
}

fn cmd_generate(input: Option<PathBuf>, output: Option<PathBuf>, keep_going: bool) -> Result<()> {
    let mut cfg = try_load_config()?.unwrap_or_default();
    cfg.keep_going |= keep_going;
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    let doc = load_document(&input)?;
    let generator = TypescriptGenerator::new(cfg.no_docs);

    eprintln!("Generating {} → {}", input.display(), output_dir.display());
    let files = generate(&generator, &doc, &cfg)?;

    if files.is_empty() {
        eprintln!("No resources to generate.");
        return Ok(());
    }

    fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;

    write_files(&output_dir, &files)?;

    let readme_path = output_dir.join("README.md");
    fs::write(&readme_path, readme_content())
        .with_context(|| format!("failed to write {}", readme_path.display()))?;
    eprintln!("  wrote {}", readme_path.display());

    eprintln!(
        "Generated {} files in {}",
        files.len() + 1, // +1 for README
        output_dir.display()
    );
    Ok(())
}

fn cmd_list(input: PathBuf) -> Result<()> {
    let doc = load_document(&input)?;
    let resources = discover_resources(&doc);

    for resource in &resources {
        let Some(identity) = resource.schema.resource_identity() else {
            continue;
        };
        let marker = if resource.schema.has_property("metadata") {
            ""
        } else {
            " (skipped: no metadata)"
        };
        println!(
            "{}\t{}\t{}{}",
            identity.api_version(),
            identity.kind,
            module_name(identity),
            marker
        );
    }
    eprintln!("{} resources in {}", resources.len(), input.display());
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let doc = load_document(&input)?;
    let summary = build_inspect_summary(&doc, &cfg);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(doc: &SchemaDocument, cfg: &KgenConfig) -> serde_json::Value {
    let emitter = ResourceEmitter::new(doc, cfg.naming);

    let resources: Vec<serde_json::Value> = discover_resources(doc)
        .iter()
        .map(|resource| match emitter.emit(resource) {
            Ok(Some(unit)) => {
                let types: Vec<serde_json::Value> = unit
                    .types
                    .iter()
                    .map(|t: &TypeDecl| serde_json::json!({ "name": t.name(), "kind": t.kind() }))
                    .collect();
                serde_json::json!({
                    "definition": resource.name,
                    "status": "ok",
                    "module": unit.module_name,
                    "kind": unit.construct.name,
                    "api_version": unit.construct.api_version(),
                    "options": unit.options.name(),
                    "types": types,
                })
            }
            Ok(None) => serde_json::json!({
                "definition": resource.name,
                "status": "skipped",
            }),
            Err(e) => serde_json::json!({
                "definition": resource.name,
                "status": "error",
                "error": e.to_string(),
            }),
        })
        .collect();

    serde_json::json!({ "resources": resources })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
