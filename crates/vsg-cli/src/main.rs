use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use vsg_core::config::{self, CONFIG_FILE_NAME, VsgConfig};
use vsg_core::load;
use vsg_core::scaffold::Scaffold;
use vsg_core::spec::{KeyOrder, Specification};
use vsg_core::{ScaffoldError, WriteReport};
use vsg_vapor::emitters::models::model_defs;
use vsg_vapor::emitters::routes::route_bindings;
use vsg_vapor::{VaporGenerator, VaporOptions};

#[derive(Parser)]
#[command(name = "vsg", about = "Vapor scaffold generator for OpenAPI documents", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate models, routes and controllers from an OpenAPI document
    Generate {
        /// Path to the OpenAPI document (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Vapor project root to write into
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit paths and schemas in the order the document lists them
        #[arg(long)]
        document_order: bool,

        /// Fail when two schemas or operations map to the same Swift name
        #[arg(long)]
        strict: bool,
    },

    /// Validate an OpenAPI document and summarize what would be generated
    Validate {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Inspect the emission plan for an OpenAPI document
    Inspect {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new vsg configuration
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
            document_order,
            strict,
        } => cmd_generate(input, output, document_order, strict),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "vsg", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<VsgConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let cfg = config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))?;
    if cfg.is_some() {
        log::debug!("using {}", config_path.display());
    }
    Ok(cfg)
}

fn print_report(root: &Path, report: &WriteReport) {
    for path in &report.written {
        eprintln!("  wrote {}", root.join(path).display());
    }
    for failure in &report.failed {
        eprintln!("  FAILED {}: {}", root.join(&failure.path).display(), failure.source);
    }
}

fn cmd_generate(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    document_order: bool,
    strict: bool,
) -> Result<()> {
    let mut cfg = try_load_config()?.unwrap_or_default();
    if document_order {
        cfg.order = KeyOrder::Document;
    }
    cfg.strict |= strict;

    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.unwrap_or_else(|| PathBuf::from(&cfg.output));
    let generator = VaporGenerator::new(VaporOptions::from(&cfg));

    eprintln!("Generating {} → {}", input.display(), output.display());
    let mut scaffold = Scaffold::new(&output).order(cfg.order);

    match scaffold.run(&input, &generator) {
        Ok(report) => {
            print_report(scaffold.root(), &report);
            eprintln!(
                "Generated {} files in {}",
                report.written.len(),
                output.display()
            );
            eprintln!("\nRe-running overwrites these files; keep hand-written logic elsewhere.");
            Ok(())
        }
        Err(ScaffoldError::Write(report)) => {
            print_report(scaffold.root(), &report);
            anyhow::bail!(
                "{} of {} files could not be written to {}",
                report.failed.len(),
                report.failed.len() + report.written.len(),
                output.display()
            )
        }
        Err(e) => Err(e).with_context(|| format!("failed to scaffold from {}", input.display())),
    }
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let spec = load::load(&input).with_context(|| format!("failed to load {}", input.display()))?;

    eprintln!("Valid spec: {}", input.display());
    eprintln!("  Paths: {}", spec.paths.len());
    eprintln!("  Operations: {}", spec.operation_count());
    eprintln!("  Routed: {}", spec.bindings().count());
    let skipped = spec.skipped_operations();
    if skipped > 0 {
        eprintln!("  Skipped (no operationId): {skipped}");
    }
    eprintln!("  Schemas: {}", spec.schemas.len());

    // Also check that the generator accepts it in strict mode
    let strict = VaporGenerator::new(VaporOptions {
        strict: true,
        ..VaporOptions::default()
    });
    match vsg_core::CodeGenerator::generate(&strict, &spec) {
        Ok(files) => eprintln!("  Artifacts: {}", files.len()),
        Err(e) => eprintln!("  warning: {e}"),
    }

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let spec = load::load(&input)
        .with_context(|| format!("failed to load {}", input.display()))?
        .ordered(cfg.order);

    let summary = build_inspect_summary(&spec)?;

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

fn build_inspect_summary(spec: &Specification) -> Result<serde_json::Value> {
    let routes: Vec<serde_json::Value> = route_bindings(spec)
        .iter()
        .map(|route| {
            serde_json::json!({
                "method": route.method,
                "route": route.pattern,
                "handler": route.handler,
                "controller": route.controller,
            })
        })
        .collect();

    let skipped: Vec<serde_json::Value> = spec
        .paths
        .iter()
        .flat_map(|(path, item)| {
            item.operations
                .iter()
                .filter(|(_, op)| op.operation_id.is_none())
                .map(move |(method, _)| {
                    serde_json::json!({
                        "method": method.as_str(),
                        "path": path,
                    })
                })
        })
        .collect();

    let models: Vec<serde_json::Value> = model_defs(spec, false)?
        .iter()
        .map(|model| {
            let fields: Vec<serde_json::Value> = model
                .fields
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "name": f.name,
                        "key": f.key,
                        "type": f.swift_type,
                    })
                })
                .collect();
            serde_json::json!({
                "name": model.name,
                "table": model.table,
                "fields": fields,
            })
        })
        .collect();

    Ok(serde_json::json!({
        "routes": routes,
        "skipped": skipped,
        "models": models,
    }))
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
