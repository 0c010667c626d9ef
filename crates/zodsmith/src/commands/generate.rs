//! Generate command - emit code for schema documents.

use super::StyleArgs;
use crate::config::ZodsmithConfig;
use crate::document::load_schema;
use anyhow::{Context, Result, anyhow};
use clap::Args;
use rayon::prelude::*;
use std::path::PathBuf;
use zodsmith_typegen::{backend_names, get_backend};

/// Generate command arguments
#[derive(Args)]
pub struct GenerateArgs {
    /// Schema documents (.json, .yaml, .yml, .toml), use - for JSON on stdin
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output backend (see `zodsmith backends`)
    #[arg(short, long, default_value = "module")]
    pub target: String,

    #[command(flatten)]
    pub style: StyleArgs,

    /// Output file (stdout if not specified)
    #[arg(short, long, conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Write one file per schema into this directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

/// Run the generate command
pub fn run(args: GenerateArgs, config: &ZodsmithConfig) -> Result<()> {
    let backend = get_backend(&args.target).ok_or_else(|| {
        anyhow!(
            "unknown target '{}' (available: {})",
            args.target,
            backend_names().join(", ")
        )
    })?;
    let output_config = args.style.resolve(config);

    let generated = args
        .inputs
        .par_iter()
        .map(|path| -> Result<(String, String)> {
            let schema = load_schema(path)?;
            let code = backend.generate(&schema, &output_config);
            Ok((schema.name, code))
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        for (name, code) in &generated {
            let path = dir.join(format!("{name}.{}", backend.extension()));
            std::fs::write(&path, format!("{code}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), backend = backend.name(), "wrote schema");
            eprintln!("Generated {}", path.display());
        }
        return Ok(());
    }

    let combined = generated
        .into_iter()
        .map(|(_, code)| code)
        .collect::<Vec<_>>()
        .join("\n\n");

    if let Some(path) = &args.output {
        std::fs::write(path, format!("{combined}\n"))
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), backend = backend.name(), "wrote output");
        eprintln!("Generated {}", path.display());
    } else {
        println!("{combined}");
    }
    Ok(())
}
