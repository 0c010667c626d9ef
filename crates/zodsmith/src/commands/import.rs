//! Import command - recover a schema document from TypeScript.

use super::StyleArgs;
use crate::config::ZodsmithConfig;
use crate::document::{Format, read_input, render_schema};
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use zodsmith_typegen::{generate_module, import_schema};

const IMPORTED_DESCRIPTION: &str = "Imported from TypeScript";

/// Import command arguments
#[derive(Args)]
pub struct ImportArgs {
    /// TypeScript source holding an interface or type alias, use - for stdin
    pub input: PathBuf,

    /// What to print
    #[arg(short, long, value_enum, default_value = "json")]
    pub emit: Emit,

    #[command(flatten)]
    pub style: StyleArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Emit {
    /// Schema document as JSON
    Json,
    /// Schema document as YAML
    Yaml,
    /// Schema document as TOML
    Toml,
    /// Generated Zod schema and type
    Module,
}

/// Run the import command
pub fn run(args: ImportArgs, config: &ZodsmithConfig) -> Result<()> {
    let source = read_input(&args.input)?;
    let schema = import_schema(&source)?.with_description(IMPORTED_DESCRIPTION);
    tracing::info!(schema = %schema.name, fields = schema.fields.len(), "imported schema");

    let text = match args.emit {
        Emit::Json => render_schema(&schema, Format::Json)?,
        Emit::Yaml => render_schema(&schema, Format::Yaml)?,
        Emit::Toml => render_schema(&schema, Format::Toml)?,
        Emit::Module => generate_module(&schema, &args.style.resolve(config)),
    };
    println!("{}", text.trim_end());
    Ok(())
}
