//! `zodsmith` command-line entry point.

mod commands;
mod config;
mod document;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate Zod schemas and TypeScript types from schema documents.
#[derive(Parser)]
#[command(name = "zodsmith", version, about)]
struct Cli {
    /// Show debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate code from schema documents
    Generate(commands::generate::GenerateArgs),
    /// Recover a schema document from a TypeScript interface or type alias
    Import(commands::import::ImportArgs),
    /// List the built-in templates or print one
    Templates(commands::templates::TemplatesArgs),
    /// List the available code generation backends
    Backends,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = config::ZodsmithConfig::load(&root);

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args, &config),
        Commands::Import(args) => commands::import::run(args, &config),
        Commands::Templates(args) => commands::templates::run(args, &config),
        Commands::Backends => commands::backends::run(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
