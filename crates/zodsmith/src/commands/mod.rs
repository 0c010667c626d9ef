//! Subcommands.

pub mod backends;
pub mod generate;
pub mod import;
pub mod templates;

use crate::config::{OutputSection, ZodsmithConfig};
use clap::Args;
use zodsmith_typegen::{OutputConfig, TypeStyle};

/// Emission flags shared by every command that prints code.
#[derive(Args, Debug, Default)]
pub struct StyleArgs {
    /// How the accompanying type is declared: infer, interface or type
    #[arg(long)]
    pub type_style: Option<TypeStyle>,

    /// Suffix for the schema constant (default "Schema")
    #[arg(long)]
    pub schema_suffix: Option<String>,

    /// Suffix for the type name (default none)
    #[arg(long)]
    pub type_suffix: Option<String>,

    /// Omit the `export` keyword
    #[arg(long)]
    pub no_exports: bool,

    /// Omit doc comments
    #[arg(long)]
    pub no_comments: bool,

    /// Omit statement semicolons
    #[arg(long)]
    pub no_semicolons: bool,
}

impl StyleArgs {
    fn section(&self) -> OutputSection {
        OutputSection {
            type_style: self.type_style,
            include_exports: self.no_exports.then_some(false),
            schema_name_suffix: self.schema_suffix.clone(),
            type_name_suffix: self.type_suffix.clone(),
            include_comments: self.no_comments.then_some(false),
            semicolons: self.no_semicolons.then_some(false),
        }
    }

    /// Configured output settings with these flags applied on top.
    pub fn resolve(&self, config: &ZodsmithConfig) -> OutputConfig {
        let mut output = config.output_config();
        self.section().apply(&mut output);
        output
    }
}
