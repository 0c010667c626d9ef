//! Templates command - browse the built-in starter schemas.

use super::StyleArgs;
use crate::config::ZodsmithConfig;
use crate::document::{Format, render_schema};
use anyhow::{Result, anyhow};
use clap::Args;
use zodsmith_typegen::generate_module;
use zodsmith_typegen::templates::{template, template_ids, templates};

/// Templates command arguments
#[derive(Args)]
pub struct TemplatesArgs {
    /// Template to print (lists every template if omitted)
    pub id: Option<String>,

    /// Print schema documents as JSON instead of generated code
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Run the templates command
pub fn run(args: TemplatesArgs, config: &ZodsmithConfig) -> Result<()> {
    let Some(id) = &args.id else {
        if args.json {
            let listing: Vec<_> = templates()
                .into_iter()
                .map(|t| {
                    serde_json::json!({
                        "id": t.id,
                        "name": t.name,
                        "description": t.description,
                        "schema": t.schema,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            for t in templates() {
                println!("{:<14} {:<14} {}", t.id, t.name, t.description);
            }
        }
        return Ok(());
    };

    let tpl = template(id).ok_or_else(|| {
        anyhow!(
            "unknown template '{id}' (available: {})",
            template_ids().join(", ")
        )
    })?;

    if args.json {
        println!("{}", render_schema(&tpl.schema, Format::Json)?);
    } else {
        println!("{}", generate_module(&tpl.schema, &args.style.resolve(config)));
    }
    Ok(())
}
