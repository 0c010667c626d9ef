//! Combined module emitter: the Zod schema, a blank line, then the type.

use super::typescript::{explicit_type, inferred_alias};
use super::zod::generate_zod;
use super::{OutputConfig, TypeStyle};
use crate::ir::Schema;
use crate::traits::{Backend, BackendCategory};

/// Schema-plus-type backend for the registry.
pub struct ModuleBackend;

pub static MODULE_BACKEND: ModuleBackend = ModuleBackend;

impl Backend for ModuleBackend {
    fn name(&self) -> &'static str {
        "module"
    }

    fn language(&self) -> &'static str {
        "typescript"
    }

    fn extension(&self) -> &'static str {
        "ts"
    }

    fn category(&self) -> BackendCategory {
        BackendCategory::Module
    }

    fn generate(&self, schema: &Schema, config: &OutputConfig) -> String {
        generate_module(schema, config)
    }
}

/// Generate one source unit holding the schema declaration and its type.
///
/// With [`TypeStyle::Infer`] the type is a single alias over the schema
/// constant emitted just above it; field shapes are never repeated.
pub fn generate_module(schema: &Schema, config: &OutputConfig) -> String {
    let type_block = match config.type_style {
        TypeStyle::Infer => inferred_alias(schema, config),
        style => explicit_type(schema, config, style),
    };
    format!("{}\n\n{type_block}", generate_zod(schema, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Field, FieldKind, Rules};

    fn user() -> Schema {
        Schema::new("User")
            .with_description("A user schema")
            .with_fields(vec![Field::required("name", Rules::default_for(FieldKind::String))])
    }

    fn style(type_style: TypeStyle) -> OutputConfig {
        OutputConfig {
            type_style,
            ..Default::default()
        }
    }

    #[test]
    fn infer_style() {
        let out = generate_module(&user(), &style(TypeStyle::Infer));
        assert!(out.contains("export type User = z.infer<typeof UserSchema>;"));
        assert_eq!(out.matches("name:").count(), 1);
    }

    #[test]
    fn interface_style() {
        let out = generate_module(&user(), &style(TypeStyle::Interface));
        assert!(out.contains("export interface User {"));
        assert!(out.contains("name: string;"));
    }

    #[test]
    fn type_style() {
        let out = generate_module(&user(), &style(TypeStyle::Type));
        assert!(out.contains("export type User = {"));
        assert!(out.contains("name: string;"));
    }

    #[test]
    fn schema_comes_first_separated_by_blank_line() {
        let out = generate_module(&user(), &style(TypeStyle::Infer));
        assert_eq!(
            out,
            "import { z } from 'zod';\n\
             \n\
             /**\n * A user schema\n */\n\
             export const UserSchema = z.object({\n  \
             name: z.string()\n\
             });\n\
             \n\
             /**\n * A user schema\n * Inferred from UserSchema\n */\n\
             export type User = z.infer<typeof UserSchema>;"
        );
    }
}
