//! TypeScript type emitter.
//!
//! Renders the static type that accompanies a schema in one of three styles:
//! an `interface` block, a `type` alias block, or a one-line alias inferred
//! from the Zod schema constant. The interface and alias blocks share one
//! member renderer, so they always agree on member lines.

use super::{OutputConfig, TypeStyle, push_block_comment, quote_literal};
use crate::ir::{Field, FieldKind, Rules, Schema};
use crate::traits::{Backend, BackendCategory};

/// TypeScript types backend for the registry.
pub struct TypeScriptBackend;

pub static TYPESCRIPT_BACKEND: TypeScriptBackend = TypeScriptBackend;

impl Backend for TypeScriptBackend {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn language(&self) -> &'static str {
        "typescript"
    }

    fn extension(&self) -> &'static str {
        "ts"
    }

    fn category(&self) -> BackendCategory {
        BackendCategory::Types
    }

    fn generate(&self, schema: &Schema, config: &OutputConfig) -> String {
        generate_typescript_types(schema, config)
    }
}

/// Explicit type plus the commented-out inferred alternative.
pub struct TypeModuleBackend;

pub static TYPE_MODULE_BACKEND: TypeModuleBackend = TypeModuleBackend;

impl Backend for TypeModuleBackend {
    fn name(&self) -> &'static str {
        "typescript-module"
    }

    fn language(&self) -> &'static str {
        "typescript"
    }

    fn extension(&self) -> &'static str {
        "ts"
    }

    fn category(&self) -> BackendCategory {
        BackendCategory::Types
    }

    fn generate(&self, schema: &Schema, config: &OutputConfig) -> String {
        generate_type_module(schema, config)
    }
}

/// Generate the type declaration for `schema` in `config.type_style`.
pub fn generate_typescript_types(schema: &Schema, config: &OutputConfig) -> String {
    match config.type_style {
        TypeStyle::Infer => inferred_alias(schema, config),
        style => explicit_type(schema, config, style),
    }
}

/// Explicit type block followed by the inferred alias as a comment.
///
/// The explicit block is an interface when the configured style is
/// `interface`, and a type alias otherwise.
pub fn generate_type_module(schema: &Schema, config: &OutputConfig) -> String {
    let style = match config.type_style {
        TypeStyle::Interface => TypeStyle::Interface,
        TypeStyle::Infer | TypeStyle::Type => TypeStyle::Type,
    };
    let bare = OutputConfig {
        include_comments: false,
        ..config.clone()
    };

    [
        "// Explicit TypeScript type".to_string(),
        explicit_type(schema, config, style),
        String::new(),
        "// Alternative: Inferred from Zod schema".to_string(),
        format!("// {}", inferred_alias(schema, &bare)),
    ]
    .join("\n")
}

/// `type User = z.infer<typeof UserSchema>;` with an optional doc block.
pub(crate) fn inferred_alias(schema: &Schema, config: &OutputConfig) -> String {
    let schema_name = config.schema_name(schema);
    let mut lines = Vec::new();

    if let Some(doc) = schema.doc().filter(|_| config.include_comments) {
        push_block_comment(&mut lines, doc, &[format!("Inferred from {schema_name}")]);
    }
    lines.push(format!(
        "{}type {} = z.infer<typeof {schema_name}>{}",
        config.export(),
        config.type_name(schema),
        config.semi()
    ));

    lines.join("\n")
}

/// Interface or type-alias block. `style` must not be [`TypeStyle::Infer`].
pub(crate) fn explicit_type(schema: &Schema, config: &OutputConfig, style: TypeStyle) -> String {
    let semi = config.semi();
    let type_name = config.type_name(schema);
    let mut lines = Vec::new();

    if let Some(doc) = schema.doc().filter(|_| config.include_comments) {
        push_block_comment(&mut lines, doc, &[]);
    }

    let (open, close) = match style {
        TypeStyle::Interface => (format!("interface {type_name} {{"), "}".to_string()),
        TypeStyle::Type | TypeStyle::Infer => {
            (format!("type {type_name} = {{"), format!("}}{semi}"))
        }
    };
    lines.push(format!("{}{open}", config.export()));
    lines.extend(member_lines(schema, config));
    lines.push(close);

    lines.join("\n")
}

/// One line per field (plus its doc line when comments are on).
pub(crate) fn member_lines(schema: &Schema, config: &OutputConfig) -> Vec<String> {
    let semi = config.semi();
    let mut lines = Vec::new();
    for field in &schema.fields {
        if let Some(doc) = field.doc().filter(|_| config.include_comments) {
            lines.push(format!("  /** {doc} */"));
        }
        let optional = if field.required { "" } else { "?" };
        lines.push(format!("  {}{optional}: {}{semi}", field.name, field_type(field)));
    }
    lines
}

/// Structural type of a field, with `| null` when nullable.
pub fn field_type(field: &Field) -> String {
    let base = base_type(&field.rules);
    if field.nullable {
        format!("{base} | null")
    } else {
        base
    }
}

/// Structural type for a rule record, ignoring nullability.
pub fn base_type(rules: &Rules) -> String {
    match rules {
        Rules::String(_) => "string".to_string(),
        Rules::Number(_) => "number".to_string(),
        Rules::Boolean(_) => "boolean".to_string(),
        Rules::Date(_) => "Date".to_string(),
        Rules::Array(r) => format!("{}[]", element_type(r.item_type)),
        Rules::Enum(r) if r.values.is_empty() => "never".to_string(),
        Rules::Enum(r) => r
            .values
            .iter()
            .map(|v| quote_literal(v))
            .collect::<Vec<_>>()
            .join(" | "),
    }
}

/// Element type of a collection. Non-primitive kinds become `unknown`.
fn element_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::String => "string",
        FieldKind::Number => "number",
        FieldKind::Boolean => "boolean",
        FieldKind::Date => "Date",
        FieldKind::Enum | FieldKind::Array => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schema {
        Schema::new("User")
            .with_description("A user schema")
            .with_fields(vec![
                Field::required("id", Rules::default()).with_description("Unique id"),
                Field::optional("age", Rules::default_for(FieldKind::Number)).with_nullable(true),
                Field::required("role", Rules::enumeration(["admin", "user"])),
                Field::optional("tags", Rules::array_of(FieldKind::Date)),
            ])
    }

    fn config(style: TypeStyle) -> OutputConfig {
        OutputConfig {
            type_style: style,
            ..Default::default()
        }
    }

    #[test]
    fn interface_block() {
        assert_eq!(
            generate_typescript_types(&sample(), &config(TypeStyle::Interface)),
            "/**\n * A user schema\n */\n\
             export interface User {\n  \
             /** Unique id */\n  \
             id: string;\n  \
             age?: number | null;\n  \
             role: 'admin' | 'user';\n  \
             tags?: Date[];\n\
             }"
        );
    }

    #[test]
    fn type_alias_block() {
        let out = generate_typescript_types(&sample(), &config(TypeStyle::Type));
        assert!(out.contains("export type User = {\n"));
        assert!(out.ends_with("  tags?: Date[];\n};"));
    }

    #[test]
    fn interface_and_alias_share_member_lines() {
        let schema = sample();
        let members = |style| -> Vec<String> {
            generate_typescript_types(&schema, &config(style))
                .lines()
                .filter(|l| l.starts_with("  "))
                .map(String::from)
                .collect()
        };
        assert_eq!(members(TypeStyle::Interface), members(TypeStyle::Type));
        assert_eq!(members(TypeStyle::Interface).len(), 5);
    }

    #[test]
    fn no_semicolons_still_closes_interface_without_one() {
        let cfg = OutputConfig {
            type_style: TypeStyle::Type,
            semicolons: false,
            include_comments: false,
            include_exports: false,
            ..Default::default()
        };
        assert_eq!(
            generate_typescript_types(&Schema::new("A").with_fields(vec![Field::required("x", Rules::default())]), &cfg),
            "type A = {\n  x: string\n}"
        );
    }

    #[test]
    fn inferred_alias_with_doc() {
        let cfg = OutputConfig {
            type_name_suffix: "Type".into(),
            ..Default::default()
        };
        assert_eq!(
            generate_typescript_types(&sample(), &cfg),
            "/**\n * A user schema\n * Inferred from UserSchema\n */\n\
             export type UserType = z.infer<typeof UserSchema>;"
        );
    }

    #[test]
    fn inferred_alias_never_lists_fields() {
        let out = generate_typescript_types(&sample(), &config(TypeStyle::Infer));
        assert!(!out.contains("role"));
        assert_eq!(out.lines().filter(|l| l.contains("type ")).count(), 1);
    }

    #[test]
    fn base_types() {
        assert_eq!(base_type(&Rules::enumeration(Vec::<String>::new())), "never");
        assert_eq!(base_type(&Rules::enumeration(["it's"])), r"'it\'s'");
        assert_eq!(base_type(&Rules::array_of(FieldKind::Enum)), "unknown[]");
        assert_eq!(base_type(&Rules::array_of(FieldKind::Boolean)), "boolean[]");
        assert_eq!(base_type(&Rules::default_for(FieldKind::Date)), "Date");
    }

    #[test]
    fn type_module_comments_out_inferred_alias() {
        let out = generate_type_module(&sample(), &config(TypeStyle::Infer));
        assert!(out.starts_with("// Explicit TypeScript type\n/**\n * A user schema\n */\nexport type User = {"));
        assert!(out.ends_with(
            "};\n\n// Alternative: Inferred from Zod schema\n// export type User = z.infer<typeof UserSchema>;"
        ));

        let out = generate_type_module(&sample(), &config(TypeStyle::Interface));
        assert!(out.contains("export interface User {"));
    }
}
