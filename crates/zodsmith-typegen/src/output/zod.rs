//! Zod schema emitter.
//!
//! Produces the `z.object({ ... })` declaration for a [`Schema`]: the import,
//! an optional doc block, and one member line per field in field order.

use super::rules::{date_literal, rules_expr};
use super::{OutputConfig, push_block_comment, quote_literal};
use crate::ir::{Field, Rules, Schema};
use crate::traits::{Backend, BackendCategory};

/// Zod backend for the registry.
pub struct ZodBackend;

pub static ZOD_BACKEND: ZodBackend = ZodBackend;

impl Backend for ZodBackend {
    fn name(&self) -> &'static str {
        "zod"
    }

    fn language(&self) -> &'static str {
        "typescript"
    }

    fn extension(&self) -> &'static str {
        "ts"
    }

    fn category(&self) -> BackendCategory {
        BackendCategory::Validators
    }

    fn generate(&self, schema: &Schema, config: &OutputConfig) -> String {
        generate_zod(schema, config)
    }
}

/// Generate the Zod schema declaration for `schema`.
pub fn generate_zod(schema: &Schema, config: &OutputConfig) -> String {
    let semi = config.semi();
    let mut lines = vec![format!("import {{ z }} from 'zod'{semi}"), String::new()];

    if let Some(doc) = schema.doc().filter(|_| config.include_comments) {
        push_block_comment(&mut lines, doc, &[]);
    }

    lines.push(format!(
        "{}const {} = z.object({{",
        config.export(),
        config.schema_name(schema)
    ));

    let last = schema.fields.len().saturating_sub(1);
    for (index, field) in schema.fields.iter().enumerate() {
        if let Some(doc) = field.doc().filter(|_| config.include_comments) {
            lines.push(format!("  /** {doc} */"));
        }
        let comma = if index == last { "" } else { "," };
        lines.push(format!("  {}: {}{comma}", field.name, field_expr(field)));
    }

    lines.push(format!("}}){semi}"));

    tracing::trace!(schema = %schema.name, fields = schema.fields.len(), "emitted zod schema");
    lines.join("\n")
}

/// Validation expression for one field, including its modifiers.
///
/// Order: kind expression, `.nullable()`, `.optional()`, `.default(...)`.
pub fn field_expr(field: &Field) -> String {
    let mut code = rules_expr(&field.rules);

    if field.nullable {
        code.push_str(".nullable()");
    }
    if !field.required {
        code.push_str(".optional()");
    }
    if let Some(value) = field.default_text() {
        code.push_str(&format!(".default({})", default_literal(&field.rules, value)));
    }

    code
}

/// Format a raw default value for the field's kind.
///
/// Arrays always default to an empty literal, whatever text was stored.
fn default_literal(rules: &Rules, raw: &str) -> String {
    match rules {
        Rules::String(_) | Rules::Enum(_) => quote_literal(raw),
        Rules::Number(_) => raw.to_string(),
        Rules::Boolean(_) => {
            if raw.eq_ignore_ascii_case("true") {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }
        Rules::Date(_) => date_literal(raw),
        Rules::Array(_) => "[]".to_string(),
    }
}
