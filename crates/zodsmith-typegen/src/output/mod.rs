//! Output backends for code generation.
//!
//! Every emitter takes a [`Schema`] plus an [`OutputConfig`] and returns
//! source text. Emitters are pure and never fail. All backends implement the
//! [`Backend`](crate::traits::Backend) trait for uniform access via the registry.

use crate::ir::Schema;
use serde::{Deserialize, Serialize};

// Per-kind validation chains (Zod)
#[cfg(feature = "backend-zod")]
pub mod rules;

// Zod schema declaration
#[cfg(feature = "backend-zod")]
pub mod zod;

#[cfg(feature = "backend-zod")]
pub use zod::{ZodBackend, generate_zod};

// TypeScript interface / type alias / inferred alias
#[cfg(feature = "backend-typescript")]
pub mod typescript;

#[cfg(feature = "backend-typescript")]
pub use typescript::{
    TypeModuleBackend, TypeScriptBackend, generate_type_module, generate_typescript_types,
};

// Schema + type in one unit
#[cfg(feature = "backend-module")]
pub mod module;

#[cfg(feature = "backend-module")]
pub use module::{ModuleBackend, generate_module};

/// How the static type accompanying a schema is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeStyle {
    /// `type User = z.infer<typeof UserSchema>`
    #[default]
    Infer,
    /// `interface User { ... }`
    Interface,
    /// `type User = { ... }`
    Type,
}

impl TypeStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeStyle::Infer => "infer",
            TypeStyle::Interface => "interface",
            TypeStyle::Type => "type",
        }
    }
}

impl std::str::FromStr for TypeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "infer" => Ok(TypeStyle::Infer),
            "interface" => Ok(TypeStyle::Interface),
            "type" => Ok(TypeStyle::Type),
            other => Err(format!(
                "unknown type style '{other}' (expected infer, interface or type)"
            )),
        }
    }
}

/// Emission policy. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    pub type_style: TypeStyle,
    /// Prefix declarations with `export`.
    pub include_exports: bool,
    /// Appended to the schema name for the schema constant (`User` -> `UserSchema`).
    pub schema_name_suffix: String,
    /// Appended to the schema name for the type declaration.
    pub type_name_suffix: String,
    /// Emit doc comments for schema and field descriptions.
    pub include_comments: bool,
    pub semicolons: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            type_style: TypeStyle::Infer,
            include_exports: true,
            schema_name_suffix: "Schema".into(),
            type_name_suffix: String::new(),
            include_comments: true,
            semicolons: true,
        }
    }
}

impl OutputConfig {
    /// Name of the emitted schema constant.
    pub fn schema_name(&self, schema: &Schema) -> String {
        format!("{}{}", schema.name, self.schema_name_suffix)
    }

    /// Name of the emitted type declaration.
    pub fn type_name(&self, schema: &Schema) -> String {
        format!("{}{}", schema.name, self.type_name_suffix)
    }

    pub(crate) fn semi(&self) -> &'static str {
        if self.semicolons { ";" } else { "" }
    }

    pub(crate) fn export(&self) -> &'static str {
        if self.include_exports { "export " } else { "" }
    }
}

/// Quote `value` as a single-quoted string literal, escaping `\` and `'`.
pub fn quote_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Push a `/** ... */` block for `text`, plus any `extra` lines inside it.
pub(crate) fn push_block_comment(lines: &mut Vec<String>, text: &str, extra: &[String]) {
    lines.push("/**".into());
    lines.push(format!(" * {text}"));
    for line in extra {
        lines.push(format!(" * {line}"));
    }
    lines.push(" */".into());
}
