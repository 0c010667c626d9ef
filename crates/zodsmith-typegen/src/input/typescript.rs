//! Best-effort TypeScript declaration importer.
//!
//! Recovers a [`Schema`] from pasted TypeScript by pattern matching, not by
//! parsing. Recognised constructs:
//!
//! - the first `interface Name { ... }` or `type Name = { ... }` block
//!   (nested braces end the block early)
//! - `name: type` and `name?: type` members, separated by `;`, `,` or newlines
//! - a `null` member anywhere in a union (sets `nullable`)
//! - a trailing `[]` (array of the keyword-matched element kind)
//! - unions of quoted literals (enum)
//! - `string`, `number`/`int`/`float`, `boolean`/`bool`, anything containing `date`
//! - `/** ... */` directly before a member (becomes its description)
//!
//! Everything else is imported as a text field.

use super::ImportError;
use crate::ir::{Field, FieldKind, Rules, Schema};
use regex::Regex;
use std::sync::LazyLock;

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:interface|type)\s+(\w+)\s*(?:=\s*)?\{([^}]+)\}")
        .expect("declaration pattern is valid")
});

/// Doc comment, block comment, line comment, or member.
static MEMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)/\*\*(?<doc>.*?)\*/|/\*.*?\*/|//[^\n]*|(?<name>\w+)(?<optional>\?)?:\s*(?<type>[^;,\n]+)",
    )
    .expect("member pattern is valid")
});

/// Import the first interface or object type alias found in `source`.
///
/// Each call builds a new schema with no description.
pub fn parse_typescript_types(source: &str) -> Result<Schema, ImportError> {
    let Some(decl) = DECLARATION.captures(source) else {
        tracing::debug!("no interface or type block found");
        return Err(ImportError::NoDeclaration);
    };
    let name = &decl[1];
    let body = &decl[2];
    tracing::debug!(name, "found declaration");

    let mut fields = Vec::new();
    let mut pending_doc: Option<String> = None;

    for caps in MEMBER.captures_iter(body) {
        if let Some(doc) = caps.name("doc") {
            pending_doc = clean_doc_comment(doc.as_str());
            continue;
        }
        let (Some(field_name), Some(raw_type)) = (caps.name("name"), caps.name("type")) else {
            // plain comment
            pending_doc = None;
            continue;
        };

        let raw_type = strip_trailing_comment(raw_type.as_str()).trim();
        let required = caps.name("optional").is_none();
        let mut field = classify(field_name.as_str(), raw_type, required);
        field.description = pending_doc.take();

        tracing::debug!(
            field = %field.name,
            raw_type,
            kind = %field.kind(),
            required = field.required,
            nullable = field.nullable,
            "imported field"
        );
        fields.push(field);
    }

    Ok(Schema::new(name).with_fields(fields))
}

/// Turn one raw member type into a field.
fn classify(name: &str, raw_type: &str, required: bool) -> Field {
    let members: Vec<&str> = raw_type
        .split('|')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .collect();
    let nullable = members.contains(&"null");
    let clean = members
        .into_iter()
        .filter(|m| *m != "null")
        .collect::<Vec<_>>()
        .join(" | ");

    let rules = if let Some(element) = clean.strip_suffix("[]") {
        Rules::array_of(keyword_kind(element.trim()))
    } else if let Some(values) = literal_values(&clean) {
        Rules::enumeration(values)
    } else {
        Rules::default_for(keyword_kind(&clean))
    };

    let field = if required {
        Field::required(name, rules)
    } else {
        Field::optional(name, rules)
    };
    field.with_nullable(nullable)
}

/// Literal values of a quoted union, or `None` if the text has no quotes or
/// no value survives quote stripping.
fn literal_values(text: &str) -> Option<Vec<String>> {
    if !text.contains(['\'', '"']) {
        return None;
    }
    let values: Vec<String> = text
        .split('|')
        .map(|v| v.trim().replace(['\'', '"'], ""))
        .filter(|v| !v.is_empty())
        .collect();
    (!values.is_empty()).then_some(values)
}

/// Kind for a type keyword. Unrecognised text is imported as a string.
fn keyword_kind(text: &str) -> FieldKind {
    let lower = text.to_lowercase();
    match lower.as_str() {
        "string" => FieldKind::String,
        "number" | "int" | "float" => FieldKind::Number,
        "boolean" | "bool" => FieldKind::Boolean,
        _ if lower.contains("date") => FieldKind::Date,
        _ => FieldKind::String,
    }
}

/// Cut a `//` or `/*` comment off the end of a member type, ignoring
/// comment markers inside quoted literals.
fn strip_trailing_comment(raw: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut prev = '\0';
    for (i, c) in raw.char_indices() {
        match quote {
            Some(q) if c == q && prev != '\\' => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if prev == '/' && (c == '/' || c == '*') => return &raw[..i - 1],
            None => {}
        }
        prev = c;
    }
    raw
}

fn clean_doc_comment(inner: &str) -> Option<String> {
    let lines: Vec<&str> = inner
        .lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join(" "))
    }
}
