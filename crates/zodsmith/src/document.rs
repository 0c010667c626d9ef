//! Schema documents on disk: JSON, YAML or TOML.

use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::Path;
use zodsmith_typegen::ir::Schema;

/// Serialization format of a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Pick a format from the file extension. `-` (stdin) is JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        if path.as_os_str() == "-" {
            return Ok(Format::Json);
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("yaml" | "yml") => Ok(Format::Yaml),
            Some("toml") => Ok(Format::Toml),
            _ => bail!(
                "cannot tell the format of {} (expected .json, .yaml, .yml or .toml)",
                path.display()
            ),
        }
    }
}

/// Read `path` (or stdin for `-`) as text.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Load a schema document, choosing the format from the path.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let format = Format::from_path(path)?;
    let text = read_input(path)?;
    let schema =
        parse_schema(&text, format).with_context(|| format!("invalid schema in {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        schema = %schema.name,
        fields = schema.fields.len(),
        "loaded schema"
    );
    Ok(schema)
}

pub fn parse_schema(text: &str, format: Format) -> Result<Schema> {
    let schema: Schema = match format {
        Format::Json => serde_json::from_str(text)?,
        Format::Yaml => serde_yaml::from_str(text)?,
        Format::Toml => toml::from_str(text)?,
    };
    Ok(schema)
}

pub fn render_schema(schema: &Schema, format: Format) -> Result<String> {
    let text = match format {
        Format::Json => serde_json::to_string_pretty(schema)?,
        Format::Yaml => serde_yaml::to_string(schema)?,
        Format::Toml => toml::to_string(schema)?,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use zodsmith_typegen::ir::{Field, FieldKind, Rules};

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a.json")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("a.yml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.toml")).unwrap(), Format::Toml);
        assert_eq!(Format::from_path(Path::new("-")).unwrap(), Format::Json);
        assert!(Format::from_path(&PathBuf::from("a.ts")).is_err());
    }

    #[test]
    fn same_schema_in_every_format() {
        let json = r#"{
            "name": "User",
            "fields": [
                { "name": "email", "type": "string", "required": true, "nullable": false,
                  "validations": { "email": true } },
                { "name": "active", "type": "boolean", "required": false, "nullable": false,
                  "validations": {} }
            ]
        }"#;
        let yaml = r#"
name: User
fields:
  - name: email
    type: string
    required: true
    nullable: false
    validations:
      email: true
  - name: active
    type: boolean
    required: false
    nullable: false
    validations: {}
"#;
        let toml = r#"
name = "User"

[[fields]]
name = "email"
type = "string"
required = true
nullable = false
validations = { email = true }

[[fields]]
name = "active"
type = "boolean"
required = false
nullable = false
validations = {}
"#;
        let from_json = parse_schema(json, Format::Json).unwrap();
        assert_eq!(from_json.fields[1].kind(), FieldKind::Boolean);
        assert_eq!(parse_schema(yaml, Format::Yaml).unwrap(), from_json);
        assert_eq!(parse_schema(toml, Format::Toml).unwrap(), from_json);
    }

    #[test]
    fn rendered_json_reloads() {
        let schema = Schema::new("Tag").with_fields(vec![
            Field::required("label", Rules::default_for(FieldKind::String)).with_default("new"),
        ]);
        let text = render_schema(&schema, Format::Json).unwrap();
        assert!(text.contains(r#""defaultValue": "new""#));
        assert_eq!(parse_schema(&text, Format::Json).unwrap(), schema);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let json = r#"{ "name": "X", "fields": [
            { "name": "a", "type": "bigint", "required": true, "nullable": false, "validations": {} }
        ] }"#;
        assert!(parse_schema(json, Format::Json).is_err());
    }
}
