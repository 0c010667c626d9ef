//! Field model shared by every emitter and the importer.
//!
//! A [`Schema`] is an ordered list of [`Field`]s. Each field carries a [`Rules`]
//! value whose variant *is* the field's kind, so a rule record can never
//! disagree with the kind it is attached to.

use serde::{Deserialize, Serialize};

/// The closed set of field categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Text.
    #[default]
    String,
    /// Numeric.
    Number,
    Boolean,
    /// Temporal.
    Date,
    /// Enumerated string literals.
    Enum,
    /// Collection of a single element kind.
    Array,
}

impl FieldKind {
    pub const ALL: [FieldKind; 6] = [
        FieldKind::String,
        FieldKind::Number,
        FieldKind::Boolean,
        FieldKind::Date,
        FieldKind::Enum,
        FieldKind::Array,
    ];

    /// Wire name of the kind (`"string"`, `"number"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Date => "date",
            FieldKind::Enum => "enum",
            FieldKind::Array => "array",
        }
    }

    /// Whether this kind can be used as a collection element without
    /// degrading to `unknown`.
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            FieldKind::String | FieldKind::Number | FieldKind::Boolean | FieldKind::Date
        )
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constraints for text fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StringRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Exact length. Takes precedence over `min`/`max` when emitting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    pub email: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub url: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub uuid: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub cuid: bool,
    /// Regular expression body, emitted verbatim between slashes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub includes: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub trim: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub to_lower_case: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub to_upper_case: bool,
}

/// Constraints for numeric fields.
///
/// The sign flags are independent: nothing stops more than one of them from
/// being set, and every set flag is emitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "is_false")]
    pub int: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub positive: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub negative: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub nonpositive: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub nonnegative: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    #[serde(skip_serializing_if = "is_false")]
    pub finite: bool,
}

/// Temporal bounds, stored as ISO-8601 strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

/// Constraints for collection fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArrayRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    /// Suppresses `length`, `min` and `max` when set.
    #[serde(skip_serializing_if = "is_false")]
    pub nonempty: bool,
    /// Element kind. Non-primitive kinds degrade to `unknown` elements.
    pub item_type: FieldKind,
    /// Element constraints. Carried through serialization but not emitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_validations: Option<Box<Rules>>,
}

/// Permitted literal values, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumRules {
    pub values: Vec<String>,
}

/// Boolean fields take no constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BooleanRules {}

/// Kind-specific constraints. The variant determines the field kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "validations", rename_all = "lowercase")]
pub enum Rules {
    String(StringRules),
    Number(NumberRules),
    Boolean(BooleanRules),
    Date(DateRules),
    Enum(EnumRules),
    Array(ArrayRules),
}

impl Rules {
    /// The empty rule record for `kind`.
    pub fn default_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::String => Rules::String(StringRules::default()),
            FieldKind::Number => Rules::Number(NumberRules::default()),
            FieldKind::Boolean => Rules::Boolean(BooleanRules::default()),
            FieldKind::Date => Rules::Date(DateRules::default()),
            FieldKind::Enum => Rules::Enum(EnumRules::default()),
            FieldKind::Array => Rules::Array(ArrayRules::default()),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Rules::String(_) => FieldKind::String,
            Rules::Number(_) => FieldKind::Number,
            Rules::Boolean(_) => FieldKind::Boolean,
            Rules::Date(_) => FieldKind::Date,
            Rules::Enum(_) => FieldKind::Enum,
            Rules::Array(_) => FieldKind::Array,
        }
    }

    /// Enum rules over `values`, preserving order.
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Rules::Enum(EnumRules {
            values: values.into_iter().map(Into::into).collect(),
        })
    }

    /// Array rules with `item_type` elements and no length constraints.
    pub fn array_of(item_type: FieldKind) -> Self {
        Rules::Array(ArrayRules {
            item_type,
            ..Default::default()
        })
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules::default_for(FieldKind::default())
    }
}

/// One named, typed, constrained member of a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub required: bool,
    pub nullable: bool,
    /// Raw default text as typed in the editor. Empty is treated as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub rules: Rules,
}

impl Field {
    pub fn required(name: impl Into<String>, rules: Rules) -> Self {
        Self {
            name: name.into(),
            required: true,
            nullable: false,
            default_value: None,
            description: None,
            rules,
        }
    }

    pub fn optional(name: impl Into<String>, rules: Rules) -> Self {
        Self {
            required: false,
            ..Self::required(name, rules)
        }
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn kind(&self) -> FieldKind {
        self.rules.kind()
    }

    /// Change the field's kind. Rules are reset to the new kind's defaults;
    /// setting the current kind again keeps them.
    pub fn set_kind(&mut self, kind: FieldKind) {
        if self.kind() != kind {
            self.rules = Rules::default_for(kind);
        }
    }

    /// The default value, if present and non-empty.
    pub fn default_text(&self) -> Option<&str> {
        self.default_value.as_deref().filter(|v| !v.is_empty())
    }

    /// The description, if present and non-empty.
    pub fn doc(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// A named, ordered collection of fields. Field order is emission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Remove the first field called `name`, returning it.
    pub fn remove_field(&mut self, name: &str) -> Option<Field> {
        let index = self.fields.iter().position(|f| f.name == name)?;
        Some(self.fields.remove(index))
    }

    /// Move the field at `from` so it ends up at `to`.
    ///
    /// Out-of-range indices leave the schema untouched.
    pub fn move_field(&mut self, from: usize, to: usize) {
        if from >= self.fields.len() || to >= self.fields.len() {
            return;
        }
        let field = self.fields.remove(from);
        self.fields.insert(to, field);
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The description, if present and non-empty.
    pub fn doc(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
