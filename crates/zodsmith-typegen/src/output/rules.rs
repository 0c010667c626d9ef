//! Per-kind Zod validation chains.
//!
//! Each generator maps one kind's rule record to the method-call fragments
//! appended to the kind's base constructor. Fragment order is fixed per kind
//! and is part of the output contract. Absent rules contribute nothing; no
//! generator can fail.

use super::quote_literal;
use crate::ir::{ArrayRules, DateRules, EnumRules, FieldKind, NumberRules, Rules, StringRules};

/// Base constructor for an element of kind `kind`.
///
/// Only primitive kinds have a constructor of their own; enum and array
/// elements degrade to `z.unknown()`.
pub fn element_base(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::String => "z.string()",
        FieldKind::Number => "z.number()",
        FieldKind::Boolean => "z.boolean()",
        FieldKind::Date => "z.date()",
        FieldKind::Enum | FieldKind::Array => "z.unknown()",
    }
}

/// Text rules: length range, formats, patterns, transforms.
pub fn string_chain(rules: &StringRules) -> Vec<String> {
    let mut methods = Vec::new();

    if let Some(length) = rules.length {
        methods.push(format!(".length({length})"));
    } else {
        if let Some(min) = rules.min {
            methods.push(format!(".min({min})"));
        }
        if let Some(max) = rules.max {
            methods.push(format!(".max({max})"));
        }
    }

    for (set, method) in [
        (rules.email, ".email()"),
        (rules.url, ".url()"),
        (rules.uuid, ".uuid()"),
        (rules.cuid, ".cuid()"),
    ] {
        if set {
            methods.push(method.to_string());
        }
    }

    if let Some(regex) = non_empty(&rules.regex) {
        methods.push(format!(".regex(/{regex}/)"));
    }
    if let Some(prefix) = non_empty(&rules.starts_with) {
        methods.push(format!(".startsWith({})", quote_literal(prefix)));
    }
    if let Some(suffix) = non_empty(&rules.ends_with) {
        methods.push(format!(".endsWith({})", quote_literal(suffix)));
    }
    if let Some(needle) = non_empty(&rules.includes) {
        methods.push(format!(".includes({})", quote_literal(needle)));
    }

    for (set, method) in [
        (rules.trim, ".trim()"),
        (rules.to_lower_case, ".toLowerCase()"),
        (rules.to_upper_case, ".toUpperCase()"),
    ] {
        if set {
            methods.push(method.to_string());
        }
    }

    methods
}

/// Numeric rules: integer/finite, range, step, then every sign flag that is set.
pub fn number_chain(rules: &NumberRules) -> Vec<String> {
    let mut methods = Vec::new();

    if rules.int {
        methods.push(".int()".to_string());
    }
    if rules.finite {
        methods.push(".finite()".to_string());
    }

    if let Some(min) = rules.min {
        methods.push(format!(".min({})", format_number(min)));
    }
    if let Some(max) = rules.max {
        methods.push(format!(".max({})", format_number(max)));
    }
    if let Some(step) = rules.multiple_of {
        methods.push(format!(".multipleOf({})", format_number(step)));
    }

    for (set, method) in [
        (rules.positive, ".positive()"),
        (rules.nonnegative, ".nonnegative()"),
        (rules.negative, ".negative()"),
        (rules.nonpositive, ".nonpositive()"),
    ] {
        if set {
            methods.push(method.to_string());
        }
    }

    methods
}

/// Temporal bounds, each as a parsed date literal.
pub fn date_chain(rules: &DateRules) -> Vec<String> {
    let mut methods = Vec::new();
    if let Some(min) = non_empty(&rules.min) {
        methods.push(format!(".min({})", date_literal(min)));
    }
    if let Some(max) = non_empty(&rules.max) {
        methods.push(format!(".max({})", date_literal(max)));
    }
    methods
}

/// Collection size rules. `nonempty` beats `length`, which beats `min`/`max`.
pub fn array_chain(rules: &ArrayRules) -> Vec<String> {
    let mut methods = Vec::new();

    if rules.nonempty {
        methods.push(".nonempty()".to_string());
    } else if let Some(length) = rules.length {
        methods.push(format!(".length({length})"));
    } else {
        if let Some(min) = rules.min {
            methods.push(format!(".min({min})"));
        }
        if let Some(max) = rules.max {
            methods.push(format!(".max({max})"));
        }
    }

    methods
}

/// `z.enum([...])` over the values in order, or `z.never()` when there are none.
pub fn enum_expr(rules: &EnumRules) -> String {
    if rules.values.is_empty() {
        return "z.never()".to_string();
    }
    let values: Vec<String> = rules.values.iter().map(|v| quote_literal(v)).collect();
    format!("z.enum([{}])", values.join(", "))
}

/// Full validation expression for a rule record: base constructor plus chain.
///
/// Modifiers (`.nullable()`, `.optional()`, `.default()`) are the schema
/// emitter's concern and are not included.
pub fn rules_expr(rules: &Rules) -> String {
    match rules {
        Rules::String(r) => concat("z.string()", string_chain(r)),
        Rules::Number(r) => concat("z.number()", number_chain(r)),
        Rules::Boolean(_) => "z.boolean()".to_string(),
        Rules::Date(r) => concat("z.date()", date_chain(r)),
        Rules::Enum(r) => enum_expr(r),
        Rules::Array(r) => concat(
            &format!("z.array({})", element_base(r.item_type)),
            array_chain(r),
        ),
    }
}

/// `new Date('<iso>')`. The stored text is emitted as-is.
pub(crate) fn date_literal(iso: &str) -> String {
    format!("new Date('{iso}')")
}

/// Render a number the way JavaScript prints it: `0`, `150`, `0.5`,
/// `1e+21`, `1.5e-7`, `Infinity`.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exponential = format!("{value:e}");
        return match exponential.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => exponential,
        };
    }
    value.to_string()
}

fn concat(base: &str, methods: Vec<String>) -> String {
    let mut out = base.to_string();
    for method in methods {
        out.push_str(&method);
    }
    out
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
