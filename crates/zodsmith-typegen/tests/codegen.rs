//! Integration tests for zodsmith-typegen.

use zodsmith_typegen::ir::{FieldKind, Rules, Schema};
use zodsmith_typegen::output::zod::field_expr;
use zodsmith_typegen::{
    OutputConfig, TypeStyle, generate_module, generate_schema, generate_type,
    generate_type_module, get_backend, import_schema,
};

fn load_fixture(name: &str) -> Schema {
    let path = format!("tests/fixtures/{}.json", name);
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("fixture {} not found", name));
    serde_json::from_str(&content).expect("invalid schema document")
}

fn style(type_style: TypeStyle) -> OutputConfig {
    OutputConfig {
        type_style,
        ..Default::default()
    }
}

// === Schema ===

#[test]
fn schema_every_rule_kind() {
    let output = generate_schema(&load_fixture("order"), &OutputConfig::default());

    insta::assert_snapshot!(output, @r"
import { z } from 'zod';

/**
 * A customer order
 */
export const OrderSchema = z.object({
  /** Order id */
  id: z.string().uuid(),
  code: z.string().length(8).regex(/^[A-Z]+$/).startsWith('OR').trim().toUpperCase(),
  note: z.string().max(500).nullable().optional().default('it\'s new'),
  total: z.number().finite().min(0.5).multipleOf(0.25).positive().nonnegative(),
  quantity: z.number().int().min(1).optional().default(1),
  gift: z.boolean().optional().default(true),
  placedAt: z.date().min(new Date('2020-01-01')).max(new Date('2030-12-31')),
  status: z.enum(['pending', 'shipped', 'it\'s lost']).default('pending'),
  items: z.array(z.string()).nonempty().default([]),
  scores: z.array(z.number()).min(1).max(5).nullable().optional(),
  nested: z.array(z.unknown()),
  never: z.never()
});
");
}

#[test]
fn modifiers_follow_required_and_nullable() {
    let schema = load_fixture("order");
    for field in &schema.fields {
        let expr = field_expr(field);
        assert_eq!(expr.contains(".optional()"), !field.required, "{}", field.name);
        assert_eq!(expr.contains(".nullable()"), field.nullable, "{}", field.name);
        if let (Some(n), Some(o)) = (expr.find(".nullable()"), expr.find(".optional()")) {
            assert!(n < o, "{}: nullable must precede optional", field.name);
        }
    }
}

#[test]
fn enum_values_keep_input_order() {
    let schema = load_fixture("user");
    let status = schema.field("status").unwrap();
    assert_eq!(
        field_expr(status),
        "z.enum(['active', 'inactive', 'pending'])"
    );
}

// === Types ===

#[test]
fn type_interface() {
    let output = generate_type(&load_fixture("order"), &style(TypeStyle::Interface));

    insta::assert_snapshot!(output, @r"
/**
 * A customer order
 */
export interface Order {
  /** Order id */
  id: string;
  code: string;
  note?: string | null;
  total: number;
  quantity?: number;
  gift?: boolean;
  placedAt: Date;
  status: 'pending' | 'shipped' | 'it\'s lost';
  items: string[];
  scores?: number[] | null;
  nested: unknown[];
  never: never;
}
");
}

#[test]
fn interface_and_alias_share_member_lines() {
    let schema = load_fixture("order");
    let interface = generate_type(&schema, &style(TypeStyle::Interface));
    let alias = generate_type(&schema, &style(TypeStyle::Type));

    let members = |text: &str| -> Vec<String> {
        text.lines()
            .filter(|l| l.starts_with("  "))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(members(&interface), members(&alias));
    assert!(interface.contains("export interface Order {"));
    assert!(alias.contains("export type Order = {"));
    assert!(alias.ends_with("\n};"));
    assert!(interface.ends_with("\n}"));
}

#[test]
fn type_infer_is_one_alias() {
    let output = generate_type(&load_fixture("user"), &style(TypeStyle::Infer));

    insta::assert_snapshot!(output, @r"
/**
 * A user schema
 * Inferred from UserSchema
 */
export type User = z.infer<typeof UserSchema>;
");
}

#[test]
fn type_module_explicit_plus_inferred() {
    let output = generate_type_module(&load_fixture("user"), &OutputConfig::default());

    insta::assert_snapshot!(output, @r"
// Explicit TypeScript type
/**
 * A user schema
 */
export type User = {
  /** Unique identifier */
  id: string;
  email: string;
  age?: number | null;
  status: 'active' | 'inactive' | 'pending';
};

// Alternative: Inferred from Zod schema
// export type User = z.infer<typeof UserSchema>;
");
}

// === Module ===

#[test]
fn module_infer() {
    let output = generate_module(&load_fixture("user"), &OutputConfig::default());

    insta::assert_snapshot!(output, @r"
import { z } from 'zod';

/**
 * A user schema
 */
export const UserSchema = z.object({
  /** Unique identifier */
  id: z.string().uuid(),
  email: z.string().email(),
  age: z.number().int().min(0).max(150).nullable().optional(),
  status: z.enum(['active', 'inactive', 'pending'])
});

/**
 * A user schema
 * Inferred from UserSchema
 */
export type User = z.infer<typeof UserSchema>;
");
}

#[test]
fn module_infer_never_repeats_fields() {
    let schema = load_fixture("order");
    let output = generate_module(&schema, &OutputConfig::default());
    for field in &schema.fields {
        let needle = format!("  {}: ", field.name);
        assert_eq!(output.matches(&needle).count(), 1, "{}", field.name);
    }
}

#[test]
fn module_bare_type_alias() {
    let config = OutputConfig {
        type_style: TypeStyle::Type,
        include_exports: false,
        schema_name_suffix: "Validator".into(),
        type_name_suffix: "Shape".into(),
        include_comments: false,
        semicolons: false,
    };
    let output = generate_module(&load_fixture("user"), &config);

    insta::assert_snapshot!(output, @r"
import { z } from 'zod'

const UserValidator = z.object({
  id: z.string().uuid(),
  email: z.string().email(),
  age: z.number().int().min(0).max(150).nullable().optional(),
  status: z.enum(['active', 'inactive', 'pending'])
})

type UserShape = {
  id: string
  email: string
  age?: number | null
  status: 'active' | 'inactive' | 'pending'
}
");
}

// === Backends ===

#[test]
fn registry_matches_free_functions() {
    let schema = load_fixture("user");
    let config = style(TypeStyle::Interface);
    let cases: [(&str, fn(&Schema, &OutputConfig) -> String); 4] = [
        ("zod", generate_schema),
        ("typescript", generate_type),
        ("module", generate_module),
        ("typescript-module", generate_type_module),
    ];
    for (name, generate) in cases {
        let backend = get_backend(name).unwrap();
        assert_eq!(backend.generate(&schema, &config), generate(&schema, &config), "{name}");
    }
}

// === Import ===

#[test]
fn imported_schema_feeds_the_emitters() {
    let schema =
        import_schema("interface User { id: string; age?: number; role: 'admin' | 'user' }")
            .unwrap();
    let output = generate_type(&schema, &style(TypeStyle::Interface));

    insta::assert_snapshot!(output, @r"
export interface User {
  id: string;
  age?: number;
  role: 'admin' | 'user';
}
");
}

#[test]
fn import_recovers_every_member() {
    let schema = import_schema(
        "interface User { id: string; age?: number | null; role: 'a' | 'b'; tags: string[]; ok: boolean }",
    )
    .unwrap();
    assert_eq!(schema.name, "User");
    assert_eq!(schema.fields.len(), 5);

    let shape: Vec<_> = schema
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.kind(), f.required, f.nullable))
        .collect();
    assert_eq!(
        shape,
        [
            ("id", FieldKind::String, true, false),
            ("age", FieldKind::Number, false, true),
            ("role", FieldKind::Enum, true, false),
            ("tags", FieldKind::Array, true, false),
            ("ok", FieldKind::Boolean, true, false),
        ]
    );
    assert_eq!(schema.fields[2].rules, Rules::enumeration(["a", "b"]));
    assert_eq!(schema.fields[3].rules, Rules::array_of(FieldKind::String));
}

#[test]
fn import_failure_is_a_value() {
    assert!(import_schema("function f() { return 1; }").is_err());
}

// === Templates ===

#[test]
fn every_template_generates() {
    for tpl in zodsmith_typegen::templates::templates() {
        let output = generate_module(&tpl.schema, &OutputConfig::default());
        let schema_const = format!("export const {}Schema = z.object({{", tpl.schema.name);
        assert!(output.contains(&schema_const), "{}", tpl.id);
        assert!(!output.contains("z.never()"), "{}", tpl.id);
    }
}
