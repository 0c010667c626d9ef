//! Zod schema and TypeScript type generation from field-level schema descriptions.
//!
//! `zodsmith-typegen` turns a [`Schema`](ir::Schema) (an ordered list of typed,
//! constrained fields) into Zod validator source and matching TypeScript type
//! declarations. It also recovers a best-guess schema from pasted TypeScript.
//!
//! # Architecture
//!
//! ```text
//! Input                  IR                Output Backends
//! ──────────────     ─────────────     ─────────────────────────
//! TypeScript    ─┐                  ┌─> Zod schema          (zod)
//! interface/type ├─> Schema ────────┼─> TypeScript types    (typescript)
//! Templates     ─┘   (ir.rs)        ├─> Schema + type       (module)
//!                                   └─> Explicit + inferred (typescript-module)
//! ```
//!
//! # Example
//!
//! ```
//! use zodsmith_typegen::ir::{Field, FieldKind, NumberRules, Rules, Schema};
//! use zodsmith_typegen::{OutputConfig, generate_module};
//!
//! let schema = Schema::new("User").with_fields(vec![
//!     Field::required("name", Rules::default_for(FieldKind::String)),
//!     Field::optional(
//!         "age",
//!         Rules::Number(NumberRules { int: true, ..Default::default() }),
//!     ),
//! ]);
//!
//! let code = generate_module(&schema, &OutputConfig::default());
//! assert!(code.contains("export const UserSchema = z.object({"));
//! assert!(code.contains("  age: z.number().int().optional()"));
//! assert!(code.ends_with("export type User = z.infer<typeof UserSchema>;"));
//! ```
//!
//! # Using the Backend Registry
//!
//! ```ignore
//! use zodsmith_typegen::{backend_names, get_backend};
//!
//! for name in backend_names() {
//!     println!("Backend: {}", name);
//! }
//!
//! if let Some(backend) = get_backend("typescript") {
//!     let output = backend.generate(&schema, &config);
//!     println!("{}", output);
//! }
//! ```
//!
//! # Feature Flags
//!
//! Backend flags (use `backend-*` prefix):
//! - `backend-zod` - Zod schema declarations
//! - `backend-typescript` - TypeScript interfaces, type aliases and inferred aliases
//! - `backend-module` - schema and type in one unit (implies both of the above)
//!
//! Other flags:
//! - `input-typescript` - regex-based importer for TypeScript declarations
//! - `templates` - built-in starter schemas

pub mod input;
pub mod ir;
pub mod output;
pub mod registry;
#[cfg(feature = "templates")]
pub mod templates;
pub mod traits;

use ir::Schema;

// Re-export commonly used items
pub use input::ImportError;
#[cfg(feature = "input-typescript")]
pub use input::parse_typescript_types;
pub use output::{OutputConfig, TypeStyle};

// Re-export traits
pub use traits::{Backend, BackendCategory};

// Re-export registry functions
pub use registry::{backend_names, backends, backends_by_category, get_backend, register_backend};

// Re-export generators
#[cfg(feature = "backend-zod")]
pub use output::generate_zod;

#[cfg(feature = "backend-typescript")]
pub use output::{generate_type_module, generate_typescript_types};

#[cfg(feature = "backend-module")]
pub use output::generate_module;

// Re-export backend structs
#[cfg(feature = "backend-zod")]
pub use output::zod::ZodBackend;

#[cfg(feature = "backend-typescript")]
pub use output::typescript::{TypeModuleBackend, TypeScriptBackend};

#[cfg(feature = "backend-module")]
pub use output::module::ModuleBackend;

/// Emit the Zod schema declaration for `schema`.
#[cfg(feature = "backend-zod")]
pub fn generate_schema(schema: &Schema, config: &OutputConfig) -> String {
    generate_zod(schema, config)
}

/// Emit the TypeScript type for `schema` in the configured [`TypeStyle`].
#[cfg(feature = "backend-typescript")]
pub fn generate_type(schema: &Schema, config: &OutputConfig) -> String {
    generate_typescript_types(schema, config)
}

/// Recover a schema from pasted TypeScript.
#[cfg(feature = "input-typescript")]
pub fn import_schema(source: &str) -> Result<Schema, ImportError> {
    parse_typescript_types(source)
}
