//! Traits for code generation backends.

use crate::ir::Schema;
use crate::output::OutputConfig;

/// Category of backend output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCategory {
    /// Static type declarations (interfaces, type aliases).
    Types,
    /// Runtime validators/schemas.
    Validators,
    /// Validators and types in one unit.
    Module,
}

/// A code generation backend.
///
/// Backends transform a [`Schema`] into source text under an [`OutputConfig`].
/// Generation is pure and infallible.
///
/// # Implementing Custom Backends
///
/// ```ignore
/// use zodsmith_typegen::{Backend, BackendCategory, OutputConfig, ir::Schema, register_backend};
///
/// struct JsonSchemaBackend;
///
/// impl Backend for JsonSchemaBackend {
///     fn name(&self) -> &'static str { "json-schema" }
///     fn language(&self) -> &'static str { "json" }
///     fn extension(&self) -> &'static str { "json" }
///     fn category(&self) -> BackendCategory { BackendCategory::Validators }
///     fn generate(&self, schema: &Schema, config: &OutputConfig) -> String { /* ... */ }
/// }
///
/// // Register before first use
/// static JSON_SCHEMA: JsonSchemaBackend = JsonSchemaBackend;
/// register_backend(&JSON_SCHEMA);
/// ```
pub trait Backend: Send + Sync {
    /// Unique backend identifier (e.g., "zod", "typescript", "module").
    fn name(&self) -> &'static str;

    /// Target language.
    fn language(&self) -> &'static str;

    /// File extension for generated code.
    fn extension(&self) -> &'static str;

    /// Category of output.
    fn category(&self) -> BackendCategory;

    /// Generate code from the schema.
    fn generate(&self, schema: &Schema, config: &OutputConfig) -> String;
}
