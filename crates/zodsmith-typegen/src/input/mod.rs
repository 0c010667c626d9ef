//! Input parsers.
//!
//! Each parser reads source text and produces a fresh [`Schema`](crate::ir::Schema).

#[cfg(feature = "input-typescript")]
pub mod typescript;

#[cfg(feature = "input-typescript")]
pub use typescript::parse_typescript_types;

/// Why an import produced no schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("no interface or type declaration found")]
    NoDeclaration,
}
