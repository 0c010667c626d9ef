//! Backends command - list registered code generation backends.

use zodsmith_typegen::{BackendCategory, backends};

pub fn run() -> anyhow::Result<()> {
    for backend in backends() {
        let category = match backend.category() {
            BackendCategory::Types => "types",
            BackendCategory::Validators => "validators",
            BackendCategory::Module => "module",
        };
        println!(
            "{:<18} {:<11} {} (.{})",
            backend.name(),
            category,
            backend.language(),
            backend.extension()
        );
    }
    Ok(())
}
