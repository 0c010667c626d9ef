//! Registry for code generation backends.

use crate::traits::{Backend, BackendCategory};
use std::sync::{OnceLock, PoisonError, RwLock};

/// Global registry of backends.
static BACKENDS: RwLock<Vec<&'static dyn Backend>> = RwLock::new(Vec::new());
static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Register a custom backend.
///
/// Built-in backends are registered automatically on first use. Lookups
/// return the first backend with a matching name, so a custom backend cannot
/// replace a built-in one.
pub fn register_backend(backend: &'static dyn Backend) {
    init_builtin();
    BACKENDS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .push(backend);
}

/// Initialize built-in backends (called automatically on first use).
fn init_builtin() {
    INITIALIZED.get_or_init(|| {
        let mut backends = BACKENDS.write().unwrap_or_else(PoisonError::into_inner);

        #[cfg(feature = "backend-zod")]
        {
            backends.push(&crate::output::zod::ZOD_BACKEND);
        }

        #[cfg(feature = "backend-typescript")]
        {
            backends.push(&crate::output::typescript::TYPESCRIPT_BACKEND);
            backends.push(&crate::output::typescript::TYPE_MODULE_BACKEND);
        }

        #[cfg(feature = "backend-module")]
        {
            backends.push(&crate::output::module::MODULE_BACKEND);
        }
    });
}

fn snapshot() -> Vec<&'static dyn Backend> {
    init_builtin();
    BACKENDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Get a backend by name.
pub fn get_backend(name: &str) -> Option<&'static dyn Backend> {
    snapshot().into_iter().find(|b| b.name() == name)
}

/// Get all backends in a category.
pub fn backends_by_category(category: BackendCategory) -> Vec<&'static dyn Backend> {
    snapshot()
        .into_iter()
        .filter(|b| b.category() == category)
        .collect()
}

/// List all registered backends.
pub fn backends() -> Vec<&'static dyn Backend> {
    snapshot()
}

/// List all registered backend names.
pub fn backend_names() -> Vec<&'static str> {
    snapshot().into_iter().map(|b| b.name()).collect()
}
