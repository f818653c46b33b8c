// streams-runtime - runtime identification and module loading for the
// multi-runtime streams distribution

pub mod loader;
pub mod registry;
pub mod runtime;

pub use loader::{resolve, resolve_at, resolve_cached, LoadError, ResolvedModule, Variant};
pub use registry::{compiled_module, LIB_DIR, MODULE_NAME, SOURCE_MODULE, SRC_DIR};
pub use runtime::{Runtime, UnknownRuntime, RUNTIME_ENV_VAR};
