// Module registry: finite dispatch from runtime identifier to the
// statically known compiled module path. Replaces dynamic path
// construction from an unvalidated runtime string.

use crate::runtime::Runtime;

/// Fixed top-level module name of the distributed library
pub const MODULE_NAME: &str = "streams";

/// Compiled-output directory name, relative to the distribution root
pub const LIB_DIR: &str = "lib";

/// Raw source directory name, relative to the distribution root
pub const SRC_DIR: &str = "src";

/// Raw source module file, relative to the source directory.
/// The `._js` form is what the external compiler consumes.
pub const SOURCE_MODULE: &str = "streams._js";

/// Compiled module path for a runtime, relative to the compiled-output
/// directory
pub fn compiled_module(runtime: Runtime) -> &'static str {
    match runtime {
        Runtime::Callbacks => "callbacks/streams.js",
        Runtime::Fibers => "fibers/streams.js",
        Runtime::Generators => "generators/streams.js",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_runtime_has_an_entry() {
        for runtime in Runtime::ALL {
            let entry = compiled_module(runtime);
            assert!(entry.starts_with(runtime.as_str()));
            assert!(entry.ends_with("streams.js"));
        }
    }

    #[test]
    fn test_entries_are_distinct() {
        assert_ne!(
            compiled_module(Runtime::Callbacks),
            compiled_module(Runtime::Fibers)
        );
        assert_ne!(
            compiled_module(Runtime::Fibers),
            compiled_module(Runtime::Generators)
        );
    }
}
