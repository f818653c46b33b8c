// Process-wide memoization of the loader: the first resolution sticks
// for the process lifetime. Kept in its own test binary so the global
// cache is exercised by exactly one process.

use std::fs;
use streams_runtime::{resolve_cached, Variant, LIB_DIR, SOURCE_MODULE, SRC_DIR};
use tempfile::TempDir;

#[test]
fn test_first_resolution_is_cached_for_process_lifetime() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join(SRC_DIR).join(SOURCE_MODULE);
    fs::create_dir_all(source.parent().unwrap()).unwrap();
    fs::write(&source, "source").unwrap();

    let first = resolve_cached(dir.path()).unwrap();
    assert_eq!(first.variant, Variant::Source);
    assert_eq!(first.path, source);

    // A compiled tree appearing later must not change the resolution
    let compiled = dir
        .path()
        .join(LIB_DIR)
        .join("callbacks")
        .join("streams.js");
    fs::create_dir_all(compiled.parent().unwrap()).unwrap();
    fs::write(&compiled, "compiled").unwrap();

    let second = resolve_cached(dir.path()).unwrap();
    assert_eq!(second.variant, Variant::Source);
    assert_eq!(second.path, source);
}
