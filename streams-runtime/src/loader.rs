// Conditional loader: picks the precompiled runtime-specific module when
// a compiled-output directory exists, the raw source module otherwise.
// The choice is made once per process and cached for its lifetime.

use crate::registry::{compiled_module, LIB_DIR, SOURCE_MODULE, SRC_DIR};
use crate::runtime::{Runtime, UnknownRuntime, RUNTIME_ENV_VAR};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Which branch the loader took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Precompiled, runtime-specific module under `lib/`
    Compiled(Runtime),
    /// Raw source module under `src/` (runtime-agnostic)
    Source,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Compiled(runtime) => write!(f, "compiled/{}", runtime),
            Variant::Source => f.write_str("source"),
        }
    }
}

/// A module resolution. Once cached, fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModule {
    pub path: PathBuf,
    pub variant: Variant,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    UnknownRuntime(#[from] UnknownRuntime),

    #[error("module not found: {} ({variant} variant)", .path.display())]
    ModuleNotFound { path: PathBuf, variant: Variant },
}

/// Resolve the streams module under `root`, without touching the
/// process-wide cache.
///
/// `runtime_signal` is the raw detection signal; it is only consulted
/// when the compiled-output directory exists. Once the compiled branch
/// is taken there is no fallback: a missing runtime-specific file is a
/// `ModuleNotFound` error.
pub fn resolve_at(root: &Path, runtime_signal: Option<&str>) -> Result<ResolvedModule, LoadError> {
    let lib_dir = root.join(LIB_DIR);
    if lib_dir.is_dir() {
        let runtime = Runtime::from_signal(runtime_signal)?;
        let variant = Variant::Compiled(runtime);
        let path = lib_dir.join(compiled_module(runtime));
        if !path.is_file() {
            return Err(LoadError::ModuleNotFound { path, variant });
        }
        log::debug!("resolved {} module: {}", variant, path.display());
        Ok(ResolvedModule { path, variant })
    } else {
        let path = root.join(SRC_DIR).join(SOURCE_MODULE);
        if !path.is_file() {
            return Err(LoadError::ModuleNotFound {
                path,
                variant: Variant::Source,
            });
        }
        log::debug!("resolved source module: {}", path.display());
        Ok(ResolvedModule {
            path,
            variant: Variant::Source,
        })
    }
}

/// Resolve with the process environment as the detection signal
pub fn resolve(root: &Path) -> Result<ResolvedModule, LoadError> {
    resolve_at(root, std::env::var(RUNTIME_ENV_VAR).ok().as_deref())
}

static RESOLVED: OnceLock<ResolvedModule> = OnceLock::new();

/// Resolve once per process. The first successful resolution is cached
/// write-once and returned unchanged for the process lifetime, even if
/// the filesystem changes afterwards. Safe under multi-threaded hosts.
pub fn resolve_cached(root: &Path) -> Result<&'static ResolvedModule, LoadError> {
    if let Some(module) = RESOLVED.get() {
        return Ok(module);
    }
    let resolved = resolve(root)?;
    Ok(RESOLVED.get_or_init(|| resolved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn dist_with_lib(runtimes: &[Runtime]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for &runtime in runtimes {
            let module = dir.path().join(LIB_DIR).join(compiled_module(runtime));
            fs::create_dir_all(module.parent().unwrap()).unwrap();
            fs::write(&module, "compiled").unwrap();
        }
        dir
    }

    fn dist_source_only() -> TempDir {
        let dir = TempDir::new().unwrap();
        let module = dir.path().join(SRC_DIR).join(SOURCE_MODULE);
        fs::create_dir_all(module.parent().unwrap()).unwrap();
        fs::write(&module, "source").unwrap();
        dir
    }

    #[test]
    fn test_compiled_branch_resolves_detected_runtime() {
        let dir = dist_with_lib(&Runtime::ALL);
        let resolved = resolve_at(dir.path(), Some("fibers")).unwrap();
        assert_eq!(resolved.variant, Variant::Compiled(Runtime::Fibers));
        assert_eq!(
            resolved.path,
            dir.path().join("lib").join("fibers").join("streams.js")
        );
    }

    #[test]
    fn test_compiled_branch_defaults_without_signal() {
        let dir = dist_with_lib(&Runtime::ALL);
        let resolved = resolve_at(dir.path(), None).unwrap();
        assert_eq!(resolved.variant, Variant::Compiled(Runtime::Callbacks));
    }

    #[test]
    fn test_compiled_branch_has_no_fallback() {
        // lib/ exists but only the callbacks variant was built
        let dir = dist_with_lib(&[Runtime::Callbacks]);
        let err = resolve_at(dir.path(), Some("generators")).unwrap_err();
        match err {
            LoadError::ModuleNotFound { path, variant } => {
                assert_eq!(variant, Variant::Compiled(Runtime::Generators));
                assert!(path.ends_with("generators/streams.js"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_runtime_fails_fast() {
        let dir = dist_with_lib(&Runtime::ALL);
        let err = resolve_at(dir.path(), Some("webworkers")).unwrap_err();
        assert!(matches!(err, LoadError::UnknownRuntime(_)));
    }

    #[test]
    fn test_source_fallback_ignores_runtime() {
        let dir = dist_source_only();
        // An unparseable signal is irrelevant on the source branch
        let resolved = resolve_at(dir.path(), Some("webworkers")).unwrap();
        assert_eq!(resolved.variant, Variant::Source);
        assert_eq!(resolved.path, dir.path().join("src").join("streams._js"));
    }

    #[test]
    fn test_missing_source_module_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = resolve_at(dir.path(), None).unwrap_err();
        match err {
            LoadError::ModuleNotFound { variant, .. } => {
                assert_eq!(variant, Variant::Source);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
