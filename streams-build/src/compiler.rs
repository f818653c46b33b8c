// External compiler invocation: one synchronous, blocking process per
// (source tree, output tree, runtime) triple

use crate::error::BuildError;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use streams_runtime::Runtime;

/// Compiler binary looked up on PATH when no explicit path is configured
pub const DEFAULT_COMPILER_BIN: &str = "streamlinec";

/// A synchronous compile operation
pub trait Compile {
    fn compile(
        &self,
        source_dir: &Path,
        output_dir: &Path,
        runtime: Runtime,
    ) -> Result<(), BuildError>;
}

/// Shells out to the external streams compiler
#[derive(Debug, Clone)]
pub struct ExternalCompiler {
    binary: PathBuf,
}

impl ExternalCompiler {
    /// Use an explicit compiler binary
    pub fn with_binary<P: AsRef<Path>>(binary: P) -> Self {
        Self {
            binary: binary.as_ref().to_path_buf(),
        }
    }

    /// Locate the default compiler binary on PATH
    pub fn from_path() -> Result<Self, BuildError> {
        let binary = which::which(DEFAULT_COMPILER_BIN)
            .map_err(|_| BuildError::CompilerNotFound(DEFAULT_COMPILER_BIN.to_string()))?;
        Ok(Self { binary })
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl Compile for ExternalCompiler {
    fn compile(
        &self,
        source_dir: &Path,
        output_dir: &Path,
        runtime: Runtime,
    ) -> Result<(), BuildError> {
        // The compiler overwrites or merges existing outputs; only the
        // directory itself is guaranteed here.
        fs::create_dir_all(output_dir).map_err(|e| {
            BuildError::io(
                format!("failed to create output directory {}", output_dir.display()),
                e,
            )
        })?;

        let output = Command::new(&self.binary)
            .arg("--runtime")
            .arg(runtime.as_str())
            .arg("--out")
            .arg(output_dir)
            .arg(source_dir)
            .output()
            .map_err(|e| BuildError::CompilerLaunch {
                command: self.binary.display().to_string(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(BuildError::CompileFailed {
                source_dir: source_dir.to_path_buf(),
                runtime,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_binary_keeps_the_given_path() {
        let compiler = ExternalCompiler::with_binary("/opt/bin/streamlinec");
        assert_eq!(compiler.binary(), Path::new("/opt/bin/streamlinec"));
    }

    #[test]
    fn test_missing_binary_is_a_launch_error() {
        let dir = TempDir::new().unwrap();
        let compiler = ExternalCompiler::with_binary(dir.path().join("no-such-compiler"));
        let err = compiler
            .compile(dir.path(), &dir.path().join("out"), Runtime::Callbacks)
            .unwrap_err();
        assert!(matches!(err, BuildError::CompilerLaunch { .. }));
    }

    #[test]
    fn test_output_directory_is_created_before_launch() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("lib").join("callbacks");
        let compiler = ExternalCompiler::with_binary(dir.path().join("no-such-compiler"));
        // Launch fails, but the output directory must already exist
        let _ = compiler.compile(dir.path(), &out, Runtime::Callbacks);
        assert!(out.is_dir());
    }
}
