// Build error taxonomy. Everything propagates uncaught: no retries, no
// partial-build recovery.

use std::path::PathBuf;
use std::process::ExitStatus;
use streams_runtime::Runtime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("streams compiler '{0}' not found on PATH (install it or set \"compiler\" in streams.json)")]
    CompilerNotFound(String),

    #[error("failed to launch compiler '{command}': {source}")]
    CompilerLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("compile failed for {} ({runtime}): {status}\n{stderr}", .source_dir.display())]
    CompileFailed {
        source_dir: PathBuf,
        runtime: Runtime,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest {}: {message}", .path.display())]
    Manifest { path: PathBuf, message: String },
}

impl BuildError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        BuildError::Io {
            context: context.into(),
            source,
        }
    }
}
