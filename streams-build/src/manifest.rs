// Project manifest - streams.json

use crate::error::BuildError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest file name, at the project root
pub const MANIFEST_FILE: &str = "streams.json";

/// Optional project configuration. Every field has a default matching
/// the conventional layout, so a missing manifest means all defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    /// Explicit compiler binary (default: PATH lookup)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<PathBuf>,

    /// Library source directory (default: "src")
    #[serde(default = "default_src_dir")]
    pub src: String,

    /// Test source directory (default: "test")
    #[serde(default = "default_test_dir")]
    pub test: String,
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_test_dir() -> String {
    "test".to_string()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            compiler: None,
            src: default_src_dir(),
            test: default_test_dir(),
        }
    }
}

impl Manifest {
    /// Load `streams.json` from a project root; a missing file means all
    /// defaults
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self, BuildError> {
        let path = root.as_ref().join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| BuildError::io(format!("failed to read {}", path.display()), e))?;

        serde_json::from_str(&content).map_err(|e| BuildError::Manifest {
            path,
            message: e.to_string(),
        })
    }
}
