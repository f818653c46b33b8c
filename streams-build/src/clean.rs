// Removal of generated output trees. Source trees are never touched.

use crate::error::BuildError;
use crate::plan::TEST_OUT_PREFIX;
use std::fs;
use std::path::Path;
use streams_runtime::{Runtime, LIB_DIR};

/// Remove `lib/` and every `test-<runtime>/` directory under `root`
pub fn clean_outputs<P: AsRef<Path>>(root: P) -> Result<(), BuildError> {
    let root = root.as_ref();
    remove_tree(&root.join(LIB_DIR))?;
    for runtime in Runtime::ALL {
        remove_tree(&root.join(format!("{}-{}", TEST_OUT_PREFIX, runtime)))?;
    }
    Ok(())
}

fn remove_tree(dir: &Path) -> Result<(), BuildError> {
    if dir.exists() {
        fs::remove_dir_all(dir)
            .map_err(|e| BuildError::io(format!("failed to remove {}", dir.display()), e))?;
        log::info!("removed {}", dir.display());
    }
    Ok(())
}
