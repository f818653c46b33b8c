// Build plan: ordered fanout passes over source trees and runtime
// subsets. Expansion order is the idempotence contract: the same plan
// always yields the same (source, output, runtime) sequence.

use crate::manifest::Manifest;
use std::path::{Path, PathBuf};
use streams_runtime::{Runtime, LIB_DIR};

/// Output directory prefix for the test pass (`test-<runtime>/`)
pub const TEST_OUT_PREFIX: &str = "test";

/// How a pass names its per-runtime output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLayout {
    /// `<base>/<runtime>/`, e.g. `lib/callbacks/`
    RuntimeSubdir(PathBuf),
    /// `<parent>/<stem>-<runtime>/`, e.g. `test-callbacks/` at the
    /// project root
    RuntimePrefix { parent: PathBuf, stem: String },
}

/// One fanout pass: a source tree compiled for an ordered runtime subset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pass {
    pub source_dir: PathBuf,
    pub layout: OutputLayout,
    pub runtimes: Vec<Runtime>,
}

impl Pass {
    pub fn output_dir(&self, runtime: Runtime) -> PathBuf {
        match &self.layout {
            OutputLayout::RuntimeSubdir(base) => base.join(runtime.as_str()),
            OutputLayout::RuntimePrefix { parent, stem } => {
                parent.join(format!("{}-{}", stem, runtime))
            }
        }
    }
}

/// One concrete compile call the fanout will make
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub runtime: Runtime,
}

/// An ordered build plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildPlan {
    passes: Vec<Pass>,
}

impl BuildPlan {
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    pub fn push(&mut self, pass: Pass) {
        self.passes.push(pass);
    }

    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    /// Expand to the exact ordered sequence of compile calls: passes in
    /// declared order, runtimes in subset order.
    pub fn invocations(&self) -> Vec<Invocation> {
        let mut out = Vec::new();
        for pass in &self.passes {
            for &runtime in &pass.runtimes {
                out.push(Invocation {
                    source_dir: pass.source_dir.clone(),
                    output_dir: pass.output_dir(runtime),
                    runtime,
                });
            }
        }
        out
    }

    /// The plan for a project root: compile the library source tree into
    /// `lib/<runtime>/` for every runtime, then the test tree into
    /// `test-<runtime>/` for the designated test runtime only.
    pub fn for_project<P: AsRef<Path>>(root: P, manifest: &Manifest) -> Self {
        let root = root.as_ref();
        let mut plan = Self::new();
        plan.push(Pass {
            source_dir: root.join(&manifest.src),
            layout: OutputLayout::RuntimeSubdir(root.join(LIB_DIR)),
            runtimes: Runtime::ALL.to_vec(),
        });
        plan.push(Pass {
            source_dir: root.join(&manifest.test),
            layout: OutputLayout::RuntimePrefix {
                parent: root.to_path_buf(),
                stem: TEST_OUT_PREFIX.to_string(),
            },
            runtimes: vec![Runtime::TEST],
        });
        plan
    }

    /// `for_project` with all manifest defaults
    pub fn default_for<P: AsRef<Path>>(root: P) -> Self {
        Self::for_project(root, &Manifest::default())
    }
}
