// streams-build - deterministic build fanout for the multi-runtime
// streams distribution: compiles the library source tree once per
// runtime and the test tree for the designated test runtime, through an
// external compiler.

pub mod clean;
pub mod compiler;
pub mod error;
pub mod fanout;
pub mod manifest;
pub mod plan;

pub use clean::clean_outputs;
pub use compiler::{Compile, ExternalCompiler, DEFAULT_COMPILER_BIN};
pub use error::BuildError;
pub use fanout::run_fanout;
pub use manifest::{Manifest, MANIFEST_FILE};
pub use plan::{BuildPlan, Invocation, OutputLayout, Pass, TEST_OUT_PREFIX};
