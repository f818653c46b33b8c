// Sequential, fail-fast execution of a build plan. No parallelism, no
// retry, no timeout: the first compile error aborts the remainder.

use crate::compiler::Compile;
use crate::error::BuildError;
use crate::plan::BuildPlan;

/// Run every invocation of the plan in order, stopping at the first
/// error. No invocation after a failed one is attempted.
pub fn run_fanout<C: Compile>(plan: &BuildPlan, compiler: &C) -> Result<(), BuildError> {
    for invocation in plan.invocations() {
        log::info!(
            "compiling {} -> {} ({})",
            invocation.source_dir.display(),
            invocation.output_dir.display(),
            invocation.runtime
        );
        compiler.compile(
            &invocation.source_dir,
            &invocation.output_dir,
            invocation.runtime,
        )?;
    }
    Ok(())
}
