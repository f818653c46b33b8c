// Runtime identification: the closed set of concurrency runtimes a
// compiled streams variant can target, and detection of the active one

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable naming the active concurrency runtime
pub const RUNTIME_ENV_VAR: &str = "STREAMS_RUNTIME";

/// A concurrency execution strategy a compiled module variant targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Runtime {
    Callbacks,
    Fibers,
    Generators,
}

/// A detection signal or configured identifier outside the closed set
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown runtime identifier '{0}' (expected one of: callbacks, fibers, generators)")]
pub struct UnknownRuntime(pub String);

impl Runtime {
    /// All runtimes, in fanout order. The build iterates this exact order
    /// on every run.
    pub const ALL: [Runtime; 3] = [Runtime::Callbacks, Runtime::Fibers, Runtime::Generators];

    /// Runtime assumed when no detection signal is present
    pub const DEFAULT: Runtime = Runtime::Callbacks;

    /// The single runtime the test tree is compiled for
    pub const TEST: Runtime = Runtime::Callbacks;

    pub fn as_str(self) -> &'static str {
        match self {
            Runtime::Callbacks => "callbacks",
            Runtime::Fibers => "fibers",
            Runtime::Generators => "generators",
        }
    }

    /// Detect the active runtime from the process environment.
    ///
    /// Unset means `DEFAULT`. A set but unrecognized value is an error,
    /// never a fallback.
    pub fn detect() -> Result<Runtime, UnknownRuntime> {
        Self::from_signal(std::env::var(RUNTIME_ENV_VAR).ok().as_deref())
    }

    /// Parse an optional detection signal (`None` = no signal present)
    pub fn from_signal(signal: Option<&str>) -> Result<Runtime, UnknownRuntime> {
        match signal {
            None => Ok(Runtime::DEFAULT),
            Some(s) => s.parse(),
        }
    }
}

impl FromStr for Runtime {
    type Err = UnknownRuntime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "callbacks" => Ok(Runtime::Callbacks),
            "fibers" => Ok(Runtime::Fibers),
            "generators" => Ok(Runtime::Generators),
            other => Err(UnknownRuntime(other.to_string())),
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
