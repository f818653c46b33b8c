use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use streams_build::{clean_outputs, run_fanout, BuildPlan, ExternalCompiler, Manifest};
use streams_runtime::{resolve_at, Runtime, Variant, RUNTIME_ENV_VAR};

#[derive(Parser)]
#[command(name = "streams")]
#[command(version = "0.2.0")]
#[command(about = "Multi-runtime streams distribution tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the library and test trees for every configured runtime
    Build {
        /// Project root (default: current directory)
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        project_dir: PathBuf,

        /// Compiler binary (default: streams.json setting, then PATH lookup)
        #[arg(long, value_name = "PATH")]
        compiler: Option<PathBuf>,
    },

    /// Remove generated lib/ and test-<runtime>/ trees
    Clean {
        /// Project root (default: current directory)
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        project_dir: PathBuf,
    },

    /// Print the module the loader would pick for this process
    Resolve {
        /// Distribution root (default: current directory)
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        project_dir: PathBuf,
    },

    /// List runtime identifiers in fanout order
    Runtimes,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            project_dir,
            compiler,
        } => {
            log::info!("building project at {}", project_dir.display());
            let manifest = Manifest::load(&project_dir)?;
            let compiler = match compiler.or_else(|| manifest.compiler.clone()) {
                Some(path) => ExternalCompiler::with_binary(path),
                None => ExternalCompiler::from_path()?,
            };
            let plan = BuildPlan::for_project(&project_dir, &manifest);
            run_fanout(&plan, &compiler)?;
            println!("✅ Build complete: {} compile invocations", plan.invocations().len());
        }

        Commands::Clean { project_dir } => {
            clean_outputs(&project_dir)?;
            println!("✅ Removed generated output trees");
        }

        Commands::Resolve { project_dir } => {
            let signal = std::env::var(RUNTIME_ENV_VAR).ok();
            let resolved = resolve_at(&project_dir, signal.as_deref())?;
            match resolved.variant {
                Variant::Compiled(runtime) => {
                    println!("{} (compiled, {})", resolved.path.display(), runtime)
                }
                Variant::Source => println!("{} (source)", resolved.path.display()),
            }
        }

        Commands::Runtimes => {
            for runtime in Runtime::ALL {
                let mut notes = Vec::new();
                if runtime == Runtime::DEFAULT {
                    notes.push("default");
                }
                if runtime == Runtime::TEST {
                    notes.push("test");
                }
                if notes.is_empty() {
                    println!("{}", runtime);
                } else {
                    println!("{} ({})", runtime, notes.join(", "));
                }
            }
        }
    }

    Ok(())
}
