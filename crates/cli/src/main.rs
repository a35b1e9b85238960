//! rvstep command-line driver.
//!
//! This binary runs one instruction file through the simulator. It performs:
//! 1. **Argument parsing:** Input and output paths plus optional overrides.
//! 2. **Logging:** Installs a `tracing` subscriber that writes to stderr, so the trace file stays clean.
//! 3. **Run:** Streams the per-step trace and final memory dump to the output file.
//!
//! A missing input file is reported as `Error: File <path> not found.`; any
//! other failure as `An error occurred: <reason>`. Both exit with status 1.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rvstep_core::config::{Config, UnknownInstructionPolicy};
use rvstep_core::{SimError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "rvstep",
    author,
    version,
    about = "Single-cycle RV32 subset simulator",
    long_about = "Execute a file of 32-character binary instructions, one per line, and write \
                  the PC and register file after every step followed by a dump of the first \
                  memory words.\n\nExamples:\n  rvstep program.txt trace.txt\n  rvstep \
                  program.txt trace.txt --strict --stats\n  RUST_LOG=info rvstep program.txt \
                  trace.txt --config sim.json"
)]
struct Cli {
    /// Instruction file: one 32-character binary word per line.
    input: PathBuf,

    /// Trace file to create or overwrite.
    output: PathBuf,

    /// JSON file overriding reset values, policy, or dump layout.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Abort on instruction words outside the dispatch table.
    #[arg(long)]
    strict: bool,

    /// Print retired-instruction statistics to stderr.
    #[arg(long)]
    stats: bool,

    /// Log every executed instruction (default filter `debug`).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        match e {
            SimError::InputNotFound { .. } => eprintln!("Error: {e}"),
            _ => eprintln!("An error occurred: {e}"),
        }
        process::exit(1);
    }
}

/// Installs the stderr subscriber; `RUST_LOG` takes precedence over `verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Builds the configuration from the arguments and runs the simulation.
///
/// Statistics are printed even when the run stops on an error.
fn run(cli: &Cli) -> rvstep_core::Result<()> {
    let mut config = cli
        .config
        .as_deref()
        .map_or_else(|| Ok(Config::default()), Config::from_file)?;
    if cli.strict {
        config.general.unknown_instruction = UnknownInstructionPolicy::Strict;
    }
    if cli.verbose {
        config.general.trace_instructions = true;
    }

    let mut sim = Simulator::new(&config);
    let outcome = sim.run_file(&cli.input, &cli.output);
    if cli.stats {
        eprintln!("{}", sim.cpu.stats);
    }

    let executed = outcome?;
    info!(executed, output = %cli.output.display(), "trace written");
    Ok(())
}
