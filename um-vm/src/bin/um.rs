//! Command-line front-end: loads a program file and runs it to completion.
//!
//! This binary contains no machine semantics of its own — it only wires the
//! program file, `stdin`, and `stdout` into [`um_vm::Machine`] and translates
//! the result into a process exit code.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use um_vm::{loader, Machine};

/// Run a Universal Machine program.
#[derive(Debug, Parser)]
#[command(name = "um", version, about)]
struct Cli {
    /// Path to the program file to execute.
    program: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all logging, overriding RUST_LOG and -v.
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let file = File::open(&cli.program)
        .with_context(|| format!("opening program file {}", cli.program.display()))?;

    let words = loader::load_words(BufReader::new(file)).context("reading program file")?;

    let mut machine = Machine::new(words, io::stdin().lock(), io::stdout().lock());
    machine.run().context("running program")?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "run failed");
            eprintln!("um: {err:#}");
            ExitCode::FAILURE
        }
    }
}
