//! CLI entry point for the randgraph generator.
//!
//! Parses arguments with clap, runs the selected command, renders its output
//! to stdout and maps failures to a non-zero exit code. Logging is installed
//! first so every later step can emit structured diagnostics.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use randgraph_cli::{
    cli::{Cli, CliError, render_output, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main() -> Result<()> {
    let output = run_cli(Cli::parse()).context("randgraph command failed")?;
    let mut stdout = BufWriter::new(io::stdout().lock());
    render_output(&output, &mut stdout).context("could not write command output")?;
    stdout.flush().context("could not flush stdout")
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err.downcast_ref::<CliError>().and_then(CliError::code);
        error!(
            error = format_args!("{err:#}"),
            code = code.map(field::display),
            "randgraph exited with an error"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Tracing is not installed yet when logging setup fails"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("randgraph: logging setup failed: {err}");
}
