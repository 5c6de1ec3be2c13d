//! Command-line interface orchestration for randgraph.
//!
//! `sweep` reproduces the timing report over graphs of growing size and
//! `inspect` prints every representation of a single generated graph.

mod commands;
mod inspect;
mod sweep;

pub use commands::{
    Cli, CliError, Command, CommandOutput, InspectCommand, SweepCommand, render_output, run_cli,
};
pub use inspect::{InspectReport, render_inspect};
pub use sweep::{CSV_HEADER, MISSING_CELL, SweepReport, SweepRow, format_elapsed, write_csv};

#[cfg(test)]
mod test_helpers;
