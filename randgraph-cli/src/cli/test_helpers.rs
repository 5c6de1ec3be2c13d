//! Small helpers shared across CLI tests.

use std::path::PathBuf;

use tempfile::TempDir;

use super::{
    Cli, CliError, Command, CommandOutput, InspectCommand, InspectReport, SweepCommand,
    SweepReport, run_cli,
};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

/// A small sweep whose every iteration fits comfortably.
pub(super) fn small_sweep(seed: u64, output: Option<PathBuf>) -> SweepCommand {
    SweepCommand {
        iterations: 3,
        min_nodes: 8,
        max_nodes: 10,
        min_edges: 5,
        max_edges: 7,
        max_edges_per_node: 4,
        max_in_edges: 3,
        max_out_edges: 3,
        step: 4,
        degree_step: 1,
        max_attempts: 100_000,
        seed: Some(seed),
        output,
    }
}

/// Four nodes, three edges, cap two: always generates.
pub(super) fn small_inspect(seed: u64) -> InspectCommand {
    InspectCommand {
        min_nodes: 4,
        max_nodes: 4,
        min_edges: 3,
        max_edges: 3,
        max_edges_per_node: 2,
        directed: false,
        max_out_edges: 2,
        max_in_edges: 2,
        seed: Some(seed),
        from: 0,
        depth_target: 2,
        breadth_target: 3,
    }
}

pub(super) fn run_sweep_expecting_report(command: SweepCommand) -> SweepReport {
    match run_cli(Cli {
        command: Command::Sweep(command),
    }) {
        Ok(CommandOutput::Sweep(report)) => report,
        Ok(other) => panic!("sweep returned {other:?}"),
        Err(err) => panic!("sweep failed: {err}"),
    }
}

pub(super) fn run_inspect_expecting_report(command: InspectCommand) -> InspectReport {
    match run_cli(Cli {
        command: Command::Inspect(command),
    }) {
        Ok(CommandOutput::Inspect(report)) => report,
        Ok(other) => panic!("inspect returned {other:?}"),
        Err(err) => panic!("inspect failed: {err}"),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
