//! Argument parsing and command dispatch for the randgraph CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, rngs::SmallRng};
use randgraph_core::{DEFAULT_MAX_ATTEMPTS, GeneratorError, GraphError};
use thiserror::Error;
use tracing::{Span, field, instrument};

use super::inspect::{InspectReport, render_inspect, run_inspect};
use super::sweep::{SweepReport, render_sweep, run_sweep};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "randgraph",
    about = "Generate constrained random graphs and time searches over them."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Time depth-first and breadth-first search over growing graphs and
    /// write the results as semicolon-separated CSV.
    Sweep(SweepCommand),
    /// Generate one graph and print every representation plus both searches.
    Inspect(InspectCommand),
}

/// Options accepted by the `sweep` command.
#[derive(Debug, Args, Clone)]
pub struct SweepCommand {
    /// Number of graphs to generate and time.
    #[arg(long, default_value_t = 10)]
    pub iterations: usize,

    /// Node-count lower bound for the first iteration.
    #[arg(long, default_value_t = 10)]
    pub min_nodes: usize,

    /// Node-count upper bound for the first iteration.
    #[arg(long, default_value_t = 15)]
    pub max_nodes: usize,

    /// Edge-count lower bound for the first iteration.
    #[arg(long, default_value_t = 25)]
    pub min_edges: usize,

    /// Edge-count upper bound for the first iteration.
    #[arg(long, default_value_t = 35)]
    pub max_edges: usize,

    /// Per-node total degree cap for the first iteration.
    #[arg(long, default_value_t = 7)]
    pub max_edges_per_node: usize,

    /// In-degree cap for the first directed iteration.
    #[arg(long, default_value_t = 7)]
    pub max_in_edges: usize,

    /// Out-degree cap for the first directed iteration.
    #[arg(long, default_value_t = 7)]
    pub max_out_edges: usize,

    /// Added to the node and edge bounds and the total cap after each iteration.
    #[arg(long, default_value_t = 15)]
    pub step: usize,

    /// Added to the in- and out-degree caps after each iteration.
    #[arg(long, default_value_t = 7)]
    pub degree_step: usize,

    /// Candidate pairs drawn per graph before the iteration is skipped.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Seed for every random draw; entropy seeded when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the CSV here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Options accepted by the `inspect` command.
#[derive(Debug, Args, Clone)]
pub struct InspectCommand {
    /// Node-count lower bound.
    #[arg(long, default_value_t = 4)]
    pub min_nodes: usize,

    /// Node-count upper bound.
    #[arg(long, default_value_t = 10)]
    pub max_nodes: usize,

    /// Edge-count lower bound.
    #[arg(long, default_value_t = 4)]
    pub min_edges: usize,

    /// Edge-count upper bound.
    #[arg(long, default_value_t = 5)]
    pub max_edges: usize,

    /// Per-node total degree cap.
    #[arg(long, default_value_t = 3)]
    pub max_edges_per_node: usize,

    /// Generate a directed graph.
    #[arg(long)]
    pub directed: bool,

    /// Out-degree cap, directed graphs only.
    #[arg(long, default_value_t = 2)]
    pub max_out_edges: usize,

    /// In-degree cap, directed graphs only.
    #[arg(long, default_value_t = 4)]
    pub max_in_edges: usize,

    /// Seed for the generator; entropy seeded when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Node both searches start from.
    #[arg(long, default_value_t = 0)]
    pub from: usize,

    /// Target of the depth-first search.
    #[arg(long, default_value_t = 2)]
    pub depth_target: usize,

    /// Target of the breadth-first search.
    #[arg(long, default_value_t = 3)]
    pub breadth_target: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing the CSV file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Distinct search endpoints cannot be drawn from fewer than two nodes.
    #[error("graph has {node_count} node(s); a sweep needs two distinct endpoints")]
    TooFewNodes {
        /// Realized node count of the generated graph.
        node_count: usize,
    },
    /// Graph generation failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// A node lookup failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// Stable code of the underlying library error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Generator(err) => Some(err.code().as_str()),
            Self::Graph(err) => Some(err.code().as_str()),
            Self::Io { .. } | Self::TooFewNodes { .. } => None,
        }
    }
}

/// Result of running one command.
#[derive(Debug, Clone)]
pub enum CommandOutput {
    /// Rows produced by `sweep`.
    Sweep(SweepReport),
    /// Views produced by `inspect`.
    Inspect(InspectReport),
}

/// Executes the command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation fails, a node lookup fails or the
/// CSV file cannot be written.
///
/// # Examples
/// ```
/// # use randgraph_cli::cli::{Cli, Command, CommandOutput, InspectCommand, run_cli};
/// let cli = Cli {
///     command: Command::Inspect(InspectCommand {
///         min_nodes: 4,
///         max_nodes: 4,
///         min_edges: 3,
///         max_edges: 3,
///         max_edges_per_node: 2,
///         directed: false,
///         max_out_edges: 2,
///         max_in_edges: 2,
///         seed: Some(7),
///         from: 0,
///         depth_target: 2,
///         breadth_target: 3,
///     }),
/// };
/// let CommandOutput::Inspect(report) = run_cli(cli)? else {
///     panic!("inspect returns an inspect report");
/// };
/// assert_eq!(report.edge_list.len(), 3);
/// # Ok::<(), randgraph_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Sweep(sweep) => {
            span.record("command", field::display("sweep"));
            run_sweep(sweep).map(CommandOutput::Sweep)
        }
        Command::Inspect(inspect) => {
            span.record("command", field::display("inspect"));
            run_inspect(inspect).map(CommandOutput::Inspect)
        }
    }
}

/// Renders `output` to `writer`.
///
/// A sweep that already wrote its CSV to a file prints a one-line summary;
/// otherwise the CSV itself goes to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
pub fn render_output(output: &CommandOutput, writer: impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Sweep(report) => render_sweep(report, writer),
        CommandOutput::Inspect(report) => render_inspect(report, writer),
    }
}

pub(super) fn seeded_rng(seed: Option<u64>) -> SmallRng {
    seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64)
}
