//! The `sweep` command: time both searches over graphs of growing size.
//!
//! Each iteration draws a directionality, generates a graph, picks two
//! distinct endpoints and times a full drain of the depth-first and
//! breadth-first searches between them. Bounds grow by a fixed step after
//! every iteration.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rand::Rng;
use randgraph_core::{Generator, GeneratorError, GeneratorParams, Node};
use tracing::{Span, field, info, instrument, warn};

use super::commands::{CliError, SweepCommand, seeded_rng};

/// CSV header line, without the trailing newline.
pub const CSV_HEADER: &str = "Count nodes;Depth search;BreadthSearch";

/// Cell written when a search finished without reaching its target.
pub const MISSING_CELL: &str = "null";

/// Timing of one sweep iteration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SweepRow {
    /// Realized node count of the generated graph.
    pub node_count: usize,
    /// Whether the graph was generated as directed.
    pub directed: bool,
    /// Time to drain the depth-first search, or `None` when it missed the target.
    pub depth: Option<Duration>,
    /// Time to drain the breadth-first search, or `None` when it missed the target.
    pub breadth: Option<Duration>,
}

/// Outcome of a whole sweep.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SweepReport {
    /// One row per iteration that produced a graph.
    pub rows: Vec<SweepRow>,
    /// Iterations skipped because generation ran out of attempts.
    pub skipped: usize,
    /// File the CSV was written to, if any.
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug)]
struct SweepBounds {
    min_nodes: usize,
    max_nodes: usize,
    min_edges: usize,
    max_edges: usize,
    max_edges_per_node: usize,
    max_out_edges: usize,
    max_in_edges: usize,
    max_attempts: usize,
}

impl SweepBounds {
    fn first(command: &SweepCommand) -> Self {
        Self {
            min_nodes: command.min_nodes,
            max_nodes: command.max_nodes,
            min_edges: command.min_edges,
            max_edges: command.max_edges,
            max_edges_per_node: command.max_edges_per_node,
            max_out_edges: command.max_out_edges,
            max_in_edges: command.max_in_edges,
            max_attempts: command.max_attempts,
        }
    }

    fn advance(&mut self, step: usize, degree_step: usize) {
        for bound in [
            &mut self.min_nodes,
            &mut self.max_nodes,
            &mut self.min_edges,
            &mut self.max_edges,
            &mut self.max_edges_per_node,
        ] {
            *bound = bound.saturating_add(step);
        }
        self.max_out_edges = self.max_out_edges.saturating_add(degree_step);
        self.max_in_edges = self.max_in_edges.saturating_add(degree_step);
    }

    fn params(&self, directed: bool) -> Result<GeneratorParams, GeneratorError> {
        let params = GeneratorParams::new(
            self.min_nodes..=self.max_nodes,
            self.min_edges..=self.max_edges,
            self.max_edges_per_node,
        )?
        .with_max_attempts(self.max_attempts);
        Ok(if directed {
            params.directed(self.max_out_edges, self.max_in_edges)
        } else {
            params
        })
    }
}

#[instrument(
    name = "cli.sweep",
    err,
    skip(command),
    fields(iterations = command.iterations, seed = field::Empty),
)]
pub(super) fn run_sweep(command: SweepCommand) -> Result<SweepReport, CliError> {
    if let Some(seed) = command.seed {
        Span::current().record("seed", seed);
    }
    let mut rng = seeded_rng(command.seed);
    let mut bounds = SweepBounds::first(&command);
    let mut report = SweepReport::default();

    for iteration in 0..command.iterations {
        let directed = rng.gen_bool(0.5);
        match sweep_iteration(&bounds, directed, &mut rng) {
            Ok(row) => {
                info!(
                    iteration,
                    node_count = row.node_count,
                    directed,
                    depth_found = row.depth.is_some(),
                    breadth_found = row.breadth.is_some(),
                    "sweep iteration completed"
                );
                report.rows.push(row);
            }
            Err(CliError::Generator(err @ GeneratorError::Exhausted { .. })) => {
                warn!(iteration, directed, error = %err, "skipping sweep iteration");
                report.skipped += 1;
            }
            Err(err) => return Err(err),
        }
        bounds.advance(command.step, command.degree_step);
    }

    if let Some(path) = command.output {
        write_csv_file(&path, &report.rows)?;
        report.output = Some(path);
    }
    Ok(report)
}

fn sweep_iteration<R: Rng + ?Sized>(
    bounds: &SweepBounds,
    directed: bool,
    rng: &mut R,
) -> Result<SweepRow, CliError> {
    let graph = Generator::new(bounds.params(directed)?).generate(rng)?;
    let (from, to) = pick_endpoints(graph.len(), rng)?;
    let start = graph.node(from)?;
    Ok(SweepRow {
        node_count: graph.len(),
        directed,
        depth: time_search(start.depth_search(to), to),
        breadth: time_search(start.breadth_search(to), to),
    })
}

/// Draws `(from, to)` uniformly with `from != to`.
pub(super) fn pick_endpoints<R: Rng + ?Sized>(
    node_count: usize,
    rng: &mut R,
) -> Result<(usize, usize), CliError> {
    if node_count < 2 {
        return Err(CliError::TooFewNodes { node_count });
    }
    loop {
        let from = rng.gen_range(0..node_count);
        let to = rng.gen_range(0..node_count);
        if from != to {
            return Ok((from, to));
        }
    }
}

/// Drains `search` and returns the elapsed time when its last node is `target`.
pub(super) fn time_search<'g>(
    search: impl Iterator<Item = Node<'g>>,
    target: usize,
) -> Option<Duration> {
    let started = Instant::now();
    let last = search.last();
    let elapsed = started.elapsed();
    (last.map(|node| node.id()) == Some(target)).then_some(elapsed)
}

/// Formats `elapsed` as `hh:mm:ss.fffffff` with 100ns ticks.
///
/// Hours are not wrapped at 24.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    let ticks = elapsed.subsec_nanos() / 100;
    format!(
        "{:02}:{:02}:{:02}.{ticks:07}",
        seconds / 3600,
        seconds / 60 % 60,
        seconds % 60
    )
}

fn format_cell(cell: Option<Duration>) -> String {
    cell.map_or_else(|| MISSING_CELL.to_owned(), format_elapsed)
}

/// Writes the CSV header and one line per row.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
pub fn write_csv(rows: &[SweepRow], mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for row in rows {
        writeln!(
            writer,
            "{};{};{};",
            row.node_count,
            format_cell(row.depth),
            format_cell(row.breadth)
        )?;
    }
    Ok(())
}

fn write_csv_file(path: &Path, rows: &[SweepRow]) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    write_csv(rows, &mut writer).map_err(io_error)?;
    writer.flush().map_err(io_error)
}

pub(super) fn render_sweep(report: &SweepReport, mut writer: impl Write) -> io::Result<()> {
    match &report.output {
        Some(path) => writeln!(
            writer,
            "wrote {} row(s) to {} ({} skipped)",
            report.rows.len(),
            path.display(),
            report.skipped
        ),
        None => write_csv(&report.rows, writer),
    }
}
