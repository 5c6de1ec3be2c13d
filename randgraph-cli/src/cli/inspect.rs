//! The `inspect` command: one graph, every view of it.

use std::io::{self, Write};

use randgraph_core::{BinaryMatrix, Generator, GeneratorParams};
use tracing::{info, instrument};

use super::commands::{CliError, InspectCommand, seeded_rng};

/// Every representation of one generated graph plus both search orders.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InspectReport {
    /// Whether the graph was generated as directed.
    pub directed: bool,
    /// Adjacency matrix indexed `[target, source]`.
    pub adjacency: BinaryMatrix,
    /// Node-by-edge incidence matrix.
    pub incidence: BinaryMatrix,
    /// `(node, neighbour)` pairs in node order.
    pub adjacency_list: Vec<(usize, usize)>,
    /// `(from, to)` pairs of the de-duplicated edges.
    pub edge_list: Vec<(usize, usize)>,
    /// Node ids emitted by the depth-first search.
    pub depth: Vec<usize>,
    /// Node ids emitted by the breadth-first search.
    pub breadth: Vec<usize>,
}

#[instrument(
    name = "cli.inspect",
    err,
    skip(command),
    fields(directed = command.directed, from = command.from),
)]
pub(super) fn run_inspect(command: InspectCommand) -> Result<InspectReport, CliError> {
    let mut params = GeneratorParams::new(
        command.min_nodes..=command.max_nodes,
        command.min_edges..=command.max_edges,
        command.max_edges_per_node,
    )?;
    if command.directed {
        params = params.directed(command.max_out_edges, command.max_in_edges);
    }
    let mut rng = seeded_rng(command.seed);
    let graph = Generator::new(params).generate(&mut rng)?;
    let start = graph.node(command.from)?;

    let report = InspectReport {
        directed: command.directed,
        adjacency: graph.adjacency_matrix(),
        incidence: graph.incidence_matrix(),
        adjacency_list: graph.adjacency_list(),
        edge_list: graph.edges().map(|edge| edge.endpoints()).collect(),
        depth: start
            .depth_search(command.depth_target)
            .map(|node| node.id())
            .collect(),
        breadth: start
            .breadth_search(command.breadth_target)
            .map(|node| node.id())
            .collect(),
    };
    info!(
        node_count = graph.len(),
        edge_count = graph.edge_count(),
        "inspected graph"
    );
    Ok(report)
}

fn write_pairs(pairs: &[(usize, usize)], writer: &mut impl Write) -> io::Result<()> {
    for (left, right) in pairs {
        write!(writer, "{left}:{right}; ")?;
    }
    writeln!(writer)
}

fn write_ids(label: &str, ids: &[usize], writer: &mut impl Write) -> io::Result<()> {
    let joined: Vec<String> = ids.iter().map(ToString::to_string).collect();
    writeln!(writer, "{label}: {}", joined.join(" "))
}

/// Renders `report` as plain text sections.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// # use randgraph_cli::cli::{InspectReport, render_inspect};
/// # use randgraph_core::Graph;
/// let graph = Graph::from_pairs(false, &[0, 1])?;
/// let report = InspectReport {
///     directed: false,
///     adjacency: graph.adjacency_matrix(),
///     incidence: graph.incidence_matrix(),
///     adjacency_list: graph.adjacency_list(),
///     edge_list: vec![(0, 1)],
///     depth: vec![0, 1],
///     breadth: vec![0, 1],
/// };
/// let mut out = Vec::new();
/// render_inspect(&report, &mut out)?;
/// let text = String::from_utf8(out)?;
/// assert!(text.contains("adjacency list\n0:1; 1:0; \n"));
/// assert!(text.ends_with("breadth search: 0 1\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_inspect(report: &InspectReport, mut writer: impl Write) -> io::Result<()> {
    let kind = if report.directed { "directed" } else { "undirected" };
    writeln!(writer, "{kind} graph")?;
    writeln!(writer, "adjacency matrix")?;
    write!(writer, "{}", report.adjacency)?;
    writeln!(writer, "incidence matrix")?;
    write!(writer, "{}", report.incidence)?;
    writeln!(writer, "adjacency list")?;
    write_pairs(&report.adjacency_list, &mut writer)?;
    writeln!(writer, "edge list")?;
    write_pairs(&report.edge_list, &mut writer)?;
    write_ids("depth search", &report.depth, &mut writer)?;
    write_ids("breadth search", &report.breadth, &mut writer)
}
