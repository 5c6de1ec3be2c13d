//! Benchmark parameter types.

use std::fmt;

/// Parameters for one generation benchmark run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenerationBenchParams {
    /// Exact node count to generate.
    pub node_count: usize,
    /// Generate a directed graph.
    pub directed: bool,
}

impl fmt::Display for GenerationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.directed { "directed" } else { "undirected" };
        write!(f, "n={},{mode}", self.node_count)
    }
}

/// Search strategy under measurement.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchKind {
    /// Stack-driven depth-first search.
    Depth,
    /// Queue-driven breadth-first search.
    Breadth,
}

impl SearchKind {
    /// Short label used in benchmark ids.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Depth => "dfs",
            Self::Breadth => "bfs",
        }
    }
}

/// Parameters for one traversal benchmark run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TraversalBenchParams {
    /// Node count of the searched graph.
    pub node_count: usize,
    /// Search strategy.
    pub search: SearchKind,
}

impl fmt::Display for TraversalBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.search.label(), self.node_count)
    }
}
