//! Shared test utilities for `randgraph-core`.

use proptest::test_runner::Config as ProptestConfig;
use randgraph_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::Graph;

/// Builds a proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Per-node `(out, in)` degrees derived from the stored edges.
///
/// For undirected graphs both endpoints count each edge once on either
/// side, so `out + in` is the node's total incident-edge count.
#[must_use]
pub(crate) fn degree_profile(graph: &Graph) -> Vec<(usize, usize)> {
    let mut degrees = vec![(0, 0); graph.len()];
    for edge in graph.edges() {
        degrees[edge.from()].0 += 1;
        degrees[edge.to()].1 += 1;
    }
    degrees
}

/// Stored edges as unordered `(min, max)` pairs, sorted.
#[must_use]
pub(crate) fn unordered_pairs(graph: &Graph) -> Vec<(usize, usize)> {
    let mut pairs: Vec<_> = graph
        .edges()
        .map(|edge| {
            let (from, to) = edge.endpoints();
            (from.min(to), from.max(to))
        })
        .collect();
    pairs.sort_unstable();
    pairs
}
