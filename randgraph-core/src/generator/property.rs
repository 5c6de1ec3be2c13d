//! Property tests for generated graphs.
//!
//! Strategies keep the sampled edge count at or below a quarter of the
//! degree capacity so generation never backs itself into a corner.

use std::ops::RangeInclusive;

use proptest::{
    prelude::{Strategy, any},
    prop_assert, prop_assert_eq, proptest,
    test_runner::{TestCaseError, TestCaseResult},
};
use rand::{SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;

use crate::{
    Graph,
    test_utils::{degree_profile, suite_proptest_config, unordered_pairs},
};

use super::{Generator, GeneratorParams};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
enum Mode {
    #[weight(1)]
    Undirected,
    #[weight(1)]
    Directed,
}

#[derive(Clone, Debug)]
struct GenerationCase {
    mode: Mode,
    nodes: RangeInclusive<usize>,
    edges: RangeInclusive<usize>,
    cap: usize,
    max_out: usize,
    max_in: usize,
    seed: u64,
}

impl GenerationCase {
    fn params(&self) -> GeneratorParams {
        let params = GeneratorParams::new(self.nodes.clone(), self.edges.clone(), self.cap)
            .unwrap_or_else(|err| panic!("strategy produced invalid ranges: {err}"));
        match self.mode {
            Mode::Undirected => params,
            Mode::Directed => params.directed(self.max_out, self.max_in),
        }
    }

    fn generate(&self) -> Result<Graph, TestCaseError> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        Generator::new(self.params())
            .generate(&mut rng)
            .map_err(|err| TestCaseError::fail(format!("generation failed for {self:?}: {err}")))
    }
}

fn generation_case_strategy() -> impl Strategy<Value = GenerationCase> {
    (any::<Mode>(), 8_usize..=16, 0_usize..=4, 3_usize..=6, any::<u64>()).prop_flat_map(
        |(mode, min_nodes, spread, cap, seed)| {
            let min_edges = cap + 1;
            let max_edges = (min_nodes * cap / 4).max(min_edges);
            let half = cap / 2 + 1;
            (min_edges..=max_edges, half..=cap, half..=cap).prop_flat_map(
                move |(low, max_out, max_in)| {
                    (low..=max_edges).prop_map(move |high| GenerationCase {
                        mode,
                        nodes: min_nodes..=min_nodes + spread,
                        edges: low..=high,
                        cap,
                        max_out,
                        max_in,
                        seed,
                    })
                },
            )
        },
    )
}

fn check_counts(case: &GenerationCase, graph: &Graph) -> TestCaseResult {
    prop_assert!(case.nodes.contains(&graph.len()), "len {} outside {:?}", graph.len(), case.nodes);
    prop_assert!(
        case.edges.contains(&graph.edge_count()),
        "edge count {} outside {:?}",
        graph.edge_count(),
        case.edges
    );
    prop_assert_eq!(graph.edge_list().len(), graph.edge_count());
    Ok(())
}

fn check_pairs(graph: &Graph) -> TestCaseResult {
    let pairs = unordered_pairs(graph);
    let mut deduped = pairs.clone();
    deduped.dedup();
    prop_assert_eq!(&pairs, &deduped, "an unordered pair was drawn twice");
    prop_assert!(pairs.iter().all(|&(low, high)| low != high), "self-loop accepted");
    Ok(())
}

fn check_degrees(case: &GenerationCase, graph: &Graph) -> TestCaseResult {
    for (node, (out, inbound)) in degree_profile(graph).into_iter().enumerate() {
        prop_assert!(out + inbound <= case.cap, "node {} total {}", node, out + inbound);
        if case.mode == Mode::Directed {
            prop_assert!(out <= case.max_out, "node {} out-degree {}", node, out);
            prop_assert!(inbound <= case.max_in, "node {} in-degree {}", node, inbound);
        }
    }
    Ok(())
}

fn check_searches(graph: &Graph, seed: u64) -> TestCaseResult {
    let start_id = usize::try_from(seed % graph.len() as u64).unwrap_or(0);
    let start = graph
        .node(start_id)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    // With an unreachable target both searches enumerate the reachable set.
    let mut reachable: Vec<_> = start.breadth_search(graph.len()).map(|n| n.id()).collect();
    reachable.sort_unstable();
    let mut depth_reachable: Vec<_> = start.depth_search(graph.len()).map(|n| n.id()).collect();
    depth_reachable.sort_unstable();
    prop_assert_eq!(&reachable, &depth_reachable);

    for &target in &reachable {
        let depth: Vec<_> = start.depth_search(target).map(|n| n.id()).collect();
        let breadth: Vec<_> = start.breadth_search(target).map(|n| n.id()).collect();
        prop_assert_eq!(depth.first(), Some(&start_id));
        prop_assert_eq!(depth.last(), Some(&target));
        prop_assert_eq!(breadth.first(), Some(&start_id));
        prop_assert_eq!(breadth.last(), Some(&target));
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn generated_graphs_honour_their_ranges(case in generation_case_strategy()) {
        let graph = case.generate()?;
        check_counts(&case, &graph)?;
        check_pairs(&graph)?;
    }

    #[test]
    fn generated_graphs_honour_degree_caps(case in generation_case_strategy()) {
        let graph = case.generate()?;
        check_degrees(&case, &graph)?;
    }

    #[test]
    fn adjacency_symmetry_tracks_directionality(case in generation_case_strategy()) {
        let graph = case.generate()?;
        let symmetric = graph.adjacency_matrix().is_symmetric();
        match case.mode {
            Mode::Undirected => prop_assert!(symmetric),
            // No pair is stored in both orientations, so any edge breaks symmetry.
            Mode::Directed => prop_assert!(!symmetric),
        }
    }

    #[test]
    fn searches_end_at_reachable_targets(case in generation_case_strategy()) {
        let graph = case.generate()?;
        check_searches(&graph, case.seed)?;
    }
}
