//! Depth-first and breadth-first search benchmarks.
//!
//! Each search starts at node 0 with an out-of-range target, so the
//! measurement covers a full drain of the reachable set.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use randgraph_benches::{
    error::BenchSetupError,
    fixtures::seeded_graph,
    params::{GenerationBenchParams, SearchKind, TraversalBenchParams},
};
use randgraph_core::Graph;

/// Seed used for every fixture graph.
const SEED: u64 = 7;

/// Node counts to benchmark.
const NODE_COUNTS: &[usize] = &[100, 1_000, 10_000];

fn drain(graph: &Graph, search: SearchKind) -> Result<usize, BenchSetupError> {
    let start = graph.node(0)?;
    let unreachable = graph.len();
    Ok(match search {
        SearchKind::Depth => start.depth_search(unreachable).count(),
        SearchKind::Breadth => start.breadth_search(unreachable).count(),
    })
}

fn search_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("search");
    group.sample_size(30);

    for &node_count in NODE_COUNTS {
        let graph = seeded_graph(
            GenerationBenchParams {
                node_count,
                directed: false,
            },
            SEED,
        )?;
        for search in [SearchKind::Depth, SearchKind::Breadth] {
            let bench_params = TraversalBenchParams { node_count, search };
            group.bench_with_input(
                BenchmarkId::from_parameter(&bench_params),
                &(&graph, search),
                |b, &(graph, search)| {
                    b.iter(|| drain(graph, search));
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn search(c: &mut Criterion) {
    if let Err(err) = search_impl(c) {
        panic!("search benchmark setup failed: {err}");
    }
}

criterion_group!(benches, search);
criterion_main!(benches);
