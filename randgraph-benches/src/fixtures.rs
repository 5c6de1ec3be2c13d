//! Seeded graph fixtures shared by the benchmarks.
//!
//! Every fixture asks for as many edges as nodes under a total cap of
//! [`MAX_EDGES_PER_NODE`], which keeps the sampler at half of the degree
//! capacity so generation cost tracks the node count instead of retries.

use rand::{SeedableRng, rngs::SmallRng};
use randgraph_core::{Generator, GeneratorParams, Graph};

use crate::{error::BenchSetupError, params::GenerationBenchParams};

/// Total degree cap used by every fixture.
pub const MAX_EDGES_PER_NODE: usize = 4;

/// Out- and in-degree caps used by directed fixtures.
pub const MAX_DIRECTED_EDGES: usize = 3;

/// Builds the generator configuration for `params`.
///
/// # Errors
/// Returns [`BenchSetupError::Generator`] if the node count does not form a
/// valid range.
pub fn generation_params(params: GenerationBenchParams) -> Result<GeneratorParams, BenchSetupError> {
    let n = params.node_count;
    let config = GeneratorParams::new(n..=n, n..=n, MAX_EDGES_PER_NODE)?;
    Ok(if params.directed {
        config.directed(MAX_DIRECTED_EDGES, MAX_DIRECTED_EDGES)
    } else {
        config
    })
}

/// Generates the fixture graph for `params` from `seed`.
///
/// # Errors
/// Returns [`BenchSetupError::Generator`] when generation fails, which
/// happens for node counts up to [`MAX_EDGES_PER_NODE`].
pub fn seeded_graph(params: GenerationBenchParams, seed: u64) -> Result<Graph, BenchSetupError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok(Generator::new(generation_params(params)?).generate(&mut rng)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn fixtures_generate_the_requested_size(#[case] directed: bool) {
        let params = GenerationBenchParams {
            node_count: 64,
            directed,
        };
        let graph = seeded_graph(params, 42).expect("fixture must generate");
        assert_eq!(graph.len(), 64);
        assert_eq!(graph.edge_count(), 64);
    }

    #[test]
    fn tiny_fixtures_fail_the_degree_cap_check() {
        let params = GenerationBenchParams {
            node_count: MAX_EDGES_PER_NODE,
            directed: false,
        };
        let err = seeded_graph(params, 1).expect_err("edge count equals the cap");
        assert!(matches!(err, BenchSetupError::Generator(_)));
    }
}
