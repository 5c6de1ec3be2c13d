//! Parameter handling for the constrained random-graph generator.

use std::ops::RangeInclusive;

use crate::error::GeneratorError;

/// Default number of candidate pairs drawn before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000_000;

const DEFAULT_RNG_SEED: u64 = 0x5EED_6A4F;

/// Whether the sampler may accept a pair `(u, u)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SelfLoopPolicy {
    /// Redraw whenever both endpoints coincide.
    #[default]
    Reject,
    /// Accept self pairs subject to the usual checks. A self-loop counts
    /// twice toward its node's total degree and, in directed mode, once
    /// toward both its out-degree and in-degree.
    Allow,
}

/// Per-node caps that only apply to directed generation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DirectedLimits {
    /// Maximum number of edges leaving a node.
    pub max_out_edges: usize,
    /// Maximum number of edges entering a node.
    pub max_in_edges: usize,
}

/// Configuration for [`crate::Generator`].
///
/// # Examples
/// ```
/// use randgraph_core::{GeneratorParams, SelfLoopPolicy};
///
/// let params = GeneratorParams::new(10..=15, 25..=35, 7)?
///     .directed(7, 7)
///     .with_self_loops(SelfLoopPolicy::Allow)
///     .with_rng_seed(42);
/// assert!(params.is_directed());
/// assert_eq!(params.max_edges_per_node(), 7);
/// # Ok::<(), randgraph_core::GeneratorError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratorParams {
    nodes: RangeInclusive<usize>,
    edges: RangeInclusive<usize>,
    max_edges_per_node: usize,
    directed: Option<DirectedLimits>,
    self_loops: SelfLoopPolicy,
    max_attempts: usize,
    rng_seed: u64,
}

impl GeneratorParams {
    /// Creates an undirected configuration.
    ///
    /// Both ranges are inclusive. `max_edges_per_node` caps each node's total
    /// incident-edge count, counting both directions.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidRange`] when either range is empty.
    pub fn new(
        nodes: RangeInclusive<usize>,
        edges: RangeInclusive<usize>,
        max_edges_per_node: usize,
    ) -> Result<Self, GeneratorError> {
        check_range("node", &nodes)?;
        check_range("edge", &edges)?;
        Ok(Self {
            nodes,
            edges,
            max_edges_per_node,
            directed: None,
            self_loops: SelfLoopPolicy::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            rng_seed: DEFAULT_RNG_SEED,
        })
    }

    /// Switches to directed generation with the given out- and in-degree caps.
    #[must_use]
    pub fn directed(mut self, max_out_edges: usize, max_in_edges: usize) -> Self {
        self.directed = Some(DirectedLimits {
            max_out_edges,
            max_in_edges,
        });
        self
    }

    /// Sets the self-loop policy.
    #[must_use]
    pub fn with_self_loops(mut self, policy: SelfLoopPolicy) -> Self {
        self.self_loops = policy;
        self
    }

    /// Caps how many candidate pairs may be drawn. Zero is raised to one.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Seeds the RNG used by [`crate::Generator::generate_seeded`].
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Inclusive node-count range.
    #[must_use]
    pub fn nodes(&self) -> RangeInclusive<usize> {
        self.nodes.clone()
    }

    /// Inclusive edge-count range.
    #[must_use]
    pub fn edges(&self) -> RangeInclusive<usize> {
        self.edges.clone()
    }

    /// Cap on each node's total incident-edge count.
    #[must_use]
    pub fn max_edges_per_node(&self) -> usize {
        self.max_edges_per_node
    }

    /// Directed caps, or `None` for undirected generation.
    #[must_use]
    pub fn directed_limits(&self) -> Option<DirectedLimits> {
        self.directed
    }

    /// Returns `true` for directed generation.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed.is_some()
    }

    /// Configured self-loop policy.
    #[must_use]
    pub fn self_loops(&self) -> SelfLoopPolicy {
        self.self_loops
    }

    /// Maximum number of candidate pairs drawn per generation.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Seed used by [`crate::Generator::generate_seeded`].
    #[must_use]
    pub fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}

fn check_range(parameter: &'static str, range: &RangeInclusive<usize>) -> Result<(), GeneratorError> {
    if range.start() > range.end() {
        return Err(GeneratorError::InvalidRange {
            parameter,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

/// Checks the two upfront guards on a sampled edge count.
///
/// These only rule out obviously broken inputs. Passing them does not mean
/// the degree caps can be met.
pub(super) fn check_sampled_edge_count(
    edge_count: usize,
    max_edges_per_node: usize,
) -> Result<(), GeneratorError> {
    let within_triangular = triangular(edge_count).is_some_and(|bound| edge_count <= bound);
    if !within_triangular {
        return Err(GeneratorError::TooManyEdges { edge_count });
    }
    // `edge_count - 1 < max_edges_per_node`, without underflow at zero.
    if edge_count <= max_edges_per_node {
        return Err(GeneratorError::DegreeCapUnreachable {
            edge_count,
            max_edges_per_node,
        });
    }
    Ok(())
}

/// `1 + 2 + ... + n`, or `None` on overflow.
fn triangular(n: usize) -> Option<usize> {
    let (even, odd) = if n.is_multiple_of(2) {
        (n / 2, n.checked_add(1)?)
    } else {
        (n, n.checked_add(1)? / 2)
    };
    even.checked_mul(odd)
}
