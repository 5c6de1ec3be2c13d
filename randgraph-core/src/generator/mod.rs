//! Constrained random-graph generation by rejection sampling.
//!
//! A [`Generator`] samples a node count and an edge count from the
//! configured ranges, then draws ordered node pairs uniformly until enough
//! pairs survive the duplicate and degree checks. Accepted pairs are replayed
//! through [`Graph::from_pairs_sized`] with the sampled node count, so nodes
//! that received no edge are still part of the graph.
//!
//! When the `metrics` feature is enabled the generator emits:
//!
//! - `generator_attempts` (counter)
//! - `generator_rejections` (counter, labelled by `reason`)
//! - `generator_exhausted` (counter)

mod ledger;
mod params;

#[cfg(test)]
mod property;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{Span, debug, field, info, instrument, warn};

use crate::{error::GeneratorError, graph::Graph};

use self::ledger::{DegreeLedger, Rejection};
pub use self::params::{DEFAULT_MAX_ATTEMPTS, DirectedLimits, GeneratorParams, SelfLoopPolicy};

/// Counts sampled for one generation and the draws it took.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenerationReport {
    /// Node count drawn from the configured range.
    pub sampled_nodes: usize,
    /// Edge count drawn from the configured range; the graph has exactly this
    /// many edges.
    pub sampled_edges: usize,
    /// Candidate pairs drawn, accepted or not.
    pub attempts: usize,
}

/// Builds random graphs that satisfy a [`GeneratorParams`] configuration.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randgraph_core::{Generator, GeneratorParams};
///
/// let params = GeneratorParams::new(4..=4, 3..=3, 2)?;
/// let mut rng = SmallRng::seed_from_u64(7);
/// let graph = Generator::new(params).generate(&mut rng)?;
/// assert_eq!(graph.edge_count(), 3);
/// assert!(graph.nodes().all(|node| node.degree() <= 2));
/// # Ok::<(), randgraph_core::GeneratorError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Generator {
    params: GeneratorParams,
}

impl Generator {
    /// Creates a generator for `params`.
    #[must_use]
    pub fn new(params: GeneratorParams) -> Self {
        Self { params }
    }

    /// Returns the configuration.
    #[must_use]
    #[rustfmt::skip]
    pub fn params(&self) -> &GeneratorParams { &self.params }

    /// Generates a graph drawing all randomness from `rng`.
    ///
    /// # Errors
    /// Returns [`GeneratorError::TooManyEdges`] or
    /// [`GeneratorError::DegreeCapUnreachable`] when the sampled edge count
    /// fails the upfront checks, and [`GeneratorError::Exhausted`] when the
    /// attempt budget runs out.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph, GeneratorError> {
        self.generate_with_report(rng).map(|(graph, _)| graph)
    }

    /// Generates a graph from an RNG seeded with [`GeneratorParams::rng_seed`].
    ///
    /// # Errors
    /// See [`Generator::generate`].
    pub fn generate_seeded(&self) -> Result<Graph, GeneratorError> {
        let mut rng = SmallRng::seed_from_u64(self.params.rng_seed());
        self.generate(&mut rng)
    }

    /// Like [`Generator::generate`], also returning the sampled counts.
    ///
    /// # Errors
    /// See [`Generator::generate`].
    #[instrument(
        name = "generator.generate",
        err,
        skip(self, rng),
        fields(
            directed = self.params.is_directed(),
            nodes = field::Empty,
            edges = field::Empty,
        ),
    )]
    pub fn generate_with_report<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(Graph, GenerationReport), GeneratorError> {
        let sampled_nodes = rng.gen_range(self.params.nodes());
        let sampled_edges = rng.gen_range(self.params.edges());
        let span = Span::current();
        span.record("nodes", sampled_nodes);
        span.record("edges", sampled_edges);
        debug!(
            sampled_nodes,
            sampled_edges,
            max_edges_per_node = self.params.max_edges_per_node(),
            "sampled generation targets"
        );

        params::check_sampled_edge_count(sampled_edges, self.params.max_edges_per_node())?;

        let (ledger, attempts) = self.sample_edges(rng, sampled_nodes, sampled_edges)?;
        let graph = Graph::from_pairs_sized(
            self.params.is_directed(),
            &ledger.into_id_sequence(),
            sampled_nodes,
        )?;
        info!(
            attempts,
            node_count = graph.len(),
            edge_count = graph.edge_count(),
            "graph generated"
        );
        Ok((
            graph,
            GenerationReport {
                sampled_nodes,
                sampled_edges,
                attempts,
            },
        ))
    }

    fn sample_edges<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        node_count: usize,
        edge_count: usize,
    ) -> Result<(DegreeLedger, usize), GeneratorError> {
        let mut ledger = DegreeLedger::new(node_count, edge_count, &self.params);
        let budget = self.params.max_attempts();
        let mut attempts = 0;

        // `check_sampled_edge_count` guarantees `edge_count >= 1`, and an
        // edge needs at least one node.
        if node_count == 0 {
            return Err(self.exhausted(attempts, &ledger, edge_count));
        }

        while ledger.accepted_len() < edge_count {
            if attempts == budget {
                return Err(self.exhausted(attempts, &ledger, edge_count));
            }
            attempts += 1;
            record_attempt();
            let from = rng.gen_range(0..node_count);
            let to = rng.gen_range(0..node_count);
            if let Err(reason) = ledger.offer(from, to) {
                record_rejection(reason);
            }
        }
        Ok((ledger, attempts))
    }

    fn exhausted(&self, attempts: usize, ledger: &DegreeLedger, target: usize) -> GeneratorError {
        #[cfg(feature = "metrics")]
        metrics::counter!("generator_exhausted").increment(1);
        warn!(
            attempts,
            accepted = ledger.accepted_len(),
            target,
            budget = self.params.max_attempts(),
            "attempt budget exhausted before reaching the edge target"
        );
        GeneratorError::Exhausted {
            attempts,
            accepted: ledger.accepted_len(),
            target,
        }
    }
}

#[cfg(feature = "metrics")]
fn record_attempt() {
    metrics::counter!("generator_attempts").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_attempt() {}

#[cfg(feature = "metrics")]
fn record_rejection(reason: Rejection) {
    metrics::counter!("generator_rejections", "reason" => reason.as_str()).increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_rejection(reason: Rejection) {
    tracing::trace!(reason = reason.as_str(), "candidate rejected");
}

/// Generates a graph from positional bounds with an entropy-seeded RNG.
///
/// `max_out_edges` and `max_in_edges` only apply when `directional` is set.
///
/// # Errors
/// Returns [`GeneratorError::InvalidRange`] for an empty range, plus every
/// error of [`Generator::generate`].
///
/// # Examples
/// ```
/// use randgraph_core::generate_graph;
///
/// let graph = generate_graph(4, 4, 3, 3, 2, false, 2, 2)?;
/// assert_eq!(graph.len(), 4);
/// assert_eq!(graph.edge_count(), 3);
/// # Ok::<(), randgraph_core::GeneratorError>(())
/// ```
#[expect(
    clippy::too_many_arguments,
    reason = "Mirrors the positional generation entry point"
)]
pub fn generate_graph(
    min_nodes: usize,
    max_nodes: usize,
    min_edges: usize,
    max_edges: usize,
    max_edges_per_node: usize,
    directional: bool,
    max_out_edges: usize,
    max_in_edges: usize,
) -> Result<Graph, GeneratorError> {
    let mut params = GeneratorParams::new(
        min_nodes..=max_nodes,
        min_edges..=max_edges,
        max_edges_per_node,
    )?;
    if directional {
        params = params.directed(max_out_edges, max_in_edges);
    }
    let mut rng = SmallRng::from_entropy();
    Generator::new(params).generate(&mut rng)
}
