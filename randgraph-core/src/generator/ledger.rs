//! Live degree and adjacency bookkeeping for the rejection sampler.

use std::collections::HashSet;

use super::params::{DirectedLimits, GeneratorParams, SelfLoopPolicy};

/// Why a candidate pair was turned down.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Rejection {
    SelfLoop,
    Duplicate,
    OutDegree,
    InDegree,
    TotalDegree,
}

impl Rejection {
    pub(super) const fn as_str(self) -> &'static str {
        match self {
            Self::SelfLoop => "self_loop",
            Self::Duplicate => "duplicate",
            Self::OutDegree => "out_degree",
            Self::InDegree => "in_degree",
            Self::TotalDegree => "total_degree",
        }
    }
}

/// Accepted pairs plus the per-node counts needed to vet the next one.
pub(super) struct DegreeLedger {
    present: HashSet<(usize, usize)>,
    out_degree: Vec<usize>,
    in_degree: Vec<usize>,
    accepted: Vec<(usize, usize)>,
    max_total: usize,
    directed: Option<DirectedLimits>,
    self_loops: SelfLoopPolicy,
}

impl DegreeLedger {
    pub(super) fn new(node_count: usize, edge_count: usize, params: &GeneratorParams) -> Self {
        Self {
            present: HashSet::with_capacity(edge_count),
            out_degree: vec![0; node_count],
            in_degree: vec![0; node_count],
            accepted: Vec::with_capacity(edge_count),
            max_total: params.max_edges_per_node(),
            directed: params.directed_limits(),
            self_loops: params.self_loops(),
        }
    }

    pub(super) fn accepted_len(&self) -> usize {
        self.accepted.len()
    }

    /// Records `(from, to)` if it passes every check.
    pub(super) fn offer(&mut self, from: usize, to: usize) -> Result<(), Rejection> {
        self.vet(from, to)?;
        self.present.insert((from, to));
        if let Some(count) = self.out_degree.get_mut(from) {
            *count += 1;
        }
        if let Some(count) = self.in_degree.get_mut(to) {
            *count += 1;
        }
        self.accepted.push((from, to));
        Ok(())
    }

    /// Flattens the accepted pairs into `from0, to0, from1, to1, ...`.
    pub(super) fn into_id_sequence(self) -> Vec<usize> {
        self.accepted
            .into_iter()
            .flat_map(|(from, to)| [from, to])
            .collect()
    }

    fn vet(&self, from: usize, to: usize) -> Result<(), Rejection> {
        if from == to && self.self_loops == SelfLoopPolicy::Reject {
            return Err(Rejection::SelfLoop);
        }
        if self.present.contains(&(from, to)) || self.present.contains(&(to, from)) {
            return Err(Rejection::Duplicate);
        }
        if let Some(limits) = self.directed {
            if self.out(from) + 1 > limits.max_out_edges {
                return Err(Rejection::OutDegree);
            }
            if self.inbound(to) + 1 > limits.max_in_edges {
                return Err(Rejection::InDegree);
            }
        }
        let fits = if from == to {
            self.total(from) + 2 <= self.max_total
        } else {
            self.total(from) < self.max_total && self.total(to) < self.max_total
        };
        if fits {
            Ok(())
        } else {
            Err(Rejection::TotalDegree)
        }
    }

    fn out(&self, node: usize) -> usize {
        self.out_degree.get(node).copied().unwrap_or_default()
    }

    fn inbound(&self, node: usize) -> usize {
        self.in_degree.get(node).copied().unwrap_or_default()
    }

    fn total(&self, node: usize) -> usize {
        self.out(node) + self.inbound(node)
    }
}
