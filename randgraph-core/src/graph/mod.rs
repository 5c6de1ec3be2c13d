//! Graph data model.
//!
//! A [`Graph`] owns a fixed number of nodes with dense ids `0..len` and a
//! shared edge store. Each node keeps an ordered incidence list of
//! [`EdgeId`]s into that store. A directional connection registers the new
//! edge with its `from` node only; a non-directional connection registers
//! the same stored edge with both endpoints, so derived views can
//! de-duplicate by identity.
//!
//! The model accepts any edge between owned nodes. Degree caps and
//! duplicate-pair rules are enforced by [`crate::Generator`], not here.

mod edge;
mod matrix;
mod node;
mod representation;

#[cfg(test)]
mod tests;

use tracing::trace;

use crate::error::{GraphError, Result};

pub use self::{
    edge::{Edge, EdgeId},
    matrix::BinaryMatrix,
    node::{IncidentEdges, IncidentNodes, Node},
    representation::Edges,
};

/// A graph with a fixed node set and an append-only edge set.
///
/// # Examples
/// ```
/// use randgraph_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.directional_connect(0, 1)?;
/// graph.non_directional_connect(1, 2)?;
/// assert_eq!(graph.len(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.node(0)?.degree(), 1);
/// assert_eq!(graph.node(1)?.degree(), 1);
/// # Ok::<(), randgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    incidence: Vec<Vec<EdgeId>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Allocates `node_count` isolated nodes with ids `0..node_count`.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            incidence: vec![Vec::new(); node_count],
            edges: Vec::new(),
        }
    }

    /// Builds a graph from a flat sequence of node-id pairs.
    ///
    /// `ids` is read as `(ids[0], ids[1]), (ids[2], ids[3]), ...`. The graph
    /// is sized to `max(ids) + 1`, so the realized node count depends only on
    /// the highest id referenced. Each pair is connected directionally when
    /// `directional` is set and non-directionally otherwise.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyNodeSequence`] for an empty slice,
    /// [`GraphError::UnpairedNodeSequence`] for an odd-length one, and
    /// [`GraphError::TooLarge`] when the highest id implies more nodes than
    /// can be allocated.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::Graph;
    ///
    /// let graph = Graph::from_pairs(false, &[0, 1, 2, 3])?;
    /// assert_eq!(graph.len(), 4);
    /// assert!(graph.adjacency_list().contains(&(1, 0)));
    /// # Ok::<(), randgraph_core::GraphError>(())
    /// ```
    pub fn from_pairs(directional: bool, ids: &[usize]) -> Result<Self> {
        Self::from_pairs_sized(directional, ids, 0)
    }

    /// Like [`Graph::from_pairs`], but allocates at least `min_len` nodes.
    ///
    /// Ids in `min_len..=max(ids)` still grow the graph; ids below the
    /// highest one referenced that never appear stay isolated nodes.
    ///
    /// # Errors
    /// See [`Graph::from_pairs`].
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::Graph;
    ///
    /// let graph = Graph::from_pairs_sized(true, &[0, 1], 5)?;
    /// assert_eq!(graph.len(), 5);
    /// assert_eq!(graph.edge_count(), 1);
    /// # Ok::<(), randgraph_core::GraphError>(())
    /// ```
    pub fn from_pairs_sized(directional: bool, ids: &[usize], min_len: usize) -> Result<Self> {
        let max_id = ids.iter().copied().max().ok_or(GraphError::EmptyNodeSequence)?;
        if !ids.len().is_multiple_of(2) {
            return Err(GraphError::UnpairedNodeSequence { len: ids.len() });
        }

        let node_count = max_id
            .checked_add(1)
            .ok_or(GraphError::TooLarge { node_count: max_id })?
            .max(min_len);
        let mut graph = Self::try_with_nodes(node_count)?;
        for pair in ids.chunks_exact(2) {
            let &[from, to] = pair else {
                continue;
            };
            if directional {
                graph.directional_connect(from, to)?;
            } else {
                graph.non_directional_connect(from, to)?;
            }
        }
        trace!(
            node_count,
            edge_count = graph.edge_count(),
            directional,
            "graph built from pair sequence"
        );
        Ok(graph)
    }

    fn try_with_nodes(node_count: usize) -> Result<Self> {
        let mut incidence = Vec::new();
        incidence
            .try_reserve_exact(node_count)
            .map_err(|_| GraphError::TooLarge { node_count })?;
        incidence.resize_with(node_count, Vec::new);
        Ok(Self {
            incidence,
            edges: Vec::new(),
        })
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.incidence.len()
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incidence.is_empty()
    }

    /// Number of stored edges. A non-directional edge counts once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the node with id `index`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] when `index >= self.len()`.
    pub fn node(&self, index: usize) -> Result<Node<'_>> {
        self.check(index)?;
        Ok(Node::new(self, index))
    }

    /// Iterates all nodes in id order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = Node<'_>> + '_ {
        (0..self.len()).map(move |id| Node::new(self, id))
    }

    /// Looks up a stored edge by id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<Edge> {
        self.edges.get(id.get()).copied()
    }

    /// Connects `from` to `to`, registering the edge with `from` only.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] if either index is not a node of
    /// this graph. The graph is left unchanged.
    pub fn directional_connect(&mut self, from: usize, to: usize) -> Result<EdgeId> {
        self.check(from)?;
        self.check(to)?;
        let id = self.store(Edge::new(from, to));
        self.register(from, id);
        Ok(id)
    }

    /// Connects `first` and `second`, registering one shared edge with both.
    ///
    /// A self-loop is registered twice with the same node.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] if either index is not a node of
    /// this graph. The graph is left unchanged.
    pub fn non_directional_connect(&mut self, first: usize, second: usize) -> Result<EdgeId> {
        self.check(first)?;
        self.check(second)?;
        let id = self.store(Edge::new(first, second));
        self.register(first, id);
        self.register(second, id);
        Ok(id)
    }

    pub(crate) fn incidence(&self, node: usize) -> &[EdgeId] {
        self.incidence.get(node).map_or(&[], Vec::as_slice)
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                index,
                node_count: self.len(),
            })
        }
    }

    fn store(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.edges.push(edge);
        id
    }

    fn register(&mut self, node: usize, id: EdgeId) {
        if let Some(list) = self.incidence.get_mut(node) {
            list.push(id);
        }
    }
}
