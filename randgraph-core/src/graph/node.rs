//! Borrowed node handles and their incidence iterators.

use std::{fmt, iter::FusedIterator, slice};

use super::{Edge, EdgeId, Graph};

/// A node of a [`Graph`], borrowed from it.
///
/// Handles are cheap to copy. Two handles are equal when they name the same
/// id in the same graph instance.
#[derive(Clone, Copy)]
pub struct Node<'g> {
    graph: &'g Graph,
    id: usize,
}

impl<'g> Node<'g> {
    pub(crate) const fn new(graph: &'g Graph, id: usize) -> Self {
        Self { graph, id }
    }

    /// Returns the node's dense id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> usize { self.id }

    /// Returns the graph owning this node.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &'g Graph { self.graph }

    /// Number of edges registered with this node.
    ///
    /// For graphs built with directional connections this is the out-degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.incidence().len()
    }

    /// Edges registered with this node, in insertion order.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::Graph;
    ///
    /// let mut graph = Graph::new(3);
    /// graph.non_directional_connect(0, 1)?;
    /// graph.directional_connect(0, 2)?;
    /// let node = graph.node(0)?;
    /// let ends: Vec<_> = node.incident_edges().map(|edge| edge.endpoints()).collect();
    /// assert_eq!(ends, vec![(0, 1), (0, 2)]);
    /// # Ok::<(), randgraph_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn incident_edges(&self) -> IncidentEdges<'g> {
        IncidentEdges {
            graph: self.graph,
            ids: self.incidence().iter(),
        }
    }

    /// Far endpoints of this node's incident edges.
    ///
    /// Yields one node per incident edge, so multi-edges yield repeats.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::Graph;
    ///
    /// let mut graph = Graph::new(3);
    /// graph.non_directional_connect(0, 1)?;
    /// graph.non_directional_connect(2, 1)?;
    /// let node = graph.node(1)?;
    /// let ids: Vec<_> = node.incident_nodes().map(|n| n.id()).collect();
    /// assert_eq!(ids, vec![0, 2]);
    /// # Ok::<(), randgraph_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn incident_nodes(&self) -> IncidentNodes<'g> {
        IncidentNodes {
            origin: self.id,
            edges: self.incident_edges(),
        }
    }

    pub(crate) fn incident_ids(self) -> impl Iterator<Item = usize> + 'g {
        let origin = self.id;
        self.incident_edges().map(move |edge| edge.other(origin))
    }

    pub(super) fn edge_ids(&self) -> slice::Iter<'g, EdgeId> {
        self.incidence().iter()
    }

    fn incidence(&self) -> &'g [EdgeId] {
        self.graph.incidence(self.id)
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.graph, other.graph)
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("degree", &self.degree())
            .finish()
    }
}

/// Iterator over a node's incident edges. See [`Node::incident_edges`].
#[derive(Clone, Debug)]
pub struct IncidentEdges<'g> {
    graph: &'g Graph,
    ids: slice::Iter<'g, EdgeId>,
}

impl Iterator for IncidentEdges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.by_ref().find_map(|id| self.graph.edge(*id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl ExactSizeIterator for IncidentEdges<'_> {}

impl FusedIterator for IncidentEdges<'_> {}

/// Iterator over a node's incident nodes. See [`Node::incident_nodes`].
#[derive(Clone, Debug)]
pub struct IncidentNodes<'g> {
    origin: usize,
    edges: IncidentEdges<'g>,
}

impl<'g> Iterator for IncidentNodes<'g> {
    type Item = Node<'g>;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.edges.next()?;
        Some(Node::new(self.edges.graph, edge.other(self.origin)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl ExactSizeIterator for IncidentNodes<'_> {}

impl FusedIterator for IncidentNodes<'_> {}
