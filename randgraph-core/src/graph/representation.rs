//! Derived views of a [`Graph`]: matrices, adjacency list and edge list.

use std::{collections::HashSet, iter::FusedIterator, slice};

use super::{BinaryMatrix, Edge, EdgeId, Graph};

impl Graph {
    /// Builds the `N x N` adjacency matrix.
    ///
    /// The matrix is indexed `[target, source]`: cell `(j, i)` is `1` iff
    /// node `j` is an incident node of node `i`. It is symmetric exactly when
    /// every edge was added with [`Graph::non_directional_connect`].
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::Graph;
    ///
    /// let mut graph = Graph::new(2);
    /// graph.directional_connect(0, 1)?;
    /// let matrix = graph.adjacency_matrix();
    /// assert_eq!(matrix.get(1, 0), Some(1));
    /// assert_eq!(matrix.get(0, 1), Some(0));
    /// # Ok::<(), randgraph_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn adjacency_matrix(&self) -> BinaryMatrix {
        let mut matrix = BinaryMatrix::zeroed(self.len(), self.len());
        for source in self.nodes() {
            for target in source.incident_ids() {
                matrix.set(target, source.id());
            }
        }
        matrix
    }

    /// Builds the node-by-edge incidence matrix.
    ///
    /// Columns follow [`Graph::edges`] order. An edge whose reverse pair
    /// already has a column is skipped, so `(u, v)` and `(v, u)` share one.
    /// Both endpoint rows of a column are `1` whatever the direction.
    #[must_use]
    pub fn incidence_matrix(&self) -> BinaryMatrix {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        for edge in self.edges() {
            let (from, to) = edge.endpoints();
            if seen.contains(&(to, from)) {
                continue;
            }
            seen.insert((from, to));
            columns.push(edge);
        }

        let mut matrix = BinaryMatrix::zeroed(self.len(), columns.len());
        for (column, edge) in columns.iter().enumerate() {
            matrix.set(edge.from(), column);
            matrix.set(edge.to(), column);
        }
        matrix
    }

    /// Lists `(node, incident node)` for every incidence observation.
    ///
    /// Directional edges appear once; non-directional edges appear once from
    /// each endpoint.
    #[must_use]
    pub fn adjacency_list(&self) -> Vec<(usize, usize)> {
        self.nodes()
            .flat_map(|node| {
                let id = node.id();
                node.incident_ids().map(move |incident| (id, incident))
            })
            .collect()
    }

    /// Lazily yields every edge reachable from an incidence list, once each.
    ///
    /// Order is first appearance when walking nodes in id order.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::Graph;
    ///
    /// let mut graph = Graph::new(3);
    /// graph.non_directional_connect(2, 0)?;
    /// graph.directional_connect(1, 2)?;
    /// let edges: Vec<_> = graph.edges().map(|edge| edge.endpoints()).collect();
    /// assert_eq!(edges, vec![(2, 0), (1, 2)]);
    /// # Ok::<(), randgraph_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn edges(&self) -> Edges<'_> {
        Edges {
            graph: self,
            next_node: 0,
            current: [].iter(),
            seen: vec![false; self.edge_count()],
        }
    }

    /// Collects [`Graph::edges`] into a vector.
    #[must_use]
    pub fn edge_list(&self) -> Vec<Edge> {
        self.edges().collect()
    }
}

/// Iterator returned by [`Graph::edges`].
#[derive(Clone, Debug)]
pub struct Edges<'g> {
    graph: &'g Graph,
    next_node: usize,
    current: slice::Iter<'g, EdgeId>,
    seen: Vec<bool>,
}

impl Iterator for Edges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            for id in self.current.by_ref() {
                let Some(seen) = self.seen.get_mut(id.get()) else {
                    continue;
                };
                if *seen {
                    continue;
                }
                *seen = true;
                return self.graph.edge(*id);
            }
            let node = self.graph.node(self.next_node).ok()?;
            self.current = node.edge_ids();
            self.next_node += 1;
        }
    }
}

impl FusedIterator for Edges<'_> {}
