//! Depth-first and breadth-first search toward a target node.
//!
//! Both searches share one worklist engine, [`Search`], and differ only in
//! the [`Frontier`] discipline. They report visitation order up to and
//! including the target, not a shortest path. The iterators are lazy: no
//! node past the target is ever expanded.

use std::{collections::VecDeque, iter::FusedIterator};

use crate::graph::{Graph, Node};


/// Worklist discipline used by [`Search`].
pub trait Frontier: Default {
    /// Adds a node id to the worklist.
    fn put(&mut self, id: usize);
    /// Removes the next node id, or returns `None` when empty.
    fn take(&mut self) -> Option<usize>;
}

/// Last-in-first-out worklist.
impl Frontier for Vec<usize> {
    fn put(&mut self, id: usize) {
        self.push(id);
    }

    fn take(&mut self) -> Option<usize> {
        self.pop()
    }
}

/// First-in-first-out worklist.
impl Frontier for VecDeque<usize> {
    fn put(&mut self, id: usize) {
        self.push_back(id);
    }

    fn take(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

/// Lazy search from a start node toward a target id.
///
/// Each step removes one id from the frontier. The target is emitted and
/// ends the search. An already visited node is skipped. Any other node is
/// marked visited, emitted, and has all its incident nodes added to the
/// frontier, repeats included.
#[derive(Clone, Debug)]
pub struct Search<'g, F> {
    graph: &'g Graph,
    target: usize,
    frontier: F,
    visited: Vec<bool>,
    finished: bool,
}

/// Stack-driven search returned by [`Node::depth_search`].
pub type DepthSearch<'g> = Search<'g, Vec<usize>>;

/// Queue-driven search returned by [`Node::breadth_search`].
pub type BreadthSearch<'g> = Search<'g, VecDeque<usize>>;

impl<'g, F: Frontier> Search<'g, F> {
    /// Starts a search at `start` for the node whose id is `target`.
    ///
    /// A target id outside the graph is never found; the search then emits
    /// every node reachable from `start`.
    #[must_use]
    pub fn new(start: Node<'g>, target: usize) -> Self {
        let graph = start.graph();
        let mut frontier = F::default();
        frontier.put(start.id());
        Self {
            graph,
            target,
            frontier,
            visited: vec![false; graph.len()],
            finished: false,
        }
    }

    /// The id this search is looking for.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }
}

impl<'g, F: Frontier> Iterator for Search<'g, F> {
    type Item = Node<'g>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        while let Some(id) = self.frontier.take() {
            let Ok(node) = self.graph.node(id) else {
                continue;
            };
            if id == self.target {
                self.finished = true;
                return Some(node);
            }
            let Some(visited) = self.visited.get_mut(id) else {
                continue;
            };
            if *visited {
                continue;
            }
            *visited = true;
            for incident in node.incident_ids() {
                self.frontier.put(incident);
            }
            return Some(node);
        }
        self.finished = true;
        None
    }
}

impl<F: Frontier> FusedIterator for Search<'_, F> {}

impl<'g> Node<'g> {
    /// Depth-first search from this node toward `target`.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::Graph;
    ///
    /// let graph = Graph::from_pairs(false, &[0, 1, 0, 2, 1, 3])?;
    /// let order: Vec<_> = graph.node(0)?.depth_search(3).map(|n| n.id()).collect();
    /// assert_eq!(order, vec![0, 2, 1, 3]);
    /// # Ok::<(), randgraph_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn depth_search(self, target: usize) -> DepthSearch<'g> {
        Search::new(self, target)
    }

    /// Breadth-first search from this node toward `target`.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::Graph;
    ///
    /// let graph = Graph::from_pairs(false, &[0, 1, 0, 2, 1, 3])?;
    /// let order: Vec<_> = graph.node(0)?.breadth_search(3).map(|n| n.id()).collect();
    /// assert_eq!(order, vec![0, 1, 2, 3]);
    /// # Ok::<(), randgraph_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn breadth_search(self, target: usize) -> BreadthSearch<'g> {
        Search::new(self, target)
    }
}
