//! Edge values and handles into the graph's shared edge store.

/// An ordered pair of node ids.
///
/// Direction is a property of how the edge was inserted, not of the edge:
/// a directional connection registers it with `from` only, a non-directional
/// one with both endpoints.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    from: usize,
    to: usize,
}

impl Edge {
    pub(crate) const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn from(&self) -> usize { self.from }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> usize { self.to }

    /// Returns `true` when `node` is one of the endpoints.
    #[must_use]
    pub const fn is_incident(&self, node: usize) -> bool {
        self.from == node || self.to == node
    }

    /// Returns the endpoint opposite `node`.
    ///
    /// For an id that is not an endpoint this returns `from`; callers only
    /// ask about edges taken from a node's own incidence list.
    #[must_use]
    pub const fn other(&self, node: usize) -> usize {
        if self.from == node { self.to } else { self.from }
    }

    /// Returns the endpoints as a `(from, to)` tuple.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.from, self.to)
    }
}

/// Index of an edge in its owning graph's edge store.
///
/// An edge added non-directionally is stored once and its id appears in
/// both endpoints' incidence lists.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(usize);

impl EdgeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position of the edge in insertion order across the graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> usize { self.0 }
}
