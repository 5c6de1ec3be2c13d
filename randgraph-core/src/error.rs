//! Error types for the randgraph core library.
//!
//! Each error enum carries a companion code enum whose string form is stable
//! across releases so the CLI and log pipelines can match on it.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors raised by [`crate::Graph`] construction and connection operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A node index does not address a node owned by the graph.
    #[error("node {index} does not belong to a graph of {node_count} nodes")]
    NodeOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of nodes the graph owns.
        node_count: usize,
    },
    /// A pair sequence contained no node ids, so no graph size can be derived.
    #[error("node sequence is empty")]
    EmptyNodeSequence,
    /// A pair sequence had a trailing id without a partner.
    #[error("node sequence has odd length {len}; ids must come in pairs")]
    UnpairedNodeSequence {
        /// Length of the rejected sequence.
        len: usize,
    },
    /// The node storage for a pair sequence could not be allocated.
    #[error("cannot allocate a graph of {node_count} nodes")]
    TooLarge {
        /// Node count implied by the highest id referenced.
        node_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A node index does not address a node owned by the graph.
        NodeOutOfRange => NodeOutOfRange { .. } => "GRAPH_NODE_OUT_OF_RANGE",
        /// A pair sequence contained no node ids.
        EmptyNodeSequence => EmptyNodeSequence => "GRAPH_EMPTY_NODE_SEQUENCE",
        /// A pair sequence had a trailing id without a partner.
        UnpairedNodeSequence => UnpairedNodeSequence { .. } => "GRAPH_UNPAIRED_NODE_SEQUENCE",
        /// The node storage could not be allocated.
        TooLarge => TooLarge { .. } => "GRAPH_TOO_LARGE",
    }
}

/// Errors raised by [`crate::Generator`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// An inclusive range had its lower bound above its upper bound.
    #[error("{parameter} range is empty: min {min} > max {max}")]
    InvalidRange {
        /// Which range was rejected.
        parameter: &'static str,
        /// Supplied lower bound.
        min: usize,
        /// Supplied upper bound.
        max: usize,
    },
    /// The sampled edge count exceeded the triangular bound for itself.
    #[error("too many edges: {edge_count} exceeds the triangular bound")]
    TooManyEdges {
        /// Sampled edge count.
        edge_count: usize,
    },
    /// The sampled edge count is too small for the per-node degree cap.
    #[error(
        "too many edges above node: {edge_count} edges cannot support a per-node cap of {max_edges_per_node}"
    )]
    DegreeCapUnreachable {
        /// Sampled edge count.
        edge_count: usize,
        /// Configured per-node total degree cap.
        max_edges_per_node: usize,
    },
    /// The rejection sampler ran out of attempts before reaching the target.
    #[error("generation exhausted after {attempts} attempts with {accepted} of {target} edges accepted")]
    Exhausted {
        /// Number of candidate pairs drawn.
        attempts: usize,
        /// Edges accepted before giving up.
        accepted: usize,
        /// Sampled edge count that was not reached.
        target: usize,
    },
    /// Replaying accepted pairs into a graph failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// An inclusive range had its lower bound above its upper bound.
        InvalidRange => InvalidRange { .. } => "GENERATOR_INVALID_RANGE",
        /// The sampled edge count exceeded the triangular bound.
        TooManyEdges => TooManyEdges { .. } => "GENERATOR_TOO_MANY_EDGES",
        /// The sampled edge count is too small for the per-node degree cap.
        DegreeCapUnreachable => DegreeCapUnreachable { .. } => "GENERATOR_DEGREE_CAP_UNREACHABLE",
        /// The rejection sampler ran out of attempts.
        Exhausted => Exhausted { .. } => "GENERATOR_EXHAUSTED",
        /// Replaying accepted pairs into a graph failed.
        GraphFailure => Graph(..) => "GENERATOR_GRAPH_FAILURE",
    }
}

impl GeneratorError {
    /// Whether the error was raised by configuration checks before sampling.
    #[must_use]
    pub const fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. } | Self::TooManyEdges { .. } | Self::DegreeCapUnreachable { .. }
        )
    }

    /// Retrieve the inner [`GraphErrorCode`] when the failure came from the graph model.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for graph model results.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
