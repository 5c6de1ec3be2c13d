//! Randgraph core library.
//!
//! Builds random graphs under node/edge count ranges and per-node degree
//! caps, exposes matrix and list views of a graph, and runs depth-first and
//! breadth-first searches toward a target node.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod generator;
mod graph;
mod traversal;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GeneratorError, GeneratorErrorCode, GraphError, GraphErrorCode, Result},
    generator::{
        DEFAULT_MAX_ATTEMPTS, DirectedLimits, GenerationReport, Generator, GeneratorParams,
        SelfLoopPolicy, generate_graph,
    },
    graph::{BinaryMatrix, Edge, EdgeId, Edges, Graph, IncidentEdges, IncidentNodes, Node},
    traversal::{BreadthSearch, DepthSearch, Frontier, Search},
};
