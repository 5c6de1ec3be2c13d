//! Benchmark setup error type.
//!
//! Lets setup functions propagate generator and graph failures with `?`.

use randgraph_core::{GeneratorError, GraphError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Building parameters or generating a graph failed.
    #[error("graph generation failed: {0}")]
    Generator(#[from] GeneratorError),
    /// A node lookup failed.
    #[error("graph access failed: {0}")]
    Graph(#[from] GraphError),
}
