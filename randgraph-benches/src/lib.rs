//! Benchmark support crate for randgraph.
//!
//! Provides parameter types and seeded fixtures used by the Criterion
//! benchmarks for graph generation and traversal.

pub mod error;
pub mod fixtures;
pub mod params;
