//! Lattice topology and graph-metrics library
//!
//! This library generates combinatorial point-and-edge topologies for named
//! crystallographic lattice families (simple cubic, BCC, FCC, octet, Kelvin,
//! diamond) and computes graph-theoretic descriptors of each topology:
//! degree sequence, density, connectivity, and adjacency structure.

pub mod config;
pub mod error;
pub mod metrics;
pub mod topology;

pub use error::TopologyError;
pub use metrics::{analyze, GraphMetrics};
pub use topology::{generate, LatticeFamily, Topology};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
