// Metrics module: Graph-theoretic descriptors of a generated topology
// Consumes the (nodes, edges) output of the topology module; knows nothing
// about lattice-family semantics

// ======================== MODULE DECLARATIONS ========================
pub mod adjacency;
pub mod connectivity;
pub mod graph_metrics;
pub mod validation;


// ======================== ADJACENCY STRUCTURE ========================
pub use adjacency::{
    adjacency_matrix, // fn(node_count, edges) -> DMatrix<u8> - symmetric 0/1 matrix, zero diagonal
    degree_sequence,  // fn(node_count, edges) -> Vec<usize> - edges incident to each node
};

// ======================== CONNECTIVITY ========================
pub use connectivity::connected_components; // fn(node_count, edges) -> usize - BFS reachability classes

// ======================== METRICS SNAPSHOT ========================
pub use graph_metrics::{
    GraphMetrics, // struct - read-only metrics snapshot derived from (nodes, edges)
    analyze,      // fn(nodes, edges) -> Result<GraphMetrics>
    density,      // fn(node_count, edge_count) -> f64 - 0.0 by convention below 2 nodes
};

// ======================== INPUT VALIDATION ========================
pub use validation::validate_topology; // fn(nodes, edges) -> Result<()> - index range and self-loop checks
