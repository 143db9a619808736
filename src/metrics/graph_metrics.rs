use nalgebra::{DMatrix, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::TopologyError;
use crate::metrics::adjacency::{adjacency_matrix, degree_sequence};
use crate::metrics::connectivity::connected_components;
use crate::metrics::validation::validate_topology;
use crate::Result;

/// Read-only snapshot of graph-theoretic descriptors for one topology.
///
/// A pure function of its (nodes, edges) input with no identity beyond it:
/// computed fresh on demand, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphMetrics {
    pub node_count: usize,
    pub edge_count: usize,
    pub degrees: Vec<usize>,
    pub average_degree: f64,
    pub density: f64,
    pub is_connected: bool,
    pub component_count: usize,
    pub adjacency: DMatrix<u8>,
}

/// Compute the metrics snapshot for a (nodes, edges) topology.
///
/// Validates the edge set first: an out-of-range index or self-loop fails
/// with `MalformedTopology`. A topology with zero nodes fails with
/// `EmptyTopology`, since its average degree is undefined. The inputs are
/// never modified; repeated calls on the same topology return identical
/// snapshots.
pub fn analyze(nodes: &[Vector3<f64>], edges: &[(usize, usize)]) -> Result<GraphMetrics> {
    validate_topology(nodes, edges)?;
    if nodes.is_empty() {
        return Err(TopologyError::EmptyTopology);
    }

    let node_count = nodes.len();
    let edge_count = edges.len();
    let degrees = degree_sequence(node_count, edges);
    let degree_sum: usize = degrees.iter().sum();
    let average_degree = degree_sum as f64 / node_count as f64;
    let component_count = connected_components(node_count, edges);

    Ok(GraphMetrics {
        node_count,
        edge_count,
        degrees,
        average_degree,
        density: density(node_count, edge_count),
        is_connected: component_count == 1,
        component_count,
        adjacency: adjacency_matrix(node_count, edges),
    })
}

/// Ratio of actual edges to the maximum possible in a simple undirected
/// graph on the same node count: 2e / (n(n - 1)).
///
/// Defined as 0.0 by convention for fewer than 2 nodes, where no edge can
/// exist; unlike average degree this never fails.
pub fn density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0;
    }
    2.0 * edge_count as f64 / (node_count as f64 * (node_count as f64 - 1.0))
}
