use nalgebra::Vector3;

use crate::error::TopologyError;
use crate::Result;

/// Check the structural invariants an edge set must satisfy relative to its
/// node sequence: every index in range, no self-loops.
///
/// A violation indicates a generator bug or a caller-supplied topology that
/// was never valid, so analysis fails with `MalformedTopology` rather than
/// silently producing wrong metrics.
pub fn validate_topology(nodes: &[Vector3<f64>], edges: &[(usize, usize)]) -> Result<()> {
    for &(a, b) in edges {
        if a == b {
            return Err(TopologyError::MalformedTopology(format!(
                "edge ({a}, {b}) is a self-loop"
            )));
        }
        if a >= nodes.len() || b >= nodes.len() {
            return Err(TopologyError::MalformedTopology(format!(
                "edge ({a}, {b}) references a node index out of range for {} nodes",
                nodes.len()
            )));
        }
    }
    Ok(())
}
