use std::collections::BTreeSet;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::COORDINATE_TOLERANCE;
use crate::error::TopologyError;
use crate::topology::family::LatticeFamily;
use crate::topology::unit_cell::unit_cell;
use crate::Result;

/// A generated lattice topology: an ordered node sequence in fractional
/// coordinates and a sorted set of unordered edge index pairs.
///
/// The node index is the stable identifier used by edges and by the
/// graph-metrics engine. Instances are never mutated after generation, and
/// regenerating with the same arguments yields a bit-identical result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topology {
    pub family: LatticeFamily,
    pub tiling: usize,
    pub nodes: Vec<Vector3<f64>>,
    pub edges: Vec<(usize, usize)>,
}

/// Generate the topology for `family`, tiled `tiling` cells per axis.
///
/// `tiling == 1` yields the single unit cell; larger counts replicate the
/// cell on a cubic grid, rescaled into [0, 1], with coincident boundary
/// nodes merged. Fails with `InvalidTiling` for a tiling count of 0.
pub fn generate(family: LatticeFamily, tiling: usize) -> Result<Topology> {
    if tiling == 0 {
        return Err(TopologyError::InvalidTiling);
    }

    let cell = unit_cell(family);
    let scale = 1.0 / tiling as f64;

    let mut nodes: Vec<Vector3<f64>> = Vec::new();
    let mut edges: BTreeSet<(usize, usize)> = BTreeSet::new();

    // Cell offsets in lexicographic order keep the node sequence, and with
    // it every downstream index, deterministic.
    for i in 0..tiling {
        for j in 0..tiling {
            for k in 0..tiling {
                let offset = Vector3::new(i as f64, j as f64, k as f64);
                // Map each unit-cell node to its index in the merged
                // sequence; shared boundary nodes collapse onto the first
                // occurrence.
                let index_of: Vec<usize> = cell
                    .nodes
                    .iter()
                    .map(|p| {
                        let q = (offset + p) * scale;
                        merge_node(&mut nodes, q)
                    })
                    .collect();
                for &(a, b) in &cell.edges {
                    let (a, b) = (index_of[a], index_of[b]);
                    edges.insert(if a < b { (a, b) } else { (b, a) });
                }
            }
        }
    }

    Ok(Topology {
        family,
        tiling,
        nodes,
        edges: edges.into_iter().collect(),
    })
}

/// Return the index of `p` in `nodes`, appending it if no existing node
/// coincides within the coordinate tolerance.
fn merge_node(nodes: &mut Vec<Vector3<f64>>, p: Vector3<f64>) -> usize {
    match nodes
        .iter()
        .position(|q| (q - p).norm() < COORDINATE_TOLERANCE)
    {
        Some(i) => i,
        None => {
            nodes.push(p);
            nodes.len() - 1
        }
    }
}
