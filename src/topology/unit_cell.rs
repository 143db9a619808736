use nalgebra::Vector3;

use crate::config::{DIAMOND_BOND_LENGTH, KELVIN_STRUT_LENGTH, SEPARATION_TOLERANCE};
use crate::topology::distance_rule::edges_within_separation;
use crate::topology::family::LatticeFamily;

/// Node/edge pattern of a single unit cell in fractional coordinates.
///
/// Node coordinates lie in [0, 1]; edges are unordered index pairs stored
/// with the smaller index first.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCell {
    pub nodes: Vec<Vector3<f64>>,
    pub edges: Vec<(usize, usize)>,
}

/// Build the unit cell for a lattice family.
pub fn unit_cell(family: LatticeFamily) -> UnitCell {
    recipe(family)()
}

/// Strategy table mapping a family tag to its generation rule. Adding a
/// family means adding a recipe function and one arm here; nothing in the
/// generator or tiler needs to change.
fn recipe(family: LatticeFamily) -> fn() -> UnitCell {
    match family {
        LatticeFamily::SimpleCubic => simple_cubic_cell,
        LatticeFamily::Bcc => bcc_cell,
        LatticeFamily::Fcc => fcc_cell,
        LatticeFamily::Octet => octet_cell,
        LatticeFamily::Kelvin => kelvin_cell,
        LatticeFamily::Diamond => diamond_cell,
    }
}

/// The 8 corners of the unit cube, ordered so that corner `i` sits at
/// (i & 1, (i >> 1) & 1, (i >> 2) & 1).
pub fn cube_corners() -> Vec<Vector3<f64>> {
    (0..8)
        .map(|i| {
            Vector3::new(
                (i & 1) as f64,
                ((i >> 1) & 1) as f64,
                ((i >> 2) & 1) as f64,
            )
        })
        .collect()
}

/// The 12 axis-aligned cube edges: every pair of corners differing in
/// exactly one coordinate.
pub fn cube_edge_skeleton(corners: &[Vector3<f64>]) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for a in 0..corners.len() {
        for b in (a + 1)..corners.len() {
            let differing = (0..3)
                .filter(|&k| corners[a][k] != corners[b][k])
                .count();
            if differing == 1 {
                edges.push((a, b));
            }
        }
    }
    edges
}

/// Simple cubic: the 8 corners joined by the axis-aligned skeleton.
fn simple_cubic_cell() -> UnitCell {
    let nodes = cube_corners();
    let edges = cube_edge_skeleton(&nodes);
    UnitCell { nodes, edges }
}

/// BCC: corners plus a body-center node bonded to every corner.
fn bcc_cell() -> UnitCell {
    let mut nodes = cube_corners();
    let mut edges = cube_edge_skeleton(&nodes);
    let center = nodes.len();
    nodes.push(Vector3::new(0.5, 0.5, 0.5));
    for corner in 0..center {
        edges.push((corner, center));
    }
    UnitCell { nodes, edges }
}

/// FCC: corners plus one face-center node per pair of parallel faces, each
/// bonded to the 4 corners bounding its face.
fn fcc_cell() -> UnitCell {
    let mut nodes = cube_corners();
    let mut edges = cube_edge_skeleton(&nodes);
    let face_centers = [
        Vector3::new(0.5, 0.5, 0.0),
        Vector3::new(0.5, 0.0, 0.5),
        Vector3::new(0.0, 0.5, 0.5),
    ];
    for fc in face_centers {
        let fi = nodes.len();
        // A corner bounds the face when it matches the face center on every
        // axis where the center sits on the cell boundary.
        for ci in 0..8 {
            let on_face = (0..3)
                .filter(|&k| fc[k] != 0.5)
                .all(|k| nodes[ci][k] == fc[k]);
            if on_face {
                edges.push((ci, fi));
            }
        }
        nodes.push(fc);
    }
    UnitCell { nodes, edges }
}

/// Octet: the same node and strut pattern as BCC in this minimal unit-cell
/// form. The family is distinguished by its descriptive metadata and kept
/// as a separate tag so a fuller octet-truss rule can replace this recipe
/// without touching the dispatch.
fn octet_cell() -> UnitCell {
    bcc_cell()
}

/// Kelvin: the 24 vertices of a tetrakaidecahedron (truncated octahedron)
/// centered in the cell, joined by its 36 struts of length sqrt(2)/4.
///
/// Vertices are all permutations of (0, +-1/4, +-1/2) offset to the cell
/// center; every vertex has degree 3 and the cell is connected.
fn kelvin_cell() -> UnitCell {
    let center = Vector3::new(0.5, 0.5, 0.5);
    let mut nodes = Vec::with_capacity(24);
    // Axis permutations of (0, q, h): zero_axis takes 0, then the remaining
    // two axes take the quarter and half components in both arrangements.
    for zero_axis in 0..3 {
        let (u, v) = match zero_axis {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        for swap in [false, true] {
            for q_sign in [-1.0, 1.0] {
                for h_sign in [-1.0, 1.0] {
                    let mut p = center;
                    let (q_axis, h_axis) = if swap { (v, u) } else { (u, v) };
                    p[q_axis] += q_sign * 0.25;
                    p[h_axis] += h_sign * 0.5;
                    nodes.push(p);
                }
            }
        }
    }
    let edges = edges_within_separation(&nodes, KELVIN_STRUT_LENGTH, SEPARATION_TOLERANCE);
    UnitCell { nodes, edges }
}

/// Diamond: diamond-cubic sites (corners, face centers, and 4 tetrahedral
/// interior sites) bonded at the tetrahedral bond length sqrt(3)/4.
///
/// A single cell is genuinely disconnected: only 4 of the 8 corners carry
/// a bond inside one cell, so the fragment has 5 components.
fn diamond_cell() -> UnitCell {
    let mut nodes = cube_corners();
    // All 6 face centers, one per cube face.
    for axis in 0..3 {
        for boundary in [0.0, 1.0] {
            let mut fc = Vector3::new(0.5, 0.5, 0.5);
            fc[axis] = boundary;
            nodes.push(fc);
        }
    }
    // Tetrahedral interior sites of the diamond-cubic basis.
    nodes.push(Vector3::new(0.25, 0.25, 0.25));
    nodes.push(Vector3::new(0.75, 0.75, 0.25));
    nodes.push(Vector3::new(0.75, 0.25, 0.75));
    nodes.push(Vector3::new(0.25, 0.75, 0.75));
    let edges = edges_within_separation(&nodes, DIAMOND_BOND_LENGTH, SEPARATION_TOLERANCE);
    UnitCell { nodes, edges }
}
