use nalgebra::Vector3;

/// Connect every pair of nodes whose Euclidean separation is within
/// `tol` of `max_separation` or closer.
///
/// This is the generation-time rule behind the Kelvin and Diamond families:
/// their strut lengths are fixed geometric constants (see `config`), so a
/// single threshold scan reproduces the combinatorial edge set exactly.
/// Pairs are scanned in index order and emitted with `a < b`, which keeps
/// the result deterministic for a given node sequence.
pub fn edges_within_separation(
    nodes: &[Vector3<f64>],
    max_separation: f64,
    tol: f64,
) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for a in 0..nodes.len() {
        for b in (a + 1)..nodes.len() {
            let separation = (nodes[b] - nodes[a]).norm();
            if separation <= max_separation + tol {
                edges.push((a, b));
            }
        }
    }
    edges
}
