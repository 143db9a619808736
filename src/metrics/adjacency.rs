use nalgebra::DMatrix;

/// Number of edges incident to each node, in node-index order.
///
/// The sum over the sequence is exactly twice the edge count (handshake
/// lemma); callers rely on that identity and the tests assert it.
pub fn degree_sequence(node_count: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut degrees = vec![0usize; node_count];
    for &(a, b) in edges {
        degrees[a] += 1;
        degrees[b] += 1;
    }
    degrees
}

/// Symmetric 0/1 adjacency matrix with zero diagonal.
///
/// `m[(i, j)] == 1` iff (i, j) is an edge in either order. Row sums equal
/// the degree sequence by construction.
pub fn adjacency_matrix(node_count: usize, edges: &[(usize, usize)]) -> DMatrix<u8> {
    let mut m = DMatrix::zeros(node_count, node_count);
    for &(a, b) in edges {
        m[(a, b)] = 1;
        m[(b, a)] = 1;
    }
    m
}
