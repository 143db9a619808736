use std::collections::VecDeque;

/// Count the maximal reachability classes of the undirected graph.
///
/// Breadth-first traversal from each not-yet-visited node; a connected
/// graph has exactly one component. A graph with zero nodes has zero
/// components.
pub fn connected_components(node_count: usize, edges: &[(usize, usize)]) -> usize {
    let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    for &(a, b) in edges {
        neighbors[a].push(b);
        neighbors[b].push(a);
    }

    let mut visited = vec![false; node_count];
    let mut queue = VecDeque::new();
    let mut components = 0;

    for start in 0..node_count {
        if visited[start] {
            continue;
        }
        components += 1;
        visited[start] = true;
        queue.push_back(start);
        while let Some(node) = queue.pop_front() {
            for &next in &neighbors[node] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
    }

    components
}
