//! Euclidean minimum spanning tree over the full pool (dense Prim).
//!
//! O(N²) distance evaluations, O(N) memory: the complete graph is never
//! materialised.

use lookahead_core::Dataset;

/// MST edges as `(parent, child, distance)`. Empty for fewer than two points.
/// Among equally short frontier edges the lowest-index point joins first.
pub fn minimum_spanning_tree(data: &Dataset) -> Vec<(usize, usize, f64)> {
    let n = data.len();
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    if n < 2 {
        return edges;
    }

    let mut in_tree = vec![false; n];
    let mut best = vec![f64::INFINITY; n];
    let mut parent = vec![0usize; n];
    let mut current = 0;
    in_tree[0] = true;

    for _ in 1..n {
        for j in 0..n {
            if in_tree[j] {
                continue;
            }
            let d = data.distance(current, j);
            if d < best[j] {
                best[j] = d;
                parent[j] = current;
            }
        }

        let next = (0..n)
            .filter(|&j| !in_tree[j])
            .min_by(|&a, &b| best[a].total_cmp(&best[b]).then(a.cmp(&b)));
        let Some(next) = next else {
            break;
        };
        in_tree[next] = true;
        edges.push((parent[next], next, best[next]));
        current = next;
    }
    edges
}
