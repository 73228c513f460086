//! Brute-force Euclidean k-nearest-neighbour search and mutual filtering.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use lookahead_core::Dataset;
use rayon::prelude::*;

/// Neighbour list entry: (index, distance).
pub type Neighbour = (usize, f64);

fn by_distance_then_index(a: &Neighbour, b: &Neighbour) -> Ordering {
    a.1.total_cmp(&b.1).then(a.0.cmp(&b.0))
}

/// The `k` nearest neighbours of every point, closest first.
/// Equal distances are broken towards the lower index. Rows are computed in
/// parallel.
pub fn nearest_neighbours(data: &Dataset, k: usize) -> Vec<Vec<Neighbour>> {
    let n = data.len();
    (0..n)
        .into_par_iter()
        .map(|i| {
            let mut candidates: Vec<Neighbour> = (0..n)
                .filter(|&j| j != i)
                .map(|j| (j, data.distance(i, j)))
                .collect();
            if k < candidates.len() {
                candidates.select_nth_unstable_by(k, by_distance_then_index);
                candidates.truncate(k);
            }
            candidates.sort_by(by_distance_then_index);
            candidates
        })
        .collect()
}

/// Undirected edges from neighbour lists, keyed `(min, max)` with their distance.
///
/// With `mutual`, an edge survives only if each endpoint lists the other;
/// otherwise the symmetric union is returned.
pub fn neighbour_edges(neighbours: &[Vec<Neighbour>], mutual: bool) -> BTreeMap<(usize, usize), f64> {
    let mut votes: BTreeMap<(usize, usize), (f64, u8)> = BTreeMap::new();
    for (i, row) in neighbours.iter().enumerate() {
        for &(j, distance) in row {
            let key = (i.min(j), i.max(j));
            votes.entry(key).or_insert((distance, 0)).1 += 1;
        }
    }
    let required = if mutual { 2 } else { 1 };
    votes
        .into_iter()
        .filter(|(_, (_, count))| *count >= required)
        .map(|(key, (distance, _))| (key, distance))
        .collect()
}
