//! Test fixture loader and deterministic synthetic pools for lookahead tests.
//!
//! JSON fixtures live under `crates/test-fixtures/datasets/`; generators
//! build small pools in code when a test needs a specific shape.

use std::path::PathBuf;

use lookahead_core::{Dataset, Responses};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    loop {
        let candidate = path.join("test-fixtures");
        if candidate.join("datasets").exists() {
            return candidate;
        }
        let sibling = path.join("crates").join("test-fixtures");
        if sibling.join("datasets").exists() {
            return sibling;
        }
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// A pool with oracle labels and a seed training set.
#[derive(Debug, Clone, Deserialize)]
pub struct LabeledPool {
    pub points: Dataset,
    pub labels: Responses,
    pub seed: Vec<usize>,
}

/// Load one of the bundled pools, e.g. `"three_clusters"`.
pub fn load_pool(name: &str) -> LabeledPool {
    load_fixture(&format!("datasets/{name}.json"))
}

/// `n` points on a line at 0, 1, 2, …
pub fn line(n: usize) -> Dataset {
    Dataset::from_rows((0..n).map(|i| vec![i as f64]).collect())
        .unwrap_or_else(|e| panic!("line({n}) fixture: {e}"))
}

/// `per_cluster` points around each of `centers`, jittered deterministically.
/// Points of cluster c are labeled positive iff `positive[c]`.
pub fn clusters(centers: &[[f64; 2]], positive: &[bool], per_cluster: usize) -> LabeledPool {
    assert_eq!(centers.len(), positive.len(), "one label per cluster");
    let mut rows = Vec::with_capacity(centers.len() * per_cluster);
    let mut labels = Vec::with_capacity(rows.capacity());
    for (c, center) in centers.iter().enumerate() {
        for p in 0..per_cluster {
            let angle = (p as f64) * 2.399_963; // golden angle
            let radius = 0.15 * ((p + 1) as f64).sqrt();
            rows.push(vec![center[0] + radius * angle.cos(), center[1] + radius * angle.sin()]);
            labels.push(positive[c]);
        }
    }
    LabeledPool {
        points: Dataset::from_rows(rows).unwrap_or_else(|e| panic!("clusters fixture: {e}")),
        labels: Responses::new(labels),
        seed: Vec::new(),
    }
}

/// Labels alternating positive/negative, starting positive.
pub fn alternating(n: usize) -> Responses {
    (0..n).map(|i| i % 2 == 0).collect()
}
