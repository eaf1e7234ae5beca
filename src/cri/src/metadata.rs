//! Label/annotation merge.
//!
//! The provider has labels only, so annotations travel as labels. The
//! distinction is lost after the merge.

use std::collections::HashMap;

/// Merge annotations over labels; annotation values win on collision.
pub fn merge_labels(
    labels: &HashMap<String, String>,
    annotations: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut merged = labels.clone();
    for (key, value) in annotations {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
