//! Order-preserving set union.

use std::collections::HashSet;
use std::hash::Hash;

/// Combines the given sequences into one, keeping each distinct element
/// exactly once in first-seen order.
///
/// Used to build deduplicated identity lists from multiple upstream
/// sources before they reach the schedule or vote-account queries.
pub fn combine_unique<T>(sources: &[&[T]]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = HashSet::new();
    let mut combined = Vec::new();
    for source in sources {
        for item in *source {
            if seen.insert(item.clone()) {
                combined.push(item.clone());
            }
        }
    }
    combined
}
