//! Order-preserving deduplication.

use std::collections::HashSet;

/// Returns the first occurrence of each string, in original order.
///
/// Comparison is exact (case- and whitespace-sensitive).
pub fn dedupe<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let item = item.into();
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}
