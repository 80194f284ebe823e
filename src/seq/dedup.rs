use std::hash::Hash;

use rustc_hash::FxHashSet;

/// Return the distinct values of a sequence, each exactly once, in order
/// of first appearance.
///
/// Uses a seen-set so the whole pass is O(n) rather than rescanning the
/// output for every element.
///
/// ```
/// use etude::seq::unique;
///
/// let values = ["Hare", "Krishna", "Hare", "Krishna", ":-O"];
/// assert_eq!(unique(&values), ["Hare", "Krishna", ":-O"]);
/// ```
pub fn unique<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = FxHashSet::default();
    let mut result = Vec::new();

    for item in items {
        if seen.insert(item) {
            result.push(item.clone());
        }
    }

    return result;
}
