use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Sort a slice in place, ascending by a derived key.
///
/// The sort is stable: records with equal keys keep their relative order.
/// This mutates the input; callers that need the original order must copy
/// first.
///
/// ```
/// use etude::seq::sort_by_key;
///
/// let mut ages = vec![("Pete", 30), ("John", 25), ("Mary", 28)];
/// sort_by_key(&mut ages, |record| record.1);
/// assert_eq!(ages[0].0, "John");
/// assert_eq!(ages[1].0, "Mary");
/// assert_eq!(ages[2].0, "Pete");
/// ```
pub fn sort_by_key<T, K, F>(items: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    items.sort_by_key(|item| key(item));
}

/// Return the mean of a value derived from each record, or `None` if the
/// sequence is empty.
///
/// ```
/// use etude::seq::average_by;
///
/// let ages = [("John", 25), ("Pete", 30), ("Mary", 29)];
/// assert_eq!(average_by(&ages, |record| record.1 as f64), Some(28.0));
/// ```
pub fn average_by<T, F>(items: &[T], value: F) -> Option<f64>
where
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return None;
    }
    let total: f64 = items.iter().map(value).sum();
    return Some(total / items.len() as f64);
}

/// Collect records into a map from a derived key to the record itself.
///
/// If two records share a key, the later one wins, overwriting the earlier.
pub fn group_by_key<T, K, F>(items: Vec<T>, key: F) -> FxHashMap<K, T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups = FxHashMap::default();
    for item in items {
        groups.insert(key(&item), item);
    }
    return groups;
}
