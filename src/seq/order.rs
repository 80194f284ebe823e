use rand::Rng;
use rand::seq::SliceRandom;

/// Sort a slice in decreasing order using the negated comparator.
///
/// Equivalent to [`sort_then_reverse`]; both are stable, so they agree on
/// every input where equal elements are indistinguishable.
///
/// ```
/// use etude::seq::sort_descending;
///
/// let mut values = [5, 2, 1, -10, 8];
/// sort_descending(&mut values);
/// assert_eq!(values, [8, 5, 2, 1, -10]);
/// ```
pub fn sort_descending<T: Ord>(items: &mut [T]) {
    items.sort_by(|a, b| b.cmp(a));
}

/// Sort a slice in decreasing order by sorting ascending and reversing.
///
/// The other way to get a descending order; see [`sort_descending`].
pub fn sort_then_reverse<T: Ord>(items: &mut [T]) {
    items.sort();
    items.reverse();
}

/// Return a sorted copy of a slice, leaving the input unmodified.
///
/// Ordering is the element type's natural `Ord`, so strings sort
/// lexicographically.
///
/// ```
/// use etude::seq::copy_sorted;
///
/// let values = ["HTML", "JavaScript", "CSS"];
/// assert_eq!(copy_sorted(&values), ["CSS", "HTML", "JavaScript"]);
/// assert_eq!(values, ["HTML", "JavaScript", "CSS"]);
/// ```
pub fn copy_sorted<T>(items: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut sorted = items.to_vec();
    sorted.sort();
    return sorted;
}

/// Shuffle a slice uniformly at random.
///
/// This is an unbiased Fisher-Yates shuffle. Sorting with a random
/// comparator does not produce a uniform permutation and violates the
/// comparator contract, so it is not used.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sort_descending_orders_greatest_first() {
        let mut values = [5, 2, 1, -10, 8];
        sort_descending(&mut values);
        assert_eq!(values, [8, 5, 2, 1, -10]);
    }

    #[test]
    fn sort_then_reverse_orders_greatest_first() {
        let mut values = [5, 2, 1, -10, 8];
        sort_then_reverse(&mut values);
        assert_eq!(values, [8, 5, 2, 1, -10]);
    }

    #[test]
    fn both_descending_variants_agree() {
        let values = vec![3, -1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        let mut by_comparator = values.clone();
        let mut by_reverse = values.clone();
        sort_descending(&mut by_comparator);
        sort_then_reverse(&mut by_reverse);
        assert_eq!(by_comparator, by_reverse);
    }

    #[test]
    fn copy_sorted_returns_sorted_copy() {
        let values = ["HTML", "JavaScript", "CSS"];
        assert_eq!(copy_sorted(&values), ["CSS", "HTML", "JavaScript"]);
    }

    #[test]
    fn copy_sorted_leaves_input_unmodified() {
        let values = ["HTML", "JavaScript", "CSS"];
        let _ = copy_sorted(&values);
        assert_eq!(values, ["HTML", "JavaScript", "CSS"]);
    }

    #[test]
    fn copy_sorted_of_empty_is_empty() {
        let values: [i32; 0] = [];
        assert_eq!(copy_sorted(&values), Vec::<i32>::new());
    }

    #[test]
    fn shuffle_preserves_elements() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut values: Vec<u32> = (0..100).collect();
        shuffle(&mut values, &mut rng);
        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(sorted, (0..100).collect::<Vec<u32>>());
    }

    #[test]
    fn shuffle_is_deterministic_for_a_seed() {
        let mut values_a: Vec<u32> = (0..20).collect();
        let mut values_b: Vec<u32> = (0..20).collect();
        shuffle(&mut values_a, &mut StdRng::seed_from_u64(7));
        shuffle(&mut values_b, &mut StdRng::seed_from_u64(7));
        assert_eq!(values_a, values_b);
    }
}
