/// Return the elements of `items` that fall inside the closed interval
/// `[low, high]`, preserving their relative order. The input is unchanged.
///
/// ```
/// use etude::seq::filter_range;
///
/// let values = [5, 3, 8, 1];
/// assert_eq!(filter_range(&values, 1, 4), [3, 1]);
/// assert_eq!(values, [5, 3, 8, 1]);
/// ```
pub fn filter_range<T>(items: &[T], low: T, high: T) -> Vec<T>
where
    T: PartialOrd + Copy,
{
    return items
        .iter()
        .copied()
        .filter(|item| low <= *item && *item <= high)
        .collect();
}

/// Remove the elements of `items` that fall outside the closed interval
/// `[low, high]`, in place, preserving the relative order of kept elements.
///
/// Removal goes through `Vec::retain`, which inspects every element exactly
/// once. Removing by index while iterating forward would skip the element
/// after each removal; that approach is a known hazard and is not used here.
///
/// ```
/// use etude::seq::filter_range_in_place;
///
/// let mut values = vec![5, 3, 8, 1];
/// filter_range_in_place(&mut values, 1, 4);
/// assert_eq!(values, [3, 1]);
/// ```
pub fn filter_range_in_place<T>(items: &mut Vec<T>, low: T, high: T)
where
    T: PartialOrd + Copy,
{
    items.retain(|item| low <= *item && *item <= high);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_values_in_bounds() {
        assert_eq!(filter_range(&[5, 3, 8, 1], 1, 4), [3, 1]);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(filter_range(&[1, 2, 3, 4, 5], 2, 4), [2, 3, 4]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let values: [i32; 0] = [];
        assert_eq!(filter_range(&values, 0, 10), Vec::<i32>::new());
    }

    #[test]
    fn nothing_in_range_yields_empty_output() {
        assert_eq!(filter_range(&[10, 20, 30], 1, 4), Vec::<i32>::new());
    }

    #[test]
    fn input_is_not_modified() {
        let values = [5, 3, 8, 1];
        let _ = filter_range(&values, 1, 4);
        assert_eq!(values, [5, 3, 8, 1]);
    }

    #[test]
    fn in_place_removes_out_of_range_values() {
        let mut values = vec![5, 3, 8, 1];
        filter_range_in_place(&mut values, 1, 4);
        assert_eq!(values, [3, 1]);
    }

    #[test]
    fn in_place_does_not_skip_adjacent_removals() {
        // Consecutive out-of-range elements are the case the forward-index
        // removal bug gets wrong.
        let mut values = vec![9, 9, 9, 2, 9, 9, 3];
        filter_range_in_place(&mut values, 1, 4);
        assert_eq!(values, [2, 3]);
    }

    #[test]
    fn in_place_agrees_with_non_mutating_variant() {
        let values = vec![7, 1, 4, 9, 0, 3, 3, 12];
        let filtered = filter_range(&values, 1, 4);
        let mut in_place = values.clone();
        filter_range_in_place(&mut in_place, 1, 4);
        assert_eq!(in_place, filtered);
    }

    #[test]
    fn works_with_floats() {
        assert_eq!(filter_range(&[0.5, 1.5, 2.5], 1.0, 2.0), [1.5]);
    }
}
