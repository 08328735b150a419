use std::cmp::Ordering;

// Note: We are using our own implementation of binary search, because the implementation
// in the standard library is optimized for fast comparison functions, and requires more
// comparison function evaluations. User comparators on records are typically not cheap.
pub(crate) fn binary_search_by<T, F>(data: &[T], mut f: F) -> (usize, bool)
where
    F: FnMut(&T) -> Ordering,
{
    if data.is_empty() {
        return (0, false);
    }
    let mut l: usize = 0;
    let mut r: usize = data.len();

    while r > l {
        let mid = l + (r - l) / 2;

        match f(&data[mid]) {
            Ordering::Greater => {
                r = mid;
            }
            Ordering::Equal => {
                return (mid, true)
            }
            Ordering::Less => {
                l = mid + 1;
            }
        }
    }

    (r, false)
}

/// Returns the index of the first element of `data` that compares equal to `t`.
///
/// `data` must be sorted by `comparator`. Since equal elements form a contiguous run in a
/// sorted slice, the first element of the run is also the first match in sequence order.
pub(crate) fn first_equal_by<T, C>(data: &[T], t: &T, comparator: &C) -> Option<usize>
where
    C: Fn(&T, &T) -> Ordering,
{
    let (mut idx, equals) = binary_search_by(data, |x| comparator(x, t));
    if !equals {
        return None;
    }
    while idx > 0 && comparator(t, &data[idx - 1]) == Ordering::Equal {
        idx -= 1;
    }
    Some(idx)
}

/// Collects references to `items` sorted by `comparator`, for repeated membership tests.
pub(crate) fn sorted_refs_by<'a, T, C>(items: &'a [T], comparator: &C) -> Vec<&'a T>
where
    C: Fn(&T, &T) -> Ordering,
{
    let mut refs: Vec<&T> = items.iter().collect();
    refs.sort_by(|a, b| comparator(*a, *b));
    refs
}

/// Membership test against the output of `sorted_refs_by`.
#[inline]
pub(crate) fn contains_by<T, C>(sorted: &[&T], t: &T, comparator: &C) -> bool
where
    C: Fn(&T, &T) -> Ordering,
{
    binary_search_by(sorted, |x| comparator(*x, t)).1
}
