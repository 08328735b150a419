use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::cell::{StateCell, VecCell};
use crate::error::ManagedArrayError;
use crate::options::ManagedArrayOptions;
use crate::search::{binary_search_by, contains_by, first_equal_by, sorted_refs_by};

// A sequence mutated only through comparator-driven set operations. Every mutation
// builds a complete new sequence and commits it through `set_array`.
pub struct ManagedArray<T, C, S = VecCell<T>>
where
    C: Fn(&T, &T) -> Ordering,
    S: StateCell<T>,
{
    comparator: C,
    cell: S,
    snapshot: Vec<T>,
    options: ManagedArrayOptions,
}

impl<T, C> ManagedArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
    T: Clone,
{
    /// Creates an empty `ManagedArray` which keeps its elements sorted.
    pub fn new(comparator: C) -> ManagedArray<T, C> {
        ManagedArray::with_options(comparator, Vec::new(), ManagedArrayOptions::default())
    }

    /// Creates a `ManagedArray` which keeps its elements sorted, starting from `initial_state`.
    pub fn with_initial(comparator: C, initial_state: Vec<T>) -> ManagedArray<T, C> {
        ManagedArray::with_options(comparator, initial_state, ManagedArrayOptions::default())
    }

    /// Creates a `ManagedArray` with explicit control over the sort policy.
    pub fn with_options(
        comparator: C,
        initial_state: Vec<T>,
        options: ManagedArrayOptions,
    ) -> ManagedArray<T, C> {
        ManagedArray::with_cell(comparator, initial_state, options, VecCell::new())
    }

    /// Consumes the array, returning the committed sequence.
    pub fn into_vec(self) -> Vec<T> {
        self.cell.into_inner()
    }
}

impl<T, C, S> ManagedArray<T, C, S>
where
    C: Fn(&T, &T) -> Ordering,
    S: StateCell<T>,
    T: Clone,
{
    /// Creates a `ManagedArray` committing into a caller-supplied cell.
    ///
    /// The initial state is committed through the cell right away, so an observing
    /// cell is notified once during construction. The snapshot used by
    /// [`reset_array`](Self::reset_array) is `initial_state` verbatim, even if the
    /// committed sequence gets sorted.
    pub fn with_cell(
        comparator: C,
        initial_state: Vec<T>,
        options: ManagedArrayOptions,
        cell: S,
    ) -> ManagedArray<T, C, S> {
        let mut array = ManagedArray {
            comparator,
            cell,
            snapshot: initial_state.clone(),
            options,
        };
        array.set_array(initial_state);
        array
    }

    /// The committed sequence.
    #[inline]
    pub fn array(&self) -> &[T] {
        self.cell.read()
    }

    /// The sequence given at construction, never sorted.
    pub fn snapshot(&self) -> &[T] {
        &self.snapshot
    }

    pub fn keep_sorted(&self) -> bool {
        self.options.keep_sorted
    }

    pub fn options(&self) -> ManagedArrayOptions {
        self.options
    }

    /// Returns the length (i.e., number of elements stored).
    pub fn len(&self) -> usize {
        self.array().len()
    }

    pub fn is_empty(&self) -> bool {
        self.array().is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.array().iter()
    }

    /// Traverse collection given a callback.
    pub fn traverse<F>(&self, mut f: F)
    where
        F: FnMut(usize, &T),
    {
        for (i, x) in self.array().iter().enumerate() {
            f(i, x);
        }
    }

    /// Collect collection into a vector.
    pub fn collect(&self) -> Vec<T> {
        self.array().to_vec()
    }

    /// Replace the whole sequence.
    ///
    /// The items are stably sorted first if the array keeps its elements sorted. No
    /// deduplication takes place. All other mutations commit through here.
    pub fn set_array(&mut self, mut items: Vec<T>) -> &[T] {
        if self.options.keep_sorted {
            let comparator = &self.comparator;
            items.sort_by(|a, b| comparator(a, b));
        }
        trace!(len = items.len(), sorted = self.options.keep_sorted, "committing array");
        self.cell.write(items);
        self.cell.read()
    }

    /// Upsert a single value, see [`add_items`](Self::add_items).
    pub fn add_item(&mut self, t: T) -> &[T] {
        self.add_items(std::iter::once(t))
    }

    /// Upsert values.
    ///
    /// Every stored element comparing equal to any of the incoming values is dropped,
    /// the incoming values are appended in the given order, and the result is
    /// committed. Incoming values comparing equal to each other are all kept.
    ///
    /// Returns the committed sequence, i.e., after sorting if the array keeps its
    /// elements sorted.
    pub fn add_items<I>(&mut self, items: I) -> &[T]
    where
        I: IntoIterator<Item = T>,
    {
        let incoming: Vec<T> = items.into_iter().collect();
        let mut result = self.retained_without(&incoming);
        result.extend(incoming);
        self.set_array(result)
    }

    /// Remove a single value, see [`remove_items`](Self::remove_items).
    pub fn remove_item(&mut self, t: &T) -> &[T] {
        self.remove_items(std::slice::from_ref(t))
    }

    /// Remove every stored element comparing equal to any of `items`.
    ///
    /// Removing values which are not present leaves the elements unchanged, but still
    /// commits.
    pub fn remove_items(&mut self, items: &[T]) -> &[T] {
        let retained = self.retained_without(items);
        self.set_array(retained)
    }

    /// Shallow equality check using only the comparator.
    ///
    /// Note that this only checks that every stored element has a counterpart in
    /// `items`, i.e., it also holds if the stored elements are a strict subset of
    /// `items`. Use [`are_equals_deep`](Self::are_equals_deep) for an exact check.
    pub fn are_equals(&self, items: &[T]) -> bool {
        let sorted = sorted_refs_by(items, &self.comparator);
        self.array()
            .iter()
            .all(|x| contains_by(&sorted, x, &self.comparator))
    }

    /// Order-insensitive equality check using `PartialEq` instead of the comparator.
    ///
    /// Holds if both sides have the same length, and every element on either side has
    /// an equal element on the other side.
    pub fn are_equals_deep(&self, items: &[T]) -> bool
    where
        T: PartialEq,
    {
        let data = self.array();
        data.len() == items.len()
            && data.iter().all(|x| items.contains(x))
            && items.iter().all(|y| data.contains(y))
    }

    /// Try to find the first element comparing equal to `t`.
    pub fn find_in_array(&self, t: &T) -> Option<&T> {
        let data = self.array();
        if self.options.keep_sorted {
            first_equal_by(data, t, &self.comparator).map(|idx| &data[idx])
        } else {
            data.iter()
                .find(|x| (self.comparator)(t, *x) == Ordering::Equal)
        }
    }

    pub fn contains(&self, t: &T) -> bool {
        self.find_in_array(t).is_some()
    }

    /// Returns the elements with only the first of any comparator-equal elements kept.
    ///
    /// Order of the kept elements is preserved. The stored elements are not modified.
    pub fn to_single_occurrence(&self) -> Vec<T> {
        let data = self.array();
        let mut seen: Vec<&T> = Vec::with_capacity(data.len());
        let mut result = Vec::with_capacity(data.len());
        for x in data {
            let (idx, equals) = binary_search_by(&seen, |y| (self.comparator)(*y, x));
            if !equals {
                seen.insert(idx, x);
                result.push(x.clone());
            }
        }
        result
    }

    /// Commit the snapshot taken at construction and return it.
    ///
    /// If the array keeps its elements sorted, the committed sequence is sorted even
    /// though the returned snapshot may not be.
    pub fn reset_array(&mut self) -> &[T] {
        debug!(len = self.snapshot.len(), "resetting array to initial state");
        let snapshot = self.snapshot.clone();
        self.set_array(snapshot);
        &self.snapshot
    }

    /// Check that the committed sequence is sorted, if the array keeps its elements
    /// sorted. This can only fail for comparators which are not a consistent ordering.
    pub fn validate(&self) -> Result<(), ManagedArrayError> {
        if !self.options.keep_sorted {
            return Ok(());
        }
        let data = self.array();
        for index in 1 .. data.len() {
            if (self.comparator)(&data[index - 1], &data[index]) == Ordering::Greater {
                return Err(ManagedArrayError::NotSorted { index });
            }
        }
        Ok(())
    }

    /// Check that no two stored elements compare equal.
    pub fn validate_unique(&self) -> Result<(), ManagedArrayError> {
        let data = self.array();
        let mut indices: Vec<usize> = (0 .. data.len()).collect();
        indices.sort_by(|&a, &b| (self.comparator)(&data[a], &data[b]));
        for pair in indices.windows(2) {
            if (self.comparator)(&data[pair[0]], &data[pair[1]]) == Ordering::Equal {
                return Err(ManagedArrayError::Duplicate {
                    first: pair[0],
                    second: pair[1],
                });
            }
        }
        Ok(())
    }

    fn retained_without(&self, items: &[T]) -> Vec<T> {
        let sorted = sorted_refs_by(items, &self.comparator);
        self.array()
            .iter()
            .filter(|x| !contains_by(&sorted, *x, &self.comparator))
            .cloned()
            .collect()
    }
}

impl<T, C, S> std::ops::Deref for ManagedArray<T, C, S>
where
    C: Fn(&T, &T) -> Ordering,
    S: StateCell<T>,
{
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.cell.read()
    }
}

impl<T, C, S> AsRef<[T]> for ManagedArray<T, C, S>
where
    C: Fn(&T, &T) -> Ordering,
    S: StateCell<T>,
{
    fn as_ref(&self) -> &[T] {
        self.cell.read()
    }
}

impl<'a, T, C, S> IntoIterator for &'a ManagedArray<T, C, S>
where
    C: Fn(&T, &T) -> Ordering,
    S: StateCell<T>,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cell.read().iter()
    }
}

#[cfg(feature = "indextrait")]
impl<T, C, S> std::ops::Index<usize> for ManagedArray<T, C, S>
where
    C: Fn(&T, &T) -> Ordering,
    S: StateCell<T>,
{
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.cell.read()[idx]
    }
}

impl<T, C, S> std::fmt::Debug for ManagedArray<T, C, S>
where
    C: Fn(&T, &T) -> Ordering,
    S: StateCell<T>,
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("ManagedArray")
            .field("array", &self.cell.read())
            .field("snapshot", &self.snapshot)
            .field("keep_sorted", &self.options.keep_sorted)
            .finish()
    }
}
