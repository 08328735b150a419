use std::cmp::Ordering;

/// Straightforward quadratic implementation of the managed array operations.
///
/// Serves as reference for cross-checking `ManagedArray` and as baseline in benchmarks.
pub struct NaiveArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    comparator: C,
    data: Vec<T>,
    snapshot: Vec<T>,
    keep_sorted: bool,
}

#[allow(dead_code)]
impl<T, C> NaiveArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
    T: Clone,
{
    pub fn new(comparator: C, initial_state: Vec<T>, keep_sorted: bool) -> NaiveArray<T, C> {
        let mut array = NaiveArray {
            comparator,
            data: Vec::new(),
            snapshot: initial_state.clone(),
            keep_sorted,
        };
        array.set_array(initial_state);
        array
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn collect(&self) -> Vec<T> {
        self.data.clone()
    }

    pub fn set_array(&mut self, mut items: Vec<T>) {
        if self.keep_sorted {
            let comparator = &self.comparator;
            items.sort_by(|a, b| comparator(a, b));
        }
        self.data = items;
    }

    pub fn add_items(&mut self, items: Vec<T>) {
        let mut result = self.without(&items);
        result.extend(items);
        self.set_array(result);
    }

    pub fn remove_items(&mut self, items: &[T]) {
        let result = self.without(items);
        self.set_array(result);
    }

    pub fn are_equals(&self, items: &[T]) -> bool {
        self.without(items).is_empty()
    }

    pub fn are_equals_deep(&self, items: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.data.len() == items.len()
            && self.data.iter().all(|x| items.iter().any(|y| x == y))
            && items.iter().all(|y| self.data.iter().any(|x| x == y))
    }

    pub fn find(&self, t: &T) -> Option<&T> {
        self.data
            .iter()
            .find(|x| (self.comparator)(t, *x) == Ordering::Equal)
    }

    pub fn to_single_occurrence(&self) -> Vec<T> {
        let mut result: Vec<T> = Vec::new();
        for x in &self.data {
            if !result.iter().any(|y| (self.comparator)(x, y) == Ordering::Equal) {
                result.push(x.clone());
            }
        }
        result
    }

    pub fn reset(&mut self) {
        let snapshot = self.snapshot.clone();
        self.set_array(snapshot);
    }

    fn without(&self, items: &[T]) -> Vec<T> {
        self.data
            .iter()
            .filter(|x| !items.iter().any(|y| (self.comparator)(*x, y) == Ordering::Equal))
            .cloned()
            .collect()
    }
}
