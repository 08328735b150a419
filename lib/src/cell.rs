//! Storage cells holding the committed sequence of a [`ManagedArray`](crate::ManagedArray).
//!
//! A cell is the seam to whatever layer observes the state (for instance a UI
//! framework that re-renders on change). The managed array only ever calls
//! [`StateCell::write`] with a complete sequence, once per commit.

/// Storage for the committed sequence.
pub trait StateCell<T> {
    /// The currently committed sequence.
    fn read(&self) -> &[T];

    /// Replace the committed sequence. Implementations trigger their downstream
    /// notification here.
    fn write(&mut self, items: Vec<T>);
}

/// Plain in-memory cell without any notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VecCell<T> {
    data: Vec<T>,
}

impl<T> VecCell<T> {
    pub fn new() -> VecCell<T> {
        VecCell { data: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T> Default for VecCell<T> {
    fn default() -> Self {
        VecCell::new()
    }
}

impl<T> StateCell<T> for VecCell<T> {
    #[inline]
    fn read(&self) -> &[T] {
        &self.data
    }

    fn write(&mut self, items: Vec<T>) {
        self.data = items;
    }
}

/// Cell invoking an observer with the freshly committed sequence after each write.
///
/// # Example
///
/// ```
/// use managed_array::{ManagedArray, ManagedArrayOptions, NotifyingCell};
///
/// let mut renders = 0;
/// {
///     let cell = NotifyingCell::new(|_: &[i32]| renders += 1);
///     let mut array = ManagedArray::with_cell(
///         |a: &i32, b: &i32| a.cmp(b),
///         vec![2, 1],
///         ManagedArrayOptions::default(),
///         cell,
///     );
///     array.add_item(3);
/// }
/// assert_eq!(renders, 2);
/// ```
pub struct NotifyingCell<T, F>
where
    F: FnMut(&[T]),
{
    data: Vec<T>,
    observer: F,
    num_writes: usize,
}

impl<T, F> NotifyingCell<T, F>
where
    F: FnMut(&[T]),
{
    pub fn new(observer: F) -> NotifyingCell<T, F> {
        NotifyingCell {
            data: Vec::new(),
            observer,
            num_writes: 0,
        }
    }

    /// Number of writes (and thus notifications) so far.
    pub fn num_writes(&self) -> usize {
        self.num_writes
    }
}

impl<T, F> StateCell<T> for NotifyingCell<T, F>
where
    F: FnMut(&[T]),
{
    #[inline]
    fn read(&self) -> &[T] {
        &self.data
    }

    fn write(&mut self, items: Vec<T>) {
        self.data = items;
        self.num_writes += 1;
        (self.observer)(&self.data);
    }
}

impl<T, F> std::fmt::Debug for NotifyingCell<T, F>
where
    T: std::fmt::Debug,
    F: FnMut(&[T]),
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("NotifyingCell")
            .field("data", &self.data)
            .field("num_writes", &self.num_writes)
            .finish()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vec_cell() {
        let mut cell = VecCell::new();
        assert_eq!(cell.read(), &[] as &[i32]);
        cell.write(vec![1, 2]);
        assert_eq!(cell.read(), &[1, 2]);
        assert_eq!(cell.into_inner(), vec![1, 2]);
    }

    #[test]
    fn test_notifying_cell_sees_every_write() {
        let mut seen = Vec::new();
        {
            let mut cell = NotifyingCell::new(|items: &[i32]| seen.push(items.to_vec()));
            cell.write(vec![3]);
            cell.write(vec![]);
            cell.write(vec![1, 2]);
            assert_eq!(cell.num_writes(), 3);
            assert_eq!(cell.read(), &[1, 2]);
        }
        assert_eq!(seen, vec![vec![3], vec![], vec![1, 2]]);
    }
}
