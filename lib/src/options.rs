/// Construction-time policy of a [`ManagedArray`](crate::ManagedArray).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManagedArrayOptions {
    /// Sort every committed sequence by the comparator.
    pub keep_sorted: bool,
}

impl ManagedArrayOptions {
    /// Options with sort-on-write enabled (same as `Default`).
    pub fn new() -> ManagedArrayOptions {
        ManagedArrayOptions { keep_sorted: true }
    }

    /// Options preserving insertion order on every commit.
    pub fn unsorted() -> ManagedArrayOptions {
        ManagedArrayOptions::new().keep_sorted(false)
    }

    /// Sets whether every commit sorts the sequence by the comparator.
    pub fn keep_sorted(mut self, keep_sorted: bool) -> ManagedArrayOptions {
        self.keep_sorted = keep_sorted;
        self
    }
}

impl Default for ManagedArrayOptions {
    fn default() -> Self {
        ManagedArrayOptions::new()
    }
}
