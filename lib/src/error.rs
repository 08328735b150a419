use thiserror::Error;

/// Invariant violations reported by the validation helpers of
/// [`ManagedArray`](crate::ManagedArray).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ManagedArrayError {
    #[error("element at index {index} orders before its predecessor")]
    NotSorted { index: usize },

    #[error("elements at index {first} and {second} compare equal")]
    Duplicate { first: usize, second: usize },
}
