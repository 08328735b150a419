//!
//! This crate provides [`ManagedArray`](./struct.ManagedArray.html), a sequence backing a piece of
//! observable state, mutated only through set operations driven by a user comparator:
//! upsert, removal, deduplication, shallow/deep comparison and reset.
//!
//! The comparator defines identity: two elements comparing `Equal` are the same logical
//! element, even if they differ in other fields. Every mutation commits a complete new
//! sequence through a [`StateCell`](./trait.StateCell.html), which is where an observing
//! layer can hook in.
//!
//! # Example
//!
//! ```
//! use managed_array::ManagedArray;
//!
//! fn comparator(a: &i32, b: &i32) -> std::cmp::Ordering {
//!     a.cmp(b)
//! }
//!
//! let mut array = ManagedArray::with_initial(comparator, vec![3, 1]);
//! assert_eq!(array.array(), &[1, 3]);
//!
//! array.add_item(2);
//! array.remove_item(&3);
//! assert_eq!(array.collect(), vec![1, 2]);
//!
//! // The snapshot taken at construction is returned verbatim...
//! assert_eq!(array.reset_array(), &[3, 1]);
//! // ...but committed sorted.
//! assert_eq!(array.array(), &[1, 3]);
//! ```
//!

mod cell;
mod error;
mod managed_array;
mod options;
mod search;

pub use crate::cell::{NotifyingCell, StateCell, VecCell};
pub use crate::error::ManagedArrayError;
pub use crate::managed_array::ManagedArray;
pub use crate::options::ManagedArrayOptions;
