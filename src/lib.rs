//! An array-backed binary heap whose items are ordered by a caller-supplied
//! [`TotalOrder`] rather than by the [`Ord`] trait.
//!
//! The heap always yields the *least* item under its order first. A max-heap
//! is obtained by wrapping the order in [`ReverseOrder`].
//!
//! ```
//! use priority_heap::{FnOrder, PriorityHeap};
//!
//! // Order tasks by deadline, earliest first.
//! struct Task {
//!     deadline: u32,
//!     name: &'static str,
//! }
//!
//! let mut queue = PriorityHeap::new(FnOrder::new(|a: &Task, b: &Task| a.deadline.cmp(&b.deadline)));
//! queue.push(Task { deadline: 30, name: "deploy" });
//! queue.push(Task { deadline: 10, name: "review" });
//! queue.push(Task { deadline: 20, name: "test" });
//!
//! let names: Vec<_> = core::iter::from_fn(|| queue.pop()).map(|t| t.name).collect();
//! assert_eq!(names, ["review", "test", "deploy"]);
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "error_in_core", feature(error_in_core))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]

extern crate alloc;

use core::cmp::Ordering;

mod error;
pub mod heap;
pub mod order;

pub use error::HeapError;
pub use heap::PriorityHeap;
pub use order::{FnOrder, KeyOrder, OrdTotalOrder, ReverseOrder};

/// A total order over values of type `T`, held at runtime by a collection.
///
/// Implementations must be consistent: `cmp` must be antisymmetric and
/// transitive, and must return the same answer for the same pair of values for
/// as long as those values are held by a collection. Violating this is a logic
/// error; the behaviour of the heap is then unspecified, but never undefined.
pub trait TotalOrder<T: ?Sized> {
    /// Compare `this` against `that`.
    fn cmp(&self, this: &T, that: &T) -> Ordering;

    /// Tests whether `this` orders strictly before `that`.
    fn lt(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_lt()
    }
    /// Tests whether `this` orders before or equal to `that`.
    fn le(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_le()
    }
    /// Tests whether `this` orders strictly after `that`.
    fn gt(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_gt()
    }
    /// Tests whether `this` orders after or equal to `that`.
    fn ge(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_ge()
    }
}

impl<T: ?Sized, O: ?Sized + TotalOrder<T>> TotalOrder<T> for &O {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        (**self).cmp(this, that)
    }
    fn lt(&self, this: &T, that: &T) -> bool {
        (**self).lt(this, that)
    }
    fn le(&self, this: &T, that: &T) -> bool {
        (**self).le(this, that)
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        (**self).gt(this, that)
    }
    fn ge(&self, this: &T, that: &T) -> bool {
        (**self).ge(this, that)
    }
}

#[cfg(test)]
mod testing;
