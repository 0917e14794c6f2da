//! Stock [`TotalOrder`] implementations.
//!
//! [`OrdTotalOrder`] makes a [`PriorityHeap`](crate::PriorityHeap) behave as a
//! min-heap under the item type's own [`Ord`] implementation. The remaining
//! types build orders from closures or invert an existing order.

use crate::TotalOrder;
use core::{cmp::Ordering, fmt, marker::PhantomData};

/// A zero-sized total order that delegates to the [`Ord`] implementation
/// of its type parameter `T`.
pub struct OrdTotalOrder<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> OrdTotalOrder<T> {
    /// Creates the natural order of `T`.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for OrdTotalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for OrdTotalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for OrdTotalOrder<T> {}

impl<T: ?Sized> fmt::Debug for OrdTotalOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrdTotalOrder")
    }
}

impl<T: ?Sized + Ord> TotalOrder<T> for OrdTotalOrder<T> {
    // Delegate to `T`'s implementation of [`Ord`].
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }

    // Overridden so that `T`'s own comparison operators are used; these are
    // what a heap of `T` calls on its hot path.

    fn ge(&self, this: &T, that: &T) -> bool {
        this >= that
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        this > that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this <= that
    }
    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }
}

/// Inverts another order, so that what the inner order ranks greatest is
/// ranked least.
///
/// `ReverseOrder<OrdTotalOrder<T>>` turns a [`PriorityHeap`](crate::PriorityHeap)
/// into a max-heap.
///
/// ```
/// use priority_heap::{OrdTotalOrder, PriorityHeap, ReverseOrder};
///
/// let mut heap = PriorityHeap::new(ReverseOrder(OrdTotalOrder::<i32>::new()));
/// heap.extend([12, 822, 2, 143, 1, 32, 61, 111]);
/// assert_eq!(heap.pop(), Some(822));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseOrder<O>(pub O);

impl<T: ?Sized, O: TotalOrder<T>> TotalOrder<T> for ReverseOrder<O> {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        self.0.cmp(that, this)
    }
    fn lt(&self, this: &T, that: &T) -> bool {
        self.0.lt(that, this)
    }
    fn le(&self, this: &T, that: &T) -> bool {
        self.0.le(that, this)
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        self.0.gt(that, this)
    }
    fn ge(&self, this: &T, that: &T) -> bool {
        self.0.ge(that, this)
    }
}

/// An order defined by a comparison closure.
///
/// ```
/// use priority_heap::{FnOrder, PriorityHeap};
///
/// // Even numbers before odd ones, otherwise unordered.
/// let mut heap = PriorityHeap::new(FnOrder::new(|a: &i32, b: &i32| (a % 2).abs().cmp(&(b % 2).abs())));
/// heap.extend([-4, 0, -12, 461, 3, 32, 135, 1]);
/// assert_eq!(heap.pop().map(|n| n % 2), Some(0));
/// ```
#[derive(Clone, Copy)]
pub struct FnOrder<F>(F);

impl<F> FnOrder<F> {
    /// Wraps `compare`, which must behave as a total order.
    pub const fn new(compare: F) -> Self {
        Self(compare)
    }
}

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnOrder")
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> TotalOrder<T> for FnOrder<F> {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        (self.0)(this, that)
    }
}

/// Orders items by the [`Ord`] implementation of a key extracted from each.
///
/// ```
/// use priority_heap::{KeyOrder, PriorityHeap};
///
/// let mut heap: PriorityHeap<&str, _> = PriorityHeap::new(KeyOrder::new(|word: &&str| word.len()));
/// heap.extend(["heap", "a", "sift"]);
/// assert_eq!(heap.pop(), Some("a"));
/// ```
#[derive(Clone, Copy)]
pub struct KeyOrder<F>(F);

impl<F> KeyOrder<F> {
    /// Wraps `key`, whose results are compared by their [`Ord`] implementation.
    pub const fn new(key: F) -> Self {
        Self(key)
    }
}

impl<F> fmt::Debug for KeyOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyOrder")
    }
}

impl<T: ?Sized, K: Ord, F: Fn(&T) -> K> TotalOrder<T> for KeyOrder<F> {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        (self.0)(this).cmp(&(self.0)(that))
    }
}
