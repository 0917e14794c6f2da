//! A priority queue implemented with a binary heap.
//!
//! Insertion and popping the least item have *O*(log(*n*)) time complexity.
//! Checking the least item is *O*(1). Removing an arbitrary item costs an
//! *O*(*n*) search followed by an *O*(log(*n*)) repair, or just the repair when
//! the caller already knows the item's index. Converting a vector to a binary
//! heap can be done in-place, and has *O*(*n*) complexity.
//!
//! # Examples
//!
//! An event loop that always runs the earliest pending event, and which can
//! cancel events that were scheduled but have not yet run.
//!
//! ```
//! use priority_heap::{KeyOrder, PriorityHeap};
//!
//! #[derive(Debug, PartialEq)]
//! struct Event {
//!     at: u64,
//!     id: u32,
//! }
//!
//! let mut pending = PriorityHeap::new(KeyOrder::new(|e: &Event| e.at));
//! pending.push(Event { at: 40, id: 1 });
//! pending.push(Event { at: 10, id: 2 });
//! pending.push(Event { at: 25, id: 3 });
//! pending.push(Event { at: 30, id: 4 });
//!
//! // Event 3 is cancelled before it fires.
//! assert_eq!(pending.remove(&Event { at: 25, id: 3 }), Some(Event { at: 25, id: 3 }));
//! assert_eq!(pending.remove(&Event { at: 25, id: 3 }), None);
//!
//! let mut fired = Vec::new();
//! while let Some(event) = pending.pop() {
//!     fired.push(event.id);
//! }
//! assert_eq!(fired, [2, 4, 1]);
//! ```

use core::fmt;
use core::iter::FromIterator;
use core::mem::ManuallyDrop;
use core::ptr;

use alloc::slice;
use alloc::vec::{self, Vec};
use log::{debug, trace};

use crate::{HeapError, OrdTotalOrder, TotalOrder};


/// Capacity allocated by [`PriorityHeap::new`].
pub const DEFAULT_CAPACITY: usize = 8;

/// A priority queue implemented with a binary heap.
///
/// This is a min-heap: [`pop`] and [`peek`] yield the item that orders least
/// under the heap's [`TotalOrder`]. Items that compare equal are yielded in an
/// unspecified order relative to one another.
///
/// It is a logic error for an item to be modified in such a way that its
/// ordering relative to any other item, as determined by the heap's order,
/// changes while it is in the heap. This is normally only possible through
/// interior mutability, global state, I/O, or unsafe code. The behavior
/// resulting from such a logic error is not specified, but will be
/// encapsulated to the `PriorityHeap` that observed the logic error and not
/// result in undefined behavior.
///
/// # Examples
///
/// ```
/// use priority_heap::PriorityHeap;
///
/// // Order by the items' own `Ord` implementation.
/// let mut heap = PriorityHeap::natural();
///
/// // There's nothing in there yet, so we get None.
/// assert_eq!(heap.peek(), None);
///
/// heap.extend([4, 2, 6, 12, 9, 2, 61, 1]);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.len(), 8);
///
/// // Items come back least first.
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.len(), 5);
/// ```
///
/// # Time complexity
///
/// | [push]  | [pop]         | [peek]  | [remove]      | [remove_at]   |
/// |---------|---------------|---------|---------------|---------------|
/// | *O*(1)~ | *O*(log(*n*)) | *O*(1)  | *O*(*n*)      | *O*(log(*n*)) |
///
/// The value for `push` is an expected cost; the method documentation gives a
/// more detailed analysis.
///
/// [push]: PriorityHeap::push
/// [pop]: PriorityHeap::pop
/// [peek]: PriorityHeap::peek
/// [remove]: PriorityHeap::remove
/// [remove_at]: PriorityHeap::remove_at
pub struct PriorityHeap<T, O = OrdTotalOrder<T>> {
    data: Vec<T>,
    order: O,
}

impl<T: Clone, O: Clone> Clone for PriorityHeap<T, O> {
    fn clone(&self) -> Self {
        PriorityHeap { data: self.data.clone(), order: self.order.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.order.clone_from(&source.order);
    }
}

impl<T, O: TotalOrder<T> + Default> Default for PriorityHeap<T, O> {
    /// Creates an empty `PriorityHeap` under the default order.
    #[inline]
    fn default() -> PriorityHeap<T, O> {
        PriorityHeap::new(O::default())
    }
}

impl<T: fmt::Debug, O> fmt::Debug for PriorityHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> PriorityHeap<T> {
    /// Creates an empty min-heap ordered by `T`'s own [`Ord`] implementation.
    ///
    /// ```
    /// use priority_heap::PriorityHeap;
    ///
    /// let mut heap = PriorityHeap::natural();
    /// heap.push("pear");
    /// heap.push("apple");
    /// assert_eq!(heap.pop(), Some("apple"));
    /// ```
    #[must_use]
    pub fn natural() -> PriorityHeap<T> {
        PriorityHeap::new(OrdTotalOrder::new())
    }
}

impl<T, O: TotalOrder<T>> PriorityHeap<T, O> {
    /// Creates an empty `PriorityHeap` that orders its items by `order`, with
    /// room for [`DEFAULT_CAPACITY`] items.
    ///
    /// # Examples
    ///
    /// ```
    /// use priority_heap::{FnOrder, PriorityHeap};
    ///
    /// let mut heap = PriorityHeap::new(FnOrder::new(|a: &i32, b: &i32| b.cmp(a)));
    /// heap.push(4);
    /// heap.push(7);
    /// assert_eq!(heap.peek(), Some(&7));
    /// ```
    #[must_use]
    pub fn new(order: O) -> PriorityHeap<T, O> {
        PriorityHeap { data: Vec::with_capacity(DEFAULT_CAPACITY), order }
    }

    /// Creates an empty `PriorityHeap` with room for at least `capacity` items.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidCapacity`] if `capacity` is zero, and
    /// [`HeapError::Alloc`] if the buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use priority_heap::{HeapError, OrdTotalOrder, PriorityHeap};
    ///
    /// let heap = PriorityHeap::<u8>::with_capacity(OrdTotalOrder::new(), 100).unwrap();
    /// assert!(heap.capacity() >= 100);
    ///
    /// let empty = PriorityHeap::<u8>::with_capacity(OrdTotalOrder::new(), 0);
    /// assert_eq!(empty.unwrap_err(), HeapError::InvalidCapacity);
    /// ```
    pub fn with_capacity(order: O, capacity: usize) -> Result<PriorityHeap<T, O>, HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity);
        }
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        Ok(PriorityHeap { data, order })
    }

    /// Builds a heap out of arbitrarily ordered items, in *O*(*n*) time.
    ///
    /// ```
    /// use priority_heap::{OrdTotalOrder, PriorityHeap};
    ///
    /// let heap = PriorityHeap::from_vec(OrdTotalOrder::<i32>::new(), vec![5, 3, 9, 1]);
    /// assert_eq!(heap.peek(), Some(&1));
    /// assert!(heap.is_heap());
    /// ```
    pub fn from_vec(order: O, vec: Vec<T>) -> PriorityHeap<T, O> {
        let mut heap = PriorityHeap { data: vec, order };
        heap.rebuild();
        heap
    }

    /// Adopts a vector that is already laid out as a heap under `order`, such
    /// as one previously obtained from [`into_vec`](Self::into_vec).
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::HeapViolation`] naming the first child that orders
    /// strictly before its parent.
    ///
    /// ```
    /// use priority_heap::{HeapError, OrdTotalOrder, PriorityHeap};
    ///
    /// assert!(PriorityHeap::from_heap_vec(OrdTotalOrder::<i32>::new(), vec![1, 4, 2]).is_ok());
    /// assert_eq!(
    ///     PriorityHeap::from_heap_vec(OrdTotalOrder::<i32>::new(), vec![1, 4, 2, 3]).unwrap_err(),
    ///     HeapError::HeapViolation { index: 3 },
    /// );
    /// ```
    pub fn from_heap_vec(order: O, vec: Vec<T>) -> Result<PriorityHeap<T, O>, HeapError> {
        let heap = PriorityHeap { data: vec, order };
        match heap.first_violation() {
            Some(index) => {
                debug!("rejected heap layout of {} items: violation at index {}", heap.len(), index);
                Err(HeapError::HeapViolation { index })
            }
            None => Ok(heap),
        }
    }

    /// Removes the least item from the heap and returns it, or `None` if it is
    /// empty.
    ///
    /// If the order panics, the heap is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use priority_heap::PriorityHeap;
    /// let mut heap = PriorityHeap::<i32>::from([1, 3]);
    ///
    /// assert_eq!(heap.pop(), Some(1));
    /// assert_eq!(heap.pop(), Some(3));
    /// assert_eq!(heap.pop(), None);
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop` on a heap containing *n* items is *O*(log(*n*)).
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len().checked_sub(1)?;
        // The tail takes over the root; find where it settles while the
        // heap is still intact.
        let target = self.sink(&self.data[last], 0, last);
        let item = self.data.swap_remove(0);
        // SAFETY: `sink` only returns `0` or a descendant of it below `last`,
        // which is the new length.
        unsafe { self.shift(0, target) };
        Some(item)
    }

    /// Pushes an item onto the heap.
    ///
    /// When the buffer is full its capacity is doubled before the item is
    /// written.
    ///
    /// If the order panics, `item` is dropped and the heap keeps its previous
    /// contents and layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use priority_heap::PriorityHeap;
    /// let mut heap = PriorityHeap::natural();
    /// heap.push(3);
    /// heap.push(5);
    /// heap.push(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The expected cost of `push`, averaged over every possible ordering of
    /// the items being pushed, and over a sufficiently large number of
    /// pushes, is *O*(1). This is the most meaningful cost metric when pushing
    /// items that are *not* already in any sorted pattern.
    ///
    /// The time complexity degrades if items are pushed in predominantly
    /// descending order. In the worst case the amortized cost per push is
    /// *O*(log(*n*)) against a heap containing *n* items.
    ///
    /// The worst case cost of a *single* call to `push` is *O*(*n*), when
    /// capacity is exhausted and the buffer is reallocated.
    pub fn push(&mut self, item: T) {
        if let Some(additional) = self.growth() {
            let before = self.capacity();
            self.data.reserve_exact(additional);
            trace!("grew heap storage from {} to {} items", before, self.capacity());
        }
        self.push_within_capacity(item);
    }

    /// Pushes an item onto the heap, reporting rather than aborting on
    /// allocation failure. The heap is left untouched if an error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Alloc`] if the buffer is full and cannot be grown.
    pub fn try_push(&mut self, item: T) -> Result<(), HeapError> {
        if let Some(additional) = self.growth() {
            let before = self.capacity();
            self.data.try_reserve_exact(additional)?;
            trace!("grew heap storage from {} to {} items", before, self.capacity());
        }
        self.push_within_capacity(item);
        Ok(())
    }

    /// Pushes every item of `iter`, in iteration order.
    ///
    /// ```
    /// use priority_heap::PriorityHeap;
    ///
    /// let mut heap = PriorityHeap::natural();
    /// heap.push_all(vec![12, 822, 2, 143]);
    /// assert_eq!(heap.into_sorted_vec(), [2, 12, 143, 822]);
    /// ```
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |item| self.push(item));
    }

    /// Removes the first item (in heap order) that is equal to `item`, and
    /// returns it. Returns `None`, leaving the heap untouched, if there is no
    /// such item.
    ///
    /// Equality is decided by [`PartialEq`], not by the heap's order, so of two
    /// items that tie under the order only the one equal to `item` is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use priority_heap::PriorityHeap;
    ///
    /// let mut heap = PriorityHeap::<i32>::from([4, 2, 6, 12, 9, 2, 61, 1]);
    /// assert_eq!(heap.remove(&2), Some(2));
    /// assert_eq!(heap.remove(&100), None);
    /// assert_eq!(heap.into_sorted_vec(), [1, 2, 4, 6, 9, 12, 61]);
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(*n*) to find the item, then *O*(log(*n*)) to restore the heap.
    pub fn remove(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.position(item)?;
        self.remove_at(index)
    }

    /// Removes and returns the item at `index` of the heap's layout (as seen
    /// through [`as_slice`](Self::as_slice)), or returns `None` if `index` is
    /// out of bounds.
    ///
    /// The last item is moved into the vacated slot. Depending on where it
    /// lands it may order after one of its new children, or before its new
    /// parent; it is first sifted down, and only if that leaves it in place is
    /// it sifted up instead.
    ///
    /// If the order panics, the heap is left exactly as it was.
    ///
    /// ```
    /// use priority_heap::PriorityHeap;
    ///
    /// let mut heap = PriorityHeap::<i32>::from([1, 10, 2, 11, 12, 3]);
    /// let index = heap.position(&11).unwrap();
    /// assert_eq!(heap.remove_at(index), Some(11));
    /// assert!(heap.is_heap());
    /// assert_eq!(heap.remove_at(heap.len()), None);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let last = self.len().checked_sub(1)?;
        if index > last {
            return None;
        }
        let target = if index == last {
            index
        } else {
            let tail = &self.data[last];
            match self.sink(tail, index, last) {
                settled if settled == index => self.rise(tail, 0, index),
                settled => settled,
            }
        };
        let removed = self.data.swap_remove(index);
        // SAFETY: `target` is `index`, an ancestor of it, or a descendant of
        // it below `last`; all of them are in bounds unless `index == last`,
        // where `shift` has nothing to move.
        unsafe { self.shift(index, target) };
        Some(removed)
    }

    /// Consumes the heap and returns a vector in sorted order, least first.
    ///
    /// ```
    /// use priority_heap::PriorityHeap;
    ///
    /// let mut heap = PriorityHeap::<i32>::from([1, 2, 4, 5, 7]);
    /// heap.push(6);
    /// heap.push(3);
    ///
    /// assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            // Parks the current least item past the shrinking heap, so the
            // tail fills up greatest first.
            self.data.swap(0, end);
            self.sift_down_range(0, end);
        }
        self.data.reverse();
        self.into_vec()
    }

    /// Returns `true` if every item orders at or after its parent.
    ///
    /// This holds for every heap built through this type's API unless an
    /// item's ordering was changed while in the heap.
    pub fn is_heap(&self) -> bool {
        self.first_violation().is_none()
    }

    /// Returns the capacity to add before the next push, if the buffer is full.
    fn growth(&self) -> Option<usize> {
        let capacity = self.data.capacity();
        (self.data.len() == capacity).then(|| capacity.max(1))
    }

    fn push_within_capacity(&mut self, item: T) {
        let len = self.len();
        let target = self.rise(&item, 0, len);
        self.data.push(item);
        // SAFETY: `len` is the new item's index and `rise` only returns it
        // or one of its ancestors.
        unsafe { self.shift(len, target) };
    }

    fn first_violation(&self) -> Option<usize> {
        (1..self.len()).find(|&i| self.order.lt(&self.data[i], &self.data[(i - 1) / 2]))
    }

    // Repairs run in two phases. `rise` and `sink` walk the heap with shared
    // borrows only, and are the sole callers of the order. `shift` then moves
    // items along the path they found without comparing anything, so a
    // panicking order can only unwind before the heap has been written to.

    /// Returns where `item` comes to rest if a vacancy at `pos` climbs
    /// towards `start` while `item` orders strictly before the parent.
    fn rise(&self, item: &T, start: usize, mut pos: usize) -> usize {
        while pos > start {
            let parent = (pos - 1) / 2;
            if self.order.ge(item, &self.data[parent]) {
                break;
            }
            pos = parent;
        }
        pos
    }

    /// Returns where `item` comes to rest if a vacancy at `pos` descends,
    /// within the first `end` slots, while `item` orders strictly after the
    /// lesser child. The left child wins a tie.
    fn sink(&self, item: &T, mut pos: usize, end: usize) -> usize {
        loop {
            let mut child = 2 * pos + 1;
            if child >= end {
                return pos;
            }
            if child + 1 < end && self.order.gt(&self.data[child], &self.data[child + 1]) {
                child += 1;
            }
            if self.order.le(item, &self.data[child]) {
                return pos;
            }
            pos = child;
        }
    }

    /// Settles the item at `pos` among the first `end` slots. Returns its new
    /// index.
    fn sift_down_range(&mut self, pos: usize, end: usize) -> usize {
        debug_assert!(pos < end && end <= self.len());
        let target = self.sink(&self.data[pos], pos, end);
        // SAFETY: `self.data[pos]` was just read, and `sink` only returns `pos`
        // or a descendant of it that it has already indexed.
        unsafe { self.shift(pos, target) };
        target
    }

    fn rebuild(&mut self) {
        let len = self.len();
        for n in (0..len / 2).rev() {
            self.sift_down_range(n, len);
        }
    }
}

impl<T, O> PriorityHeap<T, O> {
    /// Moves the item at `from` to `to`, shifting every item on the path
    /// between them one level towards `from`.
    ///
    /// # Safety
    ///
    /// Unless `from == to`, both must be below `self.len()` and one must be
    /// an ancestor of the other.
    unsafe fn shift(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        // SAFETY: `from` is in bounds per the caller.
        let mut hole = unsafe { Hole::new(&mut self.data, from) };
        while hole.pos() != to {
            let next = if to < hole.pos() {
                (hole.pos() - 1) / 2
            } else {
                child_towards(hole.pos(), to)
            };
            // SAFETY: `next` is strictly between the vacancy and `to`, or is
            // `to`, so it is in bounds and not the vacancy itself.
            unsafe { hole.move_to(next) };
        }
    }

    /// Returns the least item in the heap, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use priority_heap::PriorityHeap;
    /// let mut heap = PriorityHeap::natural();
    /// assert_eq!(heap.peek(), None);
    ///
    /// heap.push(42);
    /// assert_eq!(heap.peek(), Some(&42));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the index of the first item, in heap layout, equal to `item`.
    ///
    /// The index is only meaningful until the heap is next modified.
    pub fn position(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.data.iter().position(|candidate| candidate == item)
    }

    /// Returns the order by which this heap ranks its items.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns an iterator visiting all items in heap layout, which is not
    /// sorted order beyond the first item.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the number of items the heap can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` items more than the
    /// current length.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Returns a slice of all items in heap layout: the item at index `i` has
    /// its children at `2i + 1` and `2i + 2`.
    ///
    /// ```
    /// use priority_heap::PriorityHeap;
    ///
    /// let heap = PriorityHeap::<i32>::from([3, 1, 2]);
    /// assert_eq!(heap.as_slice()[0], 1);
    /// assert_eq!(heap.as_slice().len(), 3);
    /// ```
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Copies the items, in heap layout, into a new vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Consumes the heap and returns the underlying vector in heap layout.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Returns the number of items in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all items from the heap, keeping its capacity.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

/// Returns the child of `from` on the path down to its descendant `to`.
fn child_towards(from: usize, to: usize) -> usize {
    // With 1-based indices a node's ancestors are its index shifted right.
    let (from, to) = (from + 1, to + 1);
    let levels = from.leading_zeros() - to.leading_zeros();
    (to >> (levels - 1)) - 1
}

/// An item lifted out of a slice. Its slot is vacant until the guard is
/// dropped, at which point the item is written into wherever the vacancy
/// has since been moved.
struct Hole<'a, T> {
    data: &'a mut [T],
    item: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// # Safety
    ///
    /// `pos` must be in bounds of `data`.
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFETY: in bounds per the caller. The slot counts as vacant from
        // here on, so the copy is the only owner of the item.
        let item = unsafe { ptr::read(data.as_ptr().add(pos)) };
        Hole { data, item: ManuallyDrop::new(item), pos }
    }

    fn pos(&self) -> usize {
        self.pos
    }

    /// Copies the item at `index` into the vacancy, which moves to `index`.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds and differ from the vacancy.
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos && index < self.data.len());
        let base = self.data.as_mut_ptr();
        // SAFETY: both slots are in bounds and distinct; the source becomes
        // the new vacancy, so nothing is duplicated.
        unsafe { ptr::copy_nonoverlapping(base.add(index), base.add(self.pos), 1) };
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    fn drop(&mut self) {
        // SAFETY: `pos` is in bounds and vacant, and `item` is not touched
        // again after being taken.
        unsafe {
            let item = ManuallyDrop::take(&mut self.item);
            ptr::write(self.data.as_mut_ptr().add(self.pos), item);
        }
    }
}

impl<T, O: TotalOrder<T> + Default> From<Vec<T>> for PriorityHeap<T, O> {
    /// Converts a `Vec<T>` into a `PriorityHeap<T>`.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> PriorityHeap<T, O> {
        PriorityHeap::from_vec(O::default(), vec)
    }
}

impl<T, O: TotalOrder<T> + Default, const N: usize> From<[T; N]> for PriorityHeap<T, O> {
    /// ```
    /// use priority_heap::PriorityHeap;
    ///
    /// let mut h1 = PriorityHeap::<i32>::from([1, 4, 2, 3]);
    /// let mut h2: PriorityHeap<_> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.pop().zip(h2.pop()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, O> From<PriorityHeap<T, O>> for Vec<T> {
    /// Converts a `PriorityHeap<T>` into a `Vec<T>` in heap layout.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: PriorityHeap<T, O>) -> Vec<T> {
        heap.data
    }
}

impl<T, O: TotalOrder<T> + Default> FromIterator<T> for PriorityHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> PriorityHeap<T, O> {
        PriorityHeap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, O> IntoIterator for PriorityHeap<T, O> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each item out of
    /// the heap in heap layout. The heap cannot be used after calling this.
    fn into_iter(self) -> vec::IntoIter<T> {
        self.data.into_iter()
    }
}

impl<'a, T, O> IntoIterator for &'a PriorityHeap<T, O> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<T, O: TotalOrder<T>> Extend<T> for PriorityHeap<T, O> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<'a, T: 'a + Copy, O: TotalOrder<T>> Extend<&'a T> for PriorityHeap<T, O> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.push_all(iter.into_iter().copied());
    }
}
