//! Array-backed binary heap with a runtime min/max mode.
//!
//! Items live in a single `Vec` in level order: the children of index `i` are
//! `2i + 1` and `2i + 2`. After every public operation the parent of each
//! item is not "worse" than the item for the heap's [`HeapMode`]. Equal items
//! may come out in any order.

use std::iter::FusedIterator;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapMode {
    /// Root is the smallest item.
    Min,
    /// Root is the largest item.
    Max,
}

impl HeapMode {
    /// True if `a` must sit strictly above `b` in a heap of this mode.
    #[inline]
    fn prefers<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            HeapMode::Min => a < b,
            HeapMode::Max => a > b,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn heap_mode(self) -> HeapMode {
        match self {
            SortOrder::Ascending => HeapMode::Min,
            SortOrder::Descending => HeapMode::Max,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Heap<T> {
    items: Vec<T>,
    mode: HeapMode,
}

impl<T: Ord> Heap<T> {
    pub fn new(mode: HeapMode) -> Self {
        Self { items: Vec::new(), mode }
    }

    pub fn with_capacity(mode: HeapMode, capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity), mode }
    }

    /// Builds a heap from `items` in O(n) by sifting down every internal node,
    /// last parent first.
    pub fn heapify(items: Vec<T>, mode: HeapMode) -> Self {
        let mut heap = Self { items, mode };
        let len = heap.items.len();
        for i in (0..len / 2).rev() {
            heap.sift_down(i);
        }
        debug_assert!(heap.check_invariant());
        heap
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the root.
    pub fn pop(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::EmptyHeap);
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let root = self.items.pop().ok_or(Error::EmptyHeap)?;
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    pub fn peek(&self) -> Result<&T> {
        self.items.first().ok_or(Error::EmptyHeap)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    /// Items in internal level order, not sorted.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Items in internal level order, not sorted.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Consumes the heap, yielding items root-first (ascending for
    /// [`HeapMode::Min`], descending for [`HeapMode::Max`]).
    pub fn into_sorted_iter(self) -> IntoSorted<T> {
        IntoSorted { heap: self }
    }

    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_sorted_iter().collect()
    }

    /// Checks the heap property for every parent/child pair.
    pub fn check_invariant(&self) -> bool {
        (1..self.items.len()).all(|i| {
            let parent = (i - 1) / 2;
            !self.mode.prefers(&self.items[i], &self.items[parent])
        })
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.mode.prefers(&self.items[idx], &self.items[parent]) {
                self.items.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut best = idx;

            if left < len && self.mode.prefers(&self.items[left], &self.items[best]) {
                best = left;
            }
            if right < len && self.mode.prefers(&self.items[right], &self.items[best]) {
                best = right;
            }

            if best == idx {
                break;
            }
            self.items.swap(idx, best);
            idx = best;
        }
    }
}

impl<T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Self::new(HeapMode::Min)
    }
}

/// Collects into a [`HeapMode::Min`] heap.
impl<T: Ord> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::heapify(iter.into_iter().collect(), HeapMode::Min)
    }
}

impl<T: Ord> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

/// Draining iterator returned by [`Heap::into_sorted_iter`].
#[derive(Debug, Clone)]
pub struct IntoSorted<T> {
    heap: Heap<T>,
}

impl<T: Ord> Iterator for IntoSorted<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: Ord> ExactSizeIterator for IntoSorted<T> {}

impl<T: Ord> FusedIterator for IntoSorted<T> {}

/// Heap sort: heapify in the mode matching `order`, then pop every item.
pub fn heap_sort<T: Ord>(items: Vec<T>, order: SortOrder) -> Vec<T> {
    Heap::heapify(items, order.heap_mode()).into_sorted_vec()
}
