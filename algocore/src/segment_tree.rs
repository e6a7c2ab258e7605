//! Sum segment tree over a fixed-length sequence.
//!
//! Node 0 is the root and node `k` has children `2k + 1` and `2k + 2`. The
//! leaf range covered by a node is carried through the recursion rather than
//! stored. Depth is `ceil(log2 n) + 1`, so recursion stays shallow for any
//! input that fits in memory.
//!
//! Sums use plain `+` on `T`. Callers must keep every partial sum inside the
//! range of `T`.

use std::ops::{Add, RangeInclusive};

use num::Zero;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct SegmentTree<T = i64> {
    tree: Vec<T>,
    values: Vec<T>,
}

impl<T> SegmentTree<T>
where
    T: Copy + PartialEq + Zero + Add<Output = T>,
{
    pub fn build(values: &[T]) -> Self {
        let n = values.len();
        let mut segment_tree = Self {
            tree: vec![T::zero(); tree_size(n)],
            values: values.to_vec(),
        };
        if n > 0 {
            segment_tree.build_node(0, 0, n - 1);
        }
        debug_assert!(segment_tree.check_invariant());
        segment_tree
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current value at position `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.values.get(index).copied().ok_or(Error::OutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Current leaf values in input order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Sum of all positions, zero when empty.
    pub fn total(&self) -> T {
        if self.is_empty() {
            T::zero()
        } else {
            self.tree[0]
        }
    }

    /// Sets position `index` to `value` and refreshes its ancestors.
    pub fn update(&mut self, index: usize, value: T) -> Result<()> {
        let n = self.len();
        if index >= n {
            return Err(Error::OutOfRange { index, len: n });
        }
        self.values[index] = value;
        self.update_node(0, 0, n - 1, index, value);
        Ok(())
    }

    /// Sum of positions `left..=right`.
    pub fn query(&self, left: usize, right: usize) -> Result<T> {
        let n = self.len();
        if left > right || right >= n {
            return Err(Error::InvalidRange { left, right, len: n });
        }
        Ok(self.query_node(0, 0, n - 1, left, right))
    }

    pub fn query_range(&self, range: RangeInclusive<usize>) -> Result<T> {
        self.query(*range.start(), *range.end())
    }

    /// Checks that every leaf mirrors its input position and every internal
    /// node holds the sum of its children.
    pub fn check_invariant(&self) -> bool {
        self.is_empty() || self.check_node(0, 0, self.len() - 1)
    }

    fn build_node(&mut self, node: usize, start: usize, end: usize) {
        if start == end {
            self.tree[node] = self.values[start];
            return;
        }
        let mid = start + (end - start) / 2;
        let (left, right) = children(node);
        self.build_node(left, start, mid);
        self.build_node(right, mid + 1, end);
        self.tree[node] = self.tree[left] + self.tree[right];
    }

    fn update_node(&mut self, node: usize, start: usize, end: usize, index: usize, value: T) {
        if start == end {
            self.tree[node] = value;
            return;
        }
        let mid = start + (end - start) / 2;
        let (left, right) = children(node);
        if index <= mid {
            self.update_node(left, start, mid, index, value);
        } else {
            self.update_node(right, mid + 1, end, index, value);
        }
        self.tree[node] = self.tree[left] + self.tree[right];
    }

    fn query_node(&self, node: usize, start: usize, end: usize, left: usize, right: usize) -> T {
        if right < start || end < left {
            return T::zero();
        }
        if left <= start && end <= right {
            return self.tree[node];
        }
        let mid = start + (end - start) / 2;
        let (l, r) = children(node);
        self.query_node(l, start, mid, left, right)
            + self.query_node(r, mid + 1, end, left, right)
    }

    fn check_node(&self, node: usize, start: usize, end: usize) -> bool {
        if start == end {
            return self.tree[node] == self.values[start];
        }
        let mid = start + (end - start) / 2;
        let (left, right) = children(node);
        self.tree[node] == self.tree[left] + self.tree[right]
            && self.check_node(left, start, mid)
            && self.check_node(right, mid + 1, end)
    }
}

#[inline]
fn children(node: usize) -> (usize, usize) {
    (2 * node + 1, 2 * node + 2)
}

/// Number of slots needed so every node of a tree over `n` leaves has an
/// index: `2 * next_power_of_two(n) - 1`.
fn tree_size(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        2 * n.next_power_of_two() - 1
    }
}
