//! `MinHeap` — fixed-capacity binary min-heap.
//!
//! Array-backed, 0-indexed: the children of slot `k` live at `2k + 1` and
//! `2k + 2`.  Supports insert and extract-min in O(log n).  There is no
//! decrease-key; Dijkstra pushes a fresh entry on every improvement and
//! discards stale ones at extraction time (lazy deletion).
//!
//! The capacity is fixed at construction.  Routing sizes it to
//! `directed_edges + 1`, which bounds the number of pushes a single
//! shortest-path run can make.

use crate::HeapError;

/// Binary min-heap over any `Ord` item, typically `(Cost, LocationId)`.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    items:    Vec<T>,
    capacity: usize,
}

impl<T: Ord> MinHeap<T> {
    /// Create an empty heap that holds at most `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity), capacity }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The smallest item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Insert `item`.  Fails with [`HeapError::Full`] once `capacity` items
    /// are held.
    pub fn push(&mut self, item: T) -> Result<(), HeapError> {
        if self.items.len() == self.capacity {
            return Err(HeapError::Full { capacity: self.capacity });
        }
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
        Ok(())
    }

    /// Remove and return the smallest item.
    ///
    /// Fails with [`HeapError::Empty`] rather than returning a sentinel.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.items.is_empty() {
            return Err(HeapError::Empty);
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop().ok_or(HeapError::Empty)?;
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    fn sift_up(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if self.items[k] >= self.items[parent] {
                break;
            }
            self.items.swap(k, parent);
            k = parent;
        }
    }

    fn sift_down(&mut self, mut k: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * k + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smallest = if right < len && self.items[right] < self.items[left] {
                right
            } else {
                left
            };
            if self.items[smallest] >= self.items[k] {
                break;
            }
            self.items.swap(k, smallest);
            k = smallest;
        }
    }
}
