//! Min-ordered priority frontier.
//!
//! A binary-heap-backed priority queue popping the smallest `f64` key
//! first. Shared by Prim, Dijkstra, and Branch & Bound. Stale entries
//! are not removed eagerly; the consumers skip them at pop time by
//! checking a visited/finalized flag (lazy deletion).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry pairing an `f64` key with an arbitrary payload.
///
/// Ordering is reversed so that `BinaryHeap` (a max-heap) pops the
/// smallest key first. Keys are compared with `total_cmp`, so NaN
/// keys sort deterministically instead of breaking the heap property.
#[derive(Debug, Clone)]
struct Entry<T> {
    key: f64,
    value: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key.total_cmp(&other.key) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: smallest key = greatest heap priority
        other.key.total_cmp(&self.key)
    }
}

/// Min-priority frontier over `(f64 key, payload)` pairs.
///
/// # Examples
///
/// ```
/// use transopt::frontier::MinFrontier;
///
/// let mut frontier = MinFrontier::new();
/// frontier.push(3.0, "far");
/// frontier.push(1.0, "near");
/// assert_eq!(frontier.pop(), Some((1.0, "near")));
/// assert_eq!(frontier.pop(), Some((3.0, "far")));
/// assert_eq!(frontier.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct MinFrontier<T> {
    heap: BinaryHeap<Entry<T>>,
}

impl<T> MinFrontier<T> {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty frontier with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Inserts a payload with the given key.
    pub fn push(&mut self, key: f64, value: T) {
        self.heap.push(Entry { key, value });
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|e| (e.key, e.value))
    }

    /// Returns the smallest key without removing it.
    pub fn peek_key(&self) -> Option<f64> {
        self.heap.peek().map(|e| e.key)
    }

    /// Number of entries (including stale ones awaiting lazy deletion).
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier has no entries.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for MinFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}
