//! Frontier primitives.
//!
//! Breadth-first style searches use [`std::collections::VecDeque`] directly
//! as their FIFO queue and depth-first search keeps an explicit stack of
//! frames. The weighted and heuristic searches share [`PriorityQueue`], a
//! min-queue over `f64` keys whose ties resolve in insertion order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Total ordering wrapper for `f64` keys.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct FloatOrd(pub f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug)]
struct QueueEntry<T> {
    priority: FloatOrd,
    sequence: u64,
    item: T,
}

impl<T> PartialEq for QueueEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl<T> Eq for QueueEntry<T> {}

impl<T> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority, then
        // by insertion sequence.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<T> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Stable min-priority queue.
///
/// `dequeue` returns the item with the smallest priority; among equal
/// priorities the earliest enqueued wins. Stale duplicates are the caller's
/// concern (searches skip entries whose node is already settled).
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<QueueEntry<T>>,
    next_sequence: u64,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn enqueue(&mut self, item: T, priority: f64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(QueueEntry {
            priority: FloatOrd(priority),
            sequence,
            item,
        });
    }

    /// Remove and return the minimum-priority item with its priority.
    pub fn dequeue(&mut self) -> Option<(T, f64)> {
        self.heap.pop().map(|entry| (entry.item, entry.priority.0))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_ascending_priority() {
        let mut queue = PriorityQueue::new();
        queue.enqueue("c", 3.0);
        queue.enqueue("a", 1.0);
        queue.enqueue("b", 2.0);

        let order: Vec<_> = std::iter::from_fn(|| queue.dequeue().map(|(item, _)| item)).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn equal_priorities_keep_insertion_order() {
        let mut queue = PriorityQueue::new();
        for item in ["first", "second", "third"] {
            queue.enqueue(item, 5.0);
        }
        queue.enqueue("cheap", 1.0);

        assert_eq!(queue.dequeue(), Some(("cheap", 1.0)));
        assert_eq!(queue.dequeue(), Some(("first", 5.0)));
        assert_eq!(queue.dequeue(), Some(("second", 5.0)));
        assert_eq!(queue.dequeue(), Some(("third", 5.0)));
        assert!(queue.is_empty());
    }

    #[test]
    fn infinite_priority_sorts_last() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(1, f64::INFINITY);
        queue.enqueue(2, 1e300);
        assert_eq!(queue.dequeue(), Some((2, 1e300)));
        assert_eq!(queue.dequeue(), Some((1, f64::INFINITY)));
        assert!(queue.is_empty());
    }
}
