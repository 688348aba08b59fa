use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed so the max-heap pops the lowest priority, then the oldest entry
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A min-priority queue over floating point priorities with O(log n)
/// push and pop-min. Items of equal priority pop in insertion order.
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, priority: f64, item: T) {
        assert!(!priority.is_nan(), "priority must not be NaN");
        self.heap.push(Entry {
            priority,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
    }

    pub fn pop_min(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
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
    fn test_push_pop_single() {
        let mut pq = PriorityQueue::new();
        pq.push(10.0, "hello");
        assert_eq!(pq.len(), 1);
        assert_eq!(pq.pop_min(), Some("hello"));
        assert_eq!(pq.pop_min(), None);
        assert!(pq.is_empty());
    }

    #[test]
    fn test_push_pop_ordered() {
        let mut pq = PriorityQueue::new();
        pq.push(10.0, "low");
        pq.push(5.0, "lower");
        pq.push(15.0, "high");

        assert_eq!(pq.pop_min(), Some("lower"));
        assert_eq!(pq.pop_min(), Some("low"));
        assert_eq!(pq.pop_min(), Some("high"));
        assert_eq!(pq.pop_min(), None);
    }

    #[test]
    fn test_push_pop_same_priority() {
        let mut pq = PriorityQueue::new();
        pq.push(10.0, "first");
        pq.push(10.0, "second");
        pq.push(10.0, "third");

        assert_eq!(pq.pop_min(), Some("first"));
        assert_eq!(pq.pop_min(), Some("second"));
        assert_eq!(pq.pop_min(), Some("third"));
        assert_eq!(pq.pop_min(), None);
    }

    #[test]
    fn test_push_pop_mixed() {
        let mut pq = PriorityQueue::new();
        pq.push(100.0, "a");
        pq.push(50.0, "b");
        assert_eq!(pq.pop_min(), Some("b"));
        pq.push(25.0, "c");
        pq.push(75.0, "d");
        assert_eq!(pq.pop_min(), Some("c"));
        assert_eq!(pq.pop_min(), Some("d"));
        assert_eq!(pq.pop_min(), Some("a"));
    }

    #[test]
    fn test_fractional_priorities() {
        let mut pq = PriorityQueue::new();
        pq.push(2.0f64.sqrt() + 3.0, "euclid");
        pq.push(4.0, "whole");
        pq.push(4.000001, "just_above");
        pq.push(0.0, "zero");

        assert_eq!(pq.pop_min(), Some("zero"));
        assert_eq!(pq.pop_min(), Some("whole"));
        assert_eq!(pq.pop_min(), Some("just_above"));
        assert_eq!(pq.pop_min(), Some("euclid"));
    }

    #[test]
    #[should_panic(expected = "priority must not be NaN")]
    fn test_nan_priority() {
        let mut pq = PriorityQueue::new();
        pq.push(f64::NAN, "invalid");
    }

    #[test]
    fn test_empty_queue() {
        let mut pq: PriorityQueue<i32> = PriorityQueue::new();
        assert!(pq.is_empty());
        assert_eq!(pq.pop_min(), None);
    }
}
