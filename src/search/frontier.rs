use crate::{path::Cost, Point};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, PartialEq, Eq)]
struct Entry {
    priority: Cost,
    seq: usize,
    point: Point,
}

// reversed: BinaryHeap is a max-heap
impl Ord for Entry {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.priority
            .cmp(&self.priority)
            .then_with(|| rhs.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Entry {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

/// Min-priority queue of Points. Equal priorities pop in insertion order.
///
/// A Point may be pushed several times; stale entries are filtered by the caller.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: usize,
}

impl Frontier {
    pub fn with_capacity(capacity: usize) -> Frontier {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, priority: Cost, point: Point) {
        self.heap.push(Entry {
            priority,
            seq: self.next_seq,
            point,
        });
        self.next_seq += 1;
    }

    pub fn pop(&mut self) -> Option<Point> {
        self.heap.pop().map(|entry| entry.point)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
