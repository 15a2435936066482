//! Indexed binary max-heap used as the shortest-path frontier
//!
//! Every queued node has exactly one slot; `positions` tracks the slot so a
//! priority can be changed in place and the heap repaired locally.

use super::common::{AlgoError, AlgoResult};
use rustc_hash::FxHashMap;

/// A (node index, priority) pair held by the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueItem {
    pub node: usize,
    pub priority: i64,
}

/// Binary max-heap keyed on integer priority.
///
/// Pop order among equal priorities is unspecified.
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: Vec<QueueItem>,
    /// node -> slot in `heap`
    positions: FxHashMap<usize, usize>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut positions = FxHashMap::default();
        positions.reserve(capacity);
        Self {
            heap: Vec::with_capacity(capacity),
            positions,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, node: usize) -> bool {
        self.positions.contains_key(&node)
    }

    /// Current priority of a queued node
    pub fn priority_of(&self, node: usize) -> Option<i64> {
        self.positions.get(&node).map(|&slot| self.heap[slot].priority)
    }

    /// Highest-priority item without removing it
    pub fn peek(&self) -> Option<&QueueItem> {
        self.heap.first()
    }

    /// Insert `node` with `priority`.
    ///
    /// A node that is already queued keeps its single slot and takes the new priority.
    pub fn push(&mut self, node: usize, priority: i64) {
        if self.contains(node) {
            self.update_priority(node, priority);
            return;
        }
        let slot = self.heap.len();
        self.heap.push(QueueItem { node, priority });
        self.positions.insert(node, slot);
        self.sift_up(slot);
    }

    /// Remove and return the highest-priority item
    pub fn pop_max(&mut self) -> AlgoResult<QueueItem> {
        if self.heap.is_empty() {
            return Err(AlgoError::EmptyQueue);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let item = self.heap.pop().ok_or(AlgoError::EmptyQueue)?;
        self.positions.remove(&item.node);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(item)
    }

    /// Change the priority of a queued node and restore the heap.
    ///
    /// Returns false if the node is not in the queue.
    pub fn update_priority(&mut self, node: usize, priority: i64) -> bool {
        let Some(&slot) = self.positions.get(&node) else {
            return false;
        };
        let old = self.heap[slot].priority;
        self.heap[slot].priority = priority;
        if priority > old {
            self.sift_up(slot);
        } else if priority < old {
            self.sift_down(slot);
        }
        true
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[parent].priority >= self.heap[slot].priority {
                break;
            }
            self.swap(parent, slot);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut largest = slot;
            if left < len && self.heap[left].priority > self.heap[largest].priority {
                largest = left;
            }
            if right < len && self.heap[right].priority > self.heap[largest].priority {
                largest = right;
            }
            if largest == slot {
                break;
            }
            self.swap(slot, largest);
            slot = largest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].node, a);
        self.positions.insert(self.heap[b].node, b);
    }

    #[cfg(test)]
    fn assert_heap(&self) {
        for slot in 1..self.heap.len() {
            let parent = (slot - 1) / 2;
            assert!(self.heap[parent].priority >= self.heap[slot].priority);
        }
        for (slot, item) in self.heap.iter().enumerate() {
            assert_eq!(self.positions[&item.node], slot);
        }
    }
}
