//! Binary min-heap of node indices keyed by search state stored in the grid.

use pathmaze_core::NodeGrid;

/// Which node field ranks the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueKey {
    /// Tentative distance from the start (Dijkstra).
    Distance,
    /// Total score `f = g + h` (A*).
    Score,
}

impl QueueKey {
    /// Ordering key of node `i`. Equal keys fall back to the node index, so
    /// pop order never depends on insertion history.
    #[inline]
    fn of(self, grid: &NodeGrid, i: usize) -> (u32, usize) {
        let n = grid.node(i);
        match self {
            QueueKey::Distance => (n.distance, i),
            QueueKey::Score => (n.f, i),
        }
    }
}

/// A min-priority queue over node indices.
///
/// Keys live in the [`NodeGrid`], so every operation that compares takes the
/// grid. After changing the key of a queued node, call
/// [`update`](Self::update) to restore heap order. `update` finds the node
/// with a linear scan; that is fine at maze sizes but is O(n) per call.
#[derive(Debug, Clone)]
pub struct PriorityQueue {
    key: QueueKey,
    heap: Vec<usize>,
}

impl PriorityQueue {
    pub fn new(key: QueueKey) -> Self {
        Self {
            key,
            heap: Vec::new(),
        }
    }

    pub fn with_capacity(key: QueueKey, capacity: usize) -> Self {
        Self {
            key,
            heap: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether node `i` is currently queued.
    pub fn contains(&self, i: usize) -> bool {
        self.heap.contains(&i)
    }

    /// Queue node `i` with its current key.
    pub fn push(&mut self, grid: &NodeGrid, i: usize) {
        self.heap.push(i);
        self.sift_up(grid, self.heap.len() - 1);
    }

    /// Remove and return the node with the smallest key.
    pub fn pop(&mut self, grid: &NodeGrid) -> Option<usize> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let top = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(grid, 0);
        }
        top
    }

    /// Restore heap order after the key of node `i` changed.
    ///
    /// Returns `false` if `i` is not queued.
    pub fn update(&mut self, grid: &NodeGrid, i: usize) -> bool {
        let Some(slot) = self.heap.iter().position(|&n| n == i) else {
            return false;
        };
        if !self.sift_down(grid, slot) {
            self.sift_up(grid, slot);
        }
        true
    }

    #[inline]
    fn less(&self, grid: &NodeGrid, a: usize, b: usize) -> bool {
        self.key.of(grid, self.heap[a]) < self.key.of(grid, self.heap[b])
    }

    fn sift_up(&mut self, grid: &NodeGrid, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(grid, slot, parent) {
                break;
            }
            self.heap.swap(slot, parent);
            slot = parent;
        }
    }

    /// Returns whether the entry moved.
    fn sift_down(&mut self, grid: &NodeGrid, start: usize) -> bool {
        let len = self.heap.len();
        let mut slot = start;
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(grid, right, left) {
                right
            } else {
                left
            };
            if !self.less(grid, child, slot) {
                break;
            }
            self.heap.swap(slot, child);
            slot = child;
        }
        slot > start
    }
}
