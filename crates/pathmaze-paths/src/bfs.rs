use std::collections::VecDeque;

use pathmaze_core::NodeGrid;

use crate::neighbors::Neighbors;

/// Breadth-first search from `start` to `end`.
///
/// Neighbors are marked visited when they are enqueued, so each node enters
/// the queue at most once and gets `distance = parent + 1`. The trace lists
/// nodes in dequeue order and ends with `end` if it was reached.
pub fn bfs(grid: &mut NodeGrid, start: usize, end: usize) -> Vec<usize> {
    let mut trace = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut nb = Neighbors::new();

    if grid.node(start).is_wall {
        return trace;
    }
    {
        let s = grid.node_mut(start);
        s.distance = 0;
        s.is_visited = true;
    }
    queue.push_back(start);

    while let Some(ci) = queue.pop_front() {
        trace.push(ci);
        if ci == end {
            break;
        }

        let next = grid.node(ci).distance + 1;
        for &ni in nb.unvisited(grid, ci) {
            let n = grid.node_mut(ni);
            if n.is_wall {
                continue;
            }
            n.distance = next;
            n.previous = Some(ci);
            n.is_visited = true;
            queue.push_back(ni);
        }
    }

    trace
}
