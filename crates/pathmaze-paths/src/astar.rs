use pathmaze_core::NodeGrid;

use crate::distance::manhattan;
use crate::neighbors::Neighbors;
use crate::queue::{PriorityQueue, QueueKey};

/// A* search from `start` to `end` with a Manhattan-distance heuristic.
///
/// `distance` holds the g-score, `h` the heuristic and `f = g + h` ranks the
/// open queue. Popped nodes enter a closed set and are never expanded again.
/// Returns immediately once `end` is popped.
pub fn astar(grid: &mut NodeGrid, start: usize, end: usize) -> Vec<usize> {
    let goal = grid.point(end);
    let mut trace = Vec::new();
    let mut closed = vec![false; grid.len()];
    let mut open = PriorityQueue::with_capacity(QueueKey::Score, grid.len() / 2);
    let mut nb = Neighbors::new();

    {
        let h = manhattan(grid.point(start), goal);
        let s = grid.node_mut(start);
        s.distance = 0;
        s.h = h;
        s.f = h;
    }
    open.push(grid, start);

    while let Some(ci) = open.pop(grid) {
        if closed[ci] || grid.node(ci).is_wall {
            continue;
        }
        closed[ci] = true;
        grid.node_mut(ci).is_visited = true;
        trace.push(ci);
        if ci == end {
            break;
        }

        let tentative = grid.node(ci).distance + 1;
        for &ni in nb.unvisited(grid, ci) {
            if closed[ni] {
                continue;
            }
            let h = manhattan(grid.point(ni), goal);
            let n = grid.node_mut(ni);
            if n.is_wall || tentative >= n.distance {
                continue;
            }
            n.distance = tentative;
            n.h = h;
            n.f = tentative + h;
            n.previous = Some(ci);
            if !open.update(grid, ni) {
                open.push(grid, ni);
            }
        }
    }

    trace
}
