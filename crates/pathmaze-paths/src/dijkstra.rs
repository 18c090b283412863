use pathmaze_core::NodeGrid;

use crate::neighbors::Neighbors;
use crate::queue::{PriorityQueue, QueueKey};

/// Uniform-cost search from `start` to `end`.
///
/// A node is settled (marked visited and appended to the trace) when it is
/// popped from the queue. The search returns as soon as `end` is settled, or
/// with the partial trace once the reachable region is exhausted.
pub fn dijkstra(grid: &mut NodeGrid, start: usize, end: usize) -> Vec<usize> {
    let mut trace = Vec::with_capacity(grid.len());
    let mut open = PriorityQueue::with_capacity(QueueKey::Distance, grid.len() / 2);
    let mut nb = Neighbors::new();

    grid.node_mut(start).distance = 0;
    open.push(grid, start);

    while let Some(ci) = open.pop(grid) {
        let cn = grid.node(ci);
        if cn.is_wall || cn.is_visited {
            continue;
        }
        grid.node_mut(ci).is_visited = true;
        trace.push(ci);
        if ci == end {
            break;
        }

        let next = grid.node(ci).distance + 1;
        for &ni in nb.in_bounds(grid, ci) {
            let n = grid.node_mut(ni);
            if n.is_wall || n.is_visited || next >= n.distance {
                continue;
            }
            n.distance = next;
            n.previous = Some(ci);
            if !open.update(grid, ni) {
                open.push(grid, ni);
            }
        }
    }

    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::reconstruct_path;
    use pathmaze_core::Point;

    #[test]
    fn open_grid_shortest_path() {
        let mut g = NodeGrid::open(3, 3, Point::ZERO, Point::new(2, 2));
        let (s, e) = (g.start(), g.end());
        let trace = dijkstra(&mut g, s, e);
        assert_eq!(trace.first(), Some(&s));
        assert_eq!(trace.last(), Some(&e));
        assert_eq!(trace.len(), 9);
        assert_eq!(g.node(e).distance, 4);
        assert_eq!(reconstruct_path(&g, e).len(), 5);
    }

    #[test]
    fn settles_in_distance_order() {
        let mut g = NodeGrid::open(4, 4, Point::ZERO, Point::new(3, 3));
        let (s, e) = (g.start(), g.end());
        let trace = dijkstra(&mut g, s, e);
        let ds: Vec<u32> = trace.iter().map(|&i| g.node(i).distance).collect();
        assert!(ds.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn detour_around_wall() {
        // .#.
        // .#.
        // ...
        let mut g = NodeGrid::from_walls(3, 3, 0, Point::ZERO, Point::new(2, 0), |p| {
            p.x == 1 && p.y < 2
        });
        let (s, e) = (g.start(), g.end());
        let trace = dijkstra(&mut g, s, e);
        assert!(trace.iter().all(|&i| !g.node(i).is_wall));
        assert_eq!(g.node(e).distance, 6);
        assert_eq!(reconstruct_path(&g, e).len(), 7);
    }
}
