use pathmaze_core::NodeGrid;

use crate::neighbors::Neighbors;

/// Depth-first search from `start` to `end` with an explicit stack.
///
/// A node is marked visited only when popped, so it may be pushed several
/// times from different parents; the latest push wins and stale entries are
/// skipped at pop time. The resulting path is not necessarily shortest.
pub fn dfs(grid: &mut NodeGrid, start: usize, end: usize) -> Vec<usize> {
    let mut trace = Vec::new();
    let mut stack = vec![start];
    let mut nb = Neighbors::new();

    grid.node_mut(start).distance = 0;

    while let Some(ci) = stack.pop() {
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
        for &ni in nb.unvisited(grid, ci) {
            let n = grid.node_mut(ni);
            if n.is_wall {
                continue;
            }
            n.distance = next;
            n.previous = Some(ci);
            stack.push(ni);
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
    fn follows_last_pushed_direction_first() {
        // Right is pushed last, so the search runs along the top row first.
        let mut g = NodeGrid::open(3, 2, Point::ZERO, Point::new(2, 1));
        let (s, e) = (g.start(), g.end());
        let trace = dfs(&mut g, s, e);
        let pts: Vec<Point> = trace.iter().map(|&i| g.point(i)).collect();
        assert_eq!(
            pts,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0), Point::new(2, 1)]
        );
        assert_eq!(reconstruct_path(&g, e).len(), 4);
    }

    #[test]
    fn no_duplicates_in_trace() {
        let mut g = NodeGrid::open(6, 6, Point::ZERO, Point::new(5, 5));
        let (s, e) = (g.start(), g.end());
        let mut trace = dfs(&mut g, s, e);
        let n = trace.len();
        trace.sort_unstable();
        trace.dedup();
        assert_eq!(trace.len(), n);
    }

    #[test]
    fn path_follows_parent_links() {
        let mut g = NodeGrid::open(4, 4, Point::ZERO, Point::new(3, 3));
        let (s, e) = (g.start(), g.end());
        dfs(&mut g, s, e);
        let path = reconstruct_path(&g, e);
        assert_eq!(path.first(), Some(&s));
        for w in path.windows(2) {
            let (a, b) = (g.point(w[0]), g.point(w[1]));
            assert_eq!(a.x.abs_diff(b.x) + a.y.abs_diff(b.y), 1);
        }
    }
}
