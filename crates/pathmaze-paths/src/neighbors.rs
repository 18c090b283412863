use pathmaze_core::{NodeGrid, Point};

/// Search expansion order: up, down, left, right.
const DIRS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// Cached neighbor computation helper.
///
/// Enumerates the 4-directional neighbors of a node as node indices, reusing
/// one internal buffer across calls.
pub struct Neighbors {
    buf: Vec<usize>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// In-bounds neighbors of node `i` that are not yet marked visited.
    ///
    /// Walls are included; callers decide how to treat them.
    pub fn unvisited(&mut self, grid: &NodeGrid, i: usize) -> &[usize] {
        self.collect(grid, i, |g, n| !g.node(n).is_visited)
    }

    /// Every in-bounds neighbor of node `i`, visited or not.
    ///
    /// Dijkstra relaxes through this variant so a reached but unsettled
    /// neighbor can still be improved.
    pub fn in_bounds(&mut self, grid: &NodeGrid, i: usize) -> &[usize] {
        self.collect(grid, i, |_, _| true)
    }

    fn collect(
        &mut self,
        grid: &NodeGrid,
        i: usize,
        keep: impl Fn(&NodeGrid, usize) -> bool,
    ) -> &[usize] {
        self.buf.clear();
        let p = grid.point(i);
        for d in DIRS {
            if let Some(n) = grid.idx(p + d) {
                if keep(grid, n) {
                    self.buf.push(n);
                }
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_up_down_left_right() {
        let g = NodeGrid::open(3, 3, Point::ZERO, Point::new(2, 2));
        let mut nb = Neighbors::new();
        let center = g.idx(Point::new(1, 1)).unwrap();
        let got: Vec<Point> = nb.in_bounds(&g, center).iter().map(|&i| g.point(i)).collect();
        assert_eq!(
            got,
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn corner_is_clipped_to_bounds() {
        let g = NodeGrid::open(3, 3, Point::ZERO, Point::new(2, 2));
        let mut nb = Neighbors::new();
        assert_eq!(nb.in_bounds(&g, 0), &[3, 1]);
    }

    #[test]
    fn unvisited_skips_visited() {
        let mut g = NodeGrid::open(3, 3, Point::ZERO, Point::new(2, 2));
        g.node_mut(3).is_visited = true;
        let mut nb = Neighbors::new();
        assert_eq!(nb.unvisited(&g, 0), &[1]);
        assert_eq!(nb.in_bounds(&g, 0), &[3, 1]);
    }
}
