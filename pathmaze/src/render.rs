//! Plain-text maze pictures for terminals and logs.

use pathmaze_core::NodeGrid;

use crate::runner::AlgorithmRun;

/// Draw `grid` one character per node: `#` wall, `S` start, `E` end,
/// `*` path, `.` visited, space for untouched open cells.
pub fn render_grid(grid: &NodeGrid, path: &[usize]) -> String {
    let mut on_path = vec![false; grid.len()];
    for &i in path {
        on_path[i] = true;
    }

    let width = grid.width() as usize;
    let mut out = String::with_capacity(grid.len() + grid.height() as usize);
    for (i, n) in grid.nodes().iter().enumerate() {
        let c = if n.is_wall {
            '#'
        } else if n.is_start {
            'S'
        } else if n.is_end {
            'E'
        } else if on_path[i] {
            '*'
        } else if n.is_visited {
            '.'
        } else {
            ' '
        };
        out.push(c);
        if (i + 1) % width == 0 {
            out.push('\n');
        }
    }
    out
}

/// Draw a finished run with its path overlaid.
pub fn render(run: &AlgorithmRun) -> String {
    render_grid(&run.grid, &run.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathmaze_core::Point;
    use pathmaze_paths::{bfs, reconstruct_path};

    #[test]
    fn draws_walls_path_and_endpoints() {
        let mut g = NodeGrid::from_walls(4, 3, 0, Point::ZERO, Point::new(3, 0), |p| {
            p.x == 1 && p.y < 2
        });
        let (s, e) = (g.start(), g.end());
        bfs(&mut g, s, e);
        let path = reconstruct_path(&g, e);
        assert_eq!(render_grid(&g, &path), "S#*E\n*#*.\n***.\n");
    }

    #[test]
    fn untouched_grid_is_blank() {
        let g = NodeGrid::open(3, 1, Point::ZERO, Point::new(2, 0));
        assert_eq!(render_grid(&g, &[]), "S E\n");
    }
}
