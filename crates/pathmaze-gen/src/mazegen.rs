//! Randomized depth-first maze carving.
//!
//! The grid is a "thick wall" lattice: cells with both coordinates odd are
//! rooms, everything else starts as wall. Carving walks the rooms depth-first
//! and knocks out the wall cell between each room and the next one, so the
//! open cells form a spanning tree (a perfect maze).

use pathmaze_core::{NodeGrid, Point, Range};
use pathmaze_paths::euclidean;
use rand::Rng;

use crate::cell::Cell;
use crate::config::MazeConfig;

/// Force a dimension odd (and at least 3) so walls and rooms alternate.
fn lattice_len(n: i32) -> i32 {
    let n = n.max(3);
    if n % 2 == 0 { n + 1 } else { n }
}

/// Maze generator operating on a lattice of [`Cell`] values.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    config: MazeConfig,
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    stack: Vec<usize>,
    current: usize,
    start: Point,
    end: Point,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator for a `width × height` maze.
    ///
    /// Even dimensions are bumped to the next odd value. The start is always
    /// `(1, 1)` and the end `(width - 2, height - 2)`; both are open.
    ///
    /// `config` is expected to pass [`MazeConfig::validate`]; carving does
    /// not terminate with `random_backtrack >= 1`.
    pub fn new(width: i32, height: i32, config: MazeConfig, rng: R) -> Self {
        let width = lattice_len(width);
        let height = lattice_len(height);
        let mut cells: Vec<Cell> = Range::sized(width, height)
            .iter()
            .map(Cell::lattice)
            .collect();

        let start = Point::new(1, 1);
        let end = Point::new(width - 2, height - 2);
        let si = (start.y * width + start.x) as usize;
        let ei = (end.y * width + end.x) as usize;
        cells[si].is_wall = false;
        cells[ei].is_wall = false;

        Self {
            rng,
            config,
            width,
            height,
            stack: Vec::with_capacity(cells.len() / 2),
            cells,
            current: si,
            start,
            end,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Run the carver to completion. Returns the number of steps taken.
    pub fn carve(&mut self) -> usize {
        let mut steps = 0;
        while !self.stack.is_empty() || !self.cells[self.current].visited {
            self.step();
            steps += 1;
        }
        log::debug!(
            "carved {}x{} lattice in {} steps",
            self.width,
            self.height,
            steps
        );
        steps
    }

    /// Advance the carver by one move: either open a passage to a fresh room
    /// or backtrack.
    fn step(&mut self) {
        self.cells[self.current].visited = true;

        if let Some(next) = self.pick_next() {
            self.cells[next].visited = true;
            self.stack.push(self.current);

            let wall = self.cells[self.current].pos.midpoint(self.cells[next].pos);
            if let Some(wi) = self.idx(wall) {
                self.cells[wi].is_wall = false;
            }
            self.current = next;
        } else if !self.stack.is_empty() {
            if self.rng.random::<f64>() < self.config.random_backtrack {
                // Jump anywhere on the stack without popping it.
                let k = self.rng.random_range(0..self.stack.len());
                self.current = self.stack[k];
            } else if let Some(back) = self.stack.pop() {
                self.current = back;
            }
        }
    }

    /// Choose an unvisited room two cells away from the current one.
    fn pick_next(&mut self) -> Option<usize> {
        let here = self.cells[self.current].pos;
        let mut candidates = [0usize; 4];
        let mut n = 0;
        for p in here.neighbors_4(2) {
            if let Some(i) = self.idx(p) {
                if !self.cells[i].visited {
                    candidates[n] = i;
                    n += 1;
                }
            }
        }
        let candidates = &candidates[..n];
        if candidates.is_empty() {
            return None;
        }

        if self.rng.random::<f64>() < self.config.random_pick {
            return Some(candidates[self.rng.random_range(0..candidates.len())]);
        }

        let mut best = candidates[0];
        let mut best_dist = euclidean(self.cells[best].pos, self.start);
        for &i in &candidates[1..] {
            let d = euclidean(self.cells[i].pos, self.start);
            if d > best_dist {
                best = i;
                best_dist = d;
            }
        }
        Some(best)
    }

    /// Force open `extra_openings * rows * cols` randomly chosen interior
    /// cells, adding loops and alternative routes. Only ever removes walls.
    ///
    /// Returns the number of samples drawn.
    pub fn open_extra(&mut self, rows: i32, cols: i32) -> usize {
        let interior = self.bounds().interior();
        if interior.is_empty() {
            return 0;
        }
        let area = f64::from(rows.max(0)) * f64::from(cols.max(0));
        let count = (area * self.config.extra_openings) as usize;
        for _ in 0..count {
            let p = Point::new(
                self.rng.random_range(interior.min.x..interior.max.x),
                self.rng.random_range(interior.min.y..interior.max.y),
            );
            if let Some(i) = self.idx(p) {
                self.cells[i].is_wall = false;
            }
        }
        log::debug!("opened {count} extra cells");
        count
    }

    /// Derive a fresh search grid from the current wall layout.
    pub fn node_grid(&self, grid_id: u8) -> NodeGrid {
        NodeGrid::from_walls(
            self.width,
            self.height,
            grid_id,
            self.start,
            self.end,
            |p| self.cells[(p.y * self.width + p.x) as usize].is_wall,
        )
    }
}
