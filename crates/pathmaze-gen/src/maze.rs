use pathmaze_core::{NodeGrid, Point};
use pathmaze_paths::Algorithm;
use rand::Rng;

use crate::config::MazeConfig;
use crate::mazegen::MazeGen;

/// A generated maze, with one independent search grid per algorithm.
#[derive(Debug, Clone)]
pub struct Maze {
    width: i32,
    height: i32,
    single_path: bool,
    grids: Vec<(Algorithm, NodeGrid)>,
}

impl Maze {
    /// Carve a `rows × cols` maze and derive one grid copy per algorithm.
    ///
    /// With `single_path` the open cells form a spanning tree; otherwise
    /// extra openings add loops. Dimensions are not validated here beyond
    /// the generator's odd/minimum adjustment.
    pub fn generate<R: Rng>(
        rows: i32,
        cols: i32,
        single_path: bool,
        config: &MazeConfig,
        rng: R,
    ) -> Self {
        let mut mg = MazeGen::new(cols, rows, config.clone(), rng);
        mg.carve();
        if !single_path {
            mg.open_extra(rows, cols);
        }
        Self::from_generator(&mg, single_path)
    }

    /// Derive the per-algorithm grids from a finished generator.
    ///
    /// Grid ids run from 1 in [`Algorithm::ALL`] order.
    pub fn from_generator<R: Rng>(mg: &MazeGen<R>, single_path: bool) -> Self {
        let grids = Algorithm::ALL
            .into_iter()
            .zip(1u8..)
            .map(|(a, id)| (a, mg.node_grid(id)))
            .collect();
        log::info!(
            "generated {}x{} maze (single path: {})",
            mg.width(),
            mg.height(),
            single_path
        );
        Self {
            width: mg.width(),
            height: mg.height(),
            single_path,
            grids,
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
    pub fn single_path(&self) -> bool {
        self.single_path
    }

    /// Start position, shared by every grid.
    pub fn start(&self) -> Point {
        Point::new(1, 1)
    }

    /// End position, shared by every grid.
    pub fn end(&self) -> Point {
        Point::new(self.width - 2, self.height - 2)
    }

    /// The grid reserved for `algorithm`.
    pub fn grid(&self, algorithm: Algorithm) -> &NodeGrid {
        // Grids are stored in `Algorithm::ALL` order.
        &self.grids[algorithm as usize].1
    }

    /// All `(algorithm, grid)` pairs in registry order.
    pub fn grids(&self) -> &[(Algorithm, NodeGrid)] {
        &self.grids
    }

    /// Take ownership of the grids.
    pub fn into_grids(self) -> Vec<(Algorithm, NodeGrid)> {
        self.grids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn five_identical_layouts_with_distinct_ids() {
        let maze = Maze::generate(10, 14, true, &MazeConfig::default(), StdRng::seed_from_u64(9));
        assert_eq!((maze.width(), maze.height()), (15, 11));
        let grids = maze.grids();
        assert_eq!(grids.len(), 5);
        for (k, (a, g)) in grids.iter().enumerate() {
            assert_eq!(*a, Algorithm::ALL[k]);
            assert_eq!(g.grid_id() as usize, k + 1);
            assert_eq!(g.point(g.start()), maze.start());
            assert_eq!(g.point(g.end()), maze.end());
            let walls = |g: &NodeGrid| g.iter().map(|n| n.is_wall).collect::<Vec<_>>();
            assert_eq!(walls(g), walls(&grids[0].1));
        }
    }

    #[test]
    fn endpoints_are_never_walls() {
        for seed in 0..30 {
            for single in [true, false] {
                let maze = Maze::generate(
                    4 + seed as i32 % 7,
                    5 + seed as i32 % 5,
                    single,
                    &MazeConfig::default(),
                    StdRng::seed_from_u64(seed),
                );
                for (_, g) in maze.grids() {
                    assert!(!g.node(g.start()).is_wall);
                    assert!(!g.node(g.end()).is_wall);
                }
            }
        }
    }

    #[test]
    fn grids_do_not_share_state() {
        let maze = Maze::generate(9, 9, true, &MazeConfig::default(), StdRng::seed_from_u64(2));
        let mut grids = maze.clone().into_grids();
        let (a, g) = &mut grids[0];
        let (s, e) = (g.start(), g.end());
        a.find_path(g, s, e);
        assert!(g.node(s).is_visited);
        assert!(!grids[1].1.node(s).is_visited);
        assert!(!maze.grid(Algorithm::Dijkstra).node(s).is_visited);
    }
}
