use std::fmt;
use std::str::FromStr;

use pathmaze_core::NodeGrid;

use crate::{astar, bfs, dfs, dijkstra, wall_follower};

/// Error returned when parsing an unrecognised algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?} (expected one of dijkstra, astar, bfs, dfs, wallFollower)")]
pub struct UnknownAlgorithm(pub String);

/// The fixed registry of search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Algorithm {
    Dijkstra,
    Astar,
    Bfs,
    Dfs,
    WallFollower,
}

impl Algorithm {
    /// Every algorithm, in registry order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Dijkstra,
        Algorithm::Astar,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::WallFollower,
    ];

    /// Registry name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Astar => "astar",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::WallFollower => "wallFollower",
        }
    }

    /// Whether the returned path is guaranteed shortest.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::Astar | Algorithm::Bfs)
    }

    /// Run the search on `grid`, returning the visited-order trace.
    ///
    /// The grid is mutated in place and should not be searched again.
    pub fn find_path(self, grid: &mut NodeGrid, start: usize, end: usize) -> Vec<usize> {
        match self {
            Algorithm::Dijkstra => dijkstra(grid, start, end),
            Algorithm::Astar => astar(grid, start, end),
            Algorithm::Bfs => bfs(grid, start, end),
            Algorithm::Dfs => dfs(grid, start, end),
            Algorithm::WallFollower => wall_follower(grid, start, end),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{found_path, is_reached};
    use pathmaze_core::Point;

    #[test]
    fn names_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(a.name().parse::<Algorithm>(), Ok(a));
            assert_eq!(a.to_string(), a.name());
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "greedy".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, UnknownAlgorithm("greedy".into()));
        assert!(err.to_string().contains("greedy"));
        assert!("WallFollower".parse::<Algorithm>().is_err());
    }

    /// 7x7 comb: vertical walls with alternating gaps at top and bottom.
    fn comb() -> NodeGrid {
        NodeGrid::from_walls(7, 7, 0, Point::ZERO, Point::new(6, 6), |p| {
            (p.x == 1 && p.y < 6)
                || (p.x == 3 && p.y > 0)
                || (p.x == 5 && p.y < 6)
        })
    }

    #[test]
    fn every_algorithm_reaches_the_end_without_touching_walls() {
        for a in Algorithm::ALL {
            let mut g = comb();
            let (s, e) = (g.start(), g.end());
            let trace = a.find_path(&mut g, s, e);
            assert_eq!(trace.first(), Some(&s), "{a}");
            assert_eq!(trace.last(), Some(&e), "{a}");
            assert!(trace.iter().all(|&i| !g.node(i).is_wall), "{a}");
            assert!(is_reached(&g, e), "{a}");
        }
    }

    #[test]
    fn optimal_algorithms_agree_on_path_length() {
        let lens: Vec<usize> = Algorithm::ALL
            .into_iter()
            .filter(|a| a.is_optimal())
            .map(|a| {
                let mut g = comb();
                let (s, e) = (g.start(), g.end());
                a.find_path(&mut g, s, e);
                found_path(&g, e).unwrap().len()
            })
            .collect();
        assert_eq!(lens.len(), 3);
        assert!(lens.iter().all(|&l| l == lens[0]));
    }

    #[test]
    fn sealed_end_terminates_everywhere() {
        for a in Algorithm::ALL {
            let mut g = NodeGrid::from_walls(5, 5, 0, Point::ZERO, Point::new(2, 2), |p| {
                p.x.abs_diff(2) + p.y.abs_diff(2) == 1
            });
            let (s, e) = (g.start(), g.end());
            let trace = a.find_path(&mut g, s, e);
            assert!(!trace.contains(&e), "{a}");
            assert!(!g.node(e).is_visited, "{a}");
            assert_eq!(found_path(&g, e), None, "{a}");
        }
    }

    #[test]
    fn bfs_and_dfs_are_deterministic() {
        for a in [Algorithm::Bfs, Algorithm::Dfs] {
            let mut g1 = comb();
            let mut g2 = comb();
            let (s, e) = (g1.start(), g1.end());
            assert_eq!(a.find_path(&mut g1, s, e), a.find_path(&mut g2, s, e));
        }
    }
}
