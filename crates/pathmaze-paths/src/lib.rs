//! Search algorithms over maze grids.
//!
//! Five searches share one contract: they take a [`NodeGrid`], a start and
//! an end node index, mutate the grid's per-node search state, and return the
//! trace of node indices in the order they were visited.
//!
//! - **Dijkstra** uniform-cost search ([`dijkstra`])
//! - **A\*** with a Manhattan heuristic ([`astar`])
//! - **BFS** breadth-first search ([`bfs`])
//! - **DFS** stack-based depth-first search ([`dfs`])
//! - **Wall follower** hand-on-wall walk with backtracking ([`wall_follower`])
//!
//! [`Algorithm`] names them for dispatch, and [`reconstruct_path`] turns the
//! parent links a search leaves behind into a start-to-end path.
//!
//! | Algorithm | Marks visited | Shortest path |
//! |---|---|---|
//! | Dijkstra, A\* | when popped | yes |
//! | BFS | when enqueued | yes |
//! | DFS | when popped | no |
//! | Wall follower | when entered | no |
//!
//! [`NodeGrid`]: pathmaze_core::NodeGrid

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod neighbors;
mod path;
mod queue;
mod wall_follower;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::{euclidean, manhattan};
pub use neighbors::Neighbors;
pub use path::{found_path, is_reached, reconstruct_path};
pub use queue::{PriorityQueue, QueueKey};
pub use wall_follower::wall_follower;
