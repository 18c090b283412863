//! Maze generation for the pathmaze search workbench.
//!
//! [`MazeGen`] carves a randomized depth-first spanning tree over a
//! thick-wall lattice and can optionally punch extra openings to create
//! loops. [`Maze`] wraps the result as one independent
//! [`NodeGrid`](pathmaze_core::NodeGrid) per search algorithm.

pub mod cell;
pub mod config;
pub mod maze;
pub mod mazegen;

pub use cell::Cell;
pub use config::{InvalidMazeConfig, MazeConfig};
pub use maze::Maze;
pub use mazegen::MazeGen;
