//! **pathmaze-core**: the maze grid model shared by the generator and the
//! search algorithms.
//!
//! This crate provides geometry primitives, the [`Node`] vertex type with its
//! per-run search state, and [`NodeGrid`], an owned arena of nodes addressed
//! by stable row-major index.

pub mod geom;
pub mod grid;
pub mod node;

pub use geom::{Point, Range};
pub use grid::NodeGrid;
pub use node::{INFINITY, Node};
