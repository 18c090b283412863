//! The [`NodeGrid`] type: a rectangular arena of [`Node`]s.
//!
//! Unlike a shared-buffer view, a `NodeGrid` owns its nodes: cloning yields a
//! fully independent copy, so each search can mutate its own grid without
//! affecting any other run over the same maze.

use crate::geom::{Point, Range};
use crate::node::Node;

/// A `width × height` grid of search nodes stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NodeGrid {
    width: i32,
    height: i32,
    grid_id: u8,
    start: usize,
    end: usize,
    nodes: Vec<Node>,
}

impl NodeGrid {
    /// Build a grid whose wall layout is given by `is_wall`.
    ///
    /// # Panics
    ///
    /// Panics if the grid is empty or if `start` / `end` lie outside it.
    pub fn from_walls(
        width: i32,
        height: i32,
        grid_id: u8,
        start: Point,
        end: Point,
        mut is_wall: impl FnMut(Point) -> bool,
    ) -> Self {
        let bounds = Range::sized(width, height);
        assert!(!bounds.is_empty(), "empty grid {width}x{height}");
        assert!(bounds.contains(start), "start {start} outside {bounds}");
        assert!(bounds.contains(end), "end {end} outside {bounds}");

        let nodes = bounds
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let mut n = Node::new(p, i, grid_id, is_wall(p));
                n.is_start = p == start;
                n.is_end = p == end;
                n
            })
            .collect();
        let w = width as usize;
        Self {
            width,
            height,
            grid_id,
            start: start.y as usize * w + start.x as usize,
            end: end.y as usize * w + end.x as usize,
            nodes,
        }
    }

    /// A grid with no walls at all.
    pub fn open(width: i32, height: i32, start: Point, end: Point) -> Self {
        Self::from_walls(width, height, 0, start, end, |_| false)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Identifier of the algorithm copy this grid belongs to.
    #[inline]
    pub fn grid_id(&self) -> u8 {
        self.grid_id
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    /// Index of the start node.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index of the end node.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Convert a `Point` to a node index. Returns `None` if out of range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Convert a node index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.nodes[idx].pos
    }

    /// The node at index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range: indices only come from this grid.
    #[inline]
    pub fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Mutable access to the node at index `idx`.
    #[inline]
    pub fn node_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }

    /// The node at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Node> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// All nodes in row-major order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterate over nodes in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Number of wall nodes.
    pub fn wall_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_wall).count()
    }

    /// Number of non-wall nodes.
    pub fn open_count(&self) -> usize {
        self.len() - self.wall_count()
    }
}

impl<'a> IntoIterator for &'a NodeGrid {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
