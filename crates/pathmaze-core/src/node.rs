//! The [`Node`] type: one grid vertex plus the search state a single
//! algorithm run writes into it.

use crate::geom::Point;

/// Distance sentinel meaning "not reached yet".
pub const INFINITY: u32 = u32::MAX;

/// A grid vertex carrying per-run search state.
///
/// `index` is the node's stable row-major position in its [`NodeGrid`]
/// and `previous` refers to another node of the same grid by that index.
///
/// [`NodeGrid`]: crate::NodeGrid
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Node {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub pos: Point,
    pub index: usize,
    pub grid_id: u8,
    pub is_start: bool,
    pub is_end: bool,
    pub is_wall: bool,
    pub is_visited: bool,
    /// Cost from the start along the best known path, [`INFINITY`] if unreached.
    pub distance: u32,
    #[cfg_attr(feature = "serde", serde(rename = "previousNode"))]
    pub previous: Option<usize>,
    /// How many times the wall follower entered this node.
    #[cfg_attr(feature = "serde", serde(rename = "noOfVisits"))]
    pub visits: u32,
    /// A* heuristic estimate to the end node.
    pub h: u32,
    /// A* total score `distance + h`.
    pub f: u32,
}

impl Node {
    /// Create a fresh, unvisited node.
    pub fn new(pos: Point, index: usize, grid_id: u8, is_wall: bool) -> Self {
        Self {
            pos,
            index,
            grid_id,
            is_start: false,
            is_end: false,
            is_wall,
            is_visited: false,
            distance: INFINITY,
            previous: None,
            visits: 0,
            h: 0,
            f: 0,
        }
    }

    /// Whether a search assigned this node a finite distance.
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.distance != INFINITY
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_wire_names() {
        let mut n = Node::new(Point::new(3, 4), 19, 2, false);
        n.previous = Some(18);
        n.visits = 2;
        let v = serde_json::to_value(&n).unwrap();
        assert_eq!(v["col"], 3);
        assert_eq!(v["row"], 4);
        assert_eq!(v["isWall"], false);
        assert_eq!(v["previousNode"], 18);
        assert_eq!(v["noOfVisits"], 2);
        assert_eq!(v["gridId"], 2);
        let back: Node = serde_json::from_value(v).unwrap();
        assert_eq!(back, n);
    }
}
