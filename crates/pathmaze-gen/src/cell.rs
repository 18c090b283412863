use pathmaze_core::Point;

/// A generation-time maze cell.
///
/// `visited` tracks the carver's progress and is unrelated to the
/// search-time flag on [`Node`](pathmaze_core::Node).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub pos: Point,
    pub is_wall: bool,
    pub visited: bool,
}

impl Cell {
    /// Cells on an even row or column start out as walls, leaving the
    /// odd/odd lattice as carvable rooms.
    pub fn lattice(pos: Point) -> Self {
        Self {
            pos,
            is_wall: pos.x % 2 == 0 || pos.y % 2 == 0,
            visited: false,
        }
    }
}
