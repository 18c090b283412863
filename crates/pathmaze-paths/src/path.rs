use pathmaze_core::NodeGrid;

/// Follow `previous` links back from `end` and return the chain start-first.
///
/// The chain is only meaningful if the search reached `end`; check
/// [`is_reached`] first, or use [`found_path`].
pub fn reconstruct_path(grid: &NodeGrid, end: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut cur = Some(end);
    while let Some(i) = cur {
        path.push(i);
        cur = grid.node(i).previous;
    }
    path.reverse();
    path
}

/// Whether the last search over `grid` reached `end`.
#[inline]
pub fn is_reached(grid: &NodeGrid, end: usize) -> bool {
    grid.node(end).is_visited
}

/// The reconstructed path to `end`, or `None` if the search never got there.
pub fn found_path(grid: &NodeGrid, end: usize) -> Option<Vec<usize>> {
    is_reached(grid, end).then(|| reconstruct_path(grid, end))
}
