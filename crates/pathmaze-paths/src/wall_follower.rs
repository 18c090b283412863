use pathmaze_core::NodeGrid;

use crate::neighbors::Neighbors;

/// Walk the maze like a person keeping a hand on the wall.
///
/// From the current node the walker takes the first unvisited, non-wall
/// neighbor in up/down/left/right order, never stepping straight back into
/// the node it just left. At a dead end it retreats one step along the
/// `previous` chain; once it retreats past the start the walk gives up.
///
/// Every entry into a node bumps its `visits` counter, but a node is
/// appended to the trace only the first time it is entered.
pub fn wall_follower(grid: &mut NodeGrid, start: usize, end: usize) -> Vec<usize> {
    let mut trace = Vec::new();
    let mut nb = Neighbors::new();

    if grid.node(start).is_wall {
        return trace;
    }
    grid.node_mut(start).distance = 0;

    let mut current = start;
    let mut previous: Option<usize> = None;
    loop {
        let cn = grid.node_mut(current);
        cn.visits += 1;
        if !cn.is_visited {
            cn.is_visited = true;
            trace.push(current);
        }
        if current == end {
            break;
        }

        let forward = nb
            .unvisited(grid, current)
            .iter()
            .copied()
            .find(|&ni| Some(ni) != previous && !grid.node(ni).is_wall);

        match (forward, previous) {
            (Some(ni), _) => {
                let d = grid.node(current).distance + 1;
                let n = grid.node_mut(ni);
                n.distance = d;
                n.previous = Some(current);
                previous = Some(current);
                current = ni;
            }
            (None, Some(back)) => {
                current = back;
                previous = grid.node(back).previous;
            }
            (None, None) => break,
        }
    }

    trace
}
