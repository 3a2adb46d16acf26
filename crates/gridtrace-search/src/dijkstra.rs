use gridtrace_core::{Grid, Pos, UNREACHABLE};

use crate::trace::{reconstruct_path, Step, Trace};

/// Uniform-cost Dijkstra search from `start` to `end`.
///
/// Keeps an explicit unvisited set seeded with every cell and extracts the
/// minimum-cost member by a row-major scan, first minimum winning ties, so
/// the exploration order is fully deterministic. Expects pre-cleared search
/// scratch; every traversable edge costs 1. Explored cells keep
/// `visited = true` as a side effect. Returns the accumulated trace with an
/// empty path if `end` is unreachable or either endpoint is out of bounds.
pub fn dijkstra(grid: &mut Grid, start: Pos, end: Pos) -> Trace {
    let mut trace = Trace::default();
    if !grid.contains(end) {
        return trace;
    }
    let Some(cell) = grid.at_mut(start) else {
        return trace;
    };
    cell.g = 0;

    // Unvisited membership, one slot per cell in row-major order.
    let mut unvisited = vec![true; grid.len()];

    loop {
        // Row-major scan for the cheapest unvisited cell; first wins on ties.
        let mut best: Option<(Pos, i32)> = None;
        for (i, (p, cell)) in grid.iter().enumerate() {
            if !unvisited[i] {
                continue;
            }
            if best.is_none_or(|(_, g)| cell.g < g) {
                best = Some((p, cell.g));
            }
        }
        let Some((current, g)) = best else {
            break;
        };
        if let Some(i) = grid.idx(current) {
            unvisited[i] = false;
        }

        // Walls leave the set without being visited or recorded.
        let Some(cell) = grid.at(current) else {
            break;
        };
        if cell.wall {
            continue;
        }
        // Cheapest remaining cell is unreached: the rest of the graph is cut
        // off from the start.
        if g == UNREACHABLE {
            break;
        }

        if let Some(c) = grid.at_mut(current) {
            c.visited = true;
        }
        trace.visited.push(current);
        trace.steps.push(Step {
            snapshot: grid.clone(),
            current,
        });

        if current == end {
            trace.path = reconstruct_path(grid, end);
            return trace;
        }

        for np in current.neighbors_4() {
            let Some(n) = grid.at(np) else {
                continue;
            };
            if n.visited || n.wall || g + 1 >= n.g {
                continue;
            }
            if let Some(nc) = grid.at_mut(np) {
                nc.g = g + 1;
                nc.previous = Some(current);
            }
        }
    }

    trace
}
