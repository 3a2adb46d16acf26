use std::collections::BinaryHeap;

use gridtrace_core::{Grid, Pos};

use crate::distance::manhattan;
use crate::trace::{reconstruct_path, Step, Trace};

/// Open-set entry, ordered by `f` for use in `BinaryHeap`.
///
/// `seq` is a monotonically increasing insertion counter: among equal-`f`
/// entries the earliest-inserted one pops first, which makes the search
/// fully deterministic.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenRef {
    pos: Pos,
    f: i32,
    seq: u64,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, then
        // earliest insertion.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search from `start` to `end`, recording every finalized cell.
///
/// Expects pre-cleared search scratch (see [`Grid::clear_search`]); every
/// traversable edge costs 1 and the heuristic is Manhattan distance.
/// Explored cells keep `visited = true` as a side effect. Returns the
/// accumulated trace with an empty path if `end` is unreachable or either
/// endpoint is out of bounds.
pub fn astar(grid: &mut Grid, start: Pos, end: Pos) -> Trace {
    let mut trace = Trace::default();
    if !grid.contains(end) {
        return trace;
    }
    let Some(cell) = grid.at_mut(start) else {
        return trace;
    };
    cell.g = 0;
    cell.h = manhattan(start, end);
    cell.f = cell.g + cell.h;
    let start_f = cell.f;

    let mut open = BinaryHeap::new();
    let mut seq = 0u64;
    open.push(OpenRef {
        pos: start,
        f: start_f,
        seq,
    });

    while let Some(OpenRef { pos: current, .. }) = open.pop() {
        let Some(cell) = grid.at(current) else {
            continue;
        };
        // Relaxation re-pushes cells, so skip entries already finalized.
        if cell.visited {
            continue;
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

        let tentative_g = cell.g + 1;
        for np in current.neighbors_4() {
            let Some(n) = grid.at(np) else {
                continue;
            };
            if n.visited || n.wall || tentative_g >= n.g {
                continue;
            }
            let h = manhattan(np, end);
            if let Some(nc) = grid.at_mut(np) {
                nc.previous = Some(current);
                nc.g = tentative_g;
                nc.h = h;
                nc.f = tentative_g + h;
            }
            seq += 1;
            open.push(OpenRef {
                pos: np,
                f: tentative_g + h,
                seq,
            });
        }
    }

    trace
}
