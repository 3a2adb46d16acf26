//! Exploration records: [`Step`] and [`Trace`].

use gridtrace_core::{Grid, Pos};

/// One exploration step: the grid frozen at the instant `current` was
/// finalized, with its visited flag already set.
///
/// Algorithms never set `current` flags on snapshots; playback adds them
/// when it installs a step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub snapshot: Grid,
    pub current: Pos,
}

/// The full record of one search run.
///
/// `steps` and `visited` grow in lockstep, one entry per finalized cell, in
/// exploration order. `path` runs start to end inclusive and is empty when
/// the end was unreachable. A trace is produced once per run and never
/// modified afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    pub steps: Vec<Step>,
    pub visited: Vec<Pos>,
    pub path: Vec<Pos>,
}

/// Walk the `previous` chain from `end` back to the root, then reverse so
/// the path starts at the search's start cell.
pub(crate) fn reconstruct_path(grid: &Grid, end: Pos) -> Vec<Pos> {
    let mut path = Vec::new();
    let mut current = Some(end);
    while let Some(p) = current {
        path.push(p);
        current = grid.at(p).and_then(|c| c.previous);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_follows_previous_chain() {
        let mut grid = Grid::new(3, 3).unwrap();
        // (0,0) -> (0,1) -> (1,1)
        if let Some(c) = grid.at_mut(Pos::new(0, 1)) {
            c.previous = Some(Pos::new(0, 0));
        }
        if let Some(c) = grid.at_mut(Pos::new(1, 1)) {
            c.previous = Some(Pos::new(0, 1));
        }
        assert_eq!(
            reconstruct_path(&grid, Pos::new(1, 1)),
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1)]
        );
    }

    #[test]
    fn reconstruct_of_root_is_single_cell() {
        let grid = Grid::new(2, 2).unwrap();
        assert_eq!(reconstruct_path(&grid, Pos::ZERO), vec![Pos::ZERO]);
    }
}
