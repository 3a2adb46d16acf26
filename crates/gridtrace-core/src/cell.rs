//! The [`Cell`] type — one grid square with its search state.

use crate::pos::Pos;

/// Sentinel cost meaning "not yet reached".
pub const UNREACHABLE: i32 = i32::MAX;

/// A single grid square.
///
/// `wall` is terrain. `visited`, `path` and `current` are markings written
/// during a run (`current` only ever by playback, and only transiently).
/// The rest is search scratch: cost-so-far `g`, heuristic `h`, priority
/// `f = g + h`, and the back-pointer `previous`, which forms a tree rooted
/// at the start cell. The tree is acyclic because a cell's cost only ever
/// strictly decreases when its back-pointer is claimed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub wall: bool,
    pub visited: bool,
    pub path: bool,
    pub current: bool,
    pub g: i32,
    pub h: i32,
    pub f: i32,
    pub previous: Option<Pos>,
}

impl Cell {
    /// Reset search markings and scratch fields, keeping terrain.
    pub fn clear_search(&mut self) {
        self.visited = false;
        self.path = false;
        self.current = false;
        self.g = UNREACHABLE;
        self.h = 0;
        self.f = UNREACHABLE;
        self.previous = None;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            wall: false,
            visited: false,
            path: false,
            current: false,
            g: UNREACHABLE,
            h: 0,
            f: UNREACHABLE,
            previous: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unreached() {
        let c = Cell::default();
        assert!(!c.wall);
        assert!(!c.visited);
        assert!(!c.path);
        assert!(!c.current);
        assert_eq!(c.g, UNREACHABLE);
        assert_eq!(c.h, 0);
        assert_eq!(c.f, UNREACHABLE);
        assert_eq!(c.previous, None);
    }

    #[test]
    fn clear_search_keeps_walls() {
        let mut c = Cell {
            wall: true,
            visited: true,
            path: true,
            current: true,
            g: 4,
            h: 2,
            f: 6,
            previous: Some(Pos::new(1, 1)),
        };
        c.clear_search();
        assert!(c.wall);
        assert_eq!(c, Cell {
            wall: true,
            ..Cell::default()
        });
    }
}
