use std::error::Error;
use std::fmt;
use std::str::FromStr;

use gridtrace_core::{Grid, Pos};

use crate::astar::astar;
use crate::dijkstra::dijkstra;
use crate::trace::Trace;

/// Which search to run over the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    AStar,
    Dijkstra,
}

impl Algorithm {
    /// Run the selected search, recording the exploration trace.
    pub fn run(self, grid: &mut Grid, start: Pos, end: Pos) -> Trace {
        match self {
            Self::AStar => astar(grid, start, end),
            Self::Dijkstra => dijkstra(grid, start, end),
        }
    }

    /// The algorithm's canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::AStar => "aStar",
            Self::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized algorithm name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    name: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm '{}'", self.name)
    }
}

impl Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Parse an algorithm name, case-insensitively: `"aStar"` or
    /// `"dijkstra"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" => Ok(Self::AStar),
            "dijkstra" => Ok(Self::Dijkstra),
            _ => Err(ParseAlgorithmError {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(grid: &mut Grid, row: i32, col: i32) {
        if let Some(c) = grid.at_mut(Pos::new(row, col)) {
            c.wall = true;
        }
    }

    #[test]
    fn default_is_astar() {
        assert_eq!(Algorithm::default(), Algorithm::AStar);
    }

    #[test]
    fn parse_names() {
        assert_eq!("aStar".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("astar".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("dijkstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!("Dijkstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert!("bfs".parse::<Algorithm>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for algo in [Algorithm::AStar, Algorithm::Dijkstra] {
            assert_eq!(algo.to_string().parse::<Algorithm>(), Ok(algo));
        }
    }

    #[test]
    fn parse_error_names_the_input() {
        let err = "greedy".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.to_string(), "unknown algorithm 'greedy'");
    }

    // Both searches are optimal under unit cost, so they must agree on path
    // length everywhere even when the concrete routes differ on ties.
    #[test]
    fn astar_and_dijkstra_agree_on_length() {
        for end in [Pos::new(4, 4), Pos::new(0, 4), Pos::new(3, 1)] {
            let mut a = Grid::new(5, 5).unwrap();
            let mut d = Grid::new(5, 5).unwrap();
            let ta = Algorithm::AStar.run(&mut a, Pos::new(0, 0), end);
            let td = Algorithm::Dijkstra.run(&mut d, Pos::new(0, 0), end);
            assert_eq!(ta.path.len(), td.path.len(), "end {end}");
        }
    }

    #[test]
    fn astar_and_dijkstra_agree_on_length_with_walls() {
        let mut a = Grid::new(5, 5).unwrap();
        for (r, c) in [(1, 0), (1, 1), (1, 2), (1, 3), (3, 4), (3, 3)] {
            wall(&mut a, r, c);
        }
        let mut d = a.clone();
        let ta = Algorithm::AStar.run(&mut a, Pos::new(0, 0), Pos::new(4, 0));
        let td = Algorithm::Dijkstra.run(&mut d, Pos::new(0, 0), Pos::new(4, 0));
        assert!(!ta.path.is_empty());
        assert_eq!(ta.path.len(), td.path.len());
    }

    #[test]
    fn dispatch_runs_the_selected_search() {
        let mut grid = Grid::new(3, 3).unwrap();
        let trace = Algorithm::AStar.run(&mut grid, Pos::new(0, 0), Pos::new(2, 2));
        assert_eq!(trace.path.len(), 5);
        grid.clear_search();
        let trace = Algorithm::Dijkstra.run(&mut grid, Pos::new(0, 0), Pos::new(2, 2));
        assert_eq!(trace.path.len(), 5);
    }
}
