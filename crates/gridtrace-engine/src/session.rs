//! The [`Session`] — exclusive owner of the grid, markers and run state.

use gridtrace_core::{Grid, Pos};
use gridtrace_search::Algorithm;
use rand::{Rng, RngExt};

use crate::clock::Clock;
use crate::error::EngineError;
use crate::playback::{replay, IdleGuard, RunFlag, SnapshotSink};

/// Probability that a non-marker cell becomes a wall under random
/// generation.
const WALL_DENSITY: f64 = 0.3;

/// Default animation speed divisor.
const DEFAULT_SPEED: u32 = 10;

/// Session state behind the presentation layer.
///
/// Owns the grid exclusively and mediates every mutation. While a run is
/// active all mutating commands are silently ignored except [`cancel`] and
/// [`set_animation_speed`], which are always accepted. Attempts to place a
/// marker on the other marker are silent no-ops, as is toggling a wall
/// under a marker.
///
/// [`cancel`]: Session::cancel
/// [`set_animation_speed`]: Session::set_animation_speed
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    start: Pos,
    end: Pos,
    algorithm: Algorithm,
    speed: u32,
    drawing_walls: bool,
    current_node: Option<Pos>,
    flag: RunFlag,
}

impl Session {
    /// Create a session over a fresh `rows × cols` grid, with the start
    /// marker at the top-left corner and the end marker at the bottom-right.
    pub fn new(rows: i32, cols: i32) -> Result<Self, EngineError> {
        let grid = Grid::new(rows, cols).ok_or(EngineError::InvalidGeometry { rows, cols })?;
        Ok(Self {
            grid,
            start: Pos::ZERO,
            end: Pos::new(rows - 1, cols - 1),
            algorithm: Algorithm::default(),
            speed: DEFAULT_SPEED,
            drawing_walls: false,
            current_node: None,
            flag: RunFlag::new(),
        })
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The start marker.
    pub fn start_node(&self) -> Pos {
        self.start
    }

    /// The end marker.
    pub fn end_node(&self) -> Pos {
        self.end
    }

    /// The cell currently highlighted by playback, if any.
    pub fn current_node(&self) -> Option<Pos> {
        self.current_node
    }

    /// Whether a run is active.
    pub fn is_running(&self) -> bool {
        self.flag.is_running()
    }

    /// Whether the presentation layer is in wall-drawing mode.
    pub fn is_drawing_walls(&self) -> bool {
        self.drawing_walls
    }

    /// The animation speed divisor.
    pub fn animation_speed(&self) -> u32 {
        self.speed
    }

    /// The selected search algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Grid dimensions as `(rows, cols)`.
    pub fn dimensions(&self) -> (i32, i32) {
        (self.grid.rows(), self.grid.cols())
    }

    /// A handle onto the run flag, letting an external consumer observe or
    /// cancel a run mid-playback.
    pub fn run_flag(&self) -> RunFlag {
        self.flag.clone()
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Rebuild the grid at new dimensions, markers back to the corners.
    ///
    /// Rejects non-positive dimensions with prior state untouched. Ignored
    /// while a run is active.
    pub fn initialize_grid(&mut self, rows: i32, cols: i32) -> Result<(), EngineError> {
        if self.flag.is_running() {
            return Ok(());
        }
        let grid = Grid::new(rows, cols).ok_or(EngineError::InvalidGeometry { rows, cols })?;
        self.grid = grid;
        self.start = Pos::ZERO;
        self.end = Pos::new(rows - 1, cols - 1);
        self.current_node = None;
        Ok(())
    }

    /// Rebuild the grid at its current dimensions: walls, search state and
    /// markers all reset.
    pub fn reset_grid(&mut self) {
        if self.flag.is_running() {
            return;
        }
        let (rows, cols) = self.dimensions();
        if let Some(grid) = Grid::new(rows, cols) {
            self.grid = grid;
            self.start = Pos::ZERO;
            self.end = Pos::new(rows - 1, cols - 1);
            self.current_node = None;
        }
    }

    /// Flip the wall at `(row, col)`, unless it is a marker or out of
    /// bounds.
    pub fn toggle_wall(&mut self, row: i32, col: i32) {
        if self.flag.is_running() {
            return;
        }
        let p = Pos::new(row, col);
        if p == self.start || p == self.end {
            return;
        }
        if let Some(c) = self.grid.at_mut(p) {
            c.wall = !c.wall;
        }
    }

    /// Move the start marker, clearing any wall at the target. A target
    /// equal to the end marker (or out of bounds) is a no-op.
    pub fn set_start_node(&mut self, row: i32, col: i32) {
        if self.flag.is_running() {
            return;
        }
        let p = Pos::new(row, col);
        if p == self.end || !self.grid.contains(p) {
            return;
        }
        if let Some(c) = self.grid.at_mut(p) {
            c.wall = false;
        }
        self.start = p;
    }

    /// Move the end marker, clearing any wall at the target. A target equal
    /// to the start marker (or out of bounds) is a no-op.
    pub fn set_end_node(&mut self, row: i32, col: i32) {
        if self.flag.is_running() {
            return;
        }
        let p = Pos::new(row, col);
        if p == self.start || !self.grid.contains(p) {
            return;
        }
        if let Some(c) = self.grid.at_mut(p) {
            c.wall = false;
        }
        self.end = p;
    }

    /// Independently set each non-marker cell to a wall with probability
    /// 0.3.
    pub fn generate_random_walls<R: Rng>(&mut self, rng: &mut R) {
        if self.flag.is_running() {
            return;
        }
        let (start, end) = (self.start, self.end);
        for (p, cell) in self.grid.iter_mut() {
            if p == start || p == end {
                continue;
            }
            cell.wall = rng.random::<f64>() < WALL_DENSITY;
        }
    }

    /// Clear search markings and scratch on every cell; walls and markers
    /// stay.
    pub fn clear_path(&mut self) {
        if self.flag.is_running() {
            return;
        }
        self.grid.clear_search();
        self.current_node = None;
    }

    /// Remove every wall; markers stay.
    pub fn clear_walls(&mut self) {
        if self.flag.is_running() {
            return;
        }
        let (start, end) = (self.start, self.end);
        for (p, cell) in self.grid.iter_mut() {
            if p == start || p == end {
                continue;
            }
            cell.wall = false;
        }
    }

    /// Select the search algorithm for the next run.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if self.flag.is_running() {
            return;
        }
        self.algorithm = algorithm;
    }

    /// Set the wall-drawing input mode. This is a presentation-layer flag,
    /// not a grid mutation, so it is accepted at any time.
    pub fn set_drawing_walls(&mut self, drawing: bool) {
        self.drawing_walls = drawing;
    }

    /// Set the animation speed divisor, clamped to at least 1. Always
    /// accepted; a run reads the speed once when it starts.
    pub fn set_animation_speed(&mut self, speed: u32) {
        self.speed = speed.max(1);
    }

    /// Request cancellation of the active run. Always accepted; takes
    /// effect at the next delay boundary.
    pub fn cancel(&self) {
        self.flag.cancel();
    }

    /// Run the selected search and play its trace back through `sink`.
    ///
    /// A no-op if a run is already active. Clears prior search state, runs
    /// the algorithm to completion, then animates the exploration and the
    /// reconstructed path with one publish per step. The session is back to
    /// Idle on every exit path, including cancellation, sink failure and
    /// panics.
    pub fn run<C: Clock, S: SnapshotSink>(&mut self, clock: &mut C, sink: &mut S) {
        if !self.flag.try_begin() {
            return;
        }
        let _guard = IdleGuard::new(self.flag.clone());
        self.grid.clear_search();
        self.current_node = None;
        let trace = self.algorithm.run(&mut self.grid, self.start, self.end);
        replay(
            trace,
            &mut self.grid,
            &mut self.current_node,
            &self.flag,
            self.speed,
            clock,
            sink,
        );
    }
}
