//! Core grid model for the pathfinding visualizer engine.
//!
//! Provides the types every other crate builds on:
//!
//! - [`Pos`] — row/column coordinates with the fixed cardinal-neighbour order
//! - [`Cell`] — one grid square: terrain, run markings, and search scratch
//! - [`Grid`] — a flat row-major arena of cells with deep-copy `Clone`
//!
//! Search algorithms live in `gridtrace-search`; session state and playback
//! live in `gridtrace-engine`.

mod cell;
mod grid;
mod pos;

pub use cell::{Cell, UNREACHABLE};
pub use grid::Grid;
pub use pos::Pos;
