//! Shortest-path searches that record their exploration for playback.
//!
//! Two algorithms operate on a [`gridtrace_core::Grid`] with unit-cost
//! 4-connected movement:
//!
//! - **A\*** ([`astar`]) — binary-heap open set, Manhattan heuristic,
//!   equal-`f` ties broken by insertion order
//! - **Dijkstra** ([`dijkstra`]) — explicit unvisited set over every cell,
//!   row-major minimum extraction, first minimum winning ties
//!
//! Both produce a [`Trace`]: an ordered list of per-cell [`Step`]s (each a
//! frozen grid snapshot), the visit order, and the reconstructed path. Both
//! leave `visited = true` on explored cells, never touch walls, and expect
//! callers to clear search scratch before a run. [`Algorithm`] selects and
//! dispatches between them by name.

mod algorithm;
mod astar;
mod dijkstra;
mod distance;
mod trace;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::astar;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use trace::{Step, Trace};
