//! Session state and animated playback for the pathfinding visualizer.
//!
//! A [`Session`] owns the grid and markers, runs the selected search from
//! `gridtrace-search`, and replays the recorded trace as a timed sequence
//! of published snapshots. The two seams a presentation layer plugs into:
//!
//! - [`SnapshotSink`] — receives one frozen grid per animation step
//! - [`Clock`] — provides the delays between steps ([`SystemClock`] in
//!   production, an instant clock in tests)
//!
//! Cancellation is cooperative through the shared [`RunFlag`]: it is polled
//! at each delay boundary, and a run always ends Idle, whatever happens
//! in between.

mod clock;
mod error;
mod playback;
mod session;

pub use clock::{Clock, SystemClock};
pub use error::EngineError;
pub use playback::{RunFlag, SnapshotSink, BASE_PATH_DELAY_MS, BASE_VISIT_DELAY_MS};
pub use session::Session;

pub use gridtrace_search::Algorithm;
