//! Trace playback: the [`RunFlag`], the [`SnapshotSink`] seam, and the
//! timed replay loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use gridtrace_core::{Grid, Pos};
use gridtrace_search::Trace;

use crate::clock::Clock;

/// Delay before each exploration step, divided by the animation speed.
pub const BASE_VISIT_DELAY_MS: u64 = 1000;
/// Delay before each path step, divided by the animation speed.
pub const BASE_PATH_DELAY_MS: u64 = 500;

// ---------------------------------------------------------------------------
// RunFlag
// ---------------------------------------------------------------------------

/// Shared "a run is active" flag backed by an [`AtomicBool`].
///
/// Clearing it is the only cancellation signal and is always accepted;
/// playback polls it at each delay boundary, so an in-flight delay completes
/// before the loop exits. Clones share the flag, letting a snapshot
/// consumer cancel a run from outside the session.
#[derive(Clone, Debug)]
pub struct RunFlag {
    running: Arc<AtomicBool>,
}

impl RunFlag {
    /// Create a new, idle flag.
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a run is active.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Request cancellation (or mark the run finished).
    #[inline]
    pub fn cancel(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    /// Try to start a run. Returns `false` if one is already active, which
    /// makes a second concurrent run request a no-op.
    #[inline]
    pub fn try_begin(&self) -> bool {
        self.running
            .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
            .is_ok()
    }
}

impl Default for RunFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Clears a [`RunFlag`] on drop, so a run ends Idle on every exit path,
/// panics included.
pub(crate) struct IdleGuard {
    flag: RunFlag,
}

impl IdleGuard {
    pub(crate) fn new(flag: RunFlag) -> Self {
        Self { flag }
    }
}

impl Drop for IdleGuard {
    fn drop(&mut self) {
        self.flag.cancel();
    }
}

// ---------------------------------------------------------------------------
// SnapshotSink
// ---------------------------------------------------------------------------

/// Consumer of published grid snapshots (e.g. a renderer).
///
/// Playback hands over the session grid immediately after each step's
/// mutation, one publish per step. A failed publish is reported as a
/// non-fatal `log::warn!` notice and aborts the remaining animation.
pub trait SnapshotSink {
    /// Receive one frozen grid state.
    fn publish(&mut self, grid: &Grid) -> Result<(), Box<dyn std::error::Error>>;
}

// ---------------------------------------------------------------------------
// Replay loop
// ---------------------------------------------------------------------------

/// How a playback phase ended.
#[derive(PartialEq)]
enum PhaseEnd {
    Completed,
    Cancelled,
    SinkFailed,
}

/// Play a trace into `grid`, publishing one snapshot per step.
///
/// Visit phase first: for each step, sleep, poll cancellation, then install
/// the step's frozen snapshot with its cell flagged current and publish it.
/// Installing step `i`'s snapshot also erases step `i-1`'s current flag,
/// since trace snapshots never carry one. Transient current flags are wiped
/// afterwards whatever happened; the cleared grid and the path phase are
/// published only when the visit phase ran to completion.
pub(crate) fn replay<C: Clock, S: SnapshotSink>(
    trace: Trace,
    grid: &mut Grid,
    current_node: &mut Option<Pos>,
    flag: &RunFlag,
    speed: u32,
    clock: &mut C,
    sink: &mut S,
) {
    let speed = u64::from(speed.max(1));
    let visit_delay = Duration::from_millis(BASE_VISIT_DELAY_MS / speed);
    let path_delay = Duration::from_millis(BASE_PATH_DELAY_MS / speed);

    let mut end = PhaseEnd::Completed;
    for step in trace.steps {
        clock.sleep(visit_delay);
        if !flag.is_running() {
            end = PhaseEnd::Cancelled;
            break;
        }
        let mut snapshot = step.snapshot;
        if let Some(c) = snapshot.at_mut(step.current) {
            c.current = true;
        }
        *grid = snapshot;
        *current_node = Some(step.current);
        if let Err(e) = sink.publish(grid) {
            log::warn!("snapshot sink failed during visit playback: {e}");
            end = PhaseEnd::SinkFailed;
            break;
        }
    }

    for (_, cell) in grid.iter_mut() {
        cell.current = false;
    }
    *current_node = None;
    if end != PhaseEnd::Completed {
        return;
    }
    if let Err(e) = sink.publish(grid) {
        log::warn!("snapshot sink failed after visit playback: {e}");
        return;
    }

    for p in trace.path {
        clock.sleep(path_delay);
        if !flag.is_running() {
            return;
        }
        if let Some(c) = grid.at_mut(p) {
            c.path = true;
        }
        if let Err(e) = sink.publish(grid) {
            log::warn!("snapshot sink failed during path playback: {e}");
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_flag_begin_once() {
        let flag = RunFlag::new();
        assert!(!flag.is_running());
        assert!(flag.try_begin());
        assert!(flag.is_running());
        // A second begin while running is rejected.
        assert!(!flag.try_begin());
        flag.cancel();
        assert!(!flag.is_running());
        assert!(flag.try_begin());
    }

    #[test]
    fn run_flag_clones_share_state() {
        let flag = RunFlag::new();
        let other = flag.clone();
        assert!(flag.try_begin());
        assert!(other.is_running());
        other.cancel();
        assert!(!flag.is_running());
    }

    #[test]
    fn idle_guard_clears_on_drop() {
        let flag = RunFlag::new();
        assert!(flag.try_begin());
        {
            let _guard = IdleGuard::new(flag.clone());
            assert!(flag.is_running());
        }
        assert!(!flag.is_running());
    }
}
