// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: time-based animation driver

use crate::geometry::Polyline;
use crate::types::{Direction, Vec2};
use serde::{Deserialize, Serialize};

/// Easing applied to progress before point lookup.
///
/// Every curve maps 0 to 0 and 1 to 1, so clamping and completion
/// behavior are unaffected by the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Raw progress
    Linear,
    /// Quadratic ease-in-out
    InOutQuad,
    /// Cubic ease-in-out
    InOutCubic,
}

impl Default for Ease {
    fn default() -> Self {
        Self::Linear
    }
}

impl Ease {
    /// Apply the curve to a clamped progress value.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Receiver for per-frame positions and the completion signal of a run.
pub trait PositionSink {
    /// Marker position for the current frame.
    fn position(&mut self, p: Vec2);
    /// The run reached progress 1.0; fired exactly once.
    fn completed(&mut self);
}

/// Generation token identifying one run of a driver.
///
/// Host frame callbacks queued before a cancellation compare their token
/// against [`AnimationDriver::run_token`] and drop themselves on mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken(u64);

/// Mutable per-run bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Timestamp of the first frame tick, in host milliseconds
    pub start_time: Option<f64>,
    /// Run length in milliseconds
    pub duration_ms: f64,
    /// Traversal direction over the point sequence
    pub direction: Direction,
    /// Last computed progress, always in [0,1]
    pub progress: f64,
    /// Whether the run is live
    pub running: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            start_time: None,
            duration_ms: 0.0,
            direction: Direction::Forward,
            progress: 0.0,
            running: false,
        }
    }
}

/// Lifecycle of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverPhase {
    /// No run started
    #[default]
    Idle,
    /// A run is live and accepting ticks
    Running,
    /// The run finished and signaled completion
    Completed,
    /// The run was cancelled before completing
    Cancelled,
}

/// Cooperative, host-driven marker animation along a dense point sequence.
///
/// The driver owns no clock and never blocks: the host calls
/// [`AnimationDriver::tick`] once per animation frame with its timestamp.
/// Position emissions are strictly monotonic in progress and nothing is
/// emitted after completion or cancellation.
#[derive(Debug, Default)]
pub struct AnimationDriver {
    polyline: Polyline,
    state: AnimationState,
    ease: Ease,
    phase: DriverPhase,
    generation: u64,
    last_progress: Option<f64>,
}

impl AnimationDriver {
    /// Create an idle driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the easing curve used by subsequent runs.
    pub fn set_ease(&mut self, ease: Ease) {
        self.ease = ease;
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    /// Whether a run is live.
    pub fn is_running(&self) -> bool {
        self.phase() == DriverPhase::Running
    }

    /// Bookkeeping for the current or most recent run.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Token for the current run generation.
    pub fn run_token(&self) -> RunToken {
        RunToken(self.generation)
    }

    /// Begin a run over `polyline`.
    ///
    /// A live run is cancelled first, so a driver never has two timers.
    /// Paths with fewer than two points make the start a no-op: nothing
    /// is emitted and completion is never signaled. `start_time` is
    /// captured on the first tick, not here.
    pub fn start(
        &mut self,
        polyline: Polyline,
        duration_ms: f64,
        direction: Direction,
    ) -> Option<RunToken> {
        if self.is_running() {
            self.cancel();
        }
        if polyline.len() < 2 {
            tracing::debug!(points = polyline.len(), "ignoring start on degenerate path");
            return None;
        }
        self.generation += 1;
        self.polyline = polyline;
        self.state = AnimationState {
            start_time: None,
            duration_ms,
            direction,
            progress: 0.0,
            running: true,
        };
        self.phase = DriverPhase::Running;
        self.last_progress = None;
        Some(RunToken(self.generation))
    }

    /// Cancel the current run.
    ///
    /// Terminal: once this returns no emission or completion callback for
    /// the run can fire, and the generation token is invalidated so stale
    /// queued frame callbacks identify themselves.
    pub fn cancel(&mut self) {
        match self.phase() {
            DriverPhase::Completed | DriverPhase::Cancelled => {}
            _ => {
                self.phase = DriverPhase::Cancelled;
                self.state.running = false;
                self.generation += 1;
            }
        }
    }

    /// Advance the run to `now_ms`, emitting into `sink`.
    ///
    /// Progress is `clamp(elapsed / duration, 0, 1)`: exactly 1.0 once
    /// elapsed passes the duration and exactly 0.0 for negative elapsed.
    /// A tick that does not advance progress emits nothing. When progress
    /// reaches 1.0 the final position is emitted, then the completion
    /// callback fires once and the driver stops accepting ticks.
    pub fn tick(&mut self, now_ms: f64, sink: &mut dyn PositionSink) {
        if !self.is_running() {
            return;
        }
        let start = *self.state.start_time.get_or_insert(now_ms);
        let elapsed = now_ms - start;
        let progress = if self.state.duration_ms > 0.0 {
            (elapsed / self.state.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.state.progress = progress;

        let advanced = self.last_progress.map_or(true, |last| progress > last);
        if advanced {
            self.last_progress = Some(progress);
            let eased = self.ease.apply(progress);
            if let Some(p) = self.polyline.point_at(eased, self.state.direction) {
                sink.position(p);
            }
        }

        if progress >= 1.0 {
            self.phase = DriverPhase::Completed;
            self.state.running = false;
            sink.completed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        positions: Vec<Vec2>,
        completions: usize,
        after_completion: usize,
    }

    impl PositionSink for Recorder {
        fn position(&mut self, p: Vec2) {
            if self.completions > 0 {
                self.after_completion += 1;
            }
            self.positions.push(p);
        }
        fn completed(&mut self) {
            self.completions += 1;
        }
    }

    fn straight_line() -> Polyline {
        Polyline {
            points: (0..=10).map(|i| Vec2::new(i as f64 * 10.0, 0.0)).collect(),
        }
    }

    #[test]
    fn ease_endpoints_are_stable() {
        for ease in [Ease::Linear, Ease::InOutQuad, Ease::InOutCubic] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn progress_clamps_exactly() {
        let mut driver = AnimationDriver::new();
        let mut sink = Recorder::default();
        assert!(driver.start(straight_line(), 1000.0, Direction::Forward).is_some());
        driver.tick(500.0, &mut sink); // start_time = 500
        driver.tick(250.0, &mut sink); // negative elapsed
        assert_eq!(driver.state().progress, 0.0);
        driver.tick(5000.0, &mut sink); // far past the end
        assert_eq!(driver.state().progress, 1.0);
    }

    #[test]
    fn completion_fires_exactly_once_and_last() {
        let mut driver = AnimationDriver::new();
        let mut sink = Recorder::default();
        assert!(driver.start(straight_line(), 100.0, Direction::Forward).is_some());
        for step in 0..20 {
            driver.tick(step as f64 * 10.0, &mut sink);
        }
        assert_eq!(sink.completions, 1);
        assert_eq!(sink.after_completion, 0);
        assert_eq!(sink.positions.last(), Some(&Vec2::new(100.0, 0.0)));
        assert_eq!(driver.phase(), DriverPhase::Completed);
    }

    #[test]
    fn emissions_are_strictly_monotonic() {
        let mut driver = AnimationDriver::new();
        let mut sink = Recorder::default();
        assert!(driver.start(straight_line(), 1000.0, Direction::Forward).is_some());
        driver.tick(0.0, &mut sink);
        driver.tick(100.0, &mut sink);
        driver.tick(100.0, &mut sink); // same timestamp, no advance
        driver.tick(50.0, &mut sink); // regressed clock, no emission
        assert_eq!(sink.positions.len(), 2);
    }

    #[test]
    fn cancel_stops_everything() {
        let mut driver = AnimationDriver::new();
        let mut sink = Recorder::default();
        let token = driver.start(straight_line(), 1000.0, Direction::Forward);
        driver.tick(0.0, &mut sink);
        driver.cancel();
        assert_ne!(Some(driver.run_token()), token);
        driver.tick(2000.0, &mut sink);
        assert_eq!(sink.positions.len(), 1);
        assert_eq!(sink.completions, 0);
        assert_eq!(driver.phase(), DriverPhase::Cancelled);
    }

    #[test]
    fn restart_cancels_previous_run() {
        let mut driver = AnimationDriver::new();
        let first = driver.start(straight_line(), 1000.0, Direction::Forward);
        let second = driver.start(straight_line(), 1000.0, Direction::Reverse);
        assert_ne!(first, second);
        assert!(driver.is_running());
        assert_eq!(driver.state().direction, Direction::Reverse);
    }

    #[test]
    fn degenerate_path_is_a_no_op() {
        let mut driver = AnimationDriver::new();
        let mut sink = Recorder::default();
        assert!(driver
            .start(Polyline::default(), 1000.0, Direction::Forward)
            .is_none());
        driver.tick(0.0, &mut sink);
        driver.tick(5000.0, &mut sink);
        assert!(sink.positions.is_empty());
        assert_eq!(sink.completions, 0);
        assert_eq!(driver.phase(), DriverPhase::Idle);
    }

    #[test]
    fn reverse_direction_walks_backward() {
        let mut driver = AnimationDriver::new();
        let mut sink = Recorder::default();
        assert!(driver.start(straight_line(), 100.0, Direction::Reverse).is_some());
        driver.tick(0.0, &mut sink);
        driver.tick(100.0, &mut sink);
        assert_eq!(sink.positions.first(), Some(&Vec2::new(100.0, 0.0)));
        assert_eq!(sink.positions.last(), Some(&Vec2::new(0.0, 0.0)));
    }
}
