// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: alternating route playback

use crate::error::WaymarkResult;
use crate::geometry::{densify, parse_path, reverse_path, Polyline};
use crate::loader::RouteDocument;
use crate::road::build_road;
use crate::timeline::{AnimationDriver, Ease, PositionSink};
use crate::types::{Direction, LayoutMode, RoadStyle, SampleOptions, Waypoint};

/// Host-pushed layout updates.
///
/// The engine owns no global state and never polls the host; when layout
/// measurement moves the waypoints, the host calls this.
pub trait LayoutObserver {
    /// The waypoint set or layout flavor changed.
    fn layout_changed(&mut self, waypoints: &[Waypoint], mode: LayoutMode);
}

/// Tunables for one route's playback loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteOptions {
    /// Length of one leg in milliseconds
    pub duration_ms: f64,
    /// Pause between legs in milliseconds
    pub pause_ms: f64,
    /// Easing applied to progress
    pub ease: Ease,
    /// Densification tunables
    pub samples: SampleOptions,
    /// Road shape tunables
    pub style: RoadStyle,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            duration_ms: 4000.0,
            pause_ms: 1200.0,
            ease: Ease::Linear,
            samples: SampleOptions::default(),
            style: RoadStyle::default(),
        }
    }
}

/// Which assembled path a leg plays; both legs run the driver forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leg {
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Scheduler {
    Idle,
    Running(Leg),
    Paused { until: f64, next: Leg },
}

/// Marker loop over a road path: run, pause, run the reversed path, pause.
///
/// An explicit state machine with an owned pause deadline; exactly one
/// driver run is live at any time and [`RouteAnimator::stop`] releases the
/// deadline along with the run.
#[derive(Debug)]
pub struct RouteAnimator {
    options: RouteOptions,
    forward: Polyline,
    reverse: Polyline,
    driver: AnimationDriver,
    scheduler: Scheduler,
}

struct LegSink<'a> {
    inner: &'a mut dyn PositionSink,
    done: bool,
}

impl PositionSink for LegSink<'_> {
    fn position(&mut self, p: crate::types::Vec2) {
        self.inner.position(p);
    }
    fn completed(&mut self) {
        self.done = true;
        self.inner.completed();
    }
}

impl RouteAnimator {
    /// Create an idle animator with the given tunables.
    pub fn new(options: RouteOptions) -> Self {
        let mut driver = AnimationDriver::new();
        driver.set_ease(options.ease);
        Self {
            options,
            forward: Polyline::default(),
            reverse: Polyline::default(),
            driver,
            scheduler: Scheduler::Idle,
        }
    }

    /// Build an animator straight from a loaded route document.
    pub fn from_document(doc: &RouteDocument) -> WaymarkResult<Self> {
        let mut animator = Self::new(RouteOptions {
            duration_ms: doc.duration_ms,
            pause_ms: doc.pause_ms,
            ease: doc.ease,
            samples: doc.samples,
            style: doc.style,
        });
        animator.set_route(&doc.ordered_waypoints(), doc.layout)?;
        Ok(animator)
    }

    /// Rebuild the road from a waypoint set.
    ///
    /// Cancels any live run; playback resumes when the host calls
    /// [`RouteAnimator::start`] again.
    pub fn set_route(
        &mut self,
        waypoints: &[Waypoint],
        mode: LayoutMode,
    ) -> WaymarkResult<()> {
        self.stop();
        let road = build_road(waypoints, mode, &self.options.style);
        if road.is_empty() {
            self.forward = Polyline::default();
            self.reverse = Polyline::default();
            return Ok(());
        }
        let parsed = parse_path(&road)?;
        self.forward = densify(&parsed.path, &self.options.samples);
        self.reverse = densify(&reverse_path(&parsed.path), &self.options.samples);
        Ok(())
    }

    /// Begin the forward leg; the first tick emits the first position.
    pub fn start(&mut self) {
        self.scheduler = if self.forward.len() >= 2 {
            Scheduler::Paused {
                until: f64::NEG_INFINITY,
                next: Leg::Forward,
            }
        } else {
            Scheduler::Idle
        };
    }

    /// Stop playback and release the pending pause deadline.
    pub fn stop(&mut self) {
        self.driver.cancel();
        self.scheduler = Scheduler::Idle;
    }

    /// Whether the loop is running or waiting out a pause.
    pub fn is_active(&self) -> bool {
        self.scheduler != Scheduler::Idle
    }

    /// Advance the loop to `now_ms`.
    pub fn tick(&mut self, now_ms: f64, sink: &mut dyn PositionSink) {
        if let Scheduler::Paused { until, next } = self.scheduler {
            if now_ms < until {
                return;
            }
            let polyline = match next {
                Leg::Forward => self.forward.clone(),
                Leg::Reverse => self.reverse.clone(),
            };
            if self
                .driver
                .start(polyline, self.options.duration_ms, Direction::Forward)
                .is_none()
            {
                self.scheduler = Scheduler::Idle;
                return;
            }
            self.scheduler = Scheduler::Running(next);
        }

        let Scheduler::Running(leg) = self.scheduler else {
            return;
        };
        let mut leg_sink = LegSink {
            inner: sink,
            done: false,
        };
        self.driver.tick(now_ms, &mut leg_sink);
        if leg_sink.done {
            self.scheduler = Scheduler::Paused {
                until: now_ms + self.options.pause_ms,
                next: self.next_leg(leg),
            };
        }
    }

    /// Reverse playback needs a usable reversed path; otherwise the
    /// forward leg replays.
    fn next_leg(&self, finished: Leg) -> Leg {
        match finished {
            Leg::Forward if self.reverse.len() >= 2 => Leg::Reverse,
            _ => Leg::Forward,
        }
    }
}

impl LayoutObserver for RouteAnimator {
    fn layout_changed(&mut self, waypoints: &[Waypoint], mode: LayoutMode) {
        if let Err(err) = self.set_route(waypoints, mode) {
            tracing::error!(%err, "route rebuild failed; clearing route");
            self.forward = Polyline::default();
            self.reverse = Polyline::default();
        }
    }
}
