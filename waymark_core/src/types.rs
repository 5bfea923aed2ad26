// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: type definitions

use serde::{Deserialize, Serialize};

/// 2D vector in the host container's local coordinate space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct Vec2 {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Vec2 {
    /// Construct from components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between `self` and `other`.
    pub fn mid(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
        }
    }

    /// Linear interpolation toward `other` with factor `t`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Playback direction along a dense point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// First point toward last
    Forward,
    /// Last point toward first
    Reverse,
}

/// Layout flavor supplied by the host's layout measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Narrow viewport, waypoints stacked tightly
    Compact,
    /// Wide viewport, waypoints spread over rows
    Expanded,
}

impl Default for LayoutMode {
    fn default() -> Self {
        Self::Expanded
    }
}

/// A named anchor the road path must visit, positioned by the host layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Waypoint {
    /// Stable identifier used by traversal-order lists
    pub id: String,
    /// Pixel position in the host container
    pub position: Vec2,
    /// Row index assigned by layout
    pub row: i32,
    /// Column index assigned by layout
    pub column: i32,
}

/// Densification tunables for turning a path into a point sequence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SampleOptions {
    /// Samples taken over (0,1] for each Bézier segment
    #[serde(default = "default_bezier_samples")]
    pub bezier_samples: usize,
    /// k-way subdivision applied between consecutive expanded points
    #[serde(default = "default_subdivisions")]
    pub subdivisions: usize,
}

fn default_bezier_samples() -> usize {
    10
}

fn default_subdivisions() -> usize {
    5
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            bezier_samples: default_bezier_samples(),
            subdivisions: default_subdivisions(),
        }
    }
}

/// Shape tunables for the procedural road builder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RoadStyle {
    /// Orthogonal offset of the arc control point for same-row hops
    #[serde(default = "default_arc_height")]
    pub arc_height: f64,
    /// S-curve control offset as a fraction of inter-point distance
    #[serde(default = "default_curve_intensity")]
    pub curve_intensity: f64,
}

fn default_arc_height() -> f64 {
    40.0
}

fn default_curve_intensity() -> f64 {
    0.35
}

impl Default for RoadStyle {
    fn default() -> Self {
        Self {
            arc_height: default_arc_height(),
            curve_intensity: default_curve_intensity(),
        }
    }
}
