// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: path densification and point lookup

use crate::geometry::path::{Path, PathSegment};
use crate::geometry::sample::{cubic_point, quadratic_point};
use crate::types::{Direction, SampleOptions, Vec2};

/// Dense ordered point sequence produced from a path.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Polyline {
    /// Points in traversal order
    pub points: Vec<Vec2>,
}

impl Polyline {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the sequence holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Map a progress fraction to a point by sample index.
    ///
    /// `effective = 1 - progress` when reversed; the index is
    /// `floor(effective * (len - 1))`, clamped into range. Sequences with
    /// a single point always return it; empty sequences return `None`.
    pub fn point_at(&self, progress: f64, direction: Direction) -> Option<Vec2> {
        let n = self.points.len();
        match n {
            0 => None,
            1 => Some(self.points[0]),
            _ => {
                let p = progress.clamp(0.0, 1.0);
                let effective = match direction {
                    Direction::Forward => p,
                    Direction::Reverse => 1.0 - p,
                };
                let index = (effective * (n - 1) as f64).floor() as usize;
                Some(self.points[index.min(n - 1)])
            }
        }
    }
}

/// Expand a path into a dense point sequence.
///
/// Move/line/axis-line commands contribute their single resolved endpoint;
/// Bézier commands contribute `bezier_samples` evenly spaced samples over
/// (0,1]. The expanded list is then subdivided `subdivisions`-way with
/// linear interpolation between every consecutive pair to smooth playback.
pub fn densify(path: &Path, opts: &SampleOptions) -> Polyline {
    let samples = opts.bezier_samples.max(1);
    let mut expanded: Vec<Vec2> = Vec::new();
    let mut cursor = Vec2::default();

    for cmd in &path.commands {
        match cmd.segment {
            PathSegment::Move { to } | PathSegment::Line { to } => expanded.push(to),
            PathSegment::HorizontalLine { .. } | PathSegment::VerticalLine { .. } => {
                expanded.push(cmd.segment.end_point(cursor));
            }
            PathSegment::CubicBezier { cp1, cp2, to } => {
                for k in 1..=samples {
                    let t = k as f64 / samples as f64;
                    expanded.push(cubic_point(cursor, cp1, cp2, to, t));
                }
            }
            PathSegment::QuadraticBezier { cp, to } => {
                for k in 1..=samples {
                    let t = k as f64 / samples as f64;
                    expanded.push(quadratic_point(cursor, cp, to, t));
                }
            }
        }
        cursor = cmd.segment.end_point(cursor);
    }

    Polyline {
        points: subdivide(&expanded, opts.subdivisions),
    }
}

fn subdivide(points: &[Vec2], ways: usize) -> Vec<Vec2> {
    if ways < 2 || points.len() < 2 {
        return points.to_vec();
    }
    let mut out = Vec::with_capacity(points.len() + (points.len() - 1) * (ways - 1));
    for pair in points.windows(2) {
        out.push(pair[0]);
        for j in 1..ways {
            out.push(pair[0].lerp(pair[1], j as f64 / ways as f64));
        }
    }
    out.push(points[points.len() - 1]);
    out
}
