// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: path segment model and serialization

use crate::types::Vec2;
use std::fmt::{self, Write};

/// A single drawing command with coordinates resolved to absolute space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Pen jump to a position.
    Move {
        /// Target point
        to: Vec2,
    },
    /// Straight line to a position.
    Line {
        /// Target point
        to: Vec2,
    },
    /// Horizontal line; y is carried over from the previous point.
    HorizontalLine {
        /// Target x
        x: f64,
    },
    /// Vertical line; x is carried over from the previous point.
    VerticalLine {
        /// Target y
        y: f64,
    },
    /// Cubic Bézier curve with two control points.
    CubicBezier {
        /// First control point
        cp1: Vec2,
        /// Second control point
        cp2: Vec2,
        /// End point
        to: Vec2,
    },
    /// Quadratic Bézier curve with a single control point.
    QuadraticBezier {
        /// Control point
        cp: Vec2,
        /// End point
        to: Vec2,
    },
}

impl PathSegment {
    /// Absolute endpoint of this segment given the previous pen position.
    pub fn end_point(&self, prev: Vec2) -> Vec2 {
        match *self {
            Self::Move { to } | Self::Line { to } => to,
            Self::HorizontalLine { x } => Vec2::new(x, prev.y),
            Self::VerticalLine { y } => Vec2::new(prev.x, y),
            Self::CubicBezier { to, .. } | Self::QuadraticBezier { to, .. } => to,
        }
    }
}

/// A resolved segment plus how it was written in the source string.
///
/// The flag only affects re-serialization; geometry is always absolute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCommand {
    /// Resolved segment
    pub segment: PathSegment,
    /// Whether the source used the lowercase (relative) command letter
    pub relative: bool,
}

/// Ordered command sequence forming one path.
///
/// The serialized form ([`Path::to_string`]) is the sole representation
/// exchanged between the road builder, the reverser and the parser.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Path {
    /// Ordered command list
    pub commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Append a command as parsed.
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    fn push_abs(&mut self, segment: PathSegment) {
        self.commands.push(PathCommand {
            segment,
            relative: false,
        });
    }

    /// Append an absolute move command.
    pub fn move_to(&mut self, to: Vec2) {
        self.push_abs(PathSegment::Move { to });
    }

    /// Append an absolute line command.
    pub fn line_to(&mut self, to: Vec2) {
        self.push_abs(PathSegment::Line { to });
    }

    /// Append an absolute horizontal line command.
    pub fn horizontal_to(&mut self, x: f64) {
        self.push_abs(PathSegment::HorizontalLine { x });
    }

    /// Append an absolute vertical line command.
    pub fn vertical_to(&mut self, y: f64) {
        self.push_abs(PathSegment::VerticalLine { y });
    }

    /// Append an absolute cubic Bézier command.
    pub fn cubic_to(&mut self, cp1: Vec2, cp2: Vec2, to: Vec2) {
        self.push_abs(PathSegment::CubicBezier { cp1, cp2, to });
    }

    /// Append an absolute quadratic Bézier command.
    pub fn quad_to(&mut self, cp: Vec2, to: Vec2) {
        self.push_abs(PathSegment::QuadraticBezier { cp, to });
    }

    /// Absolute endpoint of every command, in order, tracked with a cursor.
    pub fn anchor_points(&self) -> Vec<Vec2> {
        let mut cursor = Vec2::default();
        let mut out = Vec::with_capacity(self.commands.len());
        for cmd in &self.commands {
            cursor = cmd.segment.end_point(cursor);
            out.push(cursor);
        }
        out
    }

    /// Absolute endpoint of the final command, if any.
    pub fn end_point(&self) -> Option<Vec2> {
        self.anchor_points().last().copied()
    }
}

// Numbers print through f64 Display: shortest form that reparses to the
// same value, so serialize -> parse is lossless.
fn write_num(out: &mut String, n: f64) {
    let _ = write!(out, "{n}");
}

fn write_pair(out: &mut String, p: Vec2) {
    write_num(out, p.x);
    out.push(' ');
    write_num(out, p.y);
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.commands.len() * 16);
        let mut cursor = Vec2::default();
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let rel = cmd.relative;
            let d = |p: Vec2| if rel { Vec2::new(p.x - cursor.x, p.y - cursor.y) } else { p };
            let letter = |c: char| if rel { c.to_ascii_lowercase() } else { c };
            match cmd.segment {
                PathSegment::Move { to } => {
                    out.push(letter('M'));
                    out.push(' ');
                    write_pair(&mut out, d(to));
                }
                PathSegment::Line { to } => {
                    out.push(letter('L'));
                    out.push(' ');
                    write_pair(&mut out, d(to));
                }
                PathSegment::HorizontalLine { x } => {
                    out.push(letter('H'));
                    out.push(' ');
                    write_num(&mut out, if rel { x - cursor.x } else { x });
                }
                PathSegment::VerticalLine { y } => {
                    out.push(letter('V'));
                    out.push(' ');
                    write_num(&mut out, if rel { y - cursor.y } else { y });
                }
                PathSegment::CubicBezier { cp1, cp2, to } => {
                    out.push(letter('C'));
                    out.push(' ');
                    write_pair(&mut out, d(cp1));
                    out.push_str(", ");
                    write_pair(&mut out, d(cp2));
                    out.push_str(", ");
                    write_pair(&mut out, d(to));
                }
                PathSegment::QuadraticBezier { cp, to } => {
                    out.push(letter('Q'));
                    out.push(' ');
                    write_pair(&mut out, d(cp));
                    out.push_str(", ");
                    write_pair(&mut out, d(to));
                }
            }
            cursor = cmd.segment.end_point(cursor);
        }
        f.write_str(&out)
    }
}
