// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: exact path reversal

use crate::error::WaymarkResult;
use crate::geometry::parse::parse_path;
use crate::geometry::path::{Path, PathSegment};
use crate::types::Vec2;

/// Build the path tracing `path`'s geometry end-to-start.
///
/// Lines reverse to lines (axis lines normalize to plain lines), cubics
/// swap their control points, quadratics keep theirs; every reversed
/// segment ends at the original segment's start. The construction is
/// exact: control points are copied, never re-derived, so reversing twice
/// reproduces the original point sequence bit-for-bit.
///
/// Paths with no drawing segments reverse to an empty path, which callers
/// treat as "reverse unavailable".
pub fn reverse_path(path: &Path) -> Path {
    let draws = path
        .commands
        .iter()
        .any(|c| !matches!(c.segment, PathSegment::Move { .. }));
    if !draws {
        return Path::new();
    }

    // Start point of command i is the endpoint of command i-1.
    let mut starts = Vec::with_capacity(path.commands.len());
    let mut cursor = Vec2::default();
    for cmd in &path.commands {
        starts.push(cursor);
        cursor = cmd.segment.end_point(cursor);
    }

    let mut out = Path::new();
    out.move_to(cursor);
    for (i, cmd) in path.commands.iter().enumerate().rev() {
        let start = starts[i];
        match cmd.segment {
            PathSegment::Move { .. } => {
                // Interior pen jump: reversed subpaths reconnect at the
                // previous subpath's end. The leading move is consumed by
                // the initial move of the reversed path.
                if i > 0 {
                    out.move_to(start);
                }
            }
            PathSegment::Line { .. }
            | PathSegment::HorizontalLine { .. }
            | PathSegment::VerticalLine { .. } => out.line_to(start),
            PathSegment::CubicBezier { cp1, cp2, .. } => out.cubic_to(cp2, cp1, start),
            PathSegment::QuadraticBezier { cp, .. } => out.quad_to(cp, start),
        }
    }
    out
}

/// Reverse a serialized path string.
///
/// Parses the forward string, reverses it, and re-serializes. An empty
/// result means the input had nothing to trace backward.
pub fn reverse_path_string(input: &str) -> WaymarkResult<String> {
    let parsed = parse_path(input)?;
    Ok(reverse_path(&parsed.path).to_string())
}
