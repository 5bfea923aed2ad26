// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: procedural road path builder

use crate::geometry::Path;
use crate::types::{LayoutMode, RoadStyle, Vec2, Waypoint};

/// Build one connected road path visiting `waypoints` in order.
///
/// Consecutive pairs on the same row (or mostly-horizontal hops in compact
/// layout) become quadratic arcs whose control point sits `arc_height`
/// off the midpoint, alternating sides so the road meanders. Every other
/// pair becomes a cubic S-curve with control points pushed along the
/// dominant axis, scaled by the pair distance and `curve_intensity`.
///
/// Returns the serialized path string; fewer than two usable waypoints
/// produce an empty string.
pub fn build_road(waypoints: &[Waypoint], mode: LayoutMode, style: &RoadStyle) -> String {
    build_road_path(waypoints, mode, style).to_string()
}

fn build_road_path(waypoints: &[Waypoint], mode: LayoutMode, style: &RoadStyle) -> Path {
    let mut path = Path::new();
    if waypoints.len() < 2 {
        return path;
    }

    path.move_to(waypoints[0].position);
    let mut segments = 0usize;
    for pair in waypoints.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let from = a.position;
        let to = b.position;
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let dist = from.distance(to);
        if dist == 0.0 {
            tracing::debug!(from = %a.id, to = %b.id, "skipping zero-length road hop");
            continue;
        }

        let horizontal = dx.abs() > dy.abs();
        let same_row = a.row == b.row;
        if same_row || (mode == LayoutMode::Compact && horizontal) {
            // Quadratic arc bowed away from the straight line.
            let side = if segments % 2 == 0 { 1.0 } else { -1.0 };
            let normal = Vec2::new(-dy / dist, dx / dist);
            let mid = from.mid(to);
            let cp = Vec2::new(
                mid.x + normal.x * style.arc_height * side,
                mid.y + normal.y * style.arc_height * side,
            );
            path.quad_to(cp, to);
        } else {
            // Cross-row S-curve along the dominant axis.
            let reach = dist * style.curve_intensity;
            let (off_x, off_y) = if horizontal {
                (dx.signum() * reach, 0.0)
            } else {
                (0.0, dy.signum() * reach)
            };
            let cp1 = Vec2::new(from.x + off_x, from.y + off_y);
            let cp2 = Vec2::new(to.x - off_x, to.y - off_y);
            path.cubic_to(cp1, cp2, to);
        }
        segments += 1;
    }

    if segments == 0 {
        // Every hop collapsed; nothing worth animating.
        return Path::new();
    }
    path
}
