// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: Bézier curve evaluation

use crate::types::Vec2;

/// Evaluate a cubic Bézier at parameter `t` using the Bernstein basis.
///
/// `t = 0` and `t = 1` return the exact start and end points rather than
/// the polynomial evaluation, so segment joins never drift.
pub fn cubic_point(p0: Vec2, cp1: Vec2, cp2: Vec2, p1: Vec2, t: f64) -> Vec2 {
    if t <= 0.0 {
        return p0;
    }
    if t >= 1.0 {
        return p1;
    }
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    Vec2::new(
        b0 * p0.x + b1 * cp1.x + b2 * cp2.x + b3 * p1.x,
        b0 * p0.y + b1 * cp1.y + b2 * cp2.y + b3 * p1.y,
    )
}

/// Evaluate a quadratic Bézier at parameter `t` using the Bernstein basis.
///
/// Endpoint handling matches [`cubic_point`].
pub fn quadratic_point(p0: Vec2, cp: Vec2, p1: Vec2, t: f64) -> Vec2 {
    if t <= 0.0 {
        return p0;
    }
    if t >= 1.0 {
        return p1;
    }
    let u = 1.0 - t;
    let b0 = u * u;
    let b1 = 2.0 * u * t;
    let b2 = t * t;
    Vec2::new(
        b0 * p0.x + b1 * cp.x + b2 * p1.x,
        b0 * p0.y + b1 * cp.y + b2 * p1.y,
    )
}
