// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
use waymark_core::geometry::{densify, parse_path, reverse_path_string, Polyline};
use waymark_core::types::{Direction, SampleOptions, Vec2};

fn polyline(path: &str, opts: &SampleOptions) -> Polyline {
    densify(&parse_path(path).unwrap().path, opts)
}

fn interpolate(path: &str, progress: f64, opts: &SampleOptions) -> Vec2 {
    polyline(path, opts)
        .point_at(progress, Direction::Forward)
        .unwrap()
}

fn assert_close(a: Vec2, b: Vec2) {
    assert!(
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6,
        "{a:?} != {b:?}"
    );
}

#[test]
fn reversed_line_path_yields_reversed_anchors() {
    let reversed = reverse_path_string("M 0 0 L 100 0 L 100 100").unwrap();
    let anchors = parse_path(&reversed).unwrap().path.anchor_points();
    assert_eq!(
        anchors,
        vec![
            Vec2::new(100.0, 100.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(0.0, 0.0),
        ]
    );
}

#[test]
fn reversal_symmetry_on_a_polyline_road() {
    // 5 anchors -> 21 dense points, so the probed fractions land on
    // mirrored indices exactly.
    let forward = "M 0 0 L 100 0 L 100 100 L 0 100 L 0 200";
    let reversed = reverse_path_string(forward).unwrap();
    let opts = SampleOptions::default();
    for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
        assert_close(
            interpolate(forward, p, &opts),
            interpolate(&reversed, 1.0 - p, &opts),
        );
    }
}

#[test]
fn reversal_symmetry_on_a_curved_road() {
    // 1 + 8 curve samples -> 41 dense points, again index-mirrored.
    let forward = "M 0 0 C 40 80, 120 80, 160 0";
    let reversed = reverse_path_string(forward).unwrap();
    let opts = SampleOptions {
        bezier_samples: 8,
        subdivisions: 5,
    };
    for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
        assert_close(
            interpolate(forward, p, &opts),
            interpolate(&reversed, 1.0 - p, &opts),
        );
    }
}

#[test]
fn reverse_equals_forward_walked_backward() {
    let forward = "M 0 0 Q 50 60, 100 0 C 140 -40, 180 40, 220 0";
    let reversed = reverse_path_string(forward).unwrap();
    let opts = SampleOptions::default();
    let fwd = polyline(forward, &opts);
    let rev = polyline(&reversed, &opts);
    assert_eq!(fwd.len(), rev.len());
    let n = fwd.len();
    for i in 0..n {
        let a = fwd.points[i];
        let b = rev.points[n - 1 - i];
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "index {i}: {a:?} != {b:?}"
        );
    }
}

#[test]
fn double_reversal_reproduces_the_point_sequence_exactly() {
    let forward = "M 0 0 L 100 0 Q 150 40, 200 0 C 240 -40, 280 40, 320 0 H 400 V 80";
    let once = reverse_path_string(forward).unwrap();
    let twice = reverse_path_string(&once).unwrap();
    let opts = SampleOptions::default();
    assert_eq!(polyline(forward, &opts).points, polyline(&twice, &opts).points);
}

#[test]
fn degenerate_paths_reverse_to_empty_strings() {
    assert_eq!(reverse_path_string("").unwrap(), "");
    assert_eq!(reverse_path_string("M 10 10").unwrap(), "");
}
