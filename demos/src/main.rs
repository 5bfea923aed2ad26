// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: town route playback demo

use waymark_core::geometry::reverse_path_string;
use waymark_core::loader::json;
use waymark_core::road::build_road;
use waymark_core::route::RouteAnimator;
use waymark_core::timeline::PositionSink;
use waymark_core::types::Vec2;

const DOC: &str = r#"{
    "waypoints": [
        {"id": "town-hall", "position": {"x": 0, "y": 0}, "row": 0, "column": 0},
        {"id": "library", "position": {"x": 260, "y": 0}, "row": 0, "column": 1},
        {"id": "museum", "position": {"x": 260, "y": 180}, "row": 1, "column": 1},
        {"id": "park", "position": {"x": 0, "y": 180}, "row": 1, "column": 0}
    ],
    "order": ["town-hall", "library", "museum", "park"],
    "layout": "expanded",
    "duration_ms": 1000,
    "pause_ms": 250
}"#;

struct Printer {
    frame: u32,
}

impl PositionSink for Printer {
    fn position(&mut self, p: Vec2) {
        if self.frame % 15 == 0 {
            println!("  marker at ({:8.2}, {:8.2})", p.x, p.y);
        }
        self.frame += 1;
    }
    fn completed(&mut self) {
        println!("  leg complete");
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let doc = json::from_slice(DOC.as_bytes()).expect("demo document is valid");
    let road = build_road(&doc.ordered_waypoints(), doc.layout, &doc.style);
    println!("road:    {road}");
    println!(
        "reverse: {}",
        reverse_path_string(&road).expect("road string parses")
    );

    let mut animator = RouteAnimator::from_document(&doc).expect("demo route builds");
    let mut sink = Printer { frame: 0 };
    animator.start();

    // Simulated 60fps clock: one forward leg, a pause, one reverse leg.
    println!("playback:");
    let mut now = 0.0;
    while now < 2_600.0 {
        animator.tick(now, &mut sink);
        now += 16.0;
    }
    animator.stop();
}
