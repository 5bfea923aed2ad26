use criterion::{criterion_group, criterion_main, Criterion};
use waymark_core::geometry::{densify, parse_path, reverse_path};
use waymark_core::road::build_road;
use waymark_core::timeline::{AnimationDriver, PositionSink};
use waymark_core::types::{Direction, LayoutMode, RoadStyle, SampleOptions, Vec2, Waypoint};

struct NullSink;

impl PositionSink for NullSink {
    fn position(&mut self, _p: Vec2) {}
    fn completed(&mut self) {}
}

fn town_waypoints() -> Vec<Waypoint> {
    (0..12)
        .map(|i| Waypoint {
            id: format!("stop-{i}"),
            position: Vec2::new((i % 4) as f64 * 220.0, (i / 4) as f64 * 160.0),
            row: i / 4,
            column: i % 4,
        })
        .collect()
}

fn bench_assemble(c: &mut Criterion) {
    let waypoints = town_waypoints();
    let style = RoadStyle::default();
    let opts = SampleOptions::default();
    c.bench_function("assemble_road", |b| {
        b.iter(|| {
            let road = build_road(&waypoints, LayoutMode::Expanded, &style);
            let parsed = parse_path(&road).unwrap();
            let forward = densify(&parsed.path, &opts);
            let reverse = densify(&reverse_path(&parsed.path), &opts);
            (forward.len(), reverse.len())
        });
    });
}

fn bench_playback(c: &mut Criterion) {
    let waypoints = town_waypoints();
    let road = build_road(&waypoints, LayoutMode::Expanded, &RoadStyle::default());
    let parsed = parse_path(&road).unwrap();
    let polyline = densify(&parsed.path, &SampleOptions::default());
    c.bench_function("playback_60_frames", |b| {
        b.iter(|| {
            let mut driver = AnimationDriver::new();
            let mut sink = NullSink;
            let _ = driver.start(polyline.clone(), 1000.0, Direction::Forward);
            for frame in 0..=60u32 {
                driver.tick(f64::from(frame) * (1000.0 / 60.0), &mut sink);
            }
        });
    });
}

criterion_group!(benches, bench_assemble, bench_playback);
criterion_main!(benches);
