// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: wasm host binding

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
use wasm_bindgen::prelude::*;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
use crate::{
    loader::json,
    route::RouteAnimator,
    timeline::PositionSink,
    types::Vec2,
};

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
#[derive(Default)]
struct LatestPosition {
    point: Option<Vec2>,
    completions: u32,
}

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
impl PositionSink for LatestPosition {
    fn position(&mut self, p: Vec2) {
        self.point = Some(p);
    }
    fn completed(&mut self) {
        self.completions += 1;
    }
}

/// Route playback handle exposed to the hosting page.
///
/// The page drives frames from `requestAnimationFrame`, passing the
/// callback timestamp to [`WaymarkWasm::tick`] and reading the marker
/// position back.
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
#[wasm_bindgen]
pub struct WaymarkWasm {
    animator: RouteAnimator,
    latest: LatestPosition,
}

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
#[wasm_bindgen]
impl WaymarkWasm {
    /// Create a playback handle from a JSON route document.
    #[wasm_bindgen(constructor)]
    pub fn new(doc: &str) -> Result<WaymarkWasm, JsValue> {
        let doc = json::from_slice(doc.as_bytes())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let animator = RouteAnimator::from_document(&doc)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            animator,
            latest: LatestPosition::default(),
        })
    }

    /// Begin the alternating playback loop.
    pub fn start(&mut self) {
        self.animator.start();
    }

    /// Stop playback and drop the pending pause deadline.
    pub fn stop(&mut self) {
        self.animator.stop();
    }

    /// Advance to the frame timestamp; returns whether the loop is live.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.animator.tick(now_ms, &mut self.latest);
        self.animator.is_active()
    }

    /// Latest marker x, or NaN before the first frame.
    pub fn x(&self) -> f64 {
        self.latest.point.map_or(f64::NAN, |p| p.x)
    }

    /// Latest marker y, or NaN before the first frame.
    pub fn y(&self) -> f64 {
        self.latest.point.map_or(f64::NAN, |p| p.y)
    }

    /// Number of completed legs so far.
    pub fn completions(&self) -> u32 {
        self.latest.completions
    }
}
