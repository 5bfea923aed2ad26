// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: JSON route document loader

use crate::error::WaymarkResult;
use crate::timeline::Ease;
use crate::types::{LayoutMode, RoadStyle, SampleOptions, Waypoint};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

fn default_duration_ms() -> f64 {
    4000.0
}

fn default_pause_ms() -> f64 {
    1200.0
}

/// A complete route description as shipped by the content backend.
///
/// Everything beyond the waypoint list is optional and falls back to the
/// engine defaults, so hand-written documents stay short.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDocument {
    /// Waypoints keyed by their `id` fields
    pub waypoints: Vec<Waypoint>,
    /// Traversal order as waypoint ids; empty means document order
    #[serde(default)]
    pub order: Vec<String>,
    /// Layout flavor measured by the host
    #[serde(default)]
    pub layout: LayoutMode,
    /// Length of one playback leg in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    /// Pause between alternating legs in milliseconds
    #[serde(default = "default_pause_ms")]
    pub pause_ms: f64,
    /// Easing curve applied to playback progress
    #[serde(default)]
    pub ease: Ease,
    /// Road shape tunables
    #[serde(default)]
    pub style: RoadStyle,
    /// Densification tunables
    #[serde(default)]
    pub samples: SampleOptions,
}

impl RouteDocument {
    /// Resolve the traversal order into a waypoint sequence.
    ///
    /// Ids that match no waypoint are dropped with a warning rather than
    /// failing the whole document.
    pub fn ordered_waypoints(&self) -> Vec<Waypoint> {
        if self.order.is_empty() {
            return self.waypoints.clone();
        }
        let by_id: HashMap<&str, &Waypoint> = self
            .waypoints
            .iter()
            .map(|wp| (wp.id.as_str(), wp))
            .collect();
        let mut ordered = Vec::with_capacity(self.order.len());
        for id in &self.order {
            match by_id.get(id.as_str()) {
                Some(wp) => ordered.push((*wp).clone()),
                None => tracing::warn!(%id, "route order references unknown waypoint"),
            }
        }
        ordered
    }
}

/// Load a route document from a JSON byte slice.
pub fn from_slice(data: &[u8]) -> WaymarkResult<RouteDocument> {
    Ok(serde_json::from_slice(data)?)
}

/// Load a route document from a reader containing JSON.
pub fn from_reader<R: Read>(mut reader: R) -> WaymarkResult<RouteDocument> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(serde_json::from_str(&buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "waypoints": [
            {"id": "town-hall", "position": {"x": 0, "y": 0}, "row": 0, "column": 0},
            {"id": "library", "position": {"x": 200, "y": 0}, "row": 0, "column": 1},
            {"id": "museum", "position": {"x": 200, "y": 160}, "row": 1, "column": 1}
        ],
        "order": ["town-hall", "lost-and-found", "museum"],
        "layout": "compact",
        "duration_ms": 2500
    }"#;

    #[test]
    fn loads_document_with_defaults() {
        let doc = from_slice(DOC.as_bytes()).unwrap();
        assert_eq!(doc.layout, LayoutMode::Compact);
        assert_eq!(doc.duration_ms, 2500.0);
        assert_eq!(doc.pause_ms, default_pause_ms());
        assert_eq!(doc.ease, Ease::Linear);
        assert_eq!(doc.samples, SampleOptions::default());
    }

    #[test]
    fn order_resolution_drops_unknown_ids() {
        let doc = from_slice(DOC.as_bytes()).unwrap();
        let ordered = doc.ordered_waypoints();
        let ids: Vec<&str> = ordered.iter().map(|wp| wp.id.as_str()).collect();
        assert_eq!(ids, vec!["town-hall", "museum"]);
    }

    #[test]
    fn empty_order_means_document_order() {
        let mut doc = from_slice(DOC.as_bytes()).unwrap();
        doc.order.clear();
        assert_eq!(doc.ordered_waypoints().len(), 3);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(from_slice(b"{").is_err());
        assert!(from_reader(&b"not json"[..]).is_err());
    }
}
