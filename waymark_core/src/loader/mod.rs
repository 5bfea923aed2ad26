//! Module: route document loading

pub mod json;

pub use json::RouteDocument;
