// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: error and diagnostic types

/// Convenience alias used across the crate.
pub type WaymarkResult<T> = Result<T, WaymarkError>;

/// Errors surfaced by parsing and document loading.
#[derive(thiserror::Error, Debug)]
pub enum WaymarkError {
    /// A numeric token could not be read as a finite coordinate.
    #[error("malformed path at byte {position}: {detail}")]
    MalformedPath {
        /// What was wrong with the token
        detail: String,
        /// Byte offset of the offending token in the source string
        position: usize,
    },

    /// A route document was structurally invalid.
    #[error("route document error: {0}")]
    Document(String),

    /// JSON deserialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// I/O failure while reading a document.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WaymarkError {
    /// Build a [`WaymarkError::MalformedPath`].
    pub fn malformed(detail: impl Into<String>, position: usize) -> Self {
        Self::MalformedPath {
            detail: detail.into(),
            position,
        }
    }

    /// Build a [`WaymarkError::Document`].
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }
}

/// Diagnostic for a path token that was skipped rather than parsed.
///
/// Unknown commands do not abort the parse; they are dropped and reported
/// so callers can distinguish a clean parse from a lossy one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseWarning {
    /// First character of the skipped token
    pub command: char,
    /// Byte offset of the token in the source string
    pub position: usize,
}
