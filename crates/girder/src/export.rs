//! Export of member graphs to external formats.
//!
//! Two exporters exist: [`svg`] renders an engineering-style drawing (one
//! line per member, one labelled marker per joint) and [`json`] serializes
//! the graph structure for downstream tooling. Both render to `String`s;
//! writing files is the caller's concern.

pub mod json;
pub mod svg;

use thiserror::Error;

/// Errors produced while exporting a graph.
#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
