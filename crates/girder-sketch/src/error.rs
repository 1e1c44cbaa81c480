//! Error types for sketch parsing.

use thiserror::Error;

/// Errors produced while reading a sketch file.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Malformed sketch JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Non-finite coordinate at stroke {stroke}, point {point}")]
    NonFiniteCoordinate { stroke: usize, point: usize },
}
