//! Error types for Girder operations.
//!
//! This module provides the main error type [`GirderError`] which wraps
//! the error conditions that can occur around the vectorization pipeline.
//! The pipeline itself is total over validated input and never fails; the
//! variants here cover the boundaries around it.

use std::io;

use thiserror::Error;

use girder_sketch::SketchError;

/// The main error type for Girder operations.
#[derive(Debug, Error)]
pub enum GirderError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Sketch error: {0}")]
    Sketch(#[from] SketchError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for GirderError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
