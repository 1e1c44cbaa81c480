//! Error adapter for converting GirderError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use girder::GirderError;

/// Adapter wrapping a [`GirderError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a GirderError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            GirderError::Io(_) => "girder::io",
            GirderError::Sketch(_) => "girder::sketch",
            GirderError::Config(_) => "girder::config",
            GirderError::Export(_) => "girder::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            GirderError::Sketch(_) => Some(Box::new(
                "a sketch file is a JSON array of strokes, each an array of [x, y] pairs",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_per_variant() {
        let err = GirderError::Config("bad".to_string());
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "girder::config");
        assert!(adapter.to_string().contains("bad"));
    }

    #[test]
    fn test_sketch_errors_carry_help() {
        let err = GirderError::Sketch(girder_sketch::SketchError::NonFiniteCoordinate {
            stroke: 0,
            point: 1,
        });
        let adapter = ErrorAdapter(&err);

        assert!(adapter.help().is_some());
    }
}
