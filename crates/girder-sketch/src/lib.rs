//! Stroke input model and sketch file parsing for Girder.
//!
//! A sketch is a list of freehand strokes, each an ordered sequence of 2D
//! sample points captured while drawing. The on-disk format is a JSON array
//! of strokes, each an array of `[x, y]` pairs:
//!
//! ```json
//! [
//!     [[0, 0], [48.5, 51.2], [100, 100]],
//!     [[100, 0], [0, 100]]
//! ]
//! ```
//!
//! Parsing is the only place where input irregularities are rejected: the
//! vectorization pipeline downstream is total over finite coordinates, so
//! NaN and infinite values must not get past this boundary.

pub mod error;

mod stroke;

pub use error::SketchError;
pub use stroke::Stroke;

use log::debug;

use girder_core::geometry::Point;

/// Parse a JSON sketch into strokes.
///
/// # Errors
///
/// Returns [`SketchError::Json`] for malformed JSON and
/// [`SketchError::NonFiniteCoordinate`] when any sample is NaN or infinite.
pub fn parse(source: &str) -> Result<Vec<Stroke>, SketchError> {
    let raw: Vec<Vec<Point>> = serde_json::from_str(source)?;

    for (stroke_index, points) in raw.iter().enumerate() {
        for (point_index, point) in points.iter().enumerate() {
            if !point.is_finite() {
                return Err(SketchError::NonFiniteCoordinate {
                    stroke: stroke_index,
                    point: point_index,
                });
            }
        }
    }

    let strokes: Vec<Stroke> = raw.into_iter().map(Stroke::new).collect();
    debug!(strokes = strokes.len(); "Sketch parsed");

    Ok(strokes)
}
