//! Girder - freehand strokes to structural member graphs.
//!
//! Girder converts a set of freehand pen strokes into a clean planar graph
//! of straight structural members: unique joints (nodes) and deduplicated
//! members (edges), suitable for engineering-style rendering or export.

pub mod config;
pub mod vectorize;

mod error;
mod export;

pub use girder_core::{geometry, graph, tolerance};
pub use girder_sketch as sketch;

pub use error::GirderError;
pub use vectorize::vectorize;

use log::info;

use girder_core::graph::Graph;
use girder_sketch::Stroke;

use config::AppConfig;
use export::svg::SvgRenderer;

/// Facade for vectorizing sketches and rendering the result.
///
/// # Examples
///
/// ```rust
/// use girder::{SketchVectorizer, config::AppConfig};
///
/// let sketch = "[[[0, 0], [100, 100]], [[100, 0], [0, 100]]]";
/// let strokes = girder::sketch::parse(sketch).expect("Failed to parse");
///
/// let vectorizer = SketchVectorizer::new(AppConfig::default());
/// let graph = vectorizer.vectorize(&strokes);
///
/// let svg = vectorizer.render_svg(&graph);
/// let json = vectorizer.render_json(&graph).expect("Failed to serialize");
/// ```
#[derive(Default)]
pub struct SketchVectorizer {
    config: AppConfig,
}

impl SketchVectorizer {
    /// Create a new vectorizer with the given configuration.
    ///
    /// The configuration is assumed validated (see
    /// [`AppConfig::validate`](config::AppConfig::validate)); validation
    /// belongs to whatever loads the configuration, not to the pipeline.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run the vectorization pipeline over a set of strokes.
    ///
    /// Pure over its input: each call builds the graph from scratch, and
    /// the caller owns the result. Degenerate input (no strokes, or only
    /// strokes shorter than two points) produces an empty graph.
    pub fn vectorize(&self, strokes: &[Stroke]) -> Graph {
        info!(strokes = strokes.len(); "Vectorizing sketch");
        vectorize(strokes, self.config.vectorize())
    }

    /// Render a graph to an SVG document string.
    pub fn render_svg(&self, graph: &Graph) -> String {
        SvgRenderer::new(self.config.style().clone()).render(graph)
    }

    /// Render a graph to a pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`GirderError::Export`] if serialization fails.
    pub fn render_json(&self, graph: &Graph) -> Result<String, GirderError> {
        Ok(export::json::render(graph)?)
    }
}
