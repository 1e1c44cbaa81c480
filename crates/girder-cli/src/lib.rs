//! CLI logic for the Girder stroke vectorizer.
//!
//! This module contains the core CLI logic for the Girder vectorizer.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, ExportFormat};

use std::fs;

use log::info;

use girder::{GirderError, SketchVectorizer, config::AppConfig};

/// Run the Girder CLI application
///
/// This function processes the input sketch through the vectorization
/// pipeline and writes the rendered output to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `GirderError` for:
/// - File I/O errors
/// - Configuration loading or validation errors
/// - Sketch parsing errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), GirderError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing sketch"
    );

    // Load configuration, applying any command-line overrides
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(snap_radius) = args.snap_radius {
        app_config = AppConfig::new(
            app_config.vectorize().clone().with_snap_radius(snap_radius),
            app_config.style().clone(),
        );
    }
    app_config.validate().map_err(GirderError::Config)?;

    // Read and parse the input sketch
    let source = fs::read_to_string(&args.input)?;
    let strokes = girder::sketch::parse(&source)?;

    // Vectorize and render
    let vectorizer = SketchVectorizer::new(app_config);
    let graph = vectorizer.vectorize(&strokes);

    let output = match args.format {
        ExportFormat::Svg => vectorizer.render_svg(&graph),
        ExportFormat::Json => vectorizer.render_json(&graph)?,
    };

    // Write output file
    fs::write(&args.output, output)?;

    info!(
        output_file = args.output,
        nodes = graph.node_count(),
        edges = graph.edge_count();
        "Graph exported successfully"
    );

    Ok(())
}
