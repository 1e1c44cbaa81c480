//! Command-line argument definitions for the Girder CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the export format,
//! configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Command-line arguments for the Girder vectorizer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the input sketch file (JSON array of strokes)
    #[arg(help = "Path to the input sketch file")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Export format
    #[arg(short, long, value_enum, default_value = "svg")]
    pub format: ExportFormat,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the endpoint snap radius in pixels
    #[arg(long)]
    pub snap_radius: Option<f32>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Supported export formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Engineering-style SVG drawing
    Svg,
    /// Structured node/edge JSON
    Json,
}
