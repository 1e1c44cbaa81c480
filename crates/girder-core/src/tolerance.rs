//! Centralized numerical tolerances for the vectorization pipeline.
//!
//! These are tunable defaults, not physical constants; they are collected
//! here so a single edit adjusts the whole pipeline.

/// Zero-length vector threshold (px)
pub const EPS_LEN: f32 = 1e-6;

/// Determinant guard below which two segment lines count as parallel
pub const EPS_DENOM: f32 = 1e-6;

/// Split parameters closer than this count as one crossing
pub const EPS_PARAM: f32 = 1e-6;

/// Interior-crossing margin as a fraction of parametric segment length.
///
/// Crossings with `t` or `u` within this margin of an endpoint are left to
/// endpoint clustering instead of segment splitting, so the same junction is
/// never handled by both mechanisms.
pub const CROSSING_MARGIN: f32 = 0.02;

/// Quantization grid for the node registry (1.0 / 0.01 px).
///
/// Coarse enough to absorb floating-point noise from centroid averaging,
/// fine enough that distinct joints never share a key at pixel scale.
pub const QUANT_SCALE: f32 = 100.0;
