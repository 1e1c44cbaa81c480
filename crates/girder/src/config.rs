//! Configuration types for Girder vectorization and rendering.
//!
//! This module provides configuration structures that control how strokes
//! are vectorized and how the resulting graph is styled. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining vectorize and style settings.
//! - [`VectorizeConfig`] - Controls the geometric pipeline (snap radius, simplification tolerance).
//! - [`StyleConfig`] - Controls visual styling of the rendered graph.
//!
//! # Example
//!
//! ```
//! # use girder::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

/// Top-level application configuration combining vectorize and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Vectorization configuration section.
    #[serde(default)]
    vectorize: VectorizeConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified vectorize and style configurations.
    pub fn new(vectorize: VectorizeConfig, style: StyleConfig) -> Self {
        Self { vectorize, style }
    }

    /// Returns the vectorization configuration.
    pub fn vectorize(&self) -> &VectorizeConfig {
        &self.vectorize
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Validates the whole configuration tree.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.vectorize.validate()
    }
}

/// Geometric pipeline configuration.
///
/// The snap radius is the distance below which segment endpoints merge into
/// one joint. The simplification tolerance defaults to half the snap radius,
/// tying how aggressively strokes are straightened to how aggressively their
/// endpoints will later be merged.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorizeConfig {
    /// Endpoint merge distance in pixels.
    #[serde(default = "default_snap_radius")]
    snap_radius: f32,

    /// Optional override of the simplification tolerance in pixels.
    #[serde(default)]
    simplify_epsilon: Option<f32>,
}

fn default_snap_radius() -> f32 {
    10.0
}

impl Default for VectorizeConfig {
    fn default() -> Self {
        Self {
            snap_radius: default_snap_radius(),
            simplify_epsilon: None,
        }
    }
}

impl VectorizeConfig {
    /// Creates a configuration with the given snap radius and the default
    /// simplification tolerance.
    pub fn new(snap_radius: f32) -> Self {
        Self {
            snap_radius,
            simplify_epsilon: None,
        }
    }

    /// Returns a copy with an explicit simplification tolerance.
    pub fn with_simplify_epsilon(self, epsilon: f32) -> Self {
        Self {
            simplify_epsilon: Some(epsilon),
            ..self
        }
    }

    /// Returns a copy with a different snap radius.
    pub fn with_snap_radius(self, snap_radius: f32) -> Self {
        Self {
            snap_radius,
            ..self
        }
    }

    /// Returns the snap radius in pixels.
    pub fn snap_radius(&self) -> f32 {
        self.snap_radius
    }

    /// Returns the effective simplification tolerance.
    ///
    /// Half the snap radius unless explicitly overridden.
    pub fn simplify_epsilon(&self) -> f32 {
        self.simplify_epsilon
            .unwrap_or(self.snap_radius * 0.5)
    }

    /// Validates the pipeline settings.
    ///
    /// The snap radius must be a positive finite number; zero or negative
    /// values would make clustering a no-op or ill-defined, and are rejected
    /// here at the configuration boundary rather than inside the algorithms.
    ///
    /// # Errors
    ///
    /// Returns a description of the invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if !self.snap_radius.is_finite() || self.snap_radius <= 0.0 {
            return Err(format!(
                "snap_radius must be positive, got {}",
                self.snap_radius
            ));
        }
        if let Some(epsilon) = self.simplify_epsilon {
            if !epsilon.is_finite() || epsilon < 0.0 {
                return Err(format!(
                    "simplify_epsilon must be non-negative, got {epsilon}"
                ));
            }
        }
        Ok(())
    }
}

/// Visual styling configuration for rendered graphs.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Stroke width of member lines in pixels.
    #[serde(default = "default_member_width")]
    member_width: f32,

    /// Radius of joint markers in pixels.
    #[serde(default = "default_joint_radius")]
    joint_radius: f32,

    /// Optional background color, as a CSS color string passed through to
    /// the SVG attribute.
    #[serde(default)]
    background_color: Option<String>,
}

fn default_member_width() -> f32 {
    2.0
}

fn default_joint_radius() -> f32 {
    4.0
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            member_width: default_member_width(),
            joint_radius: default_joint_radius(),
            background_color: None,
        }
    }
}

impl StyleConfig {
    /// Returns the member line stroke width.
    pub fn member_width(&self) -> f32 {
        self.member_width
    }

    /// Returns the joint marker radius.
    pub fn joint_radius(&self) -> f32 {
        self.joint_radius
    }

    /// Returns the configured background color string, if any.
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }
}
