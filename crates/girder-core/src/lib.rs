//! Girder Core Types and Definitions
//!
//! This crate provides the foundational types for the Girder stroke
//! vectorizer. It includes:
//!
//! - **Geometry**: 2D value types for the pipeline ([`geometry`] module)
//! - **Graph**: the structural member graph produced by vectorization
//!   ([`graph`] module)
//! - **Tolerances**: the shared numerical constants of the pipeline
//!   ([`tolerance`] module)

pub mod geometry;
pub mod graph;
pub mod tolerance;
