//! The stroke-to-graph vectorization pipeline.
//!
//! Stages, in order: each stroke is simplified ([`simplify`]) and chopped
//! into straight segments ([`to_segments`]); the pooled segments of all
//! strokes are split at their interior crossings ([`split_at_crossings`]);
//! all segment endpoints are clustered into joints ([`cluster`]); and the
//! final node/edge graph is assembled ([`build_graph`]).
//!
//! The whole pipeline is synchronous and side-effect-free: one call builds
//! fresh local state, runs to completion, and hands the resulting [`Graph`]
//! to the caller. Repeated calls are fully independent.

mod build;
mod cluster;
mod intersect;
mod simplify;

pub use build::build_graph;
pub use cluster::cluster;
pub use intersect::split_at_crossings;
pub use simplify::simplify;

use log::{debug, info};

use girder_core::geometry::{Point, Segment};
use girder_core::graph::Graph;
use girder_sketch::Stroke;

use crate::config::VectorizeConfig;

/// Turns a simplified polyline into its consecutive chords.
///
/// Fewer than two vertices yield no segments.
pub fn to_segments(polyline: &[Point]) -> Vec<Segment> {
    polyline
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect()
}

/// Runs the full vectorization pipeline over a set of strokes.
///
/// Strokes shorter than two points are skipped; an empty stroke set yields
/// an empty graph. Coordinates are assumed finite — the sketch parsing
/// boundary rejects anything else — and `config` is assumed validated
/// (positive snap radius).
pub fn vectorize(strokes: &[Stroke], config: &VectorizeConfig) -> Graph {
    let snap_radius = config.snap_radius();
    let epsilon = config.simplify_epsilon();
    debug_assert!(snap_radius > 0.0, "snap radius must be validated upstream");

    let mut segments = Vec::new();
    for stroke in strokes {
        if stroke.len() < 2 {
            continue;
        }
        let simplified = simplify(stroke.points(), epsilon);
        segments.extend(to_segments(&simplified));
    }
    info!(
        strokes = strokes.len(),
        segments = segments.len();
        "Strokes simplified"
    );

    let segments = split_at_crossings(&segments);
    debug!(segments = segments.len(); "Crossings split");

    let endpoints: Vec<Point> = segments.iter().flat_map(|s| [s.a(), s.b()]).collect();
    let centroids = cluster(&endpoints, snap_radius);

    let graph = build_graph(&segments, &centroids);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count();
        "Member graph built"
    );

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_segments_empty_and_single() {
        assert!(to_segments(&[]).is_empty());
        assert!(to_segments(&[Point::new(1.0, 1.0)]).is_empty());
    }

    #[test]
    fn test_to_segments_orders_chords() {
        let polyline = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let segments = to_segments(&polyline);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].a(), polyline[0]);
        assert_eq!(segments[0].b(), polyline[1]);
        assert_eq!(segments[1].a(), polyline[1]);
        assert_eq!(segments[1].b(), polyline[2]);
    }
}
