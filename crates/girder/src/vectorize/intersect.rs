//! Interior crossing detection and segment splitting.

use girder_core::geometry::Segment;
use girder_core::tolerance::{CROSSING_MARGIN, EPS_DENOM, EPS_PARAM};

/// Splits segments at their pairwise interior crossings.
///
/// Operates on the pooled segments of all strokes, so crossings between
/// different strokes are found as well. Each segment accumulates the
/// parametric positions of its crossings; a segment with splits is replaced
/// in place by the chain of sub-segments from its start, through each split
/// point in ascending `t` order, to its end. Segments without crossings pass
/// through unchanged.
///
/// Only crossings strictly interior to both segments count. Touches within
/// [`CROSSING_MARGIN`] of an endpoint are deliberately ignored here; merging
/// near-endpoint junctions is endpoint clustering's job, and handling them
/// in both places would double up the same joint.
///
/// Pairwise over all segments, which is quadratic. Hand-drawn input stays in
/// the tens to low hundreds of segments, where this is not worth an index.
pub fn split_at_crossings(segments: &[Segment]) -> Vec<Segment> {
    let mut splits: Vec<Vec<f32>> = vec![Vec::new(); segments.len()];

    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            let Some((t, u)) = line_parameters(segments[i], segments[j]) else {
                continue;
            };
            if is_interior(t) && is_interior(u) {
                splits[i].push(t);
                splits[j].push(u);
            }
        }
    }

    let mut result = Vec::with_capacity(segments.len());
    for (&segment, mut params) in segments.iter().zip(splits) {
        if params.is_empty() {
            result.push(segment);
            continue;
        }

        params.sort_by(f32::total_cmp);
        params.dedup_by(|a, b| (*a - *b).abs() < EPS_PARAM);

        let mut start = segment.a();
        for t in params {
            let at = segment.point_at(t);
            result.push(Segment::new(start, at));
            start = at;
        }
        result.push(Segment::new(start, segment.b()));
    }

    result
}

/// Solves for the parametric positions `(t, u)` where the infinite lines of
/// two segments meet.
///
/// Returns `None` when the determinant magnitude falls below [`EPS_DENOM`],
/// which covers parallel and near-parallel lines.
fn line_parameters(first: Segment, second: Segment) -> Option<(f32, f32)> {
    let d1 = first.b().sub_point(first.a());
    let d2 = second.b().sub_point(second.a());

    let det = d1.x() * d2.y() - d1.y() * d2.x();
    if det.abs() < EPS_DENOM {
        return None;
    }

    let offset = second.a().sub_point(first.a());
    let t = (offset.x() * d2.y() - offset.y() * d2.x()) / det;
    let u = (offset.x() * d1.y() - offset.y() * d1.x()) / det;
    Some((t, u))
}

/// Checks whether a parametric position is strictly interior to a segment,
/// excluding the margin at both endpoints.
fn is_interior(t: f32) -> bool {
    t > CROSSING_MARGIN && t < 1.0 - CROSSING_MARGIN
}
