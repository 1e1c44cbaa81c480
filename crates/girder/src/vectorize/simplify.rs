//! Polyline simplification (Ramer–Douglas–Peucker).

use girder_core::geometry::Point;

/// Reduces a noisy polyline to its dominant vertices.
///
/// Recursively finds the point with the maximum perpendicular distance from
/// the chord between the first and last point of the range. If that distance
/// exceeds `epsilon` the range is split there and both halves are simplified;
/// otherwise the whole range collapses to its two endpoints. Ties on the
/// maximum distance resolve to the lowest index, which keeps the output
/// reproducible.
///
/// Polylines of two or fewer points are returned unchanged. The function is
/// idempotent: simplifying an already simplified polyline is a no-op.
pub fn simplify(points: &[Point], epsilon: f32) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;
    mark_kept(points, 0, points.len() - 1, epsilon, &mut keep);

    points
        .iter()
        .zip(&keep)
        .filter(|&(_, &kept)| kept)
        .map(|(&point, _)| point)
        .collect()
}

/// Marks the vertices of `points[first..=last]` that survive simplification.
///
/// Operates on index ranges instead of sub-sequence copies, so long strokes
/// do not allocate per recursion level.
fn mark_kept(points: &[Point], first: usize, last: usize, epsilon: f32, keep: &mut [bool]) {
    if last <= first + 1 {
        return;
    }

    let mut max_distance = 0.0;
    let mut split = first;
    for index in (first + 1)..last {
        let distance = points[index].distance_to_chord(points[first], points[last]);
        // Strict comparison: the first of several equally distant points wins
        if distance > max_distance {
            max_distance = distance;
            split = index;
        }
    }

    if max_distance > epsilon {
        keep[split] = true;
        mark_kept(points, first, split, epsilon, keep);
        mark_kept(points, split, last, epsilon, keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polyline(coords: &[(f32, f32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_short_polylines_unchanged() {
        let single = polyline(&[(1.0, 1.0)]);
        assert_eq!(simplify(&single, 1.0), single);

        let pair = polyline(&[(0.0, 0.0), (10.0, 10.0)]);
        assert_eq!(simplify(&pair, 1.0), pair);
    }

    #[test]
    fn test_collinear_points_collapse() {
        let line = polyline(&[(0.0, 0.0), (25.0, 0.0), (50.0, 0.0), (100.0, 0.0)]);
        let simplified = simplify(&line, 1.0);

        assert_eq!(simplified, polyline(&[(0.0, 0.0), (100.0, 0.0)]));
    }

    #[test]
    fn test_noise_below_epsilon_collapses() {
        let wobbly = polyline(&[
            (0.0, 0.0),
            (25.0, 0.4),
            (50.0, -0.3),
            (75.0, 0.2),
            (100.0, 0.0),
        ]);
        let simplified = simplify(&wobbly, 1.0);

        assert_eq!(simplified, polyline(&[(0.0, 0.0), (100.0, 0.0)]));
    }

    #[test]
    fn test_corner_survives() {
        let corner = polyline(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)]);
        let simplified = simplify(&corner, 1.0);

        assert_eq!(simplified, corner);
    }

    #[test]
    fn test_corner_with_noise() {
        let stroke = polyline(&[
            (0.0, 0.0),
            (20.0, 0.3),
            (40.0, -0.2),
            (50.0, 0.0),
            (50.2, 20.0),
            (49.9, 40.0),
            (50.0, 50.0),
        ]);
        let simplified = simplify(&stroke, 1.0);

        assert_eq!(simplified.len(), 3);
        assert_eq!(simplified[0], Point::new(0.0, 0.0));
        assert_eq!(simplified[1], Point::new(50.0, 0.0));
        assert_eq!(simplified[2], Point::new(50.0, 50.0));
    }

    #[test]
    fn test_tie_break_keeps_lowest_index() {
        // Two points at the same distance above the chord: the split must
        // land on the first one.
        let symmetric = polyline(&[(0.0, 0.0), (10.0, 5.0), (20.0, 5.0), (30.0, 0.0)]);
        let simplified = simplify(&symmetric, 1.0);

        // The first peak splits the range; the second survives the recursion
        // on the right half, so both peaks are kept here. What matters is
        // that repeated runs agree exactly.
        assert_eq!(simplified, simplify(&symmetric, 1.0));
        assert_eq!(simplified[1], Point::new(10.0, 5.0));
    }

    #[test]
    fn test_degenerate_chord_uses_point_distance() {
        // Closed stroke: first and last coincide, so the chord is a point
        let loop_stroke = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)]);
        let simplified = simplify(&loop_stroke, 1.0);

        // The farthest point from (0,0) splits the loop
        assert!(simplified.contains(&Point::new(10.0, 10.0)));
        assert!(simplified.len() >= 3);
    }

    #[test]
    fn test_idempotent() {
        let stroke = polyline(&[
            (0.0, 0.0),
            (13.0, 2.0),
            (25.0, -1.5),
            (40.0, 8.0),
            (55.0, 7.0),
            (70.0, 20.0),
            (100.0, 18.0),
        ]);

        let once = simplify(&stroke, 3.0);
        let twice = simplify(&once, 3.0);
        assert_eq!(once, twice);
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        fn strokes() -> impl Strategy<Value = Vec<Point>> {
            prop::collection::vec((-500.0f32..500.0, -500.0f32..500.0), 1..40)
                .prop_map(|coords| coords.into_iter().map(|(x, y)| Point::new(x, y)).collect())
        }

        proptest! {
            #[test]
            fn simplification_is_idempotent(stroke in strokes(), epsilon in 0.1f32..20.0) {
                let once = simplify(&stroke, epsilon);
                let twice = simplify(&once, epsilon);
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn endpoints_are_preserved(stroke in strokes(), epsilon in 0.1f32..20.0) {
                let simplified = simplify(&stroke, epsilon);
                prop_assert_eq!(simplified[0], stroke[0]);
                prop_assert_eq!(*simplified.last().unwrap(), *stroke.last().unwrap());
            }

            #[test]
            fn never_grows(stroke in strokes(), epsilon in 0.1f32..20.0) {
                prop_assert!(simplify(&stroke, epsilon).len() <= stroke.len());
            }
        }
    }
}
