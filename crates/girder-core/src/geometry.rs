//! 2D geometry value types for the vectorization pipeline.
//!
//! Coordinates are pixel-scale `f32` values. Points have no identity;
//! the pipeline only ever compares them by distance, never for exact
//! equality.

use serde::{Deserialize, Serialize};

use crate::tolerance::EPS_LEN;

/// A 2D point in pixel coordinates.
///
/// Serializes to and from a `[x, y]` pair, which is the on-disk sketch
/// representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both coordinates are finite numbers
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Calculates the Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        other.sub_point(self).hypot()
    }

    /// Calculates the perpendicular distance from this point to the chord
    /// through `a` and `b`.
    ///
    /// A degenerate chord (both endpoints within [`EPS_LEN`] of each other)
    /// falls back to the straight-line distance to `a`.
    pub fn distance_to_chord(self, a: Point, b: Point) -> f32 {
        let chord = b.sub_point(a);
        let len = chord.hypot();
        if len <= EPS_LEN {
            return self.distance(a);
        }

        let offset = self.sub_point(a);
        (chord.x * offset.y - chord.y * offset.x).abs() / len
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f32; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// A directed straight chord between two points.
///
/// Segments are transient: the pipeline never mutates one in place, and
/// splitting a segment produces new segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    a: Point,
    b: Point,
}

impl Segment {
    /// Creates a new segment from `a` to `b`
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Returns the start point of the segment
    pub fn a(self) -> Point {
        self.a
    }

    /// Returns the end point of the segment
    pub fn b(self) -> Point {
        self.b
    }

    /// Returns the length of the segment
    pub fn length(self) -> f32 {
        self.a.distance(self.b)
    }

    /// Returns the point at parametric position `t` along the segment
    ///
    /// `t = 0` is the start point, `t = 1` the end point; values outside
    /// `[0, 1]` extrapolate along the infinite line.
    pub fn point_at(self, t: f32) -> Point {
        Point {
            x: self.a.x + (self.b.x - self.a.x) * t,
            y: self.a.y + (self.b.y - self.a.y) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert_eq!(point.x(), 0.0);
        assert_eq!(point.y(), 0.0);
    }

    #[test]
    fn test_point_from_pair() {
        let point = Point::from([7.0, -2.0]);
        assert_eq!(point.x(), 7.0);
        assert_eq!(point.y(), -2.0);

        let pair: [f32; 2] = point.into();
        assert_eq!(pair, [7.0, -2.0]);
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f32::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f32::INFINITY).is_finite());
        assert!(!Point::new(f32::NEG_INFINITY, f32::NAN).is_finite());
    }

    #[test]
    fn test_point_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        let result = p1.sub_point(p2);
        assert_eq!(result.x(), 3.0);
        assert_eq!(result.y(), 5.0);
    }

    #[test]
    fn test_point_hypot() {
        let point = Point::new(3.0, 4.0);
        assert_eq!(point.hypot(), 5.0);

        let origin = Point::new(0.0, 0.0);
        assert_eq!(origin.hypot(), 0.0);
    }

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(1.0, 1.0);
        let p2 = Point::new(4.0, 5.0);
        assert_eq!(p1.distance(p2), 5.0);
        assert_eq!(p2.distance(p1), 5.0);
        assert_eq!(p1.distance(p1), 0.0);
    }

    #[test]
    fn test_distance_to_chord() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);

        // Point above the chord
        assert_approx_eq!(f32, Point::new(5.0, 3.0).distance_to_chord(a, b), 3.0);
        // Point on the chord
        assert_approx_eq!(f32, Point::new(2.0, 0.0).distance_to_chord(a, b), 0.0);
        // Distance is to the infinite chord line, not clamped to the span
        assert_approx_eq!(f32, Point::new(15.0, 4.0).distance_to_chord(a, b), 4.0);
    }

    #[test]
    fn test_distance_to_degenerate_chord() {
        let a = Point::new(2.0, 2.0);

        // Both chord endpoints coincide: distance to the single point
        let d = Point::new(5.0, 6.0).distance_to_chord(a, a);
        assert_approx_eq!(f32, d, 5.0);
    }

    #[test]
    fn test_segment_accessors() {
        let segment = Segment::new(Point::new(1.0, 2.0), Point::new(4.0, 6.0));
        assert_eq!(segment.a(), Point::new(1.0, 2.0));
        assert_eq!(segment.b(), Point::new(4.0, 6.0));
        assert_eq!(segment.length(), 5.0);
    }

    #[test]
    fn test_segment_point_at() {
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 20.0));

        assert_eq!(segment.point_at(0.0), Point::new(0.0, 0.0));
        assert_eq!(segment.point_at(1.0), Point::new(10.0, 20.0));
        assert_eq!(segment.point_at(0.5), Point::new(5.0, 10.0));
        assert_eq!(segment.point_at(0.25), Point::new(2.5, 5.0));
    }

    #[test]
    fn test_segment_zero_length() {
        let p = Point::new(3.0, 3.0);
        let segment = Segment::new(p, p);
        assert_eq!(segment.length(), 0.0);
        assert_eq!(segment.point_at(0.5), p);
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        fn coord() -> impl Strategy<Value = f32> {
            -1000.0f32..1000.0
        }

        proptest! {
            #[test]
            fn distance_is_symmetric(
                ax in coord(), ay in coord(),
                bx in coord(), by in coord(),
            ) {
                let a = Point::new(ax, ay);
                let b = Point::new(bx, by);
                prop_assert_eq!(a.distance(b), b.distance(a));
            }

            #[test]
            fn chord_distance_ignores_chord_direction(
                px in coord(), py in coord(),
                ax in coord(), ay in coord(),
                bx in coord(), by in coord(),
            ) {
                let p = Point::new(px, py);
                let a = Point::new(ax, ay);
                let b = Point::new(bx, by);
                let forward = p.distance_to_chord(a, b);
                let backward = p.distance_to_chord(b, a);
                prop_assert!((forward - backward).abs() <= 1e-3 * (1.0 + forward));
            }
        }
    }
}
