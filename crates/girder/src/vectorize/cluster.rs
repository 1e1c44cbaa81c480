//! Endpoint clustering via union-find.

use girder_core::geometry::Point;

/// Merges points closer than `snap_radius` into clusters and maps every
/// input index to its cluster centroid.
///
/// Merging is transitive: when A is within the radius of B and B within the
/// radius of C, all three share one cluster even if A and C are farther
/// apart than the radius. That chaining is deliberate; a freehand joint is
/// a cloud of endpoints, not a disc.
///
/// The centroid is the arithmetic mean of all member coordinates, not a
/// representative member, and is the position used for the final node.
/// Returns one centroid per input index, so the mapping is dense.
///
/// A fresh disjoint-set structure is built per call; nothing persists
/// between vectorization passes.
pub fn cluster(points: &[Point], snap_radius: f32) -> Vec<Point> {
    let mut sets = DisjointSet::new(points.len());

    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if points[i].distance(points[j]) < snap_radius {
                sets.union(i, j);
            }
        }
    }

    // Accumulate member coordinates per root
    let mut sums = vec![(0.0f32, 0.0f32, 0u32); points.len()];
    for (index, point) in points.iter().enumerate() {
        let root = sets.find(index);
        let entry = &mut sums[root];
        entry.0 += point.x();
        entry.1 += point.y();
        entry.2 += 1;
    }

    (0..points.len())
        .map(|index| {
            let (x_sum, y_sum, count) = sums[sets.find(index)];
            Point::new(x_sum / count as f32, y_sum / count as f32)
        })
        .collect()
}

/// Disjoint-set forest over point indices.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    /// Returns the root of `index`, halving the path on the way up.
    fn find(&mut self, mut index: usize) -> usize {
        while self.parent[index] != index {
            self.parent[index] = self.parent[self.parent[index]];
            index = self.parent[index];
        }
        index
    }

    /// Merges the sets containing `a` and `b`.
    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_b] = root_a;
        }
    }
}
