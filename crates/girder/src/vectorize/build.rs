//! Final graph assembly from split segments and clustered endpoints.

use std::collections::{HashMap, HashSet};

use girder_core::geometry::{Point, Segment};
use girder_core::graph::{Graph, NodeId};
use girder_core::tolerance::QUANT_SCALE;

/// Builds the member graph from segments and their endpoint centroids.
///
/// `centroids` is the dense endpoint mapping produced by clustering: the
/// endpoints of segment `k` are entries `2k` and `2k + 1`.
///
/// Nodes are registered under a quantized centroid key, which absorbs
/// floating-point noise from averaging; first appearance assigns the dense
/// id. A segment whose two ends resolve to the same node (a fragment that
/// collapsed under clustering) is dropped silently, as is any segment whose
/// unordered node pair was already emitted. Edge ids are emission order.
///
/// Always succeeds; empty input produces an empty graph.
pub fn build_graph(segments: &[Segment], centroids: &[Point]) -> Graph {
    debug_assert_eq!(centroids.len(), segments.len() * 2);

    let mut graph = Graph::new();
    let mut registry: HashMap<(i32, i32), NodeId> = HashMap::new();
    let mut emitted: HashSet<(NodeId, NodeId)> = HashSet::new();

    for index in 0..segments.len() {
        let n1 = resolve(&mut graph, &mut registry, centroids[2 * index]);
        let n2 = resolve(&mut graph, &mut registry, centroids[2 * index + 1]);

        if n1 == n2 {
            continue;
        }

        let pair = if n1 < n2 { (n1, n2) } else { (n2, n1) };
        if !emitted.insert(pair) {
            continue;
        }

        graph.add_edge(n1, n2);
    }

    graph
}

/// Looks up the node for a centroid, creating it on first appearance.
fn resolve(
    graph: &mut Graph,
    registry: &mut HashMap<(i32, i32), NodeId>,
    centroid: Point,
) -> NodeId {
    *registry
        .entry(quantize(centroid))
        .or_insert_with(|| graph.add_node(centroid.x(), centroid.y()))
}

/// Quantizes a centroid to the registry grid.
fn quantize(point: Point) -> (i32, i32) {
    (
        (point.x() * QUANT_SCALE).round() as i32,
        (point.y() * QUANT_SCALE).round() as i32,
    )
}
