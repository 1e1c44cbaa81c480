//! JSON serialization of member graphs.

use serde::Serialize;

use girder_core::graph::Graph;

use super::Error;

/// A joint in the exported structure.
#[derive(Debug, Serialize)]
struct JsonNode {
    id: usize,
    x: f32,
    y: f32,
}

/// A member in the exported structure, with endpoints relabelled as
/// `from`/`to`.
#[derive(Debug, Serialize)]
struct JsonEdge {
    id: usize,
    from: usize,
    to: usize,
}

#[derive(Debug, Serialize)]
struct JsonGraph {
    nodes: Vec<JsonNode>,
    edges: Vec<JsonEdge>,
}

/// Serializes the graph as pretty-printed JSON.
///
/// Node coordinates are rounded to one decimal place. The rounding is
/// cosmetic: it happens after graph construction, so it can never change
/// which nodes are distinct.
///
/// # Errors
///
/// Returns [`Error::Json`] if serialization fails.
pub fn render(graph: &Graph) -> Result<String, Error> {
    let document = JsonGraph {
        nodes: graph
            .nodes()
            .iter()
            .map(|node| JsonNode {
                id: node.id(),
                x: round_tenth(node.x()),
                y: round_tenth(node.y()),
            })
            .collect(),
        edges: graph
            .edges()
            .iter()
            .map(|edge| JsonEdge {
                id: edge.id(),
                from: edge.n1(),
                to: edge.n2(),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

/// Rounds to one decimal place.
fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
