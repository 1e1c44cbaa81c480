//! SVG rendering of member graphs.

use log::debug;
use svg::node::element as svg_element;

use girder_core::graph::Graph;

use crate::config::StyleConfig;

/// Margin around the graph content in pixels
const MARGIN: f32 = 20.0;

const LABEL_FONT_FAMILY: &str = "sans-serif";
const LABEL_FONT_SIZE: f32 = 10.0;

/// SVG renderer for member graphs.
///
/// Members render as lines, joints as filled circles with the node id as a
/// small label above. The document is sized to the graph bounds plus a
/// margin.
pub struct SvgRenderer {
    style: StyleConfig,
}

impl SvgRenderer {
    /// Creates a renderer with the given style.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Renders the graph to an SVG document string.
    ///
    /// Every node and every edge appears exactly once. An empty graph
    /// renders an empty document of margin-only size.
    pub fn render(&self, graph: &Graph) -> String {
        let (min_x, min_y, width, height) = self.viewport(graph);

        let mut doc = svg::Document::new()
            .set("viewBox", format!("{min_x} {min_y} {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(color) = self.style.background_color() {
            let background = svg_element::Rectangle::new()
                .set("x", min_x)
                .set("y", min_y)
                .set("width", width)
                .set("height", height)
                .set("fill", color);
            doc = doc.add(background);
        }

        doc = doc.add(self.render_members(graph));
        doc = doc.add(self.render_joints(graph));

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count();
            "SVG document rendered"
        );
        doc.to_string()
    }

    /// Calculates the document viewport from the graph bounds plus margin.
    fn viewport(&self, graph: &Graph) -> (f32, f32, f32, f32) {
        let mut nodes = graph.nodes().iter();
        let Some(first) = nodes.next() else {
            return (0.0, 0.0, MARGIN * 2.0, MARGIN * 2.0);
        };

        let mut min_x = first.x();
        let mut min_y = first.y();
        let mut max_x = first.x();
        let mut max_y = first.y();
        for node in nodes {
            min_x = min_x.min(node.x());
            min_y = min_y.min(node.y());
            max_x = max_x.max(node.x());
            max_y = max_y.max(node.y());
        }

        let width = MARGIN.mul_add(2.0, max_x - min_x);
        let height = MARGIN.mul_add(2.0, max_y - min_y);
        (min_x - MARGIN, min_y - MARGIN, width, height)
    }

    /// Renders one line per member.
    fn render_members(&self, graph: &Graph) -> svg_element::Group {
        let mut group = svg_element::Group::new().set("id", "members");

        for edge in graph.edges() {
            let from = graph.nodes()[edge.n1()];
            let to = graph.nodes()[edge.n2()];

            let line = svg_element::Line::new()
                .set("x1", from.x())
                .set("y1", from.y())
                .set("x2", to.x())
                .set("y2", to.y())
                .set("stroke", "black")
                .set("stroke-width", self.style.member_width())
                .set("stroke-linecap", "round");
            group = group.add(line);
        }

        group
    }

    /// Renders one labelled marker per joint.
    fn render_joints(&self, graph: &Graph) -> svg_element::Group {
        let mut group = svg_element::Group::new().set("id", "joints");
        let radius = self.style.joint_radius();

        for node in graph.nodes() {
            let marker = svg_element::Circle::new()
                .set("cx", node.x())
                .set("cy", node.y())
                .set("r", radius)
                .set("fill", "white")
                .set("stroke", "black")
                .set("stroke-width", 1.0);

            let label = svg_element::Text::new(node.id().to_string())
                .set("x", node.x())
                .set("y", node.y() - radius - 3.0)
                .set("text-anchor", "middle")
                .set("font-family", LABEL_FONT_FAMILY)
                .set("font-size", LABEL_FONT_SIZE);

            group = group.add(marker);
            group = group.add(label);
        }

        group
    }
}
