//! Semantic models for the two illustrative diagrams.
//!
//! A [`Diagram`] is a fixed set of labeled [`Node`]s, directed [`Edge`]s
//! referencing node center positions, and optional [`LegendEntry`] swatches.
//! Coordinates are expressed in grid units (y grows upward, matching the
//! coordinate lists the content was authored in); the SVG exporter scales
//! them to pixels and flips the vertical axis.

use attest_core::geometry::{Bounds, Point, Size};

/// The shape drawn for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Rectangle,
    Oval,
}

/// A labeled shape at a fixed grid position.
#[derive(Debug, Clone)]
pub struct Node {
    /// Label text; newlines produce stacked lines inside the shape.
    pub label: &'static str,
    /// Center position in grid units.
    pub center: Point,
    /// Shape size in grid units.
    pub size: Size,
    /// Fill color as a CSS string.
    pub fill: &'static str,
    /// Fill opacity applied over `fill`.
    pub fill_opacity: f32,
    /// Stroke color as a CSS string.
    pub stroke: &'static str,
    pub kind: NodeKind,
    /// Label font size in points.
    pub font_size: u16,
}

/// A directed connection between two node center positions.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
}

/// A legend swatch: label text on a colored rounded background.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: &'static str,
    pub fill: &'static str,
}

/// A complete diagram definition.
#[derive(Debug, Clone)]
pub struct Diagram {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    /// The grid region the node coordinates live in.
    pub grid: Bounds,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub legend: Vec<LegendEntry>,
}

impl Diagram {
    /// Returns the node whose center is `position`, if any.
    ///
    /// Edges reference nodes by position; positions are shared literals so
    /// exact comparison is intended here.
    pub fn node_at(&self, position: Point) -> Option<&Node> {
        self.nodes.iter().find(|node| node.center == position)
    }
}

/// The system architecture diagram: six component boxes and the five
/// connections between them.
pub fn architecture_diagram() -> Diagram {
    let component_size = Size::new(1.6, 0.8);
    let components = [
        ("Mobile App\n(Flutter)", (1.0, 6.0), "#4CAF50"),
        ("Admin Dashboard\n(Next.js)", (5.0, 6.0), "#2196F3"),
        ("Backend API\n(Node.js)", (3.0, 4.0), "#FF9800"),
        ("Android Native\n(Kotlin)", (1.0, 3.0), "#9C27B0"),
        ("FHIR Client\nIntegration", (5.0, 3.0), "#00BCD4"),
        ("PostgreSQL DB\n(FHIR+DAK)", (3.0, 1.0), "#795548"),
    ];

    let nodes = components
        .into_iter()
        .map(|(label, (x, y), fill)| Node {
            label,
            center: Point::new(x, y),
            size: component_size,
            fill,
            fill_opacity: 0.7,
            stroke: "black",
            kind: NodeKind::Rectangle,
            font_size: 10,
        })
        .collect();

    let connections = [
        ((1.0, 6.0), (3.0, 4.0)), // Mobile to Backend
        ((5.0, 6.0), (3.0, 4.0)), // Admin to Backend
        ((1.0, 3.0), (1.0, 6.0)), // Android to Mobile
        ((5.0, 3.0), (5.0, 6.0)), // FHIR Client to Admin
        ((3.0, 4.0), (3.0, 1.0)), // Backend to DB
    ];

    let edges = connections
        .into_iter()
        .map(|((x1, y1), (x2, y2))| Edge {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
        })
        .collect();

    Diagram {
        title: "Healthy Mother App - System Architecture",
        subtitle: Some("FHIR R4 & DAK Compliant Maternal Health System"),
        grid: Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(6.0, 8.0)),
        nodes,
        edges,
        legend: Vec::new(),
    }
}

/// The patient-journey data-flow diagram: five workflow steps joined by
/// arrows, FHIR resource circles below, DAK component boxes above, and a
/// two-entry legend.
pub fn data_flow_diagram() -> Diagram {
    let step_size = Size::new(1.2, 0.8);
    let steps = [
        ("Patient\nRegistration", 1.0, "#E3F2FD"),
        ("Pregnancy\nTracking", 3.0, "#F3E5F5"),
        ("ANC Visits", 5.0, "#E8F5E8"),
        ("Delivery", 7.0, "#FFF3E0"),
        ("Postnatal\nCare", 9.0, "#FCE4EC"),
    ];

    let fhir_resources = [
        ("FHIR Patient", 1.0),
        ("FHIR Encounter", 3.0),
        ("FHIR Observation", 5.0),
        ("FHIR Procedure", 7.0),
        ("FHIR Observation", 9.0),
    ];

    let dak_components = [
        ("DAK Indicators", 1.0),
        ("Decision Support", 3.0),
        ("Risk Assessment", 5.0),
        ("Quality Metrics", 7.0),
        ("Compliance Tracking", 9.0),
    ];

    let mut nodes: Vec<Node> = steps
        .into_iter()
        .map(|(label, x, fill)| Node {
            label,
            center: Point::new(x, 3.0),
            size: step_size,
            fill,
            fill_opacity: 0.8,
            stroke: "black",
            kind: NodeKind::Rectangle,
            font_size: 9,
        })
        .collect();

    nodes.extend(fhir_resources.into_iter().map(|(label, x)| Node {
        label,
        center: Point::new(x, 1.5),
        size: Size::new(0.6, 0.6),
        fill: "lightblue",
        fill_opacity: 0.7,
        stroke: "blue",
        kind: NodeKind::Oval,
        font_size: 8,
    }));

    nodes.extend(dak_components.into_iter().map(|(label, x)| Node {
        label,
        center: Point::new(x, 4.5),
        size: Size::new(1.0, 0.4),
        fill: "lightgreen",
        fill_opacity: 0.7,
        stroke: "green",
        kind: NodeKind::Rectangle,
        font_size: 8,
    }));

    // One arrow between each pair of consecutive workflow steps
    let edges = [1.0, 3.0, 5.0, 7.0]
        .into_iter()
        .map(|x| Edge {
            from: Point::new(x, 3.0),
            to: Point::new(x + 2.0, 3.0),
        })
        .collect();

    Diagram {
        title: "Data Flow: Patient Journey with FHIR & DAK Integration",
        subtitle: None,
        grid: Bounds::new_from_top_left(Point::new(0.0, 0.5), Size::new(10.0, 4.5)),
        nodes,
        edges,
        legend: vec![
            LegendEntry {
                label: "FHIR Resources (Blue)",
                fill: "lightblue",
            },
            LegendEntry {
                label: "DAK Components (Green)",
                fill: "lightgreen",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_architecture_diagram_shape() {
        let diagram = architecture_diagram();
        assert_eq!(diagram.nodes.len(), 6);
        assert_eq!(diagram.edges.len(), 5);
        assert!(diagram.legend.is_empty());
        assert!(diagram.subtitle.is_some());
    }

    #[test]
    fn test_architecture_edges_connect_nodes() {
        let diagram = architecture_diagram();
        for edge in &diagram.edges {
            assert!(
                diagram.node_at(edge.from).is_some(),
                "edge starts at a position without a node: {:?}",
                edge.from
            );
            assert!(
                diagram.node_at(edge.to).is_some(),
                "edge ends at a position without a node: {:?}",
                edge.to
            );
        }
    }

    #[test]
    fn test_data_flow_diagram_shape() {
        let diagram = data_flow_diagram();
        assert_eq!(diagram.nodes.len(), 15);
        assert_eq!(diagram.edges.len(), 4);
        assert_eq!(diagram.legend.len(), 2);
    }

    #[test]
    fn test_data_flow_has_five_circles() {
        let diagram = data_flow_diagram();
        let circles = diagram
            .nodes
            .iter()
            .filter(|node| node.kind == NodeKind::Oval)
            .count();
        assert_eq!(circles, 5);
    }

    #[test]
    fn test_data_flow_nodes_inside_grid() {
        let diagram = data_flow_diagram();
        for node in &diagram.nodes {
            assert!(
                diagram.grid.contains(node.center),
                "node {:?} outside grid",
                node.label
            );
        }
    }
}
