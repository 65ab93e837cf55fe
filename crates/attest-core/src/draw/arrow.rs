//! Arrow paths and marker definitions for directed connections.
//!
//! Markers are defined once per stroke color and referenced from each path
//! via `marker-end`, so a diagram with many same-colored arrows carries a
//! single arrowhead definition.

use svg::node::element::{Definitions, Marker, Path};

use crate::{color::Color, geometry::Point};

/// Creates marker definitions for SVG arrowheads, one per color in use.
pub fn create_marker_definitions<'a, I>(colors: I) -> Definitions
where
    I: Iterator<Item = &'a Color>,
{
    let mut defs = Definitions::new();

    for color in colors {
        let arrowhead = Marker::new()
            .set("id", format!("arrowhead-{}", color.to_id_safe_string()))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string()),
            );

        defs = defs.add(arrowhead);
    }

    defs
}

/// Create a straight path data string from two points.
pub fn create_path_data_from_points(start: Point, end: Point) -> String {
    format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
}

/// Create a straight arrow path from `start` to `end` with an arrowhead
/// marker at the end.
pub fn create_path(start: Point, end: Point, color: &Color, width: f32) -> Path {
    Path::new()
        .set("d", create_path_data_from_points(start, end))
        .set("fill", "none")
        .set("stroke", color.to_string())
        .set("stroke-width", width)
        .set(
            "marker-end",
            format!("url(#arrowhead-{})", color.to_id_safe_string()),
        )
}
