//! SVG rendering for [`Diagram`] definitions.
//!
//! Grid-unit coordinates are scaled to pixels and flipped vertically (the
//! diagram grids grow upward, SVG grows downward). Shapes render on the
//! content layer, arrows trim to shape boundaries and carry per-color
//! arrowhead markers, and the legend renders as text on rounded swatches.

use svg::Document;

use attest_core::{
    color::Color,
    draw::{
        self, Drawable, LayeredOutput, OvalDefinition, RectangleDefinition, RenderLayer,
        ShapeDefinition, StrokeDefinition, Text, TextDefinition,
    },
    geometry::{Bounds, Insets, Point},
};

use super::Error;
use crate::diagram::{Diagram, Node, NodeKind};

/// Pixels per grid unit.
const SCALE: f32 = 100.0;

/// Arrow stroke width in pixels.
const ARROW_WIDTH: f32 = 2.0;

/// Maps grid positions into the pixel canvas.
struct Canvas {
    grid: Bounds,
    margins: Insets,
}

impl Canvas {
    fn new(diagram: &Diagram) -> Self {
        let top = if diagram.subtitle.is_some() { 70.0 } else { 50.0 };
        let bottom = if diagram.legend.is_empty() { 10.0 } else { 70.0 };

        Self {
            grid: diagram.grid,
            margins: Insets::new(top, 0.0, bottom, 0.0),
        }
    }

    fn width(&self) -> f32 {
        self.grid.width() * SCALE
    }

    fn height(&self) -> f32 {
        self.margins.top() + self.grid.height() * SCALE + self.margins.bottom()
    }

    /// Converts a grid point to pixel coordinates, flipping the y axis.
    fn to_pixels(&self, point: Point) -> Point {
        Point::new(
            (point.x() - self.grid.min_x()) * SCALE + self.margins.left(),
            self.margins.top() + (self.grid.max_y() - point.y()) * SCALE,
        )
    }
}

/// Renders a diagram to an SVG document.
///
/// # Errors
///
/// Returns [`Error::Color`] if a node, stroke, or legend color string fails
/// to parse.
pub fn render_diagram(diagram: &Diagram, background: Option<Color>) -> Result<Document, Error> {
    let canvas = Canvas::new(diagram);
    let mut output = LayeredOutput::new();

    if let Some(bg_color) = background {
        let bg = svg::node::element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set("fill", bg_color.to_string())
            .set("fill-opacity", bg_color.alpha());
        output.add_to_layer(RenderLayer::Background, Box::new(bg));
    }

    render_titles(diagram, &canvas, &mut output);

    for node in &diagram.nodes {
        render_node(node, &canvas, &mut output)?;
    }

    let arrow_color = Color::default();
    for edge in &diagram.edges {
        let start = trimmed_endpoint(diagram, edge.from, edge.to, &canvas)?;
        let end = trimmed_endpoint(diagram, edge.to, edge.from, &canvas)?;
        let path = draw::create_path(start, end, &arrow_color, ARROW_WIDTH);
        output.add_to_layer(RenderLayer::Arrow, Box::new(path));
    }

    render_legend(diagram, &canvas, &mut output)?;

    let mut document = Document::new()
        .set("width", canvas.width())
        .set("height", canvas.height())
        .set("viewBox", (0.0, 0.0, canvas.width(), canvas.height()));

    if !diagram.edges.is_empty() {
        document = document.add(draw::create_marker_definitions([arrow_color].iter()));
    }

    for node in output.render() {
        document = document.add(node);
    }

    Ok(document)
}

fn render_titles(diagram: &Diagram, canvas: &Canvas, output: &mut LayeredOutput) {
    let center_x = canvas.width() / 2.0;

    let mut title_def = TextDefinition::new();
    title_def.set_font_size(16);
    title_def.set_font_weight(Some("bold"));
    let title = Text::new(&title_def, diagram.title);
    output.merge(title.render_to_layers(Point::new(center_x, 24.0)));

    if let Some(subtitle) = diagram.subtitle {
        let mut subtitle_def = TextDefinition::new();
        subtitle_def.set_font_size(12);
        let subtitle = Text::new(&subtitle_def, subtitle);
        output.merge(subtitle.render_to_layers(Point::new(center_x, 50.0)));
    }
}

fn render_node(node: &Node, canvas: &Canvas, output: &mut LayeredOutput) -> Result<(), Error> {
    let center = canvas.to_pixels(node.center);
    let size = node.size.scale(SCALE);

    let definition = shape_definition(node)?;
    output.add_to_layer(RenderLayer::Content, definition.render_to_svg(size, center));

    let mut label_def = TextDefinition::new();
    label_def.set_font_size(node.font_size);
    label_def.set_font_weight(Some("bold"));
    let label = Text::new(&label_def, node.label);
    output.merge(label.render_to_layers(center));

    Ok(())
}

fn render_legend(diagram: &Diagram, canvas: &Canvas, output: &mut LayeredOutput) -> Result<(), Error> {
    let base_y = canvas.height() - canvas.margins.bottom() + 20.0;

    for (index, entry) in diagram.legend.iter().enumerate() {
        let mut entry_def = TextDefinition::new();
        entry_def.set_font_size(10);
        entry_def.set_padding(Insets::uniform(4.0));
        entry_def
            .set_background_color(Some(Color::new(entry.fill).map_err(Error::Color)?));

        let text = Text::new(&entry_def, entry.label);
        let position = Point::new(110.0, base_y + index as f32 * 26.0);
        output.merge(text.render_to_layers(position));
    }

    Ok(())
}

/// Builds the shape definition for a node: kind, fill with its opacity, and
/// stroke color.
fn shape_definition(node: &Node) -> Result<Box<dyn ShapeDefinition>, Error> {
    let fill = Color::new(node.fill)
        .map_err(Error::Color)?
        .with_alpha(node.fill_opacity);
    let stroke = StrokeDefinition::new(Color::new(node.stroke).map_err(Error::Color)?, 2.0);

    let mut definition: Box<dyn ShapeDefinition> = match node.kind {
        NodeKind::Rectangle => Box::new(RectangleDefinition::new()),
        NodeKind::Oval => Box::new(OvalDefinition::new()),
    };
    definition.set_fill_color(Some(fill));
    definition.set_stroke(stroke);

    Ok(definition)
}

/// Returns the pixel position where an arrow touching the node at `at`
/// should start or stop, trimmed to the node's boundary. Positions with no
/// node fall back to the raw point.
fn trimmed_endpoint(
    diagram: &Diagram,
    at: Point,
    toward: Point,
    canvas: &Canvas,
) -> Result<Point, Error> {
    let at_px = canvas.to_pixels(at);
    let toward_px = canvas.to_pixels(toward);

    match diagram.node_at(at) {
        Some(node) => {
            let definition = shape_definition(node)?;
            Ok(definition.find_intersection(at_px, toward_px, node.size.scale(SCALE)))
        }
        None => Ok(at_px),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::{architecture_diagram, data_flow_diagram};

    #[test]
    fn test_architecture_diagram_renders_six_boxes() {
        let document = render_diagram(&architecture_diagram(), None).unwrap();
        let rendered = document.to_string();

        assert!(rendered.contains("<svg"));
        assert_eq!(rendered.matches("<rect").count(), 6, "got: {rendered}");
        assert!(rendered.contains("Healthy Mother App - System Architecture"));
        assert!(rendered.contains("DAK Compliant Maternal Health System"));
    }

    #[test]
    fn test_architecture_diagram_has_five_arrows() {
        let document = render_diagram(&architecture_diagram(), None).unwrap();
        let rendered = document.to_string();
        assert_eq!(
            rendered.matches("marker-end").count(),
            5,
            "got: {rendered}"
        );
    }

    #[test]
    fn test_data_flow_diagram_renders_circles_and_legend() {
        let document = render_diagram(&data_flow_diagram(), None).unwrap();
        let rendered = document.to_string();

        assert_eq!(rendered.matches("<ellipse").count(), 5, "got: {rendered}");
        assert!(rendered.contains("FHIR Resources (Blue)"));
        assert!(rendered.contains("DAK Components (Green)"));
    }

    #[test]
    fn test_background_color_paints_canvas() {
        let background = Color::new("white").unwrap();
        let document = render_diagram(&architecture_diagram(), Some(background)).unwrap();
        let rendered = document.to_string();
        // Six node boxes plus the background fill
        assert_eq!(rendered.matches("<rect").count(), 7, "got: {rendered}");
    }

    #[test]
    fn test_vertical_axis_is_flipped() {
        let diagram = architecture_diagram();
        let canvas = Canvas::new(&diagram);

        // The mobile app box (grid y 6) sits above the database (grid y 1)
        let mobile = canvas.to_pixels(Point::new(1.0, 6.0));
        let db = canvas.to_pixels(Point::new(3.0, 1.0));
        assert!(mobile.y() < db.y());
    }
}
