use svg::{self, node::element as svg_element};

use super::ShapeDefinition;
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// Rectangle shape definition
#[derive(Debug, Clone)]
pub struct RectangleDefinition {
    fill_color: Option<Color>,
    stroke: StrokeDefinition,
    rounded: usize,
}

impl RectangleDefinition {
    /// Create a new rectangle definition with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the corner radius in pixels
    pub fn set_rounded(&mut self, radius: usize) {
        self.rounded = radius;
    }
}

impl Default for RectangleDefinition {
    fn default() -> Self {
        Self {
            fill_color: None,
            stroke: StrokeDefinition::new(Color::default(), 2.0),
            rounded: 0,
        }
    }
}

impl ShapeDefinition for RectangleDefinition {
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        // position is the center of the shape
        let bounds = position.to_bounds(size);

        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", "white")
            .set("rx", self.rounded);
        let mut rect = apply_stroke!(rect, &self.stroke);

        if let Some(fill_color) = self.fill_color {
            rect = rect
                .set("fill", fill_color.to_string())
                .set("fill-opacity", fill_color.alpha());
        }

        rect.into()
    }

    fn clone_box(&self) -> Box<dyn ShapeDefinition> {
        Box::new(self.clone())
    }

    fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    fn set_stroke(&mut self, stroke: StrokeDefinition) {
        self.stroke = stroke;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_centers_on_position() {
        let def = RectangleDefinition::new();
        let node = def.render_to_svg(Size::new(160.0, 80.0), Point::new(100.0, 50.0));
        let rendered = node.to_string();
        assert!(rendered.contains("x=\"20\""), "got: {rendered}");
        assert!(rendered.contains("y=\"10\""), "got: {rendered}");
    }

    #[test]
    fn test_render_applies_fill_and_opacity() {
        let mut def = RectangleDefinition::new();
        def.set_fill_color(Some(Color::new("#4CAF50").unwrap().with_alpha(0.7)));
        let rendered = def
            .render_to_svg(Size::new(160.0, 80.0), Point::new(0.0, 0.0))
            .to_string();
        assert!(rendered.contains("fill-opacity"), "got: {rendered}");
    }
}
