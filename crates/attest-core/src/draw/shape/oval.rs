use svg::{self, node::element as svg_element};

use super::ShapeDefinition;
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// Oval shape definition
#[derive(Debug, Clone)]
pub struct OvalDefinition {
    fill_color: Option<Color>,
    stroke: StrokeDefinition,
}

impl OvalDefinition {
    /// Create a new oval definition with default values
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for OvalDefinition {
    fn default() -> Self {
        Self {
            fill_color: None,
            stroke: StrokeDefinition::new(Color::default(), 2.0),
        }
    }
}

impl ShapeDefinition for OvalDefinition {
    fn find_intersection(&self, a: Point, b: Point, a_size: Size) -> Point {
        // For an ellipse, the boundary point along a direction is found from
        // the polar form of the ellipse equation rather than edge clamping.

        let half_width = a_size.width() / 2.0;
        let half_height = a_size.height() / 2.0;

        let dist = b.sub_point(a);

        let length = dist.hypot();
        if length < 0.001 {
            // Avoid division by zero
            return b;
        }

        let dx_norm = dist.x() / length;
        let dy_norm = dist.y() / length;

        // Radius of the ellipse at the direction angle:
        // r = (a*b) / sqrt((b*cos(θ))² + (a*sin(θ))²)
        let angle = dy_norm.atan2(dx_norm);
        let cos_angle = angle.cos();
        let sin_angle = angle.sin();
        let radius = (half_width * half_height)
            / (half_height * cos_angle).hypot(half_width * sin_angle);

        Point::new(
            dx_norm.mul_add(radius, a.x()),
            dy_norm.mul_add(radius, a.y()),
        )
    }

    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        // Ellipse takes a center point (cx, cy) plus radiuses (rx, ry)
        let rx = size.width() / 2.0;
        let ry = size.height() / 2.0;

        let ellipse = svg_element::Ellipse::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("rx", rx)
            .set("ry", ry)
            .set("fill", "white");
        let mut ellipse = apply_stroke!(ellipse, &self.stroke);

        if let Some(fill_color) = self.fill_color {
            ellipse = ellipse
                .set("fill", fill_color.to_string())
                .set("fill-opacity", fill_color.alpha());
        }

        ellipse.into()
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
