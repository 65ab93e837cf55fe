//! Shape definitions for diagram nodes.
//!
//! This module provides the [`ShapeDefinition`] trait for rendering diagram
//! node shapes and finding the boundary points where arrows attach.

use crate::{
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

mod oval;
mod rectangle;

pub use oval::OvalDefinition;
pub use rectangle::RectangleDefinition;

/// A trait for shape definitions that provide stateless calculations.
pub trait ShapeDefinition: std::fmt::Debug {
    /// Find the point where a line from point `a` to point `b` intersects
    /// the boundary of this shape centered at `a` with the given size.
    fn find_intersection(&self, a: Point, b: Point, a_size: Size) -> Point {
        find_rectangle_intersection(a, b, a_size)
    }

    /// Renders this shape to an SVG node element.
    ///
    /// `position` is the center of the shape; `size` its outer dimensions.
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node>;

    /// Creates a boxed clone of this shape definition.
    fn clone_box(&self) -> Box<dyn ShapeDefinition>;

    /// Set the fill color for the shape. `None` falls back to white.
    fn set_fill_color(&mut self, color: Option<Color>);

    /// Get the stroke definition for the shape.
    fn stroke(&self) -> &StrokeDefinition;

    /// Set the stroke definition for the shape.
    fn set_stroke(&mut self, stroke: StrokeDefinition);
}

/// Enable cloning of `Box<dyn ShapeDefinition>` by delegating to `clone_box`.
impl Clone for Box<dyn ShapeDefinition> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Find the point where the ray from `a` toward `b` exits a rectangle of
/// `a_size` centered at `a`.
///
/// The result is clamped to `b` when `b` lies inside the rectangle, and
/// degenerates to `a` when the two points coincide.
pub fn find_rectangle_intersection(a: Point, b: Point, a_size: Size) -> Point {
    let dist = b.sub_point(a);

    if dist.x() == 0.0 && dist.y() == 0.0 {
        return a;
    }

    let half_width = a_size.width() / 2.0;
    let half_height = a_size.height() / 2.0;

    let tx = if dist.x() != 0.0 {
        half_width / dist.x().abs()
    } else {
        f32::INFINITY
    };
    let ty = if dist.y() != 0.0 {
        half_height / dist.y().abs()
    } else {
        f32::INFINITY
    };

    let t = tx.min(ty).min(1.0);
    a.add_point(dist.scale(t))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_rectangle_intersection_horizontal() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);
        let hit = find_rectangle_intersection(a, b, Size::new(20.0, 10.0));
        assert_approx_eq!(f32, hit.x(), 10.0);
        assert_approx_eq!(f32, hit.y(), 0.0);
    }

    #[test]
    fn test_rectangle_intersection_vertical() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, -50.0);
        let hit = find_rectangle_intersection(a, b, Size::new(20.0, 10.0));
        assert_approx_eq!(f32, hit.x(), 0.0);
        assert_approx_eq!(f32, hit.y(), -5.0);
    }

    #[test]
    fn test_rectangle_intersection_target_inside() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 0.0);
        let hit = find_rectangle_intersection(a, b, Size::new(20.0, 10.0));
        // b is inside the rectangle, so the segment never leaves it
        assert_approx_eq!(f32, hit.x(), 3.0);
    }

    #[test]
    fn test_rectangle_intersection_degenerate() {
        let a = Point::new(5.0, 5.0);
        let hit = find_rectangle_intersection(a, a, Size::new(20.0, 10.0));
        assert_eq!(hit, a);
    }

    proptest! {
        #[test]
        fn prop_intersection_on_or_inside_boundary(
            bx in -500.0f32..500.0,
            by in -500.0f32..500.0,
            w in 1.0f32..200.0,
            h in 1.0f32..200.0,
        ) {
            let a = Point::new(0.0, 0.0);
            let b = Point::new(bx, by);
            let hit = find_rectangle_intersection(a, b, Size::new(w, h));

            // Epsilon absorbs the scale/add rounding
            prop_assert!(hit.x().abs() <= w / 2.0 + 1e-3);
            prop_assert!(hit.y().abs() <= h / 2.0 + 1e-3);
        }
    }
}
