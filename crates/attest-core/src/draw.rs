//! Drawable components for diagram rendering.
//!
//! All drawable components implement the [`Drawable`] trait, which provides
//! a consistent interface for rendering to layered SVG output and reporting
//! their size.

mod arrow;
mod layer;
mod shape;
mod stroke;
mod text;

pub use arrow::{create_marker_definitions, create_path, create_path_data_from_points};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use shape::{
    OvalDefinition, RectangleDefinition, ShapeDefinition, find_rectangle_intersection,
};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{Text, TextDefinition};

use crate::geometry::{Point, Size};

/// A renderable diagram element.
pub trait Drawable: std::fmt::Debug {
    /// Renders this element to layered SVG nodes, centered on `position`.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// The size this element occupies when rendered.
    fn size(&self) -> Size;
}
