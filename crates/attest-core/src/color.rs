//! Color handling with CSS color string support.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Provides the convenience methods the drawing code needs: CSS-string
/// parsing, an alpha accessor for SVG opacity attributes, and an ID-safe
/// rendering for marker ids.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string.
    ///
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)",
    /// "red", etc.
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }

    /// Returns the alpha component of this color in the range `0.0..=1.0`.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns this color with the alpha component replaced.
    ///
    /// The diagram node fills are defined as opaque swatches plus a separate
    /// opacity, so translucency is applied here rather than in the source
    /// color strings.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.color.components[3] = alpha;
        self
    }

    /// Get the sanitized ID-safe string for this color (for use in markers).
    pub fn to_id_safe_string(&self) -> String {
        let color_str = self.to_string();
        // Replace invalid ID characters with underscores
        let mut sanitized = color_str
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';', '.'], "_");

        // Ensure the ID starts with a letter (required for valid SVG IDs)
        if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            sanitized = format!("c_{sanitized}");
        }

        sanitized
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").unwrap()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        svg::node::Value::from(color.to_string())
    }
}
