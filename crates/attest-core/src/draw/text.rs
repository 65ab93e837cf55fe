//! Text rendering for diagram labels, titles, and legend entries.
//!
//! [`TextDefinition`] is a reusable style (font, color, weight, padding,
//! optional background); [`Text`] pairs a definition with content and can
//! measure itself via `cosmic-text` so backgrounds and multi-line labels are
//! sized from real font metrics.
//!
//! When rendered via the [`Drawable`] trait, [`Text`] produces an SVG
//! `<text>` element (one `<tspan>` per line) on the
//! [`Text`](crate::draw::RenderLayer::Text) layer and, if a background color
//! is set, a rounded rectangle on the
//! [`Background`](crate::draw::RenderLayer::Background) layer.

use std::sync::{Arc, Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;
use svg::{self, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Insets, Point, Size},
};

/// Defines the visual style for text elements in diagrams.
///
/// Multiple [`Text`] elements can share the same definition for consistent
/// styling.
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    font_weight: Option<String>,
    background_color: Option<Color>,
    color: Option<Color>,
    padding: Insets,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family name (e.g. "Arial", "monospace").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font weight (e.g. "bold"). `None` uses the SVG default.
    pub fn set_font_weight(&mut self, weight: Option<&str>) {
        self.font_weight = weight.map(str::to_string);
    }

    /// Sets the background color. When set, text is rendered on a rounded
    /// rectangle in the specified color.
    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    /// Sets the text color. `None` uses the SVG default (typically black).
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the padding around the text content. Padding affects the size of
    /// the background rectangle and the overall size calculations.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    fn font_size(&self) -> u16 {
        self.font_size
    }

    fn font_family(&self) -> &str {
        &self.font_family
    }

    fn font_weight(&self) -> Option<&str> {
        self.font_weight.as_deref()
    }

    fn background_color(&self) -> Option<&Color> {
        self.background_color.as_ref()
    }

    fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    fn padding(&self) -> Insets {
        self.padding
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 15,
            font_weight: None,
            background_color: None,
            color: None,
            padding: Insets::default(),
        }
    }
}

/// A renderable text element combining content with styling.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Calculate the total size required to display this text, including padding.
    pub fn calculate_size(&self) -> Size {
        let padding = self.definition.padding();
        self.calculate_size_without_padding().add_padding(padding)
    }

    fn calculate_size_without_padding(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }
}

impl<'a> Drawable for Text<'a> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let text_size = self.calculate_size();
        let padding = self.definition.padding();

        let lines: Vec<&str> = self.content.lines().collect();

        // Uniform line height: total measured height divided by line count
        let text_size_without_padding = self.calculate_size_without_padding();
        let line_height = if lines.is_empty() {
            0.0
        } else {
            text_size_without_padding.height() / lines.len() as f32
        };

        let total_height = text_size_without_padding.height();
        let y_offset = -(total_height + line_height) / 2.0;

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y() + y_offset)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if let Some(weight) = self.definition.font_weight() {
            rendered_text = rendered_text.set("font-weight", weight);
        }

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for line in lines.into_iter() {
            let tspan = svg_element::TSpan::new("")
                .set("x", position.x())
                .set("dy", line_height)
                .add(SvgText::new(line));
            rendered_text = rendered_text.add(tspan);
        }

        if let Some(bg_color) = self.definition.background_color() {
            let bg_bounds = position.to_bounds(text_size).add_padding(padding);
            let bg_size = bg_bounds.to_size();
            let bg_min_point = bg_bounds.min_point();

            let bg = svg_element::Rectangle::new()
                .set("x", bg_min_point.x())
                .set("y", bg_min_point.y())
                .set("width", bg_size.width())
                .set("height", bg_size.height())
                .set("fill", bg_color.to_string())
                .set("fill-opacity", bg_color.alpha())
                .set("rx", 3.0);

            output.add_to_layer(RenderLayer::Background, Box::new(bg));
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// Handles text measurement, keeping one reusable `FontSystem` instance.
struct TextManager {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Calculate the rendered size of `text` in pixels using cosmic-text.
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        // Points to pixels, roughly 1.33x at standard DPI
        let font_size_px = text_def.font_size() as f32 * 1.33;

        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(text_def.font_family()));

        // Unlimited buffer size so text flows naturally
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if !layout_runs.is_empty() {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                // Rightmost glyph position
                if let Some(last) = last {
                    let run_width = last.x + last.w;
                    max_width = max_width.max(run_width);
                }
                total_height += metrics.line_height;
            }
        } else {
            // Fallback estimate when no layout runs are available
            max_width = text.len() as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
