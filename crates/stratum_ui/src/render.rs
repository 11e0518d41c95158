//! UI rendering interface.
//!
//! Widgets never rasterize anything themselves. They issue primitive draw
//! calls into a [`Surface`]; [`CommandList`] is the recording surface used
//! by backends that batch, and by tests.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Vec2};
use crate::style::Color;

/// Monospace font descriptor.
///
/// Backends with real glyph metrics override [`Surface::measure_text`];
/// everything else uses the fixed advance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    /// Backend font handle.
    pub id: u32,
    /// Nominal pixel size.
    pub size: f32,
    /// Horizontal advance per character.
    pub advance: f32,
    /// Height of one line.
    pub line_height: f32,
}

impl Font {
    /// Default 32 px UI font.
    pub const DEFAULT_UI: Self = Self::monospace(0, 32.0);

    /// Creates a square-cell monospace font.
    #[must_use]
    pub const fn monospace(id: u32, size: f32) -> Self {
        Self {
            id,
            size,
            advance: size,
            line_height: size,
        }
    }

    /// Size of `text` rendered on a single line.
    #[must_use]
    pub fn measure(&self, text: &str) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * self.advance, self.line_height)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::DEFAULT_UI
    }
}

/// Render sink consumed by every widget.
pub trait Surface {
    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws a border of `thickness` growing outwards from `rect`.
    fn stroke_rect(&mut self, rect: Rect, color: Color, thickness: f32);

    /// Fills a closed polygon.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    /// Draws the closed outline of a polygon.
    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, antialias: bool);

    /// Draws one line of text with its top-left corner at `top_left`.
    fn draw_text(&mut self, text: &str, top_left: Vec2, color: Color, font: &Font, antialias: bool);

    /// Size `text` would occupy when drawn with `font`.
    fn measure_text(&self, text: &str, font: &Font) -> Vec2 {
        font.measure(text)
    }
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },
    /// Rectangle outline growing outwards.
    RectOutline {
        /// Inner bounds.
        bounds: Rect,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
    },
    /// Filled polygon.
    Polygon {
        /// Vertices in screen space.
        points: Vec<Vec2>,
        /// Fill color.
        color: Color,
    },
    /// Closed polygon outline.
    PolygonOutline {
        /// Vertices in screen space.
        points: Vec<Vec2>,
        /// Stroke color.
        color: Color,
        /// Smooth the line.
        antialias: bool,
    },
    /// Text.
    Text {
        /// Text content.
        text: String,
        /// Top-left corner.
        position: Vec2,
        /// Text color.
        color: Color,
        /// Font.
        font: Font,
        /// Smooth glyph edges.
        antialias: bool,
    },
}

impl RenderCommand {
    /// Flat `[x0, y0, x1, y1, ...]` vertex data of polygon commands.
    #[must_use]
    pub fn flat_points(&self) -> Option<&[f32]> {
        match self {
            Self::Polygon { points, .. } | Self::PolygonOutline { points, .. } => {
                Some(bytemuck::cast_slice(points))
            }
            _ => None,
        }
    }

    /// Color the command paints with.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Rect { color, .. }
            | Self::RectOutline { color, .. }
            | Self::Polygon { color, .. }
            | Self::PolygonOutline { color, .. }
            | Self::Text { color, .. } => *color,
        }
    }
}

/// Surface that records draw calls in submission order.
#[derive(Debug, Clone, Default)]
pub struct CommandList {
    commands: Vec<RenderCommand>,
}

impl CommandList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
        }
    }

    /// Clears the previous frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Commands recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the list empty.
    pub fn take(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every recorded text string, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for CommandList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(RenderCommand::Rect { bounds: rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, thickness: f32) {
        self.commands.push(RenderCommand::RectOutline {
            bounds: rect,
            color,
            width: thickness,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(RenderCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, antialias: bool) {
        self.commands.push(RenderCommand::PolygonOutline {
            points: points.to_vec(),
            color,
            antialias,
        });
    }

    fn draw_text(&mut self, text: &str, top_left: Vec2, color: Color, font: &Font, antialias: bool) {
        self.commands.push(RenderCommand::Text {
            text: text.to_owned(),
            position: top_left,
            color,
            font: *font,
            antialias,
        });
    }
}

/// Fills `rect` and draws an outward border when both are visible.
pub fn draw_rectangle(
    surface: &mut dyn Surface,
    rect: Rect,
    fill_color: Option<Color>,
    outline: f32,
    outline_color: Option<Color>,
) {
    if let Some(color) = fill_color {
        surface.fill_rect(rect, color);
    }
    if let Some(color) = outline_color {
        draw_border(surface, rect, color, outline);
    }
}

/// Outward border of `thickness` around `rect`. Zero thickness draws nothing.
pub fn draw_border(surface: &mut dyn Surface, rect: Rect, color: Color, thickness: f32) {
    if thickness != 0.0 {
        surface.stroke_rect(rect, color, thickness);
    }
}

/// Outward border whose four sides are shortened by `offset` at each end,
/// leaving the corners notched.
pub fn draw_rounded_border(
    surface: &mut dyn Surface,
    rect: Rect,
    color: Color,
    thickness: f32,
    offset: f32,
) {
    if thickness == 0.0 {
        return;
    }
    let long_x = rect.width + 2.0 * thickness - 2.0 * offset;
    let long_y = rect.height + 2.0 * thickness - 2.0 * offset;

    // Top, bottom, right, left.
    surface.fill_rect(
        Rect::new(rect.x - thickness + offset, rect.y - thickness, long_x, thickness),
        color,
    );
    surface.fill_rect(
        Rect::new(rect.x - thickness + offset, rect.bottom(), long_x, thickness),
        color,
    );
    surface.fill_rect(
        Rect::new(rect.right(), rect.y - thickness + offset, thickness, long_y),
        color,
    );
    surface.fill_rect(
        Rect::new(rect.x - thickness, rect.y - thickness + offset, thickness, long_y),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_measure() {
        let font = Font::DEFAULT_UI;
        assert_eq!(font.measure("PLAY"), Vec2::new(128.0, 32.0));
        assert_eq!(font.measure(""), Vec2::new(0.0, 32.0));
    }

    #[test]
    fn test_command_list_records_in_order() {
        let mut list = CommandList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED);
        list.draw_text("hi", Vec2::ZERO, Color::WHITE, &Font::DEFAULT_UI, false);

        assert_eq!(list.len(), 2);
        assert_eq!(list.commands()[0].color(), Color::RED);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["hi"]);

        let taken = list.take();
        assert_eq!(taken.len(), 2);
        assert!(list.is_empty());
    }

    #[test]
    fn test_polygon_flat_points() {
        let mut list = CommandList::new();
        list.fill_polygon(&[Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)], Color::GREEN);

        assert_eq!(list.commands()[0].flat_points(), Some(&[1.0, 2.0, 3.0, 4.0][..]));
    }

    #[test]
    fn test_draw_rectangle_skips_missing_parts() {
        let mut list = CommandList::new();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        draw_rectangle(&mut list, rect, None, 5.0, None);
        assert!(list.is_empty());

        draw_rectangle(&mut list, rect, Some(Color::BLACK), 0.0, Some(Color::CYAN));
        assert_eq!(list.len(), 1);

        draw_rectangle(&mut list, rect, Some(Color::BLACK), 2.0, Some(Color::CYAN));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_rounded_border_notches_corners() {
        let mut list = CommandList::new();
        draw_rounded_border(&mut list, Rect::new(10.0, 10.0, 100.0, 50.0), Color::WHITE, 4.0, 1.0);

        assert_eq!(list.len(), 4);
        let RenderCommand::Rect { bounds, .. } = list.commands()[0] else {
            panic!("expected a rect");
        };
        assert_eq!(bounds, Rect::new(7.0, 6.0, 106.0, 4.0));
    }
}
