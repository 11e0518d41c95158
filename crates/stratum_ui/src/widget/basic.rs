//! Non-interactive widgets: plain boxes and text.

use crate::geometry::Vec2;
use crate::input::Key;
use crate::render::{Font, Surface};
use crate::style::{BoxStyle, Color};

use super::{BoxModel, UiElement};

/// A styled rectangle. Takes the mouse when hovered but never activates.
#[derive(Debug, Clone)]
pub struct BoxElement {
    model: BoxModel,
    collides_with_mouse: bool,
}

impl BoxElement {
    /// Creates a box centered on `position`.
    #[must_use]
    pub fn new(position: Vec2, size: Vec2, style: BoxStyle) -> Self {
        Self {
            model: BoxModel::new(position, size, style),
            collides_with_mouse: false,
        }
    }

    /// Geometry and style.
    #[must_use]
    pub fn model(&self) -> &BoxModel {
        &self.model
    }

    /// Mutable geometry and style.
    pub fn model_mut(&mut self) -> &mut BoxModel {
        &mut self.model
    }
}

impl UiElement for BoxElement {
    fn on_update(&mut self, mouse_claimed: bool, mouse_position: Vec2, _mouse_key: Key, _delta_time: f32) {
        self.collides_with_mouse = self.model.hit_test(mouse_claimed, mouse_position);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.model.draw_box(surface);
    }

    fn collides_with_mouse(&self) -> bool {
        self.collides_with_mouse
    }
}

/// One line of text centered on a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Center of the text.
    pub position: Vec2,
    /// Text color.
    pub color: Color,
    /// Font.
    pub font: Font,
    /// Content.
    pub text: String,
    /// Smooth glyph edges.
    pub antialias: bool,
}

impl Text {
    /// Creates a text element.
    #[must_use]
    pub fn new(position: Vec2, color: Color, font: Font, text: impl Into<String>, antialias: bool) -> Self {
        Self {
            position,
            color,
            font,
            text: text.into(),
            antialias,
        }
    }
}

impl UiElement for Text {
    fn on_update(&mut self, _mouse_claimed: bool, _mouse_position: Vec2, _mouse_key: Key, _delta_time: f32) {}

    fn draw(&self, surface: &mut dyn Surface) {
        draw_centered_text(surface, &self.text, self.position, self.color, &self.font, self.antialias);
    }
}

pub(crate) fn draw_centered_text(
    surface: &mut dyn Surface,
    text: &str,
    center: Vec2,
    color: Color,
    font: &Font,
    antialias: bool,
) {
    let size = surface.measure_text(text, font);
    surface.draw_text(text, center - size / 2.0, color, font, antialias);
}

/// A box with centered text in the style's content color.
#[derive(Debug, Clone)]
pub struct TextBox {
    /// Geometry and current style.
    pub model: BoxModel,
    /// Content.
    pub text: String,
    /// Font.
    pub font: Font,
    /// Antialiasing requested by the owner, independent of the style.
    pub antialias: bool,
    collides_with_mouse: bool,
}

impl TextBox {
    /// Creates a text box centered on `position`.
    #[must_use]
    pub fn new(
        position: Vec2,
        size: Vec2,
        style: BoxStyle,
        text: impl Into<String>,
        font: Font,
        antialias: bool,
    ) -> Self {
        Self {
            model: BoxModel::new(position, size, style),
            text: text.into(),
            font,
            antialias,
            collides_with_mouse: false,
        }
    }
}

impl UiElement for TextBox {
    fn on_update(&mut self, mouse_claimed: bool, mouse_position: Vec2, _mouse_key: Key, _delta_time: f32) {
        self.collides_with_mouse = self.model.hit_test(mouse_claimed, mouse_position);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.model.draw_box(surface);
        if let Some(color) = self.model.style.content_color {
            if !self.text.is_empty() {
                draw_centered_text(
                    surface,
                    &self.text,
                    self.model.position,
                    color,
                    &self.font,
                    self.model.style.antialias,
                );
            }
        }
    }

    fn collides_with_mouse(&self) -> bool {
        self.collides_with_mouse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CommandList, RenderCommand};

    #[test]
    fn test_text_is_centered() {
        let text = Text::new(Vec2::new(100.0, 100.0), Color::GREEN, Font::DEFAULT_UI, "AB", false);
        let mut list = CommandList::new();
        text.draw(&mut list);

        let RenderCommand::Text { position, .. } = &list.commands()[0] else {
            panic!("expected text");
        };
        assert_eq!(*position, Vec2::new(68.0, 84.0));
    }

    #[test]
    fn test_text_never_takes_mouse() {
        let mut text = Text::new(Vec2::ZERO, Color::WHITE, Font::DEFAULT_UI, "X", false);
        text.on_update(false, Vec2::ZERO, Key::new(false, true), 0.0);

        assert!(!text.collides_with_mouse());
        assert!(!text.active());
    }

    #[test]
    fn test_box_element_collides_inside_outline() {
        let style = BoxStyle::new(None, None).with_outline(1.0, Some(Color::GREEN));
        let mut element = BoxElement::new(Vec2::new(50.0, 50.0), Vec2::new(20.0, 20.0), style);

        element.on_update(false, Vec2::new(39.0, 50.0), Key::default(), 0.0);
        assert!(element.collides_with_mouse());
        assert!(!element.active());

        element.on_update(true, Vec2::new(50.0, 50.0), Key::default(), 0.0);
        assert!(!element.collides_with_mouse());
    }

    #[test]
    fn test_text_box_draws_box_then_text() {
        let style = BoxStyle::new(Some(Color::BLACK), Some(Color::CYAN)).with_outline(2.0, Some(Color::CYAN));
        let text_box = TextBox::new(Vec2::new(50.0, 50.0), Vec2::new(80.0, 40.0), style, "OK", Font::DEFAULT_UI, false);
        let mut list = CommandList::new();
        text_box.draw(&mut list);

        assert_eq!(list.len(), 3);
        assert!(matches!(list.commands()[0], RenderCommand::Rect { .. }));
        assert!(matches!(list.commands()[1], RenderCommand::RectOutline { .. }));
        assert_eq!(list.commands()[2].color(), Color::CYAN);
    }
}
