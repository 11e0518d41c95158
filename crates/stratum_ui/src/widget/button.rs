//! Buttons: idle/hovered/pressed styles and an edge-triggered action.

use std::fmt;

use tracing::debug;

use crate::geometry::{Polygon, Vec2};
use crate::input::Key;
use crate::render::{draw_rounded_border, Font, Surface};
use crate::style::BoxStyle;

use super::{Action, TextBox, UiElement};

/// Visual state of a button, derived each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonState {
    /// Mouse elsewhere or claimed by another widget.
    Idle,
    /// Mouse over the button.
    Hovered,
    /// Pressed this frame.
    Pressed,
}

/// A text box that swaps styles on hover and fires an action on click.
///
/// The action fires on the frame the left button goes down while the
/// button owns the mouse, never while the button is merely held.
pub struct Button {
    text_box: TextBox,
    style_idle: BoxStyle,
    style_hovered: BoxStyle,
    style_pressed: BoxStyle,
    action: Action,
    collides_with_mouse: bool,
    active: bool,
}

impl Button {
    /// Creates a button. The pressed style starts as the hovered style.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        position: Vec2,
        size: Vec2,
        style_idle: BoxStyle,
        style_hovered: BoxStyle,
        text: impl Into<String>,
        font: Font,
        antialias: bool,
        action: impl FnMut() + 'static,
    ) -> Self {
        Self {
            text_box: TextBox::new(position, size, style_idle, text, font, antialias),
            style_idle,
            style_hovered,
            style_pressed: style_hovered,
            action: Box::new(action),
            collides_with_mouse: false,
            active: false,
        }
    }

    /// Uses a distinct style for the press frame.
    #[must_use]
    pub fn with_pressed_style(mut self, style: BoxStyle) -> Self {
        self.style_pressed = style;
        self
    }

    /// Replaces the bound action.
    pub fn set_action(&mut self, action: impl FnMut() + 'static) {
        self.action = Box::new(action);
    }

    /// Box, label and current style.
    #[must_use]
    pub fn text_box(&self) -> &TextBox {
        &self.text_box
    }

    /// Mutable box, label and current style.
    pub fn text_box_mut(&mut self) -> &mut TextBox {
        &mut self.text_box
    }

    /// Style in use this frame.
    #[must_use]
    pub fn current_style(&self) -> &BoxStyle {
        &self.text_box.model.style
    }

    /// Mouse is over the button.
    #[must_use]
    pub fn hovered(&self) -> bool {
        self.collides_with_mouse
    }

    /// Pressed this frame.
    #[must_use]
    pub fn pressed(&self) -> bool {
        self.active
    }

    /// Visual state.
    #[must_use]
    pub fn state(&self) -> ButtonState {
        if self.active {
            ButtonState::Pressed
        } else if self.collides_with_mouse {
            ButtonState::Hovered
        } else {
            ButtonState::Idle
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("text_box", &self.text_box)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl UiElement for Button {
    fn on_update(&mut self, mouse_claimed: bool, mouse_position: Vec2, mouse_key: Key, _delta_time: f32) {
        self.collides_with_mouse = self.text_box.model.hit_test(mouse_claimed, mouse_position);
        self.active = self.collides_with_mouse && mouse_key.pressed();

        self.text_box.model.style = match self.state() {
            ButtonState::Pressed => self.style_pressed,
            ButtonState::Hovered => self.style_hovered,
            ButtonState::Idle => self.style_idle,
        };

        if self.active {
            debug!(label = %self.text_box.text, "button activated");
            (self.action)();
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.text_box.draw(surface);
    }

    fn collides_with_mouse(&self) -> bool {
        self.collides_with_mouse
    }

    fn active(&self) -> bool {
        self.active
    }
}

/// A button sized to its label.
#[derive(Debug)]
pub struct TextButton {
    button: Button,
}

impl TextButton {
    /// Creates a button whose box is exactly the measured label.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        position: Vec2,
        style_idle: BoxStyle,
        style_hovered: BoxStyle,
        text: impl Into<String>,
        font: Font,
        antialias: bool,
        action: impl FnMut() + 'static,
    ) -> Self {
        let text = text.into();
        let size = font.measure(&text);
        Self {
            button: Button::new(position, size, style_idle, style_hovered, text, font, antialias, action),
        }
    }

    /// Underlying button.
    #[must_use]
    pub fn button(&self) -> &Button {
        &self.button
    }

    /// Mutable underlying button.
    pub fn button_mut(&mut self) -> &mut Button {
        &mut self.button
    }
}

impl UiElement for TextButton {
    fn on_update(&mut self, mouse_claimed: bool, mouse_position: Vec2, mouse_key: Key, delta_time: f32) {
        self.button.on_update(mouse_claimed, mouse_position, mouse_key, delta_time);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.button.draw(surface);
    }

    fn collides_with_mouse(&self) -> bool {
        self.button.collides_with_mouse()
    }

    fn active(&self) -> bool {
        self.button.active()
    }
}

/// A label-less button showing an equilateral triangle.
#[derive(Debug)]
pub struct TriangleButton {
    button: Button,
    mesh: Polygon,
}

impl TriangleButton {
    /// Creates the button and bakes its triangle mesh.
    ///
    /// The triangle is scaled by `triangle_scale / √3`, then by a third of
    /// the smaller box side, then rotated clockwise by `angle_degrees`.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        position: Vec2,
        size: Vec2,
        style_idle: BoxStyle,
        style_hovered: BoxStyle,
        triangle_scale: Vec2,
        angle_degrees: f32,
        antialias: bool,
        action: impl FnMut() + 'static,
    ) -> Self {
        let mut mesh = Polygon::regular(3);
        mesh.scale_by(triangle_scale / 3.0_f32.sqrt());
        let side = (size.x / 3.0).min(size.y / 3.0);
        mesh.scale_by(Vec2::splat(side));
        mesh.rotate(angle_degrees);

        Self {
            button: Button::new(
                position,
                size,
                style_idle,
                style_hovered,
                "",
                Font::DEFAULT_UI,
                antialias,
                action,
            ),
            mesh,
        }
    }

    /// Triangle vertices relative to the button center.
    #[must_use]
    pub fn mesh(&self) -> &Polygon {
        &self.mesh
    }

    /// Underlying button.
    #[must_use]
    pub fn button(&self) -> &Button {
        &self.button
    }

    /// Mutable underlying button.
    pub fn button_mut(&mut self) -> &mut Button {
        &mut self.button
    }
}

impl UiElement for TriangleButton {
    fn on_update(&mut self, mouse_claimed: bool, mouse_position: Vec2, mouse_key: Key, delta_time: f32) {
        self.button.on_update(mouse_claimed, mouse_position, mouse_key, delta_time);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let model = &self.button.text_box.model;
        let style = &model.style;
        let rectangle = model.rectangle();

        if let Some(fill) = style.fill_color {
            surface.fill_rect(rectangle, fill);
        }
        if let Some(outline) = style.outline_color {
            draw_rounded_border(surface, rectangle, outline, style.outline_width, 1.0);
        }
        if let Some(content) = style.content_color {
            let points = self.mesh.translated(model.position);
            surface.fill_polygon(&points, content);
            if self.button.text_box.antialias {
                surface.stroke_polygon(&points, content, true);
            }
        }
    }

    fn collides_with_mouse(&self) -> bool {
        self.button.collides_with_mouse()
    }

    fn active(&self) -> bool {
        self.button.active()
    }
}
