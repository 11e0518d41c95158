//! Box geometry shared by every visual widget.

use crate::geometry::{Rect, Vec2};
use crate::render::{draw_rectangle, Surface};
use crate::style::BoxStyle;

/// A centered, sized box with an outward outline.
///
/// All corner and rectangle accessors are derived from `position`, `size`
/// and `style.outline_width` on every call; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxModel {
    /// Center of the box.
    pub position: Vec2,
    /// Width and height, outline excluded.
    pub size: Vec2,
    /// Current style.
    pub style: BoxStyle,
}

impl BoxModel {
    /// Creates a box.
    #[must_use]
    pub const fn new(position: Vec2, size: Vec2, style: BoxStyle) -> Self {
        Self {
            position,
            size,
            style,
        }
    }

    fn half(&self) -> Vec2 {
        self.size / 2.0
    }

    fn outline(&self) -> f32 {
        self.style.outline_width
    }

    /// Top-left corner.
    #[must_use]
    pub fn top_left(&self) -> Vec2 {
        self.position - self.half()
    }

    /// Top-right corner.
    #[must_use]
    pub fn top_right(&self) -> Vec2 {
        self.position + Vec2::new(self.half().x, -self.half().y)
    }

    /// Bottom-left corner.
    #[must_use]
    pub fn bottom_left(&self) -> Vec2 {
        self.position + Vec2::new(-self.half().x, self.half().y)
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn bottom_right(&self) -> Vec2 {
        self.position + self.half()
    }

    /// Top-left corner of the outline.
    #[must_use]
    pub fn top_left_with_outline(&self) -> Vec2 {
        self.top_left() - Vec2::splat(self.outline())
    }

    /// Top-right corner of the outline.
    #[must_use]
    pub fn top_right_with_outline(&self) -> Vec2 {
        self.top_right() + Vec2::new(self.outline(), -self.outline())
    }

    /// Bottom-left corner of the outline.
    #[must_use]
    pub fn bottom_left_with_outline(&self) -> Vec2 {
        self.bottom_left() + Vec2::new(-self.outline(), self.outline())
    }

    /// Bottom-right corner of the outline.
    #[must_use]
    pub fn bottom_right_with_outline(&self) -> Vec2 {
        self.bottom_right() + Vec2::splat(self.outline())
    }

    /// The box without its outline.
    #[must_use]
    pub fn rectangle(&self) -> Rect {
        Rect::from_top_left(self.top_left(), self.size)
    }

    /// The box including its outline.
    #[must_use]
    pub fn rectangle_with_outline(&self) -> Rect {
        self.rectangle().expand(self.outline())
    }

    /// Inclusive test against the outline rectangle.
    #[must_use]
    pub fn contains_with_outline(&self, point: Vec2) -> bool {
        self.rectangle_with_outline().contains(point)
    }

    /// Collision as reported to the context: nobody claimed the mouse yet
    /// and it is inside the outline.
    #[must_use]
    pub fn hit_test(&self, mouse_claimed: bool, point: Vec2) -> bool {
        !mouse_claimed && self.contains_with_outline(point)
    }

    /// Fill and outline in the current style.
    pub fn draw_box(&self, surface: &mut dyn Surface) {
        draw_rectangle(
            surface,
            self.rectangle(),
            self.style.fill_color,
            self.style.outline_width,
            self.style.outline_color,
        );
    }
}
