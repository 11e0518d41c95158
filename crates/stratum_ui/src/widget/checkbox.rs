//! Checkbox with selectable check glyphs.

use tracing::{debug, warn};

use crate::geometry::{Direction, Rect, Vec2};
use crate::input::Key;
use crate::render::{draw_border, Font, Surface};
use crate::style::Color;

use super::UiElement;

/// Glyph drawn inside a checked box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStyle {
    /// Short-armed tick built from six points.
    Check1,
    /// Inset V-shaped tick.
    Check2,
    /// V-shaped tick touching the box edges.
    Check3,
    /// Inset cross.
    Cross1,
    /// Cross touching the box corners.
    Cross2,
    /// Inset filled square.
    Box,
}

impl CheckStyle {
    /// Every style, in table order.
    pub const ALL: [Self; 6] = [
        Self::Check1,
        Self::Check2,
        Self::Check3,
        Self::Cross1,
        Self::Cross2,
        Self::Box,
    ];

    /// Looks a style up by its table name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.name() == name)
    }

    /// Table name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Check1 => "check1",
            Self::Check2 => "check2",
            Self::Check3 => "check3",
            Self::Cross1 => "cross1",
            Self::Cross2 => "cross2",
            Self::Box => "box",
        }
    }

    /// Stroke thickness and inset, as fractions of the box side.
    #[must_use]
    pub const fn ratios(self) -> (f32, f32) {
        match self {
            Self::Check1 => (0.11333, 0.13667),
            Self::Check2 => (0.12, 0.22),
            Self::Check3 => (0.10, 0.0),
            Self::Cross1 => (0.07, 0.20),
            Self::Cross2 => (0.07, 0.0),
            Self::Box => (0.0, 0.22),
        }
    }
}

/// Whole-pixel glyph measurements derived from the box side.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CheckGeometry {
    thickness: f32,
    gap: f32,
}

/// A square toggle.
///
/// Inside a context it claims the mouse while hovered and toggles on the
/// press edge. [`Checkbox::mouse_input`] drives it without a context.
#[derive(Debug, Clone)]
pub struct Checkbox {
    position: Vec2,
    box_side: f32,
    outline_thickness: f32,
    state: bool,
    style: Option<CheckStyle>,
    geometry: Option<CheckGeometry>,
    box_color: Color,
    check_color: Color,
    collides_with_mouse: bool,
    active: bool,
}

impl Checkbox {
    /// Creates a checkbox with its top-left corner at `position`.
    ///
    /// An unknown `style_name` logs a warning and draws no glyph.
    #[must_use]
    pub fn new(position: Vec2, box_side: f32, outline_thickness: f32, default_state: bool, style_name: &str) -> Self {
        let style = CheckStyle::from_name(style_name);
        if style.is_none() {
            warn!(style = style_name, "unknown check style, glyph disabled");
        }
        Self::build(position, box_side, outline_thickness, default_state, style)
    }

    /// Creates a checkbox with a known style.
    #[must_use]
    pub fn with_style(
        position: Vec2,
        box_side: f32,
        outline_thickness: f32,
        default_state: bool,
        style: CheckStyle,
    ) -> Self {
        Self::build(position, box_side, outline_thickness, default_state, Some(style))
    }

    fn build(
        position: Vec2,
        box_side: f32,
        outline_thickness: f32,
        state: bool,
        style: Option<CheckStyle>,
    ) -> Self {
        let geometry = style.map(|style| {
            let (thickness, gap) = style.ratios();
            CheckGeometry {
                thickness: (box_side * thickness).floor(),
                gap: (box_side * gap).floor(),
            }
        });
        Self {
            position,
            box_side,
            outline_thickness,
            state,
            style,
            geometry,
            box_color: Color::WHITE,
            check_color: Color::WHITE,
            collides_with_mouse: false,
            active: false,
        }
    }

    /// Colors used when drawn by a context.
    #[must_use]
    pub fn with_colors(mut self, box_color: Color, check_color: Color) -> Self {
        self.box_color = box_color;
        self.check_color = check_color;
        self
    }

    /// Checked.
    #[must_use]
    pub fn state(&self) -> bool {
        self.state
    }

    /// Sets the checked state.
    pub fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    /// Glyph style, `None` if the name was unknown.
    #[must_use]
    pub fn style(&self) -> Option<CheckStyle> {
        self.style
    }

    /// Glyph stroke thickness in pixels.
    #[must_use]
    pub fn check_thickness(&self) -> Option<f32> {
        self.geometry.map(|geometry| geometry.thickness)
    }

    /// Glyph inset in pixels.
    #[must_use]
    pub fn check_gap(&self) -> Option<f32> {
        self.geometry.map(|geometry| geometry.gap)
    }

    /// The box, outline excluded.
    #[must_use]
    pub fn rectangle(&self) -> Rect {
        Rect::from_top_left(self.position, Vec2::splat(self.box_side))
    }

    /// Toggles if `pressed` and the mouse is over the box.
    ///
    /// Level-triggered: a held button toggles every call.
    pub fn mouse_input(&mut self, mouse_position: Vec2, pressed: bool) {
        if pressed && self.rectangle().contains(mouse_position) {
            self.state = !self.state;
        }
    }

    /// Picks one of two colors by state.
    #[must_use]
    pub fn color(&self, if_true: Color, if_false: Color) -> Color {
        if self.state {
            if_true
        } else {
            if_false
        }
    }

    /// Draws the box and, when checked, the glyph in explicit colors.
    pub fn draw_with(&self, surface: &mut dyn Surface, box_color: Color, check_color: Color) {
        if self.outline_thickness > 0.0 {
            draw_border(surface, self.rectangle(), box_color, self.outline_thickness);
        } else {
            surface.fill_rect(self.rectangle(), box_color);
        }

        if self.state {
            self.draw_check(surface, check_color);
        }
    }

    /// Draws `text` on one side of the box, one space away from the outline.
    pub fn draw_label(
        &self,
        surface: &mut dyn Surface,
        text: &str,
        font: &Font,
        color: Color,
        place: Direction,
        antialias: bool,
    ) {
        let size = surface.measure_text(text, font);
        let space = surface.measure_text(" ", font);
        let half_side = (self.box_side / 2.0).floor();
        let outline = self.outline_thickness;
        let offset = match place {
            Direction::Up => Vec2::new(
                half_side - (size.x / 2.0).floor(),
                -(outline + size.y + space.y),
            ),
            Direction::Down => Vec2::new(
                half_side - (size.x / 2.0).floor(),
                self.box_side + outline + space.y,
            ),
            Direction::Right => Vec2::new(
                self.box_side + outline + space.x,
                half_side - (size.y / 2.0).floor(),
            ),
            Direction::Left => Vec2::new(
                -(outline + size.x + space.x),
                half_side - (size.y / 2.0).floor(),
            ),
        };
        surface.draw_text(text, self.position + offset, color, font, antialias);
    }

    fn draw_check(&self, surface: &mut dyn Surface, color: Color) {
        let (Some(style), Some(CheckGeometry { thickness, gap })) = (self.style, self.geometry) else {
            return;
        };
        let p = self.position;
        let side = self.box_side;
        let half = (side / 2.0).floor();
        let at = |x: f32, y: f32| Vec2::new(p.x + x, p.y + y);

        match style {
            CheckStyle::Check1 => {
                let step = |from: Vec2, scale: f32, sx: f32, sy: f32| {
                    let amount = (scale * side).floor();
                    Vec2::new(from.x + sx * amount, from.y + sy * amount)
                };
                let p1 = at(gap, half + (0.17333 * side - gap));
                let p2 = step(p1, 0.11333, 1.0, -1.0);
                let p3 = step(p2, 0.14667, 1.0, 1.0);
                let p4 = step(p3, 0.36, 1.0, -1.0);
                let p5 = step(p4, 0.11333, 1.0, 1.0);
                let mut p6 = step(p5, 0.47333, -1.0, 1.0);
                p6.x = p3.x;
                surface.fill_polygon(&[p1, p2, p3, p4, p5, p6], color);
            }
            CheckStyle::Check2 => surface.fill_polygon(
                &[
                    at(gap, gap),
                    at(thickness + gap, gap),
                    at(half, side - 2.0 * thickness - gap),
                    at(side - thickness - gap, gap),
                    at(side - gap, gap),
                    at(half, side - gap),
                ],
                color,
            ),
            CheckStyle::Check3 => surface.fill_polygon(
                &[
                    at(0.0, 0.0),
                    at(thickness, 0.0),
                    at(half, side - 2.0 * thickness),
                    at(side - thickness, 0.0),
                    at(side, 0.0),
                    at(half, side),
                ],
                color,
            ),
            CheckStyle::Cross1 => {
                surface.fill_polygon(
                    &[
                        at(thickness + gap, gap),
                        at(side - gap, side - thickness - gap),
                        at(side - thickness - gap, side - gap),
                        at(gap, thickness + gap),
                    ],
                    color,
                );
                surface.fill_polygon(
                    &[
                        at(side - gap, thickness + gap),
                        at(thickness + gap, side - gap),
                        at(gap, side - thickness - gap),
                        at(side - thickness - gap, gap),
                    ],
                    color,
                );
            }
            CheckStyle::Cross2 => {
                surface.fill_polygon(
                    &[
                        at(0.0, 0.0),
                        at(thickness, 0.0),
                        at(side, side - thickness),
                        at(side, side),
                        at(side - thickness, side),
                        at(0.0, thickness),
                    ],
                    color,
                );
                surface.fill_polygon(
                    &[
                        at(side, 0.0),
                        at(side, thickness),
                        at(thickness, side),
                        at(0.0, side),
                        at(0.0, side - thickness),
                        at(side - thickness, 0.0),
                    ],
                    color,
                );
            }
            CheckStyle::Box => surface.fill_rect(
                Rect::from_top_left(at(gap, gap), Vec2::splat(side - 2.0 * gap)),
                color,
            ),
        }
    }
}

impl UiElement for Checkbox {
    fn on_update(&mut self, mouse_claimed: bool, mouse_position: Vec2, mouse_key: Key, _delta_time: f32) {
        self.collides_with_mouse = !mouse_claimed && self.rectangle().contains(mouse_position);
        self.active = self.collides_with_mouse && mouse_key.pressed();
        if self.active {
            self.state = !self.state;
            debug!(state = self.state, "checkbox toggled");
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.draw_with(surface, self.box_color, self.check_color);
    }

    fn collides_with_mouse(&self) -> bool {
        self.collides_with_mouse
    }

    fn active(&self) -> bool {
        self.active
    }
}
