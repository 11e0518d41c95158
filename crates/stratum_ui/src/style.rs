//! Colors and box styles.
//!
//! Styles are plain `Copy` values. Many widgets may hold the same style;
//! a widget only ever swaps which of its styles is current.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// RGBA color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    #[serde(default = "opaque")]
    pub a: f32,
}

const fn opaque() -> f32 {
    1.0
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Mid grey (127/255).
    pub const GREY: Self = Self::rgb(127.0 / 255.0, 127.0 / 255.0, 127.0 / 255.0);
    /// Alias of [`Color::GREY`].
    pub const GRAY: Self = Self::GREY;
    /// Solid white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Pure red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Pure green.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Pure blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Yellow.
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    /// Cyan.
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);
    /// Magenta.
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates an opaque color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Linearly interpolates between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Visual description of a box: fill, content (text/glyph) and outline.
///
/// A `None` color means "do not draw that part".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxStyle {
    /// Fill color of the box.
    pub fill_color: Option<Color>,
    /// Color of text or glyphs drawn inside the box.
    pub content_color: Option<Color>,
    /// Outline thickness, growing outwards from the box.
    pub outline_width: f32,
    /// Outline color.
    pub outline_color: Option<Color>,
    /// Smooth edges for text and polygons.
    pub antialias: bool,
}

impl BoxStyle {
    /// Creates a style without an outline.
    #[must_use]
    pub const fn new(fill_color: Option<Color>, content_color: Option<Color>) -> Self {
        Self {
            fill_color,
            content_color,
            outline_width: 0.0,
            outline_color: None,
            antialias: false,
        }
    }

    /// Adds an outline.
    #[must_use]
    pub const fn with_outline(mut self, width: f32, color: Option<Color>) -> Self {
        self.outline_width = width;
        self.outline_color = color;
        self
    }

    /// Enables or disables antialiasing.
    #[must_use]
    pub const fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    /// Returns true if an outline would be visible.
    #[must_use]
    pub fn has_outline(&self) -> bool {
        self.outline_width != 0.0 && self.outline_color.is_some()
    }
}
