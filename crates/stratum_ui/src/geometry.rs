//! Geometry primitives in y-down screen space.
//!
//! Everything a widget hit-tests against is a [`Rect`] derived on demand
//! from a center position and a size.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 2D vector - screen positions, sizes, offsets.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component (grows to the right).
    pub x: f32,
    /// Y component (grows downwards).
    pub y: f32,
}

impl Vec2 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector along X.
    pub const X: Self = Self::new(1.0, 0.0);

    /// Unit vector along Y (pointing down the screen).
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `value`.
    #[must_use]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Length.
    #[must_use]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Component-wise product.
    #[must_use]
    pub fn scale(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Rotates the vector clockwise on screen by `degrees`.
    ///
    /// With y pointing down, the usual counter-clockwise rotation matrix
    /// turns points clockwise as seen by the user.
    #[must_use]
    pub fn rotated(self, degrees: f32) -> Self {
        let (sine, cosine) = degrees.to_radians().sin_cos();
        Self::new(
            self.x * cosine - self.y * sine,
            self.x * sine + self.y * cosine,
        )
    }

    /// Converts to array.
    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self::new(top_left.x, top_left.y, size.x, size.y)
    }

    /// Creates a rectangle centered on `center`.
    #[must_use]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::from_top_left(center - size / 2.0, size)
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the top-left corner.
    #[must_use]
    pub const fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns the size.
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns the four corners, clockwise from the top-left.
    #[must_use]
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.right(), self.y),
            Vec2::new(self.right(), self.bottom()),
            Vec2::new(self.x, self.bottom()),
        ]
    }

    /// Returns true if the point is inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        self.x <= point.x && point.x <= self.right() && self.y <= point.y && point.y <= self.bottom()
    }

    /// Expands the rectangle by the given amount on all sides.
    #[must_use]
    pub fn expand(&self, amount: f32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    /// Shrinks the rectangle by the given amount on all sides.
    #[must_use]
    pub fn shrink(&self, amount: f32) -> Self {
        self.expand(-amount)
    }

    /// Rounds every component to the nearest whole pixel.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self::new(
            self.x.round(),
            self.y.round(),
            self.width.round(),
            self.height.round(),
        )
    }
}

/// Inclusive point-in-rectangle test.
#[must_use]
pub fn point_in_rect(point: Vec2, rectangle: Rect) -> bool {
    rectangle.contains(point)
}

/// Returns true if any corner of `first` lies inside `second`.
///
/// Both rectangles are snapped to whole pixels first.
#[must_use]
pub fn rect_vs_rect(first: Rect, second: Rect) -> bool {
    collide_float(first.rounded(), second.rounded())
}

/// Same as [`rect_vs_rect`] without snapping to whole pixels.
#[must_use]
pub fn collide_float(first: Rect, second: Rect) -> bool {
    first.corners().into_iter().any(|corner| second.contains(corner))
}

/// Side of a widget, used to place labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Above.
    Up,
    /// To the right.
    Right,
    /// Below.
    Down,
    /// To the left.
    Left,
}

/// A polygon mesh in local space around `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Pivot for scaling.
    pub position: Vec2,
    /// Vertices.
    pub points: Vec<Vec2>,
    scale: Vec2,
}

impl Polygon {
    /// Creates a polygon at unit scale.
    #[must_use]
    pub fn new(position: Vec2, points: Vec<Vec2>) -> Self {
        Self {
            position,
            points,
            scale: Vec2::splat(1.0),
        }
    }

    /// Creates a regular polygon with `sides` vertices on the unit circle,
    /// the first one on the +X axis.
    #[must_use]
    pub fn regular(sides: u16) -> Self {
        let step = 360.0 / f32::from(sides);
        let points = (0..sides)
            .map(|i| Vec2::X.rotated(step * f32::from(i)))
            .collect();
        Self::new(Vec2::ZERO, points)
    }

    /// Rotates every point clockwise on screen by `degrees` around the origin.
    pub fn rotate(&mut self, degrees: f32) {
        for point in &mut self.points {
            *point = point.rotated(degrees);
        }
    }

    /// Returns the current absolute scale.
    #[must_use]
    pub fn scale_factor(&self) -> Vec2 {
        self.scale
    }

    /// Sets the absolute scale, stretching points away from `position`.
    pub fn scale(&mut self, new_scale: Vec2) {
        let relative = Vec2::new(new_scale.x / self.scale.x, new_scale.y / self.scale.y);
        for point in &mut self.points {
            *point = self.position + (*point - self.position).scale(relative);
        }
        self.scale = new_scale;
    }

    /// Multiplies the current scale by `relative_scale`.
    pub fn scale_by(&mut self, relative_scale: Vec2) {
        self.scale(self.scale.scale(relative_scale));
    }

    /// Returns the points shifted by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Vec<Vec2> {
        self.points.iter().map(|&point| point + offset).collect()
    }

    /// Flat `[x0, y0, x1, y1, ...]` view of the points for vertex upload.
    #[must_use]
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }
}
