//! Sliders bound to an application-owned value.
//!
//! A slider works in three spaces:
//!
//! ```text
//! screen point ──projection──► value in span ──ValueMapping──► reference value
//!      ▲                            │   ▲                           │
//!      └────value_in_span_to_position┘   └──────to_value_in_span─────┘
//! ```
//!
//! The value in span is always linear between the min and max markers and
//! is what ticks and the knob are placed by. The reference value is what
//! the application reads.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{UiError, UiResult};
use crate::geometry::{Rect, Vec2};
use crate::input::Key;
use crate::reference::{Reference, WeakReference};
use crate::render::{Font, Surface};
use crate::style::{BoxStyle, Color};

use super::basic::draw_centered_text;
use super::{Action, BoxModel, DiscreteMapping, FreeMapping, StepMapping, UiElement, ValueMapping};

/// Reference values closer than this are treated as unchanged.
const EPSILON: f32 = 1e-6;

/// A point in the value-in-span domain with its display text.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderValue {
    /// Position in the value-in-span domain.
    pub position: f32,
    /// Text drawn next to the tick.
    pub label: String,
}

impl SliderValue {
    /// Creates a labelled value.
    #[must_use]
    pub fn new(position: f32, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
        }
    }

    /// Creates a value labelled with its own number.
    #[must_use]
    pub fn numeric(position: f32) -> Self {
        Self::new(position, position.to_string())
    }
}

/// The min and max markers of a slider. `min` sits at the axis start.
///
/// `max.position` may be smaller than `min.position`; the span is signed.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderRange {
    /// Marker at the start of the axis.
    pub min: SliderValue,
    /// Marker at the end of the axis.
    pub max: SliderValue,
}

impl SliderRange {
    /// Creates a range from two markers.
    #[must_use]
    pub fn new(min: SliderValue, max: SliderValue) -> Self {
        Self { min, max }
    }

    /// Creates a range labelled with its own numbers.
    #[must_use]
    pub fn numeric(min: f32, max: f32) -> Self {
        Self::new(SliderValue::numeric(min), SliderValue::numeric(max))
    }

    /// `max - min`, negative for reversed ranges.
    #[must_use]
    pub fn signed_span(&self) -> f32 {
        self.max.position - self.min.position
    }

    /// Smaller of the two bounds.
    #[must_use]
    pub fn lower(&self) -> f32 {
        self.min.position.min(self.max.position)
    }

    /// Larger of the two bounds.
    #[must_use]
    pub fn upper(&self) -> f32 {
        self.min.position.max(self.max.position)
    }

    /// Clamps `value` into the range regardless of its direction.
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.lower(), self.upper())
    }

    fn validate(&self) -> UiResult<()> {
        let span = self.signed_span();
        if span == 0.0 || !span.is_finite() {
            return Err(UiError::InvalidSliderRange {
                min: self.min.position,
                max: self.max.position,
            });
        }
        Ok(())
    }
}

/// Axis of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Runs left to right.
    #[default]
    Horizontal,
    /// Runs bottom to top.
    Vertical,
}

/// Sizes of the slider parts, in pixels.
///
/// Lengths run along the axis, thicknesses across it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderGeometry {
    /// Track extent across the axis.
    pub track_thickness: f32,
    /// Knob extent along the axis.
    pub knob_length: f32,
    /// Knob extent across the axis, outline excluded.
    pub knob_thickness: f32,
    /// Tick extent across the axis.
    pub tick_length: f32,
    /// Tick extent along the axis.
    pub tick_thickness: f32,
    /// Space between the knob's reach and a label.
    pub label_gap: f32,
}

impl Default for SliderGeometry {
    fn default() -> Self {
        Self {
            track_thickness: 4.0,
            knob_length: 10.0,
            knob_thickness: 30.0,
            tick_length: 14.0,
            tick_thickness: 2.0,
            label_gap: 5.0,
        }
    }
}

/// Slider whose reference equals the value in span.
pub type SliderFree = Slider<FreeMapping>;

/// Slider that publishes values snapped to a step grid.
pub type SliderWithStep = Slider<StepMapping>;

/// Slider that publishes one of a list of values.
pub type SliderDiscrete = Slider<DiscreteMapping>;

/// A draggable knob on a track, bound to a shared `f32`.
///
/// # States
///
/// * Idle → Dragging: press on the knob (value kept) or press/hold on the
///   track while the mouse is free (value jumps to the mouse).
/// * Dragging: the value follows the mouse projection while the button is
///   down. The slider stays [`active`](UiElement::active), so the context
///   keeps every other widget off the mouse.
/// * Dragging → Idle: button released.
pub struct Slider<M> {
    position: Vec2,
    length: f32,
    orientation: Orientation,
    range: SliderRange,
    default_value: Option<SliderValue>,
    values_to_display: Vec<SliderValue>,
    mapping: M,
    reference: WeakReference<f32>,
    track_style: BoxStyle,
    knob_style: BoxStyle,
    font: Font,
    geometry: SliderGeometry,
    on_change: Option<Action>,
    value_in_span: f32,
    last_reference: f32,
    dragging: bool,
    collides_with_mouse: bool,
}

impl<M: ValueMapping> Slider<M> {
    /// Creates a slider centered on `position` with a custom mapping.
    ///
    /// The knob starts at the reference's current value.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidSliderRange`] if the span is zero or not
    /// finite, and [`UiError::InvalidSliderLength`] if `length` is not a
    /// positive number.
    pub fn new(
        position: Vec2,
        length: f32,
        orientation: Orientation,
        range: SliderRange,
        mapping: M,
        reference: &Reference<f32>,
    ) -> UiResult<Self> {
        range.validate()?;
        if !(length.is_finite() && length > 0.0) {
            return Err(UiError::InvalidSliderLength(length));
        }

        let initial = mapping.to_value_in_span(reference.get(), &range);
        let mut slider = Self {
            position,
            length,
            orientation,
            value_in_span: range.min.position,
            last_reference: range.min.position,
            range,
            default_value: None,
            values_to_display: Vec::new(),
            mapping,
            reference: reference.downgrade(),
            track_style: BoxStyle::new(Some(Color::GREY), Some(Color::WHITE)),
            knob_style: BoxStyle::new(Some(Color::WHITE), None),
            font: Font::DEFAULT_UI,
            geometry: SliderGeometry::default(),
            on_change: None,
            dragging: false,
            collides_with_mouse: false,
        };
        slider.set_value_in_span(initial);
        Ok(slider)
    }

    /// Sets the track and knob styles.
    #[must_use]
    pub fn with_styles(mut self, track_style: BoxStyle, knob_style: BoxStyle) -> Self {
        self.track_style = track_style;
        self.knob_style = knob_style;
        self
    }

    /// Adds a default marker and moves the knob onto it.
    #[must_use]
    pub fn with_default(mut self, value: SliderValue) -> Self {
        self.set_value_in_span(value.position);
        self.default_value = Some(value);
        self
    }

    /// Adds extra tick marks.
    #[must_use]
    pub fn with_values_to_display(mut self, values: Vec<SliderValue>) -> Self {
        self.values_to_display.extend(values);
        self
    }

    /// Sets the label font.
    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Sets part sizes.
    #[must_use]
    pub fn with_geometry(mut self, geometry: SliderGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Action fired once per update in which interaction changed the
    /// reference value.
    #[must_use]
    pub fn on_change(mut self, action: impl FnMut() + 'static) -> Self {
        self.on_change = Some(Box::new(action));
        self
    }

    /// Center of the track.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Track length in pixels.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Axis of the slider.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Min and max markers.
    #[must_use]
    pub fn range(&self) -> &SliderRange {
        &self.range
    }

    /// Value-domain mapping.
    #[must_use]
    pub fn mapping(&self) -> &M {
        &self.mapping
    }

    /// Default marker, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&SliderValue> {
        self.default_value.as_ref()
    }

    /// Extra tick marks.
    #[must_use]
    pub fn values_to_display(&self) -> &[SliderValue] {
        &self.values_to_display
    }

    /// Knob is being dragged.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Current value in span.
    #[must_use]
    pub fn value_in_span(&self) -> f32 {
        self.value_in_span
    }

    /// Moves the knob and publishes the mapped value.
    pub fn set_value_in_span(&mut self, value: f32) {
        self.value_in_span = self.range.clamp(value);
        let reference = self.value_in_span_to_reference_value(self.value_in_span);
        self.publish(reference);
    }

    /// Published value for the current knob position.
    #[must_use]
    pub fn reference_value(&self) -> f32 {
        self.value_in_span_to_reference_value(self.value_in_span)
    }

    /// Moves the knob to match `value` and publishes the snapped result.
    ///
    /// Out-of-range or off-grid values are clamped and mapped first, so the
    /// reference always holds what [`reference_value`](Self::reference_value)
    /// reports.
    pub fn set_reference_value(&mut self, value: f32) {
        self.set_value_in_span(self.reference_value_to_value_in_span(value));
    }

    /// Maps a value in span to the published domain.
    #[must_use]
    pub fn value_in_span_to_reference_value(&self, value: f32) -> f32 {
        self.mapping.to_reference(value, &self.range)
    }

    /// Maps a published value back into the span.
    #[must_use]
    pub fn reference_value_to_value_in_span(&self, value: f32) -> f32 {
        self.mapping.to_value_in_span(value, &self.range)
    }

    /// Screen point where the min marker sits.
    #[must_use]
    pub fn axis_start(&self) -> Vec2 {
        match self.orientation {
            Orientation::Horizontal => self.position - Vec2::new(self.length / 2.0, 0.0),
            Orientation::Vertical => self.position + Vec2::new(0.0, self.length / 2.0),
        }
    }

    /// Unit vector from the min marker towards the max marker.
    #[must_use]
    pub fn axis_direction(&self) -> Vec2 {
        match self.orientation {
            Orientation::Horizontal => Vec2::X,
            Orientation::Vertical => -Vec2::Y,
        }
    }

    /// Screen point of a value in span.
    #[must_use]
    pub fn value_in_span_to_position(&self, value: f32) -> Vec2 {
        self.axis_start()
            + self.axis_direction() * (self.length / self.range.signed_span() * (value - self.range.min.position))
    }

    /// Value in span of the axis point nearest to `point`, pinned to the ends.
    #[must_use]
    pub fn position_of_knob_to_value_in_span(&self, point: Vec2) -> f32 {
        let coordinate = (point - self.axis_start()).dot(self.axis_direction());
        if coordinate <= 0.0 {
            self.range.min.position
        } else if coordinate >= self.length {
            self.range.max.position
        } else {
            self.range.min.position + coordinate / self.length * self.range.signed_span()
        }
    }

    /// The track box.
    #[must_use]
    pub fn track_box(&self) -> BoxModel {
        let size = self.oriented(self.length, self.geometry.track_thickness);
        BoxModel::new(self.position, size, self.track_style)
    }

    /// The knob box at the current value.
    #[must_use]
    pub fn knob_box(&self) -> BoxModel {
        let size = self.oriented(self.geometry.knob_length, self.geometry.knob_thickness);
        BoxModel::new(
            self.value_in_span_to_position(self.value_in_span),
            size,
            self.knob_style,
        )
    }

    /// Center of the label drawn for `value`.
    #[must_use]
    pub fn label_center(&self, value: &SliderValue, label_size: Vec2) -> Vec2 {
        let (side, extent) = match self.orientation {
            Orientation::Horizontal => (Vec2::Y, label_size.y),
            Orientation::Vertical => (-Vec2::X, label_size.x),
        };
        let knob_reach = self.geometry.knob_thickness + 2.0 * self.knob_style.outline_width;
        let offset = knob_reach / 2.0 + extent / 2.0 + self.geometry.label_gap;
        self.value_in_span_to_position(value.position) + side * offset
    }

    /// Size along the axis and across it, turned into screen x/y.
    fn oriented(&self, along: f32, across: f32) -> Vec2 {
        match self.orientation {
            Orientation::Horizontal => Vec2::new(along, across),
            Orientation::Vertical => Vec2::new(across, along),
        }
    }

    fn publish(&mut self, reference: f32) {
        self.last_reference = reference;
        if !self.reference.set(reference) {
            trace!("slider reference dropped, value kept locally");
        }
    }

    /// Picks up writes the application made since the last frame.
    fn sync_from_reference(&mut self) {
        let Some(reference) = self.reference.get() else {
            return;
        };
        if (reference - self.last_reference).abs() > EPSILON {
            trace!(reference, "slider picked up external value");
            self.value_in_span = self.range.clamp(self.reference_value_to_value_in_span(reference));
            let snapped = self.reference_value();
            if (snapped - reference).abs() > EPSILON {
                self.publish(snapped);
            } else {
                self.last_reference = reference;
            }
        }
    }

    fn drag_to(&mut self, point: Vec2) {
        let value = self.position_of_knob_to_value_in_span(point);
        self.set_value_in_span(value);
    }

    fn draw_marker(&self, surface: &mut dyn Surface, value: &SliderValue, color: Color) {
        let at = self.value_in_span_to_position(value.position);
        let tick = self.oriented(self.geometry.tick_thickness, self.geometry.tick_length);
        surface.fill_rect(Rect::from_center(at, tick), color);

        if !value.label.is_empty() {
            let size = surface.measure_text(&value.label, &self.font);
            let center = self.label_center(value, size);
            draw_centered_text(surface, &value.label, center, color, &self.font, self.track_style.antialias);
        }
    }
}

impl Slider<FreeMapping> {
    /// Creates a slider that publishes its value in span unchanged.
    ///
    /// # Errors
    ///
    /// See [`Slider::new`].
    pub fn free(
        position: Vec2,
        length: f32,
        orientation: Orientation,
        range: SliderRange,
        reference: &Reference<f32>,
    ) -> UiResult<Self> {
        Self::new(position, length, orientation, range, FreeMapping, reference)
    }
}

impl Slider<StepMapping> {
    /// Creates a slider that publishes values snapped to `offset + k * step`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidStep`] for a bad step, otherwise see
    /// [`Slider::new`].
    pub fn with_step(
        position: Vec2,
        length: f32,
        orientation: Orientation,
        range: SliderRange,
        step: f32,
        offset: f32,
        reference: &Reference<f32>,
    ) -> UiResult<Self> {
        let mapping = StepMapping::new(step, offset)?;
        Self::new(position, length, orientation, range, mapping, reference)
    }
}

impl Slider<DiscreteMapping> {
    /// Creates a slider that publishes one of `values`.
    ///
    /// The first and last values become the min and max markers; the ones
    /// in between get their own ticks.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::TooFewDiscreteValues`] for fewer than two values,
    /// otherwise see [`Slider::new`].
    pub fn discrete(
        position: Vec2,
        length: f32,
        orientation: Orientation,
        values: Vec<SliderValue>,
        reference: &Reference<f32>,
    ) -> UiResult<Self> {
        let mapping = DiscreteMapping::new(values)?;
        let published = mapping.values();
        let range = SliderRange::new(published[0].clone(), published[published.len() - 1].clone());
        let inner = published[1..published.len() - 1].to_vec();
        Ok(Self::new(position, length, orientation, range, mapping, reference)?.with_values_to_display(inner))
    }

    /// The published value the knob currently selects.
    #[must_use]
    pub fn selected(&self) -> &SliderValue {
        self.mapping.selected(self.value_in_span)
    }
}

impl<M: fmt::Debug> fmt::Debug for Slider<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("position", &self.position)
            .field("length", &self.length)
            .field("orientation", &self.orientation)
            .field("range", &self.range)
            .field("mapping", &self.mapping)
            .field("value_in_span", &self.value_in_span)
            .field("dragging", &self.dragging)
            .finish_non_exhaustive()
    }
}

impl<M: ValueMapping + 'static> UiElement for Slider<M> {
    fn on_update(&mut self, mouse_claimed: bool, mouse_position: Vec2, mouse_key: Key, _delta_time: f32) {
        self.sync_from_reference();
        let before = self.last_reference;

        let on_knob = self.knob_box().hit_test(mouse_claimed, mouse_position);
        let on_track = self.track_box().hit_test(mouse_claimed, mouse_position);

        if self.dragging {
            if mouse_key.is_down() {
                self.drag_to(mouse_position);
            } else {
                self.dragging = false;
                debug!(value = self.value_in_span, "slider released");
            }
        } else if on_knob && mouse_key.pressed() {
            self.dragging = true;
            debug!(value = self.value_in_span, "slider knob grabbed");
        } else if on_track && mouse_key.is_down() {
            self.dragging = true;
            self.drag_to(mouse_position);
            debug!(value = self.value_in_span, "slider jumped to track");
        }

        self.collides_with_mouse = on_knob || on_track;

        if (self.last_reference - before).abs() > EPSILON {
            if let Some(action) = self.on_change.as_mut() {
                action();
            }
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.track_box().draw_box(surface);

        if let Some(color) = self.track_style.content_color.or(self.track_style.fill_color) {
            let markers = [Some(&self.range.min), Some(&self.range.max), self.default_value.as_ref()];
            for value in markers.into_iter().flatten().chain(&self.values_to_display) {
                self.draw_marker(surface, value, color);
            }
        }

        self.knob_box().draw_box(surface);
    }

    fn collides_with_mouse(&self) -> bool {
        self.collides_with_mouse
    }

    fn active(&self) -> bool {
        self.dragging
    }
}
