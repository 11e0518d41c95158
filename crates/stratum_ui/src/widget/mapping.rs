//! Value-domain mappings between a slider's value in span and the value
//! published through its reference.

use crate::error::{UiError, UiResult};

use super::slider::{SliderRange, SliderValue};

/// Maps the linear value in span to the published reference value and back.
///
/// `to_reference` must be idempotent through a round trip:
/// `to_reference(to_value_in_span(to_reference(v))) == to_reference(v)`.
pub trait ValueMapping {
    /// Published value for a point in the span.
    fn to_reference(&self, value_in_span: f32, range: &SliderRange) -> f32;

    /// Point in the span for a published value.
    fn to_value_in_span(&self, reference: f32, range: &SliderRange) -> f32;
}

/// Identity mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FreeMapping;

impl ValueMapping for FreeMapping {
    fn to_reference(&self, value_in_span: f32, _range: &SliderRange) -> f32 {
        value_in_span
    }

    fn to_value_in_span(&self, reference: f32, _range: &SliderRange) -> f32 {
        reference
    }
}

/// Snaps to the nearest `offset + k * step`, clamped to the range.
///
/// A remainder below half a step rounds down, anything else rounds up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepMapping {
    step: f32,
    offset: f32,
}

impl StepMapping {
    /// Creates a mapping. `step` must be positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidStep`] otherwise.
    pub fn new(step: f32, offset: f32) -> UiResult<Self> {
        if !step.is_finite() || step <= 0.0 || !offset.is_finite() {
            return Err(UiError::InvalidStep(step));
        }
        Ok(Self { step, offset })
    }

    /// Step size.
    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Phase offset of the grid.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Nearest grid value, not clamped.
    #[must_use]
    pub fn snap(&self, value: f32) -> f32 {
        let remainder = (value - self.offset).rem_euclid(self.step);
        let below = value - remainder;
        if remainder < self.step / 2.0 {
            below
        } else {
            below + self.step
        }
    }
}

impl ValueMapping for StepMapping {
    fn to_reference(&self, value_in_span: f32, range: &SliderRange) -> f32 {
        self.snap(value_in_span).clamp(range.lower(), range.upper())
    }

    fn to_value_in_span(&self, reference: f32, _range: &SliderRange) -> f32 {
        reference
    }
}

/// Buckets the span into an ordered list of published values.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteMapping {
    values: Vec<SliderValue>,
}

impl DiscreteMapping {
    /// Creates a mapping over at least two values, ordered by position.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::TooFewDiscreteValues`] otherwise.
    pub fn new(mut values: Vec<SliderValue>) -> UiResult<Self> {
        if values.len() < 2 {
            return Err(UiError::TooFewDiscreteValues(values.len()));
        }
        values.sort_by(|a, b| a.position.total_cmp(&b.position));
        Ok(Self { values })
    }

    /// Published values, lowest position first.
    #[must_use]
    pub fn values(&self) -> &[SliderValue] {
        &self.values
    }

    /// Index of the value nearest to `value_in_span`. Ties go to the lower index.
    #[must_use]
    pub fn index_of(&self, value_in_span: f32) -> usize {
        let mut best = 0;
        let mut best_distance = f32::INFINITY;
        for (index, value) in self.values.iter().enumerate() {
            let distance = (value.position - value_in_span).abs();
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }
        best
    }

    /// Value nearest to `value_in_span`.
    #[must_use]
    pub fn selected(&self, value_in_span: f32) -> &SliderValue {
        &self.values[self.index_of(value_in_span)]
    }
}

impl ValueMapping for DiscreteMapping {
    fn to_reference(&self, value_in_span: f32, _range: &SliderRange) -> f32 {
        self.selected(value_in_span).position
    }

    fn to_value_in_span(&self, reference: f32, _range: &SliderRange) -> f32 {
        reference
    }
}
