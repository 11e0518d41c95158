//! Widget system for UI components.
//!
//! Every widget implements [`UiElement`] and is owned by a layer of the
//! [`UiContext`](crate::UiContext).

mod basic;
mod box_model;
mod button;
mod checkbox;
mod core;
mod mapping;
mod slider;

pub use basic::{BoxElement, Text, TextBox};
pub use box_model::BoxModel;
pub use button::{Button, ButtonState, TextButton, TriangleButton};
pub use checkbox::{CheckStyle, Checkbox};
pub use self::core::{Action, AsAny, UiElement};
pub use mapping::{DiscreteMapping, FreeMapping, StepMapping, ValueMapping};
pub use slider::{
    Orientation, Slider, SliderDiscrete, SliderFree, SliderGeometry, SliderRange, SliderValue,
    SliderWithStep,
};
